//! Index arithmetic shared by grid-shaped domains.
//!
//! A location is a 1-based linear index; a multi-index holds one 1-based
//! position per axis. Linearization is column-major: the first axis varies
//! fastest, so on a `[3, 2]` grid locations `1, 2, 3` are `[1,1], [2,1],
//! [3,1]` and location `4` is `[1,2]`.

use strata_core::DomainError;

/// Convert a 1-based multi-index into a 1-based linear location.
///
/// `multi` must have one entry per axis, each in `[1, dims[d]]`.
///
/// # Examples
///
/// ```
/// use strata_domain::index::linear_index;
///
/// assert_eq!(linear_index(&[3, 2], &[1, 1]), 1);
/// assert_eq!(linear_index(&[3, 2], &[3, 1]), 3);
/// assert_eq!(linear_index(&[3, 2], &[1, 2]), 4);
/// ```
pub fn linear_index(dims: &[usize], multi: &[usize]) -> usize {
    debug_assert_eq!(dims.len(), multi.len());
    let mut location = 0;
    let mut stride = 1;
    for (&n, &i) in dims.iter().zip(multi) {
        debug_assert!(i >= 1 && i <= n, "multi-index {i} outside [1, {n}]");
        location += (i - 1) * stride;
        stride *= n;
    }
    location + 1
}

/// Decompose a 1-based linear `location` into a 1-based multi-index.
///
/// Inverse of [`linear_index`]. `location` must be in
/// `[1, product(dims)]` and `out.len() == dims.len()`.
///
/// # Examples
///
/// ```
/// use strata_domain::index::multi_index;
///
/// let mut out = [0; 2];
/// multi_index(&[3, 2], 5, &mut out);
/// assert_eq!(out, [2, 2]);
/// ```
pub fn multi_index(dims: &[usize], location: usize, out: &mut [usize]) {
    debug_assert_eq!(dims.len(), out.len());
    debug_assert!(location >= 1);
    let mut rem = location - 1;
    for (slot, &n) in out.iter_mut().zip(dims) {
        *slot = rem % n + 1;
        rem /= n;
    }
}

/// Validate grid dimensions and return their product.
///
/// Rejects an empty `dims`, any zero axis, and products that overflow.
pub(crate) fn validate_dims(dims: &[usize]) -> Result<usize, DomainError> {
    if dims.is_empty() {
        return Err(DomainError::ZeroDimensional);
    }
    let mut npoints: usize = 1;
    for (axis, &n) in dims.iter().enumerate() {
        if n == 0 {
            return Err(DomainError::EmptyAxis { axis });
        }
        npoints = npoints
            .checked_mul(n)
            .ok_or_else(|| DomainError::TooLarge {
                dims: dims.to_vec(),
            })?;
    }
    Ok(npoints)
}

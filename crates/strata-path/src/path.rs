//! The `Path` trait.

/// A finite, restartable ordering of every location of a domain.
///
/// Every call to [`iter`](Self::iter) yields the same sequence. Elements
/// are 1-based locations; each location in `[1, len]` appears exactly once.
pub trait Path {
    /// Number of elements, equal to the domain's `npoints`.
    fn len(&self) -> usize;

    /// `true` if the path has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the locations in visiting order.
    fn iter(&self) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Collect the visiting order.
    fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for &'a dyn Path {
    type Item = usize;
    type IntoIter = Box<dyn Iterator<Item = usize> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Implement `IntoIterator for &T` by delegating to [`Path::iter`].
macro_rules! impl_into_iter {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> IntoIterator for &'a $ty {
                type Item = usize;
                type IntoIter = Box<dyn Iterator<Item = usize> + 'a>;

                fn into_iter(self) -> Self::IntoIter {
                    $crate::path::Path::iter(self)
                }
            }
        )*
    };
}

pub(crate) use impl_into_iter;

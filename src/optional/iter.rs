//! Iterators over the zero or one values of an [`Optional`].

use super::Optional;
use std::iter::FusedIterator;

/// Borrowing iterator returned by [`Optional::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) const fn new(inner: Option<&'a T>) -> Self {
        Self { inner }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = usize::from(self.inner.is_some());
        (length, Some(length))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator returned by `Optional::into_iter`.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let length = usize::from(self.inner.is_some());
        (length, Some(length))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Yields the contained value once, or nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::Optional;
    ///
    /// let mut values = vec![1];
    /// values.extend(Optional::some(2));
    /// values.extend(Optional::<i32>::none());
    /// assert_eq!(values, vec![1, 2]);
    /// ```
    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.into_option(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_iter_yields_present_value_once() {
        let value = Optional::some(5);
        let mut iterator = value.iter();
        assert_eq!(iterator.len(), 1);
        assert_eq!(iterator.next(), Some(&5));
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next(), None);
    }

    #[rstest]
    fn test_iter_on_absent_is_empty() {
        let value: Optional<i32> = Optional::none();
        assert_eq!(value.iter().count(), 0);
        assert_eq!(value.into_iter().size_hint(), (0, Some(0)));
    }
}

//! Overflow-checked products of iterators, the multiplying counterpart to `checked_sum`.

use num_traits::{CheckedMul, One};

/// Iterator extension for multiplying every item, stopping at the first overflow.
pub trait CheckedProduct<T> {
    /// The product of all items, or `None` if it overflows `T`. An empty iterator gives one.
    fn checked_product(self) -> Option<T>;
}

impl<T, I> CheckedProduct<T> for I
where
    T: CheckedMul + One,
    I: IntoIterator<Item = T>,
{
    fn checked_product(self) -> Option<T> {
        self.into_iter()
            .try_fold(T::one(), |product, factor| product.checked_mul(&factor))
    }
}

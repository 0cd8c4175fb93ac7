use std::iter::FusedIterator;
use std::ops::{Bound, RangeBounds};
use std::sync::Arc;

use crate::error::{Result, WordRankError};

/// A finite, immutable, 0-indexed sequence whose items may be computed on
/// demand rather than stored.
///
/// Negative indices count back from the end, so `at(-1)` is the last item.
pub trait Indexable {
    type Item;

    fn len(&self) -> usize;

    fn at(&self, index: isize) -> Result<Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Collect the items in `range`. Bounds follow slice conventions: negative
    /// bounds count from the end and both ends are clamped to `[0, len]`.
    fn slice<R: RangeBounds<isize>>(&self, range: R) -> Result<Vec<Self::Item>> {
        let (start, end) = clamp_range(&range, self.len());
        (start..end).map(|i| self.at(i as isize)).collect()
    }

    /// Walk every item in rank order. Calling `items` again starts over.
    fn items(&self) -> Iter<'_, Self> {
        Iter {
            source: self,
            front: 0,
            back: self.len(),
        }
    }
}

/// Resolve a possibly negative index against `len`.
pub fn normalize_index(index: isize, len: usize) -> Result<usize> {
    let resolved = if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        Some(index as usize)
    };
    match resolved {
        Some(i) if i < len => Ok(i),
        _ => Err(WordRankError::IndexOutOfRange { index, len }),
    }
}

/// Convert a computed length into a `usize` that every valid index can also
/// be expressed in as an `isize`.
pub fn checked_len(value: u128) -> Result<usize> {
    if value > isize::MAX as u128 {
        return Err(WordRankError::Overflow { size: value });
    }
    Ok(value as usize)
}

fn clamp_bound(bound: isize, len: usize) -> usize {
    if bound < 0 {
        len.saturating_sub(bound.unsigned_abs())
    } else {
        (bound as usize).min(len)
    }
}

/// Position just past `bound`, for inclusive ends and exclusive starts.
fn clamp_after(bound: isize, len: usize) -> usize {
    if bound < 0 {
        len.checked_sub(bound.unsigned_abs()).map_or(0, |i| i + 1)
    } else {
        clamp_bound(bound.saturating_add(1), len)
    }
}

fn clamp_range<R: RangeBounds<isize>>(range: &R, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&s) => clamp_bound(s, len),
        Bound::Excluded(&s) => clamp_after(s, len),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => clamp_after(e, len),
        Bound::Excluded(&e) => clamp_bound(e, len),
        Bound::Unbounded => len,
    };
    (start, end.max(start))
}

/// Lazy iterator over an [`Indexable`], yielding `at(0)`, `at(1)`, ...
pub struct Iter<'a, I: ?Sized> {
    source: &'a I,
    front: usize,
    back: usize,
}

impl<'a, I: Indexable + ?Sized> Iterator for Iter<'a, I> {
    type Item = Result<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.source.at(self.front as isize);
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<'a, I: Indexable + ?Sized> DoubleEndedIterator for Iter<'a, I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.source.at(self.back as isize))
    }
}

impl<'a, I: Indexable + ?Sized> ExactSizeIterator for Iter<'a, I> {}

impl<'a, I: Indexable + ?Sized> FusedIterator for Iter<'a, I> {}

impl<T: Clone> Indexable for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn at(&self, index: isize) -> Result<T> {
        let i = normalize_index(index, <[T]>::len(self))?;
        Ok(self[i].clone())
    }
}

impl<T: Clone> Indexable for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn at(&self, index: isize) -> Result<T> {
        Indexable::at(self.as_slice(), index)
    }
}

impl<T: Clone> Indexable for Arc<[T]> {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn at(&self, index: isize) -> Result<T> {
        Indexable::at(&**self, index)
    }
}

impl<'a, I: Indexable + ?Sized> Indexable for &'a I {
    type Item = I::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn at(&self, index: isize) -> Result<I::Item> {
        I::at(*self, index)
    }
}

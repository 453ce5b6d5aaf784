// > Trimmed fork of <https://github.com/cloudhead/non_empty_vec>.

use rand::RngExt as _;
use serde::{
    Deserialize, Serialize,
    ser::{SerializeSeq, Serializer},
};

use std::convert::TryFrom;
use std::iter;
use std::vec::{self, Vec};

/// Like the `vec!` macro, but enforces at least one argument. A nice short-hand
/// for constructing [`NonEmptyVec`] values.
///
/// ```
/// use fake_useragent_utils::collections::{NonEmptyVec, non_empty_vec};
///
/// let v = non_empty_vec!["chrome", "firefox"];
/// assert_eq!(v, NonEmptyVec { head: "chrome", tail: vec!["firefox"] });
///
/// let v = non_empty_vec!["chrome",];
/// assert_eq!(v, NonEmptyVec::new("chrome"));
///
/// // Doesn't compile!
/// // let v: NonEmptyVec<&str> = non_empty_vec![];
/// ```
#[macro_export]
#[doc(hidden)]
macro_rules! __non_empty_vec {
    ($h:expr, $( $x:expr ),* $(,)?) => {{
        let tail = $crate::collections::__macro_support::vec![$($x),*];
        $crate::collections::NonEmptyVec { head: $h, tail }
    }};
    ($h:expr) => {
        $crate::collections::NonEmptyVec {
            head: $h,
            tail: $crate::collections::__macro_support::vec![],
        }
    };
}

/// A non-empty growable vector.
///
/// Agent tables hold one of these per category, which makes
/// an empty category unrepresentable instead of a runtime condition
/// that every selection has to check for.
///
/// Unlike picking from a `Vec`, [`NonEmptyVec::choose`]
/// doesn't return an `Option`, it always succeeds.
///
/// Since a `NonEmptyVec` must have at least one element, it is not possible to
/// implement the [`FromIterator`] trait for it. Use [`NonEmptyVec::collect`]
/// or [`NonEmptyVec::try_from`] instead.
#[derive(Deserialize)]
#[serde(try_from = "Vec<T>")]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T> {
    pub head: T,
    pub tail: Vec<T>,
}

// Nb. `Serialize` is implemented manually, as serde's `into` container attribute
// requires a `T: Clone` bound which we'd like to avoid.
impl<T> Serialize for NonEmptyVec<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for e in self {
            seq.serialize_element(e)?;
        }
        seq.end()
    }
}

/// Iterator for [`NonEmptyVec`].
#[derive(Debug)]
pub struct NonEmptyVecIter<'a, T> {
    head: Option<&'a T>,
    tail: &'a [T],
}

impl<'a, T> Iterator for NonEmptyVecIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.head.take() {
            Some(value)
        } else if let Some((first, rest)) = self.tail.split_first() {
            self.tail = rest;
            Some(first)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for NonEmptyVecIter<'_, T> {
    fn len(&self) -> usize {
        self.tail.len() + self.head.map_or(0, |_| 1)
    }
}

impl<T> std::iter::FusedIterator for NonEmptyVecIter<'_, T> {}

impl<T> NonEmptyVec<T> {
    /// Create a new non-empty list with an initial element.
    pub const fn new(head: T) -> Self {
        Self {
            head,
            tail: Vec::new(),
        }
    }

    /// Attempt to convert an iterator into a `NonEmptyVec` vector.
    /// Returns `None` if the iterator was empty.
    pub fn collect<I>(iter: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();
        let head = iter.next()?;
        Some(Self {
            head,
            tail: iter.collect(),
        })
    }

    /// Always returns false.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Push an element to the end of the list.
    pub fn push(&mut self, e: T) {
        self.tail.push(e)
    }

    /// Get the length of the list.
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// ```
    /// use fake_useragent_utils::collections::non_empty_vec;
    ///
    /// let l = non_empty_vec![42, 36, 58];
    /// let mut l_iter = l.iter();
    ///
    /// assert_eq!(l_iter.len(), 3);
    /// assert_eq!(l_iter.next(), Some(&42));
    /// assert_eq!(l_iter.next(), Some(&36));
    /// assert_eq!(l_iter.next(), Some(&58));
    /// assert_eq!(l_iter.next(), None);
    /// ```
    pub fn iter(&self) -> NonEmptyVecIter<'_, T> {
        NonEmptyVecIter {
            head: Some(&self.head),
            tail: &self.tail,
        }
    }

    /// Consume a `Vec`, returning `None` in case it is empty.
    #[must_use]
    pub fn from_vec(mut vec: Vec<T>) -> Option<Self> {
        if vec.is_empty() {
            None
        } else {
            let head = vec.remove(0);
            Some(Self { head, tail: vec })
        }
    }

    /// Map each element to another value, preserving non-emptiness.
    pub fn map<U, F>(self, mut f: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        NonEmptyVec {
            head: f(self.head),
            tail: self.tail.into_iter().map(f).collect(),
        }
    }

    /// Pick a uniformly random index within the bounds of this list.
    pub fn choose_index<R>(&self, rng: &mut R) -> usize
    where
        R: rand::Rng + ?Sized,
    {
        rng.random_range(0..self.len())
    }

    /// Pick a uniformly random element from this list. Never fails.
    ///
    /// ```
    /// use fake_useragent_utils::collections::non_empty_vec;
    ///
    /// let l = non_empty_vec!["a", "b", "c"];
    /// let picked = l.choose(&mut rand::rng());
    /// assert!(l.iter().any(|e| e == picked));
    /// ```
    pub fn choose<R>(&self, rng: &mut R) -> &T
    where
        R: rand::Rng + ?Sized,
    {
        let index = self.choose_index(rng);
        if index == 0 {
            &self.head
        } else {
            // index < len, so it always falls within the tail
            self.tail.get(index - 1).unwrap_or(&self.head)
        }
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = iter::Chain<iter::Once<T>, vec::IntoIter<Self::Item>>;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(self.head).chain(self.tail)
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = NonEmptyVecIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> std::ops::Index<usize> for NonEmptyVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        if index > 0 {
            &self.tail[index - 1]
        } else {
            &self.head
        }
    }
}

impl<A> Extend<A> for NonEmptyVec<A> {
    fn extend<T: IntoIterator<Item = A>>(&mut self, iter: T) {
        self.tail.extend(iter)
    }
}

impl<T> TryFrom<Vec<T>> for NonEmptyVec<T> {
    type Error = NonEmptyVecEmptyError;

    fn try_from(vec: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(vec).ok_or(NonEmptyVecEmptyError)
    }
}

crate::macros::error::static_str_error! {
    #[doc = "empty value cannot be turned into a NonEmptyVec"]
    pub struct NonEmptyVecEmptyError;
}

use std::fmt;
use std::marker::PhantomData;
use std::num::NonZeroU32;
use std::ops::{Deref, DerefMut, Index, IndexMut};

pub struct IndexedVec<I, T> {
    vec: Vec<T>,
    _marker: PhantomData<I>,
}

impl<I, T> Deref for IndexedVec<I, T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.vec
    }
}

impl<I, T> DerefMut for IndexedVec<I, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.vec
    }
}

impl<I: AsIndex, T> IndexedVec<I, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: T) -> I {
        let index = I::from_usize(self.len());
        self.vec.push(value);
        index
    }

    pub fn indices(&self) -> impl Iterator<Item = I> + DoubleEndedIterator + ExactSizeIterator {
        (0..self.len()).map(I::from_usize)
    }

    pub fn enumerate(
        &self,
    ) -> impl Iterator<Item = (I, &T)> + DoubleEndedIterator + ExactSizeIterator {
        self.vec.iter().enumerate().map(|(i, t)| (I::from_usize(i), t))
    }
}

impl<I, T> Default for IndexedVec<I, T> {
    fn default() -> Self {
        Vec::new().into()
    }
}

impl<I: AsIndex, T> Index<I> for IndexedVec<I, T> {
    type Output = T;

    fn index(&self, index: I) -> &Self::Output {
        &self.vec[index.to_usize()]
    }
}

impl<I: AsIndex, T> IndexMut<I> for IndexedVec<I, T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.vec[index.to_usize()]
    }
}

impl<I, T> From<Vec<T>> for IndexedVec<I, T> {
    fn from(value: Vec<T>) -> Self {
        Self { vec: value, _marker: PhantomData }
    }
}

impl<I, T> FromIterator<T> for IndexedVec<I, T> {
    fn from_iter<IT: IntoIterator<Item = T>>(iter: IT) -> Self {
        Vec::from_iter(iter).into()
    }
}

pub trait AsIndex: Copy {
    fn to_usize(&self) -> usize;
    fn from_usize(index: usize) -> Self;
}

// Arenas are dense, so a u32 payload is plenty and halves the footprint of
// the per-state tables.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonMaxU32(NonZeroU32);

impl NonMaxU32 {
    pub const fn new(n: u32) -> Self {
        match NonZeroU32::new(n.wrapping_add(1)) {
            Some(n) => Self(n),
            None => panic!(),
        }
    }

    pub const fn get(self) -> u32 {
        self.0.get() - 1
    }
}

impl Default for NonMaxU32 {
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Debug for NonMaxU32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.get(), f)
    }
}

macro_rules! new_index {
    ($(#[$($meta:tt)*])* $vis:vis index $ty:ident) => {
        $(#[$($meta)*])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $ty { index: $crate::index::NonMaxU32 }

        #[allow(non_snake_case)]
        $vis const fn $ty(index: usize) -> $ty {
            $ty { index: $crate::index::NonMaxU32::new(index as u32) }
        }

        impl $crate::index::AsIndex for $ty {
            fn to_usize(&self) -> usize {
                self.index.get() as usize
            }

            fn from_usize(index: usize) -> Self {
                $ty(index)
            }
        }
    };
}
pub(crate) use new_index;

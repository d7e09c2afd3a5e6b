use core::{fmt::Debug, hash::Hash};

/// Types that represent integer ids.
///
/// A type of this trait represents a `usize` index value in the range
/// `0..=Self::MAX_ID_INDEX`, with the specific representation used up to the
/// implementing type. In particular a type can store its index with an offset
/// (e.g. 1-based numbering over a `NonZeroU32`) and thereby leave space for
/// rustc's niche-value optimization, making `Option<T>` the same size as `T`.
///
/// Implementing types must order, compare and hash ids exactly as they would
/// the represented index.
pub trait Id: Copy + Ord + Hash + Debug {
    /// The largest index representable by this id type.
    const MAX_ID_INDEX: usize;

    /// Returns the id with a given index, if it is valid.
    ///
    /// This returns `None` if and only if `index > Self::MAX_ID_INDEX`. Never
    /// panics.
    fn try_from_id_index(index: usize) -> Option<Self>;

    /// Returns the index represented by this id.
    fn id_index(self) -> usize;

    /// Returns the id with a given index, panicking when the index is
    /// invalid.
    ///
    /// This panics if and only if `index > Self::MAX_ID_INDEX`.
    #[inline]
    #[track_caller]
    fn from_id_index(index: usize) -> Self {
        Self::try_from_id_index(index)
            .unwrap_or_else(|| panic!("id index {index} exceeds the id type's range"))
    }
}

macro_rules! primitive_impl {
    ($($t:ty),*) => {
        $(
            impl Id for $t {
                const MAX_ID_INDEX: usize = {
                    let max = <$t>::MAX as u128;
                    let largest_index = usize::MAX as u128;
                    if max < largest_index { max as usize } else { usize::MAX }
                };

                #[inline]
                fn try_from_id_index(index: usize) -> Option<Self> {
                    <$t>::try_from(index).ok()
                }

                #[inline]
                fn id_index(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

primitive_impl!(u8, u16, u32, usize);

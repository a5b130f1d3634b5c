use core::fmt::{Binary, Debug, Formatter};
use core::iter::{FusedIterator, Iterator};
use core::ops::{BitAnd, BitOr, BitXor, Not, Sub};

/// Number of flags a [`Bits`] value can hold.
pub const FLAG_COUNT: usize = 8;

/// Flag at bit 0 (`0b0000_0001`).
pub const F0: Bits = Bits::flag(0);
/// Flag at bit 1 (`0b0000_0010`).
pub const F1: Bits = Bits::flag(1);
/// Flag at bit 2 (`0b0000_0100`).
pub const F2: Bits = Bits::flag(2);
/// Flag at bit 3 (`0b0000_1000`).
pub const F3: Bits = Bits::flag(3);
/// Flag at bit 4 (`0b0001_0000`).
pub const F4: Bits = Bits::flag(4);
/// Flag at bit 5 (`0b0010_0000`).
pub const F5: Bits = Bits::flag(5);
/// Flag at bit 6 (`0b0100_0000`).
pub const F6: Bits = Bits::flag(6);
/// Flag at bit 7 (`0b1000_0000`).
pub const F7: Bits = Bits::flag(7);

/// Sets every flag of `b` that is set in `flag`.
///
/// Flags not present in `flag` keep their value from `b`.
///
/// # Examples
/// ```
/// use light_flags::{Bits, F0, set};
///
/// let b = set(Bits::new(0b1000_0000), F0);
/// assert_eq!(b, Bits::new(0b1000_0001));
/// ```
#[inline]
pub const fn set(b: Bits, flag: Bits) -> Bits {
    Bits(b.0 | flag.0)
}

/// Clears every flag of `b` that is set in `flag`.
///
/// # Examples
/// ```
/// use light_flags::{Bits, clear};
///
/// let b = clear(Bits::FULL, Bits::new(0b1000_0001));
/// assert_eq!(b, Bits::new(0b0111_1110));
/// ```
#[inline]
pub const fn clear(b: Bits, flag: Bits) -> Bits {
    Bits(b.0 & !flag.0)
}

/// Flips every flag of `b` that is set in `flag`.
///
/// # Examples
/// ```
/// use light_flags::{Bits, toggle};
///
/// let b = toggle(Bits::new(0b1111_0000), Bits::new(0b1000_1000));
/// assert_eq!(b, Bits::new(0b0111_1000));
/// ```
#[inline]
pub const fn toggle(b: Bits, flag: Bits) -> Bits {
    Bits(b.0 ^ flag.0)
}

/// Returns `true` if `b` and `flag` share at least one set flag.
///
/// The empty mask is never contained, not even in [`Bits::FULL`], and the
/// empty set contains nothing.
///
/// # Examples
/// ```
/// use light_flags::{Bits, F0, has};
///
/// assert!(has(Bits::FULL, F0));
/// assert!(!has(Bits::EMPTY, F0));
/// assert!(!has(Bits::FULL, Bits::EMPTY));
/// ```
#[inline]
pub const fn has(b: Bits, flag: Bits) -> bool {
    b.0 & flag.0 != 0
}

/// A set of up to eight boolean flags stored in a single `u8`.
///
/// The same type is used for the set being operated on and for the mask
/// describing which flags to operate on. Values are never modified in place:
/// every operation returns a new `Bits`.
#[derive(PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord, Default)]
pub struct Bits(pub(crate) u8);

impl Bits {
    /// The set with no flags set.
    pub const EMPTY: Self = Self(0);

    /// The set with all eight flags set.
    pub const FULL: Self = Self(!0);

    /// Creates a flag set from its raw bit representation.
    ///
    /// # Examples
    /// ```
    /// use light_flags::{Bits, F0, F7};
    ///
    /// assert_eq!(Bits::new(0b1000_0001), F0 | F7);
    /// ```
    #[inline]
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Returns the single-flag value at bit position `idx`.
    ///
    /// # Panics
    /// Panics if `idx >= 8`. In const contexts this prevents compilation.
    ///
    /// # Examples
    /// ```
    /// use light_flags::{Bits, F3};
    ///
    /// assert_eq!(Bits::flag(3), F3);
    /// assert_eq!(Bits::flag(3).bits(), 8);
    /// ```
    #[inline]
    pub const fn flag(idx: usize) -> Self {
        assert!(idx < FLAG_COUNT, "Flag index out of bounds");
        Self(1 << idx)
    }

    /// Constructs a flag set with only the flags at the given indices set.
    ///
    /// # Panics
    /// Panics if any index is `>= 8`.
    ///
    /// # Examples
    /// ```
    /// use light_flags::{Bits, F0, F2, F4};
    ///
    /// assert_eq!(Bits::from_ones_iter([0, 2, 4]), F0 | F2 | F4);
    /// ```
    pub fn from_ones_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut bits = Self::EMPTY;
        for idx in iter {
            assert!(idx < FLAG_COUNT, "Flag index {idx} out of bounds");
            bits = bits.set(Self::flag(idx));
        }
        bits
    }

    /// Returns the raw bit representation.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns a copy of `self` with every flag in `mask` set.
    ///
    /// Method form of [`set`].
    ///
    /// # Examples
    /// ```
    /// use light_flags::{Bits, F1, F5};
    ///
    /// let b = Bits::EMPTY.set(F1).set(F5);
    /// assert_eq!(b.bits(), 0b0010_0010);
    /// ```
    #[inline]
    #[must_use = "`set` returns a new value and leaves `self` unchanged"]
    pub const fn set(self, mask: Self) -> Self {
        set(self, mask)
    }

    /// Returns a copy of `self` with every flag in `mask` cleared.
    ///
    /// Method form of [`clear`].
    ///
    /// # Examples
    /// ```
    /// use light_flags::{Bits, F0, F7};
    ///
    /// assert_eq!(Bits::FULL.clear(F0 | F7).bits(), 0b0111_1110);
    /// ```
    #[inline]
    #[must_use = "`clear` returns a new value and leaves `self` unchanged"]
    pub const fn clear(self, mask: Self) -> Self {
        clear(self, mask)
    }

    /// Returns a copy of `self` with every flag in `mask` flipped.
    ///
    /// Method form of [`toggle`].
    ///
    /// # Examples
    /// ```
    /// use light_flags::{Bits, F4};
    ///
    /// let b = Bits::EMPTY.toggle(F4);
    /// assert_eq!(b, F4);
    /// assert_eq!(b.toggle(F4), Bits::EMPTY);
    /// ```
    #[inline]
    #[must_use = "`toggle` returns a new value and leaves `self` unchanged"]
    pub const fn toggle(self, mask: Self) -> Self {
        toggle(self, mask)
    }

    /// Returns `true` if `self` and `mask` share at least one set flag.
    ///
    /// Method form of [`has`].
    ///
    /// # Examples
    /// ```
    /// use light_flags::{Bits, F0, F1};
    ///
    /// assert!((F0 | F1).has(F1));
    /// assert!(!F0.has(F1));
    /// ```
    #[inline]
    pub const fn has(self, mask: Self) -> bool {
        has(self, mask)
    }

    /// Returns `true` if no flag is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if all eight flags are set.
    #[inline]
    pub const fn is_full(self) -> bool {
        self.0 == !0
    }

    /// Returns the number of set flags.
    ///
    /// # Examples
    /// ```
    /// use light_flags::{Bits, F2, F6};
    ///
    /// assert_eq!((F2 | F6).popcount(), 2);
    /// assert_eq!(Bits::FULL.popcount(), 8);
    /// ```
    #[inline]
    pub const fn popcount(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns the index of the lowest set flag or `None` if no flag is set.
    ///
    /// # Examples
    /// ```
    /// use light_flags::{Bits, F3, F6};
    ///
    /// assert_eq!(Bits::EMPTY.first_set_flag(), None);
    /// assert_eq!((F3 | F6).first_set_flag(), Some(3));
    /// ```
    #[inline]
    pub const fn first_set_flag(self) -> Option<usize> {
        if self.0 == 0 {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }

    /// Returns an iterator over the indices of all set flags, in ascending
    /// order.
    ///
    /// # Examples
    /// ```
    /// use light_flags::{F0, F2, F7};
    /// use core::array::from_fn;
    ///
    /// let mut ones = (F0 | F2 | F7).iter_ones();
    /// assert_eq!(ones.len(), 3);
    /// let ones = from_fn(|_| ones.next().unwrap_or(999));
    /// assert_eq!(ones, [0, 2, 7, 999]);
    /// ```
    #[inline]
    pub fn iter_ones(self) -> IterOnes {
        IterOnes { current: self.0 }
    }

    /// Returns an iterator over the indices of all unset flags, in ascending
    /// order.
    ///
    /// # Examples
    /// ```
    /// use light_flags::Bits;
    /// use core::array::from_fn;
    ///
    /// let mut zeros = Bits::new(0b1111_1010).iter_zeros();
    /// let zeros = from_fn(|_| zeros.next().unwrap_or(999));
    /// assert_eq!(zeros, [0, 2, 999]);
    /// ```
    #[inline]
    pub fn iter_zeros(self) -> IterZeros {
        IterZeros {
            ones: IterOnes { current: !self.0 },
        }
    }
}

impl From<u8> for Bits {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<Bits> for u8 {
    fn from(bits: Bits) -> Self {
        bits.0
    }
}

impl Debug for Bits {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "Bits({:#010b})", self.0)
    }
}

impl Binary for Bits {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Binary::fmt(&self.0, f)
    }
}

/// Unions all yielded masks. An empty iterator yields [`Bits::EMPTY`].
impl FromIterator<Bits> for Bits {
    fn from_iter<T: IntoIterator<Item = Bits>>(iter: T) -> Self {
        iter.into_iter().fold(Self::EMPTY, set)
    }
}

impl BitOr for Bits {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        set(self, rhs)
    }
}

impl BitAnd for Bits {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitXor for Bits {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        toggle(self, rhs)
    }
}

/// Set difference, same as [`clear`].
impl Sub for Bits {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        clear(self, rhs)
    }
}

impl Not for Bits {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

/// Iterator over the indices of set flags.
///
/// Yields the positions of all flags that are set, in ascending order.
///
/// Returned by [`Bits::iter_ones()`].
#[derive(Clone, Copy, Debug)]
pub struct IterOnes {
    current: u8,
}

impl Iterator for IterOnes {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == 0 {
            return None;
        }
        let idx = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1; // unset LSB
        Some(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.current.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for IterOnes {}

impl FusedIterator for IterOnes {}

/// Iterator over the indices of unset flags.
///
/// Yields the positions of all flags that are unset, in ascending order.
///
/// Returned by [`Bits::iter_zeros()`].
#[derive(Clone, Copy, Debug)]
pub struct IterZeros {
    ones: IterOnes,
}

impl Iterator for IterZeros {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.ones.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ones.size_hint()
    }
}

impl ExactSizeIterator for IterZeros {}

impl FusedIterator for IterZeros {}

//! A minimal, value-typed 8-bit flag set written in pure Rust.
//! `no_std`, no heap / `alloc`, no `unsafe`, just `core`.
//!
//! [`Bits`] is a single `u8` treated as eight independent boolean flags. The
//! named constants [`F0`] to [`F7`] are the single-bit flags from bit 0 (`1`)
//! to bit 7 (`128`). A flag set and a flag mask share the same type: the first
//! argument of an operation is the set being operated on, the second one is
//! the mask of flags to operate on.
//!
//! # Examples
//! ```
//! use light_flags::{Bits, F0, F7, clear, has, set, toggle};
//!
//! let b = set(Bits::EMPTY, F0 | F7);
//! assert_eq!(b.bits(), 0b1000_0001);
//! assert!(has(b, F7));
//!
//! let b = clear(b, F7);
//! assert!(!has(b, F7));
//!
//! let b = toggle(b, F0);
//! assert_eq!(b, Bits::EMPTY);
//! ```
//!
//! # Operations
//!
//! | Function | Method | Operator | Result |
//! |----------|--------|----------|--------|
//! | [`set`] | [`Bits::set`] | `a \| b` | flags of `b` turned on |
//! | [`clear`] | [`Bits::clear`] | `a - b` | flags of `b` turned off |
//! | [`toggle`] | [`Bits::toggle`] | `a ^ b` | flags of `b` flipped |
//! | [`has`] | [`Bits::has`] | | `true` if `a` and `b` share a flag |
//!
//! All four are `const fn`, total over every input and never panic. None of
//! them modifies its arguments; every call returns a new value, which is why
//! there are no `|=`-style assigning operators.
//!
//! # Features
//!
//! - `#![no_std]` compatible
//! - Every flag operation usable in `const` contexts
//! - Queries: `popcount`, `first_set_flag`, `is_empty`, `is_full`
//! - Iteration over the indices of set or unset flags:
//!   - `iter_ones()`
//!   - `iter_zeros()`
//! - `Debug` prints all eight bits, MSB first: `Bits(0b10000001)`

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

mod bits;

pub use bits::{
    Bits, F0, F1, F2, F3, F4, F5, F6, F7, FLAG_COUNT, IterOnes, IterZeros, clear, has, set,
    toggle,
};

use light_flags::{Bits, F0, F3, F7, clear, has, set, toggle};

const READY: Bits = set(F0, F7);
const STALE: Bits = clear(READY, F7);
const FLIPPED: Bits = toggle(STALE, F3);
const READY_HAS_F7: bool = has(READY, F7);
const NOTHING_HAS_EMPTY: bool = has(Bits::FULL, Bits::EMPTY);
const HIGH_NIBBLE: Bits = Bits::flag(4).set(Bits::flag(5)).set(Bits::flag(6)).set(F7);
const LOWEST: Option<usize> = HIGH_NIBBLE.first_set_flag();

// flag counts are usable as array lengths
static SLOTS: [u8; HIGH_NIBBLE.popcount()] = [0; 4];

fn main() {
    assert_eq!(READY.bits(), 0b1000_0001);
    assert_eq!(STALE, F0);
    assert_eq!(FLIPPED.bits(), 0b0000_1001);
    assert!(READY_HAS_F7);
    assert!(!NOTHING_HAS_EMPTY);
    assert_eq!(HIGH_NIBBLE.bits(), 0b1111_0000);
    assert_eq!(LOWEST, Some(4));
    assert_eq!(SLOTS.len(), 4);
}

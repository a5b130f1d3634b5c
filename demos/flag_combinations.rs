use light_flags::{Bits, F0, F2, F5, F7};

fn combinations(mask: Bits, current: Bits) {
    let Some(idx) = mask.first_set_flag() else {
        println!("{current:?} {:?}", current.iter_ones().collect::<Vec<_>>());
        return;
    };
    let flag = Bits::flag(idx);
    let rest = mask.clear(flag);
    combinations(rest, current.set(flag));
    combinations(rest, current)
}

fn main() {
    let mask = F0 | F2 | F5 | F7;
    println!("all {} combinations of {mask:?}:", 1 << mask.popcount());
    combinations(mask, Bits::EMPTY);
}

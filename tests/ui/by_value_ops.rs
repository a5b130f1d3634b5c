use light_flags::{Bits, F1, F2, F6};

fn main() {
    let original = F1 | F6;
    let copy = original;

    let updated = copy.set(F2).clear(F6).toggle(F1);
    assert_eq!(updated, F2);

    // `copy` is still usable and unchanged after being passed by value
    assert_eq!(copy, original);
    assert!(copy.has(F6));

    let handles: Vec<_> = (0..4u8)
        .map(|i| std::thread::spawn(move || copy.toggle(Bits::new(1 << i))))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let toggled = handle.join().unwrap();
        assert_eq!(toggled ^ copy, Bits::new(1 << i));
    }
    assert_eq!(copy, original);
}

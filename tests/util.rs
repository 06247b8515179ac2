use gitdoc::util::get_or_default;

#[test]
fn zero_values_fall_back() {
    assert_eq!(get_or_default(String::new(), "d".to_string()), "d");
    assert_eq!(get_or_default(0, 7), 7);
    assert_eq!(get_or_default(None::<u8>, Some(1)), Some(1));
    assert!(get_or_default(false, true));
}

#[test]
fn non_zero_values_are_kept() {
    assert_eq!(get_or_default("v".to_string(), "d".to_string()), "v");
    assert_eq!(get_or_default(3, 7), 3);
    assert_eq!(get_or_default(Some(0_u8), Some(1)), Some(0));
}

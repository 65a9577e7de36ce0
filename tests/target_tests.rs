use battleship_duel::{Target, TargetError};

#[test]
fn test_accepts_valid_tokens() {
    assert_eq!("A0".parse::<Target>().unwrap(), Target::new(0, 0));
    assert_eq!("j9".parse::<Target>().unwrap(), Target::new(9, 9));
    assert_eq!("C4".parse::<Target>().unwrap(), Target::new(4, 2));
    assert_eq!("e3".parse::<Target>().unwrap(), Target::new(3, 4));
}

#[test]
fn test_third_digit_is_ignored() {
    // the row is always read from one character
    assert_eq!("A10".parse::<Target>().unwrap(), Target::new(1, 0));
}

#[test]
fn test_rejects_malformed_tokens() {
    assert_eq!("".parse::<Target>(), Err(TargetError::Empty));
    assert_eq!("A".parse::<Target>(), Err(TargetError::BadLength(1)));
    assert_eq!("A123".parse::<Target>(), Err(TargetError::BadLength(4)));
    assert_eq!("K5".parse::<Target>(), Err(TargetError::BadColumn('K')));
    assert_eq!("55".parse::<Target>(), Err(TargetError::BadColumn('5')));
    assert_eq!("AX".parse::<Target>(), Err(TargetError::BadRow('X')));
    assert_eq!("A1X".parse::<Target>(), Err(TargetError::BadTrailing('X')));
    assert!(" A1".parse::<Target>().is_err());
    assert!("@1".parse::<Target>().is_err());
}

#[test]
fn test_display_round_trips_label() {
    assert_eq!(Target::new(3, 4).to_string(), "E3");
    assert_eq!(Target::new(9, 0).to_string(), "A9");
}

//! Unit tests for pin-numbering modes and the pin table.

use rtk_gpio::{Error, PinNumbering};

#[test]
fn test_mode_values_round_trip() {
    assert_eq!(
        PinNumbering::from_mode(0).unwrap(),
        PinNumbering::Physical
    );
    assert_eq!(PinNumbering::from_mode(1).unwrap(), PinNumbering::Bcm);
    assert_eq!(PinNumbering::Physical.mode(), 0);
    assert_eq!(PinNumbering::Bcm.mode(), 1);
}

#[test]
fn test_invalid_mode_values_rejected() {
    for mode in [2u8, 3, 10, 255] {
        match PinNumbering::from_mode(mode) {
            Err(Error::InvalidMode { mode: m }) => assert_eq!(m, mode),
            other => panic!("mode {mode} should be invalid, got {other:?}"),
        }
    }
}

#[test]
fn test_physical_pin_table() {
    // The 28 GPIO-capable positions of the 40-pin header.
    let pins: Vec<u8> = PinNumbering::Physical.pins().collect();
    assert_eq!(pins.len(), 28);
    assert!(pins.contains(&3));
    assert!(pins.contains(&40));
    // Power/ground positions are not in the table.
    for pin in [0u8, 1, 2, 4, 6, 9, 14, 17, 20, 25, 30, 34, 39, 41] {
        assert!(
            !pins.contains(&pin),
            "header position {pin} should not be a GPIO pin"
        );
    }
}

#[test]
fn test_bcm_pin_table() {
    // BCM GPIO 0-27, each exactly once.
    let mut pins: Vec<u8> = PinNumbering::Bcm.pins().collect();
    pins.sort_unstable();
    assert_eq!(pins, (0u8..=27).collect::<Vec<_>>());
}

#[test]
fn test_validate_follows_active_mode() {
    // Physical pin 3 exists, BCM GPIO 3 also exists -- but physical 40 has
    // no BCM counterpart and BCM 2 is not a physical position.
    assert!(PinNumbering::Physical.validate(3).is_ok());
    assert!(PinNumbering::Physical.validate(40).is_ok());
    assert!(PinNumbering::Bcm.validate(27).is_ok());
    assert!(PinNumbering::Bcm.validate(0).is_ok());

    match PinNumbering::Physical.validate(2) {
        Err(Error::InvalidPin { pin: 2 }) => {}
        other => panic!("expected InvalidPin, got {other:?}"),
    }
    match PinNumbering::Bcm.validate(40) {
        Err(Error::InvalidPin { pin: 40 }) => {}
        other => panic!("expected InvalidPin, got {other:?}"),
    }
}

#[test]
fn test_default_numbering_is_physical() {
    assert_eq!(PinNumbering::default(), PinNumbering::Physical);
}

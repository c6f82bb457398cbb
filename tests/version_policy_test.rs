// tests/version_policy_test.rs
use channel_bump::{Channel, ChannelBumpError, Version};

#[test]
fn test_even_minor_bump_moves_to_next_minor() {
    for major in [0, 1, 12] {
        for minor in (0..20).step_by(2) {
            for patch in [0, 1, 7, 250] {
                let next = Version::new(major, minor, patch).next().unwrap();
                assert_eq!(next, Version::new(major, minor + 1, 0));
            }
        }
    }
}

#[test]
fn test_odd_minor_bump_increments_patch() {
    for major in [0, 1, 12] {
        for minor in (1..20).step_by(2) {
            for patch in [0, 1, 7, 250] {
                let next = Version::new(major, minor, patch).next().unwrap();
                assert_eq!(next, Version::new(major, minor, patch + 1));
            }
        }
    }
}

#[test]
fn test_prerelease_iff_even_minor_iff_patch_reset() {
    for minor in 0..20 {
        let v = Version::new(1, minor, 3);
        let even = minor % 2 == 0;
        assert_eq!(v.is_prerelease(), even);
        assert_eq!(v.channel() == Channel::Prerelease, even);
        assert_eq!(v.next().unwrap().patch == 0, even);
    }
}

#[test]
fn test_parse_formatted_version() {
    for v in [
        Version::new(0, 0, 0),
        Version::new(1, 2, 3),
        Version::new(10, 21, 300),
        Version::new(u32::MAX, u32::MAX, u32::MAX),
    ] {
        assert_eq!(Version::parse(&v.to_string()).unwrap(), v);
    }
}

#[test]
fn test_concrete_scenarios() {
    let cases = [
        ("1.2.3", "1.3.0", true),
        ("1.3.2", "1.3.3", false),
        ("2.0.0", "2.1.0", true),
    ];
    for (input, expected, prerelease) in cases {
        let v = Version::parse(input).unwrap();
        assert_eq!(v.next().unwrap().to_string(), expected);
        assert_eq!(v.is_prerelease(), prerelease);
    }
}

#[test]
fn test_malformed_input_never_defaults() {
    for input in ["1.3", "1.a.0", "", "1.2.3.4", "a.b.c", "1.2.", ".1.2"] {
        assert!(
            matches!(
                Version::parse(input),
                Err(ChannelBumpError::InvalidVersionFormat(_))
            ),
            "{:?} should be InvalidVersionFormat",
            input
        );
    }
}

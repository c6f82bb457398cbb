//! Release channel convention
//!
//! The parity of the minor component selects the channel: even minor
//! versions are development builds published as prereleases, odd minor
//! versions are stable lines that only advance their patch component.

use crate::domain::Version;
use std::fmt;

/// Channel a version belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Even minor component
    Prerelease,
    /// Odd minor component
    Release,
}

impl Channel {
    /// Classify a version by its minor component
    pub fn of(version: &Version) -> Self {
        if version.minor % 2 == 0 {
            Channel::Prerelease
        } else {
            Channel::Release
        }
    }

    /// True for the even-minor channel
    pub fn is_prerelease(self) -> bool {
        matches!(self, Channel::Prerelease)
    }

    /// Process exit code reported by `is-prerelease`
    pub fn exit_code(self) -> u8 {
        match self {
            Channel::Prerelease => 1,
            Channel::Release => 0,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Prerelease => write!(f, "prerelease"),
            Channel::Release => write!(f, "release"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_minor_is_prerelease() {
        for minor in [0, 2, 4, 100] {
            let channel = Channel::of(&Version::new(1, minor, 9));
            assert_eq!(channel, Channel::Prerelease);
            assert!(channel.is_prerelease());
        }
    }

    #[test]
    fn test_odd_minor_is_release() {
        for minor in [1, 3, 5, 101] {
            let channel = Channel::of(&Version::new(1, minor, 9));
            assert_eq!(channel, Channel::Release);
            assert!(!channel.is_prerelease());
        }
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Channel::Prerelease.exit_code(), 1);
        assert_eq!(Channel::Release.exit_code(), 0);
    }

    #[test]
    fn test_prerelease_iff_bump_resets_patch() {
        for minor in 0..10 {
            let v = Version::new(2, minor, 5);
            let resets_patch = v.next().unwrap().patch == 0;
            assert_eq!(v.is_prerelease(), resets_patch, "minor {}", minor);
        }
    }

    #[test]
    fn test_channel_display() {
        assert_eq!(Channel::Prerelease.to_string(), "prerelease");
        assert_eq!(Channel::Release.to_string(), "release");
    }
}

use crate::domain::Channel;
use crate::error::{ChannelBumpError, Result};
use std::fmt;
use std::str::FromStr;

/// Three-component version read from a manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a `MAJOR.MINOR.PATCH` string.
    ///
    /// The input is split on `.` and must yield exactly three components,
    /// each a plain unsigned integer. Anything else is
    /// [`ChannelBumpError::InvalidVersionFormat`].
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split('.').collect();
        if parts.len() != 3 {
            return Err(ChannelBumpError::invalid_version(format!(
                "'{}' - expected MAJOR.MINOR.PATCH",
                input
            )));
        }

        let major = parse_component(input, "major", parts[0])?;
        let minor = parse_component(input, "minor", parts[1])?;
        let patch = parse_component(input, "patch", parts[2])?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Release channel encoded by the minor component
    pub fn channel(&self) -> Channel {
        Channel::of(self)
    }

    /// Whether the minor component is even
    pub fn is_prerelease(&self) -> bool {
        self.channel().is_prerelease()
    }

    /// Compute the successor version.
    ///
    /// - Prerelease (even minor): minor + 1, patch reset to 0
    /// - Release (odd minor): patch + 1
    ///
    /// The patch component is dropped on the prerelease to release
    /// transition, so `1.2.3` becomes `1.3.0`.
    pub fn next(&self) -> Result<Self> {
        match self.channel() {
            Channel::Prerelease => Ok(Version {
                major: self.major,
                minor: increment(*self, "minor", self.minor)?,
                patch: 0,
            }),
            Channel::Release => Ok(Version {
                major: self.major,
                minor: self.minor,
                patch: increment(*self, "patch", self.patch)?,
            }),
        }
    }
}

fn parse_component(input: &str, name: &str, raw: &str) -> Result<u32> {
    // u32::from_str accepts a leading '+', which is not a plain integer here
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ChannelBumpError::invalid_version(format!(
            "'{}' - {} component '{}' is not an integer",
            input, name, raw
        )));
    }
    raw.parse::<u32>().map_err(|_| {
        ChannelBumpError::invalid_version(format!(
            "'{}' - {} component '{}' is out of range",
            input, name, raw
        ))
    })
}

fn increment(version: Version, name: &str, value: u32) -> Result<u32> {
    value.checked_add(1).ok_or_else(|| {
        ChannelBumpError::overflow(format!(
            "cannot increment {} component of {}",
            name, version
        ))
    })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = ChannelBumpError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

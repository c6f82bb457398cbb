//! Domain logic - version arithmetic independent of manifests and tooling

pub mod channel;
pub mod version;

pub use channel::Channel;
pub use version::Version;

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod ui;
pub mod updater;

pub use domain::{Channel, Version};
pub use error::{ChannelBumpError, Result};

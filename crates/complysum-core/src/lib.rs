//! ComplySummarize Core — configuration and shared error type.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};

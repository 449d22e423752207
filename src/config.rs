//! Fixed client settings.
//!
//! The client has no runtime configuration: the only thing a user chooses is
//! the server host, entered on the connect screen. Everything else lives here.

use std::time::Duration;

use dioxus::logger::tracing::Level;

/// Port the chat server listens on.
pub const API_PORT: u16 = 5000;

/// Path of the message collection on the chat server.
pub const API_PATH: &str = "/api/messages";

/// Time between two poll ticks.
pub const POLL_INTERVAL: Duration = Duration::from_millis(1000);

pub const LOG_LEVEL: Level = Level::INFO;

/// Shown in place of a time when a message carries no timestamp.
pub const NO_TIMESTAMP_LABEL: &str = "Now";
/// Shown when a timestamp is present but cannot be read as a date.
pub const INVALID_TIMESTAMP_LABEL: &str = "Invalid Date";

pub const COPY_SUCCEEDED: &str = "Message copied to clipboard!";
pub const COPY_FAILED: &str = "Failed to copy message!";

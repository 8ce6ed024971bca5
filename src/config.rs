use tagtext_macros::impl_default_for;
use tagtext_ndef::DEFAULT_LANGUAGE_TAG;
use tracing::warn;

use crate::timestamp::DEFAULT_TIMESTAMP_FORMAT;

/// Pending frontend updates at which a backlog warning is logged
pub const DEFAULT_RECONCILE_CAPACITY: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct SessionConfig {
    /// Language code written into every text record
    pub language_tag: String,

    /// strftime format for the "last read" timestamp
    pub timestamp_format: String,

    /// Updates may queue past this, it only triggers a warning
    pub reconcile_capacity: u32,
}

impl_default_for!(SessionConfig);
impl SessionConfig {
    pub fn new() -> Self {
        Self {
            language_tag: DEFAULT_LANGUAGE_TAG.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            reconcile_capacity: DEFAULT_RECONCILE_CAPACITY,
        }
    }

    /// Replace values the session could not work with by their defaults
    pub fn validated(mut self) -> Self {
        if let Err(error) = tagtext_ndef::validate_language_tag(&self.language_tag) {
            warn!("{error}, using {DEFAULT_LANGUAGE_TAG:?}");
            self.language_tag = DEFAULT_LANGUAGE_TAG.to_string();
        }

        if self.timestamp_format.trim().is_empty() {
            warn!("empty timestamp format, using {DEFAULT_TIMESTAMP_FORMAT:?}");
            self.timestamp_format = DEFAULT_TIMESTAMP_FORMAT.to_string();
        }

        if self.reconcile_capacity == 0 {
            warn!("reconcile capacity must be positive, using {DEFAULT_RECONCILE_CAPACITY}");
            self.reconcile_capacity = DEFAULT_RECONCILE_CAPACITY;
        }

        self
    }
}

#[uniffi::export]
fn session_config_default() -> SessionConfig {
    SessionConfig::new()
}

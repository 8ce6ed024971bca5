//! Values pushed to the frontend

use crate::manager::tag_session_manager::TagSessionError;

pub const WRITE_SUCCESS_MESSAGE: &str = "Tag written successfully!";
pub const NO_NDEF_MESSAGES_MESSAGE: &str = "No NDEF messages found!";

/// Text read from a tag and when it was read
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct DisplayUpdate {
    pub text: String,
    pub timestamp: String,
}

/// A short user-facing message, shown as a toast
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct Notification {
    pub message: String,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn written() -> Self {
        Self::new(WRITE_SUCCESS_MESSAGE)
    }

    pub fn no_ndef_messages() -> Self {
        Self::new(NO_NDEF_MESSAGES_MESSAGE)
    }
}

impl From<&TagSessionError> for Notification {
    fn from(error: &TagSessionError) -> Self {
        Self::new(error.to_string())
    }
}

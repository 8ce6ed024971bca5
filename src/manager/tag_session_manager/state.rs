use std::sync::Arc;

use crate::tag_handle::TagHandle;

use super::TagSessionError;

#[derive(Debug, Clone, Default, strum::IntoStaticStr)]
pub enum SessionState {
    #[default]
    Idle,

    TagPresent {
        handle: Arc<TagHandle>,
        write_enabled: bool,
    },
}

/// Snapshot of the session for the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Record)]
pub struct SessionStatus {
    pub tag_present: bool,
    pub write_enabled: bool,
}

impl SessionState {
    /// Replace the current tag and open the write gate
    ///
    /// Returns true if the gate was closed before
    pub fn discovered(&mut self, handle: Arc<TagHandle>) -> bool {
        let was_enabled = self.is_write_enabled();
        *self = Self::TagPresent { handle, write_enabled: true };
        !was_enabled
    }

    /// Close the gate and hand out the tag to write to
    pub fn take_write_permit(&mut self) -> Result<Arc<TagHandle>, TagSessionError> {
        match self {
            Self::Idle => Err(TagSessionError::NoTagPresent),
            Self::TagPresent { write_enabled: false, .. } => {
                Err(TagSessionError::WriteNotPermitted)
            }
            Self::TagPresent { handle, write_enabled } => {
                *write_enabled = false;
                Ok(handle.clone())
            }
        }
    }

    pub fn is_write_enabled(&self) -> bool {
        matches!(self, Self::TagPresent { write_enabled: true, .. })
    }

    pub fn has_tag(&self) -> bool {
        matches!(self, Self::TagPresent { .. })
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus { tag_present: self.has_tag(), write_enabled: self.is_write_enabled() }
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

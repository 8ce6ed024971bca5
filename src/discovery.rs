use std::sync::Arc;

use crate::tag_handle::TagHandle;

/// A tag came into range
#[derive(Debug, Clone, uniffi::Record)]
pub struct DiscoveryEvent {
    pub handle: Arc<TagHandle>,
    pub kind: DiscoveryKind,
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum DiscoveryKind {
    /// The host read the tag's NDEF content, each message is a list of record payloads
    NdefDiscovered { messages: Vec<Vec<Vec<u8>>> },

    /// The tag was detected without reading an NDEF layer
    TechOrTagDiscovered,
}

/// What a discovery event carries for the display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundledPayload {
    NotRead,
    NoMessages,
    NoRecords,
    Payload(Vec<u8>),
}

impl DiscoveryKind {
    /// The first record payload of the first bundled message, if there is one
    pub fn into_first_payload(self) -> BundledPayload {
        let messages = match self {
            Self::TechOrTagDiscovered => return BundledPayload::NotRead,
            Self::NdefDiscovered { messages } => messages,
        };

        let Some(first_message) = messages.into_iter().next() else {
            return BundledPayload::NoMessages;
        };

        match first_message.into_iter().next() {
            Some(payload) => BundledPayload::Payload(payload),
            None => BundledPayload::NoRecords,
        }
    }
}

impl DiscoveryEvent {
    pub fn new(handle: Arc<TagHandle>, kind: DiscoveryKind) -> Self {
        Self { handle, kind }
    }
}

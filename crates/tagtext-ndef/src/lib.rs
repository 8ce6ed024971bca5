uniffi::setup_scaffolding!();

pub mod codec;
pub mod header;
pub mod message;
pub mod ndef_type;
pub mod parser;
pub mod payload;
pub mod record;

mod ffi;

pub use codec::{decode, encode, validate_language_tag};
pub use message::{decode_text_message, encode_text_message};
pub use payload::{DEFAULT_LANGUAGE_TAG, MAX_LANGUAGE_TAG_LEN, TextEncoding, TextRecord};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum RecordError {
    /// The bytes do not form a well-known text record
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// Refusing to write a record without any text
    #[error("text is empty")]
    EmptyInput,

    /// Language code is empty, longer than 63 bytes or not ASCII
    #[error("invalid language code: {0:?}")]
    InvalidLanguageCode(String),
}

pub type Error = RecordError;
pub type Result<T, E = Error> = std::result::Result<T, E>;

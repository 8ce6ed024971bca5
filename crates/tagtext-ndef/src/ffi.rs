use crate::{RecordError, codec, message, payload::TextRecord};

#[uniffi::export]
fn decode_text_payload(payload: Vec<u8>) -> Result<TextRecord, RecordError> {
    codec::decode(&payload)
}

#[uniffi::export]
fn encode_text_payload(text: String, language_tag: String) -> Result<Vec<u8>, RecordError> {
    codec::encode(&text, &language_tag)
}

#[uniffi::export]
fn decode_text_ndef_message(bytes: Vec<u8>) -> Result<TextRecord, RecordError> {
    message::decode_text_message(&bytes)
}

#[uniffi::export]
fn encode_text_ndef_message(text: String, language_tag: String) -> Result<Vec<u8>, RecordError> {
    message::encode_text_message(&text, &language_tag)
}

#[uniffi::export]
fn default_language_tag() -> String {
    crate::DEFAULT_LANGUAGE_TAG.to_string()
}

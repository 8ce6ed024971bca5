//! Single-record NDEF message framing for text records

use tracing::debug;
use winnow::error::ErrMode;

use crate::{
    RecordError, Result, codec,
    parser::{
        self,
        stream::{self, StreamExt as _},
    },
    payload::TextRecord,
    record::NdefRecord,
};

/// Encode text and frame it as a one-record NDEF message
pub fn encode_text_message(text: &str, language_tag: &str) -> Result<Vec<u8>> {
    let payload = codec::encode(text, language_tag)?;
    Ok(NdefRecord::well_known_text(payload).to_bytes())
}

/// Decode the text of the first record of an NDEF message
pub fn decode_text_message(bytes: &[u8]) -> Result<TextRecord> {
    let mut input = stream::new(bytes);

    let record = parser::parse_ndef_record(&mut input).map_err(|error| match error {
        ErrMode::Incomplete(needed) => {
            RecordError::MalformedRecord(format!("truncated ndef message, needed: {needed:?}"))
        }
        error => RecordError::MalformedRecord(format!("invalid ndef record: {error}")),
    })?;

    if record.header.chunked {
        return Err(RecordError::MalformedRecord(
            "chunked records are not supported".to_string(),
        ));
    }

    if !record.is_text() {
        return Err(RecordError::MalformedRecord(format!(
            "first record is not a text record, type: {:?}",
            String::from_utf8_lossy(&record.type_)
        )));
    }

    if !input.is_exhausted() {
        debug!("ignoring {} bytes after the first record", input.remaining());
    }

    codec::decode(&record.payload)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::payload::TextEncoding;

    #[test]
    fn framed_message_decodes() {
        let bytes = encode_text_message("Hi", "en").unwrap();
        assert_eq!(bytes, vec![0xD1, 0x01, 0x05, b'T', 0x02, b'e', b'n', b'H', b'i']);

        let record = decode_text_message(&bytes).unwrap();
        assert_eq!(record, TextRecord::new("en", "Hi"));
    }

    #[test]
    fn long_message_uses_long_record() {
        let text = "x".repeat(400);
        let bytes = encode_text_message(&text, "en").unwrap();

        assert_eq!(bytes[0] & 0x10, 0, "short record flag must be clear");
        assert_eq!(decode_text_message(&bytes).unwrap().text, text);
    }

    #[test]
    fn truncated_message_is_malformed() {
        let bytes = encode_text_message("Hello", "en").unwrap();
        let result = decode_text_message(&bytes[..bytes.len() - 2]);
        assert!(matches!(result, Err(RecordError::MalformedRecord(_))));

        assert!(matches!(decode_text_message(&[]), Err(RecordError::MalformedRecord(_))));
    }

    #[test]
    fn non_text_record_is_malformed() {
        // well-known uri record
        let bytes = [0xD1, 0x01, 0x03, b'U', 0x04, b'a', b'b'];
        assert!(matches!(decode_text_message(&bytes), Err(RecordError::MalformedRecord(_))));

        // mime record with type "T"
        let bytes = [0xD2, 0x01, 0x01, b'T', 0x00];
        assert!(matches!(decode_text_message(&bytes), Err(RecordError::MalformedRecord(_))));
    }

    #[test]
    fn utf16_payload_from_other_writers() {
        let mut payload = vec![0x82, b'e', b'n'];
        payload.extend("Hi".encode_utf16().flat_map(u16::to_be_bytes));
        let bytes = NdefRecord::well_known_text(payload).to_bytes();

        let record = decode_text_message(&bytes).unwrap();
        assert_eq!(record.text, "Hi");
        assert_eq!(record.encoding, TextEncoding::Utf16);
    }

    #[test]
    fn chunked_record_is_malformed() {
        // MB, ME, CF and SR set on a well-known text record
        let bytes = [0xF1, 0x01, 0x05, b'T', 0x02, b'e', b'n', b'H', b'i'];

        let Err(RecordError::MalformedRecord(reason)) = decode_text_message(&bytes) else {
            panic!("chunked record must not decode");
        };
        assert!(reason.contains("chunked"), "unexpected reason: {reason}");
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut bytes = encode_text_message("Hi", "en").unwrap();
        bytes.extend_from_slice(&[0xD1, 0x01, 0x00]);

        let record = decode_text_message(&bytes).unwrap();
        assert_eq!(record, TextRecord::new("en", "Hi"));
    }

    #[test]
    fn encode_errors_propagate() {
        assert_eq!(encode_text_message("", "en"), Err(RecordError::EmptyInput));
    }
}

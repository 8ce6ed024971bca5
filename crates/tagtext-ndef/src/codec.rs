//! Well-known text record payload codec
//!
//! Payload layout: `[status byte][language code][text]`. Bit 7 of the status byte selects
//! UTF-16, bit 6 is reserved and bits 0-5 hold the language code length.

use tagtext_util::result_ext::ResultExt as _;
use tracing::trace;
use winnow::{
    Bytes, ModalResult, Parser,
    binary::bits::{bits, bool as take_bool, take as take_bits},
    error::{ContextError, ErrMode},
    token::take,
};

use crate::{
    RecordError, Result,
    payload::{
        LANGUAGE_LENGTH_MASK, MAX_LANGUAGE_TAG_LEN, RESERVED_FLAG, TextEncoding, TextRecord,
        UTF16_FLAG,
    },
};

/// Decode a raw text record payload
pub fn decode(payload: &[u8]) -> Result<TextRecord> {
    if payload.is_empty() {
        return Err(RecordError::MalformedRecord("payload is empty".to_string()));
    }

    let mut input = Bytes::new(payload);

    let (encoding, language_length) = parse_status_byte
        .parse_next(&mut input)
        .map_err_str(|error| RecordError::MalformedRecord(format!("bad status byte: {error}")))?;

    let language: &[u8] = take(language_length as usize)
        .parse_next(&mut input)
        .map_err(|_: ErrMode<ContextError>| {
            RecordError::MalformedRecord(format!(
                "language code length {language_length} overruns payload of {} bytes",
                payload.len()
            ))
        })?;

    // one char per byte, non-ascii codes from other writers are kept
    let language_tag = language.iter().map(|&byte| byte as char).collect::<String>();
    let text_bytes: &[u8] = input;
    let text = decode_text(text_bytes, encoding)?;

    trace!(%language_tag, ?encoding, text_len = text_bytes.len(), "decoded text payload");

    Ok(TextRecord { language_tag, text, encoding })
}

/// Encode text as a UTF-8 text record payload
///
/// The writer never produces UTF-16, only the decoder accepts it
pub fn encode(text: &str, language_tag: &str) -> Result<Vec<u8>> {
    if text.is_empty() {
        return Err(RecordError::EmptyInput);
    }

    validate_language_tag(language_tag)?;

    let status_byte =
        TextEncoding::Utf8.status_bit() | (language_tag.len() as u8 & LANGUAGE_LENGTH_MASK);
    debug_assert_eq!(status_byte & (UTF16_FLAG | RESERVED_FLAG), 0);

    let mut payload = Vec::with_capacity(1 + language_tag.len() + text.len());
    payload.push(status_byte);
    payload.extend_from_slice(language_tag.as_bytes());
    payload.extend_from_slice(text.as_bytes());

    Ok(payload)
}

/// Check a language code fits the 6-bit length field and is plain ASCII
pub fn validate_language_tag(language_tag: &str) -> Result<()> {
    let is_valid = !language_tag.is_empty()
        && language_tag.len() <= MAX_LANGUAGE_TAG_LEN
        && language_tag.is_ascii();

    if !is_valid {
        return Err(RecordError::InvalidLanguageCode(language_tag.to_string()));
    }

    Ok(())
}

// private
fn parse_status_byte(input: &mut &Bytes) -> ModalResult<(TextEncoding, u8)> {
    let (is_utf16, _reserved, language_length): (bool, bool, u8) =
        bits::<_, _, ErrMode<ContextError>, _, _>((take_bool, take_bool, take_bits(6_u8)))
            .parse_next(input)?;

    Ok((TextEncoding::from_utf16_flag(is_utf16), language_length))
}

fn decode_text(bytes: &[u8], encoding: TextEncoding) -> Result<String> {
    match encoding {
        TextEncoding::Utf8 => std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err_str(|error| RecordError::MalformedRecord(format!("invalid utf-8 text: {error}"))),

        TextEncoding::Utf16 => decode_utf16(bytes),
    }
}

/// UTF-16 with an optional byte order mark, big endian when there is none
fn decode_utf16(bytes: &[u8]) -> Result<String> {
    let (bytes, little_endian) = match bytes {
        [0xFE, 0xFF, rest @ ..] => (rest, false),
        [0xFF, 0xFE, rest @ ..] => (rest, true),
        _ => (bytes, false),
    };

    if bytes.len() % 2 != 0 {
        return Err(RecordError::MalformedRecord(format!(
            "utf-16 text has odd length {}",
            bytes.len()
        )));
    }

    let units = bytes
        .chunks_exact(2)
        .map(|chunk| {
            let pair = [chunk[0], chunk[1]];
            if little_endian { u16::from_le_bytes(pair) } else { u16::from_be_bytes(pair) }
        })
        .collect::<Vec<u16>>();

    String::from_utf16(&units)
        .map_err_str(|error| RecordError::MalformedRecord(format!("invalid utf-16 text: {error}")))
}

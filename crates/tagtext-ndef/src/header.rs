use tagtext_macros::bit_mask;

use crate::ndef_type::NdefType;

const MESSAGE_BEGIN: u8 = bit_mask!(7);
const MESSAGE_END: u8 = bit_mask!(6);
const CHUNKED: u8 = bit_mask!(5);
const SHORT_RECORD: u8 = bit_mask!(4);
const HAS_ID_LENGTH: u8 = bit_mask!(3);

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct NdefHeader {
    pub message_begin: bool,
    pub message_end: bool,
    pub chunked: bool,
    pub short_record: bool,
    pub has_id_length: bool,
    pub type_name_format: NdefType,
    pub type_length: u8,
    pub payload_length: u32,
    pub id_length: Option<u8>,
}

impl NdefHeader {
    /// Header for the only record of a message, short form when the payload fits a byte
    pub fn single_record(
        type_name_format: NdefType,
        type_length: u8,
        payload_length: u32,
        id_length: Option<u8>,
    ) -> Self {
        Self {
            message_begin: true,
            message_end: true,
            chunked: false,
            short_record: payload_length <= u8::MAX as u32,
            has_id_length: id_length.is_some(),
            type_name_format,
            type_length,
            payload_length,
            id_length,
        }
    }

    /// The leading flags byte: MB, ME, CF, SR, IL then the type name format
    pub fn flags_byte(&self) -> u8 {
        let flags = [
            (self.message_begin, MESSAGE_BEGIN),
            (self.message_end, MESSAGE_END),
            (self.chunked, CHUNKED),
            (self.short_record, SHORT_RECORD),
            (self.has_id_length, HAS_ID_LENGTH),
        ];

        flags
            .into_iter()
            .filter(|(is_set, _)| *is_set)
            .fold(self.type_name_format.bits(), |byte, (_, mask)| byte | mask)
    }

    /// Number of bytes the header occupies on the wire
    pub fn encoded_len(&self) -> usize {
        let payload_length_len = if self.short_record { 1 } else { 4 };
        let id_length_len = usize::from(self.id_length.is_some());

        2 + payload_length_len + id_length_len
    }
}

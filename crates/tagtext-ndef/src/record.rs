use crate::{header::NdefHeader, ndef_type::NdefType};

/// Record type of a well-known text record
pub const TEXT_RECORD_TYPE: &[u8] = b"T";

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct NdefRecord {
    pub header: NdefHeader,
    pub type_: Vec<u8>,
    pub id: Option<Vec<u8>>,
    pub payload: Vec<u8>,
}

impl NdefRecord {
    /// Wrap an encoded text payload as the only record of a message
    pub fn well_known_text(payload: Vec<u8>) -> Self {
        let header = NdefHeader::single_record(
            NdefType::WellKnown,
            TEXT_RECORD_TYPE.len() as u8,
            payload.len() as u32,
            None,
        );

        Self {
            header,
            type_: TEXT_RECORD_TYPE.to_vec(),
            id: None,
            payload,
        }
    }

    pub fn is_text(&self) -> bool {
        self.header.type_name_format == NdefType::WellKnown && self.type_ == TEXT_RECORD_TYPE
    }

    /// Serialize the record, header first
    pub fn to_bytes(&self) -> Vec<u8> {
        let header = &self.header;
        let id_len = self.id.as_ref().map_or(0, Vec::len);
        let mut bytes =
            Vec::with_capacity(header.encoded_len() + self.type_.len() + id_len + self.payload.len());

        bytes.push(header.flags_byte());
        bytes.push(header.type_length);

        if header.short_record {
            bytes.push(header.payload_length as u8);
        } else {
            bytes.extend_from_slice(&header.payload_length.to_be_bytes());
        }

        if let Some(id_length) = header.id_length {
            bytes.push(id_length);
        }

        bytes.extend_from_slice(&self.type_);
        if let Some(id) = &self.id {
            bytes.extend_from_slice(id);
        }
        bytes.extend_from_slice(&self.payload);

        bytes
    }
}

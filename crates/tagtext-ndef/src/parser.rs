pub mod stream;

use stream::Stream;
use winnow::{
    ModalResult, Parser,
    binary::{
        Endianness,
        bits::{bits, bool as take_bool, take as take_bits},
    },
    error::{ContextError, ErrMode},
    token::{any, take},
};

use crate::{header::NdefHeader, ndef_type::NdefType, record::NdefRecord};

/// Parse one complete record: header, type, optional id and payload
pub fn parse_ndef_record(input: &mut Stream<'_>) -> ModalResult<NdefRecord> {
    let header = parse_header.parse_next(input)?;
    let type_ = parse_type(input, header.type_length)?;
    let id = parse_id(input, header.id_length)?;
    let payload = parse_payload(input, header.payload_length)?;

    Ok(NdefRecord {
        header,
        type_,
        id,
        payload,
    })
}

// private
fn parse_header_byte(input: &mut Stream<'_>) -> ModalResult<(bool, bool, bool, bool, bool, u8)> {
    bits::<_, _, ErrMode<ContextError>, _, _>((
        take_bool,
        take_bool,
        take_bool,
        take_bool,
        take_bool,
        take_bits(3_u8),
    ))
    .parse_next(input)
}

fn parse_header(input: &mut Stream<'_>) -> ModalResult<NdefHeader> {
    let (message_begin, message_end, chunked, short_record, has_id_length, type_name_format) =
        parse_header_byte(input)?;

    let type_length = winnow::binary::u8.parse_next(input)?;

    let payload_length = if short_record {
        any.map(|x: u8| x as u32).parse_next(input)?
    } else {
        winnow::binary::u32(Endianness::Big).parse_next(input)?
    };

    let id_length = if has_id_length {
        Some(any.parse_next(input)?)
    } else {
        None
    };

    Ok(NdefHeader {
        message_begin,
        message_end,
        chunked,
        short_record,
        has_id_length,
        type_name_format: NdefType::from_bits(type_name_format),
        type_length,
        payload_length,
        id_length,
    })
}

fn parse_type(input: &mut Stream<'_>, type_length: u8) -> ModalResult<Vec<u8>> {
    take(type_length as usize)
        .map(|s: &[u8]| s.to_vec())
        .parse_next(input)
}

fn parse_id(input: &mut Stream<'_>, id_length: Option<u8>) -> ModalResult<Option<Vec<u8>>> {
    if let Some(id_len) = id_length {
        take(id_len as usize)
            .map(|s: &[u8]| Some(s.to_vec()))
            .parse_next(input)
    } else {
        Ok(None)
    }
}

fn parse_payload(input: &mut Stream<'_>, payload_length: u32) -> ModalResult<Vec<u8>> {
    take(payload_length as usize)
        .map(|s: &[u8]| s.to_vec())
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use winnow::error::{ErrMode, Needed};

    use super::{stream::StreamExt as _, *};

    #[test]
    fn known_header_parse() {
        let mut header_bytes = stream::new(&[0xD1, 0x01, 0x0D, 0x55, 0x02]);
        let header: NdefHeader = parse_header(&mut header_bytes).unwrap();

        assert!(header.message_begin);
        assert!(header.message_end);
        assert!(!header.chunked);
        assert!(header.short_record);
        assert!(!header.has_id_length);
        assert_eq!(header.type_name_format, NdefType::WellKnown);
        assert_eq!(header.type_length, 1);
        assert_eq!(header.payload_length, 13);
        assert_eq!(header_bytes.remaining(), 2);
    }

    #[test]
    fn long_header_with_id_parse() {
        let mut bytes = stream::new(&[0xC9, 0x01, 0x00, 0x00, 0x01, 0x2C, 0x02]);
        let header = parse_header(&mut bytes).unwrap();

        assert!(!header.short_record);
        assert!(header.has_id_length);
        assert_eq!(header.payload_length, 300);
        assert_eq!(header.id_length, Some(2));
        assert!(bytes.is_exhausted());
    }

    #[test]
    fn parse_text_record() {
        let bytes = [0xD1, 0x01, 0x05, b'T', 0x02, b'e', b'n', b'H', b'i'];
        let record = parse_ndef_record(&mut stream::new(&bytes)).unwrap();

        assert_eq!(record.type_, b"T");
        assert_eq!(record.id, None);
        assert_eq!(record.payload, vec![0x02, b'e', b'n', b'H', b'i']);
    }

    #[test]
    fn parse_record_with_id() {
        let bytes = [0xD9, 0x01, 0x01, 0x01, b'T', b'7', 0x00];
        let record = parse_ndef_record(&mut stream::new(&bytes)).unwrap();

        assert_eq!(record.id, Some(vec![b'7']));
        assert_eq!(record.payload, vec![0x00]);
    }

    #[test]
    fn truncated_record_is_incomplete() {
        let bytes = [0xD1, 0x01, 0x05, b'T', 0x02, b'e'];
        let result = parse_ndef_record(&mut stream::new(&bytes));

        assert!(matches!(result, Err(ErrMode::Incomplete(Needed::Size(_)))));
    }
}

use tagtext_macros::bit_mask;

/// Status byte bit selecting UTF-16 text
pub const UTF16_FLAG: u8 = bit_mask!(7);

/// Reserved status byte bit, ignored when decoding and never set when encoding
pub const RESERVED_FLAG: u8 = bit_mask!(6);

/// Status byte bits holding the language code length
pub const LANGUAGE_LENGTH_MASK: u8 = bit_mask!(0, 1, 2, 3, 4, 5);

/// Longest language code the 6-bit length field can describe
pub const MAX_LANGUAGE_TAG_LEN: usize = LANGUAGE_LENGTH_MASK as usize;

pub const DEFAULT_LANGUAGE_TAG: &str = "en";

/// A decoded well-known text record
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct TextRecord {
    pub language_tag: String,
    pub text: String,
    pub encoding: TextEncoding,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf16,
}

impl TextEncoding {
    pub fn from_utf16_flag(is_utf16: bool) -> Self {
        if is_utf16 { Self::Utf16 } else { Self::Utf8 }
    }

    /// The bit this encoding contributes to the status byte
    pub fn status_bit(self) -> u8 {
        match self {
            Self::Utf8 => 0,
            Self::Utf16 => UTF16_FLAG,
        }
    }
}

impl TextRecord {
    pub fn new(language_tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            language_tag: language_tag.into(),
            text: text.into(),
            encoding: TextEncoding::Utf8,
        }
    }
}

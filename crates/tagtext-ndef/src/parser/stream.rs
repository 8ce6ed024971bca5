//! Input type for the record parser

use winnow::{Bytes, Partial, stream::Stream as _};

/// Partial input, running out of bytes is `Incomplete` rather than a parse error
pub type Stream<'i> = Partial<&'i Bytes>;

pub fn new(bytes: &[u8]) -> Stream<'_> {
    Partial::new(Bytes::new(bytes))
}

pub trait StreamExt {
    fn remaining(&self) -> usize;

    fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

impl StreamExt for Stream<'_> {
    fn remaining(&self) -> usize {
        self.eof_offset()
    }
}

use core::iter::FusedIterator;

use byteorder::{ByteOrder, NetworkEndian};
use log::trace;

use crate::error::FramingError;
use crate::lldp::{decode, DecodedTlv, TlvType};
use crate::{Buf, Cursor};

/// The byte length of a TLV header.
pub const TLV_HEADER_LEN: usize = 2;

/// The largest value length a 9-bit length field can express.
pub const TLV_MAX_VALUE_LEN: u16 = 0x1ff;

/// The 16-bit TLV header: a 7-bit type followed by a 9-bit value length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlvHeader {
    type_code: u8,
    length: u16,
}

impl TlvHeader {
    /// Split the raw big-endian header word.
    #[inline]
    pub fn from_raw(raw: u16) -> Self {
        Self {
            type_code: (raw >> 9) as u8,
            length: raw & TLV_MAX_VALUE_LEN,
        }
    }

    /// Build a header from its two fields.
    ///
    /// # Panics
    ///
    /// `type_code` does not fit in 7 bits or `length` does not fit in 9 bits.
    #[inline]
    pub fn new(type_code: u8, length: u16) -> Self {
        assert!(type_code <= 0x7f && length <= TLV_MAX_VALUE_LEN);
        Self { type_code, length }
    }

    /// The raw header word.
    #[inline]
    pub fn raw(&self) -> u16 {
        (u16::from(self.type_code) << 9) | self.length
    }

    /// The type code, 0 to 127.
    #[inline]
    pub fn type_code(&self) -> u8 {
        self.type_code
    }

    /// The type code as a [`TlvType`].
    #[inline]
    pub fn tlv_type(&self) -> TlvType {
        TlvType::from(self.type_code)
    }

    /// The number of value bytes, 0 to 511.
    #[inline]
    pub fn length(&self) -> u16 {
        self.length
    }
}

/// A single TLV whose value is borrowed from the frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tlv<'a> {
    header: TlvHeader,
    offset: usize,
    value: &'a [u8],
}

impl<'a> Tlv<'a> {
    /// The TLV header.
    #[inline]
    pub fn header(&self) -> TlvHeader {
        self.header
    }

    /// Shorthand for `header().tlv_type()`.
    #[inline]
    pub fn tlv_type(&self) -> TlvType {
        self.header.tlv_type()
    }

    /// Offset of the TLV header from the start of the LLDPDU.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The value bytes, exactly `header().length()` of them.
    #[inline]
    pub fn value(&self) -> &'a [u8] {
        self.value
    }

    /// Decode the value according to the type code.
    #[inline]
    pub fn decode(&self) -> DecodedTlv<'a> {
        decode(*self)
    }
}

/// Walks the TLVs of an LLDPDU.
///
/// The sequence ends after an End of LLDPDU TLV, when fewer than two bytes
/// are left, or right after yielding a [`FramingError`]. Bytes following the
/// End of LLDPDU TLV are ignored.
#[derive(Debug, Clone)]
pub struct TlvCursor<'a> {
    buf: Cursor<'a>,
    done: bool,
}

impl<'a> TlvCursor<'a> {
    /// Start walking the LLDPDU held in `lldpdu`.
    #[inline]
    pub fn new(lldpdu: &'a [u8]) -> Self {
        Self::from_cursor(Cursor::new(lldpdu))
    }

    /// Start walking at the current position of `buf`.
    ///
    /// Reported offsets are relative to the start of `buf`'s underlying buffer.
    #[inline]
    pub fn from_cursor(buf: Cursor<'a>) -> Self {
        Self { buf, done: false }
    }

    /// The number of bytes consumed so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.buf.cursor()
    }

    /// The bytes not consumed yet.
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        self.buf.chunk_shared_lifetime()
    }

    /// Read the next TLV.
    pub fn next_tlv(&mut self) -> Option<Result<Tlv<'a>, FramingError>> {
        if self.done || self.buf.remaining() < TLV_HEADER_LEN {
            self.done = true;
            return None;
        }

        let offset = self.buf.cursor();
        let header = TlvHeader::from_raw(NetworkEndian::read_u16(self.buf.chunk()));
        let available = self.buf.remaining() - TLV_HEADER_LEN;
        let length = usize::from(header.length());
        if length > available {
            self.done = true;
            return Some(Err(FramingError::TruncatedValue(
                offset,
                header.type_code(),
                header.length(),
                available,
            )));
        }

        self.buf.advance(TLV_HEADER_LEN);
        let value = &self.buf.chunk_shared_lifetime()[..length];
        self.buf.advance(length);

        if header.tlv_type() == TlvType::END_OF_LLDPDU {
            self.done = true;
        }
        trace!(
            "tlv type {} length {} at offset {}",
            header.type_code(),
            length,
            offset
        );

        Some(Ok(Tlv {
            header,
            offset,
            value,
        }))
    }
}

impl<'a> Iterator for TlvCursor<'a> {
    type Item = Result<Tlv<'a>, FramingError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_tlv()
    }
}

impl<'a> FusedIterator for TlvCursor<'a> {}

use byteorder::{ByteOrder, NetworkEndian};

use crate::ether::{EtherAddr, EtherType};
use crate::Buf;

/// A constant that defines the fixed byte length of the Ethernet II header.
pub const ETHER_FRAME_HEADER_LEN: usize = 14;

/// A read-only view of an Ethernet II frame held in `buf`.
#[derive(Debug, Clone, Copy)]
pub struct EtherFrame<T> {
    buf: T,
}

impl<T: Buf> EtherFrame<T> {
    /// Wrap `buf`, handing it back if it can not hold an Ethernet II header.
    #[inline]
    pub fn parse(buf: T) -> Result<Self, T> {
        let chunk_len = buf.chunk().len();
        if chunk_len < ETHER_FRAME_HEADER_LEN {
            return Err(buf);
        }
        let container = Self { buf };
        Ok(container)
    }

    /// The header bytes.
    #[inline]
    pub fn header_slice(&self) -> &[u8] {
        &self.buf.chunk()[0..ETHER_FRAME_HEADER_LEN]
    }

    /// Destination MAC address.
    #[inline]
    pub fn dst_addr(&self) -> EtherAddr {
        read_addr(&self.buf.chunk()[0..6])
    }

    /// Source MAC address.
    #[inline]
    pub fn src_addr(&self) -> EtherAddr {
        read_addr(&self.buf.chunk()[6..12])
    }

    /// The EtherType of the payload.
    #[inline]
    pub fn ethertype(&self) -> EtherType {
        EtherType::from(NetworkEndian::read_u16(&self.buf.chunk()[12..14]))
    }

    /// Consume the frame and return the buffer positioned at the payload.
    #[inline]
    pub fn payload(self) -> T {
        let mut buf = self.buf;
        buf.advance(ETHER_FRAME_HEADER_LEN);
        buf
    }
}

#[inline]
fn read_addr(bytes: &[u8]) -> EtherAddr {
    let mut addr = [0; 6];
    addr.copy_from_slice(bytes);
    EtherAddr(addr)
}

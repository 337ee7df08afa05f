#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

//! Provide utilities for decoding IEEE 802.1AB (LLDP) frames.
//!
//! The decoding pipeline runs strictly downward:
//! [`ether::FrameGate`] checks the Ethernet header, [`lldp::TlvCursor`] walks
//! the TLV sequence of the LLDPDU and [`lldp::decode`] turns every raw TLV into
//! a typed [`lldp::DecodedTlv`]. [`decode_frame`] chains the three steps.
//!
//! ```
//! use lldpkt::lldp::DecodedTlv;
//!
//! let frame = [
//!     0x01, 0x80, 0xc2, 0x00, 0x00, 0x0e, // dst
//!     0x00, 0x16, 0xc8, 0x86, 0x51, 0x89, // src
//!     0x88, 0xcc, // ethertype
//!     0x02, 0x07, 0x04, 0x00, 0x16, 0xc8, 0x86, 0x51, 0x80, // chassis id
//!     0x04, 0x08, 0x05, b'G', b'i', b'1', b'/', b'0', b'/', b'9', // port id
//!     0x06, 0x02, 0x00, 0x78, // ttl
//!     0x00, 0x00, // end
//! ];
//!
//! let pdu = lldpkt::decode_frame(&frame[..]).unwrap().unwrap();
//! assert_eq!(pdu.ttl(), Some(120));
//! assert!(matches!(pdu.tlvs().last(), Some(DecodedTlv::EndOfLldpdu)));
//! assert!(pdu.violations().is_empty());
//! ```

#[macro_use]
mod macros;

mod cursors;
pub use cursors::Cursor;

pub use bytes::Buf;

pub mod error;
pub mod ether;
pub mod lldp;

use error::FramingError;
use ether::{EtherFrame, FrameGate};
use lldp::LldpPdu;

/// Decode a raw Ethernet frame with the default [`FrameGate`].
///
/// Returns `None` if the frame does not carry LLDP, otherwise the result of
/// decoding the LLDPDU.
pub fn decode_frame(frame: &[u8]) -> Option<Result<LldpPdu<'_>, FramingError>> {
    decode_frame_with(&FrameGate::default(), frame)
}

/// Decode a raw Ethernet frame, filtering it with `gate` first.
pub fn decode_frame_with<'a>(
    gate: &FrameGate,
    frame: &'a [u8],
) -> Option<Result<LldpPdu<'a>, FramingError>> {
    let frame = EtherFrame::parse(Cursor::new(frame)).ok()?;
    let lldpdu = gate.check(frame)?;
    Some(LldpPdu::decode(lldpdu))
}

//! LLDP (Link Layer Discovery Protocol) Implementation
//!
//! This module decodes LLDP data units as defined in IEEE 802.1AB. An LLDPDU
//! is a sequence of TLVs, each introduced by a 16-bit header holding a 7-bit
//! type and a 9-bit value length:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |    Type     |     Length      |     Value ...                 |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! # Layers
//!
//! - [`TlvCursor`] splits the LLDPDU into [`Tlv`]s without interpreting the
//!   values. Its only failure is a [`FramingError`](crate::error::FramingError).
//! - [`decode`] turns a [`Tlv`] into a [`DecodedTlv`]. It never fails; values
//!   that do not fit their type come back as [`DecodedTlv::Unrecognized`].
//! - [`LldpPdu`] collects the decoded TLVs of one LLDPDU and reports
//!   [`PolicyViolation`](crate::error::PolicyViolation)s on request.
//!
//! Every value borrows from the frame buffer; nothing is copied unless a
//! string has to be repaired.
//!
//! # Example
//!
//! ```rust
//! use lldpkt::lldp::*;
//!
//! let lldpdu = [
//!     0x02, 0x07, 0x04, 0x00, 0x16, 0xc8, 0x86, 0x51, 0x80, // chassis id
//!     0x04, 0x08, 0x05, b'G', b'i', b'1', b'/', b'0', b'/', b'9', // port id
//!     0x06, 0x02, 0x00, 0x78, // ttl
//!     0x0e, 0x04, 0x00, 0x14, 0x00, 0x04, // capabilities
//!     0x00, 0x00, // end
//! ];
//!
//! for tlv in TlvCursor::new(&lldpdu) {
//!     let tlv = tlv?;
//!     match tlv.decode() {
//!         DecodedTlv::ChassisId(chassis) => {
//!             assert_eq!(chassis.subtype, ChassisIdSubtype::MAC_ADDRESS);
//!             assert_eq!(chassis.id.to_string(), "00:16:c8:86:51:80");
//!         }
//!         DecodedTlv::SystemCapabilities(caps) => {
//!             assert!(caps.supported.bridge() && caps.supported.router());
//!             assert!(caps.enabled.bridge() && !caps.enabled.router());
//!         }
//!         _ => {}
//!     }
//! }
//! # Ok::<(), lldpkt::error::FramingError>(())
//! ```

enum_sim! {
    /// An enum-like type for representing the TLV type code.
    pub struct TlvType (u8) {
        /// Terminates the LLDPDU.
        END_OF_LLDPDU = 0 => "End of LLDPDU",
        /// Mandatory, first.
        CHASSIS_ID = 1 => "Chassis ID",
        /// Mandatory, second.
        PORT_ID = 2 => "Port ID",
        /// Mandatory, third.
        TIME_TO_LIVE = 3 => "Time To Live",
        /// Optional.
        PORT_DESCRIPTION = 4 => "Port Description",
        /// Optional.
        SYSTEM_NAME = 5 => "System Name",
        /// Optional.
        SYSTEM_DESCRIPTION = 6 => "System Description",
        /// Optional.
        SYSTEM_CAPABILITIES = 7 => "System Capabilities",
        /// Optional, may repeat.
        MANAGEMENT_ADDRESS = 8 => "Management Address",
        /// Optional, may repeat.
        ORG_SPECIFIC = 127 => "Organizationally Specific",
    }
}

mod tlv;
pub use tlv::{Tlv, TlvCursor, TlvHeader, TLV_HEADER_LEN, TLV_MAX_VALUE_LEN};

mod fields;
pub use fields::{
    AddressFamily, CapabilitySet, ChassisId, ChassisIdSubtype, IdValue, IfNumberingSubtype,
    ManagementAddress, NetworkAddress, PortId, PortIdSubtype, SystemCapabilities,
};
pub use fields::{
    ID_MAX_LEN, ID_MIN_LEN, MANAGEMENT_ADDRESS_MIN_LEN, SYSTEM_CAPABILITIES_LEN, TTL_LEN,
};

mod org;
pub use org::{OrgSpecific, Oui, ORG_SPECIFIC_MIN_LEN};

mod decode;
pub use decode::{decode, DecodedTlv, Unrecognized};

mod pdu;
pub use pdu::LldpPdu;

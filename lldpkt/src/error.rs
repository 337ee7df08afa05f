//! Errors reported while decoding an LLDPDU.
//!
//! The three kinds differ in how far they reach:
//! * [`FramingError`] aborts the decoding of the whole PDU.
//! * [`FieldError`] only affects a single TLV, which is kept as
//!   [`Unrecognized`](crate::lldp::DecodedTlv::Unrecognized) with the error
//!   attached as its reason.
//! * [`PolicyViolation`] is found by validating an already decoded PDU and
//!   never interrupts decoding.

use quick_error::quick_error;

use crate::lldp::TlvType;

quick_error! {
    /// The TLV sequence itself is broken, no further TLV can be located.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum FramingError {
        /// `TruncatedValue(offset, type_code, length, available)`: the TLV
        /// header at `offset` declares `length` value bytes, but the LLDPDU
        /// only holds `available` more.
        TruncatedValue(offset: usize, type_code: u8, length: u16, available: usize) {
            display(
                "tlv type {} at offset {} declares {} value bytes, only {} available",
                type_code, offset, length, available
            )
        }
    }
}

quick_error! {
    /// The value of a single TLV can not be interpreted.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum FieldError {
        /// `TooShort(tlv, min, actual)`: the value is shorter than the minimum
        /// for its type.
        TooShort(tlv: TlvType, min: usize, actual: usize) {
            display("{} value needs at least {} bytes, got {}", tlv, min, actual)
        }
        /// `TooLong(tlv, max, actual)`: the value is longer than the maximum
        /// for its type.
        TooLong(tlv: TlvType, max: usize, actual: usize) {
            display("{} value allows at most {} bytes, got {}", tlv, max, actual)
        }
        /// `LengthMismatch(tlv, expected, actual)`: the value, or a fixed-size
        /// part of it, has the wrong size.
        LengthMismatch(tlv: TlvType, expected: usize, actual: usize) {
            display("{} value must be {} bytes, got {}", tlv, expected, actual)
        }
        /// `ManagementAddressTruncated(needed, available)`: a length field
        /// inside a management address points past the value.
        ManagementAddressTruncated(needed: usize, available: usize) {
            display("management address needs {} bytes, only {} available", needed, available)
        }
        /// The management address string length is zero, leaving no room for
        /// the address subtype.
        EmptyManagementAddress {
            display("management address string length is zero")
        }
        /// `EndOfLldpduNotEmpty(length)`: an End of LLDPDU TLV carries a value.
        EndOfLldpduNotEmpty(length: u16) {
            display("end of lldpdu carries {} value bytes", length)
        }
    }
}

quick_error! {
    /// A decoded PDU does not conform to IEEE 802.1AB.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum PolicyViolation {
        /// No Chassis ID TLV was decoded.
        MissingChassisId {
            display("missing chassis id tlv")
        }
        /// No Port ID TLV was decoded.
        MissingPortId {
            display("missing port id tlv")
        }
        /// No Time To Live TLV was decoded.
        MissingTimeToLive {
            display("missing time to live tlv")
        }
        /// `MandatoryOutOfOrder(position, expected, found)`: the mandatory
        /// TLVs are not the first three, in order.
        MandatoryOutOfOrder(position: usize, expected: TlvType, found: TlvType) {
            display("expected {} at position {}, found {}", expected, position, found)
        }
        /// A TLV that may appear at most once appears again.
        DuplicateTlv(tlv: TlvType) {
            display("duplicate {} tlv", tlv)
        }
        /// The PDU is not terminated by an End of LLDPDU TLV.
        MissingEndOfLldpdu {
            display("missing end of lldpdu tlv")
        }
        /// `NonEmptyEndOfLldpdu(length)`: the terminating End of LLDPDU TLV
        /// carries a value.
        NonEmptyEndOfLldpdu(length: u16) {
            display("end of lldpdu carries {} value bytes", length)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            FieldError::TooShort(TlvType::ORG_SPECIFIC, 4, 3).to_string(),
            "Organizationally Specific value needs at least 4 bytes, got 3"
        );
        assert_eq!(
            FieldError::ManagementAddressTruncated(20, 14).to_string(),
            "management address needs 20 bytes, only 14 available"
        );
        assert_eq!(
            PolicyViolation::MandatoryOutOfOrder(0, TlvType::CHASSIS_ID, TlvType::PORT_ID)
                .to_string(),
            "expected Chassis ID at position 0, found Port ID"
        );
        assert_eq!(
            PolicyViolation::DuplicateTlv(TlvType::from(9)).to_string(),
            "duplicate Reserved(9) tlv"
        );
    }
}

use std::borrow::Cow;

use log::debug;

use crate::error::FieldError;
use crate::lldp::fields::{decode_ttl, ChassisId, ManagementAddress, PortId, SystemCapabilities};
use crate::lldp::org::OrgSpecific;
use crate::lldp::{Tlv, TlvType};

/// A TLV decoded according to its type code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedTlv<'a> {
    /// Type 1.
    ChassisId(ChassisId<'a>),
    /// Type 2.
    PortId(PortId<'a>),
    /// Type 3, in seconds.
    TimeToLive(u16),
    /// Type 4.
    PortDescription(Cow<'a, str>),
    /// Type 5.
    SystemName(Cow<'a, str>),
    /// Type 6, may span several lines.
    SystemDescription(Cow<'a, str>),
    /// Type 7.
    SystemCapabilities(SystemCapabilities),
    /// Type 8.
    ManagementAddress(ManagementAddress<'a>),
    /// Type 127.
    OrgSpecific(OrgSpecific<'a>),
    /// Type 0 with an empty value.
    EndOfLldpdu,
    /// Any other type, or a TLV whose value could not be decoded.
    Unrecognized(Unrecognized<'a>),
}

impl<'a> DecodedTlv<'a> {
    /// The type code this TLV was carried under.
    pub fn tlv_type(&self) -> TlvType {
        match self {
            DecodedTlv::ChassisId(_) => TlvType::CHASSIS_ID,
            DecodedTlv::PortId(_) => TlvType::PORT_ID,
            DecodedTlv::TimeToLive(_) => TlvType::TIME_TO_LIVE,
            DecodedTlv::PortDescription(_) => TlvType::PORT_DESCRIPTION,
            DecodedTlv::SystemName(_) => TlvType::SYSTEM_NAME,
            DecodedTlv::SystemDescription(_) => TlvType::SYSTEM_DESCRIPTION,
            DecodedTlv::SystemCapabilities(_) => TlvType::SYSTEM_CAPABILITIES,
            DecodedTlv::ManagementAddress(_) => TlvType::MANAGEMENT_ADDRESS,
            DecodedTlv::OrgSpecific(_) => TlvType::ORG_SPECIFIC,
            DecodedTlv::EndOfLldpdu => TlvType::END_OF_LLDPDU,
            DecodedTlv::Unrecognized(unrecognized) => TlvType::from(unrecognized.type_code),
        }
    }
}

/// A TLV kept as raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unrecognized<'a> {
    /// Type code from the header.
    pub type_code: u8,
    /// Value length from the header.
    pub length: u16,
    /// The value bytes, verbatim.
    pub raw: &'a [u8],
    /// Why a known type could not be decoded, `None` for types without a
    /// decoder.
    pub reason: Option<FieldError>,
}

impl<'a> Unrecognized<'a> {
    fn new(tlv: Tlv<'a>, reason: Option<FieldError>) -> Self {
        Self {
            type_code: tlv.header().type_code(),
            length: tlv.header().length(),
            raw: tlv.value(),
            reason,
        }
    }
}

/// Decode a single TLV.
///
/// Decoding never fails: a value that does not fit its type is returned as
/// [`DecodedTlv::Unrecognized`] with the [`FieldError`] as reason and the
/// value bytes untouched.
pub fn decode(tlv: Tlv<'_>) -> DecodedTlv<'_> {
    match try_decode(tlv) {
        Ok(decoded) => decoded,
        Err(err) => {
            debug!(
                "keeping tlv type {} at offset {} undecoded: {}",
                tlv.header().type_code(),
                tlv.offset(),
                err
            );
            DecodedTlv::Unrecognized(Unrecognized::new(tlv, Some(err)))
        }
    }
}

fn try_decode(tlv: Tlv<'_>) -> Result<DecodedTlv<'_>, FieldError> {
    let value = tlv.value();
    let decoded = match tlv.tlv_type() {
        TlvType::END_OF_LLDPDU => {
            if !value.is_empty() {
                return Err(FieldError::EndOfLldpduNotEmpty(tlv.header().length()));
            }
            DecodedTlv::EndOfLldpdu
        }
        TlvType::CHASSIS_ID => DecodedTlv::ChassisId(ChassisId::decode(value)?),
        TlvType::PORT_ID => DecodedTlv::PortId(PortId::decode(value)?),
        TlvType::TIME_TO_LIVE => DecodedTlv::TimeToLive(decode_ttl(value)?),
        TlvType::PORT_DESCRIPTION => DecodedTlv::PortDescription(decode_text(value)),
        TlvType::SYSTEM_NAME => DecodedTlv::SystemName(decode_text(value)),
        TlvType::SYSTEM_DESCRIPTION => DecodedTlv::SystemDescription(decode_text(value)),
        TlvType::SYSTEM_CAPABILITIES => {
            DecodedTlv::SystemCapabilities(SystemCapabilities::decode(value)?)
        }
        TlvType::MANAGEMENT_ADDRESS => {
            DecodedTlv::ManagementAddress(ManagementAddress::decode(value)?)
        }
        TlvType::ORG_SPECIFIC => DecodedTlv::OrgSpecific(OrgSpecific::decode(value)?),
        _ => DecodedTlv::Unrecognized(Unrecognized::new(tlv, None)),
    };
    Ok(decoded)
}

// Invalid UTF-8 sequences are replaced instead of failing the TLV.
fn decode_text(value: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(value)
}

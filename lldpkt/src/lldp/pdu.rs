use log::debug;

use crate::error::{FramingError, PolicyViolation};
use crate::lldp::fields::{ChassisId, ManagementAddress, PortId, SystemCapabilities};
use crate::lldp::org::OrgSpecific;
use crate::lldp::{DecodedTlv, TlvCursor, TlvType, Unrecognized};

const MANDATORY: [TlvType; 3] = [TlvType::CHASSIS_ID, TlvType::PORT_ID, TlvType::TIME_TO_LIVE];

// Types that may appear at most once per LLDPDU.
const SINGLETONS: [TlvType; 7] = [
    TlvType::CHASSIS_ID,
    TlvType::PORT_ID,
    TlvType::TIME_TO_LIVE,
    TlvType::PORT_DESCRIPTION,
    TlvType::SYSTEM_NAME,
    TlvType::SYSTEM_DESCRIPTION,
    TlvType::SYSTEM_CAPABILITIES,
];

/// The decoded TLVs of one LLDPDU, in wire order.
///
/// Decoding does not enforce the IEEE 802.1AB structure; use
/// [`violations`](Self::violations) to check it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LldpPdu<'a> {
    tlvs: Vec<DecodedTlv<'a>>,
}

impl<'a> LldpPdu<'a> {
    /// Decode every TLV of `lldpdu`.
    ///
    /// Fails only if the TLV framing is broken. Values that can not be
    /// decoded are kept as [`DecodedTlv::Unrecognized`].
    pub fn decode(lldpdu: &'a [u8]) -> Result<Self, FramingError> {
        let tlvs = TlvCursor::new(lldpdu)
            .map(|tlv| tlv.map(|tlv| tlv.decode()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| {
                debug!("aborting lldpdu: {}", err);
                err
            })?;
        Ok(Self { tlvs })
    }

    /// Wrap already decoded TLVs.
    pub fn from_tlvs(tlvs: Vec<DecodedTlv<'a>>) -> Self {
        Self { tlvs }
    }

    /// The decoded TLVs.
    pub fn tlvs(&self) -> &[DecodedTlv<'a>] {
        &self.tlvs
    }

    /// Take the decoded TLVs out.
    pub fn into_tlvs(self) -> Vec<DecodedTlv<'a>> {
        self.tlvs
    }

    /// The first Chassis ID.
    pub fn chassis_id(&self) -> Option<&ChassisId<'a>> {
        self.tlvs.iter().find_map(|tlv| match tlv {
            DecodedTlv::ChassisId(chassis_id) => Some(chassis_id),
            _ => None,
        })
    }

    /// The first Port ID.
    pub fn port_id(&self) -> Option<&PortId<'a>> {
        self.tlvs.iter().find_map(|tlv| match tlv {
            DecodedTlv::PortId(port_id) => Some(port_id),
            _ => None,
        })
    }

    /// The first Time To Live, in seconds.
    pub fn ttl(&self) -> Option<u16> {
        self.tlvs.iter().find_map(|tlv| match tlv {
            DecodedTlv::TimeToLive(ttl) => Some(*ttl),
            _ => None,
        })
    }

    /// The first Port Description.
    pub fn port_description(&self) -> Option<&str> {
        self.tlvs.iter().find_map(|tlv| match tlv {
            DecodedTlv::PortDescription(text) => Some(text.as_ref()),
            _ => None,
        })
    }

    /// The first System Name.
    pub fn system_name(&self) -> Option<&str> {
        self.tlvs.iter().find_map(|tlv| match tlv {
            DecodedTlv::SystemName(text) => Some(text.as_ref()),
            _ => None,
        })
    }

    /// The first System Description.
    pub fn system_description(&self) -> Option<&str> {
        self.tlvs.iter().find_map(|tlv| match tlv {
            DecodedTlv::SystemDescription(text) => Some(text.as_ref()),
            _ => None,
        })
    }

    /// The first System Capabilities.
    pub fn capabilities(&self) -> Option<&SystemCapabilities> {
        self.tlvs.iter().find_map(|tlv| match tlv {
            DecodedTlv::SystemCapabilities(caps) => Some(caps),
            _ => None,
        })
    }

    /// All Management Addresses.
    pub fn management_addresses(&self) -> impl Iterator<Item = &ManagementAddress<'a>> {
        self.tlvs.iter().filter_map(|tlv| match tlv {
            DecodedTlv::ManagementAddress(addr) => Some(addr),
            _ => None,
        })
    }

    /// All Organizationally Specific TLVs.
    pub fn org_specific(&self) -> impl Iterator<Item = &OrgSpecific<'a>> {
        self.tlvs.iter().filter_map(|tlv| match tlv {
            DecodedTlv::OrgSpecific(org) => Some(org),
            _ => None,
        })
    }

    /// All TLVs kept as raw bytes.
    pub fn unrecognized(&self) -> impl Iterator<Item = &Unrecognized<'a>> {
        self.tlvs.iter().filter_map(|tlv| match tlv {
            DecodedTlv::Unrecognized(unrecognized) => Some(unrecognized),
            _ => None,
        })
    }

    /// Check the PDU against IEEE 802.1AB.
    ///
    /// An empty result means the PDU starts with Chassis ID, Port ID and Time
    /// To Live, has no duplicated singleton TLV and ends with an empty End of
    /// LLDPDU TLV.
    pub fn violations(&self) -> Vec<PolicyViolation> {
        let mut violations = Vec::new();

        for (position, expected) in MANDATORY.iter().copied().enumerate() {
            if !self.tlvs.iter().any(|tlv| is_decoded_as(tlv, expected)) {
                violations.push(match expected {
                    TlvType::CHASSIS_ID => PolicyViolation::MissingChassisId,
                    TlvType::PORT_ID => PolicyViolation::MissingPortId,
                    _ => PolicyViolation::MissingTimeToLive,
                });
                continue;
            }
            if let Some(found) = self.tlvs.get(position).map(DecodedTlv::tlv_type) {
                if found != expected {
                    violations.push(PolicyViolation::MandatoryOutOfOrder(
                        position, expected, found,
                    ));
                }
            }
        }

        for singleton in SINGLETONS {
            let count = self
                .tlvs
                .iter()
                .filter(|tlv| tlv.tlv_type() == singleton)
                .count();
            if count > 1 {
                violations.push(PolicyViolation::DuplicateTlv(singleton));
            }
        }

        match self.tlvs.last() {
            Some(DecodedTlv::EndOfLldpdu) => {}
            Some(DecodedTlv::Unrecognized(unrecognized)) if unrecognized.type_code == 0 => {
                violations.push(PolicyViolation::NonEmptyEndOfLldpdu(unrecognized.length));
            }
            _ => violations.push(PolicyViolation::MissingEndOfLldpdu),
        }

        violations
    }

    /// Shorthand for `violations().is_empty()`.
    pub fn is_conformant(&self) -> bool {
        self.violations().is_empty()
    }
}

fn is_decoded_as(tlv: &DecodedTlv<'_>, tlv_type: TlvType) -> bool {
    !matches!(tlv, DecodedTlv::Unrecognized(_)) && tlv.tlv_type() == tlv_type
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lldp::{IdValue, Oui};

    const CHASSIS: [u8; 9] = [0x02, 0x07, 0x04, 0x00, 0x16, 0xc8, 0x86, 0x51, 0x80];
    const PORT: [u8; 10] = [0x04, 0x08, 0x05, b'G', b'i', b'1', b'/', b'0', b'/', b'9'];
    const TTL: [u8; 4] = [0x06, 0x02, 0x00, 0x78];
    const END: [u8; 2] = [0x00, 0x00];

    fn concat(parts: &[&[u8]]) -> Vec<u8> {
        parts.iter().flat_map(|part| part.iter().copied()).collect()
    }

    #[test]
    fn minimal_pdu() {
        let bytes = concat(&[&CHASSIS, &PORT, &TTL, &END]);
        let pdu = LldpPdu::decode(&bytes).unwrap();

        assert_eq!(pdu.tlvs().len(), 4);
        assert_eq!(
            pdu.chassis_id().unwrap().id.to_string(),
            "00:16:c8:86:51:80"
        );
        assert_eq!(pdu.port_id().unwrap().id, IdValue::Text("Gi1/0/9"));
        assert_eq!(pdu.ttl(), Some(120));
        assert_eq!(pdu.system_name(), None);
        assert!(pdu.violations().is_empty());
        assert!(pdu.is_conformant());
    }

    #[test]
    fn empty_pdu() {
        let pdu = LldpPdu::decode(&[]).unwrap();
        assert!(pdu.tlvs().is_empty());
        assert_eq!(
            pdu.violations(),
            vec![
                PolicyViolation::MissingChassisId,
                PolicyViolation::MissingPortId,
                PolicyViolation::MissingTimeToLive,
                PolicyViolation::MissingEndOfLldpdu,
            ]
        );
    }

    #[test]
    fn rebuilt_from_tlvs() {
        let bytes = concat(&[&CHASSIS, &PORT, &TTL, &END]);
        let mut tlvs = LldpPdu::decode(&bytes).unwrap().into_tlvs();
        assert_eq!(tlvs.len(), 4);

        assert_eq!(tlvs.pop(), Some(DecodedTlv::EndOfLldpdu));
        let ttl = tlvs.remove(2);
        tlvs.insert(0, ttl);
        let pdu = LldpPdu::from_tlvs(tlvs);
        assert_eq!(pdu.ttl(), Some(120));
        assert_eq!(
            pdu.violations(),
            vec![
                PolicyViolation::MandatoryOutOfOrder(0, TlvType::CHASSIS_ID, TlvType::TIME_TO_LIVE),
                PolicyViolation::MandatoryOutOfOrder(1, TlvType::PORT_ID, TlvType::CHASSIS_ID),
                PolicyViolation::MandatoryOutOfOrder(2, TlvType::TIME_TO_LIVE, TlvType::PORT_ID),
                PolicyViolation::MissingEndOfLldpdu,
            ]
        );

        let pdu = LldpPdu::from_tlvs(Vec::new());
        assert_eq!(pdu, LldpPdu::default());
        assert_eq!(pdu.violations().len(), 4);
    }

    #[test]
    fn out_of_order_and_duplicates() {
        let bytes = concat(&[&PORT, &CHASSIS, &TTL, &TTL, &END]);
        let pdu = LldpPdu::decode(&bytes).unwrap();
        assert_eq!(
            pdu.violations(),
            vec![
                PolicyViolation::MandatoryOutOfOrder(0, TlvType::CHASSIS_ID, TlvType::PORT_ID),
                PolicyViolation::MandatoryOutOfOrder(1, TlvType::PORT_ID, TlvType::CHASSIS_ID),
                PolicyViolation::DuplicateTlv(TlvType::TIME_TO_LIVE),
            ]
        );
    }

    #[test]
    fn non_empty_end() {
        let bytes = concat(&[&CHASSIS, &PORT, &TTL, &[0x00, 0x01, 0xff], &TTL]);
        let pdu = LldpPdu::decode(&bytes).unwrap();
        // the cursor stops at the end tlv even though it is malformed
        assert_eq!(pdu.tlvs().len(), 4);
        assert_eq!(
            pdu.violations(),
            vec![PolicyViolation::NonEmptyEndOfLldpdu(1)]
        );
        assert_eq!(pdu.unrecognized().count(), 1);
    }

    #[test]
    fn field_error_does_not_stop_decoding() {
        let bad_mgmt = [0x10, 0x09, 0x20, 0x01, 10, 0, 0, 1, 0x02, 0x00, 0x00];
        let sys_name = [0x0a, 0x03, b's', b'w', b'1'];
        let bytes = concat(&[&CHASSIS, &PORT, &TTL, &bad_mgmt, &sys_name, &END]);
        let pdu = LldpPdu::decode(&bytes).unwrap();

        assert_eq!(pdu.tlvs().len(), 6);
        assert_eq!(pdu.management_addresses().count(), 0);
        let unrecognized = pdu.unrecognized().next().unwrap();
        assert_eq!(unrecognized.type_code, 8);
        assert_eq!(unrecognized.raw, &bad_mgmt[2..]);
        assert_eq!(pdu.system_name(), Some("sw1"));
        assert!(pdu.is_conformant());
    }

    #[test]
    fn undecodable_mandatory_counts_as_missing() {
        let bad_ttl = [0x06, 0x01, 0x78];
        let bytes = concat(&[&CHASSIS, &PORT, &bad_ttl, &END]);
        let pdu = LldpPdu::decode(&bytes).unwrap();
        assert_eq!(pdu.ttl(), None);
        assert_eq!(pdu.violations(), vec![PolicyViolation::MissingTimeToLive]);
    }

    #[test]
    fn framing_error_aborts() {
        let bytes = concat(&[&CHASSIS, &PORT, &TTL, &[0x0a, 0x14, b'a', b'b']]);
        assert_eq!(
            LldpPdu::decode(&bytes),
            Err(FramingError::TruncatedValue(23, 5, 20, 2))
        );
    }

    #[test]
    fn org_specific_accessor() {
        let mut org = vec![0xfe, 0x21, 0x00, 0x12, 0xbb, 0x05];
        org.extend_from_slice(b"WS-C3750G-24T (PowerPC405):L0");
        let bytes = concat(&[&CHASSIS, &PORT, &TTL, &org, &END]);
        let pdu = LldpPdu::decode(&bytes).unwrap();

        let found: Vec<_> = pdu.org_specific().collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].oui, Oui::TIA_TR41);
        assert_eq!(found[0].subtype, 5);
        assert_eq!(found[0].payload_str(), Some("WS-C3750G-24T (PowerPC405):L0"));
    }
}

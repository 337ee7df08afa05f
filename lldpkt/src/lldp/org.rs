use core::fmt;

use crate::error::FieldError;
use crate::lldp::fields::write_colon_hex;
use crate::lldp::TlvType;

/// Smallest Organizationally Specific value: OUI and subtype.
pub const ORG_SPECIFIC_MIN_LEN: usize = 4;

/// A 24-bit Organizationally Unique Identifier.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct Oui(pub [u8; 3]);

impl Oui {
    /// IEEE 802.1.
    pub const IEEE_802_1: Oui = Oui([0x00, 0x80, 0xc2]);
    /// IEEE 802.3.
    pub const IEEE_802_3: Oui = Oui([0x00, 0x12, 0x0f]);
    /// TIA TR-41 (LLDP-MED), also used by Cisco switches for inventory data.
    pub const TIA_TR41: Oui = Oui([0x00, 0x12, 0xbb]);
    /// Cisco Systems.
    pub const CISCO: Oui = Oui([0x00, 0x01, 0x42]);

    /// Return the OUI as a sequence of octets.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Oui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_colon_hex(f, &self.0)
    }
}

/// Organizationally Specific TLV.
///
/// Only the OUI and the subtype are interpreted; the payload belongs to the
/// organization and is left as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrgSpecific<'a> {
    /// The organization.
    pub oui: Oui,
    /// Organizationally defined subtype.
    pub subtype: u8,
    /// Organizationally defined information string.
    pub payload: &'a [u8],
}

impl<'a> OrgSpecific<'a> {
    pub(crate) fn decode(value: &'a [u8]) -> Result<Self, FieldError> {
        if value.len() < ORG_SPECIFIC_MIN_LEN {
            return Err(FieldError::TooShort(
                TlvType::ORG_SPECIFIC,
                ORG_SPECIFIC_MIN_LEN,
                value.len(),
            ));
        }
        Ok(Self {
            oui: Oui([value[0], value[1], value[2]]),
            subtype: value[3],
            payload: &value[4..],
        })
    }

    /// The payload as text, if it is valid UTF-8.
    pub fn payload_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.payload).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tia_inventory() {
        let mut value = vec![0x00, 0x12, 0xbb, 0x05];
        value.extend_from_slice(b"WS-C3750G-24T (PowerPC405):L0");

        let org = OrgSpecific::decode(&value).unwrap();
        assert_eq!(org.oui, Oui::TIA_TR41);
        assert_eq!(org.oui.to_string(), "00:12:bb");
        assert_eq!(org.subtype, 5);
        assert_eq!(org.payload, b"WS-C3750G-24T (PowerPC405):L0");
        assert_eq!(org.payload_str(), Some("WS-C3750G-24T (PowerPC405):L0"));
    }

    #[test]
    fn empty_payload() {
        let org = OrgSpecific::decode(&[0x00, 0x80, 0xc2, 0x01]).unwrap();
        assert_eq!(org.oui, Oui::IEEE_802_1);
        assert_eq!(org.subtype, 1);
        assert!(org.payload.is_empty());
    }

    #[test]
    fn binary_payload() {
        let org = OrgSpecific::decode(&[0x00, 0x12, 0x0f, 0x01, 0x03, 0x6c, 0x00, 0x00, 0x10])
            .unwrap();
        assert_eq!(org.oui, Oui::IEEE_802_3);
        assert_eq!(org.payload, &[0x03, 0x6c, 0x00, 0x00, 0x10]);
        assert_eq!(org.payload_str().map(|s| s.len()), Some(5));

        let org = OrgSpecific::decode(&[0x00, 0x01, 0x42, 0x01, 0xff]).unwrap();
        assert_eq!(org.payload_str(), None);
    }

    #[test]
    fn too_short() {
        assert_eq!(
            OrgSpecific::decode(&[0x00, 0x12, 0xbb]),
            Err(FieldError::TooShort(TlvType::ORG_SPECIFIC, 4, 3))
        );
    }
}

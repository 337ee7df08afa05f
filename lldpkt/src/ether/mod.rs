//! Ethernet II framing in front of the LLDPDU.

use core::fmt;

enum_sim! {
    /// An enum-like type for representing Ethertype in Ethernet frame.
    pub struct EtherType (u16) {
        /// Frame payload is Ipv4 protocol.
        IPV4 = 0x0800 => "IPv4",
        /// Frame payload is Arp protocol.
        ARP = 0x0806 => "ARP",
        /// Frame payload is tagged with an 802.1Q header.
        VLAN = 0x8100 => "802.1Q",
        /// Frame payload is Ipv6 protocol.
        IPV6 = 0x86DD => "IPv6",
        /// Frame payload is an LLDPDU.
        LLDP = 0x88CC => "LLDP",
    }
}

/// A six-octet Ethernet II address.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct EtherAddr(pub [u8; 6]);

impl EtherAddr {
    /// The broadcast address.
    pub const BROADCAST: EtherAddr = EtherAddr([0xff; 6]);

    /// Nearest bridge group address, the default LLDP destination.
    pub const LLDP_NEAREST_BRIDGE: EtherAddr = EtherAddr([0x01, 0x80, 0xc2, 0x00, 0x00, 0x0e]);

    /// Nearest non-TPMR bridge group address.
    pub const LLDP_NEAREST_NON_TPMR_BRIDGE: EtherAddr =
        EtherAddr([0x01, 0x80, 0xc2, 0x00, 0x00, 0x03]);

    /// Nearest customer bridge group address.
    pub const LLDP_NEAREST_CUSTOMER_BRIDGE: EtherAddr =
        EtherAddr([0x01, 0x80, 0xc2, 0x00, 0x00, 0x00]);

    /// Construct an Ethernet address from a sequence of octets, in big-endian.
    ///
    /// Returns `None` if `data` is not six octets long.
    pub fn from_bytes(data: &[u8]) -> Option<EtherAddr> {
        let bytes: [u8; 6] = data.try_into().ok()?;
        Some(EtherAddr(bytes))
    }

    /// Return an Ethernet address as a sequence of octets, in big-endian.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Query whether the 'multicast' bit in the OUI is set.
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// Query whether this is one of the group addresses LLDP agents send to.
    pub fn is_lldp_multicast(&self) -> bool {
        *self == Self::LLDP_NEAREST_BRIDGE
            || *self == Self::LLDP_NEAREST_NON_TPMR_BRIDGE
            || *self == Self::LLDP_NEAREST_CUSTOMER_BRIDGE
    }

    /// Parse a string with the form 'Aa:0b:Cc:11:02:33' into `EtherAddr`.
    pub fn parse_from<T: AsRef<str>>(s: T) -> Option<Self> {
        let mut result = [0; 6];
        let mut s = s.as_ref().split(':');
        for byte in result.iter_mut() {
            let hex = s.next()?;
            if hex.len() != 2 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            *byte = u8::from_str_radix(hex, 16).ok()?;
        }
        if s.next().is_some() {
            return None;
        }
        Some(Self(result))
    }
}

impl fmt::Display for EtherAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]
        )
    }
}

mod frame;
pub use frame::{EtherFrame, ETHER_FRAME_HEADER_LEN};

mod gate;
pub use gate::{DstFilter, FrameGate};

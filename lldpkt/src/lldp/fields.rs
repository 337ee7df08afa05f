use core::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

use byteorder::{ByteOrder, NetworkEndian};
use log::debug;

use crate::error::FieldError;
use crate::ether::EtherAddr;
use crate::lldp::TlvType;

/// Smallest Chassis ID / Port ID value: the subtype byte alone.
pub const ID_MIN_LEN: usize = 1;
/// Largest Chassis ID / Port ID value: the subtype byte and 255 id bytes.
pub const ID_MAX_LEN: usize = 256;
/// Byte length of a Time To Live value.
pub const TTL_LEN: usize = 2;
/// Byte length of a System Capabilities value.
pub const SYSTEM_CAPABILITIES_LEN: usize = 4;
/// Smallest Management Address value.
pub const MANAGEMENT_ADDRESS_MIN_LEN: usize = 9;

enum_sim! {
    /// An enum-like type for representing the Chassis ID subtype.
    pub struct ChassisIdSubtype (u8) {
        /// `entPhysicalAlias` of a chassis component.
        CHASSIS_COMPONENT = 1 => "Chassis component",
        /// `ifAlias` of an interface.
        INTERFACE_ALIAS = 2 => "Interface alias",
        /// `entPhysicalAlias` of a port or backplane component.
        PORT_COMPONENT = 3 => "Port component",
        /// A MAC address.
        MAC_ADDRESS = 4 => "MAC address",
        /// An address family number followed by a network address.
        NETWORK_ADDRESS = 5 => "Network address",
        /// `ifName` of an interface.
        INTERFACE_NAME = 6 => "Interface name",
        /// A locally assigned alphanumeric string.
        LOCALLY_ASSIGNED = 7 => "Locally assigned",
    }
}

enum_sim! {
    /// An enum-like type for representing the Port ID subtype.
    pub struct PortIdSubtype (u8) {
        /// `ifAlias` of the port.
        INTERFACE_ALIAS = 1 => "Interface alias",
        /// `entPhysicalAlias` of the port component.
        PORT_COMPONENT = 2 => "Port component",
        /// A MAC address.
        MAC_ADDRESS = 3 => "MAC address",
        /// An address family number followed by a network address.
        NETWORK_ADDRESS = 4 => "Network address",
        /// `ifName` of the port.
        INTERFACE_NAME = 5 => "Interface name",
        /// DHCP relay agent circuit ID, an opaque octet string.
        AGENT_CIRCUIT_ID = 6 => "Agent circuit ID",
        /// A locally assigned alphanumeric string.
        LOCALLY_ASSIGNED = 7 => "Locally assigned",
    }
}

enum_sim! {
    /// An enum-like type for representing the interface numbering subtype of
    /// a Management Address.
    pub struct IfNumberingSubtype (u8) {
        /// The interface number is not known.
        UNKNOWN = 1 => "Unknown",
        /// The interface number is an `ifIndex`.
        IF_INDEX = 2 => "ifIndex",
        /// The interface number is a system port number.
        SYSTEM_PORT_NUMBER = 3 => "System port number",
    }
}

enum_sim! {
    /// An enum-like type for representing IANA address family numbers.
    pub struct AddressFamily (u8) {
        /// IP version 4.
        IPV4 = 1 => "IPv4",
        /// IP version 6.
        IPV6 = 2 => "IPv6",
        /// NSAP.
        NSAP = 3 => "NSAP",
        /// IEEE 802 MAC address.
        MAC = 6 => "802",
    }
}

/// An address prefixed by its IANA address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkAddress<'a> {
    family: AddressFamily,
    addr: &'a [u8],
}

impl<'a> NetworkAddress<'a> {
    /// Pair an address family with the address bytes.
    #[inline]
    pub fn new(family: AddressFamily, addr: &'a [u8]) -> Self {
        Self { family, addr }
    }

    /// The address family.
    #[inline]
    pub fn family(&self) -> AddressFamily {
        self.family
    }

    /// The address bytes, without the family.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.addr
    }

    /// The address as IPv4, if the family and the length say so.
    pub fn as_ipv4(&self) -> Option<Ipv4Addr> {
        if self.family != AddressFamily::IPV4 {
            return None;
        }
        let octets: [u8; 4] = self.addr.try_into().ok()?;
        Some(Ipv4Addr::from(octets))
    }

    /// The address as IPv6, if the family and the length say so.
    pub fn as_ipv6(&self) -> Option<Ipv6Addr> {
        if self.family != AddressFamily::IPV6 {
            return None;
        }
        let octets: [u8; 16] = self.addr.try_into().ok()?;
        Some(Ipv6Addr::from(octets))
    }

    /// The address as a MAC address, if the family and the length say so.
    pub fn as_mac(&self) -> Option<EtherAddr> {
        if self.family != AddressFamily::MAC {
            return None;
        }
        EtherAddr::from_bytes(self.addr)
    }
}

impl<'a> fmt::Display for NetworkAddress<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ip) = self.as_ipv4() {
            write!(f, "{}", ip)
        } else if let Some(ip) = self.as_ipv6() {
            write!(f, "{}", ip)
        } else if let Some(mac) = self.as_mac() {
            write!(f, "{}", mac)
        } else {
            write_colon_hex(f, self.addr)
        }
    }
}

/// The identifier carried by a Chassis ID or Port ID TLV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdValue<'a> {
    /// MAC address subtype.
    Mac(EtherAddr),
    /// Network address subtype.
    Network(NetworkAddress<'a>),
    /// A textual subtype holding valid UTF-8.
    Text(&'a str),
    /// Opaque bytes: reserved or binary subtypes, or text that is not UTF-8.
    Raw(&'a [u8]),
}

impl<'a> fmt::Display for IdValue<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdValue::Mac(mac) => write!(f, "{}", mac),
            IdValue::Network(addr) => write!(f, "{}", addr),
            IdValue::Text(text) => f.write_str(text),
            IdValue::Raw(raw) => raw.iter().try_for_each(|b| write!(f, "{:02x}", b)),
        }
    }
}

/// Chassis ID TLV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChassisId<'a> {
    /// How `id` is to be read.
    pub subtype: ChassisIdSubtype,
    /// The identifier.
    pub id: IdValue<'a>,
}

impl<'a> ChassisId<'a> {
    pub(crate) fn decode(value: &'a [u8]) -> Result<Self, FieldError> {
        let (subtype, id) = split_id(TlvType::CHASSIS_ID, value)?;
        let subtype = ChassisIdSubtype::from(subtype);
        let id = match subtype {
            ChassisIdSubtype::MAC_ADDRESS => mac_id(TlvType::CHASSIS_ID, id)?,
            ChassisIdSubtype::NETWORK_ADDRESS => network_id(TlvType::CHASSIS_ID, value)?,
            ChassisIdSubtype::CHASSIS_COMPONENT
            | ChassisIdSubtype::INTERFACE_ALIAS
            | ChassisIdSubtype::PORT_COMPONENT
            | ChassisIdSubtype::INTERFACE_NAME
            | ChassisIdSubtype::LOCALLY_ASSIGNED => text_id(id),
            _ => IdValue::Raw(id),
        };
        Ok(Self { subtype, id })
    }
}

/// Port ID TLV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortId<'a> {
    /// How `id` is to be read.
    pub subtype: PortIdSubtype,
    /// The identifier.
    pub id: IdValue<'a>,
}

impl<'a> PortId<'a> {
    pub(crate) fn decode(value: &'a [u8]) -> Result<Self, FieldError> {
        let (subtype, id) = split_id(TlvType::PORT_ID, value)?;
        let subtype = PortIdSubtype::from(subtype);
        let id = match subtype {
            PortIdSubtype::MAC_ADDRESS => mac_id(TlvType::PORT_ID, id)?,
            PortIdSubtype::NETWORK_ADDRESS => network_id(TlvType::PORT_ID, value)?,
            PortIdSubtype::INTERFACE_ALIAS
            | PortIdSubtype::PORT_COMPONENT
            | PortIdSubtype::INTERFACE_NAME
            | PortIdSubtype::LOCALLY_ASSIGNED => text_id(id),
            _ => IdValue::Raw(id),
        };
        Ok(Self { subtype, id })
    }
}

fn split_id(tlv: TlvType, value: &[u8]) -> Result<(u8, &[u8]), FieldError> {
    if value.len() < ID_MIN_LEN {
        return Err(FieldError::TooShort(tlv, ID_MIN_LEN, value.len()));
    }
    if value.len() > ID_MAX_LEN {
        return Err(FieldError::TooLong(tlv, ID_MAX_LEN, value.len()));
    }
    Ok((value[0], &value[1..]))
}

fn mac_id(tlv: TlvType, id: &[u8]) -> Result<IdValue<'_>, FieldError> {
    EtherAddr::from_bytes(id)
        .map(IdValue::Mac)
        .ok_or(FieldError::LengthMismatch(tlv, 6, id.len()))
}

// `value` still holds the subtype byte, the family follows it.
fn network_id(tlv: TlvType, value: &[u8]) -> Result<IdValue<'_>, FieldError> {
    if value.len() < 2 {
        return Err(FieldError::TooShort(tlv, 2, value.len()));
    }
    Ok(IdValue::Network(NetworkAddress::new(
        AddressFamily::from(value[1]),
        &value[2..],
    )))
}

fn text_id(id: &[u8]) -> IdValue<'_> {
    match std::str::from_utf8(id) {
        Ok(text) => IdValue::Text(text),
        Err(_) => IdValue::Raw(id),
    }
}

pub(crate) fn decode_ttl(value: &[u8]) -> Result<u16, FieldError> {
    if value.len() != TTL_LEN {
        return Err(FieldError::LengthMismatch(
            TlvType::TIME_TO_LIVE,
            TTL_LEN,
            value.len(),
        ));
    }
    Ok(NetworkEndian::read_u16(value))
}

/// The system capabilities bitmap.
///
/// Only the eight capabilities of the base standard are named, the other
/// bits are kept in [`bits`](Self::bits) but not interpreted.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Default)]
pub struct CapabilitySet(u16);

static CAPABILITY_NAMES: [(u16, &str); 8] = [
    (CapabilitySet::OTHER, "Other"),
    (CapabilitySet::REPEATER, "Repeater"),
    (CapabilitySet::BRIDGE, "Bridge"),
    (CapabilitySet::WLAN_AP, "WLAN access point"),
    (CapabilitySet::ROUTER, "Router"),
    (CapabilitySet::TELEPHONE, "Telephone"),
    (CapabilitySet::DOCSIS_CABLE_DEVICE, "DOCSIS cable device"),
    (CapabilitySet::STATION_ONLY, "Station only"),
];

impl CapabilitySet {
    /// Other.
    pub const OTHER: u16 = 1 << 0;
    /// Repeater.
    pub const REPEATER: u16 = 1 << 1;
    /// MAC bridge.
    pub const BRIDGE: u16 = 1 << 2;
    /// WLAN access point.
    pub const WLAN_AP: u16 = 1 << 3;
    /// Router.
    pub const ROUTER: u16 = 1 << 4;
    /// Telephone.
    pub const TELEPHONE: u16 = 1 << 5;
    /// DOCSIS cable device.
    pub const DOCSIS_CABLE_DEVICE: u16 = 1 << 6;
    /// Station only.
    pub const STATION_ONLY: u16 = 1 << 7;

    /// Wrap a raw bitmap.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// The raw bitmap, reserved bits included.
    #[inline]
    pub const fn bits(&self) -> u16 {
        self.0
    }

    /// Query whether every bit of `flag` is set.
    #[inline]
    pub const fn contains(&self, flag: u16) -> bool {
        self.0 & flag == flag
    }

    /// Query whether none of the named capabilities is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names().next().is_none()
    }

    /// Other capability.
    #[inline]
    pub const fn other(&self) -> bool {
        self.contains(Self::OTHER)
    }

    /// Repeater capability.
    #[inline]
    pub const fn repeater(&self) -> bool {
        self.contains(Self::REPEATER)
    }

    /// MAC bridge capability.
    #[inline]
    pub const fn bridge(&self) -> bool {
        self.contains(Self::BRIDGE)
    }

    /// WLAN access point capability.
    #[inline]
    pub const fn wlan_ap(&self) -> bool {
        self.contains(Self::WLAN_AP)
    }

    /// Router capability.
    #[inline]
    pub const fn router(&self) -> bool {
        self.contains(Self::ROUTER)
    }

    /// Telephone capability.
    #[inline]
    pub const fn telephone(&self) -> bool {
        self.contains(Self::TELEPHONE)
    }

    /// DOCSIS cable device capability.
    #[inline]
    pub const fn docsis_cable_device(&self) -> bool {
        self.contains(Self::DOCSIS_CABLE_DEVICE)
    }

    /// Station only capability.
    #[inline]
    pub const fn station_only(&self) -> bool {
        self.contains(Self::STATION_ONLY)
    }

    /// Names of the set capabilities, lowest bit first.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        let bits = self.0;
        CAPABILITY_NAMES
            .iter()
            .filter(move |(flag, _)| bits & flag != 0)
            .map(|(_, name)| *name)
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = self.names();
        match names.next() {
            None => f.write_str("none"),
            Some(first) => {
                f.write_str(first)?;
                names.try_for_each(|name| write!(f, ", {}", name))
            }
        }
    }
}

/// System Capabilities TLV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemCapabilities {
    /// What the system can do.
    pub supported: CapabilitySet,
    /// What the system currently does.
    pub enabled: CapabilitySet,
}

impl SystemCapabilities {
    pub(crate) fn decode(value: &[u8]) -> Result<Self, FieldError> {
        if value.len() != SYSTEM_CAPABILITIES_LEN {
            return Err(FieldError::LengthMismatch(
                TlvType::SYSTEM_CAPABILITIES,
                SYSTEM_CAPABILITIES_LEN,
                value.len(),
            ));
        }
        Ok(Self {
            supported: CapabilitySet::from_bits(NetworkEndian::read_u16(&value[0..2])),
            enabled: CapabilitySet::from_bits(NetworkEndian::read_u16(&value[2..4])),
        })
    }
}

/// Management Address TLV.
///
/// ```text
/// +--------+--------+----------+--------+----------+--------+---------+
/// | addr   | addr   | address  | if num | if       | OID    | OID     |
/// | len N  | family | N-1 bytes| subtype| number   | len M  | M bytes |
/// | 1      | 1      |          | 1      | 4        | 1      |         |
/// +--------+--------+----------+--------+----------+--------+---------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagementAddress<'a> {
    /// The management address.
    pub address: NetworkAddress<'a>,
    /// How `if_number` is to be read.
    pub if_subtype: IfNumberingSubtype,
    /// The interface the address is bound to.
    pub if_number: u32,
    /// The BER-encoded object identifier of the hardware component or
    /// protocol entity, absent when its length is zero.
    pub oid: Option<&'a [u8]>,
}

impl<'a> ManagementAddress<'a> {
    pub(crate) fn decode(value: &'a [u8]) -> Result<Self, FieldError> {
        if value.len() < MANAGEMENT_ADDRESS_MIN_LEN {
            return Err(FieldError::TooShort(
                TlvType::MANAGEMENT_ADDRESS,
                MANAGEMENT_ADDRESS_MIN_LEN,
                value.len(),
            ));
        }

        // the address string length counts the family byte as well
        let addr_str_len = usize::from(value[0]);
        if addr_str_len == 0 {
            return Err(FieldError::EmptyManagementAddress);
        }
        let oid_len_pos = 1 + addr_str_len + 5;
        if oid_len_pos >= value.len() {
            return Err(FieldError::ManagementAddressTruncated(
                oid_len_pos + 1,
                value.len(),
            ));
        }

        let oid_start = oid_len_pos + 1;
        let oid_end = oid_start + usize::from(value[oid_len_pos]);
        if oid_end > value.len() {
            return Err(FieldError::ManagementAddressTruncated(oid_end, value.len()));
        }
        if oid_end < value.len() {
            debug!(
                "ignoring {} bytes after the management address oid",
                value.len() - oid_end
            );
        }

        let if_pos = 1 + addr_str_len;
        Ok(Self {
            address: NetworkAddress::new(AddressFamily::from(value[1]), &value[2..if_pos]),
            if_subtype: IfNumberingSubtype::from(value[if_pos]),
            if_number: NetworkEndian::read_u32(&value[if_pos + 1..if_pos + 5]),
            oid: if oid_end > oid_start {
                Some(&value[oid_start..oid_end])
            } else {
                None
            },
        })
    }
}

pub(crate) fn write_colon_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            f.write_str(":")?;
        }
        write!(f, "{:02x}", b)?;
    }
    Ok(())
}

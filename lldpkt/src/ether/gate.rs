use log::trace;

use crate::ether::{EtherAddr, EtherFrame, EtherType};
use crate::Cursor;

/// Which destination addresses the [`FrameGate`] lets through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DstFilter {
    /// Accept every destination, the socket layer already filters.
    #[default]
    Any,
    /// Accept only the IEEE 802.1AB group addresses.
    LldpMulticast,
}

/// Filters received Ethernet frames down to the ones carrying an LLDPDU.
///
/// Rejecting a frame is not an error: the gate simply returns `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameGate {
    dst_filter: DstFilter,
}

impl FrameGate {
    /// A gate that only checks the EtherType.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the destination filter.
    pub fn with_dst_filter(mut self, dst_filter: DstFilter) -> Self {
        self.dst_filter = dst_filter;
        self
    }

    /// The destination filter in use.
    pub fn dst_filter(&self) -> DstFilter {
        self.dst_filter
    }

    /// Return the LLDPDU bytes of `frame`, or `None` if it is not an LLDP
    /// frame.
    pub fn check<'a>(&self, frame: EtherFrame<Cursor<'a>>) -> Option<&'a [u8]> {
        let ethertype = frame.ethertype();
        if ethertype != EtherType::LLDP {
            trace!("dropping {} frame", ethertype);
            return None;
        }

        let dst = frame.dst_addr();
        if !self.accepts(dst) {
            trace!("dropping lldp frame sent to {}", dst);
            return None;
        }

        Some(frame.payload().chunk_shared_lifetime())
    }

    fn accepts(&self, dst: EtherAddr) -> bool {
        match self.dst_filter {
            DstFilter::Any => true,
            DstFilter::LldpMulticast => dst.is_lldp_multicast(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(dst: [u8; 6], ethertype: u16, payload: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&dst);
        buf.extend_from_slice(&[0x00, 0x16, 0xc8, 0x86, 0x51, 0x89]);
        buf.extend_from_slice(&ethertype.to_be_bytes());
        buf.extend_from_slice(payload);
        buf
    }

    #[test]
    fn pass_lldp_payload_unchanged() {
        let bytes = frame(EtherAddr::LLDP_NEAREST_BRIDGE.0, 0x88cc, &[0x00, 0x00, 0xaa]);
        let ethpkt = EtherFrame::parse(Cursor::new(&bytes[..])).unwrap();
        assert_eq!(FrameGate::new().check(ethpkt), Some(&bytes[14..]));
    }

    #[test]
    fn pass_empty_payload() {
        let bytes = frame(EtherAddr::LLDP_NEAREST_BRIDGE.0, 0x88cc, &[]);
        let ethpkt = EtherFrame::parse(Cursor::new(&bytes[..])).unwrap();
        assert_eq!(FrameGate::new().check(ethpkt), Some(&[][..]));
    }

    #[test]
    fn drop_other_ethertypes() {
        for ethertype in [0x0800, 0x0806, 0x86dd, 0x8100, 0x88cd] {
            let bytes = frame(EtherAddr::LLDP_NEAREST_BRIDGE.0, ethertype, &[0x00, 0x00]);
            let ethpkt = EtherFrame::parse(Cursor::new(&bytes[..])).unwrap();
            assert_eq!(FrameGate::new().check(ethpkt), None);
        }
    }

    #[test]
    fn dst_filter() {
        let unicast = frame([0x00, 0x11, 0x22, 0x33, 0x44, 0x55], 0x88cc, &[0x00, 0x00]);

        let gate = FrameGate::new();
        assert_eq!(gate.dst_filter(), DstFilter::Any);
        let ethpkt = EtherFrame::parse(Cursor::new(&unicast[..])).unwrap();
        assert!(gate.check(ethpkt).is_some());

        let gate = FrameGate::new().with_dst_filter(DstFilter::LldpMulticast);
        let ethpkt = EtherFrame::parse(Cursor::new(&unicast[..])).unwrap();
        assert!(gate.check(ethpkt).is_none());

        for dst in [
            EtherAddr::LLDP_NEAREST_BRIDGE,
            EtherAddr::LLDP_NEAREST_NON_TPMR_BRIDGE,
            EtherAddr::LLDP_NEAREST_CUSTOMER_BRIDGE,
        ] {
            let bytes = frame(dst.0, 0x88cc, &[0x00, 0x00]);
            let ethpkt = EtherFrame::parse(Cursor::new(&bytes[..])).unwrap();
            assert_eq!(gate.check(ethpkt), Some(&[0x00, 0x00][..]));
        }
    }
}

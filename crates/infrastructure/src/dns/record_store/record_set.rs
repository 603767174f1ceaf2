use burrow_dns_domain::RecordType;
use smallvec::SmallVec;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// The addresses held by one exact name or one wildcard pattern, split by
/// family the way they are served (A list, AAAA list). Insertion order is
/// answer order.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordSet {
    v4: SmallVec<[Ipv4Addr; 2]>,
    v6: SmallVec<[Ipv6Addr; 2]>,
}

impl RecordSet {
    pub fn push(&mut self, ip: IpAddr) {
        match ip {
            IpAddr::V4(addr) => self.v4.push(addr),
            IpAddr::V6(addr) => self.v6.push(addr),
        }
    }

    /// Removes every occurrence of `ip` from its family's list.
    pub fn remove(&mut self, ip: IpAddr) {
        match ip {
            IpAddr::V4(addr) => self.v4.retain(|a| *a != addr),
            IpAddr::V6(addr) => self.v6.retain(|a| *a != addr),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.v4.is_empty() && self.v6.is_empty()
    }

    pub fn has(&self, record_type: RecordType) -> bool {
        match record_type {
            RecordType::A => !self.v4.is_empty(),
            RecordType::AAAA => !self.v6.is_empty(),
            RecordType::PTR => false,
        }
    }

    pub fn addresses(&self, record_type: RecordType) -> Vec<IpAddr> {
        match record_type {
            RecordType::A => self.v4.iter().copied().map(IpAddr::V4).collect(),
            RecordType::AAAA => self.v6.iter().copied().map(IpAddr::V6).collect(),
            RecordType::PTR => Vec::new(),
        }
    }

    pub fn iter_all(&self) -> impl Iterator<Item = IpAddr> + '_ {
        self.v4
            .iter()
            .copied()
            .map(IpAddr::V4)
            .chain(self.v6.iter().copied().map(IpAddr::V6))
    }
}

use std::net::Ipv4Addr;

use ros_script_core::RouterConfig;

use crate::model::SubnetAssignment;
use crate::tables;

/// Assign the first usable host address of each declared subnet to its
/// network's bridge. Unparseable CIDRs become a WARNING comment; generation
/// never fails.
pub fn addresses(subnets: &[SubnetAssignment]) -> RouterConfig {
    let mut out = RouterConfig::new();
    for subnet in subnets {
        match first_host(&subnet.cidr) {
            Some((host, prefix)) => out.push(
                "/ip address",
                format!(
                    "add address={host}/{prefix} interface={}",
                    tables::bridge_name(subnet.network)
                ),
            ),
            None => out.push(
                "/ip address",
                format!(
                    "# WARNING: unparseable subnet \"{}\" for {}",
                    subnet.cidr, subnet.network
                ),
            ),
        }
    }
    out
}

/// First usable host of a CIDR base network, with its prefix length.
///
/// `192.168.10.0/24` → `192.168.10.1`, 24. Prefix 0 has no mask and
/// prefixes 31 and 32 have no distinct first host; all three are rejected.
fn first_host(cidr: &str) -> Option<(Ipv4Addr, u8)> {
    let (address, prefix) = cidr.split_once('/')?;
    let address: Ipv4Addr = address.trim().parse().ok()?;
    let prefix: u8 = prefix.trim().parse().ok()?;
    if prefix == 0 || prefix > 30 {
        return None;
    }
    let mask = u32::MAX << (32 - prefix);
    let network = u32::from(address) & mask;
    Some((Ipv4Addr::from(network + 1), prefix))
}

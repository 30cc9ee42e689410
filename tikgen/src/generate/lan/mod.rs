//! LAN composer: IPv6 baseline plus independently optional fragments for
//! wireless, tunnels, VPN servers, bridge assignment, and subnet addressing.

pub mod addressing;
pub mod bridge_ports;
pub mod ipv6;
pub mod tunnels;
pub mod wireless;

use ros_script_core::{merge_all, RouterConfig};

use crate::generate::vpn;
use crate::model::TopologyState;
use crate::tables;

/// Compose the LAN side of the topology. Every sub-section is optional;
/// absence contributes nothing rather than failing.
pub fn compose(state: &TopologyState) -> RouterConfig {
    let lan = &state.lan;
    let radios = state
        .choose
        .routers
        .first()
        .map(|router| router.radios.as_slice())
        .unwrap_or(&[]);

    let wireless = if radios.is_empty() {
        None
    } else if lan.wireless.is_empty() {
        Some(wireless::disable_radios(radios))
    } else {
        Some(wireless::access_points(radios, &lan.wireless))
    };

    merge_all([
        Some(ipv6::baseline()),
        wireless,
        Some(tunnels::tunnels(&lan.tunnels)),
        lan.vpn_server.as_ref().map(vpn::wrapper),
        Some(category_bridges(state)),
        Some(bridge_ports::ports(&lan.ethernet)),
        Some(addressing::addresses(&lan.subnets)),
    ])
}

/// Create every category bridge referenced by ports, subnets, tunnels or
/// wireless networks. Duplicate adds collapse in the final `shorten` pass.
fn category_bridges(state: &TopologyState) -> RouterConfig {
    let lan = &state.lan;
    let mut out = bridge_ports::bridges(&lan.ethernet);
    for subnet in &lan.subnets {
        out.push(
            "/interface bridge",
            format!("add name={}", tables::bridge_name(subnet.network)),
        );
    }
    for tunnel in &lan.tunnels {
        out.push(
            "/interface bridge",
            format!("add name={}", tables::bridge_name(tunnel.network)),
        );
    }
    for network in &lan.wireless {
        out.push(
            "/interface bridge",
            format!("add name={}", tables::bridge_name(network.network)),
        );
    }
    out
}

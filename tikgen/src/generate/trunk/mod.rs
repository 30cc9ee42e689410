//! Trunk/master VLAN composer.
//!
//! Active only in trunk mode with exactly one qualifying master router. Every
//! declared network category gets a VLAN interface on the trunk link and a
//! port on its category bridge, so slave routers can break the networks back
//! out by tag.

pub mod backhaul;

use ros_script_core::RouterConfig;

use crate::ifname;
use crate::model::{NetworkId, TopologyState};
use crate::tables;

/// Compose the trunk-side VLAN fan-out for the master router. Empty unless
/// the topology qualifies (trunk mode, single master, trunk interface set).
pub fn compose(state: &TopologyState) -> RouterConfig {
    let Some(master) = state.choose.trunk_master() else {
        return RouterConfig::new();
    };
    let Some(trunk) = master.trunk_interface.as_deref() else {
        return RouterConfig::new();
    };

    let networks = declared_networks(state);
    if networks.is_empty() {
        return RouterConfig::new();
    }

    let mut out = RouterConfig::new();
    let carriers: Vec<String> = if ifname::is_radio(trunk) {
        // Wireless trunk: the VLAN set rides on the synthetic station pair,
        // once per band.
        let Some(network) = state.lan.wireless.first() else {
            return RouterConfig::new();
        };
        out.absorb(backhaul::stations(network));
        backhaul::BAND_INTERFACES
            .iter()
            .map(|band| band.to_string())
            .collect()
    } else {
        vec![trunk.to_string()]
    };

    for carrier in &carriers {
        out.absorb(vlan_set(carrier, &networks, carriers.len() > 1));
    }

    // The untagged trunk link itself lands on the Split bridge when Split is
    // declared, the VPN bridge otherwise; with neither it stays unattached.
    if let Some(home) = [NetworkId::Split, NetworkId::Vpn]
        .into_iter()
        .find(|id| networks.contains(id))
    {
        for carrier in &carriers {
            out.push(
                "/interface bridge port",
                format!(
                    "add bridge={} interface={carrier}",
                    tables::bridge_name(home)
                ),
            );
        }
    }
    out
}

/// One VLAN interface per network on the carrier, each attached to its
/// category bridge. Dual-band carriers need distinct VLAN interface names.
fn vlan_set(carrier: &str, networks: &[NetworkId], qualify: bool) -> RouterConfig {
    let mut out = RouterConfig::new();
    for &network in networks {
        let id = tables::vlan_id(network);
        let name = if qualify {
            format!("vlan{id}-{network}-{carrier}")
        } else {
            format!("vlan{id}-{network}")
        };
        out.push(
            "/interface vlan",
            format!("add interface={carrier} name={name} vlan-id={id}"),
        );
        out.push(
            "/interface bridge port",
            format!(
                "add bridge={} interface={name}",
                tables::bridge_name(network)
            ),
        );
    }
    out
}

/// Every network category the topology declares, in declaration order,
/// without duplicates.
fn declared_networks(state: &TopologyState) -> Vec<NetworkId> {
    let lan = &state.lan;
    let mut networks = Vec::new();
    let mut push = |id: NetworkId, networks: &mut Vec<NetworkId>| {
        if !networks.contains(&id) {
            networks.push(id);
        }
    };
    for subnet in &lan.subnets {
        push(subnet.network, &mut networks);
    }
    for port in &lan.ethernet {
        push(port.network, &mut networks);
    }
    for wireless in &lan.wireless {
        push(wireless.network, &mut networks);
    }
    for tunnel in &lan.tunnels {
        push(tunnel.network, &mut networks);
    }
    for client in &lan.vpn_clients {
        push(NetworkId::VpnClient(client.protocol, client.index), &mut networks);
    }
    networks
}

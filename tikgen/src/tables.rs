//! Fixed lookup tables: VLAN ID allocation, bridge names, interface lists,
//! default gateways, reachability-check hosts. All read-only constants; no
//! mutable global state.

use crate::model::{NetworkId, NetworkType, TunnelKind, VpnProtocol};

/// General LAN interface list.
pub const LAN_LIST: &str = "LAN";

/// Reachability-check hosts for recursive failover routes, cycled by link
/// index.
pub const CHECK_IPS: [&str; 4] = ["1.1.1.1", "8.8.8.8", "9.9.9.9", "208.67.222.222"];

/// Check host for the link at `index`.
pub fn check_ip(index: usize) -> &'static str {
    CHECK_IPS[index % CHECK_IPS.len()]
}

/// Hardcoded DHCP gateway per network type, used when a link's modem hands
/// out its stock address.
pub fn default_gateway(network: NetworkType) -> &'static str {
    match network {
        NetworkType::Foreign => "192.168.1.1",
        NetworkType::Domestic => "192.168.0.1",
    }
}

/// Base VLAN ID for a VPN-client sub-network of this protocol (50–85 band).
pub fn client_vlan_base(protocol: VpnProtocol) -> u16 {
    match protocol {
        VpnProtocol::WireGuard => 50,
        VpnProtocol::OpenVpn => 56,
        VpnProtocol::Pptp => 62,
        VpnProtocol::L2tp => 68,
        VpnProtocol::Sstp => 74,
        VpnProtocol::Ikev2 => 80,
    }
}

/// Base VLAN ID for a VPN-server network of this protocol (100–128 band).
pub fn server_vlan_base(protocol: VpnProtocol) -> u16 {
    match protocol {
        VpnProtocol::WireGuard => 100,
        VpnProtocol::OpenVpn => 105,
        VpnProtocol::Pptp => 110,
        VpnProtocol::L2tp => 115,
        VpnProtocol::Sstp => 120,
        VpnProtocol::Ikev2 => 125,
    }
}

/// Base VLAN ID for a tunnel family (130–160 band).
pub fn tunnel_vlan_base(kind: TunnelKind) -> u16 {
    match kind {
        TunnelKind::Eoip => 130,
        TunnelKind::Gre => 140,
        TunnelKind::Ipip => 150,
        TunnelKind::Vxlan => 160,
    }
}

/// VLAN ID allocated to a network category on the trunk link.
///
/// Indexed Foreign-N/Domestic-N sub-networks allocate `base + N + 1` while
/// VPN-client sub-networks allocate `base + N`. The asymmetry is inherited
/// behavior and kept as-is.
pub fn vlan_id(network: NetworkId) -> u16 {
    match network {
        NetworkId::Split => 10,
        NetworkId::Domestic => 20,
        NetworkId::Foreign => 30,
        NetworkId::Vpn => 40,
        NetworkId::DomesticSub(n) => 20 + n + 1,
        NetworkId::ForeignSub(n) => 30 + n + 1,
        NetworkId::VpnClient(protocol, n) => client_vlan_base(protocol) + n,
    }
}

/// Concrete bridge carrying a network category's traffic.
pub fn bridge_name(network: NetworkId) -> String {
    match network {
        NetworkId::Split => "LANBridgeSplit".to_string(),
        NetworkId::Domestic => "LANBridgeDomestic".to_string(),
        NetworkId::Foreign => "LANBridgeForeign".to_string(),
        NetworkId::Vpn => "LANBridgeVPN".to_string(),
        NetworkId::DomesticSub(n) => format!("LANBridgeDomestic{n}"),
        NetworkId::ForeignSub(n) => format!("LANBridgeForeign{n}"),
        NetworkId::VpnClient(protocol, n) => format!("LANBridge{}{n}", protocol.as_str()),
    }
}

/// Per-protocol VPN interface list (`L2TP-LAN`, `SSTP-LAN`, ...).
pub fn vpn_list(protocol: VpnProtocol) -> String {
    format!("{}-LAN", protocol.as_str())
}

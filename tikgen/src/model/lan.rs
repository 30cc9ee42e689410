use serde::{Deserialize, Serialize};

use super::network::{NetworkId, TunnelKind, VpnProtocol};
use super::vpn::VpnServerConfig;

/// Ethernet port assigned to a logical network category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EthernetPort {
    pub name: String,
    pub network: NetworkId,
}

/// One advertised wireless network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WirelessNetwork {
    pub ssid: String,
    pub password: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default = "default_wireless_network")]
    pub network: NetworkId,
}

fn default_wireless_network() -> NetworkId {
    NetworkId::Split
}

/// Site-to-site tunnel attached to a category bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TunnelConfig {
    pub kind: TunnelKind,
    pub name: String,
    pub local_address: String,
    pub remote_address: String,
    #[serde(default = "default_tunnel_network")]
    pub network: NetworkId,
}

fn default_tunnel_network() -> NetworkId {
    NetworkId::Vpn
}

/// Outbound VPN client instance; consumes a VLAN slot in trunk mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VpnClientConfig {
    pub protocol: VpnProtocol,
    /// Sub-network index, allocated as `client base + index`.
    #[serde(default)]
    pub index: u16,
    #[serde(default)]
    pub name: String,
}

/// Subnet assignment for one network category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubnetAssignment {
    pub network: NetworkId,
    /// Base network in CIDR form, e.g. `192.168.10.0/24`.
    pub cidr: String,
}

/// LAN-side topology: ports, radios, tunnels, VPN servers/clients, subnets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LanConfig {
    #[serde(default)]
    pub ethernet: Vec<EthernetPort>,
    #[serde(default)]
    pub wireless: Vec<WirelessNetwork>,
    #[serde(default)]
    pub tunnels: Vec<TunnelConfig>,
    #[serde(default)]
    pub vpn_server: Option<VpnServerConfig>,
    #[serde(default)]
    pub vpn_clients: Vec<VpnClientConfig>,
    #[serde(default)]
    pub subnets: Vec<SubnetAssignment>,
}

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Traffic class a WAN uplink serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NetworkType {
    Foreign,
    Domestic,
}

impl NetworkType {
    pub fn as_str(self) -> &'static str {
        match self {
            NetworkType::Foreign => "Foreign",
            NetworkType::Domestic => "Domestic",
        }
    }

    /// Name of the per-type routing table (`to-Foreign`, `to-Domestic`).
    pub fn routing_table(self) -> String {
        format!("to-{}", self.as_str())
    }

    /// Name of the per-type WAN interface list.
    pub fn wan_list(self) -> String {
        format!("WAN-{}", self.as_str())
    }
}

/// VPN protocols handled by the server generators and the client VLAN table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VpnProtocol {
    #[serde(rename = "WireGuard")]
    WireGuard,
    #[serde(rename = "OpenVPN")]
    OpenVpn,
    #[serde(rename = "PPTP")]
    Pptp,
    #[serde(rename = "L2TP")]
    L2tp,
    #[serde(rename = "SSTP")]
    Sstp,
    #[serde(rename = "IKEv2")]
    Ikev2,
}

impl VpnProtocol {
    /// All protocols in generation order.
    pub const ALL: [VpnProtocol; 6] = [
        VpnProtocol::WireGuard,
        VpnProtocol::OpenVpn,
        VpnProtocol::Pptp,
        VpnProtocol::L2tp,
        VpnProtocol::Sstp,
        VpnProtocol::Ikev2,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VpnProtocol::WireGuard => "WireGuard",
            VpnProtocol::OpenVpn => "OpenVPN",
            VpnProtocol::Pptp => "PPTP",
            VpnProtocol::L2tp => "L2TP",
            VpnProtocol::Sstp => "SSTP",
            VpnProtocol::Ikev2 => "IKEv2",
        }
    }

    /// Lowercase short name used in interface and profile names.
    pub fn short(self) -> &'static str {
        match self {
            VpnProtocol::WireGuard => "wireguard",
            VpnProtocol::OpenVpn => "ovpn",
            VpnProtocol::Pptp => "pptp",
            VpnProtocol::L2tp => "l2tp",
            VpnProtocol::Sstp => "sstp",
            VpnProtocol::Ikev2 => "ikev2",
        }
    }
}

/// Tunnel families supported by the LAN composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TunnelKind {
    #[serde(rename = "EoIP")]
    Eoip,
    #[serde(rename = "GRE")]
    Gre,
    #[serde(rename = "IPIP")]
    Ipip,
    #[serde(rename = "VXLAN")]
    Vxlan,
}

impl TunnelKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TunnelKind::Eoip => "EoIP",
            TunnelKind::Gre => "GRE",
            TunnelKind::Ipip => "IPIP",
            TunnelKind::Vxlan => "VXLAN",
        }
    }

    /// CLI section that creates this tunnel family.
    pub fn section(self) -> &'static str {
        match self {
            TunnelKind::Eoip => "/interface eoip",
            TunnelKind::Gre => "/interface gre",
            TunnelKind::Ipip => "/interface ipip",
            TunnelKind::Vxlan => "/interface vxlan",
        }
    }
}

/// A logical network category: base categories, indexed Foreign-N/Domestic-N
/// sub-networks, and indexed VPN-client-protocol sub-networks.
///
/// String-encoded in topology files (`"Split"`, `"Foreign-2"`,
/// `"WireGuard-1"`); the VLAN and bridge lookup tables key off this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NetworkId {
    Split,
    Domestic,
    Foreign,
    Vpn,
    DomesticSub(u16),
    ForeignSub(u16),
    VpnClient(VpnProtocol, u16),
}

impl Display for NetworkId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NetworkId::Split => write!(f, "Split"),
            NetworkId::Domestic => write!(f, "Domestic"),
            NetworkId::Foreign => write!(f, "Foreign"),
            NetworkId::Vpn => write!(f, "VPN"),
            NetworkId::DomesticSub(n) => write!(f, "Domestic-{n}"),
            NetworkId::ForeignSub(n) => write!(f, "Foreign-{n}"),
            NetworkId::VpnClient(protocol, n) => write!(f, "{}-{n}", protocol.as_str()),
        }
    }
}

/// Error for unrecognized network category strings.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized network category: {0}")]
pub struct NetworkIdError(String);

impl FromStr for NetworkId {
    type Err = NetworkIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Split" => return Ok(NetworkId::Split),
            "Domestic" => return Ok(NetworkId::Domestic),
            "Foreign" => return Ok(NetworkId::Foreign),
            "VPN" => return Ok(NetworkId::Vpn),
            _ => {}
        }
        let Some((prefix, index)) = value.rsplit_once('-') else {
            return Err(NetworkIdError(value.to_string()));
        };
        let Ok(index) = index.parse::<u16>() else {
            return Err(NetworkIdError(value.to_string()));
        };
        match prefix {
            "Domestic" => Ok(NetworkId::DomesticSub(index)),
            "Foreign" => Ok(NetworkId::ForeignSub(index)),
            _ => VpnProtocol::ALL
                .into_iter()
                .find(|protocol| protocol.as_str() == prefix)
                .map(|protocol| NetworkId::VpnClient(protocol, index))
                .ok_or_else(|| NetworkIdError(value.to_string())),
        }
    }
}

impl TryFrom<String> for NetworkId {
    type Error = NetworkIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NetworkId> for String {
    fn from(value: NetworkId) -> Self {
        value.to_string()
    }
}

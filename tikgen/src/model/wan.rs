use serde::{Deserialize, Serialize};

use super::network::NetworkType;

/// Credentials for a wireless WAN station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WirelessCredentials {
    pub ssid: String,
    pub password: String,
}

/// Physical/logical interface description for one uplink.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InterfaceConfig {
    pub interface_name: String,
    #[serde(default)]
    pub vlan_id: Option<u16>,
    #[serde(default)]
    pub mac_address: Option<String>,
    #[serde(default)]
    pub wireless: Option<WirelessCredentials>,
}

/// Connection protocol for one uplink. Exactly one kind per link.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ConnectionConfig {
    #[default]
    Dhcp,
    Pppoe {
        username: String,
        password: String,
    },
    Static {
        /// Address with prefix, e.g. `203.0.113.2/30`.
        address: String,
        gateway: String,
    },
    Lte {
        #[serde(default)]
        apn: String,
    },
}

/// Multi-link balancing/failover strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MultiWanStrategy {
    LoadBalance,
    Failover,
    RoundRobin,
    Both,
}

/// Load-balancing classifier method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadBalanceMethod {
    #[serde(rename = "PCC")]
    Pcc,
    #[serde(rename = "NTH")]
    Nth,
    #[serde(rename = "ECMP")]
    Ecmp,
}

/// Per-link multi-WAN settings. One strategy governs a link set; the routing
/// engine reads the first link that declares one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiLinkConfig {
    pub strategy: MultiWanStrategy,
    #[serde(default = "default_method")]
    pub load_balance_method: LoadBalanceMethod,
}

fn default_method() -> LoadBalanceMethod {
    LoadBalanceMethod::Pcc
}

/// One WAN uplink.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WanLink {
    pub name: String,
    pub interface: InterfaceConfig,
    #[serde(default)]
    pub connection: ConnectionConfig,
    #[serde(default)]
    pub multi_link: Option<MultiLinkConfig>,
}

/// Per-network-type uplink lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WanConfig {
    #[serde(default)]
    pub foreign: Vec<WanLink>,
    #[serde(default)]
    pub domestic: Vec<WanLink>,
}

impl WanConfig {
    /// Links for one network type.
    pub fn links(&self, network: NetworkType) -> &[WanLink] {
        match network {
            NetworkType::Foreign => &self.foreign,
            NetworkType::Domestic => &self.domestic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConnectionConfig, WanLink};

    #[test]
    fn connection_kind_deserializes_as_tagged_enum() {
        let link: WanLink = serde_json::from_str(
            r#"{
                "name": "Foreign1",
                "interface": { "interface_name": "ether1" },
                "connection": { "kind": "pppoe", "username": "u", "password": "p" }
            }"#,
        )
        .expect("parse");
        assert!(matches!(link.connection, ConnectionConfig::Pppoe { .. }));
    }

    #[test]
    fn connection_defaults_to_dhcp() {
        let link: WanLink = serde_json::from_str(
            r#"{ "name": "Foreign1", "interface": { "interface_name": "ether1" } }"#,
        )
        .expect("parse");
        assert_eq!(link.connection, ConnectionConfig::Dhcp);
    }
}

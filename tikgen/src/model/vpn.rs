use serde::{Deserialize, Serialize};

use super::network::VpnProtocol;

/// One credentialed VPN user. A user may belong to several protocols at once
/// via `vpn_type`.
///
/// For WireGuard entries the `password` field carries the peer public key;
/// the PPP-family protocols and IKEv2 use it as a plain secret.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VpnUser {
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub vpn_type: Vec<VpnProtocol>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireGuardServerConfig {
    #[serde(default = "default_wireguard_port")]
    pub listen_port: u16,
    #[serde(default)]
    pub private_key: String,
    /// Server-side address with prefix, e.g. `10.100.0.1/24`.
    #[serde(default = "default_wireguard_address")]
    pub address: String,
}

fn default_wireguard_port() -> u16 {
    13231
}

fn default_wireguard_address() -> String {
    "10.100.0.1/24".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenVpnServerConfig {
    #[serde(default = "default_openvpn_port")]
    pub port: u16,
    #[serde(default)]
    pub certificate: String,
    #[serde(default = "default_openvpn_pool")]
    pub pool_range: String,
    #[serde(default = "default_openvpn_local")]
    pub local_address: String,
}

fn default_openvpn_port() -> u16 {
    1194
}

fn default_openvpn_pool() -> String {
    "10.101.0.2-10.101.0.254".to_string()
}

fn default_openvpn_local() -> String {
    "10.101.0.1".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PptpServerConfig {
    #[serde(default = "default_pptp_pool")]
    pub pool_range: String,
    #[serde(default = "default_pptp_local")]
    pub local_address: String,
}

fn default_pptp_pool() -> String {
    "10.102.0.2-10.102.0.254".to_string()
}

fn default_pptp_local() -> String {
    "10.102.0.1".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct L2tpServerConfig {
    #[serde(default)]
    pub ipsec_secret: String,
    #[serde(default = "default_l2tp_pool")]
    pub pool_range: String,
    #[serde(default = "default_l2tp_local")]
    pub local_address: String,
}

fn default_l2tp_pool() -> String {
    "10.103.0.2-10.103.0.254".to_string()
}

fn default_l2tp_local() -> String {
    "10.103.0.1".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SstpServerConfig {
    #[serde(default = "default_sstp_port")]
    pub port: u16,
    /// Server certificate name; `"none"` disables TLS and breaks the primary
    /// desktop client, so generation emits a WARNING comment for it.
    #[serde(default = "default_sstp_certificate")]
    pub certificate: String,
    #[serde(default)]
    pub verify_client_certificate: bool,
    #[serde(default = "default_sstp_pool")]
    pub pool_range: String,
    #[serde(default = "default_sstp_local")]
    pub local_address: String,
}

fn default_sstp_port() -> u16 {
    443
}

fn default_sstp_certificate() -> String {
    "none".to_string()
}

fn default_sstp_pool() -> String {
    "10.104.0.2-10.104.0.254".to_string()
}

fn default_sstp_local() -> String {
    "10.104.0.1".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ikev2ServerConfig {
    #[serde(default)]
    pub certificate: String,
    #[serde(default = "default_ikev2_pool")]
    pub pool_range: String,
    #[serde(default = "default_ikev2_split_dns")]
    pub dns_server: String,
}

fn default_ikev2_pool() -> String {
    "10.105.0.2-10.105.0.254".to_string()
}

fn default_ikev2_split_dns() -> String {
    "1.1.1.1".to_string()
}

/// Per-protocol server settings plus the shared user list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VpnServerConfig {
    #[serde(default)]
    pub wireguard: Option<WireGuardServerConfig>,
    #[serde(default)]
    pub openvpn: Option<OpenVpnServerConfig>,
    #[serde(default)]
    pub pptp: Option<PptpServerConfig>,
    #[serde(default)]
    pub l2tp: Option<L2tpServerConfig>,
    #[serde(default)]
    pub sstp: Option<SstpServerConfig>,
    #[serde(default)]
    pub ikev2: Option<Ikev2ServerConfig>,
    #[serde(default)]
    pub users: Vec<VpnUser>,
}

#[cfg(test)]
mod tests {
    use super::VpnServerConfig;
    use crate::model::network::VpnProtocol;

    #[test]
    fn users_accept_multiple_protocols() {
        let config: VpnServerConfig = serde_json::from_str(
            r#"{
                "l2tp": { "ipsec_secret": "s" },
                "users": [
                    { "username": "alice", "password": "pw", "vpn_type": ["L2TP", "SSTP"] }
                ]
            }"#,
        )
        .expect("parse");
        assert_eq!(
            config.users[0].vpn_type,
            vec![VpnProtocol::L2tp, VpnProtocol::Sstp]
        );
        assert_eq!(config.l2tp.expect("l2tp").pool_range, "10.103.0.2-10.103.0.254");
    }
}

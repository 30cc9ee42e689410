//! Topology State: the read-only description built by the external editor.
//!
//! Every sub-tree is optional and defaulted so that a partial topology file
//! still loads; generators treat absence as "feature disabled" and contribute
//! empty fragments, never errors.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod choose;
mod lan;
mod network;
mod vpn;
mod wan;

pub use choose::{ChooseConfig, RouterMode, RouterModel};
pub use lan::{
    EthernetPort, LanConfig, SubnetAssignment, TunnelConfig, VpnClientConfig, WirelessNetwork,
};
pub use network::{NetworkId, NetworkIdError, NetworkType, TunnelKind, VpnProtocol};
pub use vpn::{
    Ikev2ServerConfig, L2tpServerConfig, OpenVpnServerConfig, PptpServerConfig, SstpServerConfig,
    VpnServerConfig, VpnUser, WireGuardServerConfig,
};
pub use wan::{
    ConnectionConfig, InterfaceConfig, LoadBalanceMethod, MultiLinkConfig, MultiWanStrategy,
    WanConfig, WanLink, WirelessCredentials,
};

/// Sections the export layer should show; ignored by the generators.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShowConfig {
    #[serde(default)]
    pub sections: Vec<String>,
}

/// The full topology description handed to the compiler.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TopologyState {
    #[serde(default)]
    pub choose: ChooseConfig,
    #[serde(default)]
    pub wan: WanConfig,
    #[serde(default)]
    pub lan: LanConfig,
    /// Free-form script text appended after all generated sections.
    #[serde(default)]
    pub extra_config: Option<String>,
    #[serde(default)]
    pub show_config: Option<ShowConfig>,
}

/// Errors raised while loading a topology file.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("failed to read topology file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse JSON topology: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse TOML topology: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported topology file extension: {0}")]
    UnsupportedExtension(String),
}

/// Load a topology from disk, dispatching on the file extension
/// (`.json` or `.toml`).
pub fn load_topology(path: &Path) -> Result<TopologyState, TopologyError> {
    let text = fs::read_to_string(path)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(serde_json::from_str(&text)?),
        Some("toml") => Ok(toml::from_str(&text)?),
        other => Err(TopologyError::UnsupportedExtension(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::TopologyState;

    #[test]
    fn empty_object_loads_with_defaults() {
        let state: TopologyState = serde_json::from_str("{}").expect("parse");
        assert!(state.wan.foreign.is_empty());
        assert!(state.lan.vpn_server.is_none());
        assert!(state.extra_config.is_none());
    }

    #[test]
    fn toml_topology_parses() {
        let state: TopologyState = toml::from_str(
            r#"
                [choose]
                mode = "Trunk Mode"
                firmware = "7.15"

                [[lan.subnets]]
                network = "Split"
                cidr = "192.168.10.0/24"
            "#,
        )
        .expect("parse");
        assert_eq!(state.lan.subnets.len(), 1);
    }
}

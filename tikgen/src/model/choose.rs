use serde::{Deserialize, Serialize};

/// Overall topology role selected in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RouterMode {
    /// Single router serving its own LAN.
    #[default]
    #[serde(rename = "LAN Mode")]
    Lan,
    /// Master router distributing VLAN-tagged networks to slaves over a trunk.
    #[serde(rename = "Trunk Mode")]
    Trunk,
}

/// One physical router participating in the topology.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouterModel {
    #[serde(default)]
    pub model: String,
    /// Radio interface names this model carries (e.g. `wifi2.4`, `wifi5`).
    #[serde(default)]
    pub radios: Vec<String>,
    /// Trunk-mode master flag. Exactly one router may carry it.
    #[serde(default)]
    pub master: bool,
    /// Interface the master uses to reach the slave chain.
    #[serde(default)]
    pub trunk_interface: Option<String>,
}

/// Mode, firmware and router inventory.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChooseConfig {
    #[serde(default)]
    pub mode: RouterMode,
    #[serde(default)]
    pub firmware: String,
    #[serde(default)]
    pub routers: Vec<RouterModel>,
}

impl ChooseConfig {
    /// The single master router with a declared trunk interface, when the
    /// topology is in trunk mode and exactly one router qualifies.
    pub fn trunk_master(&self) -> Option<&RouterModel> {
        if self.mode != RouterMode::Trunk {
            return None;
        }
        let mut masters = self
            .routers
            .iter()
            .filter(|router| router.master && router.trunk_interface.is_some());
        let master = masters.next()?;
        if masters.next().is_some() {
            return None;
        }
        Some(master)
    }
}

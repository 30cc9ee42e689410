//! Top-level orchestrators tying the area generators together.

use ros_script_core::{merge, merge_all, parse, shorten, RouterConfig};

use crate::generate;
use crate::model::{NetworkType, TopologyState};

/// LAN-level script: both WAN network types with their routing, the LAN
/// composer, and any free-form extra configuration appended last.
pub fn lan(state: &TopologyState) -> RouterConfig {
    merge_all([
        Some(generate::wan::compose(NetworkType::Foreign, &state.wan)),
        Some(generate::wan::compose(NetworkType::Domestic, &state.wan)),
        Some(generate::lan::compose(state)),
        state
            .extra_config
            .as_deref()
            .map(|text| parse(text)),
    ])
}

/// Trunk-level script: the master/trunk VLAN fan-out, empty outside trunk
/// mode.
pub fn trunk(state: &TopologyState) -> RouterConfig {
    generate::trunk::compose(state)
}

/// The full deduplicated script for one topology.
pub fn full(state: &TopologyState) -> RouterConfig {
    shorten(merge([lan(state), trunk(state)]))
}

use ros_script_core::RouterConfig;

use crate::model::EthernetPort;
use crate::tables;

/// Create the category bridges referenced by the given ports. Duplicates are
/// collapsed later by `shorten`.
pub fn bridges(ports: &[EthernetPort]) -> RouterConfig {
    let mut out = RouterConfig::new();
    for port in ports {
        out.push(
            "/interface bridge",
            format!("add name={}", tables::bridge_name(port.network)),
        );
    }
    out
}

/// Attach each ethernet port to its network category's bridge.
pub fn ports(ports: &[EthernetPort]) -> RouterConfig {
    let mut out = RouterConfig::new();
    for port in ports {
        out.push(
            "/interface bridge port",
            format!(
                "add bridge={} interface={}",
                tables::bridge_name(port.network),
                port.name
            ),
        );
    }
    out
}

use ros_script_core::RouterConfig;

use crate::model::{TunnelConfig, TunnelKind};
use crate::tables;

/// Create the declared tunnels and attach each to its network's bridge.
pub fn tunnels(configs: &[TunnelConfig]) -> RouterConfig {
    let mut out = RouterConfig::new();
    for (index, tunnel) in configs.iter().enumerate() {
        out.push(tunnel.kind.section(), create_command(tunnel, index));
        out.push(
            "/interface bridge port",
            format!(
                "add bridge={} interface={}",
                tables::bridge_name(tunnel.network),
                tunnel.name
            ),
        );
    }
    out
}

fn create_command(tunnel: &TunnelConfig, index: usize) -> String {
    let base = format!(
        "add name={} local-address={} remote-address={}",
        tunnel.name, tunnel.local_address, tunnel.remote_address
    );
    match tunnel.kind {
        // EoIP and VXLAN need a per-tunnel numeric id; derive it from the
        // kind's VLAN base so it never collides across families.
        TunnelKind::Eoip => format!(
            "{base} tunnel-id={}",
            tables::tunnel_vlan_base(tunnel.kind) as usize + index
        ),
        TunnelKind::Vxlan => format!(
            "{base} vni={}",
            tables::tunnel_vlan_base(tunnel.kind) as usize + index
        ),
        TunnelKind::Gre | TunnelKind::Ipip => base,
    }
}

#[cfg(test)]
mod tests {
    use super::tunnels;
    use crate::model::{NetworkId, TunnelConfig, TunnelKind};

    fn tunnel(kind: TunnelKind, name: &str) -> TunnelConfig {
        TunnelConfig {
            kind,
            name: name.to_string(),
            local_address: "203.0.113.2".to_string(),
            remote_address: "198.51.100.7".to_string(),
            network: NetworkId::Vpn,
        }
    }

    #[test]
    fn eoip_gets_a_tunnel_id_and_a_bridge_port() {
        let out = tunnels(&[tunnel(TunnelKind::Eoip, "office")]);
        let commands = out.get("/interface eoip").expect("eoip");
        assert!(commands[0].contains("tunnel-id=130"));
        assert_eq!(
            out.get("/interface bridge port").expect("ports")[0],
            "add bridge=LANBridgeVPN interface=office"
        );
    }

    #[test]
    fn gre_has_no_tunnel_id() {
        let out = tunnels(&[tunnel(TunnelKind::Gre, "branch")]);
        assert!(!out.get("/interface gre").expect("gre")[0].contains("tunnel-id"));
    }
}

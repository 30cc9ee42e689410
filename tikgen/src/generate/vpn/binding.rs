use ros_script_core::RouterConfig;

use super::matching_users;
use crate::model::{VpnProtocol, VpnServerConfig};
use crate::tables;

/// Protocols that support static per-user server bindings.
const BINDING_PROTOCOLS: [VpnProtocol; 4] = [
    VpnProtocol::L2tp,
    VpnProtocol::Pptp,
    VpnProtocol::Sstp,
    VpnProtocol::OpenVpn,
];

/// Static per-user binding interfaces.
///
/// Each credentialed user of an enabled PPP-family protocol gets one
/// dedicated server-binding interface (`{protocol}-{username}`), registered
/// into both the general `LAN` list and the protocol's `{PROTO}-LAN` list so
/// per-user firewall and queue rules can target it.
pub fn bindings(config: &VpnServerConfig) -> RouterConfig {
    let mut out = RouterConfig::new();
    for protocol in BINDING_PROTOCOLS {
        if !protocol_enabled(config, protocol) {
            continue;
        }
        for user in matching_users(&config.users, protocol) {
            let name = format!("{}-{}", protocol.short(), user.username);
            out.push(
                binding_section(protocol),
                format!("add name={name} user={}", user.username),
            );
            out.push(
                "/interface list member",
                format!("add interface={name} list={}", tables::LAN_LIST),
            );
            out.push(
                "/interface list member",
                format!("add interface={name} list={}", tables::vpn_list(protocol)),
            );
        }
    }
    out
}

fn protocol_enabled(config: &VpnServerConfig, protocol: VpnProtocol) -> bool {
    match protocol {
        VpnProtocol::L2tp => config.l2tp.is_some(),
        VpnProtocol::Pptp => config.pptp.is_some(),
        VpnProtocol::Sstp => config.sstp.is_some(),
        VpnProtocol::OpenVpn => config.openvpn.is_some(),
        VpnProtocol::WireGuard | VpnProtocol::Ikev2 => false,
    }
}

fn binding_section(protocol: VpnProtocol) -> &'static str {
    match protocol {
        VpnProtocol::L2tp => "/interface l2tp-server",
        VpnProtocol::Pptp => "/interface pptp-server",
        VpnProtocol::Sstp => "/interface sstp-server",
        VpnProtocol::OpenVpn => "/interface ovpn-server",
        // Guarded by BINDING_PROTOCOLS.
        VpnProtocol::WireGuard | VpnProtocol::Ikev2 => unreachable!(),
    }
}

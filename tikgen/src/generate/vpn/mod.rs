//! VPN server protocol generators.
//!
//! Six structurally parallel modules (WireGuard, OpenVPN, PPTP, L2TP, SSTP,
//! IKEv2), each exposing `server`, `users` and `wrapper` with one shape. The
//! aggregate [`wrapper`] merges all six plus the per-user static bindings.
//! A protocol with zero matching credentialed users still emits an
//! explanatory placeholder comment so regenerated scripts stay diffable.

pub mod binding;
pub mod ikev2;
pub mod l2tp;
pub mod openvpn;
pub mod pptp;
pub mod sstp;
pub mod wireguard;

use ros_script_core::{merge_all, RouterConfig};

use crate::model::{VpnProtocol, VpnServerConfig, VpnUser};

/// Users whose `vpn_type` includes the given protocol.
pub fn matching_users<'a>(users: &'a [VpnUser], protocol: VpnProtocol) -> Vec<&'a VpnUser> {
    users
        .iter()
        .filter(|user| user.vpn_type.contains(&protocol))
        .collect()
}

/// Emit one entry per matching user into `section`, or the placeholder
/// comment when nobody matches.
pub(crate) fn user_entries(
    section: &str,
    protocol: VpnProtocol,
    users: &[VpnUser],
    entry: impl Fn(&VpnUser) -> String,
) -> RouterConfig {
    let matched = matching_users(users, protocol);
    if matched.is_empty() {
        return RouterConfig::from_section(
            section,
            [format!("# No users configured for {}", protocol.as_str())],
        );
    }
    RouterConfig::from_section(section, matched.into_iter().map(|user| entry(user)))
}

/// Summary comment block prepended by each protocol wrapper: enabled flag,
/// key settings, matched-user count.
pub(crate) fn summary(
    protocol: VpnProtocol,
    settings: &[(&str, String)],
    matched: usize,
) -> RouterConfig {
    let mut config = RouterConfig::new();
    config.push_comment(format!("# === {} server ===", protocol.as_str()));
    config.push_comment(format!("# enabled=yes users={matched}"));
    for (key, value) in settings {
        config.push_comment(format!("# {key}={value}"));
    }
    config
}

/// Merge all six protocol wrappers and the static bindings for one VPN
/// server configuration. Disabled protocols contribute nothing.
pub fn wrapper(config: &VpnServerConfig) -> RouterConfig {
    let users = &config.users;
    merge_all([
        Some(wireguard::wrapper(config.wireguard.as_ref(), users)),
        Some(openvpn::wrapper(config.openvpn.as_ref(), users)),
        Some(pptp::wrapper(config.pptp.as_ref(), users)),
        Some(l2tp::wrapper(config.l2tp.as_ref(), users)),
        Some(sstp::wrapper(config.sstp.as_ref(), users)),
        Some(ikev2::wrapper(config.ikev2.as_ref(), users)),
        Some(binding::bindings(config)),
    ])
}

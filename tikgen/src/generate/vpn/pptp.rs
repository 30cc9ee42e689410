use ros_script_core::{merge, RouterConfig};

use super::{matching_users, summary, user_entries};
use crate::model::{PptpServerConfig, VpnProtocol, VpnUser};

const PROTOCOL: VpnProtocol = VpnProtocol::Pptp;

/// PPTP server: interface enable, pool, profile, TCP/GRE firewall accepts.
pub fn server(config: &PptpServerConfig) -> RouterConfig {
    let mut out = RouterConfig::new();
    out.push(
        "/ip pool",
        format!("add name=pptp-pool ranges={}", config.pool_range),
    );
    out.push(
        "/ppp profile",
        format!(
            "add name=pptp-profile local-address={} remote-address=pptp-pool use-encryption=yes",
            config.local_address
        ),
    );
    out.push(
        "/interface pptp-server server",
        "set enabled=yes default-profile=pptp-profile",
    );
    out.push(
        "/ip firewall filter",
        "add chain=input protocol=tcp dst-port=1723 action=accept comment=\"PPTP server\"",
    );
    out.push(
        "/ip firewall filter",
        "add chain=input protocol=gre action=accept comment=\"PPTP GRE\"",
    );
    out
}

/// PPP secrets for users enrolled in PPTP.
pub fn users(users: &[VpnUser]) -> RouterConfig {
    user_entries("/ppp secret", PROTOCOL, users, |user| {
        format!(
            "add name={} password={} service=pptp profile=pptp-profile",
            user.username, user.password
        )
    })
}

/// Summary comment plus server and user sections.
pub fn wrapper(config: Option<&PptpServerConfig>, user_list: &[VpnUser]) -> RouterConfig {
    let Some(config) = config else {
        return RouterConfig::new();
    };
    let matched = matching_users(user_list, PROTOCOL).len();
    merge([
        summary(
            PROTOCOL,
            &[
                ("pool", config.pool_range.clone()),
                ("local-address", config.local_address.clone()),
            ],
            matched,
        ),
        server(config),
        users(user_list),
    ])
}

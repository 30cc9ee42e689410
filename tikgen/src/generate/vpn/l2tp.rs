use ros_script_core::{merge, RouterConfig};

use super::{matching_users, summary, user_entries};
use crate::model::{L2tpServerConfig, VpnProtocol, VpnUser};

const PROTOCOL: VpnProtocol = VpnProtocol::L2tp;

/// L2TP/IPsec server: interface enable, pool, profile, firewall accepts.
pub fn server(config: &L2tpServerConfig) -> RouterConfig {
    let mut out = RouterConfig::new();
    out.push(
        "/ip pool",
        format!("add name=l2tp-pool ranges={}", config.pool_range),
    );
    out.push(
        "/ppp profile",
        format!(
            "add name=l2tp-profile local-address={} remote-address=l2tp-pool use-encryption=yes",
            config.local_address
        ),
    );
    out.push(
        "/interface l2tp-server server",
        format!(
            "set enabled=yes default-profile=l2tp-profile use-ipsec=yes ipsec-secret={}",
            config.ipsec_secret
        ),
    );
    out.push(
        "/ip firewall filter",
        "add chain=input protocol=udp dst-port=500,1701,4500 action=accept comment=\"L2TP server\"",
    );
    out.push(
        "/ip firewall filter",
        "add chain=input protocol=ipsec-esp action=accept comment=\"L2TP IPsec\"",
    );
    out
}

/// PPP secrets for users enrolled in L2TP.
pub fn users(users: &[VpnUser]) -> RouterConfig {
    user_entries("/ppp secret", PROTOCOL, users, |user| {
        format!(
            "add name={} password={} service=l2tp profile=l2tp-profile",
            user.username, user.password
        )
    })
}

/// Summary comment plus server and user sections.
pub fn wrapper(config: Option<&L2tpServerConfig>, user_list: &[VpnUser]) -> RouterConfig {
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

use ros_script_core::{merge, RouterConfig};

use super::{matching_users, summary, user_entries};
use crate::model::{OpenVpnServerConfig, VpnProtocol, VpnUser};

const PROTOCOL: VpnProtocol = VpnProtocol::OpenVpn;

/// OpenVPN server: interface enable, pool, profile, TCP firewall accept.
pub fn server(config: &OpenVpnServerConfig) -> RouterConfig {
    let mut out = RouterConfig::new();
    out.push(
        "/ip pool",
        format!("add name=openvpn-pool ranges={}", config.pool_range),
    );
    out.push(
        "/ppp profile",
        format!(
            "add name=openvpn-profile local-address={} remote-address=openvpn-pool \
             use-encryption=yes",
            config.local_address
        ),
    );
    out.push(
        "/interface ovpn-server server",
        format!(
            "set enabled=yes port={} mode=ip default-profile=openvpn-profile certificate={} \
             auth=sha256 cipher=aes256-cbc require-client-certificate=no",
            config.port, config.certificate
        ),
    );
    out.push(
        "/ip firewall filter",
        format!(
            "add chain=input protocol=tcp dst-port={} action=accept comment=\"OpenVPN server\"",
            config.port
        ),
    );
    out
}

/// PPP secrets for users enrolled in OpenVPN.
pub fn users(users: &[VpnUser]) -> RouterConfig {
    user_entries("/ppp secret", PROTOCOL, users, |user| {
        format!(
            "add name={} password={} service=ovpn profile=openvpn-profile",
            user.username, user.password
        )
    })
}

/// Summary comment plus server and user sections.
pub fn wrapper(config: Option<&OpenVpnServerConfig>, user_list: &[VpnUser]) -> RouterConfig {
    let Some(config) = config else {
        return RouterConfig::new();
    };
    let matched = matching_users(user_list, PROTOCOL).len();
    merge([
        summary(
            PROTOCOL,
            &[
                ("port", config.port.to_string()),
                ("certificate", config.certificate.clone()),
            ],
            matched,
        ),
        server(config),
        users(user_list),
    ])
}

use ros_script_core::{merge, RouterConfig};

use super::{matching_users, summary, user_entries};
use crate::model::{SstpServerConfig, VpnProtocol, VpnUser};

const PROTOCOL: VpnProtocol = VpnProtocol::Sstp;

/// SSTP server: interface enable, pool, profile, TCP firewall accept.
///
/// Risky settings are surfaced as inline WARNING comments instead of errors:
/// `certificate=none` and `verify-client-certificate=yes` both break the
/// Windows SSTP client, which is the protocol's primary consumer.
pub fn server(config: &SstpServerConfig) -> RouterConfig {
    let mut out = RouterConfig::new();
    out.push(
        "/ip pool",
        format!("add name=sstp-pool ranges={}", config.pool_range),
    );
    out.push(
        "/ppp profile",
        format!(
            "add name=sstp-profile local-address={} remote-address=sstp-pool use-encryption=yes",
            config.local_address
        ),
    );
    if config.certificate == "none" {
        out.push(
            "/interface sstp-server server",
            "# WARNING: certificate=none is rejected by the Windows SSTP client",
        );
    }
    if config.verify_client_certificate {
        out.push(
            "/interface sstp-server server",
            "# WARNING: verify-client-certificate=yes is rejected by the Windows SSTP client",
        );
    }
    out.push(
        "/interface sstp-server server",
        format!(
            "set enabled=yes default-profile=sstp-profile port={} certificate={} \
             verify-client-certificate={}",
            config.port,
            config.certificate,
            if config.verify_client_certificate {
                "yes"
            } else {
                "no"
            }
        ),
    );
    out.push(
        "/ip firewall filter",
        format!(
            "add chain=input protocol=tcp dst-port={} action=accept comment=\"SSTP server\"",
            config.port
        ),
    );
    out
}

/// PPP secrets for users enrolled in SSTP.
pub fn users(users: &[VpnUser]) -> RouterConfig {
    user_entries("/ppp secret", PROTOCOL, users, |user| {
        format!(
            "add name={} password={} service=sstp profile=sstp-profile",
            user.username, user.password
        )
    })
}

/// Summary comment plus server and user sections.
pub fn wrapper(config: Option<&SstpServerConfig>, user_list: &[VpnUser]) -> RouterConfig {
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

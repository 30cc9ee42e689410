use ros_script_core::{merge, RouterConfig};

use super::{matching_users, summary, user_entries};
use crate::model::{Ikev2ServerConfig, VpnProtocol, VpnUser};

const PROTOCOL: VpnProtocol = VpnProtocol::Ikev2;

/// IKEv2 server: mode-config, policy group, proposal, passive peer, pool,
/// UDP/ESP firewall accepts.
pub fn server(config: &Ikev2ServerConfig) -> RouterConfig {
    let mut out = RouterConfig::new();
    out.push(
        "/ip pool",
        format!("add name=ikev2-pool ranges={}", config.pool_range),
    );
    out.push(
        "/ip ipsec mode-config",
        format!(
            "add name=ikev2-conf address-pool=ikev2-pool static-dns={}",
            config.dns_server
        ),
    );
    out.push("/ip ipsec policy group", "add name=ikev2-policies");
    out.push(
        "/ip ipsec profile",
        "add name=ikev2-profile hash-algorithm=sha256 enc-algorithm=aes-256 dh-group=modp2048",
    );
    out.push(
        "/ip ipsec proposal",
        "add name=ikev2-proposal auth-algorithms=sha256 enc-algorithms=aes-256-cbc pfs-group=none",
    );
    out.push(
        "/ip ipsec peer",
        "add name=ikev2-peer exchange-mode=ike2 profile=ikev2-profile passive=yes",
    );
    out.push(
        "/ip firewall filter",
        "add chain=input protocol=udp dst-port=500,4500 action=accept comment=\"IKEv2 server\"",
    );
    out.push(
        "/ip firewall filter",
        "add chain=input protocol=ipsec-esp action=accept comment=\"IKEv2 ESP\"",
    );
    out
}

/// IPsec identities for users enrolled in IKEv2.
pub fn users(users: &[VpnUser]) -> RouterConfig {
    user_entries("/ip ipsec identity", PROTOCOL, users, |user| {
        format!(
            "add peer=ikev2-peer auth-method=pre-shared-key secret=\"{}\" \
             generate-policy=port-strict mode-config=ikev2-conf \
             policy-template-group=ikev2-policies comment={}",
            user.password, user.username
        )
    })
}

/// Summary comment plus server and identity sections.
pub fn wrapper(config: Option<&Ikev2ServerConfig>, user_list: &[VpnUser]) -> RouterConfig {
    let Some(config) = config else {
        return RouterConfig::new();
    };
    let matched = matching_users(user_list, PROTOCOL).len();
    merge([
        summary(
            PROTOCOL,
            &[
                ("pool", config.pool_range.clone()),
                ("certificate", config.certificate.clone()),
            ],
            matched,
        ),
        server(config),
        users(user_list),
    ])
}

#[cfg(test)]
mod tests {
    use super::{server, users};
    use crate::model::{Ikev2ServerConfig, VpnProtocol, VpnUser};

    #[test]
    fn server_builds_the_full_ipsec_chain() {
        let out = server(&Ikev2ServerConfig {
            certificate: "vpn-cert".to_string(),
            pool_range: "10.105.0.2-10.105.0.254".to_string(),
            dns_server: "1.1.1.1".to_string(),
        });
        for section in [
            "/ip pool",
            "/ip ipsec mode-config",
            "/ip ipsec policy group",
            "/ip ipsec proposal",
            "/ip ipsec peer",
            "/ip firewall filter",
        ] {
            assert!(out.get(section).is_some(), "{section} missing");
        }
    }

    #[test]
    fn identities_reference_the_passive_peer() {
        let out = users(&[VpnUser {
            username: "frank".to_string(),
            password: "psk".to_string(),
            vpn_type: vec![VpnProtocol::Ikev2],
        }]);
        let identities = out.get("/ip ipsec identity").expect("identities");
        assert!(identities[0].contains("peer=ikev2-peer"));
        assert!(identities[0].contains("comment=frank"));
    }
}

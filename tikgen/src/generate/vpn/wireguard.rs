use ros_script_core::{merge, RouterConfig};

use super::{matching_users, summary, user_entries};
use crate::model::{VpnProtocol, VpnUser, WireGuardServerConfig};

const PROTOCOL: VpnProtocol = VpnProtocol::WireGuard;

/// Interface name shared by the server and its peers.
pub const SERVER_INTERFACE: &str = "wireguard-server";

/// WireGuard server: interface, server address, UDP firewall accept.
pub fn server(config: &WireGuardServerConfig) -> RouterConfig {
    let mut out = RouterConfig::new();
    out.push(
        "/interface wireguard",
        format!(
            "add name={SERVER_INTERFACE} listen-port={} private-key=\"{}\"",
            config.listen_port, config.private_key
        ),
    );
    out.push(
        "/ip address",
        format!(
            "add address={} interface={SERVER_INTERFACE}",
            config.address
        ),
    );
    out.push(
        "/ip firewall filter",
        format!(
            "add chain=input protocol=udp dst-port={} action=accept comment=\"WireGuard server\"",
            config.listen_port
        ),
    );
    out
}

/// Peers for users enrolled in WireGuard. The user's `password` field carries
/// the peer public key.
pub fn users(users: &[VpnUser]) -> RouterConfig {
    user_entries("/interface wireguard peers", PROTOCOL, users, |user| {
        format!(
            "add interface={SERVER_INTERFACE} public-key=\"{}\" allowed-address=0.0.0.0/0 \
             comment={}",
            user.password, user.username
        )
    })
}

/// Summary comment plus server and peer sections.
pub fn wrapper(config: Option<&WireGuardServerConfig>, user_list: &[VpnUser]) -> RouterConfig {
    let Some(config) = config else {
        return RouterConfig::new();
    };
    let matched = matching_users(user_list, PROTOCOL).len();
    merge([
        summary(
            PROTOCOL,
            &[
                ("listen-port", config.listen_port.to_string()),
                ("address", config.address.clone()),
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
    use crate::model::{VpnProtocol, VpnUser, WireGuardServerConfig};

    #[test]
    fn server_creates_interface_address_and_firewall_rule() {
        let out = server(&WireGuardServerConfig {
            listen_port: 13231,
            private_key: "priv".to_string(),
            address: "10.100.0.1/24".to_string(),
        });
        assert!(out.get("/interface wireguard").is_some());
        assert!(out.get("/ip address").expect("address")[0].contains("10.100.0.1/24"));
        assert!(out.get("/ip firewall filter").expect("filter")[0].contains("dst-port=13231"));
    }

    #[test]
    fn peers_come_from_the_shared_user_list() {
        let out = users(&[VpnUser {
            username: "erin".to_string(),
            password: "PUBKEY=".to_string(),
            vpn_type: vec![VpnProtocol::WireGuard],
        }]);
        let peers = out.get("/interface wireguard peers").expect("peers");
        assert!(peers[0].contains("public-key=\"PUBKEY=\""));
        assert!(peers[0].contains("comment=erin"));
    }

    #[test]
    fn empty_user_list_yields_the_placeholder_comment() {
        let out = users(&[]);
        assert_eq!(
            out.get("/interface wireguard peers").expect("peers")[0],
            "# No users configured for WireGuard"
        );
    }
}

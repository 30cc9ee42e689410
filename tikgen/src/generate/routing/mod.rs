//! Multi-WAN routing engine: single-link static routing or one of the
//! multi-link load-balancing/failover strategies.

pub mod failover;
pub mod load_balance;

use ros_script_core::{merge, RouterConfig};

use crate::model::{
    ConnectionConfig, LoadBalanceMethod, MultiWanStrategy, NetworkType, WanLink,
};
use crate::tables;

pub use load_balance::Classifier;

/// Routing view of one composed link: its routed interface and gateway form.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRoute {
    pub name: String,
    pub interface: String,
    pub gateway: String,
}

impl LinkRoute {
    /// Derive the gateway form from the connection kind: PPPoE/LTE use the
    /// interface name alone, Static uses `{gateway}%{interface}`, DHCP uses
    /// the hardcoded per-network-type gateway `%{interface}`.
    pub fn for_link(network: NetworkType, link: &WanLink, interface: &str) -> Self {
        let gateway = match &link.connection {
            ConnectionConfig::Pppoe { .. } | ConnectionConfig::Lte { .. } => interface.to_string(),
            ConnectionConfig::Static { gateway, .. } => format!("{gateway}%{interface}"),
            ConnectionConfig::Dhcp => {
                format!("{}%{interface}", tables::default_gateway(network))
            }
        };
        Self {
            name: link.name.clone(),
            interface: interface.to_string(),
            gateway,
        }
    }
}

/// Default static routing for a single-uplink network type: exactly one
/// distance-1 default route in the `to-{NetworkType}` table.
pub fn single_link(network: NetworkType, route: &LinkRoute) -> RouterConfig {
    RouterConfig::from_section(
        "/ip route",
        [format!(
            "add dst-address=0.0.0.0/0 gateway={} distance=1 routing-table={} comment=\"{} default\"",
            route.gateway,
            network.routing_table(),
            route.name
        )],
    )
}

/// Multi-uplink routing for one network type. Empty for zero or one links.
///
/// Strategy comes from the first link carrying a `MultiLinkConfig`; absent
/// strategy defaults to Failover.
pub fn multi_link(network: NetworkType, links: &[WanLink], routes: &[LinkRoute]) -> RouterConfig {
    if routes.len() <= 1 {
        return RouterConfig::new();
    }

    let declared = links.iter().find_map(|link| link.multi_link);
    let strategy = declared
        .map(|config| config.strategy)
        .unwrap_or(MultiWanStrategy::Failover);
    let method = declared
        .map(|config| config.load_balance_method)
        .unwrap_or(LoadBalanceMethod::Pcc);

    match strategy {
        MultiWanStrategy::LoadBalance => load_balance_rules(network, routes, method),
        MultiWanStrategy::Failover => failover::rules(network, routes),
        MultiWanStrategy::RoundRobin => {
            load_balance::rules(network, routes, Classifier::Nth)
        }
        MultiWanStrategy::Both => merge([
            load_balance_rules(network, routes, method),
            failover::rules(network, routes),
        ]),
    }
}

fn load_balance_rules(
    network: NetworkType,
    routes: &[LinkRoute],
    method: LoadBalanceMethod,
) -> RouterConfig {
    match method {
        LoadBalanceMethod::Pcc => load_balance::rules(network, routes, Classifier::Pcc),
        LoadBalanceMethod::Nth => load_balance::rules(network, routes, Classifier::Nth),
        // ECMP is an alias for the PCC rule set.
        LoadBalanceMethod::Ecmp => load_balance::rules(network, routes, Classifier::Pcc),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{multi_link, single_link, LinkRoute};
    use crate::model::{
        ConnectionConfig, InterfaceConfig, LoadBalanceMethod, MultiLinkConfig, MultiWanStrategy,
        NetworkType, WanLink,
    };

    fn dhcp_link(name: &str, port: &str) -> WanLink {
        WanLink {
            name: name.to_string(),
            interface: InterfaceConfig {
                interface_name: port.to_string(),
                ..InterfaceConfig::default()
            },
            ..WanLink::default()
        }
    }

    #[test]
    fn gateway_forms_follow_connection_kind() {
        let mut link = dhcp_link("Foreign1", "ether1");
        assert_eq!(
            LinkRoute::for_link(NetworkType::Foreign, &link, "ether1-macvlan").gateway,
            "192.168.1.1%ether1-macvlan"
        );

        link.connection = ConnectionConfig::Static {
            address: "203.0.113.2/30".to_string(),
            gateway: "203.0.113.1".to_string(),
        };
        assert_eq!(
            LinkRoute::for_link(NetworkType::Foreign, &link, "ether1-macvlan").gateway,
            "203.0.113.1%ether1-macvlan"
        );

        link.connection = ConnectionConfig::Pppoe {
            username: "u".to_string(),
            password: "p".to_string(),
        };
        assert_eq!(
            LinkRoute::for_link(NetworkType::Foreign, &link, "pppoe-client-Foreign1").gateway,
            "pppoe-client-Foreign1"
        );
    }

    #[test]
    fn single_link_emits_exactly_one_default_route() {
        let route = LinkRoute::for_link(
            NetworkType::Domestic,
            &dhcp_link("Domestic1", "ether2"),
            "ether2-macvlan",
        );
        let config = single_link(NetworkType::Domestic, &route);
        let routes = config.get("/ip route").expect("routes");
        assert_eq!(routes.len(), 1);
        assert_eq!(
            routes[0],
            "add dst-address=0.0.0.0/0 gateway=192.168.0.1%ether2-macvlan distance=1 \
             routing-table=to-Domestic comment=\"Domestic1 default\""
        );
    }

    #[test]
    fn multi_link_is_empty_for_zero_or_one_links() {
        let link = dhcp_link("Foreign1", "ether1");
        let route = LinkRoute::for_link(NetworkType::Foreign, &link, "ether1-macvlan");
        assert!(multi_link(NetworkType::Foreign, &[], &[]).is_empty());
        assert!(multi_link(NetworkType::Foreign, &[link], std::slice::from_ref(&route)).is_empty());
    }

    #[test]
    fn strategy_defaults_to_failover() {
        let links = vec![dhcp_link("Foreign1", "ether1"), dhcp_link("Foreign2", "ether2")];
        let routes: Vec<LinkRoute> = links
            .iter()
            .map(|link| {
                LinkRoute::for_link(
                    NetworkType::Foreign,
                    link,
                    &format!("{}-macvlan", link.interface.interface_name),
                )
            })
            .collect();
        let config = multi_link(NetworkType::Foreign, &links, &routes);
        let commands = config.get("/ip route").expect("routes");
        assert!(commands.iter().any(|c| c.contains("check-gateway=ping")));
        assert!(config.get("/ip firewall mangle").is_none());
    }

    #[test]
    fn both_strategy_emits_balancing_and_failover() {
        let mut links = vec![dhcp_link("Foreign1", "ether1"), dhcp_link("Foreign2", "ether2")];
        links[0].multi_link = Some(MultiLinkConfig {
            strategy: MultiWanStrategy::Both,
            load_balance_method: LoadBalanceMethod::Nth,
        });
        let routes: Vec<LinkRoute> = links
            .iter()
            .map(|link| {
                LinkRoute::for_link(
                    NetworkType::Foreign,
                    link,
                    &format!("{}-macvlan", link.interface.interface_name),
                )
            })
            .collect();
        let config = multi_link(NetworkType::Foreign, &links, &routes);
        assert!(config.get("/ip firewall mangle").is_some());
        let route_commands = config.get("/ip route").expect("routes");
        assert!(route_commands.iter().any(|c| c.contains("check-gateway=ping")));
        assert!(route_commands.iter().any(|c| c.contains("routing-table=to-ISP-1")));
    }

    #[test]
    fn round_robin_matches_the_nth_rule_set() {
        let mut links = vec![dhcp_link("Foreign1", "ether1"), dhcp_link("Foreign2", "ether2")];
        let routes: Vec<LinkRoute> = links
            .iter()
            .map(|link| {
                LinkRoute::for_link(
                    NetworkType::Foreign,
                    link,
                    &format!("{}-macvlan", link.interface.interface_name),
                )
            })
            .collect();

        links[0].multi_link = Some(MultiLinkConfig {
            strategy: MultiWanStrategy::RoundRobin,
            load_balance_method: LoadBalanceMethod::Pcc,
        });
        let round_robin = multi_link(NetworkType::Foreign, &links, &routes);

        links[0].multi_link = Some(MultiLinkConfig {
            strategy: MultiWanStrategy::LoadBalance,
            load_balance_method: LoadBalanceMethod::Nth,
        });
        let nth = multi_link(NetworkType::Foreign, &links, &routes);

        assert_eq!(round_robin, nth);
    }

    #[test]
    fn ecmp_falls_back_to_the_pcc_rule_set() {
        let mut links = vec![dhcp_link("Foreign1", "ether1"), dhcp_link("Foreign2", "ether2")];
        let routes: Vec<LinkRoute> = links
            .iter()
            .map(|link| {
                LinkRoute::for_link(
                    NetworkType::Foreign,
                    link,
                    &format!("{}-macvlan", link.interface.interface_name),
                )
            })
            .collect();

        links[0].multi_link = Some(MultiLinkConfig {
            strategy: MultiWanStrategy::LoadBalance,
            load_balance_method: LoadBalanceMethod::Ecmp,
        });
        let ecmp = multi_link(NetworkType::Foreign, &links, &routes);

        links[0].multi_link = Some(MultiLinkConfig {
            strategy: MultiWanStrategy::LoadBalance,
            load_balance_method: LoadBalanceMethod::Pcc,
        });
        let pcc = multi_link(NetworkType::Foreign, &links, &routes);

        assert_eq!(ecmp, pcc);
    }
}

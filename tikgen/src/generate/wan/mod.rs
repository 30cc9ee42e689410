//! Per-uplink composer: interface stack, connection protocol, WAN list
//! registration, and the hand-off into the routing engine.

pub mod connection;
pub mod interface;

use ros_script_core::{merge, RouterConfig};

use crate::generate::routing::{self, LinkRoute};
use crate::model::{NetworkType, WanConfig, WanLink};

/// Compose one uplink: stack, connection, WAN list membership. Returns the
/// fragment plus the routing view of the link.
pub fn compose_link(network: NetworkType, link: &WanLink) -> (RouterConfig, LinkRoute) {
    let stacked = interface::stack(link);
    let (connection_config, final_name) = connection::connect(link, &stacked);
    let route = LinkRoute::for_link(network, link, &final_name);

    let mut config = merge([stacked.config, connection_config]);
    config.push(
        "/interface list member",
        format!("add interface={final_name} list={}", network.wan_list()),
    );
    (config, route)
}

/// Compose every uplink of one network type plus its routing: a single link
/// gets the distance-1 static default route, multiple links go through the
/// multi-WAN engine.
pub fn compose(network: NetworkType, wan: &WanConfig) -> RouterConfig {
    let links = wan.links(network);
    if links.is_empty() {
        return RouterConfig::new();
    }

    let mut fragments = Vec::new();
    let mut routes = Vec::new();
    for link in links {
        let (fragment, route) = compose_link(network, link);
        fragments.push(fragment);
        routes.push(route);
    }

    let routing = if links.len() == 1 {
        routing::single_link(network, &routes[0])
    } else {
        routing::multi_link(network, links, &routes)
    };
    fragments.push(routing);
    merge(fragments)
}

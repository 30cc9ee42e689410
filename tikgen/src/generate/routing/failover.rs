use ros_script_core::RouterConfig;

use super::LinkRoute;
use crate::model::NetworkType;
use crate::tables;

/// Recursive gateway-monitoring failover.
///
/// Per link: one host route pinning the link's reachability-check IP to its
/// gateway, then a default route via the check IP with `check-gateway=ping`
/// and distance equal to the link's position. Losing pings to the check host
/// deactivates the route and traffic shifts to the next distance.
///
/// Past the check-IP table the hosts repeat, and links sharing a check host
/// are no longer monitored independently; that gets a WARNING comment.
pub fn rules(network: NetworkType, routes: &[LinkRoute]) -> RouterConfig {
    let mut config = RouterConfig::new();
    if routes.len() > tables::CHECK_IPS.len() {
        config.push(
            "/ip route",
            format!(
                "# WARNING: {} links share {} reachability-check hosts; links on the same \
                 host are not monitored independently",
                routes.len(),
                tables::CHECK_IPS.len()
            ),
        );
    }
    for (index, route) in routes.iter().enumerate() {
        let n = index + 1;
        let check = tables::check_ip(index);
        config.push(
            "/ip route",
            format!(
                "add dst-address={check}/32 gateway={} scope=10 comment=\"{} check host\"",
                route.gateway, route.name
            ),
        );
        config.push(
            "/ip route",
            format!(
                "add dst-address=0.0.0.0/0 gateway={check} check-gateway=ping distance={n} \
                 routing-table={} comment=\"{} failover\"",
                network.routing_table(),
                route.name
            ),
        );
    }
    config
}

use ros_script_core::RouterConfig;

use super::LinkRoute;
use crate::model::NetworkType;

/// Classifier used to spread new connections across links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classifier {
    /// Per-connection-classifier hash buckets (`both-addresses-and-ports:L/n`).
    Pcc,
    /// Every Nth packet (`nth=L,n`).
    Nth,
}

/// Emit the load-balancing rule set for `routes.len()` links.
///
/// For every link n (1-based) of L this produces one rule per pipeline
/// stage — input connection-mark, output routing-mark, prerouting classifier,
/// prerouting routing-mark — plus one marked default route. No link is
/// skipped.
pub fn rules(network: NetworkType, routes: &[LinkRoute], classifier: Classifier) -> RouterConfig {
    let mut config = RouterConfig::new();
    let total = routes.len();

    for (index, route) in routes.iter().enumerate() {
        let n = index + 1;
        config.push(
            "/ip firewall mangle",
            format!(
                "add chain=input in-interface={} action=mark-connection \
                 new-connection-mark=ISP-{n}-conn passthrough=yes",
                route.interface
            ),
        );
    }
    for (index, _) in routes.iter().enumerate() {
        let n = index + 1;
        config.push(
            "/ip firewall mangle",
            format!(
                "add chain=output connection-mark=ISP-{n}-conn action=mark-routing \
                 new-routing-mark=to-ISP-{n} passthrough=yes"
            ),
        );
    }
    for (index, _) in routes.iter().enumerate() {
        let n = index + 1;
        let matcher = match classifier {
            Classifier::Pcc => format!(
                "per-connection-classifier=both-addresses-and-ports:{total}/{index}"
            ),
            Classifier::Nth => format!("nth={total},{n}"),
        };
        config.push(
            "/ip firewall mangle",
            format!(
                "add chain=prerouting dst-address-type=!local {matcher} \
                 action=mark-connection new-connection-mark=ISP-{n}-conn passthrough=yes"
            ),
        );
    }
    for (index, _) in routes.iter().enumerate() {
        let n = index + 1;
        config.push(
            "/ip firewall mangle",
            format!(
                "add chain=prerouting connection-mark=ISP-{n}-conn action=mark-routing \
                 new-routing-mark=to-ISP-{n} passthrough=yes"
            ),
        );
    }
    for (index, route) in routes.iter().enumerate() {
        let n = index + 1;
        config.push(
            "/ip route",
            format!(
                "add dst-address=0.0.0.0/0 gateway={} routing-table=to-ISP-{n} distance=1 \
                 comment=\"{} balanced ({})\"",
                route.gateway,
                route.name,
                network.as_str()
            ),
        );
    }

    config
}

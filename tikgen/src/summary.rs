use ros_script_core::RouterConfig;
use serde::Serialize;

use crate::model::{NetworkType, TopologyState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    pub foreign_links: usize,
    pub domestic_links: usize,
    pub wireless_networks: usize,
    pub tunnels: usize,
    pub vpn_protocols: usize,
    pub vpn_users: usize,
    pub sections: usize,
    pub commands: usize,
    pub warnings: usize,
}

pub fn summarize(state: &TopologyState, config: &RouterConfig) -> GenerationSummary {
    GenerationSummary {
        foreign_links: state.wan.links(NetworkType::Foreign).len(),
        domestic_links: state.wan.links(NetworkType::Domestic).len(),
        wireless_networks: state.lan.wireless.len(),
        tunnels: state.lan.tunnels.len(),
        vpn_protocols: count_vpn_protocols(state),
        vpn_users: state
            .lan
            .vpn_server
            .as_ref()
            .map(|server| server.users.len())
            .unwrap_or(0),
        sections: config.section_count(),
        commands: config.command_count(),
        warnings: count_warnings(config),
    }
}

pub fn render(summary: GenerationSummary) -> String {
    format!(
        "generate_summary foreign_links={} domestic_links={} wireless={} tunnels={} \
         vpn_protocols={} vpn_users={} sections={} commands={} warnings={}",
        summary.foreign_links,
        summary.domestic_links,
        summary.wireless_networks,
        summary.tunnels,
        summary.vpn_protocols,
        summary.vpn_users,
        summary.sections,
        summary.commands,
        summary.warnings
    )
}

fn count_vpn_protocols(state: &TopologyState) -> usize {
    let Some(server) = state.lan.vpn_server.as_ref() else {
        return 0;
    };
    usize::from(server.wireguard.is_some())
        + usize::from(server.openvpn.is_some())
        + usize::from(server.pptp.is_some())
        + usize::from(server.l2tp.is_some())
        + usize::from(server.sstp.is_some())
        + usize::from(server.ikev2.is_some())
}

fn count_warnings(config: &RouterConfig) -> usize {
    config
        .sections()
        .flat_map(|(_, commands)| commands.iter())
        .filter(|command| command.contains("WARNING"))
        .count()
}

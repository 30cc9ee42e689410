use ros_script_core::RouterConfig;

use super::interface::StackedInterface;
use crate::model::{ConnectionConfig, WanLink};

/// Commands for the link's connection protocol plus the interface name that
/// carries the default route and list registration afterwards.
pub fn connect(link: &WanLink, stacked: &StackedInterface) -> (RouterConfig, String) {
    let mut config = RouterConfig::new();
    let final_name = match &link.connection {
        ConnectionConfig::Dhcp => {
            config.push(
                "/ip dhcp-client",
                format!(
                    "add interface={} add-default-route=no use-peer-dns=no disabled=no",
                    stacked.final_name
                ),
            );
            stacked.final_name.clone()
        }
        ConnectionConfig::Pppoe { username, password } => {
            // PPPoE rides the physical port directly; the client interface it
            // creates becomes the routed one.
            let client = format!("pppoe-client-{}", link.name);
            config.push(
                "/interface pppoe-client",
                format!(
                    "add interface={} name={client} user={username} password={password} \
                     add-default-route=no disabled=no",
                    stacked.physical
                ),
            );
            client
        }
        ConnectionConfig::Static { address, .. } => {
            config.push(
                "/ip address",
                format!("add address={address} interface={}", stacked.final_name),
            );
            stacked.final_name.clone()
        }
        ConnectionConfig::Lte { apn } => {
            let profile = format!("{}-apn", link.name);
            config.push(
                "/interface lte apn",
                format!("add name={profile} apn={apn} use-network-apn=no"),
            );
            config.push(
                "/interface lte",
                format!(
                    "set [ find default-name={} ] apn-profiles={profile} disabled=no",
                    stacked.final_name
                ),
            );
            stacked.final_name.clone()
        }
    };
    (config, final_name)
}

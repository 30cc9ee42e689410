use ros_script_core::RouterConfig;

use crate::ifname;
use crate::model::WanLink;

/// Result of stacking VLAN/MAC-VLAN/wireless interfaces for one uplink.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedInterface {
    /// Name the connection protocol binds to (except PPPoE, which binds to
    /// [`StackedInterface::physical`]).
    pub final_name: String,
    /// The underlying physical port.
    pub physical: String,
    /// Commands that create the stack.
    pub config: RouterConfig,
}

/// Build the interface stack for one WAN link.
///
/// Priority order: MAC+VLAN, MAC only, VLAN only (with auto MAC-VLAN on
/// top), wireless station, then a bare isolating MAC-VLAN for wired/radio
/// families. Anything else passes through untouched.
pub fn stack(link: &WanLink) -> StackedInterface {
    let physical = link.interface.interface_name.clone();
    let mut config = RouterConfig::new();

    let final_name = match (
        link.interface.mac_address.as_deref(),
        link.interface.vlan_id,
        link.interface.wireless.as_ref(),
    ) {
        (Some(mac), Some(vlan), _) => {
            let vlan_name = add_vlan(&mut config, &physical, vlan);
            add_macvlan(&mut config, &vlan_name, Some(mac))
        }
        (Some(mac), None, _) => add_macvlan(&mut config, &physical, Some(mac)),
        (None, Some(vlan), _) => {
            let vlan_name = add_vlan(&mut config, &physical, vlan);
            add_macvlan(&mut config, &vlan_name, None)
        }
        (None, None, Some(credentials)) if ifname::is_radio(&physical) => {
            config.push(
                "/interface wifi",
                format!(
                    "set [ find default-name={physical} ] configuration.mode=station \
                     configuration.ssid={} security.passphrase={} disabled=no",
                    credentials.ssid, credentials.password
                ),
            );
            physical.clone()
        }
        (None, None, _) if ifname::requires_isolation(&physical) => {
            add_macvlan(&mut config, &physical, None)
        }
        _ => physical.clone(),
    };

    StackedInterface {
        final_name,
        physical,
        config,
    }
}

fn add_vlan(config: &mut RouterConfig, parent: &str, vlan: u16) -> String {
    let name = format!("{parent}.{vlan}");
    config.push(
        "/interface vlan",
        format!("add interface={parent} name={name} vlan-id={vlan}"),
    );
    name
}

fn add_macvlan(config: &mut RouterConfig, parent: &str, mac: Option<&str>) -> String {
    let name = format!("{parent}-macvlan");
    let command = match mac {
        Some(mac) => format!("add interface={parent} name={name} mac-address={mac}"),
        None => format!("add interface={parent} name={name}"),
    };
    config.push("/interface macvlan", command);
    name
}

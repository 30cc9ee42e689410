use ros_script_core::RouterConfig;

use crate::model::WirelessNetwork;
use crate::tables;

/// Configure access points for the declared wireless networks on the router's
/// radios. The first network claims the physical radios; additional networks
/// become virtual APs on top of them.
pub fn access_points(radios: &[String], networks: &[WirelessNetwork]) -> RouterConfig {
    let mut out = RouterConfig::new();
    if radios.is_empty() || networks.is_empty() {
        return out;
    }

    let (first, rest) = networks.split_first().expect("non-empty");
    for radio in radios {
        out.push(
            "/interface wifi",
            format!(
                "set [ find default-name={radio} ] configuration.mode=ap \
                 configuration.ssid={} security.authentication-types=wpa2-psk,wpa3-psk \
                 security.passphrase={} configuration.hide-ssid={} \
                 datapath.bridge={} disabled=no",
                first.ssid,
                first.password,
                yes_no(first.hidden),
                tables::bridge_name(first.network)
            ),
        );
    }
    for (index, network) in rest.iter().enumerate() {
        for radio in radios {
            out.push(
                "/interface wifi",
                format!(
                    "add master-interface={radio} name={radio}-vap{} configuration.mode=ap \
                     configuration.ssid={} security.authentication-types=wpa2-psk,wpa3-psk \
                     security.passphrase={} configuration.hide-ssid={} \
                     datapath.bridge={} disabled=no",
                    index + 1,
                    network.ssid,
                    network.password,
                    yes_no(network.hidden),
                    tables::bridge_name(network.network)
                ),
            );
        }
    }
    out
}

/// Shut down radios that exist on the model but carry no declared network.
pub fn disable_radios(radios: &[String]) -> RouterConfig {
    let mut out = RouterConfig::new();
    for radio in radios {
        out.push(
            "/interface wifi",
            format!("set [ find default-name={radio} ] disabled=yes"),
        );
    }
    out
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::{access_points, disable_radios};
    use crate::model::{NetworkId, WirelessNetwork};

    fn radios() -> Vec<String> {
        vec!["wifi2.4".to_string(), "wifi5".to_string()]
    }

    fn network(ssid: &str, network: NetworkId) -> WirelessNetwork {
        WirelessNetwork {
            ssid: ssid.to_string(),
            password: "wifipw".to_string(),
            hidden: false,
            network,
        }
    }

    #[test]
    fn first_network_claims_both_physical_radios() {
        let out = access_points(&radios(), &[network("Home", NetworkId::Split)]);
        let commands = out.get("/interface wifi").expect("wifi");
        assert_eq!(commands.len(), 2);
        assert!(commands[0].contains("default-name=wifi2.4"));
        assert!(commands[1].contains("default-name=wifi5"));
        assert!(commands[0].contains("datapath.bridge=LANBridgeSplit"));
    }

    #[test]
    fn additional_networks_become_virtual_aps() {
        let out = access_points(
            &radios(),
            &[
                network("Home", NetworkId::Split),
                network("Guests", NetworkId::Foreign),
            ],
        );
        let commands = out.get("/interface wifi").expect("wifi");
        assert_eq!(commands.len(), 4);
        assert!(commands[2].contains("add master-interface=wifi2.4 name=wifi2.4-vap1"));
        assert!(commands[2].contains("configuration.ssid=Guests"));
    }

    #[test]
    fn unused_radios_are_disabled() {
        let out = disable_radios(&radios());
        let commands = out.get("/interface wifi").expect("wifi");
        assert_eq!(commands.len(), 2);
        assert!(commands[0].ends_with("disabled=yes"));
    }

    #[test]
    fn no_radios_means_no_output() {
        assert!(access_points(&[], &[network("Home", NetworkId::Split)]).is_empty());
    }
}

use ros_script_core::RouterConfig;

use crate::model::WirelessNetwork;

/// Band interface names for the synthetic backhaul pair.
pub const BAND_INTERFACES: [&str; 2] = ["wifi2.4-Trunk", "wifi5-Trunk"];

const STEERING_PROFILE: &str = "trunk-steering";

/// Build the dual-band station pair that carries the trunk over wireless.
///
/// Both bands join the first configured wireless network with SSID and
/// passphrase suffixed `!`, the internal backhaul marker the master's AP side
/// advertises. Hidden, WPA2/WPA3, fast roaming, one shared steering profile.
pub fn stations(network: &WirelessNetwork) -> RouterConfig {
    let mut out = RouterConfig::new();
    out.push(
        "/interface wifi steering",
        format!("add name={STEERING_PROFILE} rrm=yes wnm=yes"),
    );
    for (band, radio) in BAND_INTERFACES.iter().zip(["wifi2.4", "wifi5"]) {
        out.push(
            "/interface wifi",
            format!(
                "set [ find default-name={radio} ] name={band} configuration.mode=station \
                 configuration.ssid={}! security.passphrase={}! \
                 configuration.hide-ssid=yes security.authentication-types=wpa2-psk,wpa3-psk \
                 security.ft=yes steering={STEERING_PROFILE} disabled=no",
                network.ssid, network.password
            ),
        );
    }
    out
}

//! Interface-name classification helpers.
//!
//! RouterOS interface families are recognizable from their default names;
//! the stacking and trunk composers branch on these.

/// True when the name denotes a radio (`wifi...`, `wlan...`).
pub fn is_radio(name: &str) -> bool {
    name.starts_with("wifi") || name.starts_with("wlan")
}

/// True for SFP cages (`sfp1`, `sfp-sfpplus1`, ...).
pub fn is_sfp(name: &str) -> bool {
    name.starts_with("sfp")
}

/// True for copper ethernet ports.
pub fn is_ether(name: &str) -> bool {
    name.starts_with("ether")
}

/// Interface families that get an isolating MAC-VLAN when no explicit
/// stacking is requested. LTE and other virtual interfaces pass through.
pub fn requires_isolation(name: &str) -> bool {
    is_radio(name) || is_sfp(name) || is_ether(name)
}

#[cfg(test)]
mod tests {
    use super::{is_radio, requires_isolation};

    #[test]
    fn radios_and_wired_ports_are_classified() {
        assert!(is_radio("wifi2.4"));
        assert!(is_radio("wlan1"));
        assert!(!is_radio("ether1"));
        assert!(requires_isolation("sfp-sfpplus1"));
        assert!(requires_isolation("ether5"));
        assert!(!requires_isolation("lte1"));
    }
}

use ros_script_core::RouterConfig;

/// IPv6-disable baseline, emitted unconditionally by the LAN composer:
/// disable the stack and drop anything that still arrives.
pub fn baseline() -> RouterConfig {
    let mut out = RouterConfig::new();
    out.push("/ipv6 settings", "set disable-ipv6=yes");
    out.push("/ipv6 firewall filter", "add chain=input action=drop");
    out.push("/ipv6 firewall filter", "add chain=forward action=drop");
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::baseline;

    #[test]
    fn baseline_disables_and_drops_ipv6() {
        let out = baseline();
        assert_eq!(
            out.get("/ipv6 settings"),
            Some(&["set disable-ipv6=yes".to_string()][..])
        );
        assert_eq!(
            out.get("/ipv6 firewall filter"),
            Some(
                &[
                    "add chain=input action=drop".to_string(),
                    "add chain=forward action=drop".to_string(),
                ][..]
            )
        );
    }
}

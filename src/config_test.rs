use super::*;

fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn port_defaults_to_3000() {
    let config = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn blank_port_uses_default() {
    let config = HostConfig::from_lookup(lookup(&[("PORT", "  ")])).unwrap();
    assert_eq!(config.port, 3000);
}

#[test]
fn port_is_read_from_env() {
    let config = HostConfig::from_lookup(lookup(&[("PORT", "8080")])).unwrap();
    assert_eq!(config.bind_addr(), "0.0.0.0:8080");
}

#[test]
fn non_numeric_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, HostError::InvalidPort(ref raw) if raw == "eighty"));
    assert_eq!(err.to_string(), "invalid PORT \"eighty\"");
}

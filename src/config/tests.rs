use super::*;
use serial_test::serial;
use std::env;
use std::net::IpAddr;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_xchain_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var(Config::ENV_PORT);
        env::remove_var(Config::ENV_BIND_ADDR);
        env::remove_var(Config::ENV_DEFAULT_TOP_K);
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.port, 8500);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
    );
    assert_eq!(config.default_top_k, 5);
    assert!(config.validate().is_ok());
}

#[test]
fn test_socket_addr() {
    let config = Config::default();
    assert_eq!(config.socket_addr(), "127.0.0.1:8500");

    let config = Config {
        port: 3000,
        bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
        ..Default::default()
    };
    assert_eq!(config.socket_addr(), "0.0.0.0:3000");
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_xchain_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.port, 8500);
    assert_eq!(config.default_top_k, 5);
}

#[test]
#[serial]
fn test_from_env_with_overrides() {
    clear_xchain_env();

    let config = with_env_vars(
        &[
            ("XCHAIN_AI_PORT", "9000"),
            ("XCHAIN_AI_BIND_ADDR", "0.0.0.0"),
            ("XCHAIN_AI_DEFAULT_TOP_K", "10"),
        ],
        Config::from_env,
    )
    .expect("should parse overrides");

    assert_eq!(config.port, 9000);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0))
    );
    assert_eq!(config.default_top_k, 10);
}

#[test]
#[serial]
fn test_from_env_accepts_ipv6_bind_addr() {
    clear_xchain_env();

    let config = with_env_vars(&[("XCHAIN_AI_BIND_ADDR", "::1")], Config::from_env).unwrap();
    assert!(config.bind_addr.is_ipv6());
    assert_eq!(config.socket_addr(), "[::1]:8500");

    let parsed: std::net::SocketAddr = config.socket_addr().parse().unwrap();
    assert_eq!(parsed, config.listen_addr());
}

#[test]
#[serial]
fn test_from_env_rejects_port_zero() {
    clear_xchain_env();

    let result = with_env_vars(&[("XCHAIN_AI_PORT", "0")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));
}

#[test]
#[serial]
fn test_from_env_rejects_unparseable_port() {
    clear_xchain_env();

    let result = with_env_vars(&[("XCHAIN_AI_PORT", "not-a-port")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::PortParseError { .. })));

    let result = with_env_vars(&[("XCHAIN_AI_PORT", "70000")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::PortParseError { .. })));
}

#[test]
#[serial]
fn test_from_env_rejects_bad_bind_addr() {
    clear_xchain_env();

    let result = with_env_vars(&[("XCHAIN_AI_BIND_ADDR", "localhost")], Config::from_env);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("localhost"));
}

#[test]
#[serial]
fn test_from_env_rejects_unparseable_top_k() {
    clear_xchain_env();

    let result = with_env_vars(&[("XCHAIN_AI_DEFAULT_TOP_K", "five")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::TopKParseError { .. })));
}

#[test]
fn test_validate_rejects_top_k_out_of_range() {
    let zero = Config {
        default_top_k: 0,
        ..Default::default()
    };
    assert!(matches!(
        zero.validate(),
        Err(ConfigError::InvalidTopK { .. })
    ));

    let too_many = Config {
        default_top_k: 26,
        ..Default::default()
    };
    assert!(too_many.validate().is_err());

    let max = Config {
        default_top_k: 25,
        ..Default::default()
    };
    assert!(max.validate().is_ok());
}

#[test]
fn test_listen_addr_handles_ipv6() {
    let config = Config {
        bind_addr: "::1".parse().unwrap(),
        ..Default::default()
    };
    let addr = config.listen_addr();
    assert!(addr.is_ipv6());
    assert_eq!(addr.port(), 8500);
    assert_eq!(addr.to_string(), "[::1]:8500");
}

use httpwire::config::Config;

// Env manipulation is process-global, so everything touching LISTEN lives
// in one test.
#[test]
fn test_env_var_wins_over_defaults() {
    unsafe {
        std::env::remove_var("LISTEN");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "127.0.0.1:42069");

    unsafe {
        std::env::set_var("LISTEN", "0.0.0.0:3000");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.listen_addr, "0.0.0.0:3000");

    unsafe {
        std::env::remove_var("LISTEN");
    }
}

#[test]
fn test_from_yaml() {
    let cfg = Config::from_yaml("listen_addr: 127.0.0.1:8080\n").unwrap();
    assert_eq!(cfg.listen_addr, "127.0.0.1:8080");
}

#[test]
fn test_from_yaml_missing_field_uses_default() {
    let cfg = Config::from_yaml("{}\n").unwrap();
    assert_eq!(cfg.listen_addr, "127.0.0.1:42069");
}

#[test]
fn test_from_yaml_rejects_garbage() {
    assert!(Config::from_yaml(": not yaml : [").is_err());
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.listen_addr, cfg2.listen_addr);
}

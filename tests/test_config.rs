use spindle::config::{Config, ServerMode};
use std::path::PathBuf;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:9898");
    assert_eq!(cfg.server.mode, ServerMode::Single);
    assert_eq!(cfg.content.root, PathBuf::from("www"));
    assert_eq!(cfg.content.mime_types, PathBuf::from("/etc/mime.types"));
    assert_eq!(cfg.content.default_mime_type, "text/plain");
}

#[test]
fn test_config_empty_document_is_defaults() {
    let cfg = Config::from_yaml("{}").unwrap();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:9898");
    assert_eq!(cfg.server.mode, ServerMode::Single);
}

#[test]
fn test_config_full_document() {
    let cfg = Config::from_yaml(
        "server:\n  listen_addr: 127.0.0.1:8000\n  mode: spawning\ncontent:\n  root: /srv/www\n  mime_types: /srv/mime.types\n  default_mime_type: application/octet-stream\n",
    )
    .unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8000");
    assert_eq!(cfg.server.mode, ServerMode::Spawning);
    assert_eq!(cfg.content.root, PathBuf::from("/srv/www"));
    assert_eq!(cfg.content.mime_types, PathBuf::from("/srv/mime.types"));
    assert_eq!(cfg.content.default_mime_type, "application/octet-stream");
}

#[test]
fn test_config_partial_document_keeps_other_defaults() {
    let cfg = Config::from_yaml("server:\n  mode: spawning\n").unwrap();

    assert_eq!(cfg.server.mode, ServerMode::Spawning);
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:9898");
    assert_eq!(cfg.content.default_mime_type, "text/plain");
}

#[test]
fn test_config_unknown_mode_rejected() {
    let result = Config::from_yaml("server:\n  mode: forking\n");

    assert!(result.is_err());
}

#[test]
fn test_config_clone() {
    let cfg = Config::default();
    let copy = cfg.clone();

    assert_eq!(cfg.server.listen_addr, copy.server.listen_addr);
    assert_eq!(cfg.content.root, copy.content.root);
}

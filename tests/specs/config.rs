//! Behavioral specs for blacklist.toml loading.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// Unknown keys warn but do not fail
#[test]
fn unknown_key_warns() {
    let site = Site::with_config("version = 1\nunknown_key = true\n");

    check()
        .pwd(site.path())
        .args(["public"])
        .passes()
        .stderr_has("unknown");
}

/// Typos get a suggestion
#[test]
fn typo_key_suggests_correction() {
    let site = Site::with_config("version = 1\nwords = [\"x\"]\n");

    check()
        .pwd(site.path())
        .args(["public"])
        .passes()
        .stderr_has("Did you mean `blacklist`?");
}

/// Valid config produces no warnings
#[test]
fn valid_config_no_warnings() {
    check()
        .on("site-clean")
        .args(["public"])
        .passes()
        .stderr_lacks("warning");
}

/// Missing version is a configuration error
#[test]
fn missing_version_exits_2() {
    let site = Site::with_config("blacklist = [\"x\"]\n");

    check()
        .pwd(site.path())
        .args(["public"])
        .exits(2)
        .stderr_has("version");
}

/// Unsupported versions are rejected
#[test]
fn unsupported_version_exits_2() {
    let site = Site::with_config("version = 2\n");

    check()
        .pwd(site.path())
        .args(["public"])
        .exits(2)
        .stderr_has("unsupported config version 2");
}

/// Wrong value types are rejected
#[test]
fn wrong_type_exits_2() {
    let site = Site::with_config("version = 1\nraise_error = \"no\"\n");

    check().pwd(site.path()).args(["public"]).exits(2);
}

/// Malformed TOML is rejected
#[test]
fn malformed_toml_exits_2() {
    let site = Site::with_config("version = 1\nblacklist = [\n");

    check().pwd(site.path()).args(["public"]).exits(2);
}

/// `-C` selects a config file explicitly
#[test]
fn explicit_config_flag() {
    let site = Site::empty().page("index.html", "forbidden words");
    let config = site.path().join("custom.toml");
    std::fs::write(&config, "version = 1\nblacklist = [\"forbidden\"]\n").unwrap();

    check()
        .pwd(site.path())
        .args(["-C", config.to_str().unwrap(), "public"])
        .fails()
        .stdout_has("`forbidden`");
}

/// BLACKLIST_CONFIG selects a config file
#[test]
fn env_config_sets_path() {
    let site = Site::empty().page("index.html", "forbidden words");
    let config = site.path().join("custom.toml");
    std::fs::write(&config, "version = 1\nblacklist = [\"forbidden\"]\n").unwrap();

    blacklist_cmd()
        .args(["check", "public"])
        .current_dir(site.path())
        .env("BLACKLIST_CONFIG", &config)
        .assert()
        .code(1);
}

/// A missing explicit config file is a configuration error
#[test]
fn missing_explicit_config_exits_2() {
    let site = Site::empty();

    check()
        .pwd(site.path())
        .args(["-C", "nope.toml", "public"])
        .exits(2)
        .stderr_has("config file not found");
}

/// Config is discovered from a parent directory
#[test]
fn config_discovered_from_parent() {
    let site = Site::with_config("version = 1\nblacklist = [\"secret\"]\n")
        .page("index.html", "secret");

    check().pwd(site.path().join("public")).fails();
}

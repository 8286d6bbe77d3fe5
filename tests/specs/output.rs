//! Behavioral specs for text and JSON output.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// Text output layout for a violation
#[test]
fn text_violation_format() {
    check()
        .on("site-violation")
        .args(["public", "--no-color"])
        .fails()
        .stdout_eq(
            "blacklist: FAIL\n  /docs/setup.html: blacklisted term `secret`\n    <html><body><p>The API key is a SECRET value, do not share.</p></body></html>\n",
        );
}

/// Text output layout for warnings
#[test]
fn text_warning_format() {
    let site = Site::with_config("version = 1\nblacklist = [\"foo\"]\nraise_error = false\n")
        .page("index.html", "just foo");

    check()
        .pwd(site.path())
        .args(["public", "--no-color"])
        .passes()
        .stdout_eq("blacklist: WARN\n  /index.html: blacklisted term `foo`\n    just foo\n");
}

/// `--no-color` output has no ANSI escapes
#[test]
fn no_color_has_no_ansi() {
    check()
        .on("site-violation")
        .args(["public", "--no-color"])
        .fails()
        .stdout_lacks("\x1b[");
}

/// `--color` forces ANSI escapes even when piped
#[test]
fn color_flag_forces_ansi() {
    check()
        .on("site-violation")
        .args(["public", "--color"])
        .fails()
        .stdout_has("\x1b[");
}

/// JSON output for a clean run
#[test]
fn json_clean_report() {
    let report = check().on("site-clean").args(["public"]).json().passes();

    assert!(report.passed());
    assert_eq!(report.documents(), 2);
    assert!(report.violation().is_none());
    assert!(report.warnings().is_empty());
    assert_eq!(report.command(), "build");
}

/// JSON output for a violation
#[test]
fn json_violation_report() {
    let report = check().on("site-violation").args(["public"]).json().fails();

    assert!(!report.passed());
    let violation = report.violation().expect("violation should be present");
    assert_eq!(violation["path"], "/docs/setup.html");
    assert_eq!(violation["term"], "secret");
    assert!(
        violation["snippet"]
            .as_str()
            .unwrap()
            .contains("SECRET value")
    );
}

/// JSON output for warnings
#[test]
fn json_warning_report() {
    let report = check().on("site-warn").args(["public"]).json().passes();

    assert!(report.passed());
    let terms: Vec<&str> = report
        .warnings()
        .iter()
        .map(|w| w["term"].as_str().unwrap())
        .collect();
    assert_eq!(terms, ["foo", "bar"]);
}

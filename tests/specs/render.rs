//! Behavioral specs for `blacklist render`.
//!
//! The post-render gate checks content piped on stdin for one view.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// Clean content is echoed unchanged
#[test]
fn clean_content_passes_through() {
    render("/index.html")
        .on("site-clean")
        .content("<p>hello</p>\n")
        .passes()
        .stdout_eq("<p>hello</p>\n");
}

/// A blacklisted term rejects the render with the documented message
#[test]
fn blacklisted_content_is_rejected() {
    let site = Site::with_config("version = 1\nblacklist = [\"secret\"]\n");

    render("x.html")
        .pwd(site.path())
        .content("This is a secret plan")
        .fails()
        .stdout_eq("")
        .stderr_has("Blacklisted term (secret) found in x.html: \nThis is a secret plan");
}

/// Views with other extensions pass through regardless of content
#[test]
fn non_matching_view_passes_through() {
    render("/feed.xml")
        .on("site-violation")
        .content("secret")
        .passes()
        .stdout_eq("secret");
}

/// Non-renderable artifacts pass through regardless of content
#[test]
fn not_renderable_passes_through() {
    render("/index.html")
        .on("site-violation")
        .args(["--not-renderable"])
        .content("secret")
        .passes()
        .stdout_eq("secret");
}

/// Long content is reported with a bounded snippet
#[test]
fn snippet_is_bounded() {
    let site = Site::with_config("version = 1\nblacklist = [\"needle\"]\n");
    let content = format!("{}needle{}", "a".repeat(200), "b".repeat(200));
    let expected = format!("{}needle{}", "a".repeat(60), "b".repeat(60));

    render("/page.html")
        .pwd(site.path())
        .content(&content)
        .fails()
        .stderr_has(expected.as_str())
        .stderr_lacks("a".repeat(61).as_str());
}

/// An invalid term fails before reading content
#[test]
fn invalid_term_exits_2() {
    render("/index.html")
        .on("site-invalid")
        .content("anything")
        .exits(2);
}

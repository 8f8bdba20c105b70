//! Embedded HTML views.
//!
//! Templates are compiled into the binary and rendered by substituting
//! `{{name}}` placeholders. Placeholders without a value render as empty.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Regex pattern matching `{{placeholder}}` tokens in view templates.
pub const PLACEHOLDER_PATTERN: &str = r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\}\}";

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLACEHOLDER_PATTERN).expect("valid regex"));

/// Body served for `robots.txt`: disallow all crawlers.
pub const ROBOTS_TXT: &str = "User-Agent: *\nDisallow: /";

/// A renderable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Index,
    Debug,
}

impl View {
    fn template(self) -> &'static str {
        match self {
            View::Index => include_str!("../templates/index.html"),
            View::Debug => include_str!("../templates/debug.html"),
        }
    }
}

/// Render a view, filling placeholders from `vars`.
pub fn render(view: View, vars: &HashMap<&str, String>) -> String {
    render_template(view.template(), vars)
}

fn render_template(template: &str, vars: &HashMap<&str, String>) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| {
            vars.get(&caps[1]).cloned().unwrap_or_default()
        })
        .into_owned()
}

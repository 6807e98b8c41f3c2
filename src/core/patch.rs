//! Text patch rules applied to fetched assets
//!
//! Each rule is a pure text-to-text transformation selected per resource in
//! the preparation plan. Rules depend only on their input and on the static
//! configuration text they were built with.

use regex::{NoExpand, Regex};

/// A named text transformation applied to a fetched resource body before
/// it is persisted.
#[derive(Debug, Clone)]
pub enum PatchRule {
    /// Pass the text through unchanged
    Identity,

    /// Bracket the whole text with a conditional-compilation guard so the
    /// embedded copy is excluded under a named platform/macro condition.
    ///
    /// Applying this rule twice nests the guards. That is the expected
    /// behavior for a rule that runs once per fetch, not a bug.
    GuardWrap { open: String, close: String },

    /// Replace every line matching a local-include directive with a block
    /// of inline configuration text, leaving the rest untouched.
    IncludeSubstitute {
        directive: Regex,
        replacement: String,
    },

    /// Replace the first exact occurrence of a substring with another
    /// literal value.
    LiteralSubstitute { from: String, to: String },
}

impl PatchRule {
    /// Build an include-substitution rule for a quoted local header.
    ///
    /// Matches the whole directive line, including trailing characters,
    /// the way upstream amalgamated sources carry it.
    pub fn include_substitute(header: &str, replacement: &str) -> Self {
        let pattern = format!(r#"#include\s+"{}".*"#, regex::escape(header));
        Self::IncludeSubstitute {
            directive: Regex::new(&pattern).expect("include pattern is a valid regex"),
            replacement: replacement.trim().to_string(),
        }
    }

    /// Apply the rule to `text`. `name` identifies the resource in warnings.
    pub fn apply(&self, name: &str, text: &str) -> String {
        match self {
            Self::Identity => text.to_string(),

            Self::GuardWrap { open, close } => format!("{open}\n{text}\n{close}"),

            Self::IncludeSubstitute {
                directive,
                replacement,
            } => {
                if directive.is_match(text) {
                    directive
                        .replace_all(text, NoExpand(replacement.as_str()))
                        .into_owned()
                } else {
                    tracing::warn!(
                        "No include directive matched in `{name}`, leaving it unpatched"
                    );
                    text.to_string()
                }
            }

            Self::LiteralSubstitute { from, to } => {
                if text.contains(from.as_str()) {
                    text.replacen(from.as_str(), to, 1)
                } else {
                    tracing::warn!("Literal '{from}' not found in `{name}`, leaving it unpatched");
                    text.to_string()
                }
            }
        }
    }
}

//! Status marker parsing.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Which schema fields the conversation has collected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldStatus {
    #[serde(default)]
    pub collected: Vec<String>,

    #[serde(default)]
    pub missing: Vec<String>,
}

/// Split a full reply into its visible text and the trailing
/// `<!--STATUS::{json}-->` marker, if one parses.
///
/// Models sometimes wrap the JSON in doubled braces; that wrapping is
/// stripped before parsing. A reply without a parsable marker is returned
/// unchanged with no status.
pub fn parse_status(full_reply: &str) -> (String, Option<FieldStatus>) {
    let Ok(re) = Regex::new(r"(?s)<!--STATUS::(.*?)-->") else {
        return (full_reply.to_string(), None);
    };

    if let Some(captures) = re.captures(full_reply) {
        let mut raw = captures[1].trim();
        if raw.starts_with("{{") && raw.ends_with("}}") {
            raw = &raw[1..raw.len() - 1];
        }
        if let Ok(status) = serde_json::from_str::<FieldStatus>(raw) {
            let marker_start = captures
                .get(0)
                .map(|m| m.start())
                .unwrap_or(full_reply.len());
            let visible = full_reply[..marker_start].trim_end().to_string();
            return (visible, Some(status));
        }
    }

    (full_reply.to_string(), None)
}

use std::collections::BTreeMap;

use super::Value;
use crate::constants::CONTINUATION_INDENT;
use crate::constants::KEY_INDENT;
use crate::constants::NULL_PLACEHOLDER;

/// Renders a titled key/value listing.
///
/// Keys are listed in sorted order and padded to one more than the longest key.
/// Values spanning several lines start on the line after their key, each line
/// indented by four spaces.
pub(crate) fn render_text(
    title: &str,
    entries: &BTreeMap<String, Value>,
) -> String {
    let width = entries.keys().map(|key| key.chars().count()).max().unwrap_or(0) + 1;

    let mut s = format!("{title}\n");
    for (key, value) in entries {
        if value.is_null() {
            s.push_str(&format!("{KEY_INDENT}{key:<width$}: {NULL_PLACEHOLDER}\n"));
            continue;
        }

        let text = value.to_string();
        let lines: Vec<&str> = text.split('\n').collect();
        if lines.len() > 1 {
            s.push_str(&format!("{KEY_INDENT}{key:<width$}:\n"));
            for line in lines {
                s.push_str(&format!("{CONTINUATION_INDENT}{line}\n"));
            }
        } else {
            s.push_str(&format!("{KEY_INDENT}{key:<width$}: {text}\n"));
        }
    }
    s
}

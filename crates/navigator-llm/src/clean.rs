//! Reply cleaning.
//!
//! Reasoning models wrap their chain of thought in `<think>…</think>` and
//! some gateways append a JSON metadata object after the answer. Neither may
//! reach the stored record; only the user-facing answer survives.

const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";

/// Strip reasoning blocks and trailing metadata, then trim.
pub fn clean_response(content: &str) -> String {
    let without_thinking = strip_think_blocks(content);
    strip_metadata_lines(&without_thinking).trim().to_string()
}

/// Remove every paired `<think>…</think>` block. An unpaired tag is left as-is.
pub fn strip_think_blocks(content: &str) -> String {
    let mut out = content.to_string();
    while let Some(start) = out.find(THINK_OPEN) {
        let Some(close) = out[start..].find(THINK_CLOSE) else {
            break;
        };
        let end = start + close + THINK_CLOSE.len();
        out.replace_range(start..end, "");
    }
    out
}

/// Drop JSON metadata objects that start with `{"`, `"model"` or
/// `"elapsed_time"` and run until a closing `}` / `},` line.
fn strip_metadata_lines(content: &str) -> String {
    let mut kept = Vec::new();
    let mut in_metadata = false;

    for line in content.split('\n') {
        let trimmed = line.trim();
        if starts_metadata(trimmed) {
            // A one-line object closes itself.
            in_metadata = !(trimmed.starts_with("{\"") && trimmed.ends_with('}'));
            continue;
        }
        if in_metadata {
            if trimmed == "}" || trimmed == "}," {
                in_metadata = false;
            }
            continue;
        }
        kept.push(line);
    }

    kept.join("\n")
}

fn starts_metadata(trimmed: &str) -> bool {
    trimmed.starts_with("{\"")
        || trimmed.starts_with("\"model\"")
        || trimmed.starts_with("\"elapsed_time\"")
}

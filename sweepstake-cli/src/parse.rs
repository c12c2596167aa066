/// Input list parsing.
///
/// A list is either a JSON array of strings (detected by a leading `[`)
/// or plain text with one entry per line.
use crate::bail;

/// Parse a list from file or stdin contents.
///
/// Plain-text lines are kept verbatim: interior blank lines become
/// literal empty entries rather than being filtered — the list is the
/// caller's to clean up. Only the empty tail produced by a trailing
/// newline is dropped, so `"A\nB\n"` is two entries, not three.
pub fn parse_list(content: &str) -> Vec<String> {
    if content.trim_start().starts_with('[') {
        let entries: Vec<String> = serde_json::from_str(content.trim())
            .unwrap_or_else(|e| bail(format!("List looks like JSON but failed to parse: {e}")));
        return entries;
    }

    let mut entries: Vec<String> = content.split('\n').map(str::to_string).collect();
    if entries.last().is_some_and(String::is_empty) {
        entries.pop();
    }
    entries
}

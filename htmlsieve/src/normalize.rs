use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EXCESSIVE_WHITESPACE_PATTERN: Regex =
        Regex::new("\\s{2,}").expect("valid regex pattern"); // for serialized HTML cleanup
    static ref INTER_TAG_WHITESPACE_PATTERN: Regex =
        Regex::new(">\\s+<").expect("valid regex pattern"); // whitespace between a `>` and a `<`
}

/// Collapse whitespace in serialized HTML. Runs three passes in order:
/// collapse runs of two or more whitespace characters to a single space,
/// drop whitespace sitting directly between tags, then drop any remaining
/// newlines. The second pass relies on the first having already collapsed
/// longer runs.
pub fn collapse_whitespace(html: &str) -> String {
    let collapsed = EXCESSIVE_WHITESPACE_PATTERN.replace_all(html, " ");
    let collapsed = INTER_TAG_WHITESPACE_PATTERN.replace_all(&collapsed, "><");

    collapsed.replace('\n', "")
}

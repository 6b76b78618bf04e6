use once_cell::sync::Lazy;
use regex::Regex;

// Optional http(s) scheme, a dotted hostname (top-level label of at least
// two letters) or a dotted-quad IPv4 address, then optional port, path,
// query string and fragment. Anchored at both ends, case-insensitive.
// Digits are spelled [0-9] because `\d` here is Unicode-aware and would
// admit non-ASCII digits.
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(https?://)?((([a-z0-9]([a-z0-9-]*[a-z0-9])*)\.)+[a-z]{2,}|(([0-9]{1,3}\.){3}[0-9]{1,3}))(:[0-9]+)?(/[-a-z0-9%_.~+]*)*(\?[;&a-z0-9%_.~+=-]*)?(#[-a-z0-9_]*)?$",
    )
    .unwrap()
});

/// Whether `input` is a syntactically well-formed URL. Pure and total:
/// no network, no side effects.
pub fn is_valid_url(input: &str) -> bool {
    if input.trim().is_empty() {
        return false;
    }
    URL_RE.is_match(input)
}

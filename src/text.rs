//! Small string helpers shared by export, display, and editor code.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static FILE_NAME_INVALID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());

/// Replaces characters unsafe in filenames with hyphens. Letters,
/// digits, underscores, whitespace, and hyphens pass through.
pub fn normalize_file_name(name: &str) -> Cow<'_, str> {
    if name.is_empty() {
        return Cow::Borrowed(name);
    }
    FILE_NAME_INVALID.replace_all(name, "-")
}

/// Case-sensitive prefix check that treats an empty string on either
/// side as a mismatch instead of matching vacuously.
pub fn starts_with(text: &str, prefix: &str) -> bool {
    if text.is_empty() || prefix.is_empty() {
        return false;
    }
    text.starts_with(prefix)
}

/// Appends `s` unless the count is exactly one.
pub fn pluralize_word(word: &str, count: i64) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

//! Content-type sniffing over response header collections.

use std::sync::LazyLock;

use regex::Regex;

static JSON_MIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\-]+/([\w\-]+\+)?json").unwrap());
static XML_MIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\-]+/([\w\-]+\+)?xml").unwrap());

/// Classifies a response's `content-type` header into the coarse family
/// the editor cares about.
///
/// JSON-family values (including suffixed types like
/// `application/hal+json`) report as `application/ld+json`, XML-family
/// values as `application/xml`, anything else passes through verbatim.
/// The header name is matched case-insensitively and the first match
/// wins. Returns an empty string when no `content-type` header exists.
pub fn get_content_type<N, V>(headers: &[(N, V)]) -> String
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    let value = headers
        .iter()
        .find(|(name, _)| name.as_ref().eq_ignore_ascii_case("content-type"))
        .map(|(_, value)| value.as_ref());

    match value {
        Some(v) if JSON_MIME.is_match(v) => "application/ld+json".to_string(),
        Some(v) if XML_MIME.is_match(v) => "application/xml".to_string(),
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

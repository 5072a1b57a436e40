//! Best-effort XML pretty-printing for response previews.

use std::borrow::Cow;

use quick_xml::events::Event;
use quick_xml::{Reader, Writer};
use serde::{Deserialize, Serialize};

use crate::error::{CommonError, Result};

/// Formatter settings, persisted alongside the app preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XmlFormatOptions {
    /// Spaces per nesting level.
    pub indent_size: usize,
}

impl Default for XmlFormatOptions {
    fn default() -> Self {
        Self { indent_size: 2 }
    }
}

/// Re-indents an XML document, one element per line.
///
/// Rejects input that does not start with `<` and any malformed event
/// stream (mismatched closing tags, broken attributes).
pub fn format_xml(input: &str, options: &XmlFormatOptions) -> Result<String> {
    if !input.trim_start().starts_with('<') {
        return Err(CommonError::Xml {
            message: "input is not an XML document".to_string(),
        });
    }

    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', options.indent_size);

    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(event) => {
                if let Err(e) = writer.write_event(event) {
                    return Err(CommonError::Xml {
                        message: e.to_string(),
                    });
                }
            }
            Err(e) => {
                return Err(CommonError::Xml {
                    message: e.to_string(),
                });
            }
        }
    }

    String::from_utf8(writer.into_inner()).map_err(|e| CommonError::Xml {
        message: e.to_string(),
    })
}

/// Lenient wrapper around [`format_xml`]: invalid or non-XML input is
/// returned untouched.
pub fn safe_format_xml<'a>(input: &'a str, options: &XmlFormatOptions) -> Cow<'a, str> {
    match format_xml(input, options) {
        Ok(formatted) => Cow::Owned(formatted),
        Err(e) => {
            tracing::debug!("Body is not renderable as XML: {}", e);
            Cow::Borrowed(input)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_xml_reindents_elements() {
        let options = XmlFormatOptions::default();
        let formatted = format_xml("<root><item>1</item><item>2</item></root>", &options).unwrap();
        assert_eq!(
            formatted,
            "<root>\n  <item>1</item>\n  <item>2</item>\n</root>"
        );
    }

    #[test]
    fn test_format_xml_honors_indent_size() {
        let options = XmlFormatOptions { indent_size: 4 };
        let formatted = format_xml("<a><b/></a>", &options).unwrap();
        assert_eq!(formatted, "<a>\n    <b/>\n</a>");
    }

    #[test]
    fn test_safe_format_xml_passes_through_non_xml() {
        let options = XmlFormatOptions::default();
        assert_eq!(safe_format_xml("plain text", &options), "plain text");
        assert_eq!(safe_format_xml("", &options), "");
    }

    #[test]
    fn test_safe_format_xml_passes_through_mismatched_tags() {
        let options = XmlFormatOptions::default();
        assert_eq!(safe_format_xml("<a></b>", &options), "<a></b>");
    }
}

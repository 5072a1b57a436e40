pub mod dates;
pub mod error;
pub mod headers;
pub mod id;
pub mod json;
pub mod logger;
pub mod task;
pub mod text;
pub mod xml;

pub use dates::{humanize_date, relative_date, relative_date_from};
pub use error::{CommonError, Result};
pub use headers::get_content_type;
pub use id::{simple_hash, uuid};
pub use json::{safe_parse_json, safe_stringify_json, ParsedJson};
pub use task::wait_for_next_tick;
pub use text::{normalize_file_name, pluralize_word, starts_with};
pub use xml::{safe_format_xml, XmlFormatOptions};

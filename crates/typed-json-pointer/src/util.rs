use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::types::PointerRepresentation;
use crate::JsonPointerError;

/// Everything except the RFC 3986 unreserved characters.
const URI_DATA_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Escapes a JSON Pointer path component.
///
/// Per RFC 6901, `~` is replaced with `~0` and `/` is replaced with `~1`.
///
/// # Example
///
/// ```
/// use typed_json_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// assert_eq!(escape_component("a~/b"), "a~0~1b");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // ~ first, otherwise the ~ of ~1 would be escaped again
    component.replace('~', "~0").replace('/', "~1")
}

/// Unescapes a JSON Pointer path component, the inverse of [`escape_component`].
///
/// # Example
///
/// ```
/// use typed_json_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    component.replace("~1", "/").replace("~0", "~")
}

/// Percent-encodes a component for use in a URI fragment.
///
/// Only `A-Z a-z 0-9 - . _ ~` are left as they are.
///
/// # Example
///
/// ```
/// use typed_json_pointer::percent_encode_component;
///
/// assert_eq!(percent_encode_component("a b"), "a%20b");
/// assert_eq!(percent_encode_component("a~1b"), "a~1b");
/// ```
pub fn percent_encode_component(component: &str) -> String {
    utf8_percent_encode(component, URI_DATA_ENCODE_SET).to_string()
}

/// Render raw segments in one of the escaped representations.
///
/// [`PointerRepresentation::Normal`] is rejected: the plain form is produced by
/// [`to_pointer`](crate::to_pointer), which does not escape.
///
/// # Errors
///
/// Returns [`JsonPointerError::UnsupportedRepresentation`] for
/// [`PointerRepresentation::Normal`].
pub fn format_segments(
    segments: &[String],
    representation: PointerRepresentation,
) -> Result<String, JsonPointerError> {
    let prefix = match representation {
        PointerRepresentation::Normal => {
            return Err(JsonPointerError::UnsupportedRepresentation(representation))
        }
        PointerRepresentation::JsonString => "",
        PointerRepresentation::UriFragment => "#",
    };

    let mut out = String::from(prefix);
    for segment in segments {
        let escaped = escape_component(segment);
        out.push('/');
        if representation == PointerRepresentation::UriFragment {
            out.push_str(&percent_encode_component(&escaped));
        } else {
            out.push_str(&escaped);
        }
    }
    Ok(out)
}

/// Join raw segments into the plain form without escaping them.
pub(crate) fn join_plain(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}

use crate::compat::{Cow, String, ToString};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

// Encode sets for the stored components. The component set is strict:
// only RFC 3986 unreserved characters pass through. The other sets widen
// it per field so that field's own structural characters survive
// encoding intact.

/// Strict component percent-encode set: everything except
/// ALPHA / DIGIT / `-` / `.` / `_` / `~` is escaped.
pub const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Scheme percent-encode set: the component set minus `+`, since scheme
/// names admit ALPHA / DIGIT / `+` / `-` / `.` and the other three are
/// already unreserved.
pub const SCHEME_SET: &AsciiSet = &COMPONENT_SET.remove(b'+');

/// Path percent-encode set: the component set minus `/` and `:`.
pub const PATH_SET: &AsciiSet = &COMPONENT_SET.remove(b'/').remove(b':');

/// Host percent-encode set: the component set minus `[`, `]` and `:`,
/// so bracketed IPv6 hosts survive storage intact.
pub const HOST_SET: &AsciiSet = &COMPONENT_SET.remove(b'[').remove(b']').remove(b':');

/// Percent-encode a scalar component, key or value for storage.
/// Non-ASCII bytes are always escaped.
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT_SET).to_string()
}

/// Percent-encode a scheme, leaving `+` literal.
pub fn encode_scheme(input: &str) -> String {
    utf8_percent_encode(input, SCHEME_SET).to_string()
}

/// Percent-encode a path, leaving `/` and `:` literal.
pub fn encode_path(input: &str) -> String {
    utf8_percent_encode(input, PATH_SET).to_string()
}

/// Percent-encode a host, leaving `[`, `]` and `:` literal.
pub fn encode_host(input: &str) -> String {
    utf8_percent_encode(input, HOST_SET).to_string()
}

/// Decode percent-escapes. Malformed `%` sequences pass through as
/// literal text; invalid UTF-8 decodes lossily (U+FFFD), so a single
/// decode never fails. Decoding twice corrupts data - callers apply this
/// exactly once per component.
pub fn decode(input: &str) -> Cow<'_, str> {
    percent_decode_str(input).decode_utf8_lossy()
}

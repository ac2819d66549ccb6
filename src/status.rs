use http::StatusCode;
use std::fmt;

/// `"<code> <reason>"`, e.g. `418 I'm a teapot`.
///
/// Codes without a canonical reason phrase render as the bare code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusLine(pub StatusCode);

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(status) = self;
        match status.canonical_reason() {
            Some(reason) => write!(f, "{} {reason}", status.as_u16()),
            None => write!(f, "{}", status.as_u16()),
        }
    }
}

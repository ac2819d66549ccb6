/// Classification failures detected on the client side.
///
/// Each variant is a sentinel: match it with [`crate::chain::is`] or
/// [`crate::Error::is`] rather than comparing messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Kind {
    /// The client has no case for the observed status code.
    #[error("unknown status code")]
    UnknownStatusCode,
    /// The status code was not the expected one. Rendered with the request URL.
    #[error("unexpected status code")]
    StatusCode,
    /// The `Content-Type` of the response has no handler.
    #[error("unknown content type")]
    UnknownContentType,
}

#[cfg(test)]
mod tests {
    use super::Kind;

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::UnknownStatusCode.to_string(), "unknown status code");
        assert_eq!(Kind::StatusCode.to_string(), "unexpected status code");
        assert_eq!(Kind::UnknownContentType.to_string(), "unknown content type");
    }
}

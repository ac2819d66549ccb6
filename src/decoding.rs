use crate::BoxError;

/// The response body could not be decoded.
#[derive(Debug, thiserror::Error)]
#[error("decoding response body: {err}")]
pub struct DecodingError {
    #[source]
    pub err: BoxError,
}

impl DecodingError {
    pub fn new<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self { err: err.into() }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    #[test]
    fn test_decoding_error() {
        let e = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let message = e.to_string();
        let e = super::DecodingError::new(e);
        assert_eq!(e.to_string(), format!("decoding response body: {message}"));
        assert!(e
            .source()
            .and_then(|source| source.downcast_ref::<serde_json::Error>())
            .is_some());
    }
}

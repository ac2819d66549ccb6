//! Walking the [`source`](std::error::Error::source) chain of an error.

use std::error::Error;
use std::iter;

/// `err` followed by every error it wraps, outermost first.
pub fn sources<'a>(
    err: &'a (dyn Error + 'static),
) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    iter::successors(Some(err), |&err| err.source())
}

/// The first error in the chain of `err` whose concrete type is `T`.
pub fn find<'a, T>(err: &'a (dyn Error + 'static)) -> Option<&'a T>
where
    T: Error + 'static,
{
    sources(err).find_map(|err| err.downcast_ref::<T>())
}

/// Whether any error of type `T` in the chain of `err` equals `target`.
pub fn is<T>(err: &(dyn Error + 'static), target: &T) -> bool
where
    T: Error + PartialEq + 'static,
{
    sources(err).any(|err| err.downcast_ref::<T>() == Some(target))
}

#[cfg(test)]
mod tests {
    use crate::{DecodingError, Kind};

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("inner")]
    struct Inner;

    #[test]
    fn test_sources() {
        let e = DecodingError::new(Inner);
        let messages = super::sources(&e)
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        assert_eq!(messages, ["decoding response body: inner", "inner"]);
    }

    #[test]
    fn test_find() {
        let e = DecodingError::new(Inner);
        assert_eq!(super::find::<Inner>(&e), Some(&Inner));
        assert!(super::find::<DecodingError>(&e).is_some());
        assert!(super::find::<Kind>(&e).is_none());
    }

    #[test]
    fn test_is() {
        assert!(super::is(&Kind::StatusCode, &Kind::StatusCode));
        assert!(!super::is(&Kind::StatusCode, &Kind::UnknownStatusCode));

        let e = DecodingError::new(Kind::UnknownContentType);
        assert!(super::is(&e, &Kind::UnknownContentType));
        assert!(!super::is(&e, &Kind::StatusCode));
    }
}

use headers::HeaderMapExt;
use http::header::CONTENT_TYPE;
use http::HeaderMap;
use std::borrow::Cow;

// first value wins; bytes that are not UTF-8 are replaced, never dropped
pub(crate) fn content_type(headers: &HeaderMap) -> Cow<'_, str> {
    headers
        .get(CONTENT_TYPE)
        .map(|value| String::from_utf8_lossy(value.as_bytes()))
        .unwrap_or_default()
}

pub(crate) fn mime(headers: &HeaderMap) -> Option<mime::Mime> {
    headers.typed_get::<headers::ContentType>().map(Into::into)
}

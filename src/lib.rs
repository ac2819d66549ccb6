pub mod chain;
mod decoding;
mod extension;
mod header;
mod kind;
mod status;

pub use decoding::DecodingError;
pub use extension::RequestUrl;
pub use kind::Kind;
pub use status::StatusLine;

use bytes::Bytes;
use http::{Response, Uri};
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

pub type BoxError = Box<dyn StdError + Send + Sync>;

/// An error tied to the response that triggered it.
///
/// The message starts with the status line of the response, e.g.
/// `418 I'm a teapot: unknown status code`. The only exception is
/// [`Error::unexpected_status`], which renders `got 418 I'm a teapot calling <url>`.
///
/// The error borrows the response, so it is not `'static`. It cannot be boxed
/// into `Box<dyn std::error::Error>` or found by [`chain::find`] once another
/// error wraps it. Inspect it, or render it, before the response is dropped.
#[derive(Debug)]
pub struct Error<'a, B = Bytes> {
    pub response: &'a Response<B>,
    pub cause: Cause,
    /// The server reported this error in a payload the client understood.
    pub is_custom: bool,
}

#[derive(Debug)]
pub enum Cause {
    Kind(Kind),
    Decoding(DecodingError),
    Custom(BoxError),
}

impl Cause {
    fn as_error(&self) -> &(dyn StdError + 'static) {
        match self {
            Self::Kind(kind) => kind,
            Self::Decoding(e) => e,
            Self::Custom(e) => &**e,
        }
    }
}

impl<'a, B> Error<'a, B> {
    pub fn unknown_status_code(response: &'a Response<B>) -> Self {
        Self::new(response, Cause::Kind(Kind::UnknownStatusCode), false)
    }

    /// Renders as `got <status> calling <url>`, taking the URL from [`RequestUrl`].
    pub fn unexpected_status(response: &'a Response<B>) -> Self {
        Self::new(response, Cause::Kind(Kind::StatusCode), false)
    }

    pub fn unknown_content_type(response: &'a Response<B>) -> Self {
        Self::new(response, Cause::Kind(Kind::UnknownContentType), false)
    }

    /// A structured error returned by the server, e.g. a decoded JSON error body.
    pub fn custom<E>(response: &'a Response<B>, err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::new(response, Cause::Custom(err.into()), true)
    }

    pub fn decoding<E>(response: &'a Response<B>, err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::new(response, Cause::Decoding(DecodingError::new(err)), false)
    }

    fn new(response: &'a Response<B>, cause: Cause, is_custom: bool) -> Self {
        let this = Self {
            response,
            cause,
            is_custom,
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            status = response.status().as_u16(),
            kind = ?this.kind(),
            is_custom,
            content_type = %this.content_type(),
            url = this.request_url().map(tracing::field::display),
            error = %this,
            "api error"
        );
        this
    }

    pub fn status_code(&self) -> http::StatusCode {
        self.response.status()
    }

    /// The `Content-Type` header of the response, or `""` if there is none.
    ///
    /// Bytes that are not UTF-8 are replaced with `U+FFFD`.
    pub fn content_type(&self) -> Cow<'a, str> {
        header::content_type(self.response.headers())
    }

    pub fn mime(&self) -> Option<mime::Mime> {
        header::mime(self.response.headers())
    }

    pub fn request_url(&self) -> Option<&'a Uri> {
        extension::request_url(self.response)
    }

    pub fn status_line(&self) -> StatusLine {
        StatusLine(self.response.status())
    }

    pub fn kind(&self) -> Option<Kind> {
        match self.cause {
            Cause::Kind(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn decoding_error(&self) -> Option<&DecodingError> {
        match &self.cause {
            Cause::Decoding(e) => Some(e),
            _ => None,
        }
    }

    /// The cause of this error and everything it wraps.
    pub fn sources(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        chain::sources(self.cause.as_error())
    }

    pub fn find<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        chain::find(self.cause.as_error())
    }

    pub fn is<T>(&self, target: &T) -> bool
    where
        T: StdError + PartialEq + 'static,
    {
        chain::is(self.cause.as_error(), target)
    }
}

impl<B> fmt::Display for Error<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.status_line();
        match &self.cause {
            Cause::Kind(Kind::StatusCode) => match self.request_url() {
                Some(url) => write!(f, "got {status} calling {url}"),
                None => write!(f, "got {status}"),
            },
            Cause::Kind(kind @ Kind::UnknownContentType) => {
                write!(f, "{status}: {kind} {:?}", self.content_type())
            }
            cause => write!(f, "{status}: {}", cause.as_error()),
        }
    }
}

impl<B> StdError for Error<'_, B>
where
    B: fmt::Debug,
{
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.cause.as_error())
    }
}

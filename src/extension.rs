use http::Uri;

/// URL of the request that produced a response.
///
/// `http::Response` does not remember its request, so transports that want
/// URL-qualified errors insert this into the response extensions:
///
/// ```
/// use http_api_error::RequestUrl;
///
/// let mut response = http::Response::new(());
/// let url = http::Uri::from_static("https://www.example.com/foo");
/// response.extensions_mut().insert(RequestUrl(url));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestUrl(pub Uri);

pub(crate) fn request_url<B>(response: &http::Response<B>) -> Option<&Uri> {
    response
        .extensions()
        .get::<RequestUrl>()
        .map(|RequestUrl(url)| url)
}

//! HTTP error mapping shared by the service clients

/// Maps transport failures and non-success responses to a client error type
pub trait ErrorMapper<E> {
    /// Map a non-2xx response
    fn map_http_error(&self, status_code: u16, response_body: &str) -> E;

    /// Map a failure to send the request or read the response
    fn map_network_error(&self, error: &reqwest::Error) -> E;
}

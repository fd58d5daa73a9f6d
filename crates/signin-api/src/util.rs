/// Marker used for requests that require authentication.
/// It is included in the request's extensions to signal to the middleware that the session token
/// must be attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRequired {
    /// Bearer token authentication.
    Bearer,
}

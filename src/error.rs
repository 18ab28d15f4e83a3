use thiserror::Error;

/// Faults raised at the HTTP and decoding boundary.
///
/// Repositories fold `Transport` and `Decode` into failed envelopes so the
/// stores can surface them as plain error messages; `MissingResponse` is the
/// one fatal case (no response body at all) and propagates.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server returned no response object to unwrap.
    #[error("no response received from server")]
    MissingResponse,

    /// Network or HTTP-layer fault. Carries the server's `Message` field
    /// when one was present in the error body, otherwise the transport
    /// error's own message, otherwise `NETWORK_ERROR`.
    #[error("{0}")]
    Transport(String),

    /// The response payload did not match the expected shape.
    #[error("failed to decode response payload: {0}")]
    Decode(String),

    /// The server explicitly reported failure where success was required.
    #[error("{0}")]
    EnvelopeFailure(String),

    /// Persisted credential store could not be read or written.
    #[error("credential storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Invalid client configuration (base URL and friends).
    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Fallback message when a transport fault carries no detail of its own.
    pub const NETWORK_ERROR: &'static str = "NETWORK_ERROR";
}

//! Startup and serve failures for the signup host.

/// Errors that stop the server process.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),

    /// Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    /// The listening socket could not be bound.
    #[error("failed to bind: {0}")]
    Bind(#[source] std::io::Error),

    /// The HTTP server exited with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

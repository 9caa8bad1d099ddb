use std::path::PathBuf;

/// Recoverable channel failures. These never leave the channel that raised
/// them: they are logged and the tick carries on.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("state document {path:?} is not available: {source}")]
    ChannelUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("state document {path:?} is malformed: {source}")]
    MalformedDocument {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to write input document {path:?}: {source}")]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to ensure shared directory {path:?}: {source}")]
    DirectoryUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Drawing surface failures. Creation failures are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("failed to create window context: {0}")]
    Context(#[from] glutin::CreationError),

    #[error("failed to make context current: {0}")]
    MakeCurrent(glutin::ContextError),

    #[error("failed to swap buffers: {0}")]
    Swap(glutin::ContextError),

    #[error("failed to load shader program {name}: {reason}")]
    Program { name: &'static str, reason: String },

    #[error("failed to load font {path:?}: {reason}")]
    Font { path: PathBuf, reason: String },

    #[error("failed to upload text texture: {0}")]
    Texture(String),
}

//! Error types for the renderer.

use thiserror::Error;

/// Errors that can occur while loading or rendering a scene.
#[derive(Error, Debug)]
pub enum Error {
    /// A shape, pattern, or camera transform has no inverse. The scene is
    /// malformed and the whole render is aborted.
    #[error("transform matrix is singular and cannot be inverted")]
    SingularMatrix,

    /// A shape referenced a named material the scene never defined.
    #[error("unknown material `{0}`")]
    UnknownMaterial(String),

    /// A color string was not 6- or 8-digit hex notation.
    #[error("invalid hex color `{0}`")]
    InvalidColor(String),

    /// The scene file could not be read.
    #[error("failed to read scene")]
    Io(#[from] std::io::Error),

    /// The scene file is not valid JSON or does not match the scene schema.
    #[error("failed to parse scene")]
    Scene(#[from] serde_json::Error),
}

/// Result type for renderer operations.
pub type Result<T> = std::result::Result<T, Error>;

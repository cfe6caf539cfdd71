use thiserror::Error;

/// Failure reported by a fallible signed distance function.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SdfError {
    #[error("SDF evaluation failed: {0}")]
    Evaluation(String),

    #[error("SDF returned a non-finite distance at ({x}, {y}, {z})")]
    NonFinite { x: f32, y: f32, z: f32 },
}

/// Rejected render configuration. Always reported before any sampling starts.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("mesh cells must be at least 1")]
    ZeroMeshCells,

    #[error("rank tolerance must lie in [0, 1), got {0}")]
    InvalidRankTolerance(f32),

    #[error("simplification threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f32),

    #[error("vertex merge epsilon must be finite and non-negative, got {0}")]
    InvalidMergeEpsilon(f32),

    #[error("bounding box must have a positive, finite size on every axis")]
    DegenerateBounds,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RenderError {
    #[error(transparent)]
    Sdf(#[from] SdfError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The receiving end of the output channel was dropped mid-render.
    #[error("mesh output channel was closed")]
    OutputClosed,
}

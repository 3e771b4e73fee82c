// File: crates/brief-core/src/error.rs
// Summary: Error type shared by the SVG writer and the raster backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("i/o error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to create raster surface ({width}x{height})")]
    Surface { width: i32, height: i32 },
    #[error("encode {0} failed")]
    Encode(&'static str),
    #[error("unknown value mode '{0}' (expected 'pct' or 'countshare')")]
    InvalidMode(String),
}

impl RenderError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io { path: path.display().to_string(), source }
    }
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::render::RenderError;
use crate::seed::SeedError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration")]
    Config(#[from] ConfigError),

    #[error("Invalid seed")]
    Seed(#[from] SeedError),

    #[error("Failed to read seed from {source_name}")]
    ReadSeed {
        source_name: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to rasterize grid")]
    Render(#[from] RenderError),

    #[error("Failed to write image to {path:?}")]
    WriteImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

// File: crates/plot-core/src/error.rs
// Summary: Error type shared by every fallible pipeline operation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    /// A colour index (field `colour`, highlight `colour`, or field position)
    /// does not address an entry of the active palette.
    #[error("colour index {index} is out of range for palette '{palette}' ({len} colours)")]
    PaletteIndex {
        index: usize,
        len: usize,
        palette: String,
    },

    /// A palette entry is not a `#rrggbb` hex string.
    #[error("invalid palette colour {0:?}")]
    InvalidColour(String),

    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlotError>;

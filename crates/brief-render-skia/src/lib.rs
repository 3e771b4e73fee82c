// File: crates/brief-render-skia/src/lib.rs
// Summary: Skia renderer crate; CPU raster surfaces and text shaping for `brief_core::Drawing`.

pub mod raster;
pub mod text;

pub use raster::{RasterOptions, SkiaRenderer};
pub use text::TextShaper;

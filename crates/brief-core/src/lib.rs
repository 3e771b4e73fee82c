// File: crates/brief-core/src/lib.rs
// Summary: Core library entry point; exports the data model, scales and the four chart renderers.

pub mod axis;
pub mod charts;
pub mod drawing;
pub mod error;
pub mod format;
pub mod geometry;
pub mod scale;
pub mod svg;
pub mod theme;
pub mod types;

pub use charts::bar::{BarLayout, BarOptions, BarRow};
pub use charts::donut::{DonutLayout, DonutOptions, Segment};
pub use charts::line::{LineLayout, LineOptions};
pub use charts::mini_bar::{MiniBar, MiniBarLayout, MiniBarOptions};
pub use drawing::{Drawing, Primitive, Stroke, TextAnchor};
pub use error::RenderError;
pub use format::ValueMode;
pub use svg::{to_svg, write_svg};
pub use theme::{Color, Theme};
pub use types::{DataPoint, Series};

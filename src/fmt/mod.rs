//! Record rendering. The line layout is fixed; only terminal coloring is optional.

mod color;
mod render;

pub use color::{Color, colorize};
pub use render::{Formatter, Rendered, TIMESTAMP_FORMAT, TRACE_SEPARATOR};

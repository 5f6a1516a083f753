//! Core trace input: text lines -> ordered lanes -> compressed spans
//!
//! Input format, one lane per line:
//!
//! ```text
//! Core 0: [T1, T1, T1, T1, T2, T2, T3, T3]
//! Core 1: [T2, T2, T2, T1, T1, T1, T1]
//! ```

mod line;
mod reader;
mod span;
mod timeline;

pub use line::parse_line;
pub use reader::{read_timeline, read_timeline_from};
pub use span::{Span, compress_runs, expand_runs};
pub use timeline::{Lane, Timeline};

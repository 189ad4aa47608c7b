//! I/O layer: decoding source images to RGBA (`reader`) and `writers`
//! for PNG outputs and JSON run reports.
pub mod reader;
pub use reader::load_rgba;

pub mod writers;

pub mod png;
pub mod report;

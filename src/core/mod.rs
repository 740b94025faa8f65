//! Shared machinery: scanning, parsing, splicing, and run reports.

pub mod fs_scan;
pub mod normalize;
pub mod parse;
pub mod report;
pub mod splice;

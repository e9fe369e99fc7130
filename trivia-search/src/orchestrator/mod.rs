//! Multi-engine search: concurrent fan-out, merge, and URL deduplication.

pub mod merge;
pub mod search;
pub mod url_normalize;

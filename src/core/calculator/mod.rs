pub mod bucket;
pub mod summary;

pub mod feed;
pub mod log;

pub mod extractors;
pub mod responses;

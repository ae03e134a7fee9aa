pub mod chunk;
pub mod job;
pub mod report;

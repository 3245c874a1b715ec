pub mod publishers;
pub mod scenario;
pub mod sources;

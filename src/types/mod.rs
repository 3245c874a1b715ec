pub mod object;
pub mod object_path;
pub mod seed;

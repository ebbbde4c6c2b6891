pub mod nutrition;
pub mod types;

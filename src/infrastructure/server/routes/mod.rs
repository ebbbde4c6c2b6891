pub mod api;
pub mod blocked;
pub mod pages;

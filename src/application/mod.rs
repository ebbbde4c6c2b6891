pub mod client;
pub mod handlers;
pub mod prompts;
pub mod session;
pub mod text;

//! Model clients

mod base;
mod openai;

pub use base::HttpClientBase;
pub use openai::{OPENAI_PROVIDER_ID, OpenAIClient};

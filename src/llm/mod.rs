//! Inference submission — the outbound call to the hosted multimodal API.

mod anthropic;
pub mod prompts;

pub use anthropic::{build_request_body, AnthropicClient, SubmitError};

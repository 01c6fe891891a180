//! Final polish of the raw reply before it reaches the caller.
//!
//! Plain-text replies only lose their code fences. Structured replies are
//! decoded strictly, then once more after [`repair::repair_backslashes`].

pub mod formatter;
pub mod interpreter;
pub mod repair;

pub use formatter::{strip_code_fences, strip_script_fences};
pub use interpreter::{decode_structured, require_reply, DecodeMethod, Decoded};
pub use repair::repair_backslashes;

/// Plain-text reply with fences removed. No other validation.
pub fn normalize_text(reply: Option<&str>) -> crate::llm::Result<String> {
    let text = require_reply(reply)?;
    Ok(strip_code_fences(text))
}

#[cfg(test)]
mod tests;

//! Decodes structured replies, with one repair pass on failure.

use crate::llm::{GenerationError, Result};
use crate::postprocessing::formatter::strip_code_fences;
use crate::postprocessing::repair::repair_backslashes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, warn};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeMethod {
    /// The reply decoded as-is.
    Strict,
    /// The reply decoded only after `repair_backslashes`.
    Repaired,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    pub method: DecodeMethod,
}

/// Rejects a missing or blank reply.
pub fn require_reply(reply: Option<&str>) -> Result<&str> {
    match reply {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(GenerationError::EmptyResponse),
    }
}

/// Strips fences and decodes `T`. Tries the repaired text exactly once if the
/// strict decode fails.
pub fn decode_structured<T: DeserializeOwned>(reply: Option<&str>) -> Result<Decoded<T>> {
    let text = require_reply(reply)?;
    let clean = strip_code_fences(text);

    match serde_json::from_str::<T>(&clean) {
        Ok(value) => Ok(Decoded {
            value,
            method: DecodeMethod::Strict,
        }),
        Err(e) => {
            warn!(error = %e, "Standard JSON parse failed, attempting fallback");
            let fixed = repair_backslashes(&clean);
            serde_json::from_str::<T>(&fixed)
                .map(|value| Decoded {
                    value,
                    method: DecodeMethod::Repaired,
                })
                .map_err(|source| {
                    error!(original = %text, error = %source, "Auto-fix failed");
                    GenerationError::InvalidResponse { source }
                })
        }
    }
}

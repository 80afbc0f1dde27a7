//! Structured model reply parsing
//!
//! A reply is accepted if it parses directly, or if the body of its first
//! fenced code block does. Nothing else is attempted. Whatever parses must
//! also pass schema validation.

use crate::errors::GatewayError;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::de::DeserializeOwned;
use validator::Validate;

static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:json|JSON)?[ \t]*\r?\n?(.*?)```").expect("fenced block pattern is valid")
});

/// Body of the first fenced code block, if any
pub fn first_fenced_block(reply: &str) -> Option<&str> {
    FENCED_BLOCK
        .captures(reply)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}

/// Parse and validate a model reply into `T`
pub fn parse_structured<T>(reply: &str) -> Result<T, GatewayError>
where
    T: DeserializeOwned + Validate,
{
    let trimmed = reply.trim();
    if trimmed.is_empty() {
        return Err(GatewayError::EmptyResponse);
    }

    let value: T = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(direct) => {
            let block = first_fenced_block(trimmed)
                .ok_or_else(|| GatewayError::Parse(direct.to_string()))?;
            serde_json::from_str(block).map_err(|e| GatewayError::Parse(e.to_string()))?
        }
    };

    value
        .validate()
        .map_err(|e| GatewayError::Parse(format!("schema violation: {}", e)))?;
    Ok(value)
}

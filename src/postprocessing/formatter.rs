//! Cleans code-fence markers the LLM wraps around its answer.

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";
const SCRIPT_FENCES: [&str; 3] = ["```javascript", "```js", "```"];

/// Removes every "```json" and "```" marker, wherever it appears, then trims.
/// Idempotent.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace(JSON_FENCE, "")
        .replace(FENCE, "")
        .trim()
        .to_string()
}

/// Removes the fence markers used around JavaScript. Whitespace is kept.
pub fn strip_script_fences(raw: &str) -> String {
    SCRIPT_FENCES
        .iter()
        .fold(raw.to_string(), |code, fence| code.replace(fence, ""))
}

//! Best-effort repair for structured replies that fail to decode.
//!
//! The prompt forbids backslashes, but models still emit LaTeX such as
//! `\frac` or `\pi`, which are invalid JSON escapes. This pass rewrites every
//! backslash to a forward slash. It is lossy: valid escapes like `\n`, `\"`
//! and `\u00e9` are corrupted too, so it only runs after a strict decode has
//! already failed.

pub fn repair_backslashes(text: &str) -> String {
    text.replace('\\', "/")
}

//! Coercion core for the gmessage bridge
//!
//! Operands arrive from the host as text. The policy is strict
//! signed-decimal: an optional sign followed by digits, nothing else.
//! Anything malformed degrades to zero instead of raising, so the
//! bridge handlers stay total.

/// Parse a signed decimal operand, degrading malformed input to zero.
///
/// Empty strings, embedded whitespace, fractional notation, non-numeric
/// text, and magnitudes outside i64 all fail the parse and count as 0.
pub fn parse_operand(text: &str) -> i64 {
    text.parse().unwrap_or(0)
}

/// Wrapping sum of two textual operands.
pub fn add_operands(a: &str, b: &str) -> i64 {
    parse_operand(a).wrapping_add(parse_operand(b))
}

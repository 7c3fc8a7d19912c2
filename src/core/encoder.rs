//! Key-value pair encoding
//!
//! Walks a flat `key, value, key, value, ...` sequence and renders every pair
//! whose value is non-empty as `key=value`, separated by single spaces.

use super::value::ContextValue;

/// Stateless logfmt pair encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairEncoder;

impl PairEncoder {
    /// Encode `values` into a fresh string.
    pub fn encode(values: &[ContextValue]) -> String {
        let mut out = String::new();
        encode_pairs(values, &mut out);
        out
    }
}

/// Append the surviving pairs of `values` to `out`.
///
/// A trailing key without a value is treated as having an empty value and is
/// therefore dropped. Pairs keep their order; repeated keys are emitted again.
/// If `out` already holds text, the first emitted pair is preceded by a space.
/// Nothing trails the last pair.
pub fn encode_pairs(values: &[ContextValue], out: &mut String) {
    for pair in values.chunks(2) {
        let value = match pair.get(1) {
            Some(value) => value.coerce(),
            None => continue,
        };
        if value.is_empty() {
            continue;
        }

        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&pair[0].coerce());
        out.push('=');
        out.push_str(&value);
    }
}

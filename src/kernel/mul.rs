//! Schoolbook multiplication.

use crate::kernel::scaled::add_scaled;
use crate::word::Word;

/// Multiplies `a` by `b`, writing the `a.len() + b.len()`-word result into `out`.
///
/// Precondition: `out` is zeroed and has length exactly `a.len() + b.len()`, and does not
/// alias either `a` or `b`.
///
/// Runs in Θ(`a.len()` · `b.len()`): for each digit of the shorter operand, scales the
/// longer operand by that digit and fuses the add into the right offset of `out`.
pub fn mul(a: &[Word], b: &[Word], out: &mut [Word]) {
    debug_assert_eq!(out.len(), a.len() + b.len());
    debug_assert!(out.iter().all(|&w| w == 0));

    if a.is_empty() || b.is_empty() {
        return;
    }

    // The inner loop is cheapest when the scaled operand ('long') is the longer one, so
    // make sure 'long' is at least as long as 'short'.
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    for (j, &digit) in short.iter().enumerate() {
        add_scaled(&mut out[j..], digit, long);
    }
}

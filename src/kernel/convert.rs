//! Conversions between the base-`BASE` decimal representation and fixed-width binary words.
//!
//! The `*_round` functions each do one "round" of conversion across the whole span and
//! return one binary or decimal word of output; callers drive them in a loop (see the
//! `t`/`T`/`f` driver commands), stopping once the span being consumed normalizes to zero
//! (for the `to*` direction) or after a caller-chosen number of rounds (for `frombits_round`,
//! which has no natural stopping point of its own -- the input span never runs dry).

use crate::kernel::primitives::combine;
use crate::word::{BASE, DoubleWord, QuadWord, Word, WORD_BITS};

/// One round of decimal-to-binary conversion: divides the decimal value held in `wa` by
/// `2^WORD_BITS` in place, returning the remainder as one binary word.
///
/// Repeated calls (stopping once `wa`'s normalized length reaches zero) emit the value's
/// binary representation one word at a time, least significant first.
pub fn tobits_round(wa: &mut [Word]) -> Word {
    let mut carry: Word = 0;
    for digit in wa.iter_mut().rev() {
        let x: DoubleWord = combine(carry, *digit);
        *digit = (x >> WORD_BITS) as Word;
        carry = x as Word;
    }
    carry
}

/// Regroups a decimal span into a base-`BASE²` span of half the length (rounded up), as a
/// widening step before [`long_tobits_round`].
///
/// Precondition: `out.len() == wa.len() / 2 + wa.len() % 2`.
pub fn tolong(wa: &[Word], out: &mut [DoubleWord]) {
    let nwa = wa.len();
    debug_assert_eq!(out.len(), nwa / 2 + nwa % 2);

    let paired = if nwa % 2 == 1 {
        out[nwa / 2] = wa[nwa - 1] as DoubleWord;
        nwa - 1
    } else {
        nwa
    };

    for i in (0..paired).step_by(2) {
        let lo = wa[i];
        let hi = wa[i + 1];
        out[i / 2] = combine(hi, lo);
    }
}

/// One round of decimal-to-binary conversion over a base-`BASE²` span (the [`tolong`]
/// widened representation): divides the value by `2^DoubleWord::BITS` in place, returning
/// the remainder as one double-wide binary word.
pub fn long_tobits_round(wd: &mut [DoubleWord]) -> DoubleWord {
    let mut carry: DoubleWord = 0;
    for digit in wd.iter_mut().rev() {
        let x: QuadWord = (carry as QuadWord) * (BASE as QuadWord) * (BASE as QuadWord)
            + *digit as QuadWord;
        *digit = (x >> DoubleWord::BITS) as DoubleWord;
        carry = x as DoubleWord;
    }
    carry
}

/// One round of binary-to-decimal conversion: folds one more binary word `*wa`-per-position
/// into the decimal value held in `wa`, most significant binary word first, returning the
/// carry-out word (to feed back in as the next, more significant, binary word once combined
/// with whatever magnitude this round didn't absorb).
///
/// Each element of `wa` is consumed as a raw `2^WORD_BITS`-valued binary word on input and
/// overwritten with the corresponding decimal digit on output; the caller supplies as many
/// rounds as there are binary words to fold in, most significant first, seeding the first
/// round's low end with zero.
pub fn frombits_round(wa: &mut [Word]) -> Word {
    let mut carry: Word = 0;
    for digit in wa.iter_mut() {
        let x: DoubleWord = ((*digit as DoubleWord) << WORD_BITS) | carry as DoubleWord;
        *digit = (x % BASE as DoubleWord) as Word;
        carry = (x / BASE as DoubleWord) as Word;
    }
    carry
}

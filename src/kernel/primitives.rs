//! Word-level primitives: carry/borrow digit ops and widening multiply/divide helpers.

use crate::word::{BASE, DoubleWord, QuadWord, SWord, Word, WORD_BITS};

/// Adds `b` and `carry_in` into `*a`, wrapping modulo [`BASE`].
///
/// Returns the carry out of the addition (`true` iff `*a + b + carry_in >= BASE`).
///
/// Preconditions: `*a < BASE`, `b < BASE`.
#[cfg(feature = "branchless")]
#[inline(always)]
pub fn adc(a: &mut Word, b: Word, carry_in: bool) -> bool {
    let x = *a + b + carry_in as Word;
    let d = (x as SWord) - (BASE as SWord);
    // `mask` is all-ones (-1) if `d >= 0`, all-zeros otherwise -- no branch needed.
    let mask = (!d) >> (WORD_BITS as SWord - 1);
    *a = (x as SWord - ((BASE as SWord) & mask)) as Word;
    mask != 0
}

#[cfg(not(feature = "branchless"))]
#[inline(always)]
pub fn adc(a: &mut Word, b: Word, carry_in: bool) -> bool {
    let x = *a + b + carry_in as Word;
    if x >= BASE {
        *a = x - BASE;
        true
    } else {
        *a = x;
        false
    }
}

/// Subtracts `b` and `borrow_in` from `*a`, wrapping modulo [`BASE`].
///
/// Returns the borrow out of the subtraction (`true` iff `*a - b - borrow_in < 0`).
///
/// Preconditions: `*a < BASE`, `b < BASE`.
#[cfg(feature = "branchless")]
#[inline(always)]
pub fn sbb(a: &mut Word, b: Word, borrow_in: bool) -> bool {
    let d = (*a as SWord) - (b as SWord) - (borrow_in as SWord);
    // `mask` is all-ones (-1) if `d < 0`, all-zeros otherwise.
    let mask = d >> (WORD_BITS as SWord - 1);
    *a = (d + ((BASE as SWord) & mask)) as Word;
    mask != 0
}

#[cfg(not(feature = "branchless"))]
#[inline(always)]
pub fn sbb(a: &mut Word, b: Word, borrow_in: bool) -> bool {
    let d = (*a as SWord) - (b as SWord) - (borrow_in as SWord);
    if d < 0 {
        *a = (d + BASE as SWord) as Word;
        true
    } else {
        *a = d as Word;
        false
    }
}

/// Exact product of two words; always fits in a [`DoubleWord`] since `BASE² ≤ DoubleWord::MAX`.
#[inline(always)]
pub fn mul_ww(a: Word, b: Word) -> DoubleWord {
    a as DoubleWord * b as DoubleWord
}

/// Combines two words as `w1 * BASE + w2`, as a [`DoubleWord`].
#[inline(always)]
pub fn combine(w1: Word, w2: Word) -> DoubleWord {
    w1 as DoubleWord * BASE as DoubleWord + w2 as DoubleWord
}

/// Combines three words (most significant first) as `(w1 * BASE + w2) * BASE + w3`.
///
/// Used to build the three-digit remainder window consumed by [`q_div_d_to_d`] inside
/// the Knuth D quotient estimator.
#[inline(always)]
pub fn q_from_3w(w1: Word, w2: Word, w3: Word) -> QuadWord {
    let base = BASE as QuadWord;
    (w1 as QuadWord * base + w2 as QuadWord) * base + w3 as QuadWord
}

/// Combines two base-`BASE²` digits (each a [`DoubleWord`]) as `hi * BASE² + lo`.
#[inline(always)]
pub fn q_from_2w2w(hi: DoubleWord, lo: DoubleWord) -> QuadWord {
    let base2 = (BASE as QuadWord) * (BASE as QuadWord);
    hi as QuadWord * base2 + lo as QuadWord
}

/// Integer quotient of a [`QuadWord`] by a [`DoubleWord`] divisor, assuming the quotient
/// fits in a `DoubleWord`.
///
/// On every target Rust supports, `QuadWord` division is backed by a native (or
/// compiler-builtin-emulated) widening divide, so this is a plain `/`. See
/// [`q_div_d_to_d_bitsearch`] for a portable 30-bit binary-search fallback, kept for
/// platforms whose divide is expensive or absent and exercised by tests to confirm it
/// agrees with the native path.
#[inline(always)]
pub fn q_div_d_to_d(a: QuadWord, d: DoubleWord) -> DoubleWord {
    (a / d as QuadWord) as DoubleWord
}

/// Portable fallback for [`q_div_d_to_d`]: binary-searches the quotient bit by bit.
///
/// Valid whenever the true quotient fits in 30 bits, which holds for every call site in
/// this crate (the divisor is always at least `BASE`, and the dividend is bounded so the
/// quotient is clamped to `BASE - 1 < 2^30`).
#[cfg(feature = "softdiv128")]
pub fn q_div_d_to_d_bitsearch(a: QuadWord, d: DoubleWord) -> DoubleWord {
    let mut q: DoubleWord = 0;
    let mut bit = 1u32 << 29;
    while bit != 0 {
        let x = q | bit as DoubleWord;
        let product = x as QuadWord * d as QuadWord;
        if product <= a {
            q = x;
        }
        bit >>= 1;
    }
    q
}

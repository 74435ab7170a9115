//! O(n) digit-span operations: add, subtract, complement, compare, normalize, copy.

use crate::kernel::primitives::{adc, sbb};
use crate::word::{BASE, Word};

/// Adds `b` into `a` in place.
///
/// Precondition: `a.len() >= b.len()`.
///
/// Returns `true` iff the true result does not fit in `a` (the implied leading word is 1).
pub fn add(a: &mut [Word], b: &[Word]) -> bool {
    debug_assert!(a.len() >= b.len());
    let mut carry = false;
    for (ai, &bi) in a.iter_mut().zip(b.iter()) {
        carry = adc(ai, bi, carry);
    }
    if !carry {
        return false;
    }
    for ai in &mut a[b.len()..] {
        if *ai != BASE - 1 {
            *ai += 1;
            return false;
        }
        *ai = 0;
    }
    true
}

/// Subtracts `b` from `a` in place.
///
/// Precondition: `a.len() >= b.len()`.
///
/// Returns `true` iff the subtraction underflowed, in which case `a` holds the ten's
/// complement `10^(BASE_LOG * a.len()) - (true result)`. Use [`uncomplement`] to recover
/// the magnitude.
pub fn sub_raw(a: &mut [Word], b: &[Word]) -> bool {
    debug_assert!(a.len() >= b.len());
    let mut borrow = false;
    for (ai, &bi) in a.iter_mut().zip(b.iter()) {
        borrow = sbb(ai, bi, borrow);
    }
    if !borrow {
        return false;
    }
    for ai in &mut a[b.len()..] {
        if *ai != 0 {
            *ai -= 1;
            return false;
        }
        *ai = BASE - 1;
    }
    true
}

/// Overwrites a nonzero ten's-complement span with its magnitude.
///
/// Precondition: `a` is nonzero (contains at least one nonzero word); otherwise panics
/// in debug builds and loops past the end of the slice in release builds.
pub fn uncomplement(a: &mut [Word]) {
    let idx = a.iter().position(|&w| w != 0).expect("uncomplement: span is zero");
    a[idx] = BASE - a[idx];
    for w in &mut a[idx + 1..] {
        *w = BASE - 1 - *w;
    }
}

/// Subtracts `b` from `a` in place, recovering the magnitude and sign.
///
/// Precondition: `a.len() >= b.len()`.
///
/// Returns `true` iff the logical result is negative, in which case `a` holds `|A - B|`;
/// otherwise `a` holds `A - B` directly.
pub fn sub(a: &mut [Word], b: &[Word]) -> bool {
    let underflowed = sub_raw(a, b);
    if underflowed {
        uncomplement(a);
    }
    underflowed
}

/// Returns `true` iff every word of `a` is zero (the empty span represents zero too).
pub fn is_zero(a: &[Word]) -> bool {
    a.iter().all(|&w| w == 0)
}

/// Compares two equal-length spans from the most significant word down, returning one of
/// three caller-supplied sentinels.
///
/// Kept as caller-supplied sentinels (rather than folded into an `Ordering`-returning
/// wrapper) because the driver's `?` command forwards these exact sentinels to its output.
pub fn compare_n<T>(a: &[Word], b: &[Word], if_less: T, if_eq: T, if_greater: T) -> T {
    debug_assert_eq!(a.len(), b.len());
    for i in (0..a.len()).rev() {
        if a[i] != b[i] {
            return if a[i] < b[i] { if_less } else { if_greater };
        }
    }
    if_eq
}

/// Returns the normalized prefix of `a`: the longest prefix whose most significant word
/// is nonzero, or the empty slice if `a` is entirely zero.
pub fn normalize(a: &[Word]) -> &[Word] {
    &a[..normalize_len(a)]
}

/// Length of the normalized prefix of `a` (see [`normalize`]).
pub fn normalize_len(a: &[Word]) -> usize {
    let mut n = a.len();
    while n != 0 && a[n - 1] == 0 {
        n -= 1;
    }
    n
}

/// Zeroes every word of `w`.
pub fn zero_out(w: &mut [Word]) {
    for x in w.iter_mut() {
        *x = 0;
    }
}

/// Copies `src` into `dst` from the low index upward.
pub fn copy_forward(dst: &mut [Word], src: &[Word]) {
    debug_assert_eq!(dst.len(), src.len());
    for i in 0..src.len() {
        dst[i] = src[i];
    }
}

/// Copies `src` into `dst` from the high index downward.
pub fn copy_backward(dst: &mut [Word], src: &[Word]) {
    debug_assert_eq!(dst.len(), src.len());
    for i in (0..src.len()).rev() {
        dst[i] = src[i];
    }
}

/// Copies `src` into `dst`. Correct only for non-overlapping spans; use [`memmove`]
/// (or, within one buffer, `<[Word]>::copy_within`) when aliasing is possible.
///
/// Chooses the backward direction; forward would be equally correct here since the spans
/// don't overlap, but backward matches the direction [`memmove`] must use when `dst` sits
/// above `src`, keeping the two routines' inner loops textually parallel.
pub fn memcpy(dst: &mut [Word], src: &[Word]) {
    copy_backward(dst, src);
}

/// Moves `n` words from `src` to `dst`, correct even when the two ranges overlap.
///
/// This is the general-purpose escape hatch for two independently-obtained spans; call
/// sites operating on a single owned buffer should prefer the safe
/// `<[Word]>::copy_within`, which expresses the same intent without raw pointers.
///
/// # Safety
///
/// `dst` and `src` must each be valid for `n` reads/writes of `Word`.
pub unsafe fn memmove(dst: *mut Word, src: *const Word, n: usize) {
    if (dst as usize) < (src as usize) {
        for i in 0..n {
            unsafe {
                *dst.add(i) = *src.add(i);
            }
        }
    } else {
        for i in (0..n).rev() {
            unsafe {
                *dst.add(i) = *src.add(i);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_carries_through_chain_to_overflow() {
        // 999999999999999999 + 1 = 1000000000000000000, base 10^9: [999999999, 999999999] + [1]
        let mut a = [BASE - 1, BASE - 1];
        let overflow = add(&mut a, &[1]);
        assert!(overflow);
        assert_eq!(a, [0, 0]);
    }

    #[test]
    fn sub_borrows_exactly_to_zero() {
        let mut a = [0, 1]; // represents BASE
        let underflow = sub(&mut a, &[1]); // BASE - 1
        assert!(!underflow);
        assert_eq!(normalize(&a), &[BASE - 1]);
    }

    #[test]
    fn sub_negative_recovers_magnitude() {
        let mut a = [1];
        let negated = sub(&mut a, &[2]);
        assert!(negated);
        assert_eq!(a, [1]);
    }

    #[test]
    fn uncomplement_is_involutive_on_recovered_value() {
        // ten's complement of [1] (len 1) subtracting 2 is BASE - 1; uncomplement recovers 1.
        let mut a = [BASE - 1];
        uncomplement(&mut a);
        assert_eq!(a, [1]);
    }

    #[test]
    fn compare_n_scans_high_to_low() {
        assert_eq!(compare_n(&[0, 1], &[9, 0], "<", "=", ">"), ">");
        assert_eq!(compare_n(&[5], &[5], "<", "=", ">"), "=");
        assert_eq!(compare_n(&[1, 0], &[9, 0], "<", "=", ">"), "<");
    }

    #[test]
    fn normalize_strips_leading_zero_words_idempotently() {
        let a = [1, 2, 0, 0];
        let n1 = normalize(&a);
        let n2 = normalize(n1);
        assert_eq!(n1, &[1, 2]);
        assert_eq!(n1, n2);
    }

    #[test]
    fn memmove_handles_forward_overlap() {
        let mut buf = [1, 2, 3, 4, 5];
        // Shift left by one: dst address < src address -> forward copy.
        unsafe {
            let src = buf.as_ptr().add(1);
            let dst = buf.as_mut_ptr();
            memmove(dst, src, 4);
        }
        assert_eq!(buf, [2, 3, 4, 5, 5]);
    }
}

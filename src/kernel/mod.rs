//! Allocation-free arithmetic over little-endian base-`BASE` digit spans (`&[Word]` /
//! `&mut [Word]`). Every routine here operates on caller-owned storage and performs no
//! allocation; growable storage lives one layer up, in [`crate::bigint`].

pub mod convert;
pub mod div;
pub mod linear;
pub mod mul;
pub mod primitives;
pub mod scaled;

pub use convert::{frombits_round, long_tobits_round, tobits_round, tolong};
pub use div::{div, divmod_uword, divmod_unsafe, estimate_q, long_div_round, mod_uword, modulo};
pub use linear::{
    add, compare_n, copy_backward, copy_forward, is_zero, memcpy, memmove, normalize,
    normalize_len, sub, sub_raw, uncomplement, zero_out,
};
pub use mul::mul;
pub use primitives::{adc, combine, mul_ww, q_div_d_to_d, q_from_2w2w, q_from_3w, sbb};
#[cfg(feature = "softdiv128")]
pub use primitives::q_div_d_to_d_bitsearch;
pub use scaled::{add_scaled, mul_uword, sub_scaled_raw};

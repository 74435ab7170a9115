//! Line-based textual protocol for exercising the kernel from the outside.
//!
//! [`run_wordbits`] and [`run_interact`] are the two subcommands of the `driver` binary
//! (`src/bin/driver.rs`); they're kept here, generic over [`BufRead`]/[`Write`], so the
//! protocol itself can be exercised in tests without a process boundary.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use std::io::{self, BufRead, Write};

use crate::bigint::UBigInt;
use crate::kernel;
use crate::word::{BASE_LOG, DoubleWord, Word, WORD_BITS};

/// Everything that can go wrong reading or interpreting one line of the protocol.
///
/// There is no recovery path: every variant here is the textual-protocol equivalent of the
/// kernel's own precondition-violation-is-UB contract, so the caller's job is to report it
/// and stop, not to keep going.
#[derive(Debug)]
pub enum DriverError {
    Io(io::Error),
    UnexpectedEof,
    InvalidAction(String),
    InvalidDigit(char),
    WordTooLong(usize),
    DivisionByZero,
    DivisorTooShort { found: usize, needed: usize },
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => write!(f, "unexpected EOF"),
            Self::InvalidAction(a) => write!(f, "first line starts with invalid symbol: {a:?}"),
            Self::InvalidDigit(c) => write!(f, "expected digit, found '{c}'"),
            Self::WordTooLong(n) => {
                write!(f, "expected single-word number, found line of length {n}")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::DivisorTooShort { found, needed } => write!(
                f,
                "division by {found}-word number (expected at least {needed})"
            ),
        }
    }
}

impl From<io::Error> for DriverError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Implements the `wordbits` subcommand: prints [`WORD_BITS`] and nothing else.
pub fn run_wordbits<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{WORD_BITS}")
}

/// Implements the `interact` subcommand: reads one command from `input` and writes its
/// result to `output`. Returns `Ok(())` on success; any [`DriverError`] is fatal, matching
/// the reference protocol's "illegal input aborts the process" error model.
pub fn run_interact<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), DriverError> {
    let action = read_line(input)?;
    let mut bytes = action.bytes();
    match bytes.next() {
        None => Err(DriverError::InvalidAction(action)),
        Some(b'+') => cmd_add(input, output),
        Some(b'-') => cmd_sub(input, output),
        Some(b'1') => match bytes.next() {
            Some(b'*') => cmd_mul_uword(input, output),
            Some(b'd') => cmd_divmod_uword(input, output),
            Some(b'%') => cmd_mod_uword(input, output),
            _ => Err(DriverError::InvalidAction(action)),
        },
        Some(b'*') => cmd_mul(input, output),
        Some(b'd') => cmd_divmod(input, output),
        Some(b'/') => cmd_div(input, output),
        Some(b'%') => cmd_mod(input, output),
        Some(b'?') => cmd_compare(input, output),
        Some(b't') => cmd_tobits(input, output),
        Some(b'T') => cmd_long_tobits(input, output),
        Some(b'f') => cmd_frombits(input, output),
        _ => Err(DriverError::InvalidAction(action)),
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String, DriverError> {
    let mut line = String::new();
    let n = input.read_line(&mut line)?;
    if n == 0 {
        return Err(DriverError::UnexpectedEof);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

fn read_bigint<R: BufRead>(input: &mut R) -> Result<UBigInt, DriverError> {
    let line = read_line(input)?;
    if line.is_empty() {
        return Err(DriverError::UnexpectedEof);
    }
    UBigInt::parse_decimal(&line).map_err(|_| {
        let bad = line.chars().find(|c| !c.is_ascii_digit()).unwrap_or('?');
        DriverError::InvalidDigit(bad)
    })
}

fn read_single_word<R: BufRead>(input: &mut R) -> Result<Word, DriverError> {
    let line = read_line(input)?;
    if line.is_empty() || line.len() > BASE_LOG as usize {
        return Err(DriverError::WordTooLong(line.len()));
    }
    let mut w: Word = 0;
    for c in line.chars() {
        let digit = c.to_digit(10).ok_or(DriverError::InvalidDigit(c))?;
        w = w * 10 + digit as Word;
    }
    Ok(w)
}

fn write_span<W: Write>(out: &mut W, v: &UBigInt, negative: bool) -> io::Result<()> {
    if v.is_zero() {
        writeln!(out, "0")
    } else if negative {
        writeln!(out, "-{v}")
    } else {
        writeln!(out, "{v}")
    }
}

fn write_word<W: Write>(out: &mut W, w: Word) -> io::Result<()> {
    writeln!(out, "{w}")
}

fn write_dword<W: Write>(out: &mut W, w: DoubleWord) -> io::Result<()> {
    writeln!(out, "{w}")
}

fn cmd_add<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), DriverError> {
    let a0 = read_bigint(input)?;
    let b0 = read_bigint(input)?;
    let (mut a, b) = a0.longer_first(b0);
    let overflow = kernel::add(a.words_mut(), b.words());
    if overflow {
        a.push_word(1);
    }
    write_span(output, &a, false)?;
    Ok(())
}

fn cmd_sub<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), DriverError> {
    let a0 = read_bigint(input)?;
    let b0 = read_bigint(input)?;
    let swapped = a0.words().len() < b0.words().len();
    let (mut a, b) = a0.longer_first(b0);

    let negated = kernel::sub(a.words_mut(), b.words());
    a.renormalize();
    write_span(output, &a, swapped ^ negated)?;
    Ok(())
}

fn cmd_mul_uword<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), DriverError> {
    let mut a = read_bigint(input)?;
    let b = read_single_word(input)?;
    let hi = kernel::mul_uword(a.words_mut(), b);
    a.push_word(hi);
    write_span(output, &a, false)?;
    Ok(())
}

fn cmd_divmod_uword<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), DriverError> {
    let mut a = read_bigint(input)?;
    let b = read_single_word(input)?;
    if b == 0 {
        return Err(DriverError::DivisionByZero);
    }
    let m = kernel::divmod_uword(a.words_mut(), b);
    a.renormalize();
    write_span(output, &a, false)?;
    write_word(output, m)?;
    Ok(())
}

fn cmd_mod_uword<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), DriverError> {
    let a = read_bigint(input)?;
    let b = read_single_word(input)?;
    if b == 0 {
        return Err(DriverError::DivisionByZero);
    }
    let m = kernel::mod_uword(a.words(), b);
    write_word(output, m)?;
    Ok(())
}

fn cmd_mul<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), DriverError> {
    let a = read_bigint(input)?;
    let b = read_bigint(input)?;
    let mut out_words: Vec<Word> = vec![0; a.words().len() + b.words().len()];
    kernel::mul(a.words(), b.words(), &mut out_words);
    write_span(output, &UBigInt::from_words(out_words), false)?;
    Ok(())
}

fn cmd_divmod<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), DriverError> {
    let a = read_bigint(input)?;
    let b = read_bigint(input)?;
    if b.words().len() < 2 {
        return Err(DriverError::DivisorTooShort { found: b.words().len(), needed: 2 });
    }

    if a.words().len() < b.words().len() {
        write_span(output, &UBigInt::zero(), false)?;
        write_span(output, &a, false)?;
        return Ok(());
    }

    let nb = b.words().len();
    let mut aw = a.into_words();
    let qhi = kernel::divmod_unsafe(&mut aw, b.words());
    aw.push(qhi);
    let quotient_words = aw.split_off(nb);

    write_span(output, &UBigInt::from_words(quotient_words), false)?;
    write_span(output, &UBigInt::from_words(aw), false)?;
    Ok(())
}

fn cmd_div<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), DriverError> {
    let a = read_bigint(input)?;
    let b = read_bigint(input)?;
    if b.is_zero() {
        return Err(DriverError::DivisorTooShort { found: 0, needed: 1 });
    }
    let mut aw = a.into_words();
    let len = kernel::div(&mut aw, b.words());
    aw.truncate(len);
    write_span(output, &UBigInt::from_words(aw), false)?;
    Ok(())
}

fn cmd_mod<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), DriverError> {
    let a = read_bigint(input)?;
    let b = read_bigint(input)?;
    if b.is_zero() {
        return Err(DriverError::DivisorTooShort { found: 0, needed: 1 });
    }
    let mut aw = a.into_words();
    let len = kernel::modulo(&mut aw, b.words());
    aw.truncate(len);
    write_span(output, &UBigInt::from_words(aw), false)?;
    Ok(())
}

fn cmd_compare<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), DriverError> {
    let a = read_bigint(input)?;
    let b = read_bigint(input)?;
    let c = if a.words().len() != b.words().len() {
        if a.words().len() < b.words().len() { '<' } else { '>' }
    } else {
        kernel::compare_n(a.words(), b.words(), '<', '=', '>')
    };
    writeln!(output, "{c}")?;
    Ok(())
}

fn cmd_tobits<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), DriverError> {
    let mut a = read_bigint(input)?;
    loop {
        let lo = kernel::tobits_round(a.words_mut());
        write_word(output, lo)?;
        a.renormalize();
        if a.is_zero() {
            break;
        }
    }
    Ok(())
}

fn cmd_long_tobits<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), DriverError> {
    let a = read_bigint(input)?;
    let na = a.words().len();
    let mut wd: Vec<DoubleWord> = vec![0; na / 2 + na % 2];
    kernel::tolong(a.words(), &mut wd);

    loop {
        let lo = kernel::long_tobits_round(&mut wd);
        write_dword(output, lo)?;
        let len = normalize_dword_len(&wd);
        wd.truncate(len);
        if wd.is_empty() {
            break;
        }
    }
    Ok(())
}

fn normalize_dword_len(wd: &[DoubleWord]) -> usize {
    let mut n = wd.len();
    while n != 0 && wd[n - 1] == 0 {
        n -= 1;
    }
    n
}

fn cmd_frombits<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<(), DriverError> {
    let mut a = read_bigint(input)?;
    let nrounds = read_single_word(input)?;
    for _ in 0..nrounds {
        let hi = kernel::frombits_round(a.words_mut());
        write_word(output, hi)?;
    }
    Ok(())
}

impl UBigInt {
    /// Orders `self` and `other` so the longer (by word count) comes first, the way the
    /// `+`/`-` commands swap operands before calling into the kernel's `a.len() >= b.len()`
    /// routines.
    fn longer_first(self, other: Self) -> (Self, Self) {
        if self.words().len() < other.words().len() {
            (other, self)
        } else {
            (self, other)
        }
    }
}

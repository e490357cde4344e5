//! Character-set linters: each reports `Ok` if every byte of
//! the input is a member of a fixed alphabet, else the first offending byte
//! with `(pos, 1)`.

use crate::bits::ByteSet;
use crate::context::LintContext;
use crate::error::{lint_err, ErrorKind, LintResult};

/// CSET 82: `!"%&'()*+,-./0-9:;<=>?A-Z_a-z` (82 members).
const CSET82: ByteSet = ByteSet::from_bytes(b"!\"%&'()*+,-./")
    .union(ByteSet::from_range(b'0', b'9'))
    .union(ByteSet::from_bytes(b":;<=>?"))
    .union(ByteSet::from_range(b'A', b'Z'))
    .union(ByteSet::from_bytes(b"_"))
    .union(ByteSet::from_range(b'a', b'z'));

/// CSET 82 members in their defined order, used by `checksum::csumalpha` to
/// turn a character into its positional weight index.
pub(crate) const CSET82_ORDERED: &[u8; 82] = b"!\"%&'()*+,-./0123456789:;<=>?ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// Returns the 0-based index of `b` within [`CSET82_ORDERED`], or `None` if
/// `b` is not a CSET 82 member.
pub(crate) fn cset82_index(b: u8) -> Option<u8> {
    CSET82_ORDERED.iter().position(|&c| c == b).map(|i| i as u8)
}

/// CSET 39: literal `#`, `-`, `/`, plus `0-9A-Z` (39 members).
const CSET39: ByteSet = ByteSet::from_bytes(b"#-/")
    .union(ByteSet::from_range(b'0', b'9'))
    .union(ByteSet::from_range(b'A', b'Z'));

/// CSET 64: base64url alphabet, `A-Za-z0-9-_` (64 members).
pub(crate) const CSET64: ByteSet = ByteSet::from_range(b'A', b'Z')
    .union(ByteSet::from_range(b'a', b'z'))
    .union(ByteSet::from_range(b'0', b'9'))
    .union(ByteSet::from_bytes(b"-_"));

const NUMERIC: ByteSet = ByteSet::from_range(b'0', b'9');

const HYPHEN: ByteSet = ByteSet::from_bytes(b"-");

/// CSET 32 used by the `csumalpha` check-pair: `23456789ABCDEFGHJKLMNPQRSTUVWXYZ`.
///
/// Ordering matters here (weight = index in this table), so it lives as an
/// ordered array rather than a `ByteSet`; see `checksum.rs`.
pub(crate) const CSET32: &[u8; 32] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZ";

/// Validates that every byte of `data` is a member of CSET 82.
///
/// An empty input is trivially conforming: there is no byte to
/// violate the membership test.
///
/// ```
/// use gs1_lint_core::{cset::cset82, LintContext};
/// assert!(cset82(b"ABC-123!", &LintContext::none()).is_ok());
/// assert!(cset82(b"", &LintContext::none()).is_ok());
/// assert!(cset82(b"A^B", &LintContext::none()).is_err());
/// ```
pub fn cset82(data: &[u8], _ctx: &LintContext) -> LintResult {
    match CSET82.first_non_member(data) {
        Some(pos) => lint_err!(ErrorKind::InvalidCset82Character, pos, 1),
        None => Ok(()),
    }
}

/// Validates that every byte of `data` is a member of CSET 39.
pub fn cset39(data: &[u8], _ctx: &LintContext) -> LintResult {
    match CSET39.first_non_member(data) {
        Some(pos) => lint_err!(ErrorKind::InvalidCset39Character, pos, 1),
        None => Ok(()),
    }
}

/// Validates `data` as base64url (CSET 64) with optional `=` padding.
///
/// Up to two trailing `=` bytes are accepted provided the total length
/// (including padding) is a multiple of 3; any other trailing-`=` shape is
/// reported as [`ErrorKind::InvalidCset64Padding`] anchored at the start of
/// the padding region, spanning it.
///
/// ```
/// use gs1_lint_core::{cset::cset64, LintContext};
/// assert!(cset64(b"QUJD", &LintContext::none()).is_err()); // len 4, not a multiple of 3
/// assert!(cset64(b"QUJ", &LintContext::none()).is_ok());
/// assert!(cset64(b"QU=", &LintContext::none()).is_ok());
/// ```
pub fn cset64(data: &[u8], _ctx: &LintContext) -> LintResult {
    let mut pad_count = 0usize;
    while pad_count < data.len() && data[data.len() - 1 - pad_count] == b'=' {
        pad_count += 1;
    }
    let core_len = data.len() - pad_count;
    if let Some(pos) = CSET64.first_non_member(&data[..core_len]) {
        return lint_err!(ErrorKind::InvalidCset64Character, pos, 1);
    }
    if pad_count > 2 || data.len() % 3 != 0 {
        return lint_err!(ErrorKind::InvalidCset64Padding, core_len, pad_count);
    }
    Ok(())
}

/// Validates that every byte of `data` is an ASCII digit.
pub fn csetnumeric(data: &[u8], _ctx: &LintContext) -> LintResult {
    match NUMERIC.first_non_member(data) {
        Some(pos) => lint_err!(ErrorKind::NonDigitCharacter, pos, 1),
        None => Ok(()),
    }
}

/// Succeeds iff `data` contains at least one byte outside `0-9`.
///
/// An empty input has no such byte, so it fails
/// ([`ErrorKind::RequiresNonDigitCharacter`], spanning the whole — empty —
/// input).
pub fn hasnondigit(data: &[u8], _ctx: &LintContext) -> LintResult {
    if data.iter().any(|&b| !NUMERIC.contains(b)) {
        Ok(())
    } else {
        lint_err!(ErrorKind::RequiresNonDigitCharacter, 0, data.len())
    }
}

/// Validates that `data` consists only of `-` bytes; empty input is an
/// error (unlike the other character-set linters, which treat empty as
/// vacuously conforming).
pub fn hyphen(data: &[u8], _ctx: &LintContext) -> LintResult {
    if data.is_empty() {
        return lint_err!(ErrorKind::NotHyphen, 0, 0);
    }
    match HYPHEN.first_non_member(data) {
        Some(pos) => lint_err!(ErrorKind::NotHyphen, pos, 1),
        None => Ok(()),
    }
}

/// Validates that `data` is exactly one byte drawn from the CSET 64
/// alphabet (`-0-9A-Z_a-z`).
pub fn importeridx(data: &[u8], _ctx: &LintContext) -> LintResult {
    if data.len() != 1 {
        return lint_err!(ErrorKind::ImporterIdxMustBeOneCharacter, 0, data.len());
    }
    if CSET64.contains(data[0]) {
        Ok(())
    } else {
        lint_err!(ErrorKind::InvalidImportIdxCharacter, 0, 1)
    }
}

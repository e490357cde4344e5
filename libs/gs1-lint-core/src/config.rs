//! Compile-time configuration constants.
//!
//! These replace what a settings registry would otherwise hold: there is no
//! runtime-mutable state in this crate besides the hooks in
//! [`crate::context::LintContext`], so a handful of `pub const`s is the
//! whole "configuration layer".

/// Minimum length of a GS1 Company Prefix accepted by `gcppos1`/`gcppos2`
/// when no GCP lookup hook is wired.
pub const GCP_MIN_LENGTH: usize = 4;

/// Absolute floor below which no real IBAN can exist (the per-linter check
/// uses the tighter 11-byte bound from the ISO 13616 length table).
pub const IBAN_MIN_LENGTH: usize = 10;

/// Maximum accepted length of an IBAN.
pub const IBAN_MAX_LENGTH: usize = 34;

/// Implementation ceiling on `csumalpha`'s input length: a limit of this
/// implementation, not of the underlying GS1 check-character-pair
/// algorithm — the prime table could be extended to raise it.
pub const CSUM_ALPHA_MAX_LEN: usize = 99;

/// The reference year `yymmd0`'s sliding 100-year window is anchored at.
/// A 2-digit year within 50 years of this value resolves to the nearby
/// century; further away, it rolls to the adjacent one.
pub const CURRENT_YEAR: u32 = 2021;

//! # Purpose:
//! Component-level linting for GS1 Application Identifier (AI) element
//! strings: the same per-component rules the GS1 General Specifications'
//! Syntax Dictionary and Syntax/Semantic Tests describe, expressed as plain
//! Rust functions.
//!
//! A "linter" here is any function with the [`Linter`] signature: it takes
//! the raw bytes of one AI *component* (already split out of the element
//! string by a caller-owned parser — this crate does not parse AI element
//! strings, only validates one component's bytes at a time) and an optional
//! [`LintContext`] carrying external lookups, and returns `Ok(())` or a
//! [`LintError`] identifying which byte span is wrong and why.
//!
//! ## Return-value contract
//! Every linter returns [`LintResult`]: `Ok(())` means the component is
//! valid; `Err(`[`LintError`]`{ kind, pos, len })` means it is not, with
//! `pos + len <= data.len()` always holding so a caller can slice `data` to
//! recover the offending span. `kind` identifies *why* from the
//! [`ErrorKind`] taxonomy; it never carries a formatted message itself (see
//! [`ErrorKind::description`] for that, gated behind the `descriptions`
//! feature).
//!
//! ## Examples:
//! ```
//! use gs1_lint_core::{registry::linter_from_name, LintContext};
//!
//! let lint = linter_from_name("csum").unwrap();
//! assert!(lint(b"0614146", &LintContext::none()).is_ok());
//!
//! let err = lint(b"0614140", &LintContext::none()).unwrap_err();
//! assert_eq!(err.kind, gs1_lint_core::ErrorKind::IncorrectCheckDigit);
//! ```
//!
//! ## Features:
//! - `descriptions` (default) - Enables [`ErrorKind::description`], a static
//!   table of short English descriptions for every error kind.
//! - `serde` - Derives `Serialize`/`Deserialize` for [`ErrorKind`] and
//!   [`LintError`].

pub mod bits;
pub mod checksum;
pub mod codelist;
pub mod config;
pub mod context;
pub mod coupon;
pub mod cset;
pub mod date;
pub mod error;
pub mod fixed;
pub mod gcp;
pub mod geo;
pub mod pcenc;
pub mod registry;

pub use context::{GcpLookupOutcome, LintContext};
pub use error::{ErrorKind, LintError, LintResult};

/// A linter's common signature: a component's raw bytes plus a context,
/// reduced to a pass/fail-with-span verdict.
///
/// Every entry in [`registry::REGISTRY`] has this type, and
/// [`registry::linter_from_name`] returns it.
pub type Linter = fn(data: &[u8], ctx: &LintContext) -> LintResult;

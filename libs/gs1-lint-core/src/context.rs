//! Construction-time override hooks for linters that consult an external
//! data source (GCP allocation, media types, package types).
//!
//! These look like global mutable state but are consume-time static
//! bindings, so they are exposed as construction-time arguments rather than
//! true globals, to preserve testability. [`LintContext`] is that argument:
//! it is threaded explicitly through every [`crate::Linter`] call (most
//! linters ignore it) instead of living behind a compile-time `cfg` symbol.

/// Outcome of a caller-supplied GCP (GS1 Company Prefix) registry lookup.
///
/// `Offline` is distinct from `Invalid`: it signals a transient "I cannot
/// tell right now" rather than a definitive "this prefix is not a GCP".
/// A caller may choose to fail-open on `Offline`; the core does not make
/// that choice for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GcpLookupOutcome {
    Valid,
    Invalid,
    Offline,
}

/// Bundles the three optional lookup hooks a caller may wire up: GCP,
/// media-type, and package-type.
///
/// Every slot defaults to `None`, in which case the linter that would have
/// consulted it falls back to its embedded sorted table (code-list linters)
/// or its bare structural check (GCP linters). Hook closures are `Sync` so a
/// single `LintContext` can be shared across threads, matching the crate's
/// pure, no-shared-mutable-state concurrency model.
#[derive(Clone, Copy, Default)]
pub struct LintContext<'a> {
    /// Consulted by `gcppos1`/`gcppos2`. Receives the full candidate GCP
    /// prefix (just the digits that would form the GCP, not the whole AI
    /// component).
    pub gcp_lookup: Option<&'a (dyn Fn(&[u8]) -> GcpLookupOutcome + Sync)>,

    /// Consulted by `mediatype`. Receives the full candidate and reports
    /// whether it names a recognised AIDC media type.
    pub media_type_lookup: Option<&'a (dyn Fn(&[u8]) -> bool + Sync)>,

    /// Consulted by `packagetype`. Receives the full candidate and reports
    /// whether it names a recognised `PackageTypeCode`.
    pub package_type_lookup: Option<&'a (dyn Fn(&[u8]) -> bool + Sync)>,
}

impl<'a> LintContext<'a> {
    /// The context every linter sees unless a caller wires up a hook: every
    /// code-list and GCP linter falls back to its embedded table.
    pub const fn none() -> Self {
        Self {
            gcp_lookup: None,
            media_type_lookup: None,
            package_type_lookup: None,
        }
    }
}

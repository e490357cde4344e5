//! GS1 Company Prefix linters: without an external allocation
//! registry, a GCP can only be checked structurally (digits, minimum
//! length); [`LintContext::gcp_lookup`] lets a caller supply the real thing.

use crate::config::GCP_MIN_LENGTH;
use crate::context::LintContext;
use crate::error::{lint_err, ErrorKind, LintResult};

fn check_gcp(data: &[u8], ctx: &LintContext) -> LintResult {
    if data.len() < GCP_MIN_LENGTH {
        return lint_err!(ErrorKind::TooShortForGcp, 0, data.len());
    }
    if let Some(pos) = data.iter().position(|&b| !b.is_ascii_digit()) {
        return lint_err!(ErrorKind::InvalidGcpPrefix, pos, 1);
    }
    match ctx.gcp_lookup {
        None => Ok(()),
        Some(hook) => match hook(data) {
            crate::context::GcpLookupOutcome::Valid => Ok(()),
            crate::context::GcpLookupOutcome::Invalid => {
                lint_err!(ErrorKind::InvalidGcpPrefix, 0, 0)
            }
            crate::context::GcpLookupOutcome::Offline => {
                tracing::debug!("gcp_lookup reported offline; accepting structurally valid prefix");
                lint_err!(ErrorKind::GcpDatasourceOffline, 0, 0)
            }
        },
    }
}

/// Validates `data` as a GS1 Company Prefix occupying the whole component.
///
/// ```
/// use gs1_lint_core::{gcp::gcppos1, LintContext};
/// assert!(gcppos1(b"0614141", &LintContext::none()).is_ok());
/// assert!(gcppos1(b"06", &LintContext::none()).is_err());
/// ```
pub fn gcppos1(data: &[u8], ctx: &LintContext) -> LintResult {
    check_gcp(data, ctx)
}

/// Validates the GS1 Company Prefix occupying `data[1..]`, skipping a leading
/// indicator digit (e.g. SSCC's extension digit). Errors re-anchor by 1.
pub fn gcppos2(data: &[u8], ctx: &LintContext) -> LintResult {
    if data.is_empty() {
        return lint_err!(ErrorKind::TooShortForGcp, 0, 0);
    }
    check_gcp(&data[1..], ctx).map_err(|e| e.reanchored(1))
}

/// Deprecated predecessor of [`gcppos1`].
///
/// Returns `Ok` unconditionally, ignoring `data` and `ctx`: every deprecated
/// entry point is kept as an ABI-preserving no-op shim so legacy AI-table
/// entries that still reference it by name keep validating successfully.
/// New code should call [`gcppos1`] directly.
#[allow(unused_variables)]
pub fn key(data: &[u8], ctx: &LintContext) -> LintResult {
    Ok(())
}

/// Deprecated predecessor of [`gcppos2`].
///
/// Returns `Ok` unconditionally; see [`key`] for why.
#[allow(unused_variables)]
pub fn keyoff1(data: &[u8], ctx: &LintContext) -> LintResult {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::GcpLookupOutcome;

    fn ctx() -> LintContext<'static> {
        LintContext::none()
    }

    #[test]
    fn gcppos1_requires_minimum_length_and_digits() {
        assert!(gcppos1(b"0614", &ctx()).is_ok());
        assert_eq!(
            gcppos1(b"06", &ctx()).unwrap_err().kind,
            ErrorKind::TooShortForGcp
        );
        assert_eq!(
            gcppos1(b"06a4", &ctx()).unwrap_err().kind,
            ErrorKind::InvalidGcpPrefix
        );
    }

    #[test]
    fn gcppos2_skips_leading_indicator_digit_and_reanchors() {
        assert!(gcppos2(b"00614141", &ctx()).is_ok());
        let err = gcppos2(b"0a614141", &ctx()).unwrap_err();
        assert_eq!((err.kind, err.pos), (ErrorKind::InvalidGcpPrefix, 1));
    }

    #[test]
    fn gcp_lookup_hook_overrides_structural_pass() {
        let hook = |_: &[u8]| GcpLookupOutcome::Invalid;
        let ctx = LintContext {
            gcp_lookup: Some(&hook),
            ..LintContext::none()
        };
        let err = gcppos1(b"0614141", &ctx).unwrap_err();
        assert_eq!((err.kind, err.pos, err.len), (ErrorKind::InvalidGcpPrefix, 0, 0));
    }

    #[test]
    fn gcp_lookup_offline_is_reported_distinctly() {
        let hook = |_: &[u8]| GcpLookupOutcome::Offline;
        let ctx = LintContext {
            gcp_lookup: Some(&hook),
            ..LintContext::none()
        };
        let err = gcppos1(b"0614141", &ctx).unwrap_err();
        assert_eq!((err.kind, err.pos, err.len), (ErrorKind::GcpDatasourceOffline, 0, 0));
    }

    #[test]
    fn key_and_keyoff1_return_ok_unconditionally() {
        assert!(key(b"0614141", &ctx()).is_ok());
        assert!(keyoff1(b"00614141", &ctx()).is_ok());
        assert!(key(b"", &ctx()).is_ok());
        assert!(keyoff1(b"not-a-gcp-at-all", &ctx()).is_ok());
    }
}

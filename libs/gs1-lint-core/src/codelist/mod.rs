//! Code-list linters: membership in a closed, externally
//! published set of codes, each checked against an embedded sorted table
//! unless the caller has wired an override hook on [`LintContext`].

pub mod tables;

use crate::bits::search_sorted;
use crate::context::LintContext;
use crate::error::{lint_err, ErrorKind, LintResult};

/// Validates that `data` is a member of the embedded ISO 3166-1 numeric table.
///
/// ```
/// use gs1_lint_core::{codelist::iso3166, LintContext};
/// assert!(iso3166(b"840", &LintContext::none()).is_ok()); // United States
/// assert!(iso3166(b"000", &LintContext::none()).is_err());
/// ```
pub fn iso3166(data: &[u8], _ctx: &LintContext) -> LintResult {
    match search_sorted(tables::ISO3166, data) {
        Some(_) => Ok(()),
        None => lint_err!(ErrorKind::NotIso3166, 0, data.len()),
    }
}

/// Validates that `data` is `"999"` (unknown/unspecified) or a member of the
/// ISO 3166-1 numeric table.
pub fn iso3166999(data: &[u8], _ctx: &LintContext) -> LintResult {
    if data == b"999" || search_sorted(tables::ISO3166, data).is_some() {
        Ok(())
    } else {
        lint_err!(ErrorKind::NotIso3166Or999, 0, data.len())
    }
}

/// Validates that `data` is a member of the embedded ISO 3166-1 alpha-2 table.
pub fn iso3166alpha2(data: &[u8], _ctx: &LintContext) -> LintResult {
    match search_sorted(tables::ISO3166_ALPHA2, data) {
        Some(_) => Ok(()),
        None => lint_err!(ErrorKind::NotIso3166Alpha2, 0, data.len()),
    }
}

/// Validates that `data` is a member of the embedded ISO 4217 numeric table.
pub fn iso4217(data: &[u8], _ctx: &LintContext) -> LintResult {
    match search_sorted(tables::ISO4217, data) {
        Some(_) => Ok(()),
        None => lint_err!(ErrorKind::NotIso4217, 0, data.len()),
    }
}

/// Validates `data` against the AIDC media type list, consulting
/// [`LintContext::media_type_lookup`] if present before falling back to the
/// embedded (partial) table.
pub fn mediatype(data: &[u8], ctx: &LintContext) -> LintResult {
    let recognised = match ctx.media_type_lookup {
        Some(hook) => hook(data),
        None => search_sorted(tables::MEDIA_TYPE, data).is_some(),
    };
    if recognised {
        Ok(())
    } else {
        lint_err!(ErrorKind::InvalidMediaType, 0, data.len())
    }
}

/// Validates `data` against the GS1 `PackageTypeCode` list, consulting
/// [`LintContext::package_type_lookup`] if present before falling back to the
/// embedded (partial) table.
pub fn packagetype(data: &[u8], ctx: &LintContext) -> LintResult {
    let recognised = match ctx.package_type_lookup {
        Some(hook) => hook(data),
        None => search_sorted(tables::PACKAGE_TYPE, data).is_some(),
    };
    if recognised {
        Ok(())
    } else {
        lint_err!(ErrorKind::InvalidPackageType, 0, data.len())
    }
}

/// Deprecated: validates `data` as a sequence of 3-byte ISO 3166-1 numeric
/// codes concatenated with no separator (an old AI 422x convention later
/// replaced by single-code AIs).
///
/// Empty input is an error rather than a vacuous pass: there must be at
/// least one country code to validate.
pub fn iso3166list(data: &[u8], ctx: &LintContext) -> LintResult {
    if data.is_empty() || data.len() % 3 != 0 {
        return lint_err!(ErrorKind::NotIso3166, 0, data.len());
    }
    for (i, chunk) in data.chunks(3).enumerate() {
        if let Err(e) = iso3166(chunk, ctx) {
            return Err(e.reanchored(i * 3));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> LintContext<'static> {
        LintContext::none()
    }

    #[test]
    fn iso3166_accepts_known_codes_and_rejects_unknown() {
        assert!(iso3166(b"840", &ctx()).is_ok());
        assert!(iso3166(b"276", &ctx()).is_ok());
        assert!(iso3166(b"000", &ctx()).is_err());
        assert!(iso3166(b"1", &ctx()).is_err());
    }

    #[test]
    fn iso3166999_accepts_999_sentinel() {
        assert!(iso3166999(b"999", &ctx()).is_ok());
        assert!(iso3166999(b"840", &ctx()).is_ok());
        assert_eq!(
            iso3166999(b"001", &ctx()).unwrap_err().kind,
            ErrorKind::NotIso3166Or999
        );
    }

    #[test]
    fn iso3166alpha2_accepts_known_codes() {
        assert!(iso3166alpha2(b"US", &ctx()).is_ok());
        assert!(iso3166alpha2(b"ZZ", &ctx()).is_err());
    }

    #[test]
    fn iso4217_accepts_known_codes() {
        assert!(iso4217(b"840", &ctx()).is_ok()); // USD
        assert!(iso4217(b"999", &ctx()).is_ok()); // XXX, no currency
        assert!(iso4217(b"001", &ctx()).is_err());
    }

    #[test]
    fn mediatype_falls_back_to_embedded_table_without_a_hook() {
        assert!(mediatype(b"1", &ctx()).is_ok());
        assert!(mediatype(b"999", &ctx()).is_err());
    }

    #[test]
    fn mediatype_prefers_hook_over_embedded_table() {
        let hook = |data: &[u8]| data == b"CUSTOM";
        let ctx = LintContext {
            media_type_lookup: Some(&hook),
            ..LintContext::none()
        };
        assert!(mediatype(b"CUSTOM", &ctx).is_ok());
        assert!(mediatype(b"1", &ctx).is_err()); // hook present, embedded table bypassed
    }

    #[test]
    fn packagetype_falls_back_to_embedded_table_without_a_hook() {
        assert!(packagetype(b"CT", &ctx()).is_ok());
        assert!(packagetype(b"QQ", &ctx()).is_err());
    }

    #[test]
    fn iso3166list_rejects_empty_and_validates_each_triple() {
        assert!(iso3166list(b"", &ctx()).is_err());
        assert!(iso3166list(b"840276", &ctx()).is_ok());
        let err = iso3166list(b"840000276", &ctx()).unwrap_err();
        assert_eq!((err.pos, err.len), (3, 3));
    }
}

//! Percent-encoding linter: every `%` byte must be followed by
//! exactly two ASCII hex digits.

use crate::context::LintContext;
use crate::error::{lint_err, ErrorKind, LintResult};

/// Validates that every `%` in `data` introduces a two-hex-digit escape.
///
/// ```
/// use gs1_lint_core::{pcenc::pcenc, LintContext};
/// assert!(pcenc(b"100%25tested", &LintContext::none()).is_ok());
/// assert!(pcenc(b"100%2tested", &LintContext::none()).is_err());
/// ```
pub fn pcenc(data: &[u8], _ctx: &LintContext) -> LintResult {
    let mut i = 0;
    while i < data.len() {
        if data[i] == b'%' {
            let ok = data.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && data.get(i + 2).is_some_and(u8::is_ascii_hexdigit);
            if !ok {
                let len = 1 + (data.len() - i - 1).min(2);
                return lint_err!(ErrorKind::InvalidPercentSequence, i, len);
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

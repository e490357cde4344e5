//! Date and time linters: fixed-width numeric fields checked
//! for range validity against the Gregorian calendar, plus sequence-position
//! and piece-count linters that share the same "digits, no stray leading
//! zero" discipline.

use crate::config::CURRENT_YEAR;
use crate::context::LintContext;
use crate::error::{lint_err, ErrorKind, LintResult};

fn parse_u32(data: &[u8]) -> Option<u32> {
    if data.is_empty() || !data.iter().all(u8::is_ascii_digit) {
        return None;
    }
    data.iter().fold(Some(0u32), |acc, &b| {
        acc.and_then(|n| n.checked_mul(10)?.checked_add((b - b'0') as u32))
    })
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Resolves a 2-digit year to a full year using a sliding 100-year window
/// anchored at [`CURRENT_YEAR`]: the candidate within 50 years of the anchor
/// wins, biased so that exactly-50-years-past rolls into the prior century
/// and exactly-50-years-future stays in the current one.
fn resolve_two_digit_year(yy: u32) -> u32 {
    let century = (CURRENT_YEAR / 100) * 100;
    let anchor_yy = CURRENT_YEAR % 100;
    let diff = yy as i32 - anchor_yy as i32;
    if diff >= 51 {
        century + yy - 100
    } else if diff <= -50 {
        century + yy + 100
    } else {
        century + yy
    }
}

fn check_month_day(year: u32, month: u32, day: u32, pos_month: usize, allow_zero_day: bool) -> LintResult {
    if !(1..=12).contains(&month) {
        return lint_err!(ErrorKind::IllegalMonth, pos_month, 2);
    }
    if allow_zero_day && day == 0 {
        return Ok(());
    }
    if day < 1 || day > days_in_month(year, month) {
        return lint_err!(ErrorKind::IllegalDay, pos_month + 2, 2);
    }
    Ok(())
}

/// Validates an 8-digit `YYYYMMDD` date where `DD` may be `00` to mean
/// "day not specified".
pub fn yyyymmd0(data: &[u8], _ctx: &LintContext) -> LintResult {
    if data.len() < 8 {
        return lint_err!(ErrorKind::DateTooShort, 0, data.len());
    }
    if data.len() > 8 {
        return lint_err!(ErrorKind::DateTooLong, 0, data.len());
    }
    let year = match parse_u32(&data[0..4]) {
        Some(y) => y,
        None => return lint_err!(ErrorKind::IllegalMonth, 0, 4),
    };
    let month = match parse_u32(&data[4..6]) {
        Some(m) => m,
        None => return lint_err!(ErrorKind::IllegalMonth, 4, 2),
    };
    let day = match parse_u32(&data[6..8]) {
        Some(d) => d,
        None => return lint_err!(ErrorKind::IllegalDay, 6, 2),
    };
    check_month_day(year, month, day, 4, true)
}

/// Validates an 8-digit `YYYYMMDD` date with an actual calendar day (`DD`
/// must not be `00`).
pub fn yyyymmdd(data: &[u8], ctx: &LintContext) -> LintResult {
    yyyymmd0(data, ctx)?;
    if data.get(6..8) == Some(b"00") {
        return lint_err!(ErrorKind::IllegalDay, 6, 2);
    }
    Ok(())
}

/// Validates a 6-digit `YYMMDD` date where `DD` may be `00`, with the 2-digit
/// year resolved via [`resolve_two_digit_year`].
pub fn yymmd0(data: &[u8], _ctx: &LintContext) -> LintResult {
    if data.len() < 6 {
        return lint_err!(ErrorKind::DateTooShort, 0, data.len());
    }
    if data.len() > 6 {
        return lint_err!(ErrorKind::DateTooLong, 0, data.len());
    }
    let yy = match parse_u32(&data[0..2]) {
        Some(yy) => yy,
        None => return lint_err!(ErrorKind::IllegalMonth, 0, 2),
    };
    let month = match parse_u32(&data[2..4]) {
        Some(m) => m,
        None => return lint_err!(ErrorKind::IllegalMonth, 2, 2),
    };
    let day = match parse_u32(&data[4..6]) {
        Some(d) => d,
        None => return lint_err!(ErrorKind::IllegalDay, 4, 2),
    };
    let year = resolve_two_digit_year(yy);
    check_month_day(year, month, day, 2, true)
}

/// Validates a 6-digit `YYMMDD` date with an actual calendar day.
pub fn yymmdd(data: &[u8], ctx: &LintContext) -> LintResult {
    yymmd0(data, ctx)?;
    if data.get(4..6) == Some(b"00") {
        return lint_err!(ErrorKind::IllegalDay, 4, 2);
    }
    Ok(())
}

/// Validates a 2-digit hour, `00`..=`23`.
pub fn hh(data: &[u8], _ctx: &LintContext) -> LintResult {
    if data.len() < 2 {
        return lint_err!(ErrorKind::HourTooShort, 0, data.len());
    }
    if data.len() > 2 {
        return lint_err!(ErrorKind::HourTooLong, 0, data.len());
    }
    match parse_u32(data) {
        Some(h) if h <= 23 => Ok(()),
        _ => lint_err!(ErrorKind::IllegalHour, 0, 2),
    }
}

/// Validates a 2-digit minute, `00`..=`59`.
pub fn mi(data: &[u8], _ctx: &LintContext) -> LintResult {
    if data.len() < 2 {
        return lint_err!(ErrorKind::MinuteTooShort, 0, data.len());
    }
    if data.len() > 2 {
        return lint_err!(ErrorKind::MinuteTooLong, 0, data.len());
    }
    match parse_u32(data) {
        Some(m) if m <= 59 => Ok(()),
        _ => lint_err!(ErrorKind::IllegalMinute, 0, 2),
    }
}

/// Validates a 2-digit second, `00`..=`59`.
pub fn ss(data: &[u8], _ctx: &LintContext) -> LintResult {
    if data.len() < 2 {
        return lint_err!(ErrorKind::SecondTooShort, 0, data.len());
    }
    if data.len() > 2 {
        return lint_err!(ErrorKind::SecondTooLong, 0, data.len());
    }
    match parse_u32(data) {
        Some(s) if s <= 59 => Ok(()),
        _ => lint_err!(ErrorKind::IllegalSecond, 0, 2),
    }
}

/// Validates a 4-digit `HHMI` composite.
pub fn hhmi(data: &[u8], ctx: &LintContext) -> LintResult {
    if data.len() < 4 {
        return lint_err!(ErrorKind::HourWithMinuteTooShort, 0, data.len());
    }
    if data.len() > 4 {
        return lint_err!(ErrorKind::HourWithMinuteTooLong, 0, data.len());
    }
    hh(&data[0..2], ctx)?;
    mi(&data[2..4], ctx).map_err(|e| e.reanchored(2))
}

/// Deprecated predecessor of [`hhmi`].
///
/// Returns `Ok` unconditionally, ignoring `data` and `ctx`: every deprecated
/// entry point is kept as an ABI-preserving no-op shim so legacy AI-table
/// entries that still reference it by name keep validating successfully.
/// New code should call [`hhmi`] directly.
#[allow(unused_variables)]
pub fn hhmm(data: &[u8], ctx: &LintContext) -> LintResult {
    Ok(())
}

/// Deprecated predecessor of `mi`+`ss` decomposition.
///
/// Returns `Ok` unconditionally; see [`hhmm`] for why.
#[allow(unused_variables)]
pub fn mmoptss(data: &[u8], ctx: &LintContext) -> LintResult {
    Ok(())
}

/// Deprecated predecessor of `yymmdd`+`hh` composition.
///
/// Returns `Ok` unconditionally; see [`hhmm`] for why.
#[allow(unused_variables)]
pub fn yymmddhh(data: &[u8], ctx: &LintContext) -> LintResult {
    Ok(())
}

fn split_once_slash(data: &[u8]) -> Option<(&[u8], &[u8])> {
    let slash = data.iter().position(|&b| b == b'/')?;
    if data[slash + 1..].iter().any(|&b| b == b'/') {
        return None;
    }
    Some((&data[..slash], &data[slash + 1..]))
}

fn parse_digits(data: &[u8]) -> Option<u64> {
    if data.is_empty() || !data.iter().all(u8::is_ascii_digit) {
        return None;
    }
    data.iter()
        .fold(Some(0u64), |acc, &b| acc.and_then(|n| Some(n * 10 + (b - b'0') as u64)))
}

/// Validates `data` as `<pos>/<end>`, two decimal numbers with no leading
/// zero separated by a single `/`, where `pos` does not exceed `end`.
///
/// A malformed split (missing/extra `/`, empty or non-digit half) reports
/// [`ErrorKind::PositionInSequenceMalformed`]; a well-formed half with a
/// leading zero reports [`ErrorKind::IllegalZeroPrefix`] anchored at that
/// half specifically.
pub fn posinseqslash(data: &[u8], _ctx: &LintContext) -> LintResult {
    let (pos_part, end_part) = match split_once_slash(data) {
        Some(parts) => parts,
        None => return lint_err!(ErrorKind::PositionInSequenceMalformed, 0, data.len()),
    };
    let pos = match parse_digits(pos_part) {
        Some(n) => n,
        None => return lint_err!(ErrorKind::PositionInSequenceMalformed, 0, pos_part.len()),
    };
    if pos_part.len() > 1 && pos_part[0] == b'0' {
        return lint_err!(ErrorKind::IllegalZeroPrefix, 0, pos_part.len());
    }
    let end = match parse_digits(end_part) {
        Some(n) => n,
        None => {
            return lint_err!(
                ErrorKind::PositionInSequenceMalformed,
                pos_part.len() + 1,
                end_part.len()
            )
        }
    };
    if end_part.len() > 1 && end_part[0] == b'0' {
        return lint_err!(
            ErrorKind::IllegalZeroPrefix,
            pos_part.len() + 1,
            end_part.len()
        );
    }
    if pos > end {
        return lint_err!(ErrorKind::PositionExceedsEnd, 0, data.len());
    }
    Ok(())
}

/// Validates `data` as a fixed-width `PPTT` composite (piece number and total
/// piece count of equal width), piece in `1..=total`.
pub fn pieceoftotal(data: &[u8], _ctx: &LintContext) -> LintResult {
    if data.len() < 2 || data.len() % 2 != 0 {
        return lint_err!(ErrorKind::InvalidLengthForPieceOfTotal, 0, data.len());
    }
    let half = data.len() / 2;
    let piece = match parse_u32(&data[..half]) {
        Some(n) => n,
        None => return lint_err!(ErrorKind::InvalidLengthForPieceOfTotal, 0, half),
    };
    let total = match parse_u32(&data[half..]) {
        Some(n) => n,
        None => return lint_err!(ErrorKind::InvalidLengthForPieceOfTotal, half, half),
    };
    if piece == 0 {
        return lint_err!(ErrorKind::ZeroPieceNumber, 0, half);
    }
    if total == 0 {
        return lint_err!(ErrorKind::ZeroTotalPieces, half, half);
    }
    if piece > total {
        return lint_err!(ErrorKind::PieceNumberExceedsTotal, 0, data.len());
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
    fn yyyymmd0_accepts_day_zero_and_checks_leap_years() {
        assert!(yyyymmd0(b"20210600", &ctx()).is_ok());
        assert!(yyyymmd0(b"20000229", &ctx()).is_ok()); // 2000 is a leap year
        assert!(yyyymmd0(b"19000229", &ctx()).is_err()); // 1900 is not
        assert!(yyyymmd0(b"20210431", &ctx()).is_err()); // April has 30 days
        assert!(yyyymmd0(b"20211300", &ctx()).is_err());
    }

    #[test]
    fn yyyymmd0_locates_non_digit_year_at_the_year_field() {
        let err = yyyymmd0(b"2a210600", &ctx()).unwrap_err();
        assert_eq!((err.kind, err.pos, err.len), (ErrorKind::IllegalMonth, 0, 4));
    }

    #[test]
    fn yyyymmdd_rejects_day_zero() {
        assert!(yyyymmdd(b"20210615", &ctx()).is_ok());
        assert_eq!(
            yyyymmdd(b"20210600", &ctx()).unwrap_err().kind,
            ErrorKind::IllegalDay
        );
    }

    #[test]
    fn yymmd0_resolves_two_digit_year_window() {
        // anchored at 2021: "21" stays 2021 (not a leap year), "99" rolls
        // back to 1999 (also not a leap year), "00" resolves to 2000 (leap).
        assert!(yymmd0(b"210229", &ctx()).is_err());
        assert!(yymmd0(b"990229", &ctx()).is_err());
        assert!(yymmd0(b"000229", &ctx()).is_ok());
    }

    #[test]
    fn yymmd0_locates_non_digit_yy_at_the_yy_field() {
        let err = yymmd0(b"a10600", &ctx()).unwrap_err();
        assert_eq!((err.kind, err.pos, err.len), (ErrorKind::IllegalMonth, 0, 2));
    }

    #[test]
    fn hh_mi_ss_range_checks() {
        assert!(hh(b"23", &ctx()).is_ok());
        assert_eq!(hh(b"24", &ctx()).unwrap_err().kind, ErrorKind::IllegalHour);
        assert_eq!(hh(b"1", &ctx()).unwrap_err().kind, ErrorKind::HourTooShort);
        assert!(mi(b"59", &ctx()).is_ok());
        assert!(mi(b"60", &ctx()).is_err());
        assert!(ss(b"00", &ctx()).is_ok());
    }

    #[test]
    fn hhmi_composite_reanchors_minute_errors() {
        assert!(hhmi(b"2359", &ctx()).is_ok());
        let err = hhmi(b"2360", &ctx()).unwrap_err();
        assert_eq!((err.kind, err.pos), (ErrorKind::IllegalMinute, 2));
    }

    #[test]
    fn deprecated_shims_return_ok_unconditionally() {
        assert!(hhmm(b"2499", &ctx()).is_ok()); // would be IllegalHour/IllegalMinute via hhmi
        assert!(mmoptss(b"3", &ctx()).is_ok());
        assert!(mmoptss(b"", &ctx()).is_ok());
        assert!(yymmddhh(b"991301994", &ctx()).is_ok());
    }

    #[test]
    fn posinseqslash_enforces_no_leading_zero_and_ordering() {
        assert!(posinseqslash(b"1/2", &ctx()).is_ok());
        assert!(posinseqslash(b"12/12", &ctx()).is_ok());
        let err = posinseqslash(b"01/2", &ctx()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::IllegalZeroPrefix);
        assert_eq!((err.pos, err.len), (0, 2));
        assert_eq!(
            posinseqslash(b"3/2", &ctx()).unwrap_err().kind,
            ErrorKind::PositionExceedsEnd
        );
        assert!(posinseqslash(b"12", &ctx()).is_err());
        let err = posinseqslash(b"10/9", &ctx()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::PositionExceedsEnd);
        assert_eq!((err.pos, err.len), (0, 4));
        assert!(posinseqslash(b"99/99", &ctx()).is_ok());
    }

    #[test]
    fn pieceoftotal_enforces_equal_width_and_bounds() {
        assert!(pieceoftotal(b"0103", &ctx()).is_ok());
        assert_eq!(
            pieceoftotal(b"0003", &ctx()).unwrap_err().kind,
            ErrorKind::ZeroPieceNumber
        );
        assert_eq!(
            pieceoftotal(b"0100", &ctx()).unwrap_err().kind,
            ErrorKind::ZeroTotalPieces
        );
        assert_eq!(
            pieceoftotal(b"0501", &ctx()).unwrap_err().kind,
            ErrorKind::PieceNumberExceedsTotal
        );
        assert_eq!(
            pieceoftotal(b"123", &ctx()).unwrap_err().kind,
            ErrorKind::InvalidLengthForPieceOfTotal
        );
    }
}

//! Latitude/longitude linters: each is a fixed 10-digit,
//! zero-padded integer encoding of a coordinate at 1e-7 degree resolution,
//! offset so the whole range is non-negative.

use crate::context::LintContext;
use crate::error::{lint_err, ErrorKind, LintResult};

const LATITUDE_MAX: u64 = 1_800_000_000;
const LONGITUDE_MAX: u64 = 3_600_000_000;

fn parse_fixed10(data: &[u8]) -> Result<u64, usize> {
    if let Some(pos) = data.iter().position(|&b| !b.is_ascii_digit()) {
        return Err(pos);
    }
    Ok(data.iter().fold(0u64, |n, &b| n * 10 + (b - b'0') as u64))
}

/// Validates a 10-digit latitude: degrees offset by +90 and scaled by 1e7,
/// so the valid raw range is `0..=1_800_000_000`.
pub fn latitude(data: &[u8], _ctx: &LintContext) -> LintResult {
    if data.len() != 10 {
        return lint_err!(ErrorKind::LatitudeInvalidLength, 0, data.len());
    }
    match parse_fixed10(data) {
        Ok(v) if v <= LATITUDE_MAX => Ok(()),
        Ok(_) => lint_err!(ErrorKind::InvalidLatitude, 0, 10),
        Err(pos) => lint_err!(ErrorKind::NonDigitCharacter, pos, 1),
    }
}

/// Validates a 10-digit longitude: degrees offset by +180 and scaled by 1e7,
/// so the valid raw range is `0..=3_600_000_000`.
pub fn longitude(data: &[u8], _ctx: &LintContext) -> LintResult {
    if data.len() != 10 {
        return lint_err!(ErrorKind::LongitudeInvalidLength, 0, data.len());
    }
    match parse_fixed10(data) {
        Ok(v) if v <= LONGITUDE_MAX => Ok(()),
        Ok(_) => lint_err!(ErrorKind::InvalidLongitude, 0, 10),
        Err(pos) => lint_err!(ErrorKind::NonDigitCharacter, pos, 1),
    }
}

/// Deprecated: validates a 20-byte `latitude` + `longitude` concatenation.
pub fn latlong(data: &[u8], ctx: &LintContext) -> LintResult {
    if data.len() != 20 {
        return lint_err!(ErrorKind::LatitudeInvalidLength, 0, data.len());
    }
    latitude(&data[0..10], ctx)?;
    longitude(&data[10..20], ctx).map_err(|e| e.reanchored(10))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> LintContext<'static> {
        LintContext::none()
    }

    #[test]
    fn latitude_accepts_extremes_and_rejects_out_of_range() {
        assert!(latitude(b"0000000000", &ctx()).is_ok());
        assert!(latitude(b"1800000000", &ctx()).is_ok());
        assert_eq!(
            latitude(b"1800000001", &ctx()).unwrap_err().kind,
            ErrorKind::InvalidLatitude
        );
        assert_eq!(
            latitude(b"180000000", &ctx()).unwrap_err().kind,
            ErrorKind::LatitudeInvalidLength
        );
        let err = latitude(b"18000x0000", &ctx()).unwrap_err();
        assert_eq!((err.kind, err.pos), (ErrorKind::NonDigitCharacter, 5));
    }

    #[test]
    fn longitude_accepts_extremes_and_rejects_out_of_range() {
        assert!(longitude(b"3600000000", &ctx()).is_ok());
        assert_eq!(
            longitude(b"3600000001", &ctx()).unwrap_err().kind,
            ErrorKind::InvalidLongitude
        );
    }

    #[test]
    fn latlong_reanchors_longitude_errors() {
        let data = b"00000000003600000001";
        assert_eq!(data.len(), 21); // sanity: not a valid latlong input
        let good = b"18000000003600000000";
        assert!(latlong(good, &ctx()).is_ok());
        let bad = b"18000000003600000001";
        let err = latlong(bad, &ctx()).unwrap_err();
        assert_eq!((err.kind, err.pos), (ErrorKind::InvalidLongitude, 10));
    }
}

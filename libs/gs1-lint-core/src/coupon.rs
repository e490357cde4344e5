//! Coupon linters: the legacy North American Coupon Code (`couponcode`,
//! historically AI 8110) is a mandatory fixed/VLI-prefixed payload followed
//! by up to seven optional indicator-selected blocks that must appear in
//! strictly ascending indicator order; `couponposoffer` is its modern
//! fixed-width replacement with no variable-length fields.
//!
//! Both are left-to-right scan-with-position parsers, generalized from a
//! flat byte scan into a small explicit state machine since the optional
//! blocks are not a uniform repeat.

use crate::context::LintContext;
use crate::date::yymmdd;
use crate::error::{lint_err, ErrorKind, LintError, LintResult};
use crate::gcp::gcppos1;

fn digit_at(data: &[u8], pos: usize) -> Option<u8> {
    data.get(pos).filter(|b| b.is_ascii_digit()).map(|&b| b - b'0')
}

/// Reads one digit at `pos`, failing with `missing` if `pos` is past the end
/// of `data` or `invalid` if the byte there is not an ASCII digit.
fn read_digit(data: &[u8], pos: usize, missing: ErrorKind, invalid: ErrorKind) -> Result<u8, LintError> {
    if pos >= data.len() {
        return Err(LintError::new(missing, pos, 0));
    }
    digit_at(data, pos).ok_or_else(|| LintError::new(invalid, pos, 1))
}

/// Reads one digit at `pos` and additionally requires it be a member of
/// `allowed`; a digit outside that set is reported the same as a non-digit
/// byte (`invalid`), since the coupon taxonomy has a single "invalid" kind
/// per field covering both cases.
fn read_digit_in(
    data: &[u8],
    pos: usize,
    allowed: &[u8],
    missing: ErrorKind,
    invalid: ErrorKind,
) -> Result<u8, LintError> {
    let d = read_digit(data, pos, missing, invalid)?;
    if allowed.contains(&d) {
        Ok(d)
    } else {
        Err(LintError::new(invalid, pos, 1))
    }
}

fn require_digits(data: &[u8], pos: usize, len: usize, truncated: ErrorKind) -> Result<(), LintError> {
    if pos + len > data.len() {
        return Err(LintError::new(truncated, pos, data.len() - pos));
    }
    Ok(())
}

fn check_all_digits(data: &[u8], pos: usize, len: usize) -> Result<(), LintError> {
    match data[pos..pos + len].iter().position(|b| !b.is_ascii_digit()) {
        Some(i) => Err(LintError::new(ErrorKind::NonDigitCharacter, pos + i, 1)),
        None => Ok(()),
    }
}

/// Reads a `VLI`-prefixed GCP field (used by the 1st/2nd/3rd-purchase GCPs
/// and the Retailer GCP/GLN): a one-digit length indicator, restricted to
/// `allowed_vli`, followed by `vli + 6` digits validated structurally (and,
/// if wired, through [`LintContext::gcp_lookup`]) via [`gcppos1`].
fn read_gcp_field(
    data: &[u8],
    pos: &mut usize,
    ctx: &LintContext,
    allowed_vli: &[u8],
    missing_vli: ErrorKind,
    invalid_vli: ErrorKind,
    truncated: ErrorKind,
) -> LintResult {
    let vli = read_digit_in(data, *pos, allowed_vli, missing_vli, invalid_vli)?;
    *pos += 1;
    let len = vli as usize + 6;
    require_digits(data, *pos, len, truncated)?;
    gcppos1(&data[*pos..*pos + len], ctx).map_err(|e| e.reanchored(*pos))?;
    *pos += len;
    Ok(())
}

/// Reads the "2nd purchase"/"3rd purchase" subfield set shared by optional
/// blocks 1 and 2: an additional-requirement VLI+value, an additional
/// requirement code, a 3-digit family code, and a GCP VLI where `'9'` is a
/// sentinel meaning "no GCP present" (length 0, no `gcppos1` call).
fn read_additional_purchase(data: &[u8], pos: &mut usize, ctx: &LintContext) -> LintResult {
    let req_vli = read_digit_in(
        data,
        *pos,
        &[1, 2, 3, 4, 5],
        ErrorKind::CouponMissingAdditionalRequirementVli,
        ErrorKind::CouponInvalidAdditionalRequirementVli,
    )?;
    *pos += 1;
    let req_len = req_vli as usize;
    require_digits(data, *pos, req_len, ErrorKind::CouponTruncatedAdditionalRequirement)?;
    check_all_digits(data, *pos, req_len)?;
    *pos += req_len;

    read_digit_in(
        data,
        *pos,
        &[0, 1, 2, 3, 4, 9],
        ErrorKind::CouponMissingAdditionalRequirementCode,
        ErrorKind::CouponInvalidAdditionalRequirementCode,
    )?;
    *pos += 1;

    require_digits(data, *pos, 3, ErrorKind::CouponTruncatedAdditionalFamilyCode)?;
    check_all_digits(data, *pos, 3)
        .map_err(|_| LintError::new(ErrorKind::CouponInvalidAdditionalFamilyCode, *pos, 3))?;
    *pos += 3;

    let gcp_vli = read_digit_in(
        data,
        *pos,
        &[0, 1, 2, 3, 4, 5, 6, 9],
        ErrorKind::CouponMissingAdditionalGcpVli,
        ErrorKind::CouponInvalidAdditionalGcpVli,
    )?;
    *pos += 1;
    if gcp_vli == 9 {
        return Ok(());
    }
    let len = gcp_vli as usize + 6;
    require_digits(data, *pos, len, ErrorKind::CouponTruncatedAdditionalGcp)?;
    gcppos1(&data[*pos..*pos + len], ctx).map_err(|e| e.reanchored(*pos))?;
    *pos += len;
    Ok(())
}

/// Validates a legacy North American Coupon Code (historically AI 8110).
///
/// Mandatory prefix (no Format Code field — that belongs only to the
/// modernised [`couponposoffer`]): GCP (Funder ID), Offer Code, Save Value,
/// 1st-purchase Requirement, Requirement Code, and Family Code. Followed by
/// up to six optional blocks selected by a single leading indicator digit in
/// `'1'..'6'|'9'`; indicators must appear in strictly ascending order and
/// each at most once.
pub fn couponcode(data: &[u8], ctx: &LintContext) -> LintResult {
    let mut pos = 0usize;

    read_gcp_field(
        data,
        &mut pos,
        ctx,
        &[0, 1, 2, 3, 4, 5, 6],
        ErrorKind::CouponMissingFunderVli,
        ErrorKind::CouponInvalidFunderVli,
        ErrorKind::CouponTruncatedFunderId,
    )?;

    require_digits(data, pos, 6, ErrorKind::CouponTruncatedOfferCode)?;
    check_all_digits(data, pos, 6).map_err(|_| LintError::new(ErrorKind::CouponInvalidOfferCode, pos, 6))?;
    pos += 6;

    let sv_vli = read_digit_in(
        data,
        pos,
        &[1, 2, 3, 4, 5],
        ErrorKind::CouponMissingSaveValueVli,
        ErrorKind::CouponInvalidSaveValueVli,
    )?;
    pos += 1;
    let sv_len = sv_vli as usize;
    require_digits(data, pos, sv_len, ErrorKind::CouponTruncatedSaveValue)?;
    check_all_digits(data, pos, sv_len)?;
    pos += sv_len;

    let pr_vli = read_digit_in(
        data,
        pos,
        &[1, 2, 3, 4, 5],
        ErrorKind::CouponMissingPurchaseRequirementVli,
        ErrorKind::CouponInvalidPurchaseRequirementVli,
    )?;
    pos += 1;
    let pr_len = pr_vli as usize;
    require_digits(data, pos, pr_len, ErrorKind::CouponTruncatedPurchaseRequirement)?;
    check_all_digits(data, pos, pr_len)?;
    pos += pr_len;

    read_digit_in(
        data,
        pos,
        &[0, 1, 2, 3, 4, 9],
        ErrorKind::CouponMissingPurchaseRequirementCode,
        ErrorKind::CouponInvalidPurchaseRequirementCode,
    )?;
    pos += 1;

    require_digits(data, pos, 3, ErrorKind::CouponTruncatedFamilyCode)?;
    check_all_digits(data, pos, 3).map_err(|_| LintError::new(ErrorKind::CouponInvalidFamilyCode, pos, 3))?;
    pos += 3;

    let mut last_indicator: Option<u8> = None;
    let mut expiration: Option<[u8; 6]> = None;
    let mut start: Option<[u8; 6]> = None;
    let mut expiration_window_start: Option<usize> = None;

    while pos < data.len() {
        let indicator = match data[pos] {
            b @ b'1'..=b'6' | b @ b'9' => b - b'0',
            // Not even a candidate indicator digit: whatever remains is
            // residual data, not a malformed block, regardless of whether
            // an indicator 9 (terminal "miscellaneous" block) was seen.
            _ => return lint_err!(ErrorKind::CouponExcessData, pos, data.len() - pos),
        };
        if last_indicator.is_some_and(|last| indicator <= last) {
            return lint_err!(ErrorKind::CouponInvalidOptionalDataIndicator, pos, 1);
        }
        let indicator_pos = pos;
        last_indicator = Some(indicator);
        pos += 1;

        match indicator {
            1 => {
                read_digit_in(
                    data,
                    pos,
                    &[0, 1, 2, 3],
                    ErrorKind::CouponMissingRulesCode,
                    ErrorKind::CouponInvalidRulesCode,
                )?;
                pos += 1;
                read_additional_purchase(data, &mut pos, ctx)?;
            }
            2 => {
                read_additional_purchase(data, &mut pos, ctx)?;
            }
            3 => {
                require_digits(data, pos, 6, ErrorKind::CouponTruncatedExpirationDate)?;
                yymmdd(&data[pos..pos + 6], ctx).map_err(|e| e.reanchored(pos))?;
                expiration = Some(data[pos..pos + 6].try_into().unwrap());
                expiration_window_start = Some(indicator_pos);
                pos += 6;
            }
            4 => {
                require_digits(data, pos, 6, ErrorKind::CouponTruncatedStartDate)?;
                yymmdd(&data[pos..pos + 6], ctx).map_err(|e| e.reanchored(pos))?;
                start = Some(data[pos..pos + 6].try_into().unwrap());
                pos += 6;
                if let (Some(exp), Some(start)) = (expiration, start) {
                    if exp < start {
                        let window_start = expiration_window_start.unwrap();
                        return lint_err!(ErrorKind::CouponExpirationBeforeStart, window_start, pos - window_start);
                    }
                }
            }
            5 => {
                let vli = read_digit(
                    data,
                    pos,
                    ErrorKind::CouponMissingSerialNumberVli,
                    ErrorKind::CouponInvalidSerialNumberVli,
                )?;
                pos += 1;
                let len = vli as usize + 6;
                require_digits(data, pos, len, ErrorKind::CouponTruncatedSerialNumber)?;
                check_all_digits(data, pos, len)?;
                pos += len;
            }
            6 => {
                read_gcp_field(
                    data,
                    &mut pos,
                    ctx,
                    &[1, 2, 3, 4, 5, 6, 7],
                    ErrorKind::CouponMissingRetailerGcpVli,
                    ErrorKind::CouponInvalidRetailerGcpVli,
                    ErrorKind::CouponTruncatedRetailerGcp,
                )?;
            }
            9 => {
                read_digit_in(
                    data,
                    pos,
                    &[0, 1, 2, 5, 6],
                    ErrorKind::CouponMissingSaveValueCode,
                    ErrorKind::CouponInvalidSaveValueCode,
                )?;
                pos += 1;
                read_digit_in(
                    data,
                    pos,
                    &[0, 1, 2],
                    ErrorKind::CouponMissingSaveValueAppliesToItem,
                    ErrorKind::CouponInvalidSaveValueAppliesToItem,
                )?;
                pos += 1;
                read_digit(
                    data,
                    pos,
                    ErrorKind::CouponMissingStoreCouponFlag,
                    ErrorKind::NonDigitCharacter,
                )?;
                pos += 1;
                read_digit_in(
                    data,
                    pos,
                    &[0, 1],
                    ErrorKind::CouponMissingDontMultiplyFlag,
                    ErrorKind::CouponInvalidDontMultiplyFlag,
                )?;
                pos += 1;
            }
            _ => unreachable!("filtered to 1..=6|9 above"),
        }
    }

    Ok(())
}

/// Validates a modernised GCN coupon offer component (historically AI
/// 8112): Format Code, a `VLI`-prefixed Funder ID/GCP, a fixed 6-digit Offer
/// Code, and a `VLI`-prefixed Serial Number, with no trailing data.
pub fn couponposoffer(data: &[u8], ctx: &LintContext) -> LintResult {
    if data.is_empty() {
        return lint_err!(ErrorKind::CouponMissingFormatCode, 0, 0);
    }
    if data[0] != b'0' && data[0] != b'1' {
        return lint_err!(ErrorKind::CouponInvalidFormatCode, 0, 1);
    }
    let mut pos = 1;

    read_gcp_field(
        data,
        &mut pos,
        ctx,
        &[0, 1, 2, 3, 4, 5, 6],
        ErrorKind::CouponMissingFunderVli,
        ErrorKind::CouponInvalidFunderVli,
        ErrorKind::CouponTruncatedFunderId,
    )?;

    require_digits(data, pos, 6, ErrorKind::CouponTruncatedOfferCode)?;
    check_all_digits(data, pos, 6).map_err(|_| LintError::new(ErrorKind::CouponInvalidOfferCode, pos, 6))?;
    pos += 6;

    let serial_vli = read_digit(
        data,
        pos,
        ErrorKind::CouponMissingSerialNumberVli,
        ErrorKind::CouponInvalidSerialNumberVli,
    )?;
    pos += 1;
    let serial_len = serial_vli as usize + 6;
    require_digits(data, pos, serial_len, ErrorKind::CouponTruncatedSerialNumber)?;
    check_all_digits(data, pos, serial_len)?;
    pos += serial_len;

    if pos != data.len() {
        return lint_err!(ErrorKind::CouponExcessData, pos, data.len() - pos);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> LintContext<'static> {
        LintContext::none()
    }

    /// Mandatory-prefix-only coupon: GCP VLI(0)+GCP(6 digits), offer(6),
    /// save-value VLI(1)+value(1), requirement VLI(1)+value(1), requirement
    /// code(0), family code(3 digits). 21 bytes total, every field
    /// hand-checked against the mandatory-prefix field list. `couponcode`
    /// has no Format Code field at all — that belongs only to
    /// [`couponposoffer`].
    fn mandatory_prefix() -> Vec<u8> {
        b"012345612345611110123".to_vec()
    }

    #[test]
    fn couponcode_accepts_mandatory_prefix_alone() {
        let data = mandatory_prefix();
        assert_eq!(data.len(), 21);
        assert!(couponcode(&data, &ctx()).is_ok());
    }

    #[test]
    fn couponcode_rejects_bad_funder_vli() {
        let mut data = mandatory_prefix();
        data[0] = b'9'; // '9' is not in the allowed '0'..'6' funder VLI set
        assert_eq!(
            couponcode(&data, &ctx()).unwrap_err().kind,
            ErrorKind::CouponInvalidFunderVli
        );
    }

    #[test]
    fn couponcode_rejects_funder_id_through_gcppos1() {
        // Funder ID digits are fine structurally but too short once the
        // caller's GCP minimum grows past 6 -- here we instead check that a
        // non-digit Funder ID byte surfaces gcppos1's own error kind rather
        // than a bespoke "invalid funder id" kind.
        let mut data = mandatory_prefix();
        data[1] = b'x'; // first byte of the GCP field
        assert_eq!(
            couponcode(&data, &ctx()).unwrap_err().kind,
            ErrorKind::InvalidGcpPrefix
        );
    }

    #[test]
    fn couponcode_accepts_worked_example_with_block_one() {
        // Mandatory prefix followed by optional field 1 (additional
        // purchase rules + 2nd purchase).
        let data = b"012345612345611110123101101230123456";
        assert_eq!(data.len(), 36);
        assert!(couponcode(data, &ctx()).is_ok());
    }

    #[test]
    fn couponcode_accepts_additional_purchase_block_one() {
        let mut data = mandatory_prefix();
        // indicator 1, rules code 0, 2nd requirement VLI(1)+value(1),
        // 2nd requirement code(0), 2nd family code(123), 2nd GCP VLI(0)+GCP(6)
        data.extend_from_slice(b"101101230123456");
        assert!(couponcode(&data, &ctx()).is_ok());
    }

    #[test]
    fn couponcode_block_two_gcp_vli_nine_means_no_gcp() {
        let mut data = mandatory_prefix();
        // indicator 2 (3rd purchase), no rules code this time: requirement
        // VLI(1)+value(1), requirement code(0), family(123), GCP VLI 9 (no GCP)
        data.extend_from_slice(b"2110123" /* vli+val+code+family */);
        data.extend_from_slice(b"9");
        assert!(couponcode(&data, &ctx()).is_ok());
    }

    #[test]
    fn couponcode_accepts_serial_number_block() {
        let mut data = mandatory_prefix();
        data.extend_from_slice(b"50123456"); // indicator 5, vli 0, 6-digit serial
        assert!(couponcode(&data, &ctx()).is_ok());
    }

    #[test]
    fn couponcode_accepts_retailer_gcp_block() {
        let mut data = mandatory_prefix();
        data.extend_from_slice(b"611234567"); // indicator 6, vli 1, 7-digit GCP
        assert!(couponcode(&data, &ctx()).is_ok());
    }

    #[test]
    fn couponcode_accepts_misc_block_nine() {
        let mut data = mandatory_prefix();
        data.extend_from_slice(b"90151"); // save value code 0, applies 1, store 5, dont-multiply 1
        assert!(couponcode(&data, &ctx()).is_ok());
    }

    #[test]
    fn couponcode_rejects_out_of_order_indicators() {
        let mut data = mandatory_prefix();
        data.extend_from_slice(b"50123456"); // block 5
        data.extend_from_slice(b"101101230123456"); // block 1 after block 5: out of order
        assert_eq!(
            couponcode(&data, &ctx()).unwrap_err().kind,
            ErrorKind::CouponInvalidOptionalDataIndicator
        );
    }

    #[test]
    fn couponcode_checks_expiration_not_before_start() {
        let mut data = mandatory_prefix();
        let window_start = data.len();
        data.extend_from_slice(b"3210101"); // expiration: 2021-01-01
        data.extend_from_slice(b"4210601"); // start: 2021-06-01, after expiration
        let err = couponcode(&data, &ctx()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::CouponExpirationBeforeStart);
        assert_eq!((err.pos, err.len), (window_start, 14));
    }

    #[test]
    fn couponcode_accepts_start_on_or_before_expiration() {
        let mut data = mandatory_prefix();
        data.extend_from_slice(b"3210601"); // expiration: 2021-06-01
        data.extend_from_slice(b"4210101"); // start: 2021-01-01, before expiration
        assert!(couponcode(&data, &ctx()).is_ok());
    }

    #[test]
    fn couponcode_rejects_data_after_block_nine() {
        let mut data = mandatory_prefix();
        data.extend_from_slice(b"90151");
        data.extend_from_slice(b"x");
        assert_eq!(
            couponcode(&data, &ctx()).unwrap_err().kind,
            ErrorKind::CouponExcessData
        );
    }

    #[test]
    fn couponcode_rejects_trailing_garbage_with_no_optional_blocks_at_all() {
        // No optional block ever appeared, so there is no terminal "9"
        // indicator to special-case: a stray unrecognised byte right after
        // the mandatory prefix is still residual data, not a malformed
        // block indicator.
        let mut data = mandatory_prefix();
        let excess_start = data.len();
        data.extend_from_slice(b"x");
        let err = couponcode(&data, &ctx()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::CouponExcessData);
        assert_eq!((err.pos, err.len), (excess_start, 1));
    }

    #[test]
    fn couponcode_rejects_truncated_mandatory_field() {
        let data = b"00123456".to_vec(); // format + gcp vli + gcp, nothing else
        assert_eq!(
            couponcode(&data, &ctx()).unwrap_err().kind,
            ErrorKind::CouponTruncatedOfferCode
        );
    }

    #[test]
    fn couponposoffer_accepts_well_formed_input() {
        // format(0) funder vli(0)+funder(6) offer(6) serial vli(0)+serial(6)
        let data = b"0012345665432101234567";
        assert_eq!(data.len(), 23);
        assert!(couponposoffer(data, &ctx()).is_ok());
    }

    #[test]
    fn couponposoffer_accepts_format_code_one() {
        let data = b"1012345665432101234567";
        assert!(couponposoffer(data, &ctx()).is_ok());
    }

    #[test]
    fn couponposoffer_rejects_truncated_input() {
        assert_eq!(
            couponposoffer(b"00123", &ctx()).unwrap_err().kind,
            ErrorKind::CouponTruncatedFunderId
        );
    }

    #[test]
    fn couponposoffer_rejects_excess_trailing_data() {
        let mut data = b"0012345665432101234567".to_vec();
        data.push(b'9');
        assert_eq!(
            couponposoffer(&data, &ctx()).unwrap_err().kind,
            ErrorKind::CouponExcessData
        );
    }
}

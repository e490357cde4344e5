//! The error taxonomy and the `(kind, pos, len)` return protocol every linter
//! shares.
//!
//! See the crate-level documentation for the return-value contract: `Ok(())`
//! or `Err(LintError{kind, pos, len})` with `pos + len <= input.len()`.

use core::fmt;

/// A single reason a linter rejected its input.
///
/// This enumeration is **append-only**: new variants are added at the tail,
/// existing variants keep their discriminant forever, and a retired variant
/// is never repurposed for something else (its slot just stops being
/// produced). Do not reorder the groups below, even alphabetically — the
/// numeric identity is the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
#[repr(u16)]
pub enum ErrorKind {
    // -- generic character-set / digit errors (cset.rs, fixed.rs) --------
    NonDigitCharacter,
    InvalidCset82Character,
    InvalidCset39Character,
    InvalidCset32Character,
    InvalidCset64Character,
    InvalidCset64Padding,
    RequiresNonDigitCharacter,
    NotHyphen,
    ImporterIdxMustBeOneCharacter,
    InvalidImportIdxCharacter,

    // -- fixed-value linters (fixed.rs) -----------------------------------
    NotZero,
    IllegalZeroValue,
    IllegalZeroPrefix,
    NotZeroOrOne,
    InvalidWindingDirection,
    InvalidBiologicalSexCode,

    // -- checksum linters (checksum.rs) -----------------------------------
    TooShortForCheckDigit,
    IncorrectCheckDigit,
    TooShortForCheckPair,
    TooLongForCheckPairImplementation,
    IncorrectCheckPair,
    IbanTooShort,
    IbanTooLong,
    InvalidIbanCharacter,
    IllegalIbanCountryCode,
    IncorrectIbanChecksum,

    // -- GCP linters (gcp.rs) ----------------------------------------------
    TooShortForGcp,
    InvalidGcpPrefix,
    GcpDatasourceOffline,

    // -- code-list linters (codelist.rs) ------------------------------------
    NotIso3166,
    NotIso3166Or999,
    NotIso3166Alpha2,
    NotIso4217,
    InvalidMediaType,
    InvalidPackageType,

    // -- date/time linters (date.rs) -----------------------------------------
    DateTooShort,
    DateTooLong,
    IllegalMonth,
    IllegalDay,
    IllegalHour,
    IllegalMinute,
    IllegalSecond,
    HourTooShort,
    HourTooLong,
    MinuteTooShort,
    MinuteTooLong,
    SecondTooShort,
    SecondTooLong,
    HourWithMinuteTooShort,
    HourWithMinuteTooLong,
    PositionInSequenceMalformed,
    PositionExceedsEnd,
    InvalidLengthForPieceOfTotal,
    ZeroPieceNumber,
    ZeroTotalPieces,
    PieceNumberExceedsTotal,

    // -- percent-encoding (pcenc.rs) ------------------------------------------
    InvalidPercentSequence,

    // -- latitude / longitude (geo.rs) ----------------------------------------
    InvalidLatitude,
    InvalidLongitude,
    LatitudeInvalidLength,
    LongitudeInvalidLength,

    // -- coupon code, mandatory prefix fields (coupon.rs) ---------------------
    CouponMissingFormatCode,
    CouponInvalidFormatCode,
    CouponMissingFunderVli,
    CouponInvalidFunderVli,
    CouponTruncatedFunderId,
    CouponTruncatedOfferCode,
    CouponInvalidOfferCode,
    CouponMissingSaveValueVli,
    CouponInvalidSaveValueVli,
    CouponTruncatedSaveValue,
    CouponMissingPurchaseRequirementVli,
    CouponInvalidPurchaseRequirementVli,
    CouponTruncatedPurchaseRequirement,
    CouponMissingPurchaseRequirementCode,
    CouponInvalidPurchaseRequirementCode,
    CouponTruncatedFamilyCode,
    CouponInvalidFamilyCode,

    // -- coupon code, optional blocks 1/2 (additional purchases) -------------
    CouponMissingRulesCode,
    CouponInvalidRulesCode,
    CouponMissingAdditionalRequirementVli,
    CouponInvalidAdditionalRequirementVli,
    CouponTruncatedAdditionalRequirement,
    CouponMissingAdditionalRequirementCode,
    CouponInvalidAdditionalRequirementCode,
    CouponTruncatedAdditionalFamilyCode,
    CouponInvalidAdditionalFamilyCode,
    CouponMissingAdditionalGcpVli,
    CouponInvalidAdditionalGcpVli,
    CouponTruncatedAdditionalGcp,

    // -- coupon code, optional blocks 3/4 (dates) ----------------------------
    CouponTruncatedExpirationDate,
    CouponTruncatedStartDate,
    CouponExpirationBeforeStart,

    // -- coupon code, optional block 5 (serial number) -----------------------
    CouponMissingSerialNumberVli,
    CouponInvalidSerialNumberVli,
    CouponTruncatedSerialNumber,

    // -- coupon code, optional block 6 (retailer GCP/GLN) --------------------
    CouponMissingRetailerGcpVli,
    CouponInvalidRetailerGcpVli,
    CouponTruncatedRetailerGcp,

    // -- coupon code, optional block 9 (miscellaneous flags) -----------------
    CouponMissingSaveValueCode,
    CouponInvalidSaveValueCode,
    CouponMissingSaveValueAppliesToItem,
    CouponInvalidSaveValueAppliesToItem,
    CouponMissingStoreCouponFlag,
    CouponMissingDontMultiplyFlag,
    CouponInvalidDontMultiplyFlag,

    // -- coupon code, indicator / trailing-data handling ---------------------
    CouponInvalidOptionalDataIndicator,
    CouponExcessData,
}

impl ErrorKind {
    /// A short English description, suitable for a CLI or log line.
    ///
    /// Gated behind the `descriptions` feature: the table is a reference
    /// artifact, not required for correctness, and a caller who wants
    /// localized text should ignore it entirely.
    #[cfg(feature = "descriptions")]
    pub const fn description(self) -> &'static str {
        use ErrorKind::*;
        match self {
            NonDigitCharacter => "contains a non-digit character",
            InvalidCset82Character => "contains a character outside CSET 82",
            InvalidCset39Character => "contains a character outside CSET 39",
            InvalidCset32Character => "contains a character outside CSET 32",
            InvalidCset64Character => "contains a character outside CSET 64",
            InvalidCset64Padding => "has incorrect base64url padding",
            RequiresNonDigitCharacter => "must contain at least one non-digit character",
            NotHyphen => "must be a single hyphen character",
            ImporterIdxMustBeOneCharacter => "importer index must be exactly one character",
            InvalidImportIdxCharacter => "contains an invalid importer index character",
            NotZero => "must consist only of zero characters",
            IllegalZeroValue => "must not be all zeros",
            IllegalZeroPrefix => "must not have a leading zero",
            NotZeroOrOne => "must be '0' or '1'",
            InvalidWindingDirection => "is not a valid winding direction code",
            InvalidBiologicalSexCode => "is not a valid ISO 5218 biological sex code",
            TooShortForCheckDigit => "is too short to contain a check digit",
            IncorrectCheckDigit => "has an incorrect check digit",
            TooShortForCheckPair => "is too short to contain a check character pair",
            TooLongForCheckPairImplementation => {
                "exceeds this implementation's check character pair length limit"
            }
            IncorrectCheckPair => "has an incorrect check character pair",
            IbanTooShort => "is too short to be an IBAN",
            IbanTooLong => "is too long to be an IBAN",
            InvalidIbanCharacter => "contains a character not valid in an IBAN",
            IllegalIbanCountryCode => "does not start with a valid ISO 3166 alpha-2 country code",
            IncorrectIbanChecksum => "fails the IBAN mod-97 checksum",
            TooShortForGcp => "is too short to contain a GS1 Company Prefix",
            InvalidGcpPrefix => "does not start with a valid GS1 Company Prefix",
            GcpDatasourceOffline => "the GCP lookup service is temporarily unavailable",
            NotIso3166 => "is not a valid ISO 3166 numeric country or area code",
            NotIso3166Or999 => "is not a valid ISO 3166 numeric country/area code or 999",
            NotIso3166Alpha2 => "is not a valid ISO 3166 alpha-2 country code",
            NotIso4217 => "is not a valid ISO 4217 numeric currency code",
            InvalidMediaType => "is not a recognised AIDC media type code",
            InvalidPackageType => "is not a recognised GS1 PackageTypeCode",
            DateTooShort => "is too short to be a date",
            DateTooLong => "is too long to be a date",
            IllegalMonth => "month is out of range 01-12",
            IllegalDay => "day is out of range for the given month",
            IllegalHour => "hour is out of range 00-23",
            IllegalMinute => "minute is out of range 00-59",
            IllegalSecond => "second is out of range 00-59",
            HourTooShort => "hour component is too short",
            HourTooLong => "hour component is too long",
            MinuteTooShort => "minute component is too short",
            MinuteTooLong => "minute component is too long",
            SecondTooShort => "second component is too short",
            SecondTooLong => "second component is too long",
            HourWithMinuteTooShort => "hour+minute component is too short",
            HourWithMinuteTooLong => "hour+minute component is too long",
            PositionInSequenceMalformed => "is not a valid <pos>/<end> sequence",
            PositionExceedsEnd => "position exceeds the end of sequence",
            InvalidLengthForPieceOfTotal => "has an invalid length for a piece-of-total field",
            ZeroPieceNumber => "piece number must not be zero",
            ZeroTotalPieces => "total pieces must not be zero",
            PieceNumberExceedsTotal => "piece number exceeds total pieces",
            InvalidPercentSequence => "contains an invalid percent-encoded sequence",
            InvalidLatitude => "latitude value is out of range",
            InvalidLongitude => "longitude value is out of range",
            LatitudeInvalidLength => "latitude must be exactly 10 digits",
            LongitudeInvalidLength => "longitude must be exactly 10 digits",
            CouponMissingFormatCode => "coupon: missing Format Code",
            CouponInvalidFormatCode => "coupon: invalid Format Code",
            CouponMissingFunderVli => "coupon: missing Funder VLI",
            CouponInvalidFunderVli => "coupon: invalid Funder VLI",
            CouponTruncatedFunderId => "coupon: Funder ID truncated",
            CouponTruncatedOfferCode => "coupon: Offer Code truncated",
            CouponInvalidOfferCode => "coupon: invalid Offer Code",
            CouponMissingSaveValueVli => "coupon: missing Save Value VLI",
            CouponInvalidSaveValueVli => "coupon: invalid Save Value VLI",
            CouponTruncatedSaveValue => "coupon: Save Value truncated",
            CouponMissingPurchaseRequirementVli => "coupon: missing purchase requirement VLI",
            CouponInvalidPurchaseRequirementVli => "coupon: invalid purchase requirement VLI",
            CouponTruncatedPurchaseRequirement => "coupon: purchase requirement truncated",
            CouponMissingPurchaseRequirementCode => "coupon: missing purchase requirement code",
            CouponInvalidPurchaseRequirementCode => "coupon: invalid purchase requirement code",
            CouponTruncatedFamilyCode => "coupon: Family Code truncated",
            CouponInvalidFamilyCode => "coupon: invalid Family Code",
            CouponMissingRulesCode => "coupon: missing Additional Purchase Rules Code",
            CouponInvalidRulesCode => "coupon: invalid Additional Purchase Rules Code",
            CouponMissingAdditionalRequirementVli => "coupon: missing additional requirement VLI",
            CouponInvalidAdditionalRequirementVli => "coupon: invalid additional requirement VLI",
            CouponTruncatedAdditionalRequirement => "coupon: additional requirement truncated",
            CouponMissingAdditionalRequirementCode => {
                "coupon: missing additional requirement code"
            }
            CouponInvalidAdditionalRequirementCode => {
                "coupon: invalid additional requirement code"
            }
            CouponTruncatedAdditionalFamilyCode => "coupon: additional Family Code truncated",
            CouponInvalidAdditionalFamilyCode => "coupon: invalid additional Family Code",
            CouponMissingAdditionalGcpVli => "coupon: missing additional GCP VLI",
            CouponInvalidAdditionalGcpVli => "coupon: invalid additional GCP VLI",
            CouponTruncatedAdditionalGcp => "coupon: additional GCP truncated",
            CouponTruncatedExpirationDate => "coupon: Expiration Date truncated",
            CouponTruncatedStartDate => "coupon: Start Date truncated",
            CouponExpirationBeforeStart => "coupon: Expiration Date is before Start Date",
            CouponMissingSerialNumberVli => "coupon: missing Serial Number VLI",
            CouponInvalidSerialNumberVli => "coupon: invalid Serial Number VLI",
            CouponTruncatedSerialNumber => "coupon: Serial Number truncated",
            CouponMissingRetailerGcpVli => "coupon: missing Retailer GCP/GLN VLI",
            CouponInvalidRetailerGcpVli => "coupon: invalid Retailer GCP/GLN VLI",
            CouponTruncatedRetailerGcp => "coupon: Retailer GCP/GLN truncated",
            CouponMissingSaveValueCode => "coupon: missing Save Value Code",
            CouponInvalidSaveValueCode => "coupon: invalid Save Value Code",
            CouponMissingSaveValueAppliesToItem => "coupon: missing Save Value Applies-to-Item",
            CouponInvalidSaveValueAppliesToItem => "coupon: invalid Save Value Applies-to-Item",
            CouponMissingStoreCouponFlag => "coupon: missing Store Coupon Flag",
            CouponMissingDontMultiplyFlag => "coupon: missing Don't-Multiply Flag",
            CouponInvalidDontMultiplyFlag => "coupon: invalid Don't-Multiply Flag",
            CouponInvalidOptionalDataIndicator => {
                "coupon: optional field indicator out of order, repeated, or unrecognised"
            }
            CouponExcessData => "coupon: excess data after all recognised fields",
        }
    }
}

/// A failed lint, anchored to the byte range of the input that caused it.
///
/// `pos` is a byte offset into the linted input; `len` is the byte length of
/// the offending region. `pos + len <= input.len()` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LintError {
    pub kind: ErrorKind,
    pub pos: usize,
    pub len: usize,
}

impl LintError {
    /// Constructs a new error, anchored at `pos` for `len` bytes.
    pub const fn new(kind: ErrorKind, pos: usize, len: usize) -> Self {
        Self { kind, pos, len }
    }

    /// Re-anchors an inner linter's error into an outer input frame by
    /// adding `prefix_len` to `pos`.
    ///
    /// Composite linters (`hhmi`, `yymmdd`, `yymmd0`, `couponcode`, `iban`,
    /// `gcppos2`, ...) never invent new offsets; they only shift an inner
    /// offset by a known prefix length.
    pub const fn reanchored(self, prefix_len: usize) -> Self {
        Self {
            kind: self.kind,
            pos: self.pos + prefix_len,
            len: self.len,
        }
    }
}

impl fmt::Display for LintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[cfg(feature = "descriptions")]
        {
            write!(
                f,
                "{} (at byte {}, length {})",
                self.kind.description(),
                self.pos,
                self.len
            )
        }
        #[cfg(not(feature = "descriptions"))]
        {
            write!(
                f,
                "{:?} (at byte {}, length {})",
                self.kind, self.pos, self.len
            )
        }
    }
}

impl std::error::Error for LintError {}

/// The uniform result every linter returns: `Ok(())` on success, else a
/// single [`LintError`].
pub type LintResult = Result<(), LintError>;

/// Shorthand for building an `Err(LintError{..})` without repeating field
/// names at every call site.
macro_rules! lint_err {
    ($kind:expr, $pos:expr, $len:expr) => {
        Err($crate::error::LintError::new($kind, $pos, $len))
    };
}
pub(crate) use lint_err;

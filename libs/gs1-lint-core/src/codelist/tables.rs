//! Embedded sorted code-list tables.
//!
//! Each table is a byte-wise lexicographically ascending `&[&[u8]]`, suitable
//! for [`crate::bits::search_sorted`]; every table has a test asserting
//! [`crate::bits::is_strictly_sorted`] over it, the same discipline
//! [`crate::registry::REGISTRY`] holds itself to.

/// ISO 3166-1 numeric country and territory codes, zero-padded to 3 digits.
pub const ISO3166: &[&[u8]] = &[
    b"004", b"008", b"010", b"012", b"016", b"020", b"024", b"028", b"031", b"032",
    b"036", b"040", b"044", b"048", b"050", b"051", b"052", b"056", b"060", b"064",
    b"068", b"070", b"072", b"074", b"076", b"084", b"086", b"090", b"092", b"096",
    b"100", b"104", b"108", b"112", b"116", b"120", b"124", b"132", b"136", b"140",
    b"144", b"148", b"152", b"156", b"158", b"162", b"166", b"170", b"174", b"175",
    b"178", b"180", b"184", b"188", b"191", b"192", b"196", b"203", b"204", b"208",
    b"212", b"214", b"218", b"222", b"226", b"231", b"232", b"233", b"234", b"238",
    b"239", b"242", b"246", b"248", b"250", b"254", b"258", b"260", b"262", b"266",
    b"268", b"270", b"275", b"276", b"288", b"292", b"296", b"300", b"304", b"308",
    b"312", b"316", b"320", b"324", b"328", b"332", b"334", b"336", b"340", b"344",
    b"348", b"352", b"356", b"360", b"364", b"368", b"372", b"376", b"380", b"384",
    b"388", b"392", b"398", b"400", b"404", b"408", b"410", b"414", b"417", b"418",
    b"422", b"426", b"428", b"430", b"434", b"438", b"440", b"442", b"446", b"450",
    b"454", b"458", b"462", b"466", b"470", b"474", b"478", b"480", b"484", b"492",
    b"496", b"498", b"499", b"500", b"504", b"508", b"512", b"516", b"520", b"524",
    b"528", b"531", b"533", b"534", b"535", b"540", b"548", b"554", b"558", b"562",
    b"566", b"570", b"574", b"578", b"580", b"581", b"583", b"584", b"585", b"586",
    b"591", b"598", b"600", b"604", b"608", b"612", b"616", b"620", b"624", b"626",
    b"630", b"634", b"638", b"642", b"643", b"646", b"652", b"654", b"659", b"660",
    b"662", b"663", b"666", b"670", b"674", b"678", b"682", b"686", b"688", b"690",
    b"694", b"702", b"703", b"704", b"705", b"706", b"710", b"716", b"724", b"728",
    b"729", b"732", b"740", b"744", b"748", b"752", b"756", b"760", b"762", b"764",
    b"768", b"772", b"776", b"780", b"784", b"788", b"792", b"795", b"796", b"798",
    b"800", b"804", b"807", b"818", b"826", b"831", b"832", b"833", b"834", b"840",
    b"850", b"854", b"858", b"860", b"862", b"876", b"882", b"887", b"894",
];

/// ISO 3166-1 alpha-2 country and territory codes.
pub const ISO3166_ALPHA2: &[&[u8]] = &[
    b"AD", b"AE", b"AF", b"AG", b"AI", b"AL", b"AM", b"AO", b"AQ", b"AR", b"AS", b"AT",
    b"AU", b"AW", b"AX", b"AZ", b"BA", b"BB", b"BD", b"BE", b"BF", b"BG", b"BH", b"BI",
    b"BJ", b"BL", b"BM", b"BN", b"BO", b"BQ", b"BR", b"BS", b"BT", b"BV", b"BW", b"BY",
    b"BZ", b"CA", b"CC", b"CD", b"CF", b"CG", b"CH", b"CI", b"CK", b"CL", b"CM", b"CN",
    b"CO", b"CR", b"CU", b"CV", b"CW", b"CX", b"CY", b"CZ", b"DE", b"DJ", b"DK", b"DM",
    b"DO", b"DZ", b"EC", b"EE", b"EG", b"EH", b"ER", b"ES", b"ET", b"FI", b"FJ", b"FK",
    b"FM", b"FO", b"FR", b"GA", b"GB", b"GD", b"GE", b"GF", b"GG", b"GH", b"GI", b"GL",
    b"GM", b"GN", b"GP", b"GQ", b"GR", b"GS", b"GT", b"GU", b"GW", b"GY", b"HK", b"HM",
    b"HN", b"HR", b"HT", b"HU", b"ID", b"IE", b"IL", b"IM", b"IN", b"IO", b"IQ", b"IR",
    b"IS", b"IT", b"JE", b"JM", b"JO", b"JP", b"KE", b"KG", b"KH", b"KI", b"KM", b"KN",
    b"KP", b"KR", b"KW", b"KY", b"KZ", b"LA", b"LB", b"LC", b"LI", b"LK", b"LR", b"LS",
    b"LT", b"LU", b"LV", b"LY", b"MA", b"MC", b"MD", b"ME", b"MF", b"MG", b"MH", b"MK",
    b"ML", b"MM", b"MN", b"MO", b"MP", b"MQ", b"MR", b"MS", b"MT", b"MU", b"MV", b"MW",
    b"MX", b"MY", b"MZ", b"NA", b"NC", b"NE", b"NF", b"NG", b"NI", b"NL", b"NO", b"NP",
    b"NR", b"NU", b"NZ", b"OM", b"PA", b"PE", b"PF", b"PG", b"PH", b"PK", b"PL", b"PM",
    b"PN", b"PR", b"PS", b"PT", b"PW", b"PY", b"QA", b"RE", b"RO", b"RS", b"RU", b"RW",
    b"SA", b"SB", b"SC", b"SD", b"SE", b"SG", b"SH", b"SI", b"SJ", b"SK", b"SL", b"SM",
    b"SN", b"SO", b"SR", b"SS", b"ST", b"SV", b"SX", b"SY", b"SZ", b"TC", b"TD", b"TF",
    b"TG", b"TH", b"TJ", b"TK", b"TL", b"TM", b"TN", b"TO", b"TR", b"TT", b"TV", b"TW",
    b"TZ", b"UA", b"UG", b"UM", b"US", b"UY", b"UZ", b"VA", b"VC", b"VE", b"VG", b"VI",
    b"VN", b"VU", b"WF", b"WS", b"YE", b"YT", b"ZA", b"ZM", b"ZW",
];

/// ISO 4217 numeric currency codes, zero-padded to 3 digits.
pub const ISO4217: &[&[u8]] = &[
    b"008", b"012", b"032", b"036", b"044", b"048", b"050", b"051", b"052", b"060",
    b"064", b"068", b"072", b"084", b"090", b"096", b"104", b"108", b"116", b"124",
    b"132", b"136", b"144", b"152", b"156", b"170", b"174", b"188", b"191", b"192",
    b"203", b"208", b"214", b"222", b"230", b"232", b"238", b"242", b"262", b"270",
    b"292", b"320", b"324", b"328", b"332", b"340", b"344", b"348", b"352", b"356",
    b"360", b"364", b"368", b"376", b"388", b"392", b"398", b"400", b"404", b"408",
    b"410", b"414", b"417", b"418", b"422", b"426", b"430", b"434", b"446", b"454",
    b"458", b"462", b"480", b"484", b"496", b"498", b"504", b"512", b"516", b"524",
    b"532", b"533", b"548", b"554", b"558", b"566", b"578", b"586", b"590", b"598",
    b"600", b"604", b"608", b"634", b"643", b"646", b"654", b"682", b"690", b"702",
    b"704", b"706", b"710", b"728", b"748", b"752", b"756", b"760", b"764", b"776",
    b"780", b"784", b"788", b"800", b"807", b"818", b"826", b"834", b"840", b"858",
    b"860", b"882", b"886", b"901", b"925", b"926", b"927", b"928", b"929", b"930",
    b"931", b"932", b"933", b"934", b"936", b"938", b"940", b"941", b"943", b"944",
    b"946", b"947", b"948", b"949", b"950", b"951", b"952", b"953", b"955", b"956",
    b"957", b"958", b"959", b"960", b"961", b"962", b"963", b"964", b"965", b"967",
    b"968", b"969", b"970", b"971", b"972", b"973", b"975", b"976", b"977", b"978",
    b"979", b"980", b"981", b"984", b"985", b"986", b"990", b"994", b"997", b"999",
];

/// GS1 `PackageTypeCode` list, restricted to the UN/CEFACT Recommendation 21
/// transport-package codes most commonly seen in the field.
///
/// This is a **representative subset**, not the full published code list:
/// GS1 maintains several hundred package-type entries and this crate has no
/// verbatim copy of the current edition to embed. Callers that need the
/// authoritative list should wire [`crate::context::LintContext::package_type_lookup`]
/// rather than rely on this table alone.
pub const PACKAGE_TYPE: &[&[u8]] = &[
    b"AE", b"AM", b"BA", b"BG", b"BH", b"BX", b"CI", b"CS", b"CT", b"CU", b"DR", b"EN",
    b"IZ", b"JR", b"KG", b"MB", b"PA", b"PC", b"PF", b"PG", b"PJ", b"PK", b"PL", b"PU",
    b"PX", b"RL", b"RO", b"SA", b"SE", b"SK", b"TN", b"TU", b"TY", b"VG", b"VL", b"VO",
    b"VQ", b"VR", b"VS", b"VT", b"VY", b"WB", b"ZZ",
];

/// AIDC media type codes (used by AI 7010's component list), as single- and
/// double-digit numeric strings.
///
/// Like [`PACKAGE_TYPE`], this is a **representative subset** standing in
/// for the published GS1 Media Type Table; wire
/// [`crate::context::LintContext::media_type_lookup`] for authoritative
/// coverage.
pub const MEDIA_TYPE: &[&[u8]] = &[
    b"1", b"10", b"11", b"12", b"2", b"3", b"4", b"5", b"6", b"7", b"8", b"9",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::is_strictly_sorted;

    #[test]
    fn every_embedded_table_is_strictly_sorted() {
        assert!(is_strictly_sorted(ISO3166));
        assert!(is_strictly_sorted(ISO3166_ALPHA2));
        assert!(is_strictly_sorted(ISO4217));
        assert!(is_strictly_sorted(PACKAGE_TYPE));
        assert!(is_strictly_sorted(MEDIA_TYPE));
    }

    #[test]
    fn table_sizes_match_generation_counts() {
        assert_eq!(ISO3166.len(), 249);
        assert_eq!(ISO3166_ALPHA2.len(), 249);
        assert_eq!(ISO4217.len(), 180);
    }
}

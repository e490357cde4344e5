//! Name → linter registry: a statically sorted table of
//! `(name, Linter)` pairs with a binary-search lookup.
//!
//! Names are stable API: obsolete names stay in the table mapped
//! to their deprecation shim rather than being removed, and new names are
//! inserted in lexicographic position, never appended at the end (unlike
//! [`crate::error::ErrorKind`], whose *ordinal* identity must be append-only —
//! the registry's ordering constraint is about the table staying sorted, not
//! about any name's position being a stable identity).

use crate::checksum::{csum, csumalpha, iban};
use crate::codelist::{iso3166, iso3166999, iso3166alpha2, iso3166list, iso4217, mediatype, packagetype};
use crate::context::LintContext;
use crate::coupon::{couponcode, couponposoffer};
use crate::cset::{cset39, cset64, cset82, csetnumeric, hasnondigit, hyphen, importeridx};
use crate::date::{
    hh, hhmi, hhmm, mi, mmoptss, pieceoftotal, posinseqslash, ss, yymmd0, yymmdd, yymmddhh,
    yyyymmd0, yyyymmdd,
};
use crate::fixed::{iso5218, nonzero, nozeroprefix, winding, yesno, zero};
use crate::gcp::{gcppos1, gcppos2, key, keyoff1};
use crate::geo::{latitude, latlong, longitude};
use crate::pcenc::pcenc;
use crate::Linter;

/// The name → linter table, sorted ascending by name under byte-wise
/// comparison. Covered by a test asserting sortedness, the same discipline
/// [`crate::codelist::tables`] holds its own tables to.
pub const REGISTRY: &[(&str, Linter)] = &[
    ("couponcode", couponcode),
    ("couponposoffer", couponposoffer),
    ("cset39", cset39),
    ("cset64", cset64),
    ("cset82", cset82),
    ("csetnumeric", csetnumeric),
    ("csum", csum),
    ("csumalpha", csumalpha),
    ("gcppos1", gcppos1),
    ("gcppos2", gcppos2),
    ("hasnondigit", hasnondigit),
    ("hh", hh),
    ("hhmi", hhmi),
    ("hhmm", hhmm),
    ("hyphen", hyphen),
    ("iban", iban),
    ("importeridx", importeridx),
    ("iso3166", iso3166),
    ("iso3166999", iso3166999),
    ("iso3166alpha2", iso3166alpha2),
    ("iso3166list", iso3166list),
    ("iso4217", iso4217),
    ("iso5218", iso5218),
    ("key", key),
    ("keyoff1", keyoff1),
    ("latitude", latitude),
    ("latlong", latlong),
    ("longitude", longitude),
    ("mediatype", mediatype),
    ("mi", mi),
    ("mmoptss", mmoptss),
    ("nonzero", nonzero),
    ("nozeroprefix", nozeroprefix),
    ("packagetype", packagetype),
    ("pcenc", pcenc),
    ("pieceoftotal", pieceoftotal),
    ("posinseqslash", posinseqslash),
    ("ss", ss),
    ("winding", winding),
    ("yesno", yesno),
    ("yymmd0", yymmd0),
    ("yymmdd", yymmdd),
    ("yymmddhh", yymmddhh),
    ("yyyymmd0", yyyymmd0),
    ("yyyymmdd", yyyymmdd),
    ("zero", zero),
];

/// Looks up a linter by its registry name.
///
/// `O(log n)` binary search over [`REGISTRY`]; returns
/// `None` for a name not present rather than panicking — an unrecognised
/// component name is a caller/Syntax-Dictionary-level concern, not a linter
/// failure.
///
/// ```
/// use gs1_lint_core::{registry::linter_from_name, LintContext};
/// let lint = linter_from_name("csum").expect("csum is a registered linter");
/// assert!(lint(b"0614141", &LintContext::none()).is_ok());
/// assert!(linter_from_name("not-a-real-linter").is_none());
/// ```
pub fn linter_from_name(name: &str) -> Option<Linter> {
    REGISTRY
        .binary_search_by(|(candidate, _)| (*candidate).cmp(name))
        .ok()
        .map(|i| REGISTRY[i].1)
}

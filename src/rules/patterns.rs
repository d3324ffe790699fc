//! Pattern library.
//!
//! All patterns are case-insensitive and compiled once on first use.
//!
//! Size tiers share one grammar:
//!
//! ```text
//! number := [0-9]+(\.[0-9]+)?
//! unit   := cm | mm
//! sep    := x | by | to | and | &
//!
//! tier 3 := number unit? sep? number unit? sep? number unit
//! tier 2 := number unit? sep? number unit
//! tier 1 := number unit
//! ```
//!
//! The tiers are kept as separate regexes so the size finder can prefer the
//! longest tier explicitly (see `size.rs`) instead of leaning on alternation
//! order inside one combined pattern.

use regex::Regex;

/// Name of the capture group holding the grade numeral.
pub(crate) const GRADE_GROUP: &str = "grade";

/// Optional "nuclear"/"tumor" qualifier, "grade", numeral 1..=10.
///
/// `10` is listed first so it is not read as `1`. The regex crate has no
/// lookahead, so the "no digit follows the numeral" boundary is checked by the
/// grade finder against the haystack.
pub(crate) fn grade() -> &'static Regex {
    regex!(r"(?i)(?:(?:nuclear|tumor)\s*)?grade\s*(?P<grade>10|[1-9])")
}

/// Three-part measurement, `L x W x H cm`.
pub(crate) fn size_three_part() -> &'static Regex {
    regex!(
        r"(?xi)
        \b [0-9]+(?:\.[0-9]+)? \s* (?:cm|mm)? \s* (?:x|by|to|and|&)?
        \s* [0-9]+(?:\.[0-9]+)? \s* (?:cm|mm)? \s* (?:x|by|to|and|&)?
        \s* [0-9]+(?:\.[0-9]+)? \s* (?:cm|mm) \b"
    )
}

/// Two-part measurement, `L x W cm`.
pub(crate) fn size_two_part() -> &'static Regex {
    regex!(r"(?i)\b[0-9]+(?:\.[0-9]+)?\s*(?:cm|mm)?\s*(?:x|by|to|and|&)?\s*[0-9]+(?:\.[0-9]+)?\s*(?:cm|mm)\b")
}

/// Single measurement, `L cm`.
pub(crate) fn size_one_part() -> &'static Regex {
    regex!(r"(?i)\b[0-9]+(?:\.[0-9]+)?\s*(?:cm|mm)\b")
}

/// Size tiers, most specific first.
pub(crate) fn size_tiers() -> [&'static Regex; 3] {
    [size_three_part(), size_two_part(), size_one_part()]
}

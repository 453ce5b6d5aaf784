//! Package information of fake-useragent.
//!
//! The package version is defined exactly once, taken from the
//! workspace manifest. It is exposed under two names, [`VERSION`]
//! and [`version`], which both resolve to that single value.
//! Definition-time assertions make a diverging or malformed version
//! a build failure rather than something callers have to check.

use static_assertions::const_assert;

/// Name of the package.
pub const NAME: &str = "fake-useragent";

// the single definition all public version bindings resolve to
const VERSION_VALUE: &str = env!("CARGO_PKG_VERSION");

/// Version of the package, e.g. `0.1.6`.
pub const VERSION: &str = VERSION_VALUE;

/// Version of the package, e.g. `0.1.6`.
///
/// Canonical accessor, always equal to [`VERSION`].
#[must_use]
pub const fn version() -> &'static str {
    VERSION_VALUE
}

const_assert!(const_str_eq(VERSION, version()));
const_assert!(is_dotted_numeric_prefix(VERSION));

/// Returns `true` if `s` starts with a `major.minor` or
/// `major.minor.patch` numeric version, as in `^\d+\.\d+(\.\d+)?`.
///
/// Anything after the numeric prefix (e.g. `-rc1`) is ignored.
#[must_use]
pub const fn is_dotted_numeric_prefix(s: &str) -> bool {
    let b = s.as_bytes();
    let mut i = 0;

    let mut components = 0;
    while components < 2 {
        if components > 0 {
            if i >= b.len() || b[i] != b'.' {
                return false;
            }
            i += 1;
        }
        let start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == start {
            return false;
        }
        components += 1;
    }

    true
}

const fn const_str_eq(lhs: &str, rhs: &str) -> bool {
    let (lhs, rhs) = (lhs.as_bytes(), rhs.as_bytes());
    if lhs.len() != rhs.len() {
        return false;
    }
    let mut i = 0;
    while i < lhs.len() {
        if lhs[i] != rhs[i] {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_version_value() {
        assert_eq!(VERSION, "0.1.6");
        assert_eq!(version(), "0.1.6");
        assert_eq!(NAME, "fake-useragent");
    }

    #[test]
    fn test_version_aliases_share_one_value() {
        for _ in 0..3 {
            assert_eq!(VERSION, version());
        }
    }

    #[test]
    fn test_is_dotted_numeric_prefix() {
        for valid in ["0.1", "0.1.6", "10.20.30", "1.2.3-rc1", "1.2.3.4", "1.2a"] {
            assert!(is_dotted_numeric_prefix(valid), "{valid}");
        }
        for invalid in ["", "1", "1.", ".1", "v1.2", "a.b", "1..2"] {
            assert!(!is_dotted_numeric_prefix(invalid), "{invalid}");
        }
    }

    #[test]
    fn test_const_str_eq() {
        assert!(const_str_eq("0.1.6", "0.1.6"));
        assert!(!const_str_eq("0.1.6", "0.1.7"));
        assert!(!const_str_eq("0.1.6", "0.1"));
    }

    quickcheck! {
        fn numeric_versions_are_accepted(major: u16, minor: u16, patch: Option<u16>) -> bool {
            let v = match patch {
                Some(patch) => format!("{major}.{minor}.{patch}"),
                None => format!("{major}.{minor}"),
            };
            is_dotted_numeric_prefix(&v)
        }
    }
}

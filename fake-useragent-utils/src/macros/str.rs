#[derive(Debug)]
pub struct EqIgnoreAsciiCase<T1, T2>(pub T1, pub T2);

#[must_use]
pub const fn eq_ignore_ascii_case(lhs: &[u8], rhs: &[u8]) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }
    let mut i = 0;
    while i < lhs.len() {
        if lhs[i].to_ascii_lowercase() != rhs[i].to_ascii_lowercase() {
            return false;
        }
        i += 1;
    }
    true
}

impl EqIgnoreAsciiCase<&str, &str> {
    #[must_use]
    pub const fn const_eval(&self) -> bool {
        eq_ignore_ascii_case(self.0.as_bytes(), self.1.as_bytes())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! __eq_ignore_ascii_case {
    ($lhs:expr, $rhs:expr) => {
        $crate::macros::str::EqIgnoreAsciiCase($lhs, $rhs).const_eval()
    };
}
#[doc(inline)]
pub use crate::__eq_ignore_ascii_case as eq_ignore_ascii_case;

#[doc(hidden)]
#[macro_export]
/// Match a `&str` against string literals, ignoring ASCII case.
///
/// Each arm may list alternatives separated by `|`,
/// the final arm has to be the `_` fallback.
macro_rules! __match_ignore_ascii_case_str {
    (match ($s:expr) {
        $( $first:literal $(| $alt:literal)* => $arm:expr, )+
        _ => $fallback:expr $(,)?
    }) => {{
        let s: &str = $s;
        $(
            if $crate::macros::str::eq_ignore_ascii_case!(s, $first)
                $( || $crate::macros::str::eq_ignore_ascii_case!(s, $alt) )*
            {
                $arm
            } else
        )+
        {
            $fallback
        }
    }};
}
#[doc(inline)]
pub use crate::__match_ignore_ascii_case_str as match_ignore_ascii_case_str;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_ignore_ascii_case() {
        assert!(eq_ignore_ascii_case!("Chrome", "chrome"));
        assert!(eq_ignore_ascii_case!("FIREFOX", "firefox"));
        assert!(!eq_ignore_ascii_case!("chrome", "chromium"));
        assert!(!eq_ignore_ascii_case!("", "a"));
    }

    #[test]
    fn test_match_ignore_ascii_case_str() {
        fn label(s: &str) -> Option<u8> {
            match_ignore_ascii_case_str! {
                match (s) {
                    "chrome" | "google-chrome" => Some(1),
                    "firefox" => Some(2),
                    _ => None,
                }
            }
        }

        assert_eq!(label("CHROME"), Some(1));
        assert_eq!(label("Google-Chrome"), Some(1));
        assert_eq!(label("firefox"), Some(2));
        assert_eq!(label("safari"), None);
    }
}

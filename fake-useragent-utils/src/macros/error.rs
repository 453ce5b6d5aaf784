#[doc(hidden)]
#[macro_export]
/// Define a unit error type which displays a static message.
macro_rules! __static_str_error {
    (
        #[doc = $desc:literal]
        $vis:vis struct $name:ident;
    ) => {
        #[doc = $desc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[non_exhaustive]
        $vis struct $name;

        impl $name {
            #[doc = concat!("Create a new [`", stringify!($name), "`].")]
            #[must_use]
            pub const fn new() -> Self {
                Self
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($desc.trim())
            }
        }

        impl ::std::error::Error for $name {}
    };
}
#[doc(inline)]
pub use crate::__static_str_error as static_str_error;

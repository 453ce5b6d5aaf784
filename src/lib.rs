//! Random browser user-agent strings.
//!
//! `fake-useragent` hands out user-agent strings picked at random
//! from a fixed pool, either for a specific browser family
//! or from the pool as a whole.
//!
//! ```
//! use fake_useragent::UserAgent;
//!
//! let ua = UserAgent::new();
//! assert!(ua.chrome().contains("Chrome"));
//! assert!(ua.firefox().contains("Firefox"));
//! assert!(!ua.random().is_empty());
//! ```
//!
//! The package version is available as [`VERSION`] and [`version()`],
//! which always resolve to the same value:
//!
//! ```
//! assert_eq!(fake_useragent::VERSION, fake_useragent::version());
//! ```
//!
//! # Crates
//!
//! - [`fake_useragent_ua`], re-exported as [`ua`]: categories, tables and pools;
//! - [`fake_useragent_utils`], re-exported as [`utils`]: package info and collections.
//!
//! # Public API
//!
//! [`EXPORTS`] lists the names that make up the top-level API of this crate,
//! each of which can be looked up using [`resolve`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[doc(inline)]
pub use fake_useragent_ua as ua;

#[doc(inline)]
pub use fake_useragent_utils as utils;

#[doc(inline)]
pub use ua::{AgentTable, Category, InvalidAgentTable, UnknownCategory, UserAgent, UserAgentPool};

#[doc(inline)]
pub use utils::info::{VERSION, version};

/// Names of the top-level public API of this crate.
pub const EXPORTS: [&str; 3] = ["UserAgent", "VERSION", "version"];

/// An item of the top-level public API, as found by [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Export {
    /// A public type.
    Type {
        /// The name as listed in [`EXPORTS`].
        name: &'static str,
        /// The fully qualified name of the type.
        type_name: &'static str,
    },
    /// A binding of the package version.
    Version {
        /// The name as listed in [`EXPORTS`].
        name: &'static str,
        /// The version it resolves to.
        value: &'static str,
    },
}

impl Export {
    /// The name of this item, as listed in [`EXPORTS`].
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Type { name, .. } | Self::Version { name, .. } => *name,
        }
    }
}

/// Look up a name of the top-level public API.
///
/// Returns `None` for names not listed in [`EXPORTS`].
#[must_use]
pub fn resolve(name: &str) -> Option<Export> {
    match name {
        "UserAgent" => Some(Export::Type {
            name: "UserAgent",
            type_name: std::any::type_name::<UserAgent>(),
        }),
        "VERSION" => Some(Export::Version {
            name: "VERSION",
            value: VERSION,
        }),
        "version" => Some(Export::Version {
            name: "version",
            value: version(),
        }),
        _ => None,
    }
}

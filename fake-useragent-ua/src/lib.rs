//! User Agent (UA) pools.
//!
//! This crate provides a fixed pool of user-agent strings,
//! grouped per browser [`Category`], to randomly select from.
//!
//! - [`AgentTable`]: the user-agent strings, grouped per [`Category`];
//! - [`UserAgentPool`]: selects strings from an [`AgentTable`],
//!   either for a specific [`Category`] or from the pool as a whole;
//! - [`UserAgent`]: chrome, firefox and random accessors,
//!   backed by the builtin pool or a custom one.
//!
//! Selecting from the whole pool is uniform over all strings,
//! not over the categories first. A pool with two chrome strings and
//! one firefox string returns the firefox string one third of the time.
//!
//! ```
//! use fake_useragent_ua::{AgentTable, Category, UserAgentPool};
//!
//! let pool: UserAgentPool = AgentTable::new(Category::Chrome, ["A Chrome/1", "B Chrome/2"])?
//!     .with_agents(Category::Firefox, ["C Firefox/3"])?
//!     .into();
//!
//! assert!(pool.get(Category::Chrome)?.contains("Chrome"));
//! assert!(pool.get(Category::Safari).is_err());
//! assert_eq!(pool.len(), 3);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! # Fake User Agent
//!
//! Crate used by the end-user `fake-useragent` crate.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod error;
pub use error::{InvalidAgentTable, UnknownCategory};

mod category;
pub use category::Category;

mod table;
pub use table::AgentTable;

mod pool;
pub use pool::UserAgentPool;

mod agent;
pub use agent::UserAgent;

pub mod builtin;

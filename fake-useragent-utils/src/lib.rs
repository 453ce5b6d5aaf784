//! utilities crate for fake-useragent
//!
//! `fake-useragent-utils` contains the package information
//! and small building blocks shared by the other crates of
//! the workspace, such as the [`NonEmptyVec`] collection.
//!
//! Crate used by the end-user `fake-useragent` crate and
//! the `fake-useragent-ua` crate alike.
//!
//! [`NonEmptyVec`]: collections::NonEmptyVec

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[doc(hidden)]
#[macro_use]
pub mod macros;

pub mod collections;
pub mod info;

//! `ptools` is a semi-modular toolkit of fast and reliable libraries for
//! periodic table reference data
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use ptools_utils as utils;

#[cfg(feature = "elements")]
#[cfg_attr(docsrs, doc(cfg(feature = "elements")))]
#[doc(inline)]
pub use ptools_elements as elements;

//! Supplementary operations for the standard library's B-Tree collections.
//!
//! [`BTreeMap`] ships with a deliberately minimal interface: construction,
//! insertion, lookup, removal, iteration. This crate supplements it with the
//! helpers that minimal interface leaves out: grouping a sequence into
//! buckets, keying a sequence by an extracted field, filtered removal and
//! retention, key transformation, filter-and-map over values, key/value
//! inversion, and linear search by predicate.
//!
//! Operations that produce a modified map take their input by value and
//! return a fresh map, so a caller holding a clone of the input never
//! observes mutation. Read-only operations borrow. Every operation is total:
//! absence is expressed with [`Option`], never with a panic.
//!
//! # Examples
//!
//! ```
//! use btree_extras::{group_by, BTreeMapExt};
//!
//! let by_length = group_by(["tree", "apple", "leaf"], |s| s.len());
//! assert_eq!(by_length[&4], ["tree", "leaf"]);
//! assert_eq!(by_length[&5], ["apple"]);
//!
//! let first_long = by_length.find(|&len, _| len > 4);
//! assert_eq!(first_long, Some((&5, &vec!["apple"])));
//! ```
//!
//! [`BTreeMap`]: alloc::collections::BTreeMap

#![cfg_attr(not(any(feature = "std", test)), no_std)]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
// linting controls
#![warn(missing_docs)]
#![warn(unsafe_code)]

extern crate alloc;

pub mod map;

pub use map::{from_iter_by, frequencies, group_by, BTreeMapExt};

//! Rule matching and resolution engine.
//!
//! This module is the entry point for turning a populated [`Registry`] and a
//! [`PackageDescriptor`] into a [`Resolution`]. The submodules keep the two
//! concerns separate so the ranking policy can change without touching the
//! selection algorithm:
//!
//! ```text
//! registry.all() ─┬─ scope filter (identifier or `*`)
//!                 │
//!                 ├─ partition by body (store / support / other / include)
//!                 │        resolve.rs
//!                 v
//!          RankKey ordering  (compare.rs: scope > payload > recency)
//!                 │
//!                 v
//!            Resolution (borrowed aggregate)
//! ```
//!
//! - `compare.rs`: the total, stable order over `(instruction, insertion
//!   index)` pairs, exposed as a sortable key type plus a three-way
//!   [`compare`] function.
//! - `resolve.rs`: the pure query that filters, partitions, ranks and
//!   assembles the aggregate. It never mutates the registry and never fails;
//!   an all-empty aggregate is a legal result.
//!
//! [`Registry`]: crate::Registry
//! [`PackageDescriptor`]: crate::PackageDescriptor

#[path = "engine/compare.rs"]
mod compare;
#[path = "engine/resolve.rs"]
mod resolve;

pub use compare::{RankKey, compare};
pub use resolve::{Resolution, resolve};

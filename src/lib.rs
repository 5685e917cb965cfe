//! supportkit — instruction resolution for per-package support reports.
//!
//! Installed packages declare, in line-based configuration, how users should
//! contact their authors and what diagnostic material to attach to a report.
//! This crate parses those rules and resolves them into one consolidated
//! aggregate per package:
//!
//! ```text
//! config lines ── tokenize ── Instruction ── Registry (accumulate)
//!                                                │
//!                 PackageDescriptor ──────── resolve ── Resolution
//! ```
//!
//! ```
//! use supportkit::{PackageDescriptor, Registry, resolve, scan_str};
//!
//! let mut registry = Registry::new();
//! scan_str(&mut registry, "\
//! * support mailto:default@example.com
//! com.example.app support mailto:app@example.com
//! com.example.app include crash-log /var/log/app.crash
//! ");
//!
//! let package = PackageDescriptor { identifier: "com.example.app".into(), ..Default::default() };
//! let resolution = resolve(&registry, &package);
//! assert_eq!(resolution.support_link.unwrap().as_link().unwrap().1, "mailto:app@example.com");
//! assert_eq!(resolution.support_attachments.len(), 1);
//! ```
//!
//! Rendering links, gathering attachment content and composing the outbound
//! report are the embedding application's job; the engine performs no I/O.

mod api;
mod engine;
mod error;
mod instruction;
mod package;
mod registry;
mod tokenizer;

pub use api::{COMMENT_MARKER, ScanReport, SkippedLine, scan_lines, scan_str};
pub use engine::{RankKey, Resolution, compare, resolve};
pub use error::ParseError;
pub use instruction::{AttachmentKind, Body, Instruction, LinkKind, WILDCARD_SCOPE};
pub use package::PackageDescriptor;
pub use registry::Registry;
pub use tokenizer::tokenize;

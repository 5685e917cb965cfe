//! Package resolution.
//!
//! `resolve` is the engine's only query: given a populated registry and one
//! package descriptor, assemble the consolidated aggregate a report is built
//! from. It reads the registry and borrows matching entries into the
//! aggregate; nothing is copied and nothing is mutated.
//!
//! Absence is not an error. A package with no matching rules resolves to an
//! all-empty aggregate and the caller falls back to its own defaults.

use tracing::debug;

use super::compare::RankKey;
use crate::{Body, Instruction, LinkKind, PackageDescriptor, Registry};

/// Resolved per-package aggregate.
///
/// Holds references into the registry's entries; each field only ever
/// contains the instruction variant its name implies (`store_link` is a
/// `store` link, `support_attachments` are includes, and so on).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution<'r> {
    /// Highest-ranked `store` link, if any rule matched.
    pub store_link: Option<&'r Instruction>,
    /// Highest-ranked `support` link, if any rule matched.
    pub support_link: Option<&'r Instruction>,
    /// All matching `link` directives, best-ranked first.
    pub other_links: Vec<&'r Instruction>,
    /// All matching `include` directives, best-ranked first. Duplicates are
    /// preserved; de-duplication is a presentation-layer concern.
    pub support_attachments: Vec<&'r Instruction>,
}

impl Resolution<'_> {
    /// True when no rule matched the package at all.
    pub fn is_empty(&self) -> bool {
        self.store_link.is_none()
            && self.support_link.is_none()
            && self.other_links.is_empty()
            && self.support_attachments.is_empty()
    }
}

/// Resolve `package` against `registry`.
///
/// Filters entries whose scope is the package's identifier or the wildcard,
/// partitions them by body, ranks each group (see `compare.rs`) and picks
/// the single best `store`/`support` link while keeping every other link and
/// attachment in rank order.
pub fn resolve<'r>(registry: &'r Registry, package: &PackageDescriptor) -> Resolution<'r> {
    let mut store: Vec<(RankKey, &Instruction)> = Vec::new();
    let mut support: Vec<(RankKey, &Instruction)> = Vec::new();
    let mut other: Vec<(RankKey, &Instruction)> = Vec::new();
    let mut attachments: Vec<(RankKey, &Instruction)> = Vec::new();

    for (index, instruction) in registry.all().iter().enumerate() {
        if !instruction.is_wildcard() && instruction.scope() != package.identifier {
            continue;
        }

        let entry = (RankKey::new(instruction, index), instruction);
        match instruction.body() {
            Body::Link { kind: LinkKind::Store, .. } => store.push(entry),
            Body::Link { kind: LinkKind::Support, .. } => support.push(entry),
            Body::Link { kind: LinkKind::Other, .. } => other.push(entry),
            Body::Include { .. } => attachments.push(entry),
        }
    }

    // Best-ranked first. Keys embed the insertion index, so the order is
    // strict and the sort outcome unique.
    for group in [&mut store, &mut support, &mut other, &mut attachments] {
        group.sort_by(|a, b| b.0.cmp(&a.0));
    }

    debug!(
        package = %package.identifier,
        store = store.len(),
        support = support.len(),
        other = other.len(),
        attachments = attachments.len(),
        "resolved instruction matches"
    );

    Resolution {
        store_link: store.first().map(|(_, i)| *i),
        support_link: support.first().map(|(_, i)| *i),
        other_links: other.into_iter().map(|(_, i)| i).collect(),
        support_attachments: attachments.into_iter().map(|(_, i)| i).collect(),
    }
}

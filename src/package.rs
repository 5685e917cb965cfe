//! Package descriptor.
//!
//! Read-only identity snapshot of one installed package, produced by an
//! external package inspector from on-disk metadata and consumed by the
//! resolver. The engine never reads the filesystem itself; it only compares
//! `identifier` against instruction scopes.

/// Identity/metadata snapshot of one installed package.
///
/// Plain data; created once per resolution request and discarded after use.
/// The engine imposes no caching contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageDescriptor {
    /// Unique package identifier; matched against instruction scopes.
    pub identifier: String,
    /// Identifier of the package in its store, when different.
    pub store_identifier: String,
    pub name: String,
    pub author: String,
    pub version: String,
    /// Whether the package was installed from an app store.
    pub is_app_store: bool,
}

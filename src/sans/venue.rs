//! Resolution of venue hashes to names.

use alloc::collections::BTreeMap;

use thiserror::Error;

/// A venue hash with no entry in the supplied table.
///
/// This does not invalidate the remainder of a header, and is returned
/// alongside the decoded replay.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
#[error("Unknown venue hash ({0:#010x}).")]
pub struct UnknownVenue(pub u32);

/// A table of venue names, keyed by hash.
pub trait Venues {
    /// Retrieve the name for a venue hash, if one exists.
    fn venue(&self, hash: u32) -> Option<&str>;
}

impl<V: Venues + ?Sized> Venues for &V {
    fn venue(&self, hash: u32) -> Option<&str> {
        (**self).venue(hash)
    }
}

impl<S: AsRef<str>> Venues for [(u32, S)] {
    fn venue(&self, hash: u32) -> Option<&str> {
        self.iter().find(|(h, _)| *h == hash).map(|(_, s)| s.as_ref())
    }
}

impl<S: AsRef<str>, const N: usize> Venues for [(u32, S); N] {
    fn venue(&self, hash: u32) -> Option<&str> {
        self.as_slice().venue(hash)
    }
}

impl<S: AsRef<str>> Venues for BTreeMap<u32, S> {
    fn venue(&self, hash: u32) -> Option<&str> {
        self.get(&hash).map(AsRef::as_ref)
    }
}

#[cfg(feature = "std")]
impl<S: AsRef<str>, H: core::hash::BuildHasher> Venues for std::collections::HashMap<u32, S, H> {
    fn venue(&self, hash: u32) -> Option<&str> {
        self.get(&hash).map(AsRef::as_ref)
    }
}

/// Resolve a venue hash against a table.
pub fn resolve(venues: &(impl Venues + ?Sized), hash: u32) -> Result<&str, UnknownVenue> {
    venues.venue(hash).ok_or(UnknownVenue(hash))
}

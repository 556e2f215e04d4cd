//! Splits a party/expedition list into internal and external partitions.
//!
//! The classifier is a single left-to-right pass.  Each record lands in at
//! most one partition and receives a dense, 1-based display index within it.
//! Records with an unrecognized type discriminator are dropped from both
//! partitions with a warning; they are not an error.

use crate::model::{PartyKind, PartyRecord};

/// The two partitions of a party list, with per-partition display indices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partitioned<'a> {
    pub internal: Vec<(usize, &'a PartyRecord)>,
    pub external: Vec<(usize, &'a PartyRecord)>,
}

impl<'a> Partitioned<'a> {
    /// Total number of classified records.
    pub fn len(&self) -> usize {
        self.internal.len() + self.external.len()
    }

    /// Whether both partitions are empty.
    pub fn is_empty(&self) -> bool {
        self.internal.is_empty() && self.external.is_empty()
    }
}

/// Classifies `records` into internal and external partitions.
///
/// Display indices are assigned at append time as one plus the current
/// partition length, so they are contiguous within each partition regardless
/// of the record's position in the source list.
pub fn classify(records: &[PartyRecord]) -> Partitioned<'_> {
    let mut partitioned = Partitioned::default();
    for record in records {
        match record.kind {
            PartyKind::Internal => {
                let index = partitioned.internal.len() + 1;
                partitioned.internal.push((index, record));
            }
            PartyKind::External => {
                let index = partitioned.external.len() + 1;
                partitioned.external.push((index, record));
            }
            PartyKind::Unrecognized(code) => {
                log::warn!(
                    "dropping party record `{}`: unrecognized type code {}",
                    record.name,
                    code
                );
            }
        }
    }
    partitioned
}

/// Returns all recognized records in source order with dense 1..N numbering.
///
/// Used by report kinds that render a single combined party table instead of
/// separate internal/external tables.  The drop policy for unrecognized
/// discriminators is the same as in [`classify`].
pub fn combined(records: &[PartyRecord]) -> Vec<(usize, &PartyRecord)> {
    let mut entries = Vec::new();
    for record in records {
        match record.kind {
            PartyKind::Internal | PartyKind::External => {
                entries.push((entries.len() + 1, record));
            }
            PartyKind::Unrecognized(code) => {
                log::warn!(
                    "dropping party record `{}`: unrecognized type code {}",
                    record.name,
                    code
                );
            }
        }
    }
    entries
}

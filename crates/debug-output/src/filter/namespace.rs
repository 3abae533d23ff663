use rustc_hash::FxHashMap;

use crate::enums::{Classification, Severity};
use crate::gl::GLuint;

/// Filter state recorded for one message ID.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterEntry {
    /// Current pass/block decision.
    pub enabled: bool,
    /// Whether the ID has been observed with a severity and filed in a bucket.
    pub known: bool,
}

/// Per-ID filter table for one `(level, source, type)` triple.
///
/// ID 0 has a dedicated slot. Each ID observed by [`decide`](Self::decide)
/// is filed exactly once into the bucket of the severity it was first seen
/// with; bulk control walks only that bucket.
#[derive(Clone, Debug, Default)]
pub struct Namespace {
    ids: FxHashMap<GLuint, FilterEntry>,
    zero_id: Option<FilterEntry>,
    buckets: [Vec<GLuint>; Severity::COUNT],
}

impl Namespace {
    /// Entry recorded for `id`, if any.
    #[must_use]
    pub fn entry(&self, id: GLuint) -> Option<FilterEntry> {
        if id == 0 {
            self.zero_id
        } else {
            self.ids.get(&id).copied()
        }
    }

    /// IDs filed under `severity`, in first-seen order.
    #[must_use]
    pub fn bucket(&self, severity: Severity) -> &[GLuint] {
        &self.buckets[severity.index()]
    }

    /// Number of IDs with any recorded entry, the zero slot included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len() + usize::from(self.zero_id.is_some())
    }

    /// Returns `true` when no ID has an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Filtering decision for `id` observed at `severity`.
    ///
    /// The first observation fixes the entry as known, keeping any enabled
    /// bit a prior [`set`](Self::set) left behind or falling back to
    /// `default`, and files the ID in the severity bucket. Later calls return
    /// the stored bit unchanged. If the entry cannot be allocated the ID is
    /// treated as disabled and nothing is recorded.
    pub fn decide(&mut self, id: GLuint, severity: Severity, default: bool) -> bool {
        let existing = self.entry(id);
        if let Some(entry) = existing.filter(|entry| entry.known) {
            return entry.enabled;
        }

        let enabled = existing.map_or(default, |entry| entry.enabled);
        let bucket = &mut self.buckets[severity.index()];
        if bucket.try_reserve(1).is_err() {
            crate::trace::trace_filter_entry_dropped(id);
            return false;
        }
        if id != 0 && existing.is_none() && self.ids.try_reserve(1).is_err() {
            crate::trace::trace_filter_entry_dropped(id);
            return false;
        }

        let entry = FilterEntry {
            enabled,
            known: true,
        };
        store(&mut self.ids, &mut self.zero_id, id, entry);
        bucket.push(id);
        enabled
    }

    /// Overwrites the enabled bit of `id`.
    ///
    /// An absent ID gets an entry that is not known and sits in no bucket,
    /// so later bulk control calls do not reach it until it is observed.
    pub fn set(&mut self, id: GLuint, enabled: bool) {
        update(&mut self.ids, &mut self.zero_id, id, enabled);
    }

    /// Applies `enabled` to every ID filed under `severity` and returns how
    /// many were updated.
    pub fn set_bucket(&mut self, severity: Severity, enabled: bool) -> usize {
        let bucket = &self.buckets[severity.index()];
        for &id in bucket {
            update(&mut self.ids, &mut self.zero_id, id, enabled);
        }
        bucket.len()
    }
}

fn store(
    ids: &mut FxHashMap<GLuint, FilterEntry>,
    zero_id: &mut Option<FilterEntry>,
    id: GLuint,
    entry: FilterEntry,
) {
    if id == 0 {
        *zero_id = Some(entry);
    } else {
        ids.insert(id, entry);
    }
}

fn update(
    ids: &mut FxHashMap<GLuint, FilterEntry>,
    zero_id: &mut Option<FilterEntry>,
    id: GLuint,
    enabled: bool,
) {
    let fresh = FilterEntry {
        enabled,
        known: false,
    };
    if id == 0 {
        zero_id.get_or_insert(fresh).enabled = enabled;
    } else {
        ids.entry(id).or_insert(fresh).enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_decision_uses_default_and_files_bucket() {
        let mut ns = Namespace::default();
        assert!(ns.decide(5, Severity::High, true));
        assert_eq!(ns.entry(5), Some(FilterEntry { enabled: true, known: true }));
        assert_eq!(ns.bucket(Severity::High), &[5]);
        assert!(ns.bucket(Severity::Low).is_empty());
    }

    #[test]
    fn later_decisions_ignore_default_and_severity() {
        let mut ns = Namespace::default();
        assert!(!ns.decide(5, Severity::Low, false));
        assert!(!ns.decide(5, Severity::High, true));
        assert_eq!(ns.bucket(Severity::Low), &[5]);
        assert!(ns.bucket(Severity::High).is_empty());
    }

    #[test]
    fn zero_id_uses_dedicated_slot() {
        let mut ns = Namespace::default();
        assert!(ns.decide(0, Severity::Medium, true));
        assert_eq!(ns.entry(0).map(|e| e.known), Some(true));
        assert_eq!(ns.len(), 1);
        assert_eq!(ns.bucket(Severity::Medium), &[0]);
    }

    #[test]
    fn set_creates_unknown_entry_outside_buckets() {
        let mut ns = Namespace::default();
        ns.set(9, false);
        assert_eq!(ns.entry(9), Some(FilterEntry { enabled: false, known: false }));
        assert!(Severity::ALL.iter().all(|&sev| ns.bucket(sev).is_empty()));
    }

    #[test]
    fn decide_keeps_bit_left_by_set() {
        let mut ns = Namespace::default();
        ns.set(9, false);
        assert!(!ns.decide(9, Severity::High, true));
        assert_eq!(ns.bucket(Severity::High), &[9]);
    }

    #[test]
    fn set_bucket_touches_only_that_severity() {
        let mut ns = Namespace::default();
        ns.decide(1, Severity::High, true);
        ns.decide(2, Severity::Low, true);
        assert_eq!(ns.set_bucket(Severity::High, false), 1);
        assert_eq!(ns.entry(1).map(|e| e.enabled), Some(false));
        assert_eq!(ns.entry(2).map(|e| e.enabled), Some(true));
    }

    #[test]
    fn clone_is_independent() {
        let mut ns = Namespace::default();
        ns.decide(3, Severity::High, true);
        let mut copy = ns.clone();
        copy.set(3, false);
        assert_eq!(ns.entry(3).map(|e| e.enabled), Some(true));
        assert_eq!(copy.bucket(Severity::High), &[3]);
    }
}

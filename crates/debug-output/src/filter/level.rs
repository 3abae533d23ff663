use super::{DefaultTable, Namespace};
use crate::enums::{MessageType, Selector, Severity, Source};
use crate::gl::GLuint;
use crate::message::MessageHeader;
use crate::trace;

/// Complete filter state of one group level: the default table plus one
/// [`Namespace`] per `(source, type)` pair.
#[derive(Clone, Debug)]
pub struct FilterLevel {
    defaults: DefaultTable,
    namespaces: Box<[Namespace]>,
}

impl Default for FilterLevel {
    fn default() -> Self {
        Self::base()
    }
}

impl FilterLevel {
    /// State of level 0 in a freshly created debug state.
    #[must_use]
    pub fn base() -> Self {
        Self::with_defaults(DefaultTable::seeded())
    }

    /// Level with the given defaults and no observed IDs.
    #[must_use]
    pub fn with_defaults(defaults: DefaultTable) -> Self {
        let namespaces = std::iter::repeat_with(Namespace::default)
            .take(Source::COUNT * MessageType::COUNT)
            .collect();
        Self {
            defaults,
            namespaces,
        }
    }

    const fn slot(source: Source, ty: MessageType) -> usize {
        source as usize * MessageType::COUNT + ty as usize
    }

    /// Default table of the level.
    #[must_use]
    pub const fn defaults(&self) -> &DefaultTable {
        &self.defaults
    }

    /// Namespace for `(source, ty)`.
    #[must_use]
    pub fn namespace(&self, source: Source, ty: MessageType) -> &Namespace {
        &self.namespaces[Self::slot(source, ty)]
    }

    fn namespace_mut(&mut self, source: Source, ty: MessageType) -> &mut Namespace {
        &mut self.namespaces[Self::slot(source, ty)]
    }

    /// Decides whether a message with `header` passes, materializing the ID's
    /// entry on first sight.
    pub fn decide(&mut self, header: &MessageHeader) -> bool {
        let default = self.defaults.get(header.severity, header.source, header.ty);
        let namespace = self.namespace_mut(header.source, header.ty);
        let first_seen = namespace.entry(header.id).is_none_or(|entry| !entry.known);
        let enabled = namespace.decide(header.id, header.severity, default);
        trace::trace_filter_decision(header, enabled, first_seen);
        enabled
    }

    /// Overwrites the enabled bit of one ID without touching its bucket.
    pub fn set(&mut self, source: Source, ty: MessageType, id: GLuint, enabled: bool) {
        self.namespace_mut(source, ty).set(id, enabled);
    }

    /// Bulk control over the cross product of the selected dimensions.
    ///
    /// Each selected default is replaced, then every ID already filed under
    /// the selected severity bucket is updated. IDs filed under other
    /// severities keep their bits. Returns the number of IDs updated.
    pub fn control(
        &mut self,
        source: Selector<Source>,
        ty: Selector<MessageType>,
        severity: Selector<Severity>,
        enabled: bool,
    ) -> usize {
        let mut updated = 0;
        for sev in severity.values() {
            for s in source.values() {
                for t in ty.values() {
                    self.defaults.set(sev, s, t, enabled);
                    updated += self.namespace_mut(s, t).set_bucket(sev, enabled);
                }
            }
        }
        trace::trace_bulk_control(source, ty, severity, enabled, updated);
        updated
    }

    /// Current bit of an ID with a recorded entry.
    #[must_use]
    pub fn is_enabled(&self, source: Source, ty: MessageType, id: GLuint) -> Option<bool> {
        self.namespace(source, ty).entry(id).map(|entry| entry.enabled)
    }

    /// Whether an ID has been observed and filed in a bucket.
    #[must_use]
    pub fn is_known(&self, source: Source, ty: MessageType, id: GLuint) -> bool {
        self.namespace(source, ty)
            .entry(id)
            .is_some_and(|entry| entry.known)
    }

    /// Default that an unseen ID in the triple would receive.
    #[must_use]
    pub fn default_for(&self, severity: Severity, source: Source, ty: MessageType) -> bool {
        self.defaults.get(severity, source, ty)
    }
}

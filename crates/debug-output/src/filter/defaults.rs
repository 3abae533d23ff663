use crate::enums::{Classification, MessageType, Severity, Source};

type Row = [[bool; MessageType::COUNT]; Source::COUNT];

/// Fallback decisions for IDs a namespace has not yet observed, indexed by
/// severity, then source, then type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DefaultTable {
    table: [Row; Severity::COUNT],
}

impl Default for DefaultTable {
    fn default() -> Self {
        Self::seeded()
    }
}

impl DefaultTable {
    /// Table with every combination disabled.
    #[must_use]
    pub const fn cleared() -> Self {
        Self {
            table: [[[false; MessageType::COUNT]; Source::COUNT]; Severity::COUNT],
        }
    }

    /// Initial table of a fresh debug state.
    ///
    /// High and Medium are enabled and Low is explicitly disabled.
    /// Notification is never seeded and therefore starts disabled; group
    /// markers are dropped until a client enables that severity.
    #[must_use]
    pub fn seeded() -> Self {
        let mut defaults = Self::cleared();
        defaults.fill(Severity::High, true);
        defaults.fill(Severity::Medium, true);
        defaults.fill(Severity::Low, false);
        defaults
    }

    fn fill(&mut self, severity: Severity, enabled: bool) {
        self.table[severity.index()] = [[enabled; MessageType::COUNT]; Source::COUNT];
    }

    /// Default for one `(severity, source, type)` triple.
    #[must_use]
    pub fn get(&self, severity: Severity, source: Source, ty: MessageType) -> bool {
        self.table[severity.index()][source.index()][ty.index()]
    }

    /// Replaces the default for one triple.
    pub fn set(&mut self, severity: Severity, source: Source, ty: MessageType, enabled: bool) {
        self.table[severity.index()][source.index()][ty.index()] = enabled;
    }
}

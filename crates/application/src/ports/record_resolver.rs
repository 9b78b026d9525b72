use zonelight_domain::Resolution;

/// Looks a queried name up in the loaded record tables.
///
/// Implementations are synchronous and must be callable from any number of
/// request tasks at once without locking. `None` means no table holds the
/// name; it is an ordinary outcome, not a failure.
pub trait RecordResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Option<Resolution>;
}

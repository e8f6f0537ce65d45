/// Entity identifiers are random UUIDs, rendered as strings on the wire.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh entity identifier.
pub fn new_id() -> EntityId {
    uuid::Uuid::new_v4()
}

/// Parse an identifier taken from a path segment or request body.
///
/// Returns `None` for anything that is not a UUID; callers treat that the
/// same as an identifier that matches no entity.
pub fn parse_id(raw: &str) -> Option<EntityId> {
    uuid::Uuid::parse_str(raw.trim()).ok()
}

/// Current time, never earlier than `floor`.
///
/// Used when stamping `updated_at` so it cannot precede `created_at` even if
/// the wall clock steps backwards.
pub fn now_not_before(floor: Timestamp) -> Timestamp {
    chrono::Utc::now().max(floor)
}

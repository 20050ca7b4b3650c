use uuid::Uuid;

/// Random (version 4) UUID in hyphenated lowercase form,
/// e.g. `"550e8400-e29b-41d4-a716-446655440000"`.
#[must_use]
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Id carried by an entity that has not been persisted yet.
pub const UNASSIGNED_ID: DbId = 0;

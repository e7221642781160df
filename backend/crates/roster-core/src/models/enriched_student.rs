//! Enriched student - roster-view projection of an account plus skill tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// In-memory projection used only by the roster view: account fields plus the
/// deduplicated, normalized skill tokens collected from every credential the
/// account owns. Constructed fresh on every fetch, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedStudent {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub skills: Vec<String>,
}

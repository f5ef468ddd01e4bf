use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackRecord {
    pub id: i64,
    pub person_name: String,
    pub message: String,
    pub rating: u8,
    pub created_at: String, // RFC 3339, UTC
}

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

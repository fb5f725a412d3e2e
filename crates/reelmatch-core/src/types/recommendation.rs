//! Recommendation export row.

use serde::{Deserialize, Serialize};

use super::{TitleId, UserId};

/// One recommended movie for one user.
///
/// Field order and serialized names match the exported CSV header
/// `user_id,tconst,primaryTitle,genres,runtimeMinutes,averageRating,total_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Who the recommendation is for.
    pub user_id: UserId,
    /// Recommended title.
    pub tconst: TitleId,
    /// Display title.
    #[serde(rename = "primaryTitle")]
    pub primary_title: String,
    /// Raw genre cell.
    pub genres: String,
    /// Runtime in minutes.
    #[serde(rename = "runtimeMinutes")]
    pub runtime_minutes: u32,
    /// Rating used for scoring (missing ratings are 0).
    #[serde(rename = "averageRating")]
    pub average_rating: f64,
    /// Combined score, rounded to two decimals.
    pub total_score: f64,
}

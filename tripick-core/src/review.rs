//! Review draft validation ahead of the review-submission API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a draft cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("score must be between 1 and 5, got {0}")]
    ScoreOutOfRange(u8),
    #[error("comment must not be blank")]
    BlankComment,
}

/// A review as composed in the write modal: a 1-5 score and free-text
/// comment for one place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub content_id: String,
    pub score: u8,
    pub comment: String,
}

impl ReviewDraft {
    /// Check the draft against submission rules.
    ///
    /// # Errors
    ///
    /// [`ReviewError::ScoreOutOfRange`] for a score outside 1..=5,
    /// [`ReviewError::BlankComment`] for a whitespace-only comment.
    pub fn validate(&self) -> Result<(), ReviewError> {
        if !(1..=5).contains(&self.score) {
            return Err(ReviewError::ScoreOutOfRange(self.score));
        }
        if self.comment.trim().is_empty() {
            return Err(ReviewError::BlankComment);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(score: u8, comment: &str) -> ReviewDraft {
        ReviewDraft {
            content_id: "126508".to_string(),
            score,
            comment: comment.to_string(),
        }
    }

    #[test]
    fn valid_scores_pass() {
        for score in 1..=5 {
            assert_eq!(draft(score, "좋았어요").validate(), Ok(()));
        }
    }

    #[test]
    fn out_of_range_scores_fail() {
        assert_eq!(
            draft(0, "좋았어요").validate(),
            Err(ReviewError::ScoreOutOfRange(0))
        );
        assert_eq!(
            draft(6, "좋았어요").validate(),
            Err(ReviewError::ScoreOutOfRange(6))
        );
    }

    #[test]
    fn blank_comment_fails() {
        assert_eq!(draft(4, "   ").validate(), Err(ReviewError::BlankComment));
    }
}

// Aggregate Statistics Records
//
// All percentage fields guard the zero-denominator case to 0.0 so empty
// datasets never produce NaN.

use serde::{Deserialize, Serialize};

use crate::domain::RecordId;

/// Per-session review totals and accuracy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_reviews: i64,
    pub correct_count: i64,
    pub incorrect_count: i64,
    pub accuracy: f64,
}

impl SessionStats {
    pub fn from_counts(total_reviews: i64, correct_count: i64) -> Self {
        let accuracy = if total_reviews > 0 {
            correct_count as f64 / total_reviews as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_reviews,
            correct_count,
            incorrect_count: total_reviews - correct_count,
            accuracy,
        }
    }
}

/// Overall progress: how much of the vocabulary has ever been reviewed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyProgress {
    pub total_words: i64,
    pub studied_words: i64,
    pub remaining_words: i64,
    pub progress_percentage: f64,
}

impl StudyProgress {
    pub fn from_counts(total_words: i64, studied_words: i64) -> Self {
        let progress_percentage = if total_words > 0 {
            studied_words as f64 / total_words as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_words,
            studied_words,
            remaining_words: total_words - studied_words,
            progress_percentage,
        }
    }
}

/// Dashboard summary of aggregate session/review counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickStats {
    pub total_sessions: i64,
    pub active_groups: i64,
    pub total_reviews: i64,
    pub success_rate: f64,
}

impl QuickStats {
    pub fn from_counts(
        total_sessions: i64,
        active_groups: i64,
        total_reviews: i64,
        correct_reviews: i64,
    ) -> Self {
        let success_rate = if total_reviews > 0 {
            correct_reviews as f64 / total_reviews as f64 * 100.0
        } else {
            0.0
        };

        Self {
            total_sessions,
            active_groups,
            total_reviews,
            success_rate,
        }
    }
}

/// The most recent session joined with its correct/incorrect review counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastSessionSummary {
    pub session_id: RecordId,
    pub group_id: RecordId,
    pub study_activity_id: RecordId,
    pub start_time: String,
    pub end_time: Option<String>,
    pub correct_count: i64,
    pub incorrect_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_stats_accuracy() {
        let stats = SessionStats::from_counts(2, 1);
        assert_eq!(stats.total_reviews, 2);
        assert_eq!(stats.correct_count, 1);
        assert_eq!(stats.incorrect_count, 1);
        assert_eq!(stats.accuracy, 50.0);
    }

    #[test]
    fn test_session_stats_zero_reviews_guard() {
        let stats = SessionStats::from_counts(0, 0);
        assert_eq!(stats.accuracy, 0.0);
        assert!(!stats.accuracy.is_nan());
    }

    #[test]
    fn test_progress_empty_vocabulary_guard() {
        let progress = StudyProgress::from_counts(0, 0);
        assert_eq!(progress.progress_percentage, 0.0);
        assert_eq!(progress.remaining_words, 0);
    }

    #[test]
    fn test_progress_partial() {
        let progress = StudyProgress::from_counts(10, 4);
        assert_eq!(progress.remaining_words, 6);
        assert_eq!(progress.progress_percentage, 40.0);
    }

    #[test]
    fn test_quick_stats_zero_reviews_guard() {
        let stats = QuickStats::from_counts(0, 0, 0, 0);
        assert_eq!(stats.success_rate, 0.0);
    }

    #[test]
    fn test_quick_stats_success_rate() {
        let stats = QuickStats::from_counts(3, 2, 4, 3);
        assert_eq!(stats.success_rate, 75.0);
    }
}

//! Aggregation over post records

use gamepulse_core::{PostRecord, SentimentLabel, SubjectId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-label tallies for one subject
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl LabelCounts {
    /// Count one classified post
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    /// Sum over all labels; equals the aggregate's post count
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// Derived statistics for one subject
///
/// `mean_score` is `None` exactly when `count` is zero; otherwise it is the
/// unweighted arithmetic mean of per-post scores, in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameAggregate {
    pub subject_id: SubjectId,
    pub mean_score: Option<f64>,
    pub count: usize,
    pub label_counts: LabelCounts,
}

/// Ranking direction for subject lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankDirection {
    /// Highest mean sentiment first
    Top,
    /// Lowest mean sentiment first
    Worst,
}

/// Compute the aggregate view for one subject
///
/// No smoothing, no recency weighting, no confidence weighting. An empty
/// record set is not an error; it yields a `None` mean and zero counts.
pub fn aggregate(subject_id: SubjectId, records: &[PostRecord]) -> GameAggregate {
    let count = records.len();
    let mut label_counts = LabelCounts::default();
    let mut score_sum = 0.0;

    for record in records {
        label_counts.record(record.result.label);
        score_sum += record.result.score;
    }

    let mean_score = if count == 0 {
        None
    } else {
        Some(score_sum / count as f64)
    };

    GameAggregate {
        subject_id,
        mean_score,
        count,
        label_counts,
    }
}

/// Rank subjects by mean sentiment
///
/// Subjects with fewer than `min_count` posts are excluded; zero-post
/// subjects are always excluded rather than ranked with a coerced mean of
/// zero. Ties on mean break by ascending subject id, so the order is
/// deterministic. Returns at most `n` aggregates.
pub fn rank_subjects(
    records_by_subject: &HashMap<SubjectId, Vec<PostRecord>>,
    direction: RankDirection,
    n: usize,
    min_count: usize,
) -> Vec<GameAggregate> {
    let min_count = min_count.max(1);

    let mut ranked: Vec<GameAggregate> = records_by_subject
        .iter()
        .map(|(subject_id, records)| aggregate(*subject_id, records))
        .filter(|agg| agg.count >= min_count)
        .collect();

    ranked.sort_by(|a, b| {
        // min_count >= 1 guarantees both means exist
        let a_mean = a.mean_score.unwrap_or(0.0);
        let b_mean = b.mean_score.unwrap_or(0.0);
        let by_mean = match direction {
            RankDirection::Top => b_mean.total_cmp(&a_mean),
            RankDirection::Worst => a_mean.total_cmp(&b_mean),
        };
        by_mean.then(a.subject_id.cmp(&b.subject_id))
    });

    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamepulse_core::SentimentResult;

    fn record(subject_id: SubjectId, score: f64) -> PostRecord {
        let result = if score > 0.0 {
            SentimentResult::positive(score)
        } else if score < 0.0 {
            SentimentResult::negative(-score)
        } else {
            SentimentResult::neutral(0.5)
        };
        PostRecord::new(subject_id, 1, "title", "content", result)
    }

    fn by_subject(records: Vec<PostRecord>) -> HashMap<SubjectId, Vec<PostRecord>> {
        let mut map: HashMap<SubjectId, Vec<PostRecord>> = HashMap::new();
        for record in records {
            map.entry(record.subject_id).or_default().push(record);
        }
        map
    }

    #[test]
    fn test_aggregate_arithmetic() {
        let records = vec![record(1, 0.8), record(1, -0.4), record(1, 0.0)];
        let agg = aggregate(1, &records);

        assert_eq!(agg.count, 3);
        let mean = agg.mean_score.unwrap();
        assert!((mean - 0.1333).abs() < 1e-3);
        assert_eq!(agg.label_counts.positive, 1);
        assert_eq!(agg.label_counts.negative, 1);
        assert_eq!(agg.label_counts.neutral, 1);
        assert_eq!(agg.label_counts.total(), agg.count);
    }

    #[test]
    fn test_empty_set_is_not_an_error() {
        let agg = aggregate(7, &[]);
        assert_eq!(agg.count, 0);
        assert_eq!(agg.mean_score, None);
        assert_eq!(agg.label_counts.total(), 0);
    }

    #[test]
    fn test_mean_stays_in_range() {
        let records = vec![record(1, 1.0), record(1, 1.0)];
        let agg = aggregate(1, &records);
        assert_eq!(agg.mean_score, Some(1.0));

        let records = vec![record(2, -1.0), record(2, -0.5)];
        let agg = aggregate(2, &records);
        assert_eq!(agg.mean_score, Some(-0.75));
    }

    #[test]
    fn test_rank_excludes_zero_post_subjects() {
        // A(mean 0.5, 2 posts), B(mean 0.9, 1 post), C(no posts)
        let mut map = by_subject(vec![
            record(1, 0.4),
            record(1, 0.6),
            record(2, 0.9),
        ]);
        map.insert(3, Vec::new());

        let top = rank_subjects(&map, RankDirection::Top, 1, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].subject_id, 2);
        assert_eq!(top[0].mean_score, Some(0.9));
    }

    #[test]
    fn test_rank_directions() {
        let map = by_subject(vec![record(1, 0.5), record(2, -0.5), record(3, 0.0)]);

        let top = rank_subjects(&map, RankDirection::Top, 10, 1);
        let ids: Vec<_> = top.iter().map(|a| a.subject_id).collect();
        assert_eq!(ids, vec![1, 3, 2]);

        let worst = rank_subjects(&map, RankDirection::Worst, 10, 1);
        let ids: Vec<_> = worst.iter().map(|a| a.subject_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_ties_break_by_subject_id() {
        let map = by_subject(vec![record(9, 0.5), record(4, 0.5), record(7, 0.5)]);

        let top = rank_subjects(&map, RankDirection::Top, 10, 1);
        let ids: Vec<_> = top.iter().map(|a| a.subject_id).collect();
        assert_eq!(ids, vec![4, 7, 9]);

        let worst = rank_subjects(&map, RankDirection::Worst, 10, 1);
        let ids: Vec<_> = worst.iter().map(|a| a.subject_id).collect();
        assert_eq!(ids, vec![4, 7, 9]);
    }

    #[test]
    fn test_min_count_threshold() {
        let map = by_subject(vec![
            record(1, 0.9),
            record(2, 0.1),
            record(2, 0.3),
        ]);

        let top = rank_subjects(&map, RankDirection::Top, 10, 2);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].subject_id, 2);
    }

    #[test]
    fn test_take_first_n() {
        let map = by_subject(vec![record(1, 0.1), record(2, 0.2), record(3, 0.3)]);
        let top = rank_subjects(&map, RankDirection::Top, 2, 1);
        let ids: Vec<_> = top.iter().map(|a| a.subject_id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let records = vec![record(1, 0.8), record(1, -0.4)];
        let first = aggregate(1, &records);
        let second = aggregate(1, &records);
        assert_eq!(first, second);
    }
}

use crate::models::ranking::{RankedPosition, WindowedStats};
use crate::services::time_window::TimeWindow;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Bson, DateTime, Document};
use mongodb::Collection;

// The attempt log is unbounded, so both questions this module answers run
// as single server-side aggregations; only per-user summary rows come back.

fn window_filter(window: &TimeWindow) -> Document {
    let mut range = doc! { "$gte": DateTime::from_chrono(window.start) };
    if let Some(end) = window.end {
        range.insert("$lte", DateTime::from_chrono(end));
    }
    doc! { "answered_at": range }
}

// One sort key for both the top-N and exact-position pipelines.
// Ties: more questions first, then user id.
fn ranking_sort() -> Document {
    doc! { "accuracy": -1, "total_questions": -1, "_id": 1 }
}

fn per_user_stats_stages(window: &TimeWindow, min_questions: i64) -> Vec<Document> {
    vec![
        doc! { "$match": window_filter(window) },
        doc! { "$group": {
            "_id": "$user_id",
            "total_questions": { "$sum": 1 },
            "correct_answers": { "$sum": { "$cond": ["$is_correct", 1, 0] } },
        }},
        doc! { "$match": { "total_questions": { "$gte": min_questions } } },
        doc! { "$addFields": {
            "accuracy": { "$round": [
                { "$multiply": [{ "$divide": ["$correct_answers", "$total_questions"] }, 100] },
                0
            ]},
        }},
    ]
}

pub fn create_ranking_pipeline(window: &TimeWindow, min_questions: i64, limit: i64) -> Vec<Document> {
    let mut pipeline = per_user_stats_stages(window, min_questions);
    pipeline.push(doc! { "$sort": ranking_sort() });
    pipeline.push(doc! { "$limit": limit });
    pipeline
}

// Ranks the full eligible population server-side, then keeps only the
// target user's row.
pub fn create_position_pipeline(user_id: &str, window: &TimeWindow, min_questions: i64) -> Vec<Document> {
    let mut pipeline = per_user_stats_stages(window, min_questions);
    pipeline.push(doc! { "$setWindowFields": {
        "sortBy": ranking_sort(),
        "output": { "rank": { "$documentNumber": {} } },
    }});
    pipeline.push(doc! { "$match": { "_id": user_id } });
    pipeline
}

// Aggregation numerics arrive as Int32, Int64 or Double depending on stage.
fn int_field(doc: &Document, key: &str) -> i64 {
    match doc.get(key) {
        Some(Bson::Int32(n)) => *n as i64,
        Some(Bson::Int64(n)) => *n,
        Some(Bson::Double(n)) => n.round() as i64,
        _ => 0,
    }
}

// Convert a per-user aggregation row into WindowedStats.
pub fn extract_windowed_stats(doc: &Document) -> WindowedStats {
    WindowedStats {
        user_id: doc.get_str("_id").unwrap_or_default().to_string(),
        total_questions: int_field(doc, "total_questions"),
        correct_answers: int_field(doc, "correct_answers"),
        accuracy: int_field(doc, "accuracy") as u32,
    }
}

pub async fn fetch_ranking_for_window(
    collection: &Collection<Document>,
    window: &TimeWindow,
    min_questions: i64,
    limit: i64,
) -> Result<Vec<WindowedStats>, mongodb::error::Error> {
    let pipeline = create_ranking_pipeline(window, min_questions, limit);

    let mut cursor = collection.aggregate(pipeline).await?;
    let mut rows = Vec::new();

    while let Some(doc) = cursor.try_next().await? {
        rows.push(extract_windowed_stats(&doc));
    }

    Ok(rows)
}

pub async fn fetch_user_position(
    collection: &Collection<Document>,
    user_id: &str,
    window: &TimeWindow,
    min_questions: i64,
) -> Result<Option<RankedPosition>, mongodb::error::Error> {
    let pipeline = create_position_pipeline(user_id, window, min_questions);

    let mut cursor = collection.aggregate(pipeline).await?;
    match cursor.try_next().await? {
        Some(doc) => Ok(Some(RankedPosition {
            rank: int_field(&doc, "rank") as u32,
            stats: extract_windowed_stats(&doc),
        })),
        // No row means the user is below the eligibility threshold, which is
        // a normal "not yet ranked" state rather than an error.
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::time_window::{resolve_window, Period};
    use chrono::{TimeZone, Utc};

    fn wednesday_noon() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn closed_window_filters_both_bounds() {
        let window = resolve_window(Period::Today, wednesday_noon());
        let filter = window_filter(&window);

        let range = filter.get_document("answered_at").unwrap();
        assert!(range.get("$gte").is_some());
        assert!(range.get("$lte").is_some());
    }

    #[test]
    fn open_window_has_no_upper_bound() {
        let window = resolve_window(Period::Week, wednesday_noon());
        let filter = window_filter(&window);

        let range = filter.get_document("answered_at").unwrap();
        assert!(range.get("$gte").is_some());
        assert!(range.get("$lte").is_none());
    }

    #[test]
    fn ranking_pipeline_enforces_threshold_and_limit() {
        let window = resolve_window(Period::Today, wednesday_noon());
        let pipeline = create_ranking_pipeline(&window, 5, 100);

        let threshold = pipeline[2].get_document("$match").unwrap();
        assert_eq!(
            threshold.get_document("total_questions").unwrap(),
            &doc! { "$gte": 5_i64 }
        );
        assert_eq!(pipeline[5].get_i64("$limit").unwrap(), 100);
    }

    #[test]
    fn ranking_pipeline_sorts_by_documented_tie_break() {
        let window = resolve_window(Period::Month, wednesday_noon());
        let pipeline = create_ranking_pipeline(&window, 5, 100);

        assert_eq!(
            pipeline[4].get_document("$sort").unwrap(),
            &doc! { "accuracy": -1, "total_questions": -1, "_id": 1 }
        );
    }

    #[test]
    fn position_pipeline_ranks_whole_population_then_matches_user() {
        let window = resolve_window(Period::Week, wednesday_noon());
        let pipeline = create_position_pipeline("user-7", &window, 5);

        let window_fields = pipeline[4].get_document("$setWindowFields").unwrap();
        assert_eq!(window_fields.get_document("sortBy").unwrap(), &ranking_sort());
        let rank_output = window_fields
            .get_document("output")
            .unwrap()
            .get_document("rank")
            .unwrap();
        assert!(rank_output.get_document("$documentNumber").is_ok());

        assert_eq!(
            pipeline[5].get_document("$match").unwrap(),
            &doc! { "_id": "user-7" }
        );
    }

    #[test]
    fn extracts_stats_across_bson_numeric_types() {
        let row = doc! {
            "_id": "user-3",
            "total_questions": 10_i32,
            "correct_answers": 8_i64,
            "accuracy": 80.0_f64,
        };

        let stats = extract_windowed_stats(&row);
        assert_eq!(stats.user_id, "user-3");
        assert_eq!(stats.total_questions, 10);
        assert_eq!(stats.correct_answers, 8);
        assert_eq!(stats.accuracy, 80);
    }
}

use crate::models::streak::StreakCounter;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Collection;

// Reads the maintained counters only; streaks are never recomputed from the
// raw activity log here. Ties on equal streaks break by user id.
pub async fn fetch_top_streaks(
    collection: &Collection<StreakCounter>,
    min_streak: i64,
    limit: i64,
) -> Result<Vec<StreakCounter>, mongodb::error::Error> {
    let filter = doc! { "current_streak": { "$gte": min_streak } };

    let mut cursor = collection
        .find(filter)
        .sort(doc! { "current_streak": -1, "user_id": 1 })
        .limit(limit)
        .await?;

    let mut counters = Vec::new();
    while let Some(counter) = cursor.try_next().await? {
        counters.push(counter);
    }

    Ok(counters)
}

use crate::models::identity::{AccountRecord, DisplayNameRecord};
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Collection;
use std::collections::HashMap;

// Both roster lookups run once per load over the full candidate set; nothing
// in this module queries per row.

pub async fn fetch_display_names(
    collection: &Collection<DisplayNameRecord>,
    user_ids: &[String],
) -> Result<HashMap<String, String>, mongodb::error::Error> {
    if user_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let filter = doc! { "user_id": { "$in": user_ids.to_vec() } };
    let mut cursor = collection.find(filter).await?;

    let mut names = HashMap::new();
    while let Some(record) = cursor.try_next().await? {
        if let Some(name) = record.display_name {
            let name = name.trim();
            if !name.is_empty() {
                names.insert(record.user_id, name.to_string());
            }
        }
    }

    Ok(names)
}

pub async fn fetch_account_records(
    collection: &Collection<AccountRecord>,
    user_ids: &[String],
) -> Result<HashMap<String, AccountRecord>, mongodb::error::Error> {
    if user_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let filter = doc! { "user_id": { "$in": user_ids.to_vec() } };
    let mut cursor = collection.find(filter).await?;

    let mut records = HashMap::new();
    while let Some(record) = cursor.try_next().await? {
        records.insert(record.user_id.clone(), record);
    }

    Ok(records)
}

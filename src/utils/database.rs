use crate::constants::{
    ACCOUNTS_COLL_NAME, ATTEMPTS_COLL_NAME, DB_NAME, DISPLAY_NAMES_COLL_NAME, STREAKS_COLL_NAME,
};
use crate::models::identity::{AccountRecord, DisplayNameRecord};
use crate::models::streak::StreakCounter;
use mongodb::bson::Document;
use mongodb::{Client, Collection};

pub fn attempts_collection(client: &Client) -> Collection<Document> {
    client.database(DB_NAME).collection(ATTEMPTS_COLL_NAME)
}

pub fn streaks_collection(client: &Client) -> Collection<StreakCounter> {
    client.database(DB_NAME).collection(STREAKS_COLL_NAME)
}

pub fn display_names_collection(client: &Client) -> Collection<DisplayNameRecord> {
    client.database(DB_NAME).collection(DISPLAY_NAMES_COLL_NAME)
}

pub fn accounts_collection(client: &Client) -> Collection<AccountRecord> {
    client.database(DB_NAME).collection(ACCOUNTS_COLL_NAME)
}

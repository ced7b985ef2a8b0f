use serde::{Deserialize, Serialize};

// Self-chosen public name roster.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DisplayNameRecord {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

// Administrative roster: legal name and account email.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AccountRecord {
    pub user_id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

// What the requesting client already knows about itself. Resolving the
// requester's own label from this never costs a roster round-trip.
#[derive(Clone, Debug, Default)]
pub struct RequesterProfile {
    pub user_id: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
}

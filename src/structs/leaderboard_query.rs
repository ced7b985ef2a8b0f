use serde::Deserialize;

#[derive(Deserialize)]
pub struct LeaderboardQuery {
    pub mode: String,
    pub period: Option<String>,
    pub user_id: String,
    // The client's cached copy of its own profile, so the requester's label
    // can resolve without an extra roster round-trip.
    pub profile_name: Option<String>,
    pub profile_email: Option<String>,
}

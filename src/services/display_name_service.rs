use crate::constants::{ANONYMOUS_LABEL, SELF_FALLBACK_LABEL};
use crate::models::identity::{AccountRecord, DisplayNameRecord, RequesterProfile};
use crate::repositories::identity_repository::{fetch_account_records, fetch_display_names};
use mongodb::Collection;
use std::collections::HashMap;

// Resolves a label for every candidate id in two batched roster lookups.
// A failed lookup degrades that tier to empty instead of failing the load.
pub async fn resolve_display_names(
    display_names: &Collection<DisplayNameRecord>,
    accounts: &Collection<AccountRecord>,
    user_ids: &[String],
    requester: &RequesterProfile,
) -> HashMap<String, String> {
    let custom = match fetch_display_names(display_names, user_ids).await {
        Ok(names) => names,
        Err(err) => {
            log::warn!(
                "Display name roster lookup failed, degrading to account records: {:?}",
                err
            );
            HashMap::new()
        }
    };

    let account_records = match fetch_account_records(accounts, user_ids).await {
        Ok(records) => records,
        Err(err) => {
            log::warn!(
                "Account roster lookup failed, degrading to fallback labels: {:?}",
                err
            );
            HashMap::new()
        }
    };

    label_user_ids(user_ids, &custom, &account_records, requester)
}

pub fn label_user_ids(
    user_ids: &[String],
    custom: &HashMap<String, String>,
    accounts: &HashMap<String, AccountRecord>,
    requester: &RequesterProfile,
) -> HashMap<String, String> {
    user_ids
        .iter()
        .map(|id| (id.clone(), label_for(id, custom, accounts, requester)))
        .collect()
}

// Precedence: self-chosen name, then roster given name, then (for the
// requester only) the profile data the client already holds, then roster
// email local part, then the anonymous label.
fn label_for(
    user_id: &str,
    custom: &HashMap<String, String>,
    accounts: &HashMap<String, AccountRecord>,
    requester: &RequesterProfile,
) -> String {
    if let Some(name) = custom.get(user_id) {
        return name.clone();
    }

    let account = accounts.get(user_id);
    if let Some(name) = account.and_then(|a| a.full_name.as_deref()).and_then(first_name) {
        return name;
    }

    if user_id == requester.user_id {
        if let Some(name) = requester.full_name.as_deref().and_then(first_name) {
            return name;
        }
        if let Some(local) = requester.email.as_deref().and_then(email_local_part) {
            return local;
        }
        return SELF_FALLBACK_LABEL.to_string();
    }

    if let Some(local) = account.and_then(|a| a.email.as_deref()).and_then(email_local_part) {
        return local;
    }

    ANONYMOUS_LABEL.to_string()
}

// Given name only; the rest of the legal name is never exposed.
fn first_name(full_name: &str) -> Option<String> {
    full_name.split_whitespace().next().map(|token| token.to_string())
}

fn email_local_part(email: &str) -> Option<String> {
    let local = email.split('@').next().unwrap_or("").trim();
    if local.is_empty() {
        None
    } else {
        Some(local.to_string())
    }
}

use crate::constants::{
    ACCURACY_RANKING_LIMIT, ANONYMOUS_LABEL, MIN_RANKED_QUESTIONS, MIN_RANKED_STREAK,
    STREAK_RANKING_LIMIT,
};
use crate::models::identity::{AccountRecord, DisplayNameRecord, RequesterProfile};
use crate::models::ranking::{LoadState, RankEntry, RankedPosition, WindowedStats};
use crate::models::streak::{displayed_streak, StreakCounter, StreakEntry};
use crate::repositories::attempt_repository::{fetch_ranking_for_window, fetch_user_position};
use crate::repositories::streak_repository::fetch_top_streaks;
use crate::services::display_name_service::resolve_display_names;
use crate::services::time_window::{resolve_window, Period};
use chrono::Utc;
use mongodb::bson::Document;
use mongodb::Collection;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct AccuracyView {
    pub period: Period,
    pub entries: Vec<RankEntry>,
    pub my_position: Option<RankEntry>,
    pub state: LoadState,
}

#[derive(Clone, Debug)]
pub struct StreakView {
    pub entries: Vec<StreakEntry>,
    pub state: LoadState,
}

// One load = one pass: resolve the window, fetch the top slice, look up the
// requester's exact position only when the slice misses them, resolve every
// label in one batched round, assemble. Each call builds a complete fresh
// view; nothing is merged across loads.
pub async fn load_accuracy_leaderboard(
    attempts: &Collection<Document>,
    display_names: &Collection<DisplayNameRecord>,
    accounts: &Collection<AccountRecord>,
    requester: &RequesterProfile,
    period: Period,
) -> AccuracyView {
    let window = resolve_window(period, Utc::now());

    let (stats, state) = match fetch_ranking_for_window(
        attempts,
        &window,
        MIN_RANKED_QUESTIONS,
        ACCURACY_RANKING_LIMIT,
    )
    .await
    {
        Ok(rows) => (rows, LoadState::Ready),
        Err(err) => {
            log::error!("Ranking aggregation failed: {:?}", err);
            (Vec::new(), LoadState::Failed)
        }
    };

    let requester_listed = stats.iter().any(|row| row.user_id == requester.user_id);
    let position = if state == LoadState::Ready && !requester_listed {
        match fetch_user_position(attempts, &requester.user_id, &window, MIN_RANKED_QUESTIONS).await
        {
            Ok(position) => position,
            Err(err) => {
                log::warn!(
                    "Exact position lookup failed, leaving my-position absent: {:?}",
                    err
                );
                None
            }
        }
    } else {
        None
    };

    let candidate_ids =
        collect_candidate_ids(stats.iter().map(|row| row.user_id.as_str()), requester);
    let labels = resolve_display_names(display_names, accounts, &candidate_ids, requester).await;

    let view = assemble_accuracy_view(period, stats, position, &labels, &requester.user_id, state);
    log_assembled_entries(&view.entries);
    view
}

pub async fn load_streak_leaderboard(
    streaks: &Collection<StreakCounter>,
    display_names: &Collection<DisplayNameRecord>,
    accounts: &Collection<AccountRecord>,
    requester: &RequesterProfile,
) -> StreakView {
    let (counters, state) =
        match fetch_top_streaks(streaks, MIN_RANKED_STREAK, STREAK_RANKING_LIMIT).await {
            Ok(counters) => (counters, LoadState::Ready),
            Err(err) => {
                log::error!("Streak query failed: {:?}", err);
                (Vec::new(), LoadState::Failed)
            }
        };

    let candidate_ids =
        collect_candidate_ids(counters.iter().map(|c| c.user_id.as_str()), requester);
    let labels = resolve_display_names(display_names, accounts, &candidate_ids, requester).await;

    let view = assemble_streak_view(counters, &labels, &requester.user_id, state);
    log_assembled_entries(&view.entries);
    view
}

// The requester's id always joins the label lookup, present in the slice
// or not.
fn collect_candidate_ids<'a>(
    ids: impl Iterator<Item = &'a str>,
    requester: &RequesterProfile,
) -> Vec<String> {
    let mut candidates: Vec<String> = ids.map(str::to_string).collect();
    if !candidates.iter().any(|id| id == &requester.user_id) {
        candidates.push(requester.user_id.clone());
    }
    candidates
}

pub fn assemble_accuracy_view(
    period: Period,
    stats: Vec<WindowedStats>,
    position: Option<RankedPosition>,
    labels: &HashMap<String, String>,
    requester_id: &str,
    state: LoadState,
) -> AccuracyView {
    let entries: Vec<RankEntry> = stats
        .into_iter()
        .enumerate()
        .map(|(index, row)| rank_entry(row, index as u32 + 1, labels, requester_id))
        .collect();

    let my_position =
        position.map(|position| rank_entry(position.stats, position.rank, labels, requester_id));

    AccuracyView {
        period,
        entries,
        my_position,
        state,
    }
}

fn rank_entry(
    stats: WindowedStats,
    rank: u32,
    labels: &HashMap<String, String>,
    requester_id: &str,
) -> RankEntry {
    let display_name = labels
        .get(&stats.user_id)
        .cloned()
        .unwrap_or_else(|| ANONYMOUS_LABEL.to_string());
    let is_current_user = stats.user_id == requester_id;

    RankEntry {
        stats,
        rank,
        display_name,
        is_current_user,
    }
}

pub fn assemble_streak_view(
    counters: Vec<StreakCounter>,
    labels: &HashMap<String, String>,
    requester_id: &str,
    state: LoadState,
) -> StreakView {
    let entries: Vec<StreakEntry> = counters
        .into_iter()
        .enumerate()
        .map(|(index, counter)| StreakEntry {
            displayed_streak: displayed_streak(counter.current_streak),
            rank: index as u32 + 1,
            display_name: labels
                .get(&counter.user_id)
                .cloned()
                .unwrap_or_else(|| ANONYMOUS_LABEL.to_string()),
            is_current_user: counter.user_id == requester_id,
            current_streak: counter.current_streak,
            user_id: counter.user_id,
        })
        .collect();

    StreakView { entries, state }
}

fn log_assembled_entries<T: Serialize>(entries: &[T]) {
    if log::log_enabled!(log::Level::Debug) {
        if let Ok(json) = serde_json::to_string(entries) {
            log::debug!("Assembled leaderboard: {}", json);
        }
    }
}

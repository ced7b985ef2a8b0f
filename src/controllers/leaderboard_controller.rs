use crate::models::api_response::error_response;
use crate::models::identity::RequesterProfile;
use crate::models::ranking::{AccuracyLeaderboardResponse, LoadState};
use crate::models::streak::StreakLeaderboardResponse;
use crate::services::leaderboard_service::{load_accuracy_leaderboard, load_streak_leaderboard};
use crate::services::time_window::Period;
use crate::structs::leaderboard_query::LeaderboardQuery;
use crate::utils::database::{
    accounts_collection, attempts_collection, display_names_collection, streaks_collection,
};
use actix_web::{web, HttpResponse};
use mongodb::Client;

pub async fn get_leaderboard(
    client: web::Data<Client>,
    query: web::Query<LeaderboardQuery>,
) -> HttpResponse {
    let query = query.into_inner();

    let user_id = query.user_id.trim().to_string();
    if user_id.is_empty() {
        return HttpResponse::BadRequest().json(error_response("user_id is required."));
    }

    let requester = RequesterProfile {
        user_id,
        full_name: query.profile_name,
        email: query.profile_email,
    };

    match query.mode.as_str() {
        "accuracy" => {
            let period = match query.period.as_deref().and_then(Period::parse) {
                Some(period) => period,
                None => {
                    return HttpResponse::BadRequest().json(error_response(
                        "Invalid period. Expected one of: today, yesterday, week, month.",
                    ));
                }
            };

            let view = load_accuracy_leaderboard(
                &attempts_collection(&client),
                &display_names_collection(&client),
                &accounts_collection(&client),
                &requester,
                period,
            )
            .await;

            match view.state {
                // A failed read renders as an explicit empty error state.
                LoadState::Failed => {
                    HttpResponse::InternalServerError().json(AccuracyLeaderboardResponse {
                        status: "error".to_string(),
                        message: "Failed to fetch leaderboard data. Please try again later."
                            .to_string(),
                        period: period.as_str().to_string(),
                        leaderboard: vec![],
                        my_position: None,
                    })
                }
                // my_position stays null for a sub-threshold requester; the
                // client renders "not yet ranked" off the success envelope.
                LoadState::Ready => HttpResponse::Ok().json(AccuracyLeaderboardResponse {
                    status: "success".to_string(),
                    message: "Leaderboard retrieved successfully.".to_string(),
                    period: view.period.as_str().to_string(),
                    leaderboard: view.entries,
                    my_position: view.my_position,
                }),
            }
        }
        "streak" => {
            if query.period.is_some() {
                return HttpResponse::BadRequest()
                    .json(error_response("period does not apply to streak mode."));
            }

            let view = load_streak_leaderboard(
                &streaks_collection(&client),
                &display_names_collection(&client),
                &accounts_collection(&client),
                &requester,
            )
            .await;

            match view.state {
                LoadState::Failed => {
                    HttpResponse::InternalServerError().json(StreakLeaderboardResponse {
                        status: "error".to_string(),
                        message: "Failed to fetch streak leaderboard data. Please try again later."
                            .to_string(),
                        leaderboard: vec![],
                    })
                }
                LoadState::Ready => HttpResponse::Ok().json(StreakLeaderboardResponse {
                    status: "success".to_string(),
                    message: "Streak leaderboard retrieved successfully.".to_string(),
                    leaderboard: view.entries,
                }),
            }
        }
        _ => HttpResponse::BadRequest()
            .json(error_response("Invalid mode. Expected 'accuracy' or 'streak'.")),
    }
}

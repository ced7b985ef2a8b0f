use crate::routes::leaderboard_routes::configure_leaderboard_routes;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    configure_leaderboard_routes(cfg);
}

use crate::controllers::leaderboard_controller::get_leaderboard;
use actix_web::web;

pub fn configure_leaderboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/get_leaderboard", web::get().to(get_leaderboard));
}

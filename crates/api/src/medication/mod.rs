use actix_web::web;

mod add_medications;
mod get_medications;

use add_medications::add_medications_controller;
use get_medications::get_medications_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/user/{user_id}/prescription/{prescription_id}/medications",
        web::post().to(add_medications_controller),
    );
    cfg.route(
        "/user/{user_id}/medications",
        web::get().to(get_medications_controller),
    );
}

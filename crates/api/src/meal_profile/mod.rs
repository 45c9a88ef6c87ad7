use actix_web::web;

mod get_meal_profile;
mod set_meal_profile;

use get_meal_profile::get_meal_profile_controller;
use set_meal_profile::set_meal_profile_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/user/{user_id}/meal-profile",
        web::get().to(get_meal_profile_controller),
    );
    cfg.route(
        "/user/{user_id}/meal-profile",
        web::put().to(set_meal_profile_controller),
    );
}

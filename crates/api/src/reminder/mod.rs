use actix_web::web;

mod materialize;
mod schedule_batch_reminders;
mod schedule_medication_reminders;

pub(crate) use materialize::{materialize, resolve_meal_profile};

use schedule_batch_reminders::schedule_batch_reminders_controller;
use schedule_medication_reminders::schedule_medication_reminders_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/user/{user_id}/reminders",
        web::post().to(schedule_batch_reminders_controller),
    );
    cfg.route(
        "/user/{user_id}/reminders/medication/{medication_id}",
        web::post().to(schedule_medication_reminders_controller),
    );
}

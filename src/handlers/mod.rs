pub mod booking_handlers;
pub mod home_handlers;
pub mod language_handlers;
pub mod notify_handlers;

use actix_web::web;

/// Register every page route. The default service must be set by the
/// caller after all other services (see `main`).
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home_handlers::index))
        // Booking wizard
        .route("/booking", web::get().to(booking_handlers::show))
        .route("/booking", web::post().to(booking_handlers::submit_step))
        .route("/booking/pay", web::post().to(booking_handlers::pay))
        // Notify-me signup
        .route("/notify", web::get().to(notify_handlers::form))
        .route("/notify", web::post().to(notify_handlers::submit))
        // Language switch
        .route("/language", web::post().to(language_handlers::switch));
}

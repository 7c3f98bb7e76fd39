use std::time::Duration;

use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use zeeprivate::config::AppConfig;
use zeeprivate::handlers;
use zeeprivate::payments::PaymobClient;
use zeeprivate::security::RateLimiter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    // Session encryption key. Without SESSION_KEY, sessions (and any
    // half-finished booking) are lost on restart.
    let secret_key = match &config.session_key {
        Some(bytes) => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(bytes.as_slice())
        }
        None => {
            log::warn!("No usable SESSION_KEY set, generating random key");
            Key::generate()
        }
    };

    let paymob = PaymobClient::new(config.paymob.clone())
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    if !paymob.is_configured() {
        log::warn!("Paymob credentials missing, online payment disabled");
    } else if !paymob.wallet_enabled() {
        log::warn!("PAYMOB_INTEGRATION_ID_WALLET missing, wallet payment disabled");
    }
    let paymob = web::Data::new(paymob);

    let limiter = RateLimiter::default();
    let prune_limiter = limiter.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(600));
        loop {
            interval.tick().await;
            prune_limiter.prune();
        }
    });
    let limiter = web::Data::new(limiter);

    let cookie_secure = config.cookie_secure;
    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(zeeprivate::session_middleware(secret_key.clone(), cookie_secure))
            .wrap(middleware::Logger::default())
            .app_data(paymob.clone())
            .app_data(limiter.clone())
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::routes)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::home_handlers::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}

pub mod config;
pub mod errors;
pub mod handlers;
pub mod i18n;
pub mod models;
pub mod payments;
pub mod security;
pub mod templates_structs;
pub mod validate;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

/// Cookie-backed session carrying wizard state, language and CSRF token.
pub fn session_middleware(key: Key, secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(secure)
        .cookie_http_only(true)
        .build()
}

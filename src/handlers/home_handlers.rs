use actix_session::Session;
use actix_web::HttpResponse;
use actix_web::http::StatusCode;

use crate::errors::{AppError, render, render_with_status};
use crate::templates_structs::{HomeTemplate, NotFoundTemplate, PackageView, PageContext};

pub async fn index(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/");
    let packages = PackageView::all(ctx.lang, None);
    render(HomeTemplate { ctx, packages })
}

pub async fn not_found(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/");
    render_with_status(NotFoundTemplate { ctx }, StatusCode::NOT_FOUND)
}

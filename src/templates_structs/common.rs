use askama::Template;

use super::{PackageView, PageContext};

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub ctx: PageContext,
    pub packages: Vec<PackageView>,
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundTemplate {
    pub ctx: PageContext,
}

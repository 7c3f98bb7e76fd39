use askama::Template;

use super::PageContext;
use crate::models::notify::NotifySubmission;

#[derive(Template)]
#[template(path = "notify.html")]
pub struct NotifyTemplate {
    pub ctx: PageContext,
    pub form: NotifySubmission,
    pub errors: Vec<String>,
    pub submitted: bool,
}

use askama::Template;
use askama_web::WebTemplate;

#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub satellite_name: String,
    pub norad_id: u32,
    pub period_start: String,
    pub period_end: String,
}

//! HTTP adapter for the questionnaire page and the assessment API.

mod dto;
mod handlers;
mod page;
mod routes;

pub use dto::{AssessmentResponse, ErrorResponse, ModelInfoResponse};
pub use handlers::AssessmentAppState;
pub use page::{escape_html, render_page, PageView, ResultPanel};
pub use routes::assessment_routes;

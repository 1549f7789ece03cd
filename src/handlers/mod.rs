pub mod health_handler;
pub mod quiz_handler;

use actix_web::{error::QueryPayloadError, web, HttpRequest};

use crate::errors::AppError;

pub use health_handler::health_check;
pub use quiz_handler::get_quiz;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(get_quiz)
        .service(health_check);
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(format!("Invalid query string: {}", err)).into()
}

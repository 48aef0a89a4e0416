pub mod health_handler;
pub mod session_handler;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::AppError;

pub use health_handler::health_check;
pub use session_handler::{
    create_session, delete_session, generate_quiz, get_session, record_answer, restart_session,
    submit_quiz,
};

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(format!("Invalid request body: {}", err)).into()
}

/// Registers every route on the given service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(health_check)
        .service(create_session)
        .service(get_session)
        .service(delete_session)
        .service(generate_quiz)
        .service(record_answer)
        .service(submit_quiz)
        .service(restart_session);
}

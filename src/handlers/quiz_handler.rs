use actix_web::{get, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, middleware::get_request_id,
    models::dto::request::QuizQuery,
};

#[get("/quiz")]
pub async fn get_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<QuizQuery>,
) -> Result<HttpResponse, AppError> {
    let topic = query.into_inner().into_topic()?;
    log::info!(
        "Quiz requested for topic '{}' (request {})",
        topic,
        get_request_id(&req).unwrap_or_default()
    );

    let quiz = state.quiz_service.generate_quiz(&topic).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

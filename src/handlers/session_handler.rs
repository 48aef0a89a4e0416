use std::future::Future;

use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    models::{
        domain::GenerationForm,
        dto::{
            request::{GenerateQuizRequest, RecordAnswerRequest},
            response::SessionView,
        },
    },
};

/// Runs a session call on its own task so it finishes even if the client
/// goes away mid-request.
async fn run_to_completion<F, T>(call: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(call)
        .await
        .map_err(|e| AppError::InternalError(format!("Session task failed: {}", e)))?
}

#[post("/api/sessions")]
async fn create_session(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let session = state.sessions.create().await;
    let view = SessionView::from(&*session.lock().await);
    Ok(HttpResponse::Created().json(view))
}

#[get("/api/sessions/{id}")]
async fn get_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.sessions.get(&id).await?;
    let view = SessionView::from(&*session.lock().await);
    Ok(HttpResponse::Ok().json(view))
}

#[delete("/api/sessions/{id}")]
async fn delete_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.sessions.remove(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// The session is locked only to mark it pending and to apply the outcome;
/// readers see `pending` while the quiz service works.
#[post("/api/sessions/{id}/generate")]
async fn generate_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let session = state.sessions.get(&id).await?;
    let form = GenerationForm::from(request);

    let view = run_to_completion(async move {
        let call = session.lock().await.begin_generation(form)?;
        let outcome = call.run().await;

        let mut session = session.lock().await;
        session.finish_generation(outcome)?;
        Ok::<_, AppError>(SessionView::from(&*session))
    })
    .await?;

    Ok(HttpResponse::Ok().json(view))
}

/// Records one selection. The question and letter are checked against the
/// session's quiz here, since the session itself records whatever it is given.
#[put("/api/sessions/{id}/answers/{question_id}")]
async fn record_answer(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
    request: web::Json<RecordAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let (id, question_id) = path.into_inner();
    let request = request.into_inner();
    request.validate()?;
    let letter = request
        .letter()
        .ok_or_else(|| AppError::ValidationError("An answer letter is required.".to_string()))?;

    let session = state.sessions.get(&id).await?;
    let mut session = session.lock().await;

    if let Some(quiz) = session.state().quiz() {
        let question = quiz.question(&question_id).ok_or_else(|| {
            AppError::NotFound(format!("Question '{}' is not part of this quiz", question_id))
        })?;
        if !question.has_option(letter) {
            return Err(AppError::ValidationError(format!(
                "'{}' is not an option for this question.",
                letter
            )));
        }
    }

    session.record_answer(question_id, letter)?;
    Ok(HttpResponse::Ok().json(SessionView::from(&*session)))
}

#[post("/api/sessions/{id}/submit")]
async fn submit_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.sessions.get(&id).await?;

    let view = run_to_completion(async move {
        let call = session.lock().await.begin_submission()?;
        let outcome = call.run().await;

        let mut session = session.lock().await;
        session.finish_submission(outcome)?;
        Ok::<_, AppError>(SessionView::from(&*session))
    })
    .await?;

    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/sessions/{id}/restart")]
async fn restart_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.sessions.get(&id).await?;
    let mut session = session.lock().await;
    session.restart()?;
    Ok(HttpResponse::Ok().json(SessionView::from(&*session)))
}

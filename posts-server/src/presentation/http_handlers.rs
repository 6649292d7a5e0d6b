use crate::application::PostService;
use crate::domain::post::{CreatePostRequest, UpdatePostRequest};
use crate::domain::{DomainError, PostId};
use actix_web::{error, web, HttpResponse, Responder};
use serde::Serialize;
use std::sync::Arc;

// Every successful response nests its payload under `data`
#[derive(Serialize)]
struct DataEnvelope<T: Serialize> {
    data: T,
}

fn envelope<T: Serialize>(data: T) -> DataEnvelope<T> {
    DataEnvelope { data }
}

fn error_to_response(err: DomainError) -> HttpResponse {
    let status_code = err.to_status_code();
    let message = err.to_string();

    match status_code {
        400 => HttpResponse::BadRequest().json(serde_json::json!({ "error": message })),
        404 => HttpResponse::NotFound().json(serde_json::json!({ "error": message })),
        _ => {
            tracing::error!("Request failed with internal error: {}", message);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Internal server error" }))
        }
    }
}

/// Malformed or incomplete JSON bodies become 400s in the same error shape as other failures.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        tracing::warn!("Rejecting body for {} {}: {}", req.method(), req.path(), err);
        let response = error_to_response(DomainError::ValidationError(err.to_string()));
        error::InternalError::from_response(err, response).into()
    })
}

pub async fn list_posts(post_service: web::Data<Arc<PostService>>) -> impl Responder {
    let posts = post_service.list_posts().await;

    tracing::info!("Listing posts: count={}", posts.len());

    HttpResponse::Ok().json(envelope(posts))
}

pub async fn get_post(
    post_service: web::Data<Arc<PostService>>,
    path: web::Path<String>,
) -> impl Responder {
    let raw_id = path.into_inner();

    tracing::info!("Getting post with id={}", raw_id);

    match post_service.get_post(&raw_id).await {
        Ok(post) => HttpResponse::Ok().json(envelope(post)),
        Err(err) => error_to_response(err),
    }
}

pub async fn create_post(
    post_service: web::Data<Arc<PostService>>,
    post_data: web::Json<CreatePostRequest>,
) -> impl Responder {
    tracing::info!("Creating post, requested id={:?}", post_data.id);

    match post_service.create_post(post_data.into_inner()).await {
        Ok(post) => HttpResponse::Created().json(envelope(post)),
        Err(err) => error_to_response(err),
    }
}

pub async fn update_post(
    post_service: web::Data<Arc<PostService>>,
    path: web::Path<String>,
    post_data: Result<web::Json<UpdatePostRequest>, actix_web::Error>,
) -> impl Responder {
    let raw_id = path.into_inner();

    tracing::info!("Updating post id={}", raw_id);

    // A malformed path id answers 404 even when the body is bad too.
    let post_data = match post_data {
        Ok(post_data) => post_data.into_inner(),
        Err(err) => {
            return match raw_id.parse::<PostId>() {
                Ok(_) => err.error_response(),
                Err(id_err) => error_to_response(id_err),
            }
        }
    };

    match post_service.update_post(&raw_id, post_data).await {
        Ok(post) => HttpResponse::Ok().json(envelope(post)),
        Err(err) => error_to_response(err),
    }
}

pub async fn delete_post(
    post_service: web::Data<Arc<PostService>>,
    path: web::Path<String>,
) -> impl Responder {
    let raw_id = path.into_inner();

    tracing::info!("Deleting post id={}", raw_id);

    match post_service.delete_post(&raw_id).await {
        Ok(deleted) => HttpResponse::Ok().json(envelope(deleted)),
        Err(err) => error_to_response(err),
    }
}

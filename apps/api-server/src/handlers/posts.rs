//! Blog post resource handlers.

use actix_web::{HttpResponse, http::header, web};
use chrono::SecondsFormat;
use uuid::Uuid;

use blog_core::domain::{Author, BlogPost, BlogPostPatch, NewBlogPost};
use blog_core::ports::{BaseRepository, BlogPostRepository};
use blog_core::{DomainError, RepoError};
use blog_shared::dto::{BlogPostResponse, CreateBlogPostRequest, UpdateBlogPostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

const ENTITY: &str = "BlogPost";

/// Public representation; the author is joined here and nowhere else.
fn to_response(post: &BlogPost) -> BlogPostResponse {
    BlogPostResponse {
        id: post.id.to_string(),
        title: post.title.clone(),
        content: post.content.clone(),
        author: post.author.full_name(),
        created: post.created.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// An id that is not a UUID cannot name a stored post.
fn parse_post_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::NotFound(format!("{} with id {} not found", ENTITY, raw)))
}

fn not_found(id: Uuid) -> AppError {
    DomainError::NotFound {
        entity_type: ENTITY,
        id,
    }
    .into()
}

fn store_error(id: Uuid) -> impl FnOnce(RepoError) -> AppError {
    move |err| match err {
        RepoError::NotFound => not_found(id),
        other => other.into(),
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<BlogPostResponse> = posts.iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    let post = state.posts.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(to_response(&post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let new_post = NewBlogPost::new(
        req.title,
        req.content,
        Author::new(req.author.first_name, req.author.last_name),
    );
    new_post.validate()?;

    let post = state.posts.insert(new_post).await?;

    tracing::info!(
        request_id = %request_id.as_str(),
        post_id = %post.id,
        "Created blog post"
    );

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/posts/{}", post.id)))
        .json(to_response(&post)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
    body: web::Json<UpdateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let req = body.into_inner();

    if let Some(body_id) = req.id.as_deref() {
        if Uuid::parse_str(body_id).ok() != Some(id) {
            return Err(AppError::BadRequest(format!(
                "Request path id ({}) and request body id ({}) must match",
                id, body_id
            )));
        }
    }

    let patch = BlogPostPatch {
        title: req.title,
        content: req.content,
    };
    patch.validate()?;

    state
        .posts
        .update_by_id(id, patch)
        .await
        .map_err(store_error(id))?;

    tracing::info!(request_id = %request_id.as_str(), post_id = %id, "Updated blog post");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    state.posts.delete_by_id(id).await.map_err(store_error(id))?;

    tracing::info!(request_id = %request_id.as_str(), post_id = %id, "Deleted blog post");

    Ok(HttpResponse::NoContent().finish())
}

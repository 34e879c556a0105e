//! Maps requests onto the services and service errors onto status codes.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::core::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::service::{
    AppServices, BattleRequest, CreateCharacterRequest, ServiceError, ValidationErrors,
};

type Services = State<Arc<AppServices>>;
type QueryPairs = Query<Vec<(String, String)>>;

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    status: u16,
    title: &'a str,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    errors: &'a [String],
}

/// The API routes. Bodies over `max_body_bytes` are answered with 413.
pub fn router(services: Arc<AppServices>, max_body_bytes: usize) -> Router {
    Router::new()
        .route(
            "/api/characters",
            get(list_characters).post(create_character),
        )
        .route("/api/characters/:id", get(character_detail))
        .route("/api/characters/:id/revive", post(revive_character))
        .route("/api/battle", post(execute_battle))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(services)
}

async fn list_characters(
    State(services): Services,
    Query(query): QueryPairs,
) -> Result<Response, ServiceError> {
    let mut errors = ValidationErrors::new();
    let page = query_u32(&query, "page", DEFAULT_PAGE, &mut errors);
    let page_size = query_u32(&query, "pageSize", DEFAULT_PAGE_SIZE, &mut errors);
    if !errors.is_empty() {
        return Err(errors.into());
    }

    let page = services.characters.list_characters(page, page_size).await?;
    Ok(Json(page).into_response())
}

async fn create_character(
    State(services): Services,
    body: Bytes,
) -> Result<Response, ServiceError> {
    let request: CreateCharacterRequest = parse_body(&body)?;
    let id = services.characters.create_character(&request).await?;

    let location = format!("/api/characters/{}", id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]).into_response())
}

async fn character_detail(
    State(services): Services,
    Path(raw_id): Path<String>,
) -> Result<Response, ServiceError> {
    let Ok(id) = Uuid::parse_str(&raw_id) else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };
    let detail = services.characters.character_detail(id).await?;
    Ok(Json(detail).into_response())
}

async fn revive_character(
    State(services): Services,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ServiceError> {
    let Ok(id) = Uuid::parse_str(&raw_id) else {
        return Ok(StatusCode::NOT_FOUND);
    };
    services.characters.revive_character(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn execute_battle(
    State(services): Services,
    body: Bytes,
) -> Result<Response, ServiceError> {
    let request: BattleRequest = parse_body(&body)?;
    let result = services.battles.execute_battle(&request).await?;
    Ok(Json(result).into_response())
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ServiceError> {
    if body.is_empty() {
        return Err(ValidationErrors::single("A non-empty request body is required.").into());
    }
    serde_json::from_slice(body).map_err(|err| {
        ValidationErrors::single(format!("The request body is invalid: {}", err)).into()
    })
}

/// First value for a query key, matched case-insensitively.
fn query_u32(
    query: &[(String, String)],
    key: &str,
    default: u32,
    errors: &mut ValidationErrors,
) -> u32 {
    let value = query
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v.as_str());

    match value {
        None | Some("") => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            errors.push(format!("The value '{}' is not valid for {}.", raw, key));
            default
        }),
    }
}

pub fn error_response(err: &ServiceError) -> Response {
    let (status, title, errors) = match err {
        ServiceError::Validation(errors) => (
            StatusCode::BAD_REQUEST,
            "One or more validation errors occurred.",
            errors.messages(),
        ),
        ServiceError::NotFound(what) => (StatusCode::NOT_FOUND, what.as_str(), &[][..]),
        ServiceError::Repository(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "An unexpected error occurred.",
            &[][..],
        ),
    };

    let body = ErrorBody {
        status: status.as_u16(),
        title,
        errors,
    };
    (status, Json(body)).into_response()
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        error_response(&self)
    }
}

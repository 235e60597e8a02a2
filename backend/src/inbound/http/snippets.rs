//! Snippet API handlers.
//!
//! ```text
//! GET    /snippets/
//! POST   /snippets/
//! GET    /snippets/{id}/
//! PUT    /snippets/{id}/
//! PATCH  /snippets/{id}/
//! DELETE /snippets/{id}/
//! GET    /snippets/{id}/highlight/
//! ```
//!
//! Reads are open to everyone. Writes require a session, and object-level
//! checks beyond that are the service's concern.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{
    Error, RequestMethod, SnippetDraft, SnippetId, SnippetPatch, SnippetValidationError,
    SnippetView,
};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::{ApiResult, HttpState};

/// Full snippet payload for `POST` and `PUT`.
///
/// The owner never appears here; it is taken from the session.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct SnippetRequestBody {
    #[serde(default)]
    pub title: String,
    /// Required; optional in the DTO so that a missing value surfaces as a
    /// field-level validation error after the permission gates have run.
    pub code: Option<String>,
    #[serde(default)]
    pub linenos: bool,
    /// Highlighting language; defaults to `python`.
    pub language: Option<String>,
    /// Colour scheme; defaults to `friendly`.
    pub style: Option<String>,
}

/// Partial snippet payload for `PATCH`. Absent fields are left untouched.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct SnippetPatchBody {
    pub title: Option<String>,
    pub code: Option<String>,
    pub linenos: Option<bool>,
    pub language: Option<String>,
    pub style: Option<String>,
}

/// Snippet representation returned by every read and write.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SnippetBody {
    /// Canonical URL of this snippet.
    pub url: String,
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    /// URL of the rendered HTML view.
    pub highlight: String,
    pub title: String,
    pub code: String,
    pub linenos: bool,
    pub language: String,
    pub style: String,
    /// Username of the owning user.
    pub owner: String,
    pub created: DateTime<Utc>,
}

impl From<SnippetView> for SnippetBody {
    fn from(view: SnippetView) -> Self {
        let id = view.snippet.id().to_string();
        let url = format!("/snippets/{id}/");
        let highlight = format!("{url}highlight/");
        Self {
            url,
            highlight,
            title: view.snippet.title().to_owned(),
            code: view.snippet.code().to_owned(),
            linenos: view.snippet.linenos(),
            language: view.snippet.language().to_string(),
            style: view.snippet.style().to_string(),
            owner: view.owner.to_string(),
            created: view.snippet.created(),
            id,
        }
    }
}

fn map_validation_error(err: SnippetValidationError) -> Error {
    let (field, code) = match &err {
        SnippetValidationError::TitleTooLong { .. } => ("title", "title_too_long"),
        SnippetValidationError::EmptyCode => ("code", "empty_code"),
        SnippetValidationError::UnknownLanguage { .. } => ("language", "unknown_language"),
        SnippetValidationError::UnknownStyle { .. } => ("style", "unknown_style"),
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field, "code": code }))
}

impl TryFrom<SnippetRequestBody> for SnippetDraft {
    type Error = SnippetValidationError;

    fn try_from(body: SnippetRequestBody) -> Result<Self, Self::Error> {
        let language = body.language.as_deref().unwrap_or("python").parse()?;
        let style = body.style.as_deref().unwrap_or("friendly").parse()?;
        let code = body.code.unwrap_or_default();
        Self::new(body.title, code, body.linenos, language, style)
    }
}

impl TryFrom<SnippetPatchBody> for SnippetPatch {
    type Error = SnippetValidationError;

    fn try_from(body: SnippetPatchBody) -> Result<Self, Self::Error> {
        let language = body.language.as_deref().map(str::parse).transpose()?;
        let style = body.style.as_deref().map(str::parse).transpose()?;
        Self::new(body.title, body.code, body.linenos, language, style)
    }
}

/// An id that is not even a UUID can never name a record, so it reports the
/// same not-found outcome as a missing one.
fn parse_path_id(raw: &str) -> Result<SnippetId, Error> {
    SnippetId::new(raw).map_err(|_| Error::not_found("snippet not found"))
}

/// List all snippets, oldest first.
#[utoipa::path(
    get,
    path = "/snippets/",
    responses(
        (status = 200, description = "Snippets ordered by creation time", body = [SnippetBody]),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["snippets"],
    operation_id = "listSnippets",
    security([])
)]
#[get("/snippets/")]
pub async fn list_snippets(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<SnippetBody>>> {
    let views = state.snippets.list().await?;
    Ok(web::Json(views.into_iter().map(SnippetBody::from).collect()))
}

/// Create a snippet owned by the session user.
#[utoipa::path(
    post,
    path = "/snippets/",
    request_body = SnippetRequestBody,
    responses(
        (status = 201, description = "Snippet created", body = SnippetBody),
        (status = 400, description = "Invalid payload", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 401, description = "Login required", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["snippets"],
    operation_id = "createSnippet"
)]
#[post("/snippets/")]
pub async fn create_snippet(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<SnippetRequestBody>,
) -> ApiResult<HttpResponse> {
    let principal = session.require_user_id()?;
    let draft = SnippetDraft::try_from(payload.into_inner()).map_err(map_validation_error)?;
    let view = state.snippets.create(draft, &principal).await?;
    Ok(HttpResponse::Created().json(SnippetBody::from(view)))
}

/// Fetch one snippet.
#[utoipa::path(
    get,
    path = "/snippets/{id}/",
    params(("id" = String, Path, description = "Snippet id")),
    responses(
        (status = 200, description = "Snippet", body = SnippetBody),
        (status = 404, description = "No such snippet", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["snippets"],
    operation_id = "retrieveSnippet",
    security([])
)]
#[get("/snippets/{id}/")]
pub async fn retrieve_snippet(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<SnippetBody>> {
    let id = parse_path_id(&path)?;
    let view = state.snippets.retrieve(&id).await?;
    Ok(web::Json(SnippetBody::from(view)))
}

/// Replace a snippet. Owner only.
#[utoipa::path(
    put,
    path = "/snippets/{id}/",
    params(("id" = String, Path, description = "Snippet id")),
    request_body = SnippetRequestBody,
    responses(
        (status = 200, description = "Snippet replaced", body = SnippetBody),
        (status = 400, description = "Invalid payload", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 401, description = "Login required", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 403, description = "Not the owner", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "No such snippet", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["snippets"],
    operation_id = "updateSnippet"
)]
#[put("/snippets/{id}/")]
pub async fn update_snippet(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<SnippetRequestBody>,
) -> ApiResult<web::Json<SnippetBody>> {
    let principal = session.require_user_id()?;
    let id = parse_path_id(&path)?;
    state
        .snippets
        .authorize_write(&id, RequestMethod::Put, &principal)
        .await?;
    let draft = SnippetDraft::try_from(payload.into_inner()).map_err(map_validation_error)?;
    let view = state.snippets.update(&id, draft, &principal).await?;
    Ok(web::Json(SnippetBody::from(view)))
}

/// Merge a partial payload into a snippet. Owner only, same rules as PUT.
#[utoipa::path(
    patch,
    path = "/snippets/{id}/",
    params(("id" = String, Path, description = "Snippet id")),
    request_body = SnippetPatchBody,
    responses(
        (status = 200, description = "Snippet updated", body = SnippetBody),
        (status = 400, description = "Invalid payload", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 401, description = "Login required", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 403, description = "Not the owner", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "No such snippet", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["snippets"],
    operation_id = "patchSnippet"
)]
#[patch("/snippets/{id}/")]
pub async fn patch_snippet(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<SnippetPatchBody>,
) -> ApiResult<web::Json<SnippetBody>> {
    let principal = session.require_user_id()?;
    let id = parse_path_id(&path)?;
    state
        .snippets
        .authorize_write(&id, RequestMethod::Patch, &principal)
        .await?;
    let patch = SnippetPatch::try_from(payload.into_inner()).map_err(map_validation_error)?;
    let view = state.snippets.patch(&id, patch, &principal).await?;
    Ok(web::Json(SnippetBody::from(view)))
}

/// Delete a snippet. Owner only; repeating the request reports not-found.
#[utoipa::path(
    delete,
    path = "/snippets/{id}/",
    params(("id" = String, Path, description = "Snippet id")),
    responses(
        (status = 204, description = "Snippet deleted"),
        (status = 401, description = "Login required", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 403, description = "Not the owner", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "No such snippet", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["snippets"],
    operation_id = "deleteSnippet"
)]
#[delete("/snippets/{id}/")]
pub async fn delete_snippet(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let principal = session.require_user_id()?;
    let id = parse_path_id(&path)?;
    state.snippets.destroy(&id, &principal).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Rendered HTML view of a snippet. Read-only, open to everyone.
#[utoipa::path(
    get,
    path = "/snippets/{id}/highlight/",
    params(("id" = String, Path, description = "Snippet id")),
    responses(
        (status = 200, description = "Rendered HTML", content_type = "text/html"),
        (status = 404, description = "No such snippet", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["snippets"],
    operation_id = "highlightSnippet",
    security([])
)]
#[get("/snippets/{id}/highlight/")]
pub async fn highlight_snippet(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path)?;
    let html = state.snippets.highlight(&id).await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}

//! API root listing the top-level collections.

use actix_web::{get, web};
use serde::Serialize;

/// Entry-point body pointing at the two collections.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ApiRoot {
    pub snippets: &'static str,
    pub users: &'static str,
}

/// Entry point for API discovery.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Collection index", body = ApiRoot)
    ),
    tags = ["root"],
    operation_id = "apiRoot",
    security([])
)]
#[get("/")]
pub async fn api_root() -> web::Json<ApiRoot> {
    web::Json(ApiRoot {
        snippets: "/snippets/",
        users: "/users/",
    })
}

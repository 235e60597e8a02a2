//! User API handlers.
//!
//! ```text
//! GET /users/
//! GET /users/{id}/
//! ```
//!
//! The user resource is read-only; accounts are managed by an external
//! identity collaborator. Each representation carries the URLs of the
//! snippets the user owns.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, UserId, UserView};
use crate::inbound::http::{ApiResult, HttpState};

/// User representation with owned-snippet URLs.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserBody {
    /// Canonical URL of this user.
    pub url: String,
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    pub username: String,
    /// URLs of the snippets this user owns, oldest first.
    pub snippets: Vec<String>,
}

impl From<UserView> for UserBody {
    fn from(view: UserView) -> Self {
        let id = view.user.id().to_string();
        Self {
            url: format!("/users/{id}/"),
            username: view.user.username().to_string(),
            snippets: view
                .snippet_ids
                .iter()
                .map(|sid| format!("/snippets/{sid}/"))
                .collect(),
            id,
        }
    }
}

/// List all users, ordered by username.
#[utoipa::path(
    get,
    path = "/users/",
    responses(
        (status = 200, description = "Users ordered by username", body = [UserBody]),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers",
    security([])
)]
#[get("/users/")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserBody>>> {
    let views = state.users.list().await?;
    Ok(web::Json(views.into_iter().map(UserBody::from).collect()))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}/",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = UserBody),
        (status = 404, description = "No such user", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "retrieveUser",
    security([])
)]
#[get("/users/{id}/")]
pub async fn retrieve_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserBody>> {
    let id = UserId::new(path.as_str()).map_err(|_| Error::not_found("user not found"))?;
    let view = state.users.retrieve(&id).await?;
    Ok(web::Json(UserBody::from(view)))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    use super::*;
    use crate::inbound::http::auth::{LoginRequest, login};
    use crate::inbound::http::snippets::create_snippet;
    use crate::inbound::http::test_utils::{seeded_state, test_session_middleware};
    use crate::inbound::http::HttpState;

    fn user_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(test_session_middleware())
            .app_data(web::Data::new(state))
            .service(login)
            .service(create_snippet)
            .service(list_users)
            .service(retrieve_user)
    }

    #[actix_web::test]
    async fn lists_users_with_their_snippet_urls() {
        let (state, users) = seeded_state(&["ada", "grace"]).await;
        let app = test::init_service(user_app(state)).await;

        let login_res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/login/")
                .set_json(LoginRequest {
                    username: "ada".into(),
                    password: "pw".into(),
                })
                .to_request(),
        )
        .await;
        let Some(cookie) = login_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .map(|cookie| cookie.into_owned())
        else {
            panic!("session cookie must be set");
        };
        let create_res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/snippets/")
                .cookie(cookie)
                .set_json(json!({"code": "print(1)"}))
                .to_request(),
        )
        .await;
        assert_eq!(create_res.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(create_res).await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/users/").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        let Some(items) = body.as_array() else {
            panic!("listing must be an array: {body}");
        };
        let names: Vec<&str> = items
            .iter()
            .filter_map(|item| item.get("username").and_then(Value::as_str))
            .collect();
        assert_eq!(names, ["ada", "grace"]);

        let Some(ada_body) = items.first() else {
            panic!("listing must not be empty");
        };
        let snippet_urls = ada_body
            .get("snippets")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        assert_eq!(
            snippet_urls.first().and_then(Value::as_str),
            created.get("url").and_then(Value::as_str)
        );

        // Seeded ids round-trip through the detail route.
        let ada_id = users.first().map(|u| u.id().to_string()).unwrap_or_default();
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/users/{ada_id}/"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn missing_and_malformed_user_ids_are_not_found() {
        let (state, _) = seeded_state(&["ada"]).await;
        let app = test::init_service(user_app(state)).await;
        for uri in [
            "/users/3fa85f64-5717-4562-b3fc-2c963f66afa6/",
            "/users/not-a-uuid/",
        ] {
            let res =
                test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(res.status(), StatusCode::NOT_FOUND, "GET {uri}");
        }
    }
}

//! This module handles the site functions
//! Where all the [axum] handlers etc live

use askama::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use tracing::{error, instrument};

use crate::embed;

#[derive(askama::Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    title: &'static str,
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    title: &'static str,
}

/// Builds the route table for the whole site.
pub fn router() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/index", get(index))
        .route("/static/{*file}", get(embed::static_handler))
        .fallback(embed::not_found)
}

#[instrument]
pub async fn home() -> impl IntoResponse {
    // Once a service layer exists, fetch the page data here and
    // hand it to the template instead of a bare title.
    match (HomeTemplate { title: "Home" }).render() {
        Ok(s) => Html(s).into_response(),
        Err(e) => {
            error!("Error when rendering home html: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[instrument]
pub async fn index() -> impl IntoResponse {
    // Service layer call goes here too, same as `home`.
    match (IndexTemplate { title: "Main website" }).render() {
        Ok(s) => Html(s).into_response(),
        Err(e) => {
            error!("Error when rendering index html: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    async fn send(path: &str) -> (StatusCode, String) {
        let response = router()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn home_page_has_its_title() {
        let (status, body) = send("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Home"));
    }

    #[tokio::test]
    async fn index_page_has_its_title() {
        let (status, body) = send("/index").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Main website"));
    }

    #[tokio::test]
    async fn unknown_path_is_a_404() {
        let (status, body) = send("/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("404"));
    }

    #[tokio::test]
    async fn pages_are_idempotent() {
        let first = send("/").await;
        let second = send("/").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn static_files_are_served() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/static/style.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "text/css"
        );
    }

    #[test]
    fn templates_render_their_title() {
        let home = HomeTemplate { title: "Home" }.render().unwrap();
        assert!(home.contains("<title>Home</title>"));

        let index = IndexTemplate { title: "Main website" }.render().unwrap();
        assert!(index.contains("<title>Main website</title>"));
    }
}

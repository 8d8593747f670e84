use axum::{
	http::{Uri, header::CONTENT_TYPE, StatusCode},
	response::{IntoResponse, Response},
};

#[derive(rust_embed::Embed)]
#[folder = "static/"]
struct Assets;

fn asset(path: &str) -> Option<Response> {
	let content = Assets::get(path)?;
	let mime = mime_guess::from_path(path).first_or_octet_stream();
	Some(([(CONTENT_TYPE, mime.as_ref())], content.data).into_response())
}

pub(crate) async fn static_handler(uri: Uri) -> Response {
	let path = uri
		.path()
		.trim_start_matches('/')
		.trim_start_matches("static/");

	match asset(path) {
		Some(response) => response,
		None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
	}
}

pub(crate) async fn not_found() -> Response {
	match Assets::get("404.html") {
		Some(content) => (
			StatusCode::NOT_FOUND,
			[(CONTENT_TYPE, mime_guess::mime::TEXT_HTML_UTF_8.as_ref())],
			content.data,
		)
			.into_response(),
		None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
	}
}

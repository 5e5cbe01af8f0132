use axum::{
	extract::{Request, State},
	http::{HeaderMap, HeaderValue, Method, StatusCode, header},
	middleware::Next,
	response::{IntoResponse, Response},
};

use crate::{routes::ApiError, state::AppState};

const ALLOWED_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";

/// Answers preflights and stamps the allowed origin on every response.
pub async fn cors(State(state): State<AppState>, request: Request, next: Next) -> Response {
	let Some(origin) = state.cors_allow_origin.clone() else {
		return next.run(request).await;
	};

	if request.method() == Method::OPTIONS {
		let requested_headers =
			request.headers().get(header::ACCESS_CONTROL_REQUEST_HEADERS).cloned();
		let mut response = StatusCode::NO_CONTENT.into_response();
		let headers = response.headers_mut();

		apply_origin(headers, origin);
		headers.insert(
			header::ACCESS_CONTROL_ALLOW_METHODS,
			HeaderValue::from_static(ALLOWED_METHODS),
		);

		if let Some(requested) = requested_headers {
			headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, requested);
		}

		return response;
	}

	let mut response = next.run(request).await;

	apply_origin(response.headers_mut(), origin);

	response
}

/// Turns a handler panic into a generic 500. The panic detail is logged, never returned.
pub async fn catch_panic(request: Request, next: Next) -> Response {
	let path = request.uri().path().to_string();

	match tokio::spawn(next.run(request)).await {
		Ok(response) => response,
		Err(err) => {
			tracing::error!(%path, error = %err, "Request handler failed.");

			ApiError::new(
				StatusCode::INTERNAL_SERVER_ERROR,
				"Internal server error",
				failure_message(&path),
			)
			.into_response()
		},
	}
}

fn apply_origin(headers: &mut HeaderMap, origin: HeaderValue) {
	headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
}

fn failure_message(path: &str) -> &'static str {
	let mut segments = path.trim_start_matches("/api/").split('/');

	match (segments.next(), segments.next()) {
		(Some("search"), _) => "An error occurred while processing your search",
		(Some("cases"), None) => "An error occurred while fetching cases",
		(Some("cases"), Some(_)) => "An error occurred while fetching case details",
		(Some("advocates"), None) => "An error occurred while fetching advocates",
		(Some("advocates"), Some(_)) => "An error occurred while fetching advocate details",
		(Some("suggestions"), _) => "An error occurred while fetching suggestions",
		_ => "An unexpected error occurred",
	}
}

use axum::{
	Form, Json, Router,
	extract::{FromRequest, Path, Request, State},
	http::{HeaderMap, StatusCode, Uri, header},
	middleware as axum_middleware,
	response::{IntoResponse, Response},
	routing::{MethodRouter, get, post},
};
use serde::{Deserialize, Serialize};

use crate::{middleware, state::AppState};
use legalease_service::{
	AdvocateListResponse, AdvocateProfileResponse, CaseDetailResponse, CaseListResponse, Error,
	HealthResponse, SearchRequest, SearchResponse, SuggestionsResponse,
};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/api/health", api(get(health)))
		.route("/api/search", api(post(search)))
		.route("/api/cases", api(get(list_cases)))
		.route("/api/cases/{id}", api(get(get_case)))
		.route("/api/advocates", api(get(list_advocates)))
		.route("/api/advocates/{id}", api(get(get_advocate)))
		.route("/api/suggestions", api(get(suggestions)))
		.fallback(not_found)
		.layer(axum_middleware::from_fn(middleware::catch_panic))
		.layer(axum_middleware::from_fn_with_state(state.clone(), middleware::cors))
		.with_state(state)
}

/// Unsupported methods on a known path are answered like unknown paths.
fn api(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
	route.fallback(not_found)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
	Json(state.service.health())
}

/// Text fields of a form-encoded search body.
#[derive(Debug, Deserialize)]
struct SearchForm {
	query: Option<String>,
}

async fn search(
	State(state): State<AppState>,
	request: Request,
) -> Result<Json<SearchResponse>, ApiError> {
	let payload = if is_form_encoded(request.headers()) {
		Form::<SearchForm>::from_request(request, &state)
			.await
			.map(|Form(form)| SearchRequest::from_text(form.query))
			.map_err(|rejection| rejection.to_string())
	} else {
		Json::<SearchRequest>::from_request(request, &state)
			.await
			.map(|Json(request)| request)
			.map_err(|rejection| rejection.to_string())
	};
	let request = match payload {
		Ok(request) => request,
		Err(rejection) => {
			tracing::debug!(%rejection, "Search body rejected.");

			return Err(Error::MissingQuery.into());
		},
	};
	let response = state.service.search(request)?;

	Ok(Json(response))
}

fn is_form_encoded(headers: &HeaderMap) -> bool {
	headers
		.get(header::CONTENT_TYPE)
		.and_then(|value| value.to_str().ok())
		.and_then(|value| value.split(';').next())
		.is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/x-www-form-urlencoded"))
}

async fn list_cases(State(state): State<AppState>) -> Json<CaseListResponse> {
	Json(state.service.list_cases())
}

async fn get_case(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> Result<Json<CaseDetailResponse>, ApiError> {
	Ok(Json(state.service.get_case(&id)?))
}

async fn list_advocates(State(state): State<AppState>) -> Json<AdvocateListResponse> {
	Json(state.service.list_advocates())
}

async fn get_advocate(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> Result<Json<AdvocateProfileResponse>, ApiError> {
	Ok(Json(state.service.get_advocate(&id)?))
}

async fn suggestions(State(state): State<AppState>) -> Json<SuggestionsResponse> {
	Json(state.service.suggestions())
}

async fn not_found(uri: Uri) -> ApiError {
	ApiError::new(
		StatusCode::NOT_FOUND,
		"API endpoint not found",
		format!("The endpoint {uri} does not exist"),
	)
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error: String,
	message: String,
}
impl ApiError {
	pub fn new(status: StatusCode, error: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error: error.into(), message: message.into() }
	}
}
impl From<Error> for ApiError {
	fn from(err: Error) -> Self {
		match err {
			Error::MissingQuery => ApiError::new(
				StatusCode::BAD_REQUEST,
				"Query parameter is required",
				"Please provide a search query",
			),
			Error::CaseNotFound { .. } =>
				ApiError::new(StatusCode::NOT_FOUND, "Case not found", err.to_string()),
			Error::AdvocateNotFound { .. } =>
				ApiError::new(StatusCode::NOT_FOUND, "Advocate not found", err.to_string()),
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error: self.error, message: self.message };

		(self.status, Json(body)).into_response()
	}
}

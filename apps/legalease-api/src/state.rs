use std::sync::Arc;

use axum::http::HeaderValue;
use color_eyre::eyre;

use legalease_config::Config;
use legalease_service::LegalEaseService;
use legalease_storage::Corpus;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<LegalEaseService>,
	/// Value for `Access-Control-Allow-Origin`; `None` leaves the header off.
	pub cors_allow_origin: Option<HeaderValue>,
}
impl AppState {
	/// Loads the corpus named by `config` and builds the shared service.
	pub fn new(config: Config) -> color_eyre::Result<Self> {
		let corpus = Corpus::load(&config.corpus.path)?;

		tracing::info!(
			path = %config.corpus.path.display(),
			cases = corpus.cases().len(),
			advocates = corpus.advocates().len(),
			"Corpus loaded."
		);

		Self::with_corpus(config, corpus)
	}

	pub fn with_corpus(config: Config, corpus: Corpus) -> color_eyre::Result<Self> {
		let cors_allow_origin = match config.service.cors_allow_origin.as_deref() {
			Some(origin) => Some(HeaderValue::from_str(origin).map_err(|_| {
				eyre::eyre!("service.cors_allow_origin must be a valid header value.")
			})?),
			None => None,
		};
		let service = LegalEaseService::new(config, Arc::new(corpus));

		Ok(Self { service: Arc::new(service), cors_allow_origin })
	}
}

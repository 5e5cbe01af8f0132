pub mod advocates;
pub mod cases;
pub mod health;
pub mod search;
pub mod suggestions;

mod error;

use std::sync::Arc;

pub use advocates::{AdvocateListResponse, AdvocateProfile, AdvocateProfileResponse};
pub use cases::{CaseDetail, CaseDetailResponse, CaseListResponse};
pub use error::{Error, Result};
pub use health::HealthResponse;
use legalease_config::Config;
use legalease_storage::Corpus;
pub use search::{SearchRequest, SearchResponse, SearchResult, ranking::RankingPolicy};
pub use suggestions::SuggestionsResponse;

/// Read-only query surface over a loaded corpus. Cheap to share behind an [`Arc`].
pub struct LegalEaseService {
	pub cfg: Config,
	pub corpus: Arc<Corpus>,
	pub(crate) policy: RankingPolicy,
	pub(crate) recent_cases_preview: usize,
}
impl LegalEaseService {
	pub fn new(cfg: Config, corpus: Arc<Corpus>) -> Self {
		let policy = RankingPolicy::from_config(&cfg);
		let recent_cases_preview = cfg.advocates.recent_cases_preview as usize;

		Self { cfg, corpus, policy, recent_cases_preview }
	}

	pub fn policy(&self) -> &RankingPolicy {
		&self.policy
	}
}

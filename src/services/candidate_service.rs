use uuid::Uuid;

use crate::dto::candidate_dto::{CandidateDetailResponse, CandidateListQuery};
use crate::error::{Error, Result};
use crate::models::candidate::{Candidate, PipelineStatus};
use crate::store::Store;

#[derive(Clone)]
pub struct CandidateService {
    store: Store,
}

impl CandidateService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn list(&self, query: CandidateListQuery) -> Vec<Candidate> {
        filter_candidates(
            self.store.candidates(),
            query.search.as_deref().unwrap_or(""),
            query.status,
        )
    }

    pub fn get_detail(&self, id: Uuid) -> Result<CandidateDetailResponse> {
        let candidate = self
            .store
            .candidates()
            .iter()
            .find(|candidate| candidate.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Candidate {} not found", id)))?;
        let profile = self.store.candidate_profile(id).cloned();
        Ok(CandidateDetailResponse { candidate, profile })
    }
}

/// Search spans name, applied-for position and skills; the status filter
/// is an exact pipeline-stage match.
fn filter_candidates(
    candidates: &[Candidate],
    search: &str,
    status: Option<PipelineStatus>,
) -> Vec<Candidate> {
    let needle = search.to_lowercase();
    candidates
        .iter()
        .filter(|candidate| {
            needle.is_empty()
                || candidate.name.to_lowercase().contains(&needle)
                || candidate.position.to_lowercase().contains(&needle)
                || candidate
                    .skills
                    .iter()
                    .any(|skill| skill.to_lowercase().contains(&needle))
        })
        .filter(|candidate| status.map_or(true, |wanted| candidate.status == wanted))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> CandidateService {
        CandidateService::new(Store::seeded())
    }

    #[test]
    fn empty_query_returns_the_full_list() {
        let service = service();
        let all = service.list(CandidateListQuery::default());
        assert_eq!(all.len(), service.store.candidates().len());
    }

    #[test]
    fn status_filter_matches_exactly() {
        let service = service();
        let screening = service.list(CandidateListQuery {
            search: None,
            status: Some(PipelineStatus::Screening),
        });
        assert_eq!(screening.len(), 1);
        assert_eq!(screening[0].name, "Sarah Johnson");
    }

    #[test]
    fn search_covers_skills() {
        let service = service();
        let figma = service.list(CandidateListQuery {
            search: Some("figma".into()),
            status: None,
        });
        assert_eq!(figma.len(), 1);
        assert_eq!(figma[0].name, "Emily Rodriguez");
    }

    #[test]
    fn detail_includes_profile_when_one_exists() {
        let service = service();
        let sarah = service.store.candidates()[0].clone();
        let detail = service.get_detail(sarah.id).expect("detail");
        assert!(detail.profile.is_some());

        let michael = service.store.candidates()[1].clone();
        let detail = service.get_detail(michael.id).expect("detail");
        assert!(detail.profile.is_none());
    }

    #[test]
    fn unknown_candidate_is_not_found() {
        let service = service();
        assert!(matches!(
            service.get_detail(Uuid::new_v4()),
            Err(Error::NotFound(_))
        ));
    }
}

use crate::dto::assessment_dto::AssessmentListQuery;
use crate::models::assessment::{Assessment, AssessmentKind, AssessmentResult};
use crate::store::Store;

#[derive(Clone)]
pub struct AssessmentService {
    store: Store,
}

impl AssessmentService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn list(&self, query: AssessmentListQuery) -> Vec<Assessment> {
        filter_assessments(
            self.store.assessments(),
            query.search.as_deref().unwrap_or(""),
            query.kind,
        )
    }

    pub fn recent_results(&self) -> Vec<AssessmentResult> {
        self.store.assessment_results().to_vec()
    }
}

fn filter_assessments(
    assessments: &[Assessment],
    search: &str,
    kind: Option<AssessmentKind>,
) -> Vec<Assessment> {
    let needle = search.to_lowercase();
    assessments
        .iter()
        .filter(|assessment| assessment.name.to_lowercase().contains(&needle))
        .filter(|assessment| kind.map_or(true, |wanted| assessment.kind == wanted))
        .cloned()
        .collect()
}

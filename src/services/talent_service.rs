use crate::dto::talent_dto::TalentListQuery;
use crate::models::talent::TalentPoolMember;
use crate::store::Store;

#[derive(Clone)]
pub struct TalentService {
    store: Store,
}

impl TalentService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn list(&self, query: TalentListQuery) -> Vec<TalentPoolMember> {
        filter_talent_pool(self.store.talent_pool(), &query)
    }
}

/// Free-text search spans name, title and skills; each populated filter
/// narrows independently. Location matches by substring (the source
/// filter field is free text), experience is an exact band.
fn filter_talent_pool(members: &[TalentPoolMember], query: &TalentListQuery) -> Vec<TalentPoolMember> {
    let needle = query
        .search
        .as_deref()
        .unwrap_or("")
        .to_lowercase();
    members
        .iter()
        .filter(|member| {
            needle.is_empty()
                || member.name.to_lowercase().contains(&needle)
                || member.title.to_lowercase().contains(&needle)
                || member
                    .skills
                    .iter()
                    .any(|skill| skill.to_lowercase().contains(&needle))
        })
        .filter(|member| {
            query
                .location
                .as_deref()
                .map_or(true, |location| member.location.contains(location))
        })
        .filter(|member| {
            query
                .experience
                .as_deref()
                .map_or(true, |experience| member.experience == experience)
        })
        .filter(|member| {
            query.skill.as_deref().map_or(true, |skill| {
                member
                    .skills
                    .iter()
                    .any(|candidate_skill| candidate_skill.eq_ignore_ascii_case(skill))
            })
        })
        .filter(|member| {
            query
                .availability
                .map_or(true, |availability| member.availability == availability)
        })
        .cloned()
        .collect()
}

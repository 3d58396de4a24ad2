use crate::error::{Error, Result};
use crate::models::content::{FeaturePage, HelpArticle, HelpCategory};
use crate::store::Store;

#[derive(Clone)]
pub struct ContentService {
    store: Store,
}

impl ContentService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn features(&self) -> Vec<FeaturePage> {
        self.store.features().to_vec()
    }

    pub fn feature(&self, slug: &str) -> Result<FeaturePage> {
        self.store
            .features()
            .iter()
            .find(|feature| feature.slug == slug)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Feature {} not found", slug)))
    }

    pub fn help_categories(&self) -> Vec<HelpCategory> {
        self.store.help_categories().to_vec()
    }

    pub fn help_category(&self, slug: &str) -> Result<HelpCategory> {
        self.store
            .help_categories()
            .iter()
            .find(|category| category.slug == slug)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Help category {} not found", slug)))
    }

    pub fn help_article(&self, slug: &str) -> Result<HelpArticle> {
        self.store
            .help_articles()
            .iter()
            .find(|article| article.slug == slug)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Help article {} not found", slug)))
    }
}

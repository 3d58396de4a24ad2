use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSection {
    pub title: String,
    pub body: String,
}

/// A marketing feature page, addressed by slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturePage {
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<FeatureSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpCategory {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub articles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpArticle {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub body: String,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookDto {
    pub id: i32,
    pub title: String,
    pub published_date: DateTime<Utc>,
    pub image_url: Option<String>,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Book payload used both on its own and nested inside author creation.
///
/// `published_date` accepts an RFC 3339 timestamp or a plain `YYYY-MM-DD` date.
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateBookDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub published_date: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: String,
}

pub type UpdateBookDto = CreateBookDto;

impl std::fmt::Debug for CreateBookDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateBookDto")
            .field("title", &self.title)
            .field("published_date", &self.published_date)
            .field("image_url", &self.image_url)
            .field("description", &"<sensitive>")
            .finish()
    }
}

use crate::external_api::tags_api::models::create_tag_request::CreateTagRequest;
use crate::external_api::ApiError;
use crate::slug::derive_slug;

pub const MIN_TITLE_LENGTH: usize = 3;

/// Create-tag form: a title and its read-only derived slug
#[derive(Debug, Clone, Default)]
pub struct TagForm {
    title: String,
}

impl TagForm {
    pub fn new(title: &str) -> Self {
        Self { title: title.to_string() }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> String {
        derive_slug(&self.title)
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        if self.title.chars().count() < MIN_TITLE_LENGTH {
            return Err(ApiError::TitleTooShort(MIN_TITLE_LENGTH));
        }
        Ok(())
    }

    /// Build the `POST /tags` body; new tags start with no videos
    pub fn to_request(&self) -> Result<CreateTagRequest, ApiError> {
        self.validate()?;
        Ok(CreateTagRequest {
            title: self.title.clone(),
            slug: self.slug(),
            amount_of_videos: 0,
        })
    }
}

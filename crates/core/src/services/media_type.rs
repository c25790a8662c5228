//! Media type service.

use techtree_common::AppResult;
use techtree_db::entities::media_type;
use techtree_db::repositories::MediaTypeRepository;

/// Service exposing the media type lookup table.
#[derive(Clone)]
pub struct MediaTypeService {
    media_type_repo: MediaTypeRepository,
}

impl MediaTypeService {
    /// Create a new media type service.
    #[must_use]
    pub const fn new(media_type_repo: MediaTypeRepository) -> Self {
        Self { media_type_repo }
    }

    /// List all media types.
    pub async fn list_all(&self) -> AppResult<Vec<media_type::Model>> {
        self.media_type_repo.find_all().await
    }
}

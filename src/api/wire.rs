//! Wire format of the image search API.
//!
//! These types mirror the JSON returned by `GET /search/photos` on an
//! Unsplash-compatible API. They are kept separate from the domain models so
//! a change in the API's field names never leaks into the controller.
//!
//! ```json
//! {
//!   "total": 133,
//!   "total_pages": 12,
//!   "results": [{
//!     "id": "eOLpJytrbsQ",
//!     "width": 4000, "height": 3000, "likes": 12,
//!     "color": "#A7A2A1",
//!     "description": "A man drinking a coffee.",
//!     "alt_description": "man holding cup",
//!     "urls": { "small": "https://…", "regular": "https://…" },
//!     "user": { "name": "Jane Doe", "username": "jdoe" }
//!   }]
//! }
//! ```

use crate::domain::{ImageRecord, SearchPage};
use serde::Deserialize;

/// Successful search response body.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub results: Vec<Photo>,
}

/// One photo entry in [`SearchResponse::results`].
#[derive(Debug, Deserialize)]
pub struct Photo {
    pub id: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub likes: u32,
    pub color: Option<String>,
    pub description: Option<String>,
    pub alt_description: Option<String>,
    pub urls: PhotoUrls,
    pub user: Option<PhotoUser>,
}

/// Rendition URLs of a photo. Only the two the gallery uses are decoded.
#[derive(Debug, Deserialize)]
pub struct PhotoUrls {
    pub small: String,
    pub regular: String,
}

/// Photographer attribution.
#[derive(Debug, Deserialize)]
pub struct PhotoUser {
    pub name: Option<String>,
    pub username: Option<String>,
}

/// Error body returned with non-success statuses.
///
/// ```json
/// { "errors": ["OAuth error: The access token is invalid"] }
/// ```
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Vec<String>,
}

impl From<Photo> for ImageRecord {
    fn from(photo: Photo) -> Self {
        let (author, author_handle) = photo
            .user
            .map_or((None, None), |user| (user.name, user.username));

        Self {
            id: photo.id,
            alt_text: photo.alt_description.unwrap_or_default(),
            description: photo.description,
            thumb_url: photo.urls.small,
            full_url: photo.urls.regular,
            author,
            author_handle,
            width: photo.width,
            height: photo.height,
            likes: photo.likes,
            color: photo.color,
        }
    }
}

impl From<SearchResponse> for SearchPage {
    fn from(response: SearchResponse) -> Self {
        Self {
            images: response.results.into_iter().map(ImageRecord::from).collect(),
            total_pages: response.total_pages,
            total: response.total,
        }
    }
}

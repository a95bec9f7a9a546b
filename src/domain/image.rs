//! Image record domain model.
//!
//! This module defines [`ImageRecord`], one search result as the gallery
//! shows it, and [`SearchPage`], the slice of results returned for a single
//! page request. Both are independent of the wire format spoken by the image
//! API (see [`crate::api::wire`]).

/// Title shown for images that carry neither alt text nor a description.
const UNTITLED: &str = "Untitled image";

/// One image search result.
///
/// # Fields
///
/// - `id`: Identifier assigned by the image API
/// - `alt_text`: Accessible description, may be empty
/// - `description`: Optional photographer-supplied caption
/// - `thumb_url`: Small rendition used in gallery listings
/// - `full_url`: Large rendition opened from the modal
/// - `author` / `author_handle`: Photographer display name and username
/// - `width` / `height`: Original pixel dimensions
/// - `likes`: Like counter reported by the API
/// - `color`: Dominant colour as a `#rrggbb` hex string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub id: String,
    pub alt_text: String,
    pub description: Option<String>,
    pub thumb_url: String,
    pub full_url: String,
    pub author: Option<String>,
    pub author_handle: Option<String>,
    pub width: u32,
    pub height: u32,
    pub likes: u32,
    pub color: Option<String>,
}

impl ImageRecord {
    /// Creates a record with only the fields every result is guaranteed to have.
    ///
    /// # Examples
    ///
    /// ```
    /// use zallery::ImageRecord;
    ///
    /// let image = ImageRecord::new("abc", "a cat on a sofa", "https://t/abc", "https://f/abc");
    /// assert_eq!(image.title(), "a cat on a sofa");
    /// assert!(image.author.is_none());
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        alt_text: impl Into<String>,
        thumb_url: impl Into<String>,
        full_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            alt_text: alt_text.into(),
            description: None,
            thumb_url: thumb_url.into(),
            full_url: full_url.into(),
            author: None,
            author_handle: None,
            width: 0,
            height: 0,
            likes: 0,
            color: None,
        }
    }

    /// Returns the best available human title.
    ///
    /// Prefers the alt text, then the description, then a fixed placeholder.
    #[must_use]
    pub fn title(&self) -> &str {
        let alt = self.alt_text.trim();
        if !alt.is_empty() {
            return alt;
        }
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(UNTITLED)
    }

    /// Returns `"{width}×{height}"`, or an empty string when unknown.
    #[must_use]
    pub fn dimensions(&self) -> String {
        if self.width == 0 || self.height == 0 {
            String::new()
        } else {
            format!("{}×{}", self.width, self.height)
        }
    }

    /// Returns the photographer credit, e.g. `"Jane Doe (@jdoe)"`.
    #[must_use]
    pub fn credit(&self) -> String {
        match (&self.author, &self.author_handle) {
            (Some(name), Some(handle)) => format!("{name} (@{handle})"),
            (Some(name), None) => name.clone(),
            (None, Some(handle)) => format!("@{handle}"),
            (None, None) => "unknown".to_string(),
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPage {
    /// Records on this page in API order.
    pub images: Vec<ImageRecord>,
    /// Number of pages the API reports for the whole query.
    pub total_pages: u32,
    /// Number of matching images across all pages.
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_falls_back_to_description_then_placeholder() {
        let mut image = ImageRecord::new("1", "  ", "t", "f");
        assert_eq!(image.title(), UNTITLED);

        image.description = Some("Sunset over the bay".into());
        assert_eq!(image.title(), "Sunset over the bay");

        image.alt_text = "orange sky".into();
        assert_eq!(image.title(), "orange sky");
    }

    #[test]
    fn dimensions_hidden_when_unknown() {
        let mut image = ImageRecord::new("1", "x", "t", "f");
        assert_eq!(image.dimensions(), "");
        image.width = 4000;
        image.height = 3000;
        assert_eq!(image.dimensions(), "4000×3000");
    }

    #[test]
    fn credit_combines_name_and_handle() {
        let mut image = ImageRecord::new("1", "x", "t", "f");
        assert_eq!(image.credit(), "unknown");
        image.author_handle = Some("jdoe".into());
        assert_eq!(image.credit(), "@jdoe");
        image.author = Some("Jane Doe".into());
        assert_eq!(image.credit(), "Jane Doe (@jdoe)");
    }
}

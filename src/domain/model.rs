use serde::{Deserialize, Serialize};

/// Fallback cover image shown when a volume carries no thumbnail.
pub const PLACEHOLDER_THUMBNAIL: &str = "https://via.placeholder.com/100";

/// Wire shape of a catalog search response. `items` is absent when the query
/// matched nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolumeList {
    #[serde(default)]
    pub items: Vec<Volume>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    #[serde(default)]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub categories: Option<Vec<String>>,
    pub authors: Option<Vec<String>>,
    pub image_links: Option<ImageLinks>,
    pub info_link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageLinks {
    pub thumbnail: Option<String>,
    pub small_thumbnail: Option<String>,
}

impl VolumeInfo {
    /// First category label, lowercased. Volumes without categories all share
    /// the "unknown" bucket.
    pub fn primary_category(&self) -> String {
        self.categories
            .as_deref()
            .and_then(|categories| categories.first())
            .map(|category| category.to_lowercase())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Render-ready projection of a volume with all display fallbacks applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCard {
    pub title: String,
    pub link: String,
    pub thumbnail: String,
    pub authors: String,
}

impl From<&Volume> for BookCard {
    fn from(volume: &Volume) -> Self {
        let info = &volume.volume_info;
        Self {
            title: info.title.clone().unwrap_or_else(|| "Untitled".to_string()),
            link: info.info_link.clone().unwrap_or_else(|| "#".to_string()),
            thumbnail: info
                .image_links
                .as_ref()
                .and_then(|links| links.thumbnail.clone())
                .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string()),
            authors: match info.authors.as_deref() {
                Some([]) | None => "Unknown".to_string(),
                Some(authors) => authors.join(", "),
            },
        }
    }
}

/// Outcome of the curation stage: either a batch ready for rendering or the
/// too-few-survivors signal that asks the engine for a fresh fetch.
#[derive(Debug, Clone)]
pub enum CurationOutcome {
    Selected(Vec<Volume>),
    TooFew { survivors: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_category_lowercases_first_label() {
        let info = VolumeInfo {
            categories: Some(vec!["Fiction".to_string(), "Humor".to_string()]),
            ..VolumeInfo::default()
        };
        assert_eq!(info.primary_category(), "fiction");
    }

    #[test]
    fn test_primary_category_defaults_to_unknown() {
        assert_eq!(VolumeInfo::default().primary_category(), "unknown");

        let empty = VolumeInfo {
            categories: Some(vec![]),
            ..VolumeInfo::default()
        };
        assert_eq!(empty.primary_category(), "unknown");
    }

    #[test]
    fn test_book_card_applies_all_fallbacks() {
        let card = BookCard::from(&Volume::default());

        assert_eq!(card.title, "Untitled");
        assert_eq!(card.link, "#");
        assert_eq!(card.thumbnail, PLACEHOLDER_THUMBNAIL);
        assert_eq!(card.authors, "Unknown");
    }

    #[test]
    fn test_book_card_joins_authors() {
        let volume = Volume {
            volume_info: VolumeInfo {
                title: Some("The Laughing Atlas".to_string()),
                authors: Some(vec!["A. Author".to_string(), "B. Writer".to_string()]),
                info_link: Some("https://books.example/atlas".to_string()),
                ..VolumeInfo::default()
            },
        };

        let card = BookCard::from(&volume);
        assert_eq!(card.title, "The Laughing Atlas");
        assert_eq!(card.link, "https://books.example/atlas");
        assert_eq!(card.authors, "A. Author, B. Writer");
    }

    #[test]
    fn test_volume_list_deserializes_without_items() {
        let parsed: VolumeList = serde_json::from_str("{}").unwrap();
        assert!(parsed.items.is_empty());
    }

    #[test]
    fn test_volume_deserializes_camel_case_fields() {
        let json = serde_json::json!({
            "volumeInfo": {
                "title": "Sky Pirates",
                "imageLinks": { "thumbnail": "https://img.example/t.png" },
                "infoLink": "https://books.example/sky"
            }
        });

        let volume: Volume = serde_json::from_value(json).unwrap();
        assert_eq!(volume.volume_info.title.as_deref(), Some("Sky Pirates"));
        assert_eq!(
            volume
                .volume_info
                .image_links
                .as_ref()
                .and_then(|links| links.thumbnail.as_deref()),
            Some("https://img.example/t.png")
        );
        assert_eq!(
            volume.volume_info.info_link.as_deref(),
            Some("https://books.example/sky")
        );
    }
}

use crate::domain::model::Volume;

/// Substrings that disqualify a volume wherever they appear in its text.
pub const BLACKLIST: &[&str] = &[
    "politics",
    "political",
    "dark",
    "biography",
    "biographies",
    "studies",
    "encyclopedia",
    "encyclopedias",
    "science",
    "grammar",
    "vocabulary",
    "poetry",
    "dictionary",
    "sex",
];

/// Classifies single volumes as acceptable or blacklisted. Pure, never fails:
/// missing fields are treated as empty text.
#[derive(Debug, Clone)]
pub struct ContentFilter {
    blacklist: &'static [&'static str],
}

impl ContentFilter {
    pub fn new() -> Self {
        Self {
            blacklist: BLACKLIST,
        }
    }

    /// True when any banned keyword appears case-insensitively in the title,
    /// description, or joined category labels.
    pub fn is_blacklisted(&self, volume: &Volume) -> bool {
        let info = &volume.volume_info;
        let title = info.title.as_deref().unwrap_or("").to_lowercase();
        let description = info.description.as_deref().unwrap_or("").to_lowercase();
        let categories = info
            .categories
            .as_deref()
            .map(|labels| labels.join(" ").to_lowercase())
            .unwrap_or_default();

        self.blacklist.iter().any(|&keyword| {
            title.contains(keyword)
                || description.contains(keyword)
                || categories.contains(keyword)
        })
    }
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::VolumeInfo;

    fn volume(title: Option<&str>, description: Option<&str>, categories: Option<&[&str]>) -> Volume {
        Volume {
            volume_info: VolumeInfo {
                title: title.map(str::to_string),
                description: description.map(str::to_string),
                categories: categories
                    .map(|labels| labels.iter().map(|label| label.to_string()).collect()),
                ..VolumeInfo::default()
            },
        }
    }

    #[test]
    fn test_flags_banned_keyword_in_title() {
        let filter = ContentFilter::new();
        assert!(filter.is_blacklisted(&volume(Some("Dark Secrets"), None, None)));
    }

    #[test]
    fn test_flags_banned_keyword_in_description() {
        let filter = ContentFilter::new();
        let book = volume(
            Some("Harmless Title"),
            Some("An award-winning BIOGRAPHY of a sailor"),
            None,
        );
        assert!(filter.is_blacklisted(&book));
    }

    #[test]
    fn test_flags_banned_keyword_in_categories() {
        let filter = ContentFilter::new();
        let book = volume(
            Some("Harmless Title"),
            None,
            Some(&["Political Science", "History"]),
        );
        assert!(filter.is_blacklisted(&book));
    }

    #[test]
    fn test_passes_volume_with_no_fields() {
        let filter = ContentFilter::new();
        assert!(!filter.is_blacklisted(&volume(None, None, None)));
    }

    #[test]
    fn test_passes_innocuous_volume() {
        let filter = ContentFilter::new();
        let book = volume(
            Some("The Cheerful Lighthouse"),
            Some("A whimsical seaside romp"),
            Some(&["Fiction"]),
        );
        assert!(!filter.is_blacklisted(&book));
    }

    #[test]
    fn test_matching_is_substring_based() {
        // "darkness" contains "dark", so it is rejected too
        let filter = ContentFilter::new();
        assert!(filter.is_blacklisted(&volume(Some("Into the Darkness"), None, None)));
    }
}

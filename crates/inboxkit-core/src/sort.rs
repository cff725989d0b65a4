use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::controls::NamedControl;
use crate::record::Record;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [Self::Newest, Self::Oldest, Self::TitleAsc, Self::TitleDesc];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Newest => "Newest first",
            Self::Oldest => "Oldest first",
            Self::TitleAsc => "Title A-Z",
            Self::TitleDesc => "Title Z-A",
        }
    }

    /// Total order for one partition: the key's comparator, then `id` ascending.
    pub fn compare<R: Record>(&self, a: &R, b: &R) -> Ordering {
        let primary = match self {
            // None sorts as the oldest possible timestamp.
            Self::Newest => b.timestamp().cmp(&a.timestamp()),
            Self::Oldest => a.timestamp().cmp(&b.timestamp()),
            Self::TitleAsc => collate(a.title(), b.title()),
            Self::TitleDesc => collate(b.title(), a.title()),
        };
        primary.then_with(|| a.id().cmp(b.id()))
    }
}

impl NamedControl for SortKey {
    const KIND: &'static str = "sort key";

    fn name(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::TitleAsc => "titleAsc",
            Self::TitleDesc => "titleDesc",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

/// Title collation: accent- and case-folded text first, then case-folded,
/// then raw text as the final tie-breaker.
///
/// "École" sorts between "apple" and "Zebra", and "apple" sits next to "Apple".
pub fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Canonical decomposition with combining marks dropped, lowercased.
fn collation_key(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collate_ignores_case_first() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Zebra", "apple"), Ordering::Greater);
        assert_eq!(collate("Apple", "apple"), Ordering::Less);
        assert_eq!(collate("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_collate_folds_accents() {
        assert_eq!(collate("École schedule", "Zebra report"), Ordering::Less);
        assert_eq!(collate("apple", "École schedule"), Ordering::Less);
        assert_eq!(collate("Ångström", "Angstrom"), Ordering::Greater);
        assert_eq!(collate("résumé", "resume"), Ordering::Greater);
        assert_eq!(collate("resumes", "résumé"), Ordering::Greater);
    }

    #[test]
    fn test_sort_key_names() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_name(key.name()), Some(key));
        }
        assert_eq!(SortKey::from_name("loudest"), None);
        assert_eq!(SortKey::default(), SortKey::Newest);
    }

    #[test]
    fn test_sort_key_serde_names_match_control_names() {
        for key in SortKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.name()));
        }
    }
}

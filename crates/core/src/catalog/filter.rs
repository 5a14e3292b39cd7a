//! Pure in-memory filters over a catalog snapshot.
//!
//! These mirror what the browsing screens do client-side: case-insensitive
//! title search and exact (case-insensitive) genre matching.

use super::CatalogItem;

/// Keep items whose title contains `needle`, case-insensitively.
///
/// A blank needle keeps everything.
pub fn filter_by_title(items: Vec<CatalogItem>, needle: &str) -> Vec<CatalogItem> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.title.to_lowercase().contains(&needle))
        .collect()
}

/// Keep items whose genre equals `genre`, case-insensitively.
///
/// Items without a genre never match. A blank genre keeps everything.
pub fn filter_by_genre(items: Vec<CatalogItem>, genre: &str) -> Vec<CatalogItem> {
    let genre = genre.trim().to_lowercase();
    if genre.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.genre_lower().as_deref() == Some(genre.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemKind;

    fn item(id: &str, title: &str, genre: Option<&str>) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            title: title.to_string(),
            genre: genre.map(String::from),
            kind: ItemKind::Game,
            thumbnail: None,
            short_description: None,
            platform: None,
            url: None,
            worth: None,
            end_date: None,
        }
    }

    fn sample() -> Vec<CatalogItem> {
        vec![
            item("1", "Overwatch Legacy", Some("Shooter")),
            item("2", "Dota Arena", Some("MOBA")),
            item("3", "Kart Blitz", Some("Racing")),
            item("4", "Watchers", None),
        ]
    }

    #[test]
    fn test_title_filter_case_insensitive() {
        let out = filter_by_title(sample(), "WATCH");
        let ids: Vec<_> = out.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn test_title_filter_blank_keeps_all() {
        assert_eq!(filter_by_title(sample(), "  ").len(), 4);
    }

    #[test]
    fn test_title_filter_no_match() {
        assert!(filter_by_title(sample(), "zzz").is_empty());
    }

    #[test]
    fn test_genre_filter_exact_case_insensitive() {
        let out = filter_by_genre(sample(), "shooter");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "1");
    }

    #[test]
    fn test_genre_filter_skips_genreless() {
        // Item 4 has no genre and must never match.
        assert!(filter_by_genre(sample(), "none").is_empty());
    }

    #[test]
    fn test_genre_filter_blank_keeps_all() {
        assert_eq!(filter_by_genre(sample(), "").len(), 4);
    }
}

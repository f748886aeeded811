/// Tag frequency counting and facet selection
use crate::bookmark::Bookmark;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashMap;

/// Tags ranked for the facet strip
pub const TOP_TAG_COUNT: usize = 6;

/// Tags the facet strip actually renders
pub const FACET_DISPLAY_COUNT: usize = 5;

/// Tag occurrence counts in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagCounts {
    entries: Vec<(String, usize)>,
}

impl TagCounts {
    pub fn get(&self, tag: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when no tag repeats anywhere (also true for an empty table).
    pub fn all_unique(&self) -> bool {
        self.entries.iter().all(|(_, count)| *count == 1)
    }
}

/// Count tag occurrences across all bookmarks
pub fn count_tags(bookmarks: &[Bookmark]) -> TagCounts {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<(String, usize)> = Vec::new();

    for tag in bookmarks.iter().flat_map(|bm| bm.tags.iter()) {
        match index.get(tag.as_str()) {
            Some(&pos) => entries[pos].1 += 1,
            None => {
                index.insert(tag.as_str(), entries.len());
                entries.push((tag.clone(), 1));
            }
        }
    }

    TagCounts { entries }
}

/// Pick up to `n` representative tags.
///
/// Tags are ordered by count descending, ties keeping first-seen order.
/// When every tag occurs exactly once the ordering carries no signal, so
/// `n` tags are drawn uniformly at random without replacement instead.
pub fn rank_tags<R: Rng + ?Sized>(counts: &TagCounts, n: usize, rng: &mut R) -> Vec<String> {
    let mut ranked = counts.entries.clone();

    if counts.all_unique() {
        ranked.shuffle(rng);
    } else {
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
    }

    ranked.into_iter().take(n).map(|(tag, _)| tag).collect()
}

/// Top tags for the facet strip
pub fn top_tags<R: Rng + ?Sized>(bookmarks: &[Bookmark], rng: &mut R) -> Vec<String> {
    rank_tags(&count_tags(bookmarks), TOP_TAG_COUNT, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn tagged(link: &str, tags: &[&str]) -> Bookmark {
        let mut bookmark = Bookmark::new(link, "");
        bookmark.tags = tags.iter().map(|t| t.to_string()).collect();
        bookmark
    }

    #[test]
    fn test_count_tags() {
        let bookmarks = vec![
            tagged("a", &["rust", "wasm"]),
            tagged("b", &["rust", "yew"]),
            tagged("c", &["rust", "wasm"]),
            tagged("d", &[]),
        ];

        let counts = count_tags(&bookmarks);

        assert_eq!(counts.get("rust"), Some(3));
        assert_eq!(counts.get("wasm"), Some(2));
        assert_eq!(counts.get("yew"), Some(1));
        assert_eq!(counts.get("go"), None);
        assert_eq!(counts.len(), 3);
        assert!(!counts.all_unique());
    }

    #[test]
    fn test_rank_by_frequency() {
        let bookmarks = vec![
            tagged("a", &["ai", "news"]),
            tagged("b", &["rust", "ai"]),
            tagged("c", &["rust", "ai", "db"]),
            tagged("d", &["rust"]),
        ];
        let mut rng = StdRng::seed_from_u64(7);

        let top = top_tags(&bookmarks, &mut rng);

        // ai and rust tie at 3; ai was seen first
        assert_eq!(top, vec!["ai", "rust", "news", "db"]);
    }

    #[test]
    fn test_rank_truncates_to_six() {
        let bookmarks: Vec<Bookmark> = (0..3)
            .map(|i| tagged(&format!("bm{}", i), &["a", "b", "c", "d", "e", "f", "g", "h"]))
            .collect();
        let mut rng = StdRng::seed_from_u64(1);

        let top = top_tags(&bookmarks, &mut rng);

        assert_eq!(top, vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_top_tag_has_highest_count() {
        let bookmarks = vec![
            tagged("a", &["x", "y"]),
            tagged("b", &["z", "y"]),
            tagged("c", &["w", "y", "z"]),
        ];
        let counts = count_tags(&bookmarks);
        let mut rng = StdRng::seed_from_u64(3);

        let top = rank_tags(&counts, TOP_TAG_COUNT, &mut rng);
        let best = counts.get(&top[0]).unwrap();

        assert!(["x", "y", "z", "w"].iter().all(|t| counts.get(t).unwrap() <= best));
        assert_eq!(top[0], "y");
    }

    #[test]
    fn test_all_unique_samples_without_replacement() {
        let names = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
        let bookmarks: Vec<Bookmark> = names.iter().map(|t| tagged(t, &[*t])).collect();
        let counts = count_tags(&bookmarks);
        assert!(counts.all_unique());

        let mut rng = StdRng::seed_from_u64(42);
        let top = rank_tags(&counts, TOP_TAG_COUNT, &mut rng);

        assert_eq!(top.len(), 6);
        let distinct: HashSet<&String> = top.iter().collect();
        assert_eq!(distinct.len(), 6);
        assert!(top.iter().all(|t| names.contains(&t.as_str())));
    }

    #[test]
    fn test_all_unique_is_reproducible_with_same_seed() {
        let bookmarks: Vec<Bookmark> = (0..12)
            .map(|i| tagged(&format!("bm{}", i), &[format!("tag{}", i).as_str()]))
            .collect();

        let first = top_tags(&bookmarks, &mut StdRng::seed_from_u64(99));
        let second = top_tags(&bookmarks, &mut StdRng::seed_from_u64(99));

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(top_tags(&[], &mut rng).is_empty());
        assert!(top_tags(&[tagged("a", &[])], &mut rng).is_empty());
    }
}

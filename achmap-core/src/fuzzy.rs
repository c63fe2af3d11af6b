//! Fold-insensitive fuzzy ranking
//!
//! A target matches when every character of the source occurs in it, in
//! order, after both sides are case-folded. Accents are significant.
//! Matches are scored by Levenshtein distance between the source and the
//! unfolded target, lower is better.

/// One ranked candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rank<'a> {
    /// The candidate string as it appears in the corpus
    pub target: &'a str,
    /// Edit distance from the source, lower is better
    pub distance: usize,
    /// Position of the candidate in the input `targets` slice
    pub original_index: usize,
}

/// Case fold only, "É" and "é" compare equal but "é" and "e" do not
pub fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// True when `needle` is a character subsequence of `haystack`
pub fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut remaining = haystack.chars();
    needle.chars().all(|c| remaining.any(|h| h == c))
}

/// Rank every matching target, best first.
///
/// The sort is stable, so equal distances keep corpus order and the
/// earliest entry wins ties.
pub fn rank_find_fold<'a, S: AsRef<str>>(source: &str, targets: &'a [S]) -> Vec<Rank<'a>> {
    let folded_source = fold(source);

    let mut ranks: Vec<Rank<'a>> = targets
        .iter()
        .enumerate()
        .filter_map(|(original_index, target)| {
            let target = target.as_ref();
            if !is_subsequence(&folded_source, &fold(target)) {
                return None;
            }
            Some(Rank {
                target,
                distance: strsim::levenshtein(source, target),
                original_index,
            })
        })
        .collect();

    ranks.sort_by_key(|rank| rank.distance);
    ranks
}

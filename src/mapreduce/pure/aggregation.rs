//! Pure fold of partial counts into the global count map

use super::counting::merge_counts;
use crate::mapreduce::types::WordCounts;

/// Fold partial count maps into one global map
///
/// Starts from an empty map and merges partials in whatever order they are
/// presented. The result does not depend on that order.
pub fn aggregate<I>(partials: I) -> WordCounts
where
    I: IntoIterator<Item = WordCounts>,
{
    partials.into_iter().fold(WordCounts::new(), merge_counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapreduce::pure::counting::count_words;

    #[test]
    fn test_aggregate_empty_collection() {
        assert!(aggregate(Vec::new()).is_empty());
    }

    #[test]
    fn test_aggregate_matches_unchunked_count() {
        let partials = vec![
            count_words("the cat sat "),
            count_words("on the mat "),
            count_words("the cat ran"),
        ];
        let global = aggregate(partials);
        assert_eq!(global, count_words("the cat sat on the mat the cat ran"));
    }

    #[test]
    fn test_aggregate_order_independent() {
        let partials = vec![count_words("a b"), count_words("b c"), count_words("c c d")];
        let forward = aggregate(partials.clone());
        let backward = aggregate(partials.into_iter().rev());
        assert_eq!(forward, backward);
        assert_eq!(forward.get("c"), 3);
    }
}

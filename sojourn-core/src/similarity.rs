//! Set-overlap similarity.

use std::collections::BTreeSet;

/// Jaccard overlap between two sets: `|A ∩ B| / |A ∪ B|`.
///
/// Two empty sets share nothing, so the empty union yields `0.0` rather
/// than a division error.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use sojourn_core::jaccard;
///
/// let a: BTreeSet<_> = ["nature", "food"].map(str::to_owned).into();
/// let b: BTreeSet<_> = ["food", "art"].map(str::to_owned).into();
///
/// assert_eq!(jaccard(&a, &a), 1.0);
/// assert_eq!(jaccard(&a, &b), 1.0 / 3.0);
/// assert_eq!(jaccard(&BTreeSet::<String>::new(), &BTreeSet::new()), 0.0);
/// ```
pub fn jaccard<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> f32 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 0.0;
    }
    intersection as f32 / union as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|item| (*item).to_owned()).collect()
    }

    #[rstest]
    fn identical_non_empty_sets_score_one() {
        let a = set(&["nature", "hiking"]);
        assert_eq!(jaccard(&a, &a), 1.0);
    }

    #[rstest]
    fn both_empty_scores_zero() {
        assert_eq!(jaccard(&BTreeSet::<String>::new(), &BTreeSet::new()), 0.0);
    }

    #[rstest]
    fn one_empty_scores_zero() {
        assert_eq!(jaccard(&set(&["nature"]), &BTreeSet::new()), 0.0);
    }

    #[rstest]
    fn overlap_is_symmetric() {
        let a = set(&["nature", "food", "art"]);
        let b = set(&["food"]);
        assert_eq!(jaccard(&a, &b), jaccard(&b, &a));
        assert_eq!(jaccard(&a, &b), 1.0 / 3.0);
    }
}

//! Candidate ranking with a single-slot memo.
//!
//! Scoring a candidate is pure and cheap, but callers tend to re-request
//! the same ranking many times in a row (every screen refresh), so the
//! ranker memoises the most recent result. The memo key is the ordered
//! candidate identity list plus the traveller's interest set — the only
//! inputs whose change invalidates a cached ranking.
#![forbid(unsafe_code)]

use std::collections::BTreeSet;
use std::sync::Mutex;

use sojourn_core::{Candidate, DestinationScorer, ScoredPlace, TravellerProfile};

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    place_ids: Vec<String>,
    interests: BTreeSet<String>,
}

impl CacheKey {
    fn for_request(candidates: &[Candidate], traveller: &TravellerProfile) -> Self {
        Self {
            place_ids: candidates
                .iter()
                .map(|candidate| candidate.place.id.clone())
                .collect(),
            interests: traveller.interests().clone(),
        }
    }
}

#[derive(Debug)]
struct CacheEntry {
    key: CacheKey,
    ranking: Vec<ScoredPlace>,
}

/// Rank candidates with a scoring strategy, best first.
///
/// Sorting is stable, so candidates with equal scores keep their input
/// order. The ranker holds no other state and can be shared across
/// threads.
///
/// # Examples
/// ```
/// use sojourn_core::{Candidate, Place, TravellerProfile};
/// use sojourn_scorer::{RecommendationRanker, WeightedFuzzyScorer};
///
/// let ranker = RecommendationRanker::new(WeightedFuzzyScorer);
/// let candidates = vec![
///     Candidate::new(Place::default(), 6.0),
///     Candidate::new(Place::default(), 0.5),
/// ];
/// let ranked = ranker.rank(&candidates, &TravellerProfile::new());
/// assert!(ranked[0].score >= ranked[1].score);
/// ```
#[derive(Debug)]
pub struct RecommendationRanker<S> {
    scorer: S,
    cache: Mutex<Option<CacheEntry>>,
}

impl<S: DestinationScorer> RecommendationRanker<S> {
    /// Wrap a scoring strategy.
    pub const fn new(scorer: S) -> Self {
        Self {
            scorer,
            cache: Mutex::new(None),
        }
    }

    /// Borrow the underlying strategy.
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Score every candidate and return them sorted descending by score.
    #[must_use]
    pub fn rank(&self, candidates: &[Candidate], traveller: &TravellerProfile) -> Vec<ScoredPlace> {
        let key = CacheKey::for_request(candidates, traveller);
        if let Some(ranking) = self.cached(&key) {
            log::debug!(
                "ranking cache hit for {} candidates",
                key.place_ids.len()
            );
            return ranking;
        }
        log::debug!("ranking {} candidates", key.place_ids.len());
        let ranking = self.compute(candidates, traveller);
        self.store(key, ranking.clone());
        ranking
    }

    fn cached(&self, key: &CacheKey) -> Option<Vec<ScoredPlace>> {
        // A poisoned lock degrades to recomputation; it never fails a rank.
        let guard = self.cache.lock().ok()?;
        guard
            .as_ref()
            .filter(|entry| entry.key == *key)
            .map(|entry| entry.ranking.clone())
    }

    fn compute(&self, candidates: &[Candidate], traveller: &TravellerProfile) -> Vec<ScoredPlace> {
        let mut ranking: Vec<ScoredPlace> = candidates
            .iter()
            .map(|candidate| {
                ScoredPlace::new(
                    candidate.place.clone(),
                    self.scorer.evaluate(candidate, traveller),
                )
            })
            .collect();
        ranking.sort_by(|left, right| right.score.total_cmp(&left.score));
        ranking
    }

    fn store(&self, key: CacheKey, ranking: Vec<ScoredPlace>) {
        if let Ok(mut guard) = self.cache.lock() {
            *guard = Some(CacheEntry { key, ranking });
        }
    }
}

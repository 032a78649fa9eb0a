#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for candidate ranking.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use sojourn_core::{
    Candidate, Place, PriceBand, Reason, ScoredPlace, Setting, TravellerProfile,
};
use sojourn_scorer::{LegacyCrispScorer, RecommendationRanker, WeightedFuzzyScorer};

fn park() -> Place {
    let mut place = Place {
        id: "park".to_owned(),
        name: "Riverside Park".to_owned(),
        setting: Setting::Outdoor,
        rating: 4.5,
        ..Place::default()
    };
    place.tags.insert("nature".to_owned());
    place
}

fn mall() -> Place {
    let mut place = Place {
        id: "mall".to_owned(),
        name: "Harbour Mall".to_owned(),
        setting: Setting::Indoor,
        price_band: PriceBand::Premium,
        ..Place::default()
    };
    for tag in ["mall", "shopping", "indoor"] {
        place.tags.insert(tag.to_owned());
    }
    place
}

#[fixture]
fn candidates() -> RefCell<Vec<Candidate>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn traveller() -> RefCell<TravellerProfile> {
    RefCell::new(TravellerProfile::new())
}

#[fixture]
fn result() -> RefCell<Vec<ScoredPlace>> {
    RefCell::new(Vec::new())
}

#[given("a nearby outdoor park tagged 'nature' and a distant premium mall")]
fn given_park_and_distant_mall(#[from(candidates)] candidates: &RefCell<Vec<Candidate>>) {
    *candidates.borrow_mut() = vec![Candidate::new(park(), 0.5), Candidate::new(mall(), 6.0)];
}

#[given("a nearby outdoor park and a nearby premium mall")]
fn given_park_and_nearby_mall(#[from(candidates)] candidates: &RefCell<Vec<Candidate>>) {
    *candidates.borrow_mut() = vec![Candidate::new(park(), 0.5), Candidate::new(mall(), 0.5)];
}

#[given("a traveller keen on nature in great weather")]
fn given_nature_traveller(#[from(traveller)] traveller: &RefCell<TravellerProfile>) {
    *traveller.borrow_mut() = TravellerProfile::new()
        .with_budget(0.7)
        .with_weather(0.9)
        .with_interest("nature");
}

#[given("an indifferent traveller caught in poor weather")]
fn given_rained_on_traveller(#[from(traveller)] traveller: &RefCell<TravellerProfile>) {
    *traveller.borrow_mut() = TravellerProfile::new().with_budget(0.7).with_weather(0.3);
}

#[when("I rank the candidates with the fuzzy strategy")]
fn when_rank_fuzzy(
    #[from(candidates)] candidates: &RefCell<Vec<Candidate>>,
    #[from(traveller)] traveller: &RefCell<TravellerProfile>,
    #[from(result)] result: &RefCell<Vec<ScoredPlace>>,
) {
    let ranker = RecommendationRanker::new(WeightedFuzzyScorer);
    *result.borrow_mut() = ranker.rank(&candidates.borrow(), &traveller.borrow());
}

#[when("I rank the candidates with the legacy strategy for a rich nature lover")]
fn when_rank_legacy(
    #[from(candidates)] candidates: &RefCell<Vec<Candidate>>,
    #[from(traveller)] traveller: &RefCell<TravellerProfile>,
    #[from(result)] result: &RefCell<Vec<ScoredPlace>>,
) {
    let scorer = LegacyCrispScorer::new(9500.0, "Nature").expect("valid legacy budget");
    let ranker = RecommendationRanker::new(scorer);
    *result.borrow_mut() = ranker.rank(&candidates.borrow(), &traveller.borrow());
}

#[then("the park comes first with a strong interest explanation")]
fn then_park_first_explained(#[from(result)] result: &RefCell<Vec<ScoredPlace>>) {
    let ranking = result.borrow();
    let top = ranking.first().expect("ranking should not be empty");
    assert_eq!(top.place.id, "park");
    assert!(top.reasons.contains(&Reason::StrongInterestMatch));
    assert!(top.reasons.contains(&Reason::Near));
}

#[then("the mall comes first as an indoor refuge")]
fn then_mall_first(#[from(result)] result: &RefCell<Vec<ScoredPlace>>) {
    let ranking = result.borrow();
    let top = ranking.first().expect("ranking should not be empty");
    assert_eq!(top.place.id, "mall");
    assert!(top.reasons.contains(&Reason::IndoorPoorWeather));
}

#[then("the park tops the ranking with the maximum legacy score")]
fn then_park_maxes_legacy(#[from(result)] result: &RefCell<Vec<ScoredPlace>>) {
    let ranking = result.borrow();
    let top = ranking.first().expect("ranking should not be empty");
    assert_eq!(top.place.id, "park");
    assert_eq!(top.score, 10.0);
    assert!(top.reasons.is_empty());
}

#[scenario(path = "tests/features/ranking.feature", index = 0)]
fn nature_lover_prefers_the_park(
    candidates: RefCell<Vec<Candidate>>,
    traveller: RefCell<TravellerProfile>,
    result: RefCell<Vec<ScoredPlace>>,
) {
    let _ = (candidates, traveller, result);
}

#[scenario(path = "tests/features/ranking.feature", index = 1)]
fn poor_weather_favours_the_indoor_mall(
    candidates: RefCell<Vec<Candidate>>,
    traveller: RefCell<TravellerProfile>,
    result: RefCell<Vec<ScoredPlace>>,
) {
    let _ = (candidates, traveller, result);
}

#[scenario(path = "tests/features/ranking.feature", index = 2)]
fn legacy_strategy_scores_on_the_ten_scale(
    candidates: RefCell<Vec<Candidate>>,
    traveller: RefCell<TravellerProfile>,
    result: RefCell<Vec<ScoredPlace>>,
) {
    let _ = (candidates, traveller, result);
}

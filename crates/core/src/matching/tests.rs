use super::*;
use crate::error::{MatchError, NotFoundError};
use crate::records::{Record, RecordStore};

fn roster() -> RecordStore {
    RecordStore::new(vec![
        Record::new("1", "Robert Cohen"),
        Record::new("2", "Rupert Cohen"),
        Record::new("3", "Dana Levi"),
    ])
    .expect("valid roster")
}

fn ids(results: &[MatchResult<'_>]) -> Vec<String> {
    results.iter().map(|result| result.id().to_string()).collect()
}

#[test]
fn misspelled_first_name_finds_both_spellings_in_store_order() {
    let store = roster();
    let results = MatchEngine::phonetic()
        .find_by_name("Robbert", &store)
        .expect("valid query");
    assert_eq!(ids(&results), vec!["1", "2"]);
    assert!(results.iter().all(|r| r.matched_on == MatchedOn::FullName));
}

#[test]
fn single_word_query_matches_a_word_of_the_name() {
    let store = roster();
    let results = MatchEngine::phonetic()
        .find_by_name("Dana", &store)
        .expect("valid query");
    assert_eq!(ids(&results), vec!["3"]);
    assert_eq!(results[0].matched_on, MatchedOn::Token { index: 0 });
}

#[test]
fn surname_query_reports_the_matching_word() {
    let store = roster();
    let results = MatchEngine::phonetic()
        .find_by_name("Cohn", &store)
        .expect("valid query");
    assert_eq!(ids(&results), vec!["1", "2"]);
    assert_eq!(results[1].matched_on, MatchedOn::Token { index: 1 });
}

#[test]
fn unknown_name_yields_no_matches() {
    let store = roster();
    let results = MatchEngine::phonetic()
        .find_by_name("Xyzzy", &store)
        .expect("valid query");
    assert!(results.is_empty());
}

#[test]
fn empty_store_never_matches() {
    let store = RecordStore::empty();
    for query in ["Robert", "Dana", "x"] {
        let results = MatchEngine::phonetic()
            .find_by_name(query, &store)
            .expect("valid query");
        assert!(results.is_empty());
    }
}

#[test]
fn blank_queries_are_rejected() {
    let store = roster();
    let engine = MatchEngine::phonetic();
    for query in ["", "   ", "\t\n"] {
        assert!(matches!(
            engine.find_by_name(query, &store),
            Err(MatchError::InvalidQuery { .. })
        ));
    }
}

#[test]
fn letterless_queries_are_rejected() {
    let store = roster();
    let err = MatchEngine::phonetic()
        .find_by_name("12-34", &store)
        .unwrap_err();
    assert_eq!(
        err,
        MatchError::InvalidQuery {
            query: "12-34".into(),
            reason: "query contains no letters",
        }
    );
}

#[test]
fn repeated_queries_return_identical_results() {
    let store = roster();
    let engine = MatchEngine::default();
    let first = engine.find_by_name("Rupert", &store).expect("valid query");
    let second = engine.find_by_name("Rupert", &store).expect("valid query");
    assert_eq!(first, second);
}

#[test]
fn results_are_not_capped() {
    let records = (0..25).map(|n| Record::new(n.to_string(), format!("Robert {n}")));
    let store = RecordStore::new(records).expect("valid roster");
    let results = MatchEngine::phonetic()
        .find_by_name("Rupert", &store)
        .expect("valid query");
    assert_eq!(results.len(), 25);
}

#[test]
fn literal_strategy_requires_equal_letters() {
    let store = roster();
    let engine = MatchEngine::literal();
    assert!(engine.find_by_name("Robbert", &store).expect("query").is_empty());

    let results = engine.find_by_name("rupert-cohen", &store).expect("query");
    assert_eq!(ids(&results), vec!["2"]);
    assert_eq!(results[0].matched_on, MatchedOn::FullName);

    let results = engine.find_by_name("LEVI", &store).expect("query");
    assert_eq!(ids(&results), vec!["3"]);
}

#[test]
fn accented_query_matches_plain_record() {
    let store = RecordStore::new(vec![Record::new("9", "Jose Muller")]).expect("roster");
    for engine in [MatchEngine::phonetic(), MatchEngine::literal()] {
        let results = engine.find_by_name("Müller", &store).expect("query");
        assert_eq!(ids(&results), vec!["9"], "strategy {}", engine.strategy());
    }
}

#[test]
fn find_by_id_wraps_store_lookup() {
    let store = roster();
    let engine = MatchEngine::default();
    let found = engine.find_by_id("2", &store).expect("present");
    assert_eq!(found.record.name, "Rupert Cohen");
    assert_eq!(found.matched_on, MatchedOn::Id);
    assert_eq!(
        engine.find_by_id("99", &store),
        Err(NotFoundError { id: "99".into() })
    );
}

#[test]
fn strategy_parses_aliases() {
    assert_eq!("Soundex".parse::<MatchStrategy>(), Ok(MatchStrategy::Phonetic));
    assert_eq!(" literal ".parse::<MatchStrategy>(), Ok(MatchStrategy::Literal));
    assert!("fuzzy".parse::<MatchStrategy>().is_err());
}

#[test]
fn match_results_serialize_with_kind_tag() {
    let store = roster();
    let results = MatchEngine::phonetic()
        .find_by_name("Dana", &store)
        .expect("valid query");
    let value = serde_json::to_value(&results).expect("serialize");
    assert_eq!(value[0]["record"]["id"], "3");
    assert_eq!(value[0]["matched_on"]["kind"], "token");
    assert_eq!(value[0]["matched_on"]["index"], 0);
}

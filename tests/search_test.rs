use groupli::types::Artist;
use groupli::ui::search::*;

// Helper function to create a test artist
fn create_test_artist(id: u32, name: &str) -> Artist {
    Artist {
        id,
        image: String::new(),
        name: name.to_string(),
        members: vec!["someone".to_string()],
        creation_date: 1990,
        first_album: "01-01-1992".to_string(),
        locations: Vec::new(),
    }
}

#[test]
fn test_stale_generation_is_discarded() {
    let mut orchestrator = SearchOrchestrator::new();

    let first = orchestrator.begin();
    let second = orchestrator.begin();
    assert!(orchestrator.is_loading());

    // The superseded request completing changes nothing, loading included
    let outcome = orchestrator.complete(first, Ok(vec![create_test_artist(1, "A")]));
    assert_eq!(outcome, SearchOutcome::Stale);
    assert!(orchestrator.is_loading());

    // The latest request releases the indicator and delivers results
    let outcome = orchestrator.complete(second, Ok(vec![create_test_artist(2, "B")]));
    match outcome {
        SearchOutcome::Results { artists, .. } => {
            assert_eq!(artists.len(), 1);
            assert_eq!(artists[0].id, 2);
        }
        other => panic!("expected results, got {:?}", other),
    }
    assert!(!orchestrator.is_loading());
}

#[test]
fn test_ranges_derive_exactly_once() {
    let mut orchestrator = SearchOrchestrator::new();

    let g1 = orchestrator.begin();
    let outcome = orchestrator.complete(g1, Ok(vec![create_test_artist(1, "A")]));
    assert!(matches!(
        outcome,
        SearchOutcome::Results {
            derive_ranges: true,
            ..
        }
    ));

    // Later successes never re-derive
    let g2 = orchestrator.begin();
    let outcome = orchestrator.complete(g2, Ok(vec![create_test_artist(2, "B")]));
    assert!(matches!(
        outcome,
        SearchOutcome::Results {
            derive_ranges: false,
            ..
        }
    ));
}

#[test]
fn test_first_empty_success_still_consumes_derivation() {
    let mut orchestrator = SearchOrchestrator::new();

    // An empty first result set carries the one-time trigger (which then
    // no-ops in the deriver), so a later non-empty set does not get it
    let g1 = orchestrator.begin();
    let outcome = orchestrator.complete(g1, Ok(Vec::new()));
    assert!(matches!(
        outcome,
        SearchOutcome::Results {
            derive_ranges: true,
            ..
        }
    ));

    let g2 = orchestrator.begin();
    let outcome = orchestrator.complete(g2, Ok(vec![create_test_artist(1, "A")]));
    assert!(matches!(
        outcome,
        SearchOutcome::Results {
            derive_ranges: false,
            ..
        }
    ));
}

#[test]
fn test_failure_releases_loading_but_keeps_derivation() {
    let mut orchestrator = SearchOrchestrator::new();

    let g1 = orchestrator.begin();
    let outcome = orchestrator.complete(g1, Err("boom".to_string()));
    assert_eq!(outcome, SearchOutcome::Failed("boom".to_string()));
    assert!(!orchestrator.is_loading());

    // The first success after a failure still derives
    let g2 = orchestrator.begin();
    let outcome = orchestrator.complete(g2, Ok(vec![create_test_artist(1, "A")]));
    assert!(matches!(
        outcome,
        SearchOutcome::Results {
            derive_ranges: true,
            ..
        }
    ));
}

#[test]
fn test_stale_failure_is_discarded() {
    let mut orchestrator = SearchOrchestrator::new();

    let first = orchestrator.begin();
    let second = orchestrator.begin();

    assert_eq!(
        orchestrator.complete(first, Err("old".to_string())),
        SearchOutcome::Stale
    );
    assert!(orchestrator.is_loading());

    assert_eq!(
        orchestrator.complete(second, Err("new".to_string())),
        SearchOutcome::Failed("new".to_string())
    );
    assert!(!orchestrator.is_loading());
}

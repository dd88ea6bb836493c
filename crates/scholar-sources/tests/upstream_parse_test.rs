//! Recorded upstream bodies parse into the uniform document contract.

use scholar_core::constants::UNKNOWN_AUTHOR;
use scholar_sources::{semantic_scholar, wikipedia};
use test_fixtures::load_fixture_text;

#[test]
fn semantic_scholar_recorded_search() {
    let body = load_fixture_text("upstream/semantic_scholar_search.json");
    let docs = semantic_scholar::parse_search_response(&body).unwrap();
    assert_eq!(docs.len(), 2);

    let first = &docs[0];
    assert_eq!(first.title, "Surface codes: towards practical quantum computation");
    assert_eq!(first.text, "We review the surface code. It has a high threshold.");
    assert_eq!(first.authors, ["Austin Fowler", "John Martinis"]);
    assert_eq!(first.year, Some(2012));
    assert_eq!(first.citation_count, 3100);
    assert_eq!(first.venue, "Physical Review A");

    let second = &docs[1];
    assert_eq!(second.url, "https://doi.org/10.1109/FOCS.2015.54");
    assert_eq!(second.year, Some(2015));
    assert_eq!(second.authors, [UNKNOWN_AUTHOR]);
    assert_eq!(second.citation_count, 0);
    assert_eq!(second.venue, "");
}

#[test]
fn wikipedia_recorded_search() {
    let body = load_fixture_text("upstream/wikipedia_search.json");
    let docs = wikipedia::parse_search_response(&body).unwrap();
    let titles: Vec<_> = docs.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, ["Quantum error correction", "Toric code"]);
    assert!(docs[0].text.ends_with('.'));
    assert!(!docs[0].text.contains('\n'));
}

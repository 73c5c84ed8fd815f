//! Query → ranked top results, checked against hand-computed scores.

use super::common::{ids, memory_sources, ranks, sample_fixture};
use cuisinesearch::{search_restaurants, Error, SearchCriteria, DEFAULT_RESULT_LIMIT};

#[test]
fn test_distance_and_price_query() {
    let fixture = sample_fixture();
    let top = search_restaurants(
        &fixture.sources,
        [("distance", "3"), ("price", "20")],
        DEFAULT_RESULT_LIMIT,
    )
    .unwrap();

    assert_eq!(ids(&top), vec![4, 7, 1, 6, 2]);
    assert_eq!(ranks(&top), vec![-1, 0, 1, 2, 3]);
    assert_eq!(top[0].name, "Burger Joint");
    assert_eq!(top[0].cuisine_name, "American");
}

#[test]
fn test_full_ranking_with_large_limit() {
    let fixture = sample_fixture();
    let all = search_restaurants(&fixture.sources, [("distance", "3"), ("price", "20")], 50).unwrap();
    assert_eq!(ids(&all), vec![4, 7, 1, 6, 2, 8, 3, 5]);
    assert_eq!(ranks(&all), vec![-1, 0, 1, 2, 3, 4, 7, 17]);
}

#[test]
fn test_equal_ranks_keep_load_order() {
    // Nobody beats rating 4 except the two fives, and both branches cost the same here.
    let fixture = sample_fixture();
    let top = search_restaurants(&fixture.sources, [("rating", "4")], 5).unwrap();
    assert!(top.iter().all(|r| r.rank == 3));
    assert_eq!(ids(&top), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_cuisine_query_prefers_exact_cuisine() {
    let fixture = sample_fixture();
    let top = search_restaurants(&fixture.sources, [("cuisine", "Italian")], 5).unwrap();
    assert_eq!(ids(&top[..2]), vec![1, 5]);
    assert_eq!(ranks(&top[..2]), vec![1, 1]);
    assert!(top[2..].iter().all(|r| r.rank > 1));
}

#[test]
fn test_name_query_exact_match_first() {
    let fixture = sample_fixture();
    let top = search_restaurants(&fixture.sources, [("name", "Golden Wok")], 5).unwrap();
    assert_eq!(top[0].id, 2);
    assert_eq!(top[0].rank, 1);
}

#[test]
fn test_fuzzy_cuisine_typo() {
    let fixture = sample_fixture();
    let top = search_restaurants(&fixture.sources, [("cuisine", "Italain")], 5).unwrap();
    assert_eq!(top[0].cuisine_name, "Italian");
    assert_eq!(top[1].cuisine_name, "Italian");
}

#[test]
fn test_single_record_rating_five() {
    let sources = memory_sources(&[(1, "Italian")], &[("Pizza Place", 4, 2, 10, 1)]);
    let top = search_restaurants(&sources, [("rating", "5")], 5).unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].rank, 3);
}

#[test]
fn test_fewer_records_than_limit() {
    let sources = memory_sources(
        &[(1, "Italian")],
        &[("Pizza Place", 4, 2, 10, 1), ("Pasta Bar", 3, 1, 12, 1)],
    );
    let top = search_restaurants(&sources, [("price", "10")], 5).unwrap();
    assert_eq!(top.len(), 2);
}

#[test]
fn test_empty_restaurant_table_returns_nothing() {
    let sources = memory_sources(&[(1, "Italian")], &[]);
    let top = search_restaurants(&sources, [("name", "anything")], 5).unwrap();
    assert!(top.is_empty());
}

#[test]
fn test_no_recognized_params_is_rejected() {
    let fixture = sample_fixture();
    let err = search_restaurants(&fixture.sources, [("color", "blue")], 5).unwrap_err();
    assert_eq!(err, Error::EmptyQuery);
    assert!(err.is_client_error());

    let err = search_restaurants(&fixture.sources, Vec::<(&str, &str)>::new(), 5).unwrap_err();
    assert_eq!(err, Error::EmptyQuery);
}

#[test]
fn test_text_in_numeric_param_is_rejected() {
    let fixture = sample_fixture();
    let err = search_restaurants(&fixture.sources, [("price", "cheap")], 5).unwrap_err();
    assert!(matches!(err, Error::CriteriaDecode { param: "price", .. }));
    assert!(err.is_client_error());
}

#[test]
fn test_search_with_criteria_matches_raw_params() {
    let fixture = sample_fixture();
    let criteria = SearchCriteria {
        distance: Some(3),
        price: Some(20),
        ..SearchCriteria::default()
    };
    let typed = cuisinesearch::search_with_criteria(&fixture.sources, &criteria, 5).unwrap();
    let raw = search_restaurants(&fixture.sources, [("distance", "3"), ("price", "20")], 5).unwrap();
    assert_eq!(typed, raw);
}

//! Fresh snapshot per call, repeatable results.

use super::common::{ids, ranks, sample_fixture, write_fixture, SAMPLE_CUISINES};
use cuisinesearch::{list_restaurants, search_restaurants};
use std::fs;

#[test]
fn test_repeated_searches_agree() {
    let fixture = sample_fixture();
    let params = [("cuisine", "Chinese"), ("distance", "4")];
    let first = search_restaurants(&fixture.sources, params, 5).unwrap();
    for _ in 0..10 {
        let again = search_restaurants(&fixture.sources, params, 5).unwrap();
        assert_eq!(ids(&again), ids(&first));
        assert_eq!(ranks(&again), ranks(&first));
    }
}

#[test]
fn test_search_does_not_leak_ranks_into_listing() {
    let fixture = sample_fixture();
    search_restaurants(&fixture.sources, [("price", "20")], 5).unwrap();
    let records = list_restaurants(&fixture.sources).unwrap();
    assert!(records.iter().all(|r| r.rank == 0));
}

#[test]
fn test_edits_visible_on_next_call() {
    let fixture = write_fixture(
        SAMPLE_CUISINES,
        "name,customer_rating,distance,price,cuisine_id\nOld Spot,3,3,20,1\n",
    );
    assert_eq!(list_restaurants(&fixture.sources).unwrap()[0].name, "Old Spot");

    fs::write(
        fixture.dir.path().join("restaurants.csv"),
        "name,customer_rating,distance,price,cuisine_id\nNew Spot,3,3,20,1\nSecond Spot,4,1,10,2\n",
    )
    .unwrap();

    let records = list_restaurants(&fixture.sources).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "New Spot");
    assert_eq!(records[1].cuisine_name, "Chinese");
}

#[test]
fn test_large_dataset_ties_stay_in_load_order() {
    let mut csv = String::from("name,customer_rating,distance,price,cuisine_id\n");
    for i in 0..500 {
        csv.push_str(&format!("Place {},{},{},{},{}\n", i, i % 5 + 1, i % 7, 10 + i % 11, i % 5 + 1));
    }
    let fixture = write_fixture(SAMPLE_CUISINES, &csv);
    let all = search_restaurants(&fixture.sources, [("rating", "3"), ("price", "15")], 1000).unwrap();
    assert_eq!(all.len(), 500);
    for pair in all.windows(2) {
        assert!(pair[0].rank <= pair[1].rank);
        if pair[0].rank == pair[1].rank {
            assert!(pair[0].id < pair[1].id);
        }
    }
}

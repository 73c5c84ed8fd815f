//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so tests agree on what "a restaurant" looks like.

#![doc(hidden)]

use crate::search::DataSources;
use crate::source::CsvSource;
use crate::types::RestaurantRecord;

/// Header row of the restaurant fixture CSV.
pub const RESTAURANT_HEADER: &str = "name,customer_rating,distance,price,cuisine_id";

/// Header row of the cuisine fixture CSV.
pub const CUISINE_HEADER: &str = "id,name";

/// Create a record as a load would, with rank zero.
pub fn make_record(
    id: usize,
    name: &str,
    rating: u32,
    distance: u32,
    price: u32,
    cuisine_name: &str,
) -> RestaurantRecord {
    RestaurantRecord {
        id,
        name: name.to_string(),
        rating,
        distance,
        price,
        cuisine_id: 1,
        cuisine_name: cuisine_name.to_string(),
        rank: 0,
    }
}

/// In-memory sources from `(id, name)` cuisines and
/// `(name, rating, distance, price, cuisine_id)` restaurants.
pub fn memory_sources(
    cuisines: &[(u32, &str)],
    restaurants: &[(&str, u32, u32, u32, u32)],
) -> DataSources<CsvSource> {
    let mut cuisine_csv = format!("{}\n", CUISINE_HEADER);
    for (id, name) in cuisines {
        cuisine_csv.push_str(&format!("{},{}\n", id, quote(name)));
    }

    let mut restaurant_csv = format!("{}\n", RESTAURANT_HEADER);
    for (name, rating, distance, price, cuisine_id) in restaurants {
        restaurant_csv.push_str(&format!(
            "{},{},{},{},{}\n",
            quote(name),
            rating,
            distance,
            price,
            cuisine_id
        ));
    }

    DataSources {
        cuisines: CsvSource::text("cuisines.csv", cuisine_csv),
        restaurants: CsvSource::text("restaurants.csv", restaurant_csv),
    }
}

/// CSV-quote a field (always quoted, inner quotes doubled).
pub fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

use ranksort::core::{Comparator, ComparatorAndAverager};
use ranksort::prelude::*;
use std::cmp::Ordering;

// Simulate an external record type ordered by one of its fields.
#[derive(Clone, Debug, PartialEq)]
struct Reading {
    sensor: &'static str,
    celsius: f64,
}

fn reading(sensor: &'static str, celsius: f64) -> Reading {
    Reading { sensor, celsius }
}

// Implement the comparator traits for an external struct.
// This proves they are implementable by "outside crates".
struct ByTemperature;

impl Comparator<Reading> for ByTemperature {
    fn compare(&self, a: &Reading, b: &Reading) -> Ordering {
        a.celsius.total_cmp(&b.celsius)
    }
}

impl ComparatorAndAverager<Reading> for ByTemperature {
    fn average(&self, a: &Reading, b: &Reading) -> Reading {
        reading("mean", (a.celsius + b.celsius) / 2.0)
    }
}

fn readings() -> Vec<Reading> {
    vec![
        reading("attic", 31.5),
        reading("cellar", 12.0),
        reading("kitchen", 22.5),
        reading("garage", 18.0),
    ]
}

#[test]
fn test_external_comparator_sort() {
    for method in SortingMethod::ALL {
        let mut data = readings();
        Sorter::create(method).sort_with(&mut data, &ByTemperature);

        let sensors: Vec<&str> = data.iter().map(|r| r.sensor).collect();
        assert_eq!(sensors, vec!["cellar", "garage", "kitchen", "attic"]);
    }
}

#[test]
fn test_external_comparator_range_and_copy() {
    let sorter = Sorter::create(SortingMethod::Shell);
    let data = readings();

    let sorted = sorter.sorted_range_with(&data, 1, 4, &ByTemperature).unwrap();
    assert_eq!(sorted[0].sensor, "attic");
    assert_eq!(sorted[1].sensor, "cellar");
    assert_eq!(sorted[3].sensor, "kitchen");
    assert_eq!(data, readings());

    let all = sorter.sorted_with(&data, &ByTemperature);
    assert_eq!(all[0].sensor, "cellar");
}

#[test]
fn test_external_comparator_select_and_median() {
    let mut data = readings();
    let warmest = select_with(&mut data, 3, &ByTemperature).unwrap();
    assert_eq!(warmest.sensor, "attic");

    let mut data = readings();
    let mid = median_with(&mut data, &ByTemperature).unwrap();
    assert_eq!(mid, reading("mean", 20.25));

    let mut data = readings();
    let mid = median_range_with(&mut data, 0, 3, &ByTemperature).unwrap();
    assert_eq!(mid.sensor, "kitchen");
}

#[test]
fn test_natural_order_object() {
    let mut data = vec!["pear", "fig", "apple"];
    Sorter::default()
        .sort_range_with(&mut data, 0, 3, &NaturalOrder)
        .unwrap();
    assert_eq!(data, vec!["apple", "fig", "pear"]);

    let mut data = vec![3, 1, 2];
    assert_eq!(select_range_with(&mut data, 0, 0, 3, &NaturalOrder).unwrap(), 1);
}

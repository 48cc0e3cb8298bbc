use ranksort::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Methods that only touch the requested range.
const RANGED: [SortingMethod; 4] = [
    SortingMethod::StraightInsertion,
    SortingMethod::Shell,
    SortingMethod::Quicksort,
    SortingMethod::Heapsort,
];

fn random_vec(rng: &mut StdRng, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.random_range(0..100)).collect()
}

#[test]
fn test_basic_sort_all_methods() {
    for method in SortingMethod::ALL {
        let mut data = vec![5, 3, 8, 1, 9, 2];
        Sorter::create(method)
            .sort_range_by(&mut data, 0, 6, |a, b| a.cmp(b))
            .unwrap();
        assert_eq!(data, vec![1, 2, 3, 5, 8, 9], "method {method}");
    }
}

#[test]
fn test_basic_sort_strings() {
    for method in SortingMethod::ALL {
        let mut input = vec![
            "banana".to_string(),
            "apple".to_string(),
            "cherry".to_string(),
            "date".to_string(),
        ];
        Sorter::create(method).sort(&mut input);
        assert_eq!(input, vec!["apple", "banana", "cherry", "date"]);
    }
}

#[test]
fn test_single_element_range() {
    for method in SortingMethod::ALL {
        let mut data = vec![7];
        Sorter::create(method).sort_range(&mut data, 0, 1).unwrap();
        assert_eq!(data, vec![7]);
    }
}

#[test]
fn test_empty_range_is_noop() {
    let mut rng = StdRng::seed_from_u64(7);
    for method in SortingMethod::ALL {
        let mut data = random_vec(&mut rng, 30);
        let expected = data.clone();
        let sorter = Sorter::create(method);
        for from in [0, 10, 30] {
            sorter.sort_range(&mut data, from, from).unwrap();
            assert_eq!(data, expected);
        }
    }

    let mut empty: Vec<i32> = vec![];
    Sorter::default().sort(&mut empty);
    assert!(empty.is_empty());
}

#[test]
fn test_fuzz_random_ranges() {
    let mut rng = StdRng::seed_from_u64(42);

    for method in RANGED {
        let sorter = Sorter::create(method);
        for _ in 0..200 {
            let len = rng.random_range(10..100);
            let from = rng.random_range(0..len - 2);
            let to = from + 1 + rng.random_range(0..len - from - 1);
            let mut data = random_vec(&mut rng, len);
            let original = data.clone();

            sorter.sort_range_by(&mut data, from, to, |a, b| a.cmp(b)).unwrap();

            let mut expected_range = original[from..to].to_vec();
            expected_range.sort();
            assert_eq!(&data[from..to], &expected_range[..], "method {method}");
            assert_eq!(&data[..from], &original[..from]);
            assert_eq!(&data[to..], &original[to..]);

            // And back again, descending.
            sorter.sort_range_by(&mut data, from, to, |a, b| b.cmp(a)).unwrap();
            assert!(data[from..to].windows(2).all(|w| w[0] >= w[1]));
        }
    }
}

#[test]
fn test_fuzz_random_whole() {
    let mut rng = rand::rng();

    for method in SortingMethod::ALL {
        let sorter = Sorter::create(method);
        for _ in 0..100 {
            let count = rng.random_range(0..500);
            let mut input: Vec<u64> = (0..count).map(|_| rng.random()).collect();
            let mut expected = input.clone();
            expected.sort_unstable();

            sorter.sort(&mut input);
            assert_eq!(input, expected, "method {method}");
        }
    }
}

#[test]
fn test_edge_cases() {
    for method in SortingMethod::ALL {
        let sorter = Sorter::create(method);

        // 1. All same
        let mut input = vec![vec![1u8, 2, 3]; 50];
        let expected = input.clone();
        sorter.sort(&mut input);
        assert_eq!(input, expected);

        // 2. Reversed
        let mut input: Vec<u32> = (0..200).rev().collect();
        sorter.sort(&mut input);
        assert_eq!(input, (0..200).collect::<Vec<_>>());

        // 3. Sorted stays sorted
        let mut input: Vec<u32> = (0..200).collect();
        sorter.sort(&mut input);
        assert_eq!(input, (0..200).collect::<Vec<_>>());

        // 4. Organ pipe
        let mut input: Vec<u32> = (0..100).chain((0..100).rev()).collect();
        let mut expected = input.clone();
        expected.sort_unstable();
        sorter.sort(&mut input);
        assert_eq!(input, expected);
    }
}

#[test]
fn test_sorted_leaves_input_untouched() {
    let mut rng = StdRng::seed_from_u64(3);
    for method in SortingMethod::ALL {
        let sorter = Sorter::create(method);
        let input = random_vec(&mut rng, 64);
        let snapshot = input.clone();

        let output = sorter.sorted_range_by(&input, 0, 64, |a, b| a.cmp(b)).unwrap();
        assert_eq!(input, snapshot);
        assert!(output.windows(2).all(|w| w[0] <= w[1]));

        let output = sorter.sorted(&input);
        assert_eq!(input, snapshot);
        assert!(output.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn test_sorted_range_copies_outside() {
    let sorter = Sorter::create(SortingMethod::Quicksort);
    let input = vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
    let output = sorter.sorted_range(&input, 2, 8).unwrap();
    assert_eq!(output, vec![9, 8, 2, 3, 4, 5, 6, 7, 1, 0]);
}

#[test]
fn test_idempotent() {
    let mut rng = StdRng::seed_from_u64(11);
    for method in SortingMethod::ALL {
        let sorter = Sorter::create(method);
        let mut data = random_vec(&mut rng, 300);
        sorter.sort(&mut data);
        let once = data.clone();
        sorter.sort(&mut data);
        assert_eq!(data, once);
    }
}

#[test]
fn test_stable_straight_insertion() {
    let mut data: Vec<(u8, usize)> = [3u8, 1, 3, 2, 1, 3, 2]
        .iter()
        .enumerate()
        .map(|(i, k)| (*k, i))
        .collect();
    Sorter::create(SortingMethod::StraightInsertion).sort_by(&mut data, |a, b| a.0.cmp(&b.0));
    assert_eq!(
        data,
        vec![(1, 1), (1, 4), (2, 3), (2, 6), (3, 0), (3, 2), (3, 5)]
    );
}

#[test]
fn test_platform_sorts_whole_sequence() {
    let mut data = vec![6, 5, 4, 3, 2, 1];
    Sorter::create(SortingMethod::Platform)
        .sort_range(&mut data, 2, 4)
        .unwrap();
    assert_eq!(data, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_method_names_roundtrip() {
    for method in SortingMethod::ALL {
        assert_eq!(method.to_string().parse::<SortingMethod>(), Ok(method));
    }
    assert_eq!(
        "Straight_Insertion".parse::<SortingMethod>(),
        Ok(SortingMethod::StraightInsertion)
    );
    assert!("bogosort".parse::<SortingMethod>().is_err());
    assert_eq!(SortingMethod::default(), SortingMethod::Quicksort);
}

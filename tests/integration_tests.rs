use flagsort::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_word(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.random_range(0..=max_len);
    (0..len).map(|_| rng.random_range(b'a'..=b'z') as char).collect()
}

#[test]
fn test_numbers_padded_scenario() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(7);
    let mut input: Vec<u64> = vec![500, 3, 700_000, 3, 0];
    input.extend((0..1000).map(|_| rng.random::<u64>()));

    let mut expected = input.clone();
    expected.sort();

    sort_by_number(&mut input).unwrap();
    assert_eq!(input, expected);
}

#[test]
fn test_numbers_small_range_shift_guess() {
    // Keys confined to [0, 1023]; the sampled guess may land above or below the real spread.
    let mut rng = StdRng::seed_from_u64(11);
    for len in [128, 129, 500, 4096] {
        let mut input: Vec<u64> = (0..len).map(|_| rng.random_range(0..1024)).collect();
        let mut expected = input.clone();
        expected.sort();

        sort_by_number(&mut input).unwrap();
        assert_eq!(input, expected, "len {len}");
    }

    // The shift guess samples every 32nd key plus the last one. Keeping those small while
    // the rest span 10 bits forces the guess low.
    let mut input: Vec<u64> = (0..1024u64)
        .map(|i| {
            if i % 32 == 0 || i == 1023 {
                rng.random_range(0..16)
            } else {
                rng.random_range(0..1024)
            }
        })
        .collect();
    let mut expected = input.clone();
    expected.sort();
    sort_by_number(&mut input).unwrap();
    assert_eq!(input, expected);

    // And the reverse: sampled keys span the full width, the rest sit in [0, 1023].
    let mut input: Vec<u64> = (0..1024u64)
        .map(|i| match i {
            0 => u64::MAX,
            1023 => 0,
            _ => rng.random_range(0..1024),
        })
        .collect();
    let mut expected = input.clone();
    expected.sort();
    sort_by_number(&mut input).unwrap();
    assert_eq!(input, expected);
}

#[test]
fn test_numbers_all_equal_and_extremes() {
    let mut input = vec![42u64; 1000];
    sort_by_number(&mut input).unwrap();
    assert!(input.iter().all(|&k| k == 42));

    let mut rng = StdRng::seed_from_u64(3);
    let mut input: Vec<u64> = (0..1000)
        .map(|_| if rng.random::<bool>() { u64::MAX } else { 0 })
        .collect();
    let mut expected = input.clone();
    expected.sort();
    sort_by_number(&mut input).unwrap();
    assert_eq!(input, expected);
}

#[test]
fn test_numbers_signed_and_floats() {
    let mut rng = StdRng::seed_from_u64(5);

    let mut ints: Vec<i32> = (0..2000).map(|_| rng.random()).collect();
    let mut expected = ints.clone();
    expected.sort();
    sort_by_number(&mut ints).unwrap();
    assert_eq!(ints, expected);

    let mut floats: Vec<f64> = (0..2000).map(|_| rng.random_range(-1e6..1e6)).collect();
    floats.extend([f64::INFINITY, f64::NEG_INFINITY, -0.0, 0.0]);
    let mut expected = floats.clone();
    expected.sort_by(f64::total_cmp);
    sort_by_number(&mut floats).unwrap();
    let bits: Vec<u64> = floats.iter().map(|f| f.to_bits()).collect();
    let expected_bits: Vec<u64> = expected.iter().map(|f| f.to_bits()).collect();
    assert_eq!(bits, expected_bits);
}

#[test]
fn test_numbers_reduced_cutoff() {
    let mut rng = StdRng::seed_from_u64(13);
    let config = SortConfig::default().with_cutoff(1);
    for _ in 0..50 {
        let len = rng.random_range(0..300);
        let mut input: Vec<u16> = (0..len).map(|_| rng.random()).collect();
        let mut expected = input.clone();
        expected.sort();
        config.sort_by_number(&mut input).unwrap();
        assert_eq!(input, expected);
    }
}

#[test]
fn test_strings_scenario() {
    let mut input = vec!["banana", "apple", "app", "application", "b"];
    sort_by_string(&mut input).unwrap();
    assert_eq!(input, vec!["app", "apple", "application", "b", "banana"]);

    let mut input = vec!["banana", "apple", "app", "application", "b"];
    SortConfig::default().with_cutoff(1).sort_by_string(&mut input).unwrap();
    assert_eq!(input, vec!["app", "apple", "application", "b", "banana"]);
}

#[test]
fn test_strings_random() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut input: Vec<String> = (0..10_000).map(|_| random_word(&mut rng, 12)).collect();
    let mut expected = input.clone();
    expected.sort();

    sort_by_string(&mut input).unwrap();
    assert_eq!(input, expected);
}

#[test]
fn test_strings_multibyte() {
    let mut input: Vec<String> = ["żółw", "zebra", "über", "uber", "日本", "日", "", "a"]
        .iter()
        .cycle()
        .take(400)
        .map(|s| s.to_string())
        .collect();
    let mut expected = input.clone();
    expected.sort();

    SortConfig::default().with_cutoff(2).sort_by_string(&mut input).unwrap();
    assert_eq!(input, expected);
}

#[test]
fn test_bytes_common_prefix_with_outlier() {
    let mut rng = StdRng::seed_from_u64(19);
    let prefix = b"shared-prefix-20byte";
    assert_eq!(prefix.len(), 20);

    let mut input: Vec<Vec<u8>> = (0..200)
        .map(|_| {
            let mut key = prefix.to_vec();
            let tail = rng.random_range(0..8);
            key.extend((0..tail).map(|_| rng.random::<u8>()));
            key
        })
        .collect();
    input.push(b"zzzzz".to_vec());
    input.shuffle(&mut rng);

    let mut expected = input.clone();
    expected.sort();

    for cutoff in [128, 16, 1] {
        let mut data = input.clone();
        SortConfig::default()
            .with_cutoff(cutoff)
            .sort_by_bytes(&mut data)
            .unwrap();
        assert_eq!(data, expected, "cutoff {cutoff}");
    }
}

#[test]
fn test_bytes_depth_limit() {
    init_logging();
    // 32 levels of 16-byte skips still leave part of the shared prefix unexamined.
    let mut rng = StdRng::seed_from_u64(23);
    let shared = vec![b'x'; 32 * 16 + 100];

    let mut input: Vec<Vec<u8>> = (0..600)
        .map(|_| {
            let mut key = shared.clone();
            key.extend((0..4).map(|_| rng.random::<u8>()));
            key
        })
        .collect();
    input.push(shared[..300].to_vec());
    input.push(b"y".to_vec());

    let mut expected = input.clone();
    expected.sort();

    for cutoff in [128, 1] {
        let mut data = input.clone();
        SortConfig::default()
            .with_cutoff(cutoff)
            .sort_by_bytes(&mut data)
            .unwrap();
        assert_eq!(data, expected, "cutoff {cutoff}");
    }
}

#[test]
fn test_bytes_fuzz_random() {
    let mut rng = StdRng::seed_from_u64(29);

    for _ in 0..200 {
        let count = rng.random_range(0..600);
        let mut input: Vec<Vec<u8>> = (0..count)
            .map(|_| {
                let len = rng.random_range(0..6);
                // A narrow alphabet makes ties and shared prefixes common.
                (0..len).map(|_| rng.random_range(0..4u8)).collect()
            })
            .collect();
        let mut expected = input.clone();
        expected.sort();

        let cutoff = rng.random_range(1..200);
        SortConfig::default()
            .with_cutoff(cutoff)
            .sort_by_bytes(&mut input)
            .unwrap();
        assert_eq!(input, expected, "cutoff {cutoff}");
    }
}

#[test]
fn test_zero_bytes_and_empty_keys() {
    let mut rng = StdRng::seed_from_u64(31);
    let mut input: Vec<Vec<u8>> = (0..3000)
        .map(|_| {
            let len = rng.random_range(0..4);
            let mut row = vec![0u8; len];
            if rng.random::<bool>() {
                rng.fill(&mut row[..]);
            }
            row
        })
        .collect();
    let mut expected = input.clone();
    expected.sort();

    sort_by_bytes(&mut input).unwrap();
    assert_eq!(input, expected);
}

#[test]
fn test_sort_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(37);
    let mut words: Vec<String> = (0..2000).map(|_| random_word(&mut rng, 6)).collect();
    sort_by_string(&mut words).unwrap();
    let once = words.clone();
    sort_by_string(&mut words).unwrap();
    assert_eq!(words, once);

    let mut numbers: Vec<u64> = (0..2000).map(|_| rng.random_range(0..100)).collect();
    sort_by_number(&mut numbers).unwrap();
    let once = numbers.clone();
    sort_by_number(&mut numbers).unwrap();
    assert_eq!(numbers, once);
}

#[test]
fn test_edge_cases() {
    // 1. Empty
    let mut empty: Vec<String> = vec![];
    sort_by_string(&mut empty).unwrap();
    assert!(empty.is_empty());
    let mut empty: Vec<u64> = vec![];
    sort_by_number(&mut empty).unwrap();
    SortConfig::default().with_cutoff(1).sort_by_number(&mut empty).unwrap();

    // 2. All empty keys
    let mut input = vec![Vec::<u8>::new(); 300];
    sort_by_bytes(&mut input).unwrap();
    assert!(input.iter().all(Vec::is_empty));

    // 3. Reversed
    let mut input: Vec<Vec<u8>> = (0..=255u8).map(|i| vec![i, i]).rev().collect();
    let mut expected = input.clone();
    expected.sort();
    sort_by_bytes(&mut input).unwrap();
    assert_eq!(input, expected);

    // 4. Single element
    let mut input = vec![7u64];
    sort_by_number(&mut input).unwrap();
    assert_eq!(input, vec![7]);
}

#[test]
fn test_vec_deque_and_slices() {
    use std::collections::VecDeque;

    let mut input: VecDeque<String> = VecDeque::from(vec![
        "banana".to_string(),
        "apple".to_string(),
        "cherry".to_string(),
    ]);
    sort_by_string(&mut input).unwrap();
    assert_eq!(input, VecDeque::from(vec!["apple".to_string(), "banana".to_string(), "cherry".to_string()]));

    let mut numbers = [9u8, 2, 7, 2];
    sort_by_number(&mut numbers[1..]).unwrap();
    assert_eq!(numbers, [9, 2, 2, 7]);
}

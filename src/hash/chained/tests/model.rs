extern crate std;
use alloc::{
    format,
    string::String,
    vec::Vec,
};

use hashbrown::{HashMap, HashSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::hash::chained::ChainedTable;

const KEY_SPACE: u32 = 300;
const STEPS: usize = 5_000;

fn random_key(rng: &mut StdRng) -> String {
    format!("key{}", rng.random_range(0..KEY_SPACE))
}

fn check_against_model(table: &ChainedTable<u32>, model: &HashMap<String, u32>) {
    assert_eq!(table.len(), model.len());
    assert_eq!(table.is_empty(), model.is_empty());
    assert!(table.current_load() <= table.load_factor());

    let entries: HashSet<(String, u32)> = table.entries().into_iter().collect();
    let expected: HashSet<(String, u32)> =
        model.iter().map(|(k, v)| (k.clone(), *v)).collect();
    assert_eq!(entries, expected);

    let mut keys = table.keys();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), model.len());
    table.assert_placement();
}

/// Drive a table and a `hashbrown::HashMap` with the same random operations
/// and compare them after each step.
fn run_model(seed: u64, capacity: usize, load_factor: f64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut table = ChainedTable::with_config(capacity, load_factor).unwrap();
    let mut model: HashMap<String, u32> = HashMap::new();

    for step in 0..STEPS {
        let key = random_key(&mut rng);
        match rng.random_range(0..100) {
            0..50 => {
                let value = rng.random::<u32>();
                let before = table.capacity();
                assert_eq!(table.insert(key.clone(), value), model.insert(key.clone(), value));
                assert_eq!(table.get(&key), Some(&value));
                assert!(table.capacity() == before || table.capacity() == before * 2);
            }
            50..70 => {
                let len = table.len();
                let removed = table.remove(&key);
                assert_eq!(removed, model.remove(&key));
                assert!(!table.contains_key(&key));
                let expected_len = if removed.is_some() { len - 1 } else { len };
                assert_eq!(table.len(), expected_len);
            }
            70..95 => {
                assert_eq!(table.get(&key), model.get(&key));
                assert_eq!(table.contains_key(&key), model.contains_key(&key));
            }
            95..99 => {
                let mut values: Vec<u32> = table.values();
                let mut expected: Vec<u32> = model.values().copied().collect();
                values.sort_unstable();
                expected.sort_unstable();
                assert_eq!(values, expected);
            }
            _ => {
                let capacity = table.capacity();
                table.clear();
                model.clear();
                assert_eq!(table.capacity(), capacity);
            }
        }
        if step % 97 == 0 {
            check_against_model(&table, &model);
        }
    }
    check_against_model(&table, &model);
}

#[test]
fn test_random_ops_default_config() {
    run_model(0x5EED, 16, 0.75);
}

#[test]
fn test_random_ops_small_table() {
    run_model(42, 1, 0.75);
}

#[test]
fn test_random_ops_high_load_factor() {
    // Long chains: lookups and removals must still find every key.
    let mut rng = StdRng::seed_from_u64(7);
    let mut table = ChainedTable::with_config(3, 200.0).unwrap();
    let mut model: HashMap<String, u32> = HashMap::new();
    for _ in 0..STEPS {
        let key = random_key(&mut rng);
        if rng.random_bool(0.7) {
            let value = rng.random::<u32>();
            table.insert(key.clone(), value);
            model.insert(key, value);
        } else {
            assert_eq!(table.remove(&key), model.remove(&key));
        }
    }
    assert_eq!(table.capacity(), 3);
    check_against_model(&table, &model);
}

#[test]
fn test_unseen_keys_are_absent() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut table = ChainedTable::new();
    for _ in 0..500 {
        table.insert(random_key(&mut rng), ());
    }
    for i in 0..200 {
        let unseen = format!("missing{i}");
        assert_eq!(table.get(&unseen), None);
        assert!(!table.contains_key(&unseen));
    }
}

#![allow(dead_code)]

use std::collections::BTreeSet;

pub use building_blocker_test_utils::init_tracing;

pub fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

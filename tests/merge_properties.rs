use std::collections::BTreeSet;

use proptest::prelude::*;

use building_blocker::config::{GameMode, ModeConfig};
use building_blocker::errors::BlockerError;

fn facility_set() -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set("[A-Za-z]{1,8}", 0..6)
}

fn mode() -> impl Strategy<Value = GameMode> {
    proptest::sample::select(GameMode::ALL.to_vec())
}

fn merged(mode: GameMode, parts: &[BTreeSet<String>]) -> BTreeSet<String> {
    let mut configs = parts.iter().map(|p| ModeConfig {
        mode,
        hidden_facilities: p.clone(),
    });
    let base = configs.next().expect("at least one part");
    base.merge(configs).unwrap().hidden_facilities
}

proptest! {
    #[test]
    fn merge_is_the_union_in_any_order(
        mode in mode(),
        a in facility_set(),
        b in facility_set(),
        c in facility_set(),
    ) {
        let union: BTreeSet<String> = a.iter().chain(&b).chain(&c).cloned().collect();

        let abc = merged(mode, &[a.clone(), b.clone(), c.clone()]);
        let cab = merged(mode, &[c.clone(), a.clone(), b.clone()]);
        let bca = merged(mode, &[b, c, a]);

        prop_assert_eq!(&abc, &union);
        prop_assert_eq!(&cab, &union);
        prop_assert_eq!(&bca, &union);
    }

    #[test]
    fn merge_with_other_mode_always_fails(
        base_mode in mode(),
        other_mode in mode(),
        a in facility_set(),
        b in facility_set(),
    ) {
        prop_assume!(base_mode != other_mode);

        let result = ModeConfig { mode: base_mode, hidden_facilities: a }
            .merge([ModeConfig { mode: other_mode, hidden_facilities: b }]);

        match result {
            Err(BlockerError::IncompatibleMerge { base, other }) => {
                prop_assert_eq!(base, base_mode);
                prop_assert_eq!(other, other_mode);
            }
            other => prop_assert!(false, "expected IncompatibleMerge, got {:?}", other),
        }
    }
}

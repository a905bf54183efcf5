//! Property: executing a batch leaves every touched partition equal to the
//! operations applied in insertion order on top of its prior state.

use std::collections::BTreeMap;

use crate::common::TestStore;
use hivedb::prelude::*;
use proptest::prelude::*;

const PARTITIONS: u8 = 3;
const KEYS: u8 = 4;

/// (partition index, key index, Some(value byte) = set / None = delete)
type GenOp = (u8, u8, Option<u8>);

fn gen_ops() -> impl Strategy<Value = Vec<GenOp>> {
    prop::collection::vec(
        (0..PARTITIONS, 0..KEYS, prop::option::of(any::<u8>())),
        0..48,
    )
}

fn partition_name(p: u8) -> String {
    format!("p{p}")
}

fn apply_to_store(ts: &TestStore, ops: &[GenOp], concurrent: bool) -> Result<()> {
    let batch = ts.batch();
    for (p, k, v) in ops {
        let partition = partition_name(*p);
        let key = vec![b'k', *k];
        let op = match v {
            Some(v) => Operation::set(partition, key, vec![*v]),
            None => Operation::delete(partition, key),
        };
        batch.add(op)?;
    }
    if concurrent {
        batch.execute_concurrent()
    } else {
        batch.execute()
    }
}

fn apply_to_model(
    model: &mut BTreeMap<(String, Vec<u8>), Vec<u8>>,
    ops: &[GenOp],
) {
    for (p, k, v) in ops {
        let entry = (partition_name(*p), vec![b'k', *k]);
        match v {
            Some(v) => {
                model.insert(entry, vec![*v]);
            }
            None => {
                model.remove(&entry);
            }
        }
    }
}

fn assert_store_matches_model(ts: &TestStore, model: &BTreeMap<(String, Vec<u8>), Vec<u8>>) {
    for p in 0..PARTITIONS {
        for k in 0..KEYS {
            let partition = partition_name(p);
            let key = vec![b'k', k];
            let expected = model.get(&(partition.clone(), key.clone()));
            let actual = ts.get(&partition, &key);
            assert_eq!(actual.as_ref(), expected, "mismatch at {partition}/k{k}");
        }
    }
}

proptest! {
    // Each case opens a fresh store file; keep the case count modest.
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn sequential_execute_matches_model(seed in gen_ops(), ops in gen_ops()) {
        let ts = TestStore::new();
        let mut model = BTreeMap::new();

        // Prior state, applied through the pass-through path.
        for (p, k, v) in &seed {
            if let Some(v) = v {
                ts.store
                    .set(&partition_name(*p), &[b'k', *k], &[*v])
                    .unwrap();
            }
        }
        apply_to_model(&mut model, &seed.iter().filter(|(_, _, v)| v.is_some()).cloned().collect::<Vec<_>>());

        apply_to_store(&ts, &ops, false).unwrap();
        apply_to_model(&mut model, &ops);

        assert_store_matches_model(&ts, &model);
    }

    #[test]
    fn concurrent_execute_matches_model(ops in gen_ops()) {
        let ts = TestStore::new();
        let mut model = BTreeMap::new();

        apply_to_store(&ts, &ops, true).unwrap();
        apply_to_model(&mut model, &ops);

        assert_store_matches_model(&ts, &model);
    }
}

//! Property-based tests for the alarm stack against a reference model.

use crate::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(u8, u32),
    Remove,
    Init,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..12, 0u32..1_000).prop_map(|(code, at)| Op::Add(code, at)),
        2 => Just(Op::Remove),
        1 => Just(Op::Init),
    ]
}

fn policy() -> impl Strategy<Value = OverflowPolicy> {
    prop_oneof![Just(OverflowPolicy::DropNewest), Just(OverflowPolicy::EvictOldest)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_matches_vec_model(
        policy in policy(),
        ops in prop::collection::vec(op(), 0..64),
    ) {
        const CAP: usize = 6;
        let config = AlarmStackConfig::builder()
            .overflow_policy(policy)
            .log_overflow(false)
            .build();
        let mut stack: AlarmStack<CAP> = AlarmStack::with_config(config);
        let mut model: std::vec::Vec<AlarmRecord> = std::vec::Vec::new();

        for op in ops {
            match op {
                Op::Add(code, at) => {
                    let id = AlarmId::from_code(code).unwrap_or(AlarmId::Apnea);
                    let record = AlarmRecord::new(id, at, [code; ALARM_DATA_LEN]);
                    stack.add_at(at, id, record.data);
                    if model.len() < CAP {
                        model.push(record);
                    } else if policy == OverflowPolicy::EvictOldest {
                        model.remove(0);
                        model.push(record);
                    }
                }
                Op::Remove => {
                    stack.remove();
                    model.pop();
                }
                Op::Init => {
                    stack.init();
                    model.clear();
                }
            }

            prop_assert!(stack.len() <= CAP);
            prop_assert_eq!(stack.len(), model.len());
            prop_assert_eq!(stack.available(), !model.is_empty());
            prop_assert_eq!(stack.read().ok(), model.last().copied());
        }

        let listed: std::vec::Vec<AlarmRecord> = stack.iter().copied().collect();
        let expected: std::vec::Vec<AlarmRecord> = model.iter().rev().copied().collect();
        prop_assert_eq!(listed, expected);
    }

    #[test]
    fn prop_occupancy_is_min_of_pushes_and_capacity(pushes in 0usize..40) {
        let mut stack: AlarmStack<16> = AlarmStack::new();
        for n in 0..pushes {
            let at = u32::try_from(n).unwrap_or(u32::MAX);
            stack.add_at(at, AlarmId::HighPeep, [0; ALARM_DATA_LEN]);
        }
        prop_assert_eq!(stack.len(), pushes.min(16));
        prop_assert_eq!(
            usize::try_from(stack.metrics().dropped).unwrap_or(usize::MAX),
            pushes.saturating_sub(16)
        );
    }
}

//! Fuzzes arbitrary sequences of alarm stack operations.
//!
//! Each input byte is one operation. The stack must never panic, never hold
//! more than its capacity, and always expose the most recent surviving
//! record on `read`.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_alarm_stack_ops

#![deny(static_mut_refs)]
#![no_main]

use libfuzzer_sys::fuzz_target;
use ventilator_alarms::{
    ALARM_DATA_LEN, AlarmId, AlarmStack, AlarmStackConfig, OverflowPolicy, PushOutcome,
};
use ventilator_hal::{FakeHal, HalApi};

const CAPACITY: usize = 8;

fuzz_target!(|data: &[u8]| {
    let Some((&first, ops)) = data.split_first() else {
        return;
    };
    let policy = if first & 1 == 0 {
        OverflowPolicy::DropNewest
    } else {
        OverflowPolicy::EvictOldest
    };
    let config = AlarmStackConfig::builder()
        .overflow_policy(policy)
        .log_overflow(false)
        .build();
    let mut stack: AlarmStack<CAPACITY> = AlarmStack::with_config(config);
    let mut hal = FakeHal::new();

    for &op in ops {
        let before = stack.len();
        match op >> 5 {
            0..=3 => {
                let id = AlarmId::from_code(op & 0x0F).unwrap_or(AlarmId::Apnea);
                let outcome = stack.add(&hal, id, [op; ALARM_DATA_LEN]);
                if outcome.is_stored() {
                    let top = stack.read().ok();
                    assert_eq!(top.map(|r| r.id), Some(id));
                    assert_eq!(top.map(|r| r.timestamp_ms), Some(hal.millis()));
                }
                if outcome == PushOutcome::Dropped {
                    assert_eq!(stack.len(), before);
                }
            }
            4 | 5 => {
                stack.remove();
                assert_eq!(stack.len(), before.saturating_sub(1));
            }
            6 => hal.delay(u32::from(op & 0x1F)),
            _ => stack.init(),
        }
        assert!(stack.len() <= CAPACITY);
        assert_eq!(stack.available(), stack.read().is_ok());
    }
});

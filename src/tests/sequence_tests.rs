//! Rolling sequence behavior

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{fixed_generator, ManualClock};
    use crate::*;

    #[test]
    fn test_sequential_calls_follow_counter() {
        let generator = fixed_generator(42);
        let initial = generator.counter();

        for k in 0..5000u64 {
            let id = generator.generate(None);
            assert_eq!(
                generator.extract.sequence(id) as u64,
                (initial + k) % 4096,
                "call {} out of order",
                k
            );
        }
        assert_eq!(generator.counter(), initial + 5000);
    }

    #[test]
    fn test_sequence_rollover() {
        let generator = fixed_generator(0);
        let ids: Vec<u64> = (0..4097).map(|_| generator.generate(Some(3))).collect();

        assert_eq!(generator.extract.sequence(ids[4095]), 4095);
        assert_eq!(generator.extract.sequence(ids[4096]), 0);
        // Fixed clock, same machine: the wrapped id repeats the first one
        assert_eq!(ids[4096], ids[0]);
    }

    #[test]
    fn test_initial_sequence() {
        let generator = SnowflakeId::with_initial_sequence(
            SnowflakeConfig::default(),
            ManualClock::since_epoch(7),
            4095,
        );
        let a = generator.generate(None);
        let b = generator.generate(None);

        assert_eq!(generator.extract.sequence(a), 4095);
        assert_eq!(generator.extract.sequence(b), 0);
        assert_eq!(generator.counter(), 4097);
    }

    #[test]
    fn test_sequence_stays_in_range() {
        let generator = SnowflakeId::new();
        for _ in 0..10_000 {
            let id = generator.generate(None);
            assert!(generator.extract.sequence(id) <= SnowflakeId::<SystemClock>::MAX_SEQUENCE);
        }
    }
}

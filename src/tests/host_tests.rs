//! Host function registration and calls

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::fixed_generator;
    use crate::*;

    #[test]
    fn test_register_zero_and_one_args() {
        let generator = fixed_generator(0);
        assert!(SnowflakeUdf::register(0, &generator).is_ok());
        assert!(SnowflakeUdf::register(1, &generator).is_ok());
    }

    #[test]
    fn test_register_rejects_two_args() {
        let generator = fixed_generator(0);
        let err = SnowflakeUdf::register(2, &generator).unwrap_err();

        assert_eq!(err, SnowflakeError::InvalidArity { arg_count: 2 });
        assert_eq!(
            err.to_string(),
            "snowflake_id requires at most one integer argument for the machine id"
        );
        // Rejected setup takes no tickets
        assert_eq!(generator.counter(), 0);
    }

    #[test]
    fn test_validate_setup() {
        type Udf<'a> = SnowflakeUdf<'a, SystemClock>;
        assert!(Udf::validate_setup(0).is_ok());
        assert!(Udf::validate_setup(1).is_ok());
        for n in 2..6 {
            assert_eq!(
                Udf::validate_setup(n),
                Err(SnowflakeError::InvalidArity { arg_count: n })
            );
        }
    }

    #[test]
    fn test_call_delegates_to_generator() {
        let generator = fixed_generator(1000);
        let udf = SnowflakeUdf::register(1, &generator).unwrap();

        assert_eq!(udf.call(Some(5)), 4194324480);
        assert_eq!(udf.call(None), 1000 * 4194304 + 4096 + 1);
        assert_eq!(generator.counter(), 2);
        assert!(std::ptr::eq(udf.generator(), &generator));
    }

    #[test]
    fn test_result_not_nullable() {
        assert!(!SnowflakeUdf::<'static, SystemClock>::declared_nullable());
        assert_eq!(SnowflakeUdf::<'static, SystemClock>::NAME, "snowflake_id");
    }

    #[test]
    fn test_process_generator() {
        let udf = SnowflakeUdf::register_process(1).unwrap();
        assert!(std::ptr::eq(udf.generator(), process_generator()));

        let before = process_generator().counter();
        let id = snowflake_id(Some(9));
        assert_eq!(process_generator().extract.machine_id(id), 9);
        // Other tests may share the process generator
        assert!(process_generator().counter() > before);

        assert!(SnowflakeUdf::register_process(2).is_err());
    }
}

//! Algorithm translation tests

#[cfg(test)]
mod tests {
    use crate::common::RecordingDriver;
    use crate::{assert_err, assert_ok};
    use cloudlb_rs::core::types::InvalidKind;
    use cloudlb_rs::{
        Algorithm, CreateBalancerRequest, DEFAULT_ALGORITHM, DriverError, DummyDriver,
        LoadBalancerDriver,
    };

    fn round_trips<D: LoadBalancerDriver>(driver: &D) {
        for (native, algorithm) in D::VALUE_TO_ALGORITHM {
            assert_eq!(assert_ok!(driver.value_to_algorithm(native)), *algorithm);
            let back = assert_ok!(driver.algorithm_to_value(*algorithm));
            assert_eq!(&back, native);
        }
        for (algorithm, native) in D::ALGORITHM_TO_VALUE {
            assert_eq!(&assert_ok!(driver.algorithm_to_value(*algorithm)), native);
            let back = assert_ok!(driver.value_to_algorithm(native));
            assert_eq!(back, *algorithm);
        }
    }

    #[test]
    fn test_default_algorithm() {
        assert_eq!(DEFAULT_ALGORITHM, Algorithm::RoundRobin);
        assert_eq!(
            CreateBalancerRequest::new("web", 80).algorithm,
            DEFAULT_ALGORITHM
        );
    }

    #[test]
    fn test_round_trip_dummy() {
        round_trips(&assert_ok!(DummyDriver::with_key("k")));
    }

    #[test]
    fn test_round_trip_recording() {
        round_trips(&RecordingDriver::new());
    }

    #[test]
    fn test_unknown_native_value_carries_value() {
        let driver = RecordingDriver::new();
        match assert_err!(driver.value_to_algorithm(&99)) {
            DriverError::InvalidValue {
                kind,
                value,
                driver,
            } => {
                assert_eq!(kind, InvalidKind::Value);
                assert_eq!(value, "99");
                assert_eq!(driver, "recording");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unmapped_algorithm_carries_algorithm() {
        let driver = RecordingDriver::new();
        let err = assert_err!(driver.algorithm_to_value(Algorithm::Random));
        assert!(matches!(
            &err,
            DriverError::InvalidValue { kind: InvalidKind::Algorithm, value, .. } if value == "random"
        ));
        assert_eq!(err.to_string(), "Invalid algorithm: random (driver: recording)");
    }

    #[test]
    fn test_unsupported_algorithm_blocks_creation() {
        let driver = RecordingDriver::new();
        let err = assert_err!(driver.create_balancer(
            CreateBalancerRequest::new("web", 80).with_algorithm(Algorithm::Random)
        ));
        assert_eq!(err.error_type(), "invalid_value");

        // caller-side fallback to the default
        let balancer = assert_ok!(driver.create_balancer(
            CreateBalancerRequest::new("web", 80).with_algorithm(DEFAULT_ALGORITHM)
        ));
        assert_eq!(balancer.state(), "BUILD");
    }

    #[test]
    fn test_supported_algorithms_follow_table_order() {
        assert_eq!(
            RecordingDriver::new().supported_algorithms(),
            vec![Algorithm::RoundRobin, Algorithm::LeastConnections]
        );
        assert_eq!(
            assert_ok!(DummyDriver::with_key("k")).supported_algorithms(),
            Algorithm::ALL.to_vec()
        );
    }
}

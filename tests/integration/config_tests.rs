//! Configuration loading tests

#[cfg(test)]
mod tests {
    use crate::common::StubConnection;
    use crate::{assert_err, assert_ok};
    use cloudlb_rs::{
        BaseDriver, Connection, ConfigError, CreateBalancerRequest, DriverConfig, DriverError,
        DummyDriver, HttpConnection, LoadBalancerDriver,
    };
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_driver_from_config_file() {
        let file = write_config(
            r#"
key: "file-key"
secret: "file-secret"
host: "lb.example.net"
timeout: 5
"#,
        );

        let config = assert_ok!(DriverConfig::from_file(file.path()));
        let driver = assert_ok!(BaseDriver::<StubConnection>::new(config));
        assert_eq!(driver.context().key(), "file-key");
        assert_eq!(driver.context().secret(), Some("file-secret"));
        assert_eq!(driver.context().config().timeout, 5);
        assert!(driver.context().connection().is_connected());
    }

    #[test]
    fn test_invalid_yaml_is_a_parse_error() {
        let file = write_config("key: [unclosed");
        let err = assert_err!(DriverConfig::from_file(file.path()));
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_invalid_file_content_fails_validation() {
        let file = write_config("key: \"k\"\ntimeout: 0\n");
        let err = assert_err!(DriverConfig::from_file(file.path()));
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "timeout"));
    }

    #[test]
    fn test_invalid_config_surfaces_as_driver_error() {
        let err = assert_err!(DummyDriver::new(DriverConfig::new("  ")));
        assert!(matches!(
            err,
            DriverError::Configuration(ConfigError::MissingField { .. })
        ));
    }

    #[test]
    fn test_http_connection_through_base_driver() {
        let config = DriverConfig::new("key")
            .with_host("lb.example.org")
            .with_secure(false);
        let driver = assert_ok!(BaseDriver::<HttpConnection>::new(config));

        let connection = driver.context().connection();
        assert!(connection.is_connected());
        assert_eq!(connection.base_url().as_str(), "http://lb.example.org/");
        assert!(driver.list_balancers().is_err());
    }

    #[test]
    fn test_http_connection_needs_host() {
        let err = assert_err!(BaseDriver::<HttpConnection>::new(DriverConfig::new("key")));
        assert_eq!(err.error_type(), "configuration");
    }

    #[test]
    fn test_request_round_trips_through_serde() {
        let request = CreateBalancerRequest::new("web", 8080);
        let json = serde_json::to_string(&request).unwrap();
        let parsed: CreateBalancerRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);
        assert!(!json.contains("members"));
    }
}

//! HTTP connection tests against a local mock provider API

#[cfg(test)]
mod tests {
    use crate::{assert_err, assert_ok};
    use cloudlb_rs::{Connection, DriverConfig, DriverError, DriverResult, HttpConnection};
    use reqwest::Method;
    use serde::Deserialize;
    use serde_json::json;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const DRIVER: &str = "http-test";

    #[derive(Debug, Deserialize, PartialEq)]
    struct BalancerRow {
        id: String,
        name: String,
    }

    /// Run `call` against a connection to `server` on a blocking thread
    async fn with_connection<T, F>(server: &MockServer, call: F) -> T
    where
        F: FnOnce(&HttpConnection) -> T + Send + 'static,
        T: Send + 'static,
    {
        let address = *server.address();
        tokio::task::spawn_blocking(move || {
            let config = DriverConfig::new("api-key")
                .with_secret("api-secret")
                .with_host(address.ip().to_string())
                .with_port(address.port())
                .with_secure(false)
                .with_timeout(5);
            let mut connection = HttpConnection::open(&config).expect("open");
            connection.connect().expect("connect");
            call(&connection)
        })
        .await
        .expect("blocking call panicked")
    }

    fn get(connection: &HttpConnection, route: &str) -> DriverResult<u16> {
        let request = connection.request(Method::GET, route)?;
        Ok(connection.execute(DRIVER, request)?.status().as_u16())
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/balancers"))
            .and(header_exists("authorization"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"id": "lb-1", "name": "web"}])),
            )
            .expect(2)
            .mount(&server)
            .await;

        let (status, rows) = with_connection(&server, |connection| {
            let status = get(connection, "/v1/balancers");
            let rows = connection
                .request(Method::GET, "v1/balancers")
                .and_then(|request| connection.execute_json::<Vec<BalancerRow>>(DRIVER, request));
            (status, rows)
        })
        .await;

        assert_eq!(assert_ok!(status), 200);
        assert_eq!(
            assert_ok!(rows),
            vec![BalancerRow {
                id: "lb-1".to_string(),
                name: "web".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_not_found_is_mapped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/balancers/7"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "no lb"})))
            .mount(&server)
            .await;

        let result = with_connection(&server, |connection| get(connection, "/v1/balancers/7")).await;
        match assert_err!(result) {
            DriverError::NotFound { resource } => assert_eq!(resource, "no lb"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/balancers"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down\n"))
            .mount(&server)
            .await;

        let result = with_connection(&server, |connection| get(connection, "/v1/balancers")).await;
        let err = assert_err!(result);
        assert!(err.is_retryable());
        match err {
            DriverError::Provider {
                driver,
                status,
                message,
            } => {
                assert_eq!(driver, DRIVER);
                assert_eq!(status, 503);
                assert_eq!(message, "upstream down");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejected_credentials_are_authentication_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"error": {"message": "bad key"}})),
            )
            .mount(&server)
            .await;

        let result = with_connection(&server, |connection| get(connection, "/v1/balancers")).await;
        assert!(matches!(
            assert_err!(result),
            DriverError::Authentication(ref message) if message == "bad key"
        ));
    }
}

//! # Client Configuration Service
//!
//! Hands the browser the settings it needs before its first API call: the
//! data-quality service base URL, the request timeout and the default data
//! format. The values come from the host environment (see `crate::config`).

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for host API endpoints.
const API_PATH: &str = "/api";

/// Registers `GET /api/config`, answered by `get::process` with the
/// `ClientConfig` stored as app data.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/config", get().to(get::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};
    use common::requests::ClientConfig;
    use pretty_assertions::assert_eq;

    #[actix_web::test]
    async fn serves_the_client_configuration() {
        let client = ClientConfig {
            api_base_url: "http://dq.internal:8000".to_string(),
            request_timeout_ms: 5000,
            default_format: "parquet".to_string(),
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(client.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/config").to_request();
        let served: ClientConfig = test::call_and_read_body_json(&app, req).await;
        assert_eq!(served, client);
    }

    #[actix_web::test]
    async fn unknown_api_paths_are_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ClientConfig::default()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/templates").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}

use actix_web::{web, HttpResponse, Responder};
use common::requests::ClientConfig;
use log::debug;

/// Actix web handler for `GET /api/config`.
pub async fn process(config: web::Data<ClientConfig>) -> impl Responder {
    debug!("Serving client configuration for {}", config.api_base_url);
    HttpResponse::Ok().json(config.get_ref())
}

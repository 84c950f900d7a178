use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use shared::{InvocationEvent, QueryParameters};

use crate::analysis::handler::ImageAnalysisHandler;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/analyze").route(web::get().to(analyze)))
        .service(web::resource("/api/invoke").route(web::post().to(invoke)))
        .service(web::resource("/health").route(web::get().to(health)));
}

/// `GET /api/analyze?imageUrl=...`: answers with the analysis text as the body.
async fn analyze(
    handler: web::Data<ImageAnalysisHandler>,
    query: web::Query<QueryParameters>,
) -> HttpResponse {
    let event = InvocationEvent {
        query_string_parameters: Some(query.into_inner()),
    };
    let response = handler.handle(&event).await;

    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status)
        .content_type("text/plain; charset=utf-8")
        .body(response.body)
}

/// `POST /api/invoke`: takes an invocation event and returns the `{statusCode, body}` record.
async fn invoke(
    handler: web::Data<ImageAnalysisHandler>,
    event: web::Json<InvocationEvent>,
) -> HttpResponse {
    let response = handler.handle(&event).await;
    HttpResponse::Ok().json(response)
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

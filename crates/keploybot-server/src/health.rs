use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};

use crate::server::AppContext;

pub async fn health_check_route(ctx: web::Data<Arc<AppContext>>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": ctx.config.version,
    }))
}

// src/handlers/exhibitions.rs
// DOCUMENTATION: HTTP handlers for exhibition detail views
// PURPOSE: Single-exhibition lookup with view count bump

use crate::db::ExhibitionRepository;
use crate::errors::ArtmapError;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;

/// GET /exhibitions/{id}
/// Full exhibition detail; each call increments the view count
pub async fn get_exhibition(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<impl Responder, ArtmapError> {
    let detail = ExhibitionRepository::get_detail(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(detail))
}

/// Configuration for exhibition routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/exhibitions").route("/{id}", web::get().to(get_exhibition)));
}

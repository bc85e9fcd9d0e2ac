use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use actix_cors::Cors;
use hsmatch_core::{classify, CorpusIndex, Error, MatchResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared, read-only state behind every request.
///
/// The index never changes after startup, so an `Arc` clone per worker is
/// all the synchronization needed.
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<CorpusIndex>,
    pub default_top_n: usize,
}

#[derive(Deserialize)]
struct ClassifyQuery {
    product_name: Option<String>,
    category: Option<String>,
    top_n: Option<usize>,
}

#[derive(Serialize)]
struct ClassifyResponse {
    product_name: String,
    category: String,
    results: Vec<MatchResult>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(state: AppState, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(state.clone()))
                .route("/", web::get().to(health_check))
                .route("/classify", web::get().to(classify_product))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn health_check() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "HS classifier is running"
    })))
}

async fn classify_product(
    state: web::Data<AppState>,
    query: web::Query<ClassifyQuery>,
) -> ActixResult<HttpResponse> {
    let (product_name, category) = match (&query.product_name, &query.category) {
        (Some(p), Some(c)) => (p.clone(), c.clone()),
        _ => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": "product_name and category query parameters are required"
            })));
        }
    };

    let top_n = query.top_n.unwrap_or(state.default_top_n);

    match classify(&state.index, &product_name, &category, top_n) {
        Ok(results) => Ok(HttpResponse::Ok().json(ClassifyResponse {
            product_name,
            category,
            results,
        })),
        Err(e @ Error::InvalidTopN(_)) => {
            Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            })))
        }
        Err(e) => Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}

//! Movie catalog API routes

use super::MovieCatalog;
use crate::error::ApiResult;
use axum::{
    extract::{Query, State},
    http::{header, Method},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use product_catalog_shared::types::{
    MovieCreatedResponse, MovieQuery, NewMovieRequest, NewThumbnailForm, ThumbnailAddedResponse,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Create the movie catalog router with its middleware
pub fn create_router(catalog: Arc<MovieCatalog>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/movies", get(get_movies))
        .route("/insert_movie", post(insert_movie))
        .route("/insert_thumbnail", post(insert_thumbnail))
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}

async fn index() -> &'static str {
    "Hello, World!"
}

/// GET /movies?id=N - one movie, or all of them when `id` is absent or 0
async fn get_movies(
    State(catalog): State<Arc<MovieCatalog>>,
    Query(query): Query<MovieQuery>,
) -> ApiResult<Response> {
    if query.id == 0 {
        return Ok(Json(catalog.list().await).into_response());
    }

    let movie = catalog.get(query.id).await?;
    Ok(Json(movie).into_response())
}

/// POST /insert_movie
async fn insert_movie(
    State(catalog): State<Arc<MovieCatalog>>,
    Json(req): Json<NewMovieRequest>,
) -> ApiResult<Json<MovieCreatedResponse>> {
    let (id, movie) = catalog.insert(req).await?;

    Ok(Json(MovieCreatedResponse {
        message: "Movie created successfully".to_string(),
        id,
        movie,
    }))
}

/// POST /insert_thumbnail (form fields `id` and `url`)
async fn insert_thumbnail(
    State(catalog): State<Arc<MovieCatalog>>,
    Form(form): Form<NewThumbnailForm>,
) -> ApiResult<Json<ThumbnailAddedResponse>> {
    let thumbnail = catalog.add_thumbnail(form.id, &form.url).await?;

    Ok(Json(ThumbnailAddedResponse {
        message: "Thumbnail added successfully".to_string(),
        movie_id: form.id,
        thumbnail_url: thumbnail.url,
    }))
}

pub mod error;
pub mod extract;
pub mod render;
pub mod routes;

use axum::{routing::get, Router};
use bankruptcy_core::classifier::SharedClassifier;
use bankruptcy_core::pipeline::RequestPipeline;
use std::path::Path;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::render::Renderer;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: RequestPipeline,
    pub renderer: Arc<Renderer>,
}

impl AppState {
    pub fn new(classifier: SharedClassifier) -> anyhow::Result<Self> {
        Ok(Self {
            pipeline: RequestPipeline::new(classifier),
            renderer: Arc::new(Renderer::new()?),
        })
    }
}

pub fn router(state: AppState, static_dir: &Path) -> Router {
    let renderer = state.renderer.clone();

    Router::new()
        .route("/", get(routes::index))
        .route("/healthz", get(routes::healthz))
        .route("/form", get(routes::show_form))
        .route("/result", get(routes::result_get).post(routes::result_post))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(CatchPanicLayer::custom(
            move |panic: Box<dyn std::any::Any + Send + 'static>| {
                error::panic_response(&renderer, panic)
            },
        ))
        .layer(TraceLayer::new_for_http())
}

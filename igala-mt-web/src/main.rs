use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use igala_mt::{
    BackTranslationResult, BatchBackTranslationSummary, BatchTranslationSummary, DetectionResult,
    Direction, Language, Lexicon, SuggestionResult, TranslationResult, batch_back_translate,
    back_translate, detect, load_corpus_from_file, suggest_words, translate_batch,
    translate_single,
};

#[derive(Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    #[serde(default = "default_direction")]
    pub direction: Direction,
}

#[derive(Deserialize)]
pub struct BatchTranslateRequest {
    pub texts: Vec<String>,
    #[serde(default = "default_direction")]
    pub direction: Direction,
}

#[derive(Deserialize)]
pub struct BackTranslateRequest {
    pub text: String,
    #[serde(default = "default_direction")]
    pub source_direction: Direction,
}

#[derive(Deserialize)]
pub struct BatchBackTranslateRequest {
    pub texts: Vec<String>,
    #[serde(default = "default_direction")]
    pub source_direction: Direction,
}

#[derive(Deserialize)]
pub struct DetectRequest {
    pub text: String,
}

#[derive(Deserialize)]
pub struct SuggestionRequest {
    pub partial_word: String,
    #[serde(default = "default_language")]
    pub language: Language,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub forward_entries: usize,
    pub inverse_entries: usize,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn default_direction() -> Direction {
    Direction::Forward
}

fn default_language() -> Language {
    Language::English
}

fn default_limit() -> usize {
    5
}

#[derive(Clone)]
pub struct AppState {
    pub lexicon: Arc<Lexicon>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse().unwrap()),
        )
        .init();

    // Build the lexicon once at startup; every handler shares it read-only
    let corpus_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("IGALA_CORPUS").ok())
        .unwrap_or_else(|| "data/corpus.csv".to_string());
    let rows = load_corpus_from_file(Path::new(&corpus_path))
        .map_err(|e| format!("Failed to load corpus '{}': {}", corpus_path, e))?;
    let lexicon = Lexicon::from_rows(&rows);

    info!(
        "📖 Loaded corpus '{}': {} forward / {} inverse entries",
        corpus_path,
        lexicon.forward_len(),
        lexicon.inverse_len()
    );

    let state = AppState {
        lexicon: Arc::new(lexicon),
    };

    info!("🌍 Starting igala-mt web server");

    // Build router
    let app = Router::new()
        .route("/", get(serve_index))
        .route("/health", get(health))
        .route("/api/translate", post(translate_text))
        .route("/api/translate/batch", post(translate_texts))
        .route("/api/back-translate", post(back_translate_text))
        .route("/api/back-translate/batch", post(back_translate_texts))
        .route("/api/detect-language", post(detect_text_language))
        .route("/api/suggestions", post(word_suggestions))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    info!("🚀 Server running at http://127.0.0.1:3000");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn serve_index() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        include_str!("static/index.html"),
    )
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        forward_entries: state.lexicon.forward_len(),
        inverse_entries: state.lexicon.inverse_len(),
    })
}

async fn translate_text(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Json<TranslationResult> {
    info!(
        "Translating '{}' ({})",
        &request.text, &request.direction
    );
    Json(translate_single(
        &state.lexicon,
        &request.text,
        request.direction,
    ))
}

async fn translate_texts(
    State(state): State<AppState>,
    Json(request): Json<BatchTranslateRequest>,
) -> Json<BatchTranslationSummary> {
    info!(
        "Batch translating {} texts ({})",
        request.texts.len(),
        &request.direction
    );
    Json(translate_batch(
        &state.lexicon,
        &request.texts,
        request.direction,
    ))
}

async fn back_translate_text(
    State(state): State<AppState>,
    Json(request): Json<BackTranslateRequest>,
) -> Json<BackTranslationResult> {
    info!(
        "Assessing '{}' ({})",
        &request.text, &request.source_direction
    );
    Json(back_translate(
        &state.lexicon,
        &request.text,
        request.source_direction,
    ))
}

async fn back_translate_texts(
    State(state): State<AppState>,
    Json(request): Json<BatchBackTranslateRequest>,
) -> Json<BatchBackTranslationSummary> {
    info!(
        "Batch assessing {} texts ({})",
        request.texts.len(),
        &request.source_direction
    );
    Json(batch_back_translate(
        &state.lexicon,
        &request.texts,
        request.source_direction,
    ))
}

async fn detect_text_language(
    State(state): State<AppState>,
    Json(request): Json<DetectRequest>,
) -> Json<DetectionResult> {
    Json(detect(&state.lexicon, &request.text))
}

async fn word_suggestions(
    State(state): State<AppState>,
    Json(request): Json<SuggestionRequest>,
) -> Result<Json<SuggestionResult>, (StatusCode, Json<ErrorResponse>)> {
    if request.partial_word.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "partial_word must not be empty".to_string(),
            }),
        ));
    }
    Ok(Json(suggest_words(
        &state.lexicon,
        &request.partial_word,
        request.language,
        request.limit,
    )))
}

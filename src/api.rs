// 🌐 HTTP API - stateless catalog/compare endpoints + per-session catalog state
//
// Each session owns its own CatalogState; nothing is shared across sessions.
// The store lock is held only for one synchronous `update`, so a selection
// toggle (evict included) lands as a single transition.

use crate::card::Card;
use crate::catalog::{bank_options, category_options, FEE_MAX, FEE_MIN};
use crate::compare::{parse_card_ids, resolve, Comparison, ComparisonRow, CARDS_PARAM};
use crate::filters::{FeeRange, FilterCriteria, IncomeRange};
use crate::selection::SelectionPolicy;
use crate::state::{project, update, CatalogEvent, CatalogState, CatalogView};
use anyhow::Context;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, RawQuery, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

// ============================================================================
// RESPONSE ENVELOPE
// ============================================================================

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Error half of a handler result
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into() }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self { status: StatusCode::NOT_FOUND, message: message.into() }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: message.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, "{}", self.message);
        } else {
            tracing::warn!(status = %self.status, "{}", self.message);
        }

        let body = ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(self.message),
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

// ============================================================================
// SESSIONS
// ============================================================================

#[derive(Debug, Clone)]
struct Session {
    state: CatalogState,
    last_seen: DateTime<Utc>,
}

/// Per-session catalog state, keyed by UUID
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions
            .lock()
            .map_err(|_| ApiError::internal("session store lock poisoned"))
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn create(&self, state: CatalogState, now: DateTime<Utc>) -> Result<(Uuid, CatalogView), ApiError> {
        let id = Uuid::new_v4();
        let view = project(&state);
        self.lock()?.insert(id, Session { state, last_seen: now });
        Ok((id, view))
    }

    fn view(&self, id: Uuid, now: DateTime<Utc>) -> Result<CatalogView, ApiError> {
        let mut sessions = self.lock()?;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| ApiError::not_found(format!("Unknown session {}", id)))?;
        session.last_seen = now;
        Ok(project(&session.state))
    }

    fn apply(&self, id: Uuid, event: CatalogEvent, now: DateTime<Utc>) -> Result<CatalogView, ApiError> {
        let mut sessions = self.lock()?;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| ApiError::not_found(format!("Unknown session {}", id)))?;
        session.state = update(&session.state, event);
        session.last_seen = now;
        Ok(project(&session.state))
    }

    fn remove(&self, id: Uuid) -> Result<bool, ApiError> {
        Ok(self.lock()?.remove(&id).is_some())
    }

    /// Drop sessions idle for longer than `ttl`; returns how many went
    fn purge_expired(&self, now: DateTime<Utc>, ttl: Duration) -> Result<usize, ApiError> {
        let mut sessions = self.lock()?;
        let before = sessions.len();
        sessions.retain(|_, s| now - s.last_seen <= ttl);
        let purged = before - sessions.len();
        if purged > 0 {
            tracing::info!(purged, remaining = sessions.len(), "expired sessions purged");
        }
        Ok(purged)
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Shared application state
#[derive(Clone)]
pub struct ApiState {
    base: Arc<Vec<Card>>,
    policy: SelectionPolicy,
    session_ttl: Duration,
    sessions: SessionStore,
}

impl ApiState {
    /// Fails on a TTL that is not positive or does not fit a `Duration`
    pub fn new(base: Vec<Card>, policy: SelectionPolicy, session_ttl_minutes: i64) -> anyhow::Result<Self> {
        let session_ttl = Duration::try_minutes(session_ttl_minutes)
            .filter(|ttl| *ttl > Duration::zero())
            .with_context(|| format!("Invalid session TTL: {} minutes", session_ttl_minutes))?;

        Ok(Self {
            base: Arc::new(base),
            policy,
            session_ttl,
            sessions: SessionStore::new(),
        })
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    fn purge(&self, now: DateTime<Utc>) -> Result<(), ApiError> {
        self.sessions.purge_expired(now, self.session_ttl).map(|_| ())
    }
}

// ============================================================================
// REQUEST / RESPONSE SHAPES
// ============================================================================

/// `GET /api/cards` query; list parameters are comma-separated
#[derive(Debug, Default, Deserialize)]
pub struct CardsQuery {
    pub search: Option<String>,
    pub banks: Option<String>,
    pub categories: Option<String>,
    pub fee_min: Option<u64>,
    pub fee_max: Option<u64>,
    pub income: Option<String>,
}

impl CardsQuery {
    fn to_criteria(&self) -> Result<FilterCriteria, ApiError> {
        let mut criteria = FilterCriteria::new();

        if let Some(search) = &self.search {
            criteria.search_text = search.clone();
        }
        criteria.banks = split_list(self.banks.as_deref());
        criteria.categories = split_list(self.categories.as_deref());

        let full = FeeRange::full();
        criteria.fee_range = FeeRange::new(
            self.fee_min.unwrap_or(full.low),
            self.fee_max.unwrap_or(full.high),
        );

        if let Some(income) = &self.income {
            criteria.income_range = income
                .parse::<IncomeRange>()
                .map_err(|e| ApiError::bad_request(e.to_string()))?;
        }

        Ok(criteria)
    }
}

fn split_list(value: Option<&str>) -> std::collections::BTreeSet<String> {
    value
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Serialize)]
pub struct CardsResponse {
    pub total: usize,
    pub count: usize,
    pub cards: Vec<Card>,
}

#[derive(Debug, Serialize)]
pub struct IncomeOption {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FilterOptions {
    pub banks: Vec<String>,
    pub categories: Vec<String>,
    pub income_ranges: Vec<IncomeOption>,
    pub fee_min: u64,
    pub fee_max: u64,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    #[serde(flatten)]
    pub comparison: Comparison,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub view: CatalogView,
}

// ============================================================================
// HANDLERS
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/cards - Stateless filter over the base catalog
async fn list_cards(
    State(state): State<ApiState>,
    query: Result<Query<CardsQuery>, QueryRejection>,
) -> ApiResult<CardsResponse> {
    let Query(query) = query?;
    let criteria = query.to_criteria()?;
    let cards = criteria.apply(&state.base);

    Ok(Json(ApiResponse::ok(CardsResponse {
        total: state.base.len(),
        count: cards.len(),
        cards,
    })))
}

/// GET /api/filters - Filter panel options
async fn filter_options(State(state): State<ApiState>) -> Json<ApiResponse<FilterOptions>> {
    let income_ranges = IncomeRange::ALL_OPTIONS
        .iter()
        .map(|r| IncomeOption { key: r.key(), label: r.label() })
        .collect();

    Json(ApiResponse::ok(FilterOptions {
        banks: bank_options(&state.base),
        categories: category_options(&state.base),
        income_ranges,
        fee_min: FEE_MIN,
        fee_max: FEE_MAX,
    }))
}

/// GET /api/compare?cards=1,3,7 - Resolve a comparison hand-off
async fn compare_cards(
    State(state): State<ApiState>,
    RawQuery(raw): RawQuery,
) -> Json<ApiResponse<CompareResponse>> {
    let ids = raw
        .as_deref()
        .and_then(cards_param)
        .map(|value| parse_card_ids(&value))
        .unwrap_or_default();

    let comparison = resolve(&ids, &state.base);
    let rows = comparison.rows();

    Json(ApiResponse::ok(CompareResponse { comparison, rows }))
}

/// Percent-decoded value of the first `cards=` pair; split before decoding
fn cards_param(raw: &str) -> Option<String> {
    raw.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        let key = urlencoding::decode(key).ok()?;
        if key != CARDS_PARAM {
            return None;
        }
        let value = urlencoding::decode(value).ok()?;
        Some(value.into_owned())
    })
}

/// POST /api/sessions - Start a session seeded from the base catalog
async fn create_session(State(state): State<ApiState>) -> ApiResult<SessionResponse> {
    let now = Utc::now();
    state.purge(now)?;

    let catalog = CatalogState::new(state.base.as_ref().clone(), state.policy);
    let (session_id, view) = state.sessions.create(catalog, now)?;
    tracing::info!(%session_id, policy = %state.policy, "session created");

    Ok(Json(ApiResponse::ok(SessionResponse { session_id, view })))
}

/// GET /api/sessions/:id - Current view of a session
async fn get_session(
    State(state): State<ApiState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<CatalogView> {
    let Path(id) = id?;
    let now = Utc::now();
    state.purge(now)?;
    Ok(Json(ApiResponse::ok(state.sessions.view(id, now)?)))
}

/// POST /api/sessions/:id/events - Apply one event, return the new view
async fn post_event(
    State(state): State<ApiState>,
    id: Result<Path<Uuid>, PathRejection>,
    event: Result<Json<CatalogEvent>, JsonRejection>,
) -> ApiResult<CatalogView> {
    let Path(id) = id?;
    let Json(event) = event?;
    let now = Utc::now();
    state.purge(now)?;

    tracing::debug!(session_id = %id, ?event, "applying event");
    Ok(Json(ApiResponse::ok(state.sessions.apply(id, event, now)?)))
}

/// DELETE /api/sessions/:id - Drop a session
async fn delete_session(
    State(state): State<ApiState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<&'static str> {
    let Path(id) = id?;
    if state.sessions.remove(id)? {
        tracing::info!(session_id = %id, "session closed");
        Ok(Json(ApiResponse::ok("deleted")))
    } else {
        Err(ApiError::not_found(format!("Unknown session {}", id)))
    }
}

// ============================================================================
// ROUTER
// ============================================================================

pub fn router(state: ApiState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/cards", get(list_cards))
        .route("/filters", get(filter_options))
        .route("/compare", get(compare_cards))
        .route("/sessions", axum::routing::post(create_session))
        .route("/sessions/:id", get(get_session).delete(delete_session))
        .route("/sessions/:id/events", axum::routing::post(post_event))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_cards;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_app(policy: SelectionPolicy) -> (Router, ApiState) {
        let state = ApiState::new(seed_cards(), policy, 30).unwrap();
        (router(state.clone()), state)
    }

    async fn response_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        (status, response_json(response).await)
    }

    async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        (status, response_json(response).await)
    }

    fn ids(value: &serde_json::Value) -> Vec<u64> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_u64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = test_app(SelectionPolicy::EvictOldest);
        let (status, body) = get_json(&app, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], "OK");
    }

    #[tokio::test]
    async fn test_cards_filtered_by_query() {
        let (app, _) = test_app(SelectionPolicy::EvictOldest);

        let (status, body) = get_json(&app, "/api/cards?banks=HDFC%20Bank&categories=Luxury").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["total"], 15);
        assert_eq!(ids(&body["data"]["cards"]), vec![10, 15]);

        let (_, body) = get_json(&app, "/api/cards?search=SAPPHIRO").await;
        assert_eq!(ids(&body["data"]["cards"]), vec![2]);

        let (_, body) = get_json(&app, "/api/cards?income=under-3l&fee_max=1000").await;
        assert_eq!(ids(&body["data"]["cards"]), vec![4]);
    }

    #[tokio::test]
    async fn test_cards_bad_income_is_400() {
        let (app, _) = test_app(SelectionPolicy::EvictOldest);
        let (status, body) = get_json(&app, "/api/cards?income=loads").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("loads"));
    }

    #[tokio::test]
    async fn test_filter_options() {
        let (app, _) = test_app(SelectionPolicy::EvictOldest);
        let (_, body) = get_json(&app, "/api/filters").await;
        assert_eq!(body["data"]["banks"][0], "HDFC Bank");
        assert_eq!(body["data"]["income_ranges"].as_array().unwrap().len(), 5);
        assert_eq!(body["data"]["fee_max"], 12000);
    }

    #[tokio::test]
    async fn test_compare_resolves_hand_off() {
        let (app, _) = test_app(SelectionPolicy::EvictOldest);

        let (_, body) = get_json(&app, "/api/compare?cards=7,1,999").await;
        assert_eq!(body["data"]["status"], "cards");
        assert_eq!(ids(&body["data"]["cards"]), vec![1, 7]);
        assert_eq!(body["data"]["rows"][0]["values"].as_array().unwrap().len(), 2);

        let (_, body) = get_json(&app, "/api/compare?cards=1%2C3").await;
        assert_eq!(ids(&body["data"]["cards"]), vec![1, 3]);

        let (_, body) = get_json(&app, "/api/compare?cards=abc").await;
        assert_eq!(body["data"]["status"], "nothing_selected");
        assert!(body["data"]["rows"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_session_event_cycle() {
        let (app, state) = test_app(SelectionPolicy::EvictOldest);

        let (status, body) = post_json(&app, "/api/sessions", serde_json::json!({})).await;
        assert_eq!(status, StatusCode::OK);
        let session_id = body["data"]["session_id"].as_str().unwrap().to_string();
        assert_eq!(state.sessions().len(), 1);

        let events_uri = format!("/api/sessions/{}/events", session_id);
        for id in [9, 3, 12, 1] {
            post_json(&app, &events_uri, serde_json::json!({"type": "toggle_selection", "id": id})).await;
        }

        let (_, body) = get_json(&app, &format!("/api/sessions/{}", session_id)).await;
        assert_eq!(ids(&body["data"]["selected"]), vec![1, 9, 12]);
        assert_eq!(body["data"]["compare_link"], "/compare?cards=1,9,12");
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let (app, _) = test_app(SelectionPolicy::Reject);

        let (_, a) = post_json(&app, "/api/sessions", serde_json::json!({})).await;
        let (_, b) = post_json(&app, "/api/sessions", serde_json::json!({})).await;
        let a = a["data"]["session_id"].as_str().unwrap().to_string();
        let b = b["data"]["session_id"].as_str().unwrap().to_string();

        post_json(
            &app,
            &format!("/api/sessions/{}/events", a),
            serde_json::json!({"type": "toggle_selection", "id": 2}),
        )
        .await;

        let (_, view_b) = get_json(&app, &format!("/api/sessions/{}", b)).await;
        assert!(view_b["data"]["selected"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reject_policy_notice() {
        let (app, _) = test_app(SelectionPolicy::Reject);
        let (_, body) = post_json(&app, "/api/sessions", serde_json::json!({})).await;
        let uri = format!("/api/sessions/{}/events", body["data"]["session_id"].as_str().unwrap());

        let mut last = serde_json::Value::Null;
        for id in 1..=4 {
            last = post_json(&app, &uri, serde_json::json!({"type": "toggle_selection", "id": id})).await.1;
        }

        assert_eq!(ids(&last["data"]["selected"]), vec![1, 2, 3]);
        assert_eq!(
            last["data"]["notice"],
            "You can select a maximum of 3 cards for comparison."
        );
    }

    #[tokio::test]
    async fn test_unknown_session_is_404() {
        let (app, _) = test_app(SelectionPolicy::EvictOldest);
        let (status, body) = get_json(&app, &format!("/api/sessions/{}", Uuid::new_v4())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_delete_session() {
        let (app, state) = test_app(SelectionPolicy::EvictOldest);
        let (_, body) = post_json(&app, "/api/sessions", serde_json::json!({})).await;
        let uri = format!("/api/sessions/{}", body["data"]["session_id"].as_str().unwrap());

        let response = app
            .clone()
            .oneshot(Request::builder().method("DELETE").uri(&uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(state.sessions().is_empty());
    }

    #[tokio::test]
    async fn test_compare_decodes_only_cards_value() {
        let (app, _) = test_app(SelectionPolicy::EvictOldest);

        let (_, body) = get_json(&app, "/api/compare?view=%26cards%3D9&cards=1").await;
        assert_eq!(ids(&body["data"]["cards"]), vec![1]);

        let (_, body) = get_json(&app, "/api/compare?view=%26cards%3D9").await;
        assert_eq!(body["data"]["status"], "nothing_selected");
    }

    #[tokio::test]
    async fn test_malformed_requests_use_error_envelope() {
        let (app, _) = test_app(SelectionPolicy::EvictOldest);
        let (_, body) = post_json(&app, "/api/sessions", serde_json::json!({})).await;
        let events_uri = format!("/api/sessions/{}/events", body["data"]["session_id"].as_str().unwrap());

        let (status, body) = post_json(
            &app,
            &events_uri,
            serde_json::json!({"type": "toggle_selection", "id": "x"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());

        let (status, body) = get_json(&app, "/api/cards?fee_min=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);

        let (status, body) = get_json(&app, "/api/sessions/not-a-uuid").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_poisoned_session_store_is_500() {
        let (app, state) = test_app(SelectionPolicy::EvictOldest);

        let store = state.sessions().clone();
        let _ = std::thread::spawn(move || {
            let _guard = store.sessions.lock().unwrap();
            panic!("worker died holding the session lock");
        })
        .join();

        let (status, body) = get_json(&app, &format!("/api/sessions/{}", Uuid::new_v4())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("poisoned"));
    }

    #[test]
    fn test_invalid_session_ttl_is_error() {
        for minutes in [i64::MAX, 0, -1] {
            assert!(ApiState::new(seed_cards(), SelectionPolicy::EvictOldest, minutes).is_err());
        }
    }

    #[tokio::test]
    async fn test_open_fee_bound_serializes_as_null() {
        let (app, _) = test_app(SelectionPolicy::EvictOldest);
        let (_, body) = post_json(&app, "/api/sessions", serde_json::json!({})).await;
        assert!(body["data"]["view"]["criteria"]["fee_range"]["high"].is_null());

        let uri = format!("/api/sessions/{}/events", body["data"]["session_id"].as_str().unwrap());
        let (status, body) = post_json(
            &app,
            &uri,
            serde_json::json!({"type": "set_fee_range", "low": 500, "high": null}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["criteria"]["fee_range"]["low"], 500);
        assert!(body["data"]["criteria"]["fee_range"]["high"].is_null());
        assert_eq!(ids(&body["data"]["filtered"]).len(), 11);
    }

    #[test]
    fn test_purge_expired_sessions() {
        let store = SessionStore::new();
        let now = Utc::now();
        let catalog = CatalogState::new(seed_cards(), SelectionPolicy::EvictOldest);

        store.create(catalog.clone(), now - Duration::minutes(45)).unwrap();
        store.create(catalog, now - Duration::minutes(5)).unwrap();

        let purged = store.purge_expired(now, Duration::minutes(30)).unwrap();
        assert_eq!(purged, 1);
        assert_eq!(store.len(), 1);
    }
}

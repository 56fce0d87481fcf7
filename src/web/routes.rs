use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::warn;

use super::pages;
use super::AppState;
use crate::gallery::{GalleryDialog, GalleryView, Paginator, Viewport};
use crate::platforms::{is_shorts_url, Platform};

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/gallery/:platform", get(gallery))
        .route("/api/projects/:platform", get(api_projects))
        .route("/healthz", get(health))
}

/// Page selection from the query string.
///
/// The query is read as raw pairs so a repeated `page` key cannot fail
/// extraction; the first occurrence wins.
#[derive(Debug, Default)]
pub struct PageParams {
    page: Option<String>,
}

impl PageParams {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            page: pairs
                .into_iter()
                .find_map(|(key, value)| (key == "page").then_some(value)),
        }
    }

    /// Requested page, before clamping. Missing or garbage means page 1;
    /// out-of-range integers saturate so they clamp to the nearest edge.
    fn requested(&self) -> i64 {
        let Some(raw) = self.page.as_deref().map(str::trim) else {
            return 1;
        };
        if let Ok(n) = raw.parse::<i64>() {
            return n;
        }
        let (negative, digits) = raw
            .strip_prefix('-')
            .map_or((false, raw), |rest| (true, rest));
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            if negative {
                i64::MIN
            } else {
                i64::MAX
            }
        } else {
            1
        }
    }
}

// ========== HTML Routes ==========

async fn home(State(state): State<AppState>) -> Response {
    let viewport = Viewport::new();
    let html = pages::render_home(
        &state.config,
        state.decoration.as_ref(),
        GalleryView::Closed,
        &viewport,
    );
    Html(html.into_string()).into_response()
}

async fn gallery(
    State(state): State<AppState>,
    Path(platform): Path<String>,
    Query(query): Query<Vec<(String, String)>>,
) -> Response {
    let Ok(platform) = platform.parse::<Platform>() else {
        let html = pages::render_not_found(&state.config, &platform);
        return (StatusCode::NOT_FOUND, Html(html.into_string())).into_response();
    };

    let params = PageParams::from_pairs(query);
    let viewport = Viewport::new();
    let mut dialog = GalleryDialog::open(&viewport);
    let session = dialog.session_mut();
    session.load(state.projects.as_ref(), platform).await;
    session.go_to_page(params.requested());

    let html = pages::render_home(
        &state.config,
        state.decoration.as_ref(),
        dialog.session().view(),
        &viewport,
    );
    Html(html.into_string()).into_response()
}

async fn health() -> &'static str {
    "OK"
}

// ========== API Routes ==========

#[derive(Debug, Serialize)]
struct ApiProject<'a> {
    id: &'a str,
    video_url: &'a str,
    year: i32,
    order_index: i32,
    identifier: Option<String>,
    shorts: bool,
}

#[derive(Debug, Serialize)]
struct ApiPage<'a> {
    platform: Platform,
    page: usize,
    total_pages: usize,
    total_items: usize,
    items: Vec<ApiProject<'a>>,
}

async fn api_projects(
    State(state): State<AppState>,
    Path(platform): Path<String>,
    Query(query): Query<Vec<(String, String)>>,
) -> Response {
    let Ok(platform) = platform.parse::<Platform>() else {
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("unknown platform: {platform}") })),
        )
            .into_response();
    };

    let params = PageParams::from_pairs(query);
    let rows = match state.projects.fetch_by_platform(platform).await {
        Ok(rows) => rows,
        Err(e) => {
            warn!(platform = %platform, error = %e, "Projects API query failed");
            return (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": e.user_message() })),
            )
                .into_response();
        }
    };

    let paginator = Paginator::new(rows.len());
    let page = paginator.clamp_page(params.requested());
    let items = paginator
        .page_slice(&rows, page)
        .iter()
        .map(|p| ApiProject {
            id: &p.id,
            video_url: &p.video_url,
            year: p.year,
            order_index: p.order_index,
            identifier: platform.extract_identifier(&p.video_url),
            shorts: platform == Platform::YouTube && is_shorts_url(&p.video_url),
        })
        .collect();

    Json(ApiPage {
        platform,
        page,
        total_pages: paginator.total_pages(),
        total_items: rows.len(),
        items,
    })
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>) -> PageParams {
        PageParams {
            page: page.map(String::from),
        }
    }

    #[test]
    fn test_requested_page() {
        assert_eq!(params(None).requested(), 1);
        assert_eq!(params(Some("3")).requested(), 3);
        assert_eq!(params(Some(" -5 ")).requested(), -5);
        assert_eq!(params(Some("abc")).requested(), 1);
        assert_eq!(params(Some("")).requested(), 1);
        assert_eq!(params(Some("99999999999999999999999")).requested(), i64::MAX);
        assert_eq!(params(Some("-99999999999999999999999")).requested(), i64::MIN);
    }

    #[test]
    fn test_repeated_page_key_uses_first() {
        let pairs = vec![
            ("page".to_string(), "2".to_string()),
            ("sort".to_string(), "new".to_string()),
            ("page".to_string(), "3".to_string()),
        ];
        assert_eq!(PageParams::from_pairs(pairs).requested(), 2);
        assert_eq!(PageParams::from_pairs(Vec::new()).requested(), 1);
    }
}

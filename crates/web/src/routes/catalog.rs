//! Product catalog route handlers.
//!
//! The same listing is served in three renditions, selected by the path's
//! extension:
//!
//! ```text
//! GET /productos.html - HTML table
//! GET /productos.xls  - the HTML table as a spreadsheet download
//! GET /productos.json - JSON array download
//! ```
//!
//! Prices are only included when the visitor has a session, in every
//! rendition.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Json,
    extract::State,
    http::{HeaderValue, Uri, header},
    response::{IntoResponse, Response},
};
use manejo_cookies_core::{ProductView, redact_all};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::OptionalSession;
use crate::models::SessionUser;
use crate::state::AppState;

/// Content type announced for the spreadsheet download.
pub const SPREADSHEET_CONTENT_TYPE: &str = "application/vnd.ms-excel";

/// Rendition of the catalog requested by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Html,
    Spreadsheet,
    Json,
}

impl CatalogFormat {
    /// Pick the rendition from a request path such as `/productos.json`.
    ///
    /// Returns `None` for any extension other than `html`, `xls` or `json`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let (_, extension) = path.rsplit_once('.')?;
        match extension {
            "html" => Some(Self::Html),
            "xls" => Some(Self::Spreadsheet),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// `Content-Disposition` value for renditions served as downloads.
    #[must_use]
    pub const fn content_disposition(self) -> Option<&'static str> {
        match self {
            Self::Html => None,
            Self::Spreadsheet => Some("attachment; filename=productos.xls"),
            Self::Json => Some("attachment; filename=productos.json"),
        }
    }
}

/// Catalog page.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/products.html")]
pub struct CatalogTemplate {
    pub user: Option<SessionUser>,
    pub show_price: bool,
    pub products: Vec<ProductView>,
}

/// Standalone catalog table for the spreadsheet download.
///
/// Opened from disk by the spreadsheet application, so all styling is inline
/// and nothing is linked.
#[derive(Template)]
#[template(path = "catalog/spreadsheet.html")]
pub struct SpreadsheetTemplate {
    pub user: Option<SessionUser>,
    pub show_price: bool,
    pub products: Vec<ProductView>,
}

/// Serve the product catalog in the rendition named by the path.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unsupported extension and
/// `AppError::Template` if the table fails to render.
#[instrument(skip_all, fields(path = %uri.path()))]
pub async fn catalog(
    State(state): State<AppState>,
    OptionalSession(user): OptionalSession,
    uri: Uri,
) -> Result<Response> {
    let format = CatalogFormat::from_path(uri.path())
        .ok_or_else(|| AppError::NotFound(uri.path().to_string()))?;

    let show_price = user.is_some();
    let products = redact_all(&state.products().list(), show_price);
    tracing::debug!(?format, show_price, count = products.len(), "Serving catalog");

    let mut response = match format {
        CatalogFormat::Html => CatalogTemplate {
            user,
            show_price,
            products,
        }
        .into_response(),
        CatalogFormat::Spreadsheet => {
            let body = SpreadsheetTemplate {
                user,
                show_price,
                products,
            }
            .render()?;
            ([(header::CONTENT_TYPE, SPREADSHEET_CONTENT_TYPE)], body).into_response()
        }
        CatalogFormat::Json => Json(products).into_response(),
    };

    if let Some(disposition) = format.content_disposition() {
        response.headers_mut().insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static(disposition),
        );
    }

    Ok(response)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(CatalogFormat::from_path("/productos.html"), Some(CatalogFormat::Html));
        assert_eq!(
            CatalogFormat::from_path("/productos.xls"),
            Some(CatalogFormat::Spreadsheet)
        );
        assert_eq!(CatalogFormat::from_path("/productos.json"), Some(CatalogFormat::Json));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert_eq!(CatalogFormat::from_path("/productos.pdf"), None);
        assert_eq!(CatalogFormat::from_path("/productos.JSON"), None);
        assert_eq!(CatalogFormat::from_path("/productos"), None);
    }

    #[test]
    fn test_only_downloads_have_disposition() {
        assert_eq!(CatalogFormat::Html.content_disposition(), None);
        assert_eq!(
            CatalogFormat::Json.content_disposition(),
            Some("attachment; filename=productos.json")
        );
    }

    #[test]
    fn test_table_omits_price_column_without_session() {
        let products = vec![ProductView {
            id: 1.into(),
            name: "notebook".to_string(),
            kind: "computacion".to_string(),
            price: None,
        }];
        let html = CatalogTemplate {
            user: None,
            show_price: false,
            products,
        }
        .render()
        .unwrap();

        assert!(html.contains("notebook"));
        assert!(!html.contains("PRECIO"));
        assert!(!html.contains("class=\"precio\""));
    }

    #[test]
    fn test_spreadsheet_is_self_contained() {
        let products = vec![ProductView {
            id: 1.into(),
            name: "notebook".to_string(),
            kind: "computacion".to_string(),
            price: Some(manejo_cookies_core::Price::from_cents(17_500_000)),
        }];
        let body = SpreadsheetTemplate {
            user: SessionUser::new("admin"),
            show_price: true,
            products,
        }
        .render()
        .unwrap();

        assert!(!body.contains("/static/"));
        assert!(!body.contains("<link"));
        assert!(body.contains("border=\"1\""));
        assert!(body.contains("bgcolor=\"#4a69bd\""));
        assert!(body.contains("175000.00"));
    }
}

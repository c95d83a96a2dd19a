use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::dto::quote_dto::{CreateQuoteRequest, DeleteQuoteResponse};
use crate::export::quote_export::{self, ExportError, ExportFormat};
use crate::listing::quote_filter::{self, FilterSpec, ServiceFilter};
use crate::model::quote::ServiceKind;
use crate::service::quote_service::{QuoteService, QuoteServiceImpl};
use crate::util::error::{HandlerError, HandlerErrorKind};

// Handler: Create Quote (public)
pub async fn create_quote_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    payload: Result<Json<CreateQuoteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, HandlerError> {
    info!("[create_quote_handler] Handler called");

    // An unparseable body is a malformed request, never a field-specific
    // validation failure.
    let Json(payload) = payload.map_err(|e| {
        error!("[create_quote_handler] Malformed request body: {}", e);
        HandlerError {
            error: HandlerErrorKind::BadRequest,
            message: "Malformed request body".to_string(),
            details: None,
        }
    })?;

    let new_quote = payload.validate().map_err(|e| {
        error!("[create_quote_handler] Validation failed: {}", e);
        HandlerError {
            error: HandlerErrorKind::Validation,
            message: e.to_string(),
            details: None,
        }
    })?;

    let created = service
        .register_quote(new_quote)
        .await
        .map_err(HandlerError::from)?;

    Ok((StatusCode::CREATED, Json(created)))
}

// Handler: List Quotes (admin only)
pub async fn list_quotes_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let quotes = service.list_quotes().await.map_err(HandlerError::from)?;
    Ok(Json(quotes))
}

// Handler: Delete Quote (admin only)
pub async fn delete_quote_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    Path((id,)): Path<(String,)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_quote_id(&id)?;
    service.delete_quote(id).await.map_err(HandlerError::from)?;
    Ok(Json(DeleteQuoteResponse {
        message: "Quote deleted successfully".to_string(),
    }))
}

/// A quote id on the wire must be a positive integer; anything else is
/// rejected before the store is reached.
fn parse_quote_id(raw: &str) -> Result<u64, HandlerError> {
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            error!("Invalid quote id: {}", raw);
            Err(HandlerError {
                error: HandlerErrorKind::BadRequest,
                message: "Invalid quote id".to_string(),
                details: None,
            })
        }
    }
}

/// Query parameters for quote export.
#[derive(Debug, Deserialize)]
pub struct ExportQueryParams {
    pub format: Option<String>,
    pub search: Option<String>,
    pub service: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

// Handler: Export Quotes (admin only)
//
// GET /quotes/export?format=csv|json&search=X&service=X&from=Y&to=Y
pub async fn export_quotes_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    Query(params): Query<ExportQueryParams>,
) -> Result<impl IntoResponse, HandlerError> {
    let format = params
        .format
        .as_deref()
        .unwrap_or("json")
        .parse::<ExportFormat>()
        .map_err(|_| HandlerError {
            error: HandlerErrorKind::BadRequest,
            message: format!(
                "Unsupported export format: {}",
                params.format.as_deref().unwrap_or_default()
            ),
            details: None,
        })?;

    let spec = FilterSpec {
        search_text: params.search.clone().unwrap_or_default(),
        service: parse_service_filter(params.service.as_deref())?,
        created_at_start: parse_date(params.from.as_deref())?,
        created_at_end: parse_date(params.to.as_deref())?,
    };

    let quotes = service.list_quotes().await.map_err(HandlerError::from)?;

    // One page holding the whole filtered set; pagination is a display concern.
    let page_size = quotes.len().max(1);
    let view = quote_filter::apply(&quotes, &spec, 1, page_size);

    let artifact = quote_export::export(&view.items, format).map_err(|e| match e {
        ExportError::EmptyInput => HandlerError {
            error: HandlerErrorKind::BadRequest,
            message: "Nothing to export".to_string(),
            details: None,
        },
        ExportError::Serialization(msg) => HandlerError {
            error: HandlerErrorKind::Internal,
            message: msg,
            details: None,
        },
    })?;

    info!(
        "[export_quotes_handler] Exporting {} quotes as {}",
        view.items.len(),
        artifact.filename
    );

    Ok((
        [
            (header::CONTENT_TYPE, artifact.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", artifact.filename),
            ),
        ],
        artifact.bytes,
    ))
}

fn parse_service_filter(raw: Option<&str>) -> Result<ServiceFilter, HandlerError> {
    match raw {
        None | Some("all") => Ok(ServiceFilter::All),
        Some(s) => s
            .parse::<ServiceKind>()
            .map(ServiceFilter::Only)
            .map_err(|_| HandlerError {
                error: HandlerErrorKind::BadRequest,
                message: format!("Unknown service: {}", s),
                details: None,
            }),
    }
}

fn parse_date(raw: Option<&str>) -> Result<Option<chrono::NaiveDate>, HandlerError> {
    match raw {
        None => Ok(None),
        Some(s) => chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| HandlerError {
                error: HandlerErrorKind::BadRequest,
                message: format!("Invalid date format: {}", s),
                details: None,
            }),
    }
}

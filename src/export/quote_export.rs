use crate::model::quote::Quote;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(()),
        }
    }
}

/// The fixed display projection of a quote used by both export formats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Service")]
    pub service: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Created At")]
    pub created_at: String,
}

impl From<&Quote> for ExportRow {
    fn from(quote: &Quote) -> Self {
        ExportRow {
            name: quote.name.clone(),
            email: quote.email.clone(),
            service: quote.service.as_str().to_string(),
            description: quote.description.clone().unwrap_or_default(),
            created_at: quote
                .created_at
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Nothing to export")]
    EmptyInput,
    #[error("Failed to serialize export: {0}")]
    Serialization(String),
}

/// A downloadable snapshot of a (filtered) quote set.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub content_type: &'static str,
}

/// Serialize `records` into a downloadable artifact.
///
/// JSON exports are a pretty-printed array of [`ExportRow`]s; CSV exports
/// carry the same projection with a header line and standard quoting. The
/// suggested filename carries the UTC date of the export. Pure transform,
/// no network or persistence side effects.
pub fn export(records: &[Quote], format: ExportFormat) -> Result<ExportArtifact, ExportError> {
    if records.is_empty() {
        return Err(ExportError::EmptyInput);
    }

    let rows: Vec<ExportRow> = records.iter().map(ExportRow::from).collect();

    let bytes = match format {
        ExportFormat::Json => serde_json::to_vec_pretty(&rows)
            .map_err(|e| ExportError::Serialization(e.to_string()))?,
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for row in &rows {
                writer
                    .serialize(row)
                    .map_err(|e| ExportError::Serialization(e.to_string()))?;
            }
            writer
                .into_inner()
                .map_err(|e| ExportError::Serialization(e.to_string()))?
        }
    };

    let filename = format!(
        "quotes_export_{}.{}",
        chrono::Utc::now().format("%Y-%m-%d"),
        format.extension()
    );

    Ok(ExportArtifact {
        bytes,
        filename,
        content_type: format.content_type(),
    })
}

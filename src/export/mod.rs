pub mod quote_export;

pub use quote_export::{export, ExportArtifact, ExportError, ExportFormat};

use crate::model::quote::ServiceKind;
use serde::{Deserialize, Serialize};

/// Public quote submission payload.
///
/// Every field is optional at the serde layer so that an absent field is
/// reported as a `MissingField` validation failure rather than a
/// deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuoteRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub service: Option<String>,
    pub description: Option<String>,
}

/// A submission that passed validation, ready to hand to the store.
#[derive(Debug, Clone)]
pub struct NewQuote {
    pub name: String,
    pub email: String,
    pub service: ServiceKind,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Email must contain an '@'")]
    InvalidEmailShape,
    #[error("Unknown service: {0}")]
    InvalidService(String),
}

impl CreateQuoteRequest {
    /// Validate the submission against the public boundary rules.
    ///
    /// Check order: required fields, then email shape, then service
    /// membership. Pure function of the payload.
    pub fn validate(&self) -> Result<NewQuote, QuoteValidationError> {
        let name = required_field("name", &self.name)?;
        let email = required_field("email", &self.email)?;
        let service = required_field("service", &self.service)?;
        let description = required_field("description", &self.description)?;

        if !email.contains('@') {
            return Err(QuoteValidationError::InvalidEmailShape);
        }

        let service = service
            .parse::<ServiceKind>()
            .map_err(|_| QuoteValidationError::InvalidService(service))?;

        Ok(NewQuote {
            name,
            email,
            service,
            description,
        })
    }
}

fn required_field(
    name: &'static str,
    value: &Option<String>,
) -> Result<String, QuoteValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.clone()),
        _ => Err(QuoteValidationError::MissingField(name)),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteQuoteResponse {
    pub message: String,
}

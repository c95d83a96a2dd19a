use serde::{Deserialize, Serialize};

/// The closed set of services a quote can be requested for.
///
/// The wire representation is the display string shown on the public quote
/// form, not the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceKind {
    #[serde(rename = "Digital business cards")]
    DigitalBusinessCards,
    #[serde(rename = "Analytics tracking")]
    AnalyticsTracking,
    #[serde(rename = "Custom design")]
    CustomDesign,
    #[serde(rename = "Entreprise solutions")]
    EntrepriseSolutions,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::DigitalBusinessCards,
        ServiceKind::AnalyticsTracking,
        ServiceKind::CustomDesign,
        ServiceKind::EntrepriseSolutions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::DigitalBusinessCards => "Digital business cards",
            ServiceKind::AnalyticsTracking => "Analytics tracking",
            ServiceKind::CustomDesign => "Custom design",
            ServiceKind::EntrepriseSolutions => "Entreprise solutions",
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ServiceKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceKind::ALL
            .iter()
            .find(|kind| kind.as_str() == s)
            .copied()
            .ok_or(())
    }
}

/// A persisted quote request.
///
/// `id` and the timestamps are assigned by the store on create. `description`
/// is optional at this layer; the public submission boundary requires it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub id: Option<u64>,
    pub name: String,
    pub email: String,
    pub service: ServiceKind,
    pub description: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

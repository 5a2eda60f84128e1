//! HTTP DTOs for the deck parsing endpoint.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::StartupProfile;

/// Successful parse response: the full profile on the wire format.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub company_name: String,
    pub description: String,
    pub problem: String,
    pub solution: String,
    pub market_size: Option<String>,
    pub team: Option<Vec<String>>,
    pub revenue_model: Option<String>,
    pub funding_info: Option<String>,
    pub sectors: Vec<String>,
}

impl From<StartupProfile> for ProfileResponse {
    fn from(profile: StartupProfile) -> Self {
        Self {
            company_name: profile.company_name,
            description: profile.description,
            problem: profile.problem,
            solution: profile.solution,
            market_size: profile.market_size,
            team: profile.team,
            revenue_model: profile.revenue_model,
            funding_info: profile.funding_info,
            sectors: profile.sectors,
        }
    }
}

/// Standard error payload; every handled failure resolves to this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// Generic message for all recovered "no profile" outcomes.
    pub fn could_not_generate() -> Self {
        Self::new("Could not generate a profile from the PDF.")
    }
}

//! Startup profile entity and the draft mapping it is built from.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Sentinel the model returns for `companyName` when the document is a
/// generic template rather than a specific pitch deck. Treated as a control
/// signal, never as data.
pub const COMPANY_NOT_FOUND: &str = "Not found in document";

/// A detailed, structured model of a startup from its pitch deck.
///
/// Constructed once from a validated [`ProfileDraft`], immutable thereafter.
/// Serialization uses the wire-format camelCase keys and always writes every
/// field, with unset optionals as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupProfile {
    pub company_name: String,
    pub description: String,
    pub problem: String,
    pub solution: String,
    #[serde(default)]
    pub market_size: Option<String>,
    #[serde(default)]
    pub team: Option<Vec<String>>,
    #[serde(default)]
    pub revenue_model: Option<String>,
    /// e.g. "$2M Seed Round" or "Series A"
    #[serde(default)]
    pub funding_info: Option<String>,
    /// e.g. ["FinTech", "B2B SaaS"]
    #[serde(default)]
    pub sectors: Vec<String>,
}

impl StartupProfile {
    /// Builds a profile from an analyzer draft.
    ///
    /// Unknown keys in the model reply were already dropped during draft
    /// deserialization; here only the required fields are enforced.
    pub fn try_from_draft(draft: ProfileDraft) -> Result<Self, IncompleteProfile> {
        Ok(Self {
            company_name: draft.company_name.ok_or(IncompleteProfile::new("companyName"))?,
            description: draft.description.ok_or(IncompleteProfile::new("description"))?,
            problem: draft.problem.ok_or(IncompleteProfile::new("problem"))?,
            solution: draft.solution.ok_or(IncompleteProfile::new("solution"))?,
            market_size: draft.market_size,
            team: draft.team,
            revenue_model: draft.revenue_model,
            funding_info: draft.funding_info,
            sectors: draft.sectors,
        })
    }
}

/// A required profile field was absent from the analyzer's reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("The analyzed document did not yield a required field: '{field}'.")]
pub struct IncompleteProfile {
    pub field: &'static str,
}

impl IncompleteProfile {
    pub fn new(field: &'static str) -> Self {
        Self { field }
    }
}

/// Permissive deserialization target for the model's JSON reply.
///
/// Every field is optional at this stage and unknown keys are ignored, so a
/// chatty model cannot break parsing. `sectors` accepts either a JSON list
/// or a bare scalar; a scalar is promoted to a one-element list of its
/// string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default)]
    pub market_size: Option<String>,
    #[serde(default)]
    pub team: Option<Vec<String>>,
    #[serde(default)]
    pub revenue_model: Option<String>,
    #[serde(default)]
    pub funding_info: Option<String>,
    #[serde(default, deserialize_with = "sectors_as_list")]
    pub sectors: Vec<String>,
}

/// Deserializes `sectors` from a list, a bare scalar, or null.
fn sectors_as_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => Vec::new(),
        serde_json::Value::String(s) => vec![s],
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        other => vec![other.to_string()],
    })
}

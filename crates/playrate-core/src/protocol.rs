//! The control wire protocol between remote controllers and the speed
//! authority.
//!
//! Shapes are frozen by historical callers: requests are tagged by `action`,
//! mutations accept their amount under either `delta` or the older `value`
//! spelling, and amounts sent as numeric strings are tolerated. Anything
//! that does not parse as a known request is ignored by the responder
//! without a reply.

use serde::{Deserialize, Deserializer, Serialize};

/// A control request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum Request {
    /// Read the authoritative rate. Pure; never touches the page.
    #[serde(rename = "getSpeed")]
    GetSpeed,
    /// Move the rate by a relative amount.
    #[serde(rename = "changeSpeed")]
    ChangeSpeed {
        #[serde(
            default,
            deserialize_with = "lenient_number",
            skip_serializing_if = "Option::is_none"
        )]
        delta: Option<f64>,
        #[serde(
            default,
            deserialize_with = "lenient_number",
            skip_serializing_if = "Option::is_none"
        )]
        value: Option<f64>,
    },
    /// Adopt an absolute rate.
    #[serde(rename = "setSpeed")]
    SetSpeed {
        #[serde(
            default,
            deserialize_with = "lenient_number",
            skip_serializing_if = "Option::is_none"
        )]
        delta: Option<f64>,
        #[serde(
            default,
            deserialize_with = "lenient_number",
            skip_serializing_if = "Option::is_none"
        )]
        value: Option<f64>,
    },
}

impl Request {
    /// Relative adjustment under the canonical field name.
    pub fn change(delta: f64) -> Self {
        Request::ChangeSpeed {
            delta: Some(delta),
            value: None,
        }
    }

    /// Absolute set under the canonical field name.
    pub fn set(value: f64) -> Self {
        Request::SetSpeed {
            delta: None,
            value: Some(value),
        }
    }
}

/// Amount carried by a mutating request: `delta` wins over the legacy
/// `value` spelling, and a request carrying neither means zero.
pub fn requested_amount(delta: Option<f64>, value: Option<f64>) -> f64 {
    delta.or(value).unwrap_or(0.0)
}

/// Accept a number, a numeric string, or anything else as no amount at all.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(match raw {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    })
}

/// A control reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    /// Outcome of a mutation, in the legacy `{success, speed}` /
    /// `{success, error}` shapes.
    Mutation {
        success: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        speed: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
    /// Answer to `getSpeed`.
    Speed { speed: f64 },
}

impl Response {
    pub fn speed(speed: f64) -> Self {
        Response::Speed { speed }
    }

    /// Mutation applied; `speed` is the rate the authority settled on.
    pub fn applied(speed: f64) -> Self {
        Response::Mutation {
            success: true,
            speed: Some(speed),
            error: None,
        }
    }

    /// Mutation recorded but not applied to any element.
    pub fn rejected(error: impl Into<String>) -> Self {
        Response::Mutation {
            success: false,
            speed: None,
            error: Some(error.into()),
        }
    }
}

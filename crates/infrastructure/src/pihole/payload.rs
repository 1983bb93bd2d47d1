//! Wire formats of the Pi-hole HTTP APIs and their mapping to [`PiholeStats`].
//!
//! Counters may be JSON numbers or strings (`api.php?summary` formats them
//! as `"1,234"`), so the summary is decoded from a `serde_json::Value`
//! rather than derived.

use netscene_domain::{DomainError, PiholeStats};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reported when a v6 summary carries no blocking state.
pub const UNKNOWN_STATUS: &str = "unknown";

/// Largest integer an f64 holds exactly.
const MAX_EXACT_F64_INT: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Serialize)]
pub struct AuthRequest<'a> {
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub session: AuthSession,
}

#[derive(Debug, Deserialize)]
pub struct AuthSession {
    pub valid: bool,
    #[serde(default)]
    pub sid: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

pub fn decode_auth(body: &str) -> Result<AuthResponse, DomainError> {
    serde_json::from_str(body)
        .map_err(|e| DomainError::Decode(format!("invalid auth response: {}", e)))
}

/// Map a summary body into stats.
pub fn decode_summary(body: &str) -> Result<PiholeStats, DomainError> {
    let trimmed = body.trim_start();
    if trimmed.starts_with('<') {
        return Err(DomainError::Auth(
            "received an HTML page instead of JSON (login required)".to_string(),
        ));
    }

    let value: Value = serde_json::from_str(trimmed)
        .map_err(|e| DomainError::Decode(format!("invalid JSON: {}", e)))?;

    let object = match value {
        Value::Object(object) => object,
        // api.php answers `[]` when the token is missing or wrong
        Value::Array(items) if items.is_empty() => {
            return Err(DomainError::Auth(
                "API token missing or rejected".to_string(),
            ))
        }
        other => {
            return Err(DomainError::Decode(format!(
                "expected a JSON object, got {}",
                json_type(&other)
            )))
        }
    };

    if let Some(error) = object.get("error") {
        return Err(api_error(error));
    }

    // Range checks belong to the use case; this only maps shapes.
    match object.get("queries") {
        Some(Value::Object(queries)) => decode_v6(&object, queries),
        _ => decode_flat(&object),
    }
}

fn decode_flat(object: &Map<String, Value>) -> Result<PiholeStats, DomainError> {
    Ok(PiholeStats {
        domains_being_blocked: count(object, "domains_being_blocked")?,
        dns_queries_today: count(object, "dns_queries_today")?,
        ads_blocked_today: count(object, "ads_blocked_today")?,
        ads_percentage_today: percentage(object, "ads_percentage_today")?,
        status: status(object)?,
    })
}

fn decode_v6(
    object: &Map<String, Value>,
    queries: &Map<String, Value>,
) -> Result<PiholeStats, DomainError> {
    let gravity = match object.get("gravity") {
        Some(Value::Object(gravity)) => gravity,
        Some(other) => {
            return Err(DomainError::Decode(format!(
                "field 'gravity' has wrong type {}",
                json_type(other)
            )))
        }
        None => return Err(DomainError::Decode("missing field 'gravity'".to_string())),
    };

    let status = if object.contains_key("status") {
        status(object)?
    } else {
        UNKNOWN_STATUS.to_string()
    };

    Ok(PiholeStats {
        domains_being_blocked: count(gravity, "domains_being_blocked")?,
        dns_queries_today: count(queries, "total")?,
        ads_blocked_today: count(queries, "blocked")?,
        ads_percentage_today: percentage(queries, "percent_blocked")?,
        status,
    })
}

fn required<'a>(object: &'a Map<String, Value>, name: &str) -> Result<&'a Value, DomainError> {
    object
        .get(name)
        .ok_or_else(|| DomainError::Decode(format!("missing field '{}'", name)))
}

fn count(object: &Map<String, Value>, name: &str) -> Result<u64, DomainError> {
    let value = required(object, name)?;
    let invalid = || DomainError::Decode(format!("field '{}' is not a count: {}", name, value));

    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                return Ok(v);
            }
            match n.as_f64() {
                Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= MAX_EXACT_F64_INT => Ok(f as u64),
                _ => Err(invalid()),
            }
        }
        Value::String(s) => s.trim().replace(',', "").parse().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

fn percentage(object: &Map<String, Value>, name: &str) -> Result<f64, DomainError> {
    let value = required(object, name)?;
    let invalid = || DomainError::Decode(format!("field '{}' is not a number: {}", name, value));

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.filter(|p| p.is_finite()).ok_or_else(invalid)
}

fn status(object: &Map<String, Value>) -> Result<String, DomainError> {
    match required(object, "status")? {
        Value::String(s) => Ok(s.clone()),
        other => Err(DomainError::Decode(format!(
            "field 'status' has wrong type {}",
            json_type(other)
        ))),
    }
}

/// v6 error body: `{"error": {"key": "unauthorized", "message": "..."}}`
fn api_error(error: &Value) -> DomainError {
    let key = error.get("key").and_then(Value::as_str).unwrap_or("");
    let message = error
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("unspecified error")
        .to_string();

    match key {
        "unauthorized" | "forbidden" => DomainError::Auth(message),
        _ => DomainError::Decode(format!("API error {}: {}", key, message)),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

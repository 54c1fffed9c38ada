//! Validation of incoming response payloads.
//!
//! The answer service returns loosely typed JSON. Everything that enters
//! the engine goes through [`QueryResponse::from_value`], which rejects
//! payloads with the wrong shape and coerces unusable relevance scores to
//! "absent".

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};

use super::types::{coerce_score, Citation, QueryResponse};

/// Message shown when the answer service could not be reached at all.
pub const CONNECTION_FAILURE_MESSAGE: &str =
    "Failed to connect to the API. Make sure the backend is running.";

impl QueryResponse {
    /// Parse and validate a JSON payload.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Validate an already decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut object) = value else {
            return Err(Error::ingress("$", "expected an object"));
        };

        let query = take_string(&mut object, "query")?;
        let response = take_string(&mut object, "response")?;

        let citations = match object.remove("citations") {
            Some(Value::Array(items)) => items
                .into_iter()
                .enumerate()
                .map(|(idx, item)| citation_from_value(idx, item))
                .collect::<Result<Vec<_>>>()?,
            Some(_) => return Err(Error::ingress("citations", "expected an array")),
            None => return Err(Error::ingress("citations", "missing field")),
        };

        Ok(Self {
            query,
            response,
            citations,
        })
    }
}

fn take_string(object: &mut Map<String, Value>, field: &str) -> Result<String> {
    match object.remove(field) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(Error::ingress(field, "expected a string")),
        None => Err(Error::ingress(field, "missing field")),
    }
}

fn citation_from_value(idx: usize, value: Value) -> Result<Citation> {
    let Value::Object(mut object) = value else {
        return Err(Error::ingress(
            format!("citations[{}]", idx),
            "expected an object",
        ));
    };

    let source = take_string(&mut object, "source")
        .map_err(|e| prefix_field(e, idx))?;
    let text = take_string(&mut object, "text").map_err(|e| prefix_field(e, idx))?;

    let relevance_score = match object.remove("relevance_score") {
        None | Some(Value::Null) => None,
        Some(raw) => {
            let score = coerce_score(&raw);
            if score.is_none() {
                debug!(index = idx, raw = %raw, "Unusable relevance score treated as absent");
            }
            score
        }
    };

    Ok(Citation {
        source,
        text,
        relevance_score,
    })
}

fn prefix_field(error: Error, idx: usize) -> Error {
    match error {
        Error::Ingress { field, message } => {
            Error::ingress(format!("citations[{}].{}", idx, field), message)
        }
        other => other,
    }
}

/// Derive the message shown for a failed request.
///
/// `status` is `None` when the service could not be reached. Otherwise the
/// `detail` string of a JSON error body is used when there is one, falling
/// back to a generic message carrying the HTTP status.
pub fn failure_message(status: Option<u16>, body: &str) -> String {
    let Some(status) = status else {
        return CONNECTION_FAILURE_MESSAGE.to_string();
    };

    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("detail")
                .and_then(Value::as_str)
                .filter(|d| !d.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("Server error: {}", status))
}

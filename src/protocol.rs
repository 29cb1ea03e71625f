//! JSON bodies of the service endpoints that are not game data.

use serde::{Deserialize, Serialize};

/// `GET /healthz`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        HealthStatus {
            status: "OK".into(),
        }
    }
}

/// `GET /info`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BotInfo {
    pub name: String,
    pub strategy: String,
    pub negotiation: String,
    pub version: String,
}

/// Body of 404 and 500 responses.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorBody {
            error: message.into(),
        }
    }
}

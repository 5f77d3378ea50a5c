use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque text request. No structure is imposed on `body`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterRequest {
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterResponse {
    pub body: String,
}

impl From<String> for AdapterRequest {
    fn from(body: String) -> Self {
        Self { body }
    }
}

/// How an input document is split into requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleMode {
    /// The whole input is a single request.
    #[default]
    Whole,
    /// Every line, terminator included, is its own request.
    Lines,
}

impl HandleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandleMode::Whole => "whole",
            HandleMode::Lines => "lines",
        }
    }
}

impl fmt::Display for HandleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HandleMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "whole" => Ok(HandleMode::Whole),
            "lines" => Ok(HandleMode::Lines),
            other => Err(format!("unknown mode '{}', expected 'whole' or 'lines'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub requests: usize,
    pub bytes_in: usize,
    pub bytes_out: usize,
    pub output_path: String,
}

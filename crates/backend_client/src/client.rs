//! RailPal backend HTTP client.
//!
//! Two endpoints: `POST /api/ocr/recognize` (image bytes in, recognized text
//! out) and `POST /api/payment/create-checkout-session` (price ID in,
//! redirect URL out).

use std::path::Path;
use std::time::Duration;

/// Production backend base URL.
pub const API_BASE: &str = "https://railpal-backend.onrender.com";

/// Recognition can be slow on large photos; give it more room than a
/// typical API call. This timeout is also the only escape hatch for a hung
/// recognition call.
const RECOGNIZE_TIMEOUT: Duration = Duration::from_secs(120);

/// Error type for backend operations.
#[derive(Debug)]
pub enum BackendError {
    /// Network / transport error
    Network(String),
    /// HTTP error with status code
    Http(u16, String),
    /// Response body was not the expected shape
    Parse(String),
    /// Local file I/O error (reading an image to upload)
    Io(String),
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendError::Network(msg) => write!(f, "Network error: {}", msg),
            BackendError::Http(code, msg) => write!(f, "HTTP {}: {}", code, msg),
            BackendError::Parse(msg) => write!(f, "Parse error: {}", msg),
            BackendError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for BackendError {}

/// RailPal backend client (blocking).
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::blocking::Client,
    api_base: String,
}

impl BackendClient {
    /// Create a client against the production backend.
    pub fn new() -> Result<Self, BackendError> {
        Self::with_base_url(API_BASE.to_string())
    }

    /// Create a client against an explicit base URL (tests, self-hosting).
    pub fn with_base_url(api_base: String) -> Result<Self, BackendError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(format!("railpal/{}", env!("CARGO_PKG_VERSION")))
            .timeout(RECOGNIZE_TIMEOUT)
            .build()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Ok(Self { http, api_base })
    }

    /// Run OCR on an image. Returns the raw recognized text.
    ///
    /// Any failure here must abort the upload before normalization — no
    /// partial records, and the caller's session state stays untouched.
    pub fn recognize(&self, image: Vec<u8>) -> Result<String, BackendError> {
        let url = format!("{}/api/ocr/recognize", self.api_base);
        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/octet-stream")
            .body(image)
            .send()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let body = check_status(response)?;
        body["text"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| BackendError::Parse("missing 'text' in recognition response".into()))
    }

    /// Read an image file and run OCR on it.
    pub fn recognize_file(&self, path: &Path) -> Result<String, BackendError> {
        let image = std::fs::read(path)
            .map_err(|e| BackendError::Io(format!("cannot read {}: {}", path.display(), e)))?;
        self.recognize(image)
    }

    /// Create a checkout session. Returns the redirect URL.
    pub fn create_checkout_session(&self, price_id: &str) -> Result<String, BackendError> {
        let url = format!("{}/api/payment/create-checkout-session", self.api_base);
        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "priceId": price_id }))
            .send()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let body = check_status(response)?;
        body["url"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| BackendError::Parse("missing 'url' in checkout response".into()))
    }
}

/// Map a non-2xx response to an error, otherwise parse the JSON body.
fn check_status(response: reqwest::blocking::Response) -> Result<serde_json::Value, BackendError> {
    let status = response.status().as_u16();
    if !response.status().is_success() {
        let body = response.text().unwrap_or_default();
        return Err(BackendError::Http(status, body));
    }
    response
        .json::<serde_json::Value>()
        .map_err(|e| BackendError::Parse(e.to_string()))
}

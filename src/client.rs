//! Single-shot HTTP clients for the local inference servers.
//!
//! Each call sends exactly one request with library-default settings and
//! keeps whatever the server answered, JSON or not.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response, multipart};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

pub const DEFAULT_PREDICT_URL: &str = "http://localhost:5001/predict";
pub const DEFAULT_DETECT_URL: &str = "http://localhost:5004/detect_fake_image";
pub const SAMPLE_COMPLAINT: &str = "There is a huge pothole on the main road causing traffic";

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReplyBody {
    Json(Value),
    /// Body that failed to parse as JSON.
    Raw { error: String, text: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerReply {
    pub status: u16,
    pub body: ReplyBody,
}

impl ServerReply {
    pub fn from_parts(status: u16, text: String) -> Self {
        let body = match serde_json::from_str::<Value>(&text) {
            Ok(json) => ReplyBody::Json(json),
            Err(e) => ReplyBody::Raw {
                error: e.to_string(),
                text,
            },
        };
        Self { status, body }
    }

    fn from_response(response: Response) -> Result<Self> {
        let status = response.status().as_u16();
        let text = response.text().context("failed to read response body")?;
        debug!(status, bytes = text.len(), "received response");
        Ok(Self::from_parts(status, text))
    }

    /// Top-level keys of a JSON object body.
    pub fn keys(&self) -> Option<Vec<&str>> {
        match &self.body {
            ReplyBody::Json(Value::Object(map)) => Some(map.keys().map(String::as_str).collect()),
            _ => None,
        }
    }

    pub fn confidence(&self) -> Option<&Value> {
        match &self.body {
            ReplyBody::Json(json) => json.get("confidence"),
            ReplyBody::Raw { .. } => None,
        }
    }
}

pub fn build_client() -> Result<Client> {
    Client::builder()
        .build()
        .context("failed to build HTTP client")
}

/// `POST {"text": ...}` to the complaint classifier.
pub fn predict(client: &Client, url: &str, text: &str) -> Result<ServerReply> {
    info!(url, bytes = text.len(), "sending prediction request");
    let response = client
        .post(url)
        .json(&PredictRequest { text })
        .send()
        .with_context(|| format!("request to {url} failed"))?;
    ServerReply::from_response(response)
}

/// Upload `image_path` as the multipart field `image` to the fake detector.
pub fn detect_fake_image(client: &Client, url: &str, image_path: &Path) -> Result<ServerReply> {
    info!(url, image = %image_path.display(), "sending image for fake detection");
    let form = multipart::Form::new()
        .file("image", image_path)
        .with_context(|| format!("failed to read image {}", image_path.display()))?;
    let response = client
        .post(url)
        .multipart(form)
        .send()
        .with_context(|| format!("request to {url} failed"))?;
    ServerReply::from_response(response)
}

fn report_raw(out: &mut impl Write, error: &str, text: &str) -> io::Result<()> {
    writeln!(out, "JSON Error: {error}")?;
    writeln!(out, "Raw: {text}")
}

pub fn report_prediction(reply: &ServerReply, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Status Code: {}", reply.status)?;
    match &reply.body {
        ReplyBody::Json(json) => match reply.keys() {
            Some(keys) => {
                writeln!(out, "Keys: {keys:?}")?;
                let confidence = reply.confidence().cloned().unwrap_or(Value::Null);
                writeln!(out, "Confidence: {confidence}")
            }
            None => report_raw(out, "response is not a JSON object", &json.to_string()),
        },
        ReplyBody::Raw { error, text } => report_raw(out, error, text),
    }
}

pub fn report_detection(reply: &ServerReply, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Status Code: {}", reply.status)?;
    match &reply.body {
        ReplyBody::Json(json) => writeln!(out, "Response: {json}"),
        ReplyBody::Raw { error, text } => report_raw(out, error, text),
    }
}

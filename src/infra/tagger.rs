// ============================================================
// Layer 6 — HTTP Entity Tagger
// ============================================================
// Sends evidence text to a named-entity tagging service and
// returns it annotated in slashTags form (`word/TAG`).
//
// Request:  POST <ner_url>  form { input, outputFormat=slashTags }
// Response: either the tagged text itself, or the service's
//           HTML demo page with the tagged text embedded after
//           the form, roughly:
//
//   ...</FORM> ... </div> ... </div> ... </div>   (third one)
//   He/O was/O born/O in/O Mumbai/LOCATION ./O
//   <div id="footer"> ...
//
// A failed call is retried a bounded number of times with a
// linear backoff. A reply that does not have this shape counts
// as a failed call.

use anyhow::{anyhow, Context, Result};
use std::{thread, time::Duration};

use crate::domain::traits::EntityTagger;

const RETRY_BACKOFF: Duration = Duration::from_millis(250);

pub struct HttpEntityTagger {
    client:  reqwest::blocking::Client,
    url:     String,
    retries: u32,
}

impl HttpEntityTagger {
    pub fn new(url: impl Into<String>, timeout: Duration, retries: u32) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .context("Cannot build HTTP client for the tagging service")?;
        Ok(Self { client, url: url.into(), retries })
    }

    fn request(&self, text: &str) -> Result<String> {
        let body = self
            .client
            .post(&self.url)
            .form(&[("input", text), ("outputFormat", "slashTags")])
            .send()
            .with_context(|| format!("Tagging request to '{}' failed", self.url))?
            .error_for_status()
            .context("Tagging service returned an error status")?
            .text()
            .context("Cannot read tagging service response")?;

        extract_tagged_text(&body)
            .ok_or_else(|| anyhow!("Tagging service response has no tagged text"))
    }
}

impl EntityTagger for HttpEntityTagger {
    fn tag(&self, text: &str) -> Result<String> {
        tracing::info!("Requesting entity tags ({} chars)", text.len());

        let mut attempt = 0;
        loop {
            match self.request(text) {
                Ok(tagged) => {
                    tracing::info!("Received entity tags");
                    return Ok(tagged);
                }
                Err(e) if attempt < self.retries => {
                    attempt += 1;
                    tracing::warn!("Tagging attempt {} failed: {:#}; retrying", attempt, e);
                    thread::sleep(RETRY_BACKOFF * attempt);
                }
                Err(e) => {
                    tracing::error!("Entity tagging unavailable: {:#}", e);
                    return Err(e);
                }
            }
        }
    }
}

/// Pull the tagged text out of a tagging service reply.
///
/// Plain-text replies are returned as they are, even when the
/// tagged text itself contains `<`. HTML replies (an `<html`
/// or `</form>` marker, any case) are searched for the line
/// following the third `</div>` after `</FORM>`, up to the next
/// `<div id`.
pub fn extract_tagged_text(body: &str) -> Option<String> {
    if !looks_like_html(body) {
        let trimmed = body.trim();
        return (!trimmed.is_empty()).then(|| trimmed.to_string());
    }

    let form_end = body.find("</FORM>").or_else(|| body.find("</form>"))?;
    let mut pos = form_end;
    for _ in 0..3 {
        pos += 1 + body[pos + 1..].find("</div>")?;
    }
    let line_start = pos + body[pos..].find('\n')? + 1;
    let end = body[line_start..]
        .find("<div id")
        .map(|i| line_start + i)
        .unwrap_or(body.len());

    let tagged = body[line_start..end].trim();
    (!tagged.is_empty()).then(|| tagged.to_string())
}

fn looks_like_html(body: &str) -> bool {
    let lower = body.to_ascii_lowercase();
    lower.contains("<html") || lower.contains("</form>")
}

use crate::error::OrteliusError;

use super::AnnotationProvider;

const DEFAULT_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

/// [`AnnotationProvider`](super::AnnotationProvider) backed by a MediaWiki
/// `opensearch` endpoint.
///
/// Issues one HTTP GET per fetch with the place title as the search term.
/// The response is a nested JSON array in which the third top-level element
/// holds the description candidates; the best match for the search term is
/// the first one, and that is the only value consumed.
pub struct OpensearchProvider {
    http_client: reqwest::Client,
    endpoint: String,
}

impl OpensearchProvider {
    /// Creates a provider querying the English Wikipedia.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Creates a provider querying the given MediaWiki api endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent("ortelius/0.1")
            .build()
            .expect("default http client configuration is valid");

        Self {
            http_client,
            endpoint: endpoint.into(),
        }
    }

    async fn download(&self, title: &str) -> Result<bytes::Bytes, OrteliusError> {
        let response = self
            .http_client
            .get(&self.endpoint)
            .query(&[
                ("action", "opensearch"),
                ("search", title),
                ("format", "json"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            log::info!("annotation request for {title:?} failed: {}", response.status());
            return Err(OrteliusError::Io);
        }

        Ok(response.bytes().await?)
    }
}

impl Default for OpensearchProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl AnnotationProvider for OpensearchProvider {
    async fn fetch(&self, title: &str) -> Result<String, OrteliusError> {
        let payload = self.download(title).await?;
        decode_summary(&payload)
    }
}

/// Extracts the best-match summary from an `opensearch` payload.
///
/// The consumed shape is `payload[2][0]`: the first candidate of the third
/// top-level element. Anything else in the payload is ignored.
pub(crate) fn decode_summary(payload: &[u8]) -> Result<String, OrteliusError> {
    let value: serde_json::Value = serde_json::from_slice(payload)?;

    let candidates = value
        .get(2)
        .and_then(|element| element.as_array())
        .ok_or(OrteliusError::MalformedResponse)?;

    match candidates.first() {
        Some(serde_json::Value::String(summary)) if !summary.is_empty() => Ok(summary.clone()),
        Some(serde_json::Value::String(_)) | None => Err(OrteliusError::NotFound),
        Some(_) => Err(OrteliusError::MalformedResponse),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // Shape returned by the real endpoint for `action=opensearch`.
    const STARBUCKS_PAYLOAD: &[u8] = br#"[
        "Starbucks",
        ["Starbucks", "Starbucks unionization effort"],
        ["American multinational coffeehouse chain", ""],
        ["https://en.wikipedia.org/wiki/Starbucks", "https://en.wikipedia.org/wiki/Starbucks_unionization_effort"]
    ]"#;

    #[test]
    fn decodes_the_first_candidate_of_the_third_element() {
        let summary = decode_summary(STARBUCKS_PAYLOAD).expect("payload is well-formed");
        assert_eq!(summary, "American multinational coffeehouse chain");
    }

    #[test]
    fn missing_third_element_is_malformed() {
        assert_matches!(
            decode_summary(br#"["Starbucks", ["Starbucks"]]"#),
            Err(OrteliusError::MalformedResponse)
        );
    }

    #[test]
    fn non_array_payload_is_malformed() {
        assert_matches!(
            decode_summary(br#"{"error": "bad request"}"#),
            Err(OrteliusError::MalformedResponse)
        );
        assert_matches!(
            decode_summary(br#"["a", ["b"], "not an array", []]"#),
            Err(OrteliusError::MalformedResponse)
        );
    }

    #[test]
    fn non_string_candidate_is_malformed() {
        assert_matches!(
            decode_summary(br#"["a", ["b"], [42], []]"#),
            Err(OrteliusError::MalformedResponse)
        );
    }

    #[test]
    fn absent_results_are_not_found() {
        assert_matches!(
            decode_summary(br#"["gibberish", [], [], []]"#),
            Err(OrteliusError::NotFound)
        );
        assert_matches!(
            decode_summary(br#"["gibberish", ["x"], [""], []]"#),
            Err(OrteliusError::NotFound)
        );
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert_matches!(
            decode_summary(b"<html>not json</html>"),
            Err(OrteliusError::MalformedResponse)
        );
    }
}

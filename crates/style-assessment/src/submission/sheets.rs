use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde_json::json;

use super::sink::{RecordSink, SinkError};
use crate::assessment::SubmissionPayload;

/// Appends records to a Google Sheets range through the v4 `values:append` call.
///
/// Authentication is a pre-issued OAuth access token; minting and refreshing
/// it is left to the deployment.
pub struct SheetsRecordSink {
    client: reqwest::Client,
    endpoint: Url,
    access_token: String,
}

impl SheetsRecordSink {
    pub fn new(
        api_base: &str,
        spreadsheet_id: &str,
        range: &str,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SinkError> {
        let endpoint = append_endpoint(api_base, spreadsheet_id, range)?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint,
            access_token: access_token.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl std::fmt::Debug for SheetsRecordSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsRecordSink")
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

fn append_endpoint(api_base: &str, spreadsheet_id: &str, range: &str) -> Result<Url, SinkError> {
    let mut url = Url::parse(api_base.trim_end_matches('/'))
        .map_err(|err| SinkError::InvalidEndpoint(format!("{api_base}: {err}")))?;
    url.path_segments_mut()
        .map_err(|_| SinkError::InvalidEndpoint(api_base.to_string()))?
        .pop_if_empty()
        .extend(["v4", "spreadsheets", spreadsheet_id, "values"])
        .push(&format!("{range}:append"));
    url.query_pairs_mut()
        .append_pair("valueInputOption", "USER_ENTERED");
    Ok(url)
}

#[async_trait]
impl RecordSink for SheetsRecordSink {
    async fn append(&self, payload: &SubmissionPayload) -> Result<(), SinkError> {
        let body = json!({ "values": [payload.to_row()] });
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(SinkError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

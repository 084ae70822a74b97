//! Status checks shared by the search and transition calls.

use serde::Deserialize;

use crate::error::JiraError;

/// Jira's error envelope for 4xx/5xx replies.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    #[serde(default)]
    error_messages: Vec<String>,
}

/// Pass a success response through; anything else becomes
/// [`JiraError::Api`].
///
/// The message is Jira's `errorMessages` joined with `"; "` when the body
/// carries them, otherwise the raw body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, JiraError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(JiraError::Api {
        status: status.as_u16(),
        message: error_message(body),
    })
}

fn error_message(body: String) -> String {
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) if !parsed.error_messages.is_empty() => parsed.error_messages.join("; "),
        _ => body,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    async fn api_error(status: u16, body: &'static str) -> (u16, String) {
        match check_response(response(status, body)).await.unwrap_err() {
            JiraError::Api { status, message } => (status, message),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn error_messages_are_joined() {
        let (status, message) = api_error(
            400,
            r#"{"errorMessages":["bad jql","field 'duedate' unknown"],"errors":{}}"#,
        )
        .await;
        assert_eq!(status, 400);
        assert_eq!(message, "bad jql; field 'duedate' unknown");
    }

    #[tokio::test]
    async fn non_json_body_is_kept_verbatim() {
        let (status, message) = api_error(502, "<html>bad gateway</html>").await;
        assert_eq!(status, 502);
        assert_eq!(message, "<html>bad gateway</html>");
    }

    #[tokio::test]
    async fn too_many_requests_is_a_plain_api_error() {
        let (status, message) = api_error(429, "").await;
        assert_eq!(status, 429);
        assert_eq!(message, "");
    }

    #[tokio::test]
    async fn success_passes_through() {
        assert!(check_response(response(204, "")).await.is_ok());
    }
}

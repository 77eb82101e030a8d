//! Error classification: turn an upstream failure into the message string
//! returned to the caller.
//!
//! Pure and terminal; there is no retry. Every upstream failure surfaces
//! immediately as one human-readable string.

use crate::error::YtLensError;

/// Per-call context the classifier uses to specialize its messages.
pub struct CallContext {
    /// Short label for the operation, e.g. "search" or "getting video details".
    action: &'static str,
    /// Parameters worth naming on a 400 (region code, category id, channel id).
    suspect_params: Vec<(&'static str, String)>,
    /// Phrasing for the 404 target entity, e.g. "Playlist with ID 'PL123'".
    missing_entity: Option<String>,
}

impl CallContext {
    pub fn new(action: &'static str) -> Self {
        Self {
            action,
            suspect_params: Vec::new(),
            missing_entity: None,
        }
    }

    /// Name a parameter that a 400 response may be complaining about.
    pub fn suspect_param(mut self, name: &'static str, value: &str) -> Self {
        self.suspect_params.push((name, value.to_string()));
        self
    }

    /// Describe the entity a 404 response means is missing or private.
    pub fn missing_entity(mut self, description: String) -> Self {
        self.missing_entity = Some(description);
        self
    }
}

/// Map an upstream error to the caller-facing message string.
pub fn classify(error: &YtLensError, ctx: &CallContext) -> String {
    match error {
        YtLensError::Api { status: 400, body } => {
            let mut message = format!(
                "An HTTP error 400 occurred: {}. This might indicate an invalid or missing API key (YOUTUBE_API_KEY).",
                body
            );
            if !ctx.suspect_params.is_empty() {
                let listed = ctx
                    .suspect_params
                    .iter()
                    .map(|(name, value)| format!("{} '{}'", name, value))
                    .collect::<Vec<_>>()
                    .join(", ");
                message.push_str(&format!(" Also check {}.", listed));
            }
            message
        }
        YtLensError::Api { status: 404, .. } if ctx.missing_entity.is_some() => {
            format!(
                "{} not found or is private.",
                ctx.missing_entity.as_deref().unwrap_or_default()
            )
        }
        YtLensError::Api { status, body } => {
            format!("An HTTP error {} occurred: {}", status, body)
        }
        other => format!(
            "An unexpected error occurred during {}: {}",
            ctx.action, other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16, body: &str) -> YtLensError {
        YtLensError::Api {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_400_mentions_status_and_key_hint() {
        let message = classify(&api_error(400, "keyInvalid"), &CallContext::new("search"));

        assert!(message.contains("400"));
        assert!(message.contains("YOUTUBE_API_KEY"));
        assert!(message.contains("keyInvalid"));
    }

    #[test]
    fn test_400_names_suspect_params() {
        let ctx = CallContext::new("fetching popular videos")
            .suspect_param("regionCode", "ZZ")
            .suspect_param("videoCategoryId", "0");
        let message = classify(&api_error(400, "invalidRegionCode"), &ctx);

        assert!(message.contains("400"));
        assert!(message.contains("'ZZ'"));
        assert!(message.contains("'0'"));
    }

    #[test]
    fn test_404_uses_entity_phrasing() {
        let ctx = CallContext::new("listing playlist items")
            .missing_entity("Playlist with ID 'PL123'".to_string());
        let message = classify(&api_error(404, "playlistNotFound"), &ctx);

        assert_eq!(message, "Playlist with ID 'PL123' not found or is private.");
    }

    #[test]
    fn test_404_without_entity_is_generic() {
        let message = classify(&api_error(404, "notFound"), &CallContext::new("search"));
        assert_eq!(message, "An HTTP error 404 occurred: notFound");
    }

    #[test]
    fn test_other_status_is_generic() {
        let message = classify(&api_error(403, "quotaExceeded"), &CallContext::new("search"));
        assert_eq!(message, "An HTTP error 403 occurred: quotaExceeded");
    }

    #[test]
    fn test_non_http_error_names_action() {
        let error = YtLensError::InvalidInput("bad".to_string());
        let message = classify(&error, &CallContext::new("search"));

        assert!(message.starts_with("An unexpected error occurred during search:"));
        assert!(message.contains("bad"));
    }
}

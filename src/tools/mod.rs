//! The tool adapter: eight YouTube query tools behind one dispatch surface.
//!
//! Every invocation follows the same skeleton: credential guard, one upstream
//! call, projection on success, classification on failure. Failures never
//! escape as errors; callers get a [`ToolOutcome`] either way.

mod classify;
mod project;

use crate::config::Settings;
use crate::error::Result;
use crate::youtube::{ListResponse, SearchQuery, VideoApi, VideoQuery, YoutubeClient};
use classify::{classify, CallContext};
use serde_json::Value;
use std::sync::Arc;

/// Returned when no API key is configured. Checked on every call.
const MISSING_KEY_MESSAGE: &str =
    "Failed to initialize YouTube service. Check YOUTUBE_API_KEY environment variable.";

/// Outcome of one tool invocation.
///
/// Success carries the projected result mapping; failure carries the
/// human-readable message string. The two never share a representation.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    Success(Value),
    Failure(String),
}

/// The registered tools, bound to an upstream client.
///
/// `api` is `None` when no credential resolved at startup; every invocation
/// then short-circuits with the configuration-error string without touching
/// the network.
pub struct Toolbox {
    api: Option<Arc<dyn VideoApi>>,
}

impl Toolbox {
    /// Build the toolbox from settings, resolving the API key from the
    /// environment or config file.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api = match settings.resolve_api_key() {
            Some(key) => {
                let client = YoutubeClient::new(key, settings)?;
                Some(Arc::new(client) as Arc<dyn VideoApi>)
            }
            None => {
                tracing::warn!("no YouTube API key configured; tool calls will fail");
                None
            }
        };
        Ok(Self { api })
    }

    /// Build a toolbox around an injected upstream client.
    pub fn with_api(api: Arc<dyn VideoApi>) -> Self {
        Self { api: Some(api) }
    }

    /// A toolbox with no credential; every call returns the guard failure.
    pub fn disabled() -> Self {
        Self { api: None }
    }

    /// Whether an upstream client is bound.
    pub fn is_enabled(&self) -> bool {
        self.api.is_some()
    }

    /// Invoke a tool by name with its JSON arguments.
    pub async fn invoke(&self, name: &str, arguments: Option<Value>) -> ToolOutcome {
        tracing::debug!(tool = name, "invoking tool");
        let args = arguments.unwrap_or(Value::Null);
        match self.dispatch(name, &args).await {
            Ok(outcome) => outcome,
            Err(message) => ToolOutcome::Failure(message),
        }
    }

    async fn dispatch(&self, name: &str, args: &Value) -> std::result::Result<ToolOutcome, String> {
        let outcome = match name {
            "search_videos" => {
                let query = required_str(args, "query")?;
                let max_results = optional_u32(args, "max_results", 5);
                self.search_videos(&query, max_results).await
            }
            "get_video_details" => {
                let video_id = required_str(args, "video_id")?;
                self.get_video_details(&video_id).await
            }
            "get_channel_details" => {
                let channel_id = required_str(args, "channel_id")?;
                self.get_channel_details(&channel_id).await
            }
            "get_channel_videos" => {
                let channel_id = required_str(args, "channel_id")?;
                let max_results = optional_u32(args, "max_results", 10);
                self.get_channel_videos(&channel_id, max_results).await
            }
            "search_playlists" => {
                let query = required_str(args, "query")?;
                let max_results = optional_u32(args, "max_results", 5);
                self.search_playlists(&query, max_results).await
            }
            "get_playlist_items" => {
                let playlist_id = required_str(args, "playlist_id")?;
                let max_results = optional_u32(args, "max_results", 25);
                self.get_playlist_items(&playlist_id, max_results).await
            }
            "get_related_videos" => {
                let video_id = required_str(args, "video_id")?;
                let max_results = optional_u32(args, "max_results", 5);
                self.get_related_videos(&video_id, max_results).await
            }
            "get_popular_videos" => {
                let region_code =
                    optional_str(args, "region_code").unwrap_or_else(|| "US".to_string());
                let video_category_id = optional_str(args, "video_category_id");
                let max_results = optional_u32(args, "max_results", 10);
                self.get_popular_videos(&region_code, video_category_id.as_deref(), max_results)
                    .await
            }
            _ => return Err(format!("Unknown tool: {}", name)),
        };
        Ok(outcome)
    }

    /// Credential guard, run on every invocation.
    fn api(&self) -> std::result::Result<&Arc<dyn VideoApi>, ToolOutcome> {
        self.api
            .as_ref()
            .ok_or_else(|| ToolOutcome::Failure(MISSING_KEY_MESSAGE.to_string()))
    }

    async fn search_videos(&self, query: &str, max_results: u32) -> ToolOutcome {
        let api = match self.api() {
            Ok(api) => api,
            Err(failure) => return failure,
        };
        let ctx = CallContext::new("search");
        finish(
            api.search(&SearchQuery::videos(query, max_results)).await,
            &ctx,
            |items| ToolOutcome::Success(project::video_search_results(&items)),
        )
    }

    async fn get_video_details(&self, video_id: &str) -> ToolOutcome {
        let api = match self.api() {
            Ok(api) => api,
            Err(failure) => return failure,
        };
        let ctx = CallContext::new("getting video details");
        let query = VideoQuery::ById {
            video_id: video_id.to_string(),
        };
        finish(api.list_videos(&query).await, &ctx, |items| {
            match items.first() {
                Some(video) => ToolOutcome::Success(project::video_details(video)),
                None => ToolOutcome::Failure(format!("Video with ID '{}' not found.", video_id)),
            }
        })
    }

    async fn get_channel_details(&self, channel_id: &str) -> ToolOutcome {
        let api = match self.api() {
            Ok(api) => api,
            Err(failure) => return failure,
        };
        let ctx =
            CallContext::new("getting channel details").suspect_param("channelId", channel_id);
        finish(api.list_channels(channel_id).await, &ctx, |items| {
            match items.first() {
                Some(channel) => ToolOutcome::Success(project::channel_details(channel)),
                None => {
                    ToolOutcome::Failure(format!("Channel with ID '{}' not found.", channel_id))
                }
            }
        })
    }

    async fn get_channel_videos(&self, channel_id: &str, max_results: u32) -> ToolOutcome {
        let api = match self.api() {
            Ok(api) => api,
            Err(failure) => return failure,
        };
        let ctx =
            CallContext::new("listing channel videos").suspect_param("channelId", channel_id);
        finish(
            api.search(&SearchQuery::channel_uploads(channel_id, max_results))
                .await,
            &ctx,
            |items| ToolOutcome::Success(project::channel_video_results(&items)),
        )
    }

    async fn search_playlists(&self, query: &str, max_results: u32) -> ToolOutcome {
        let api = match self.api() {
            Ok(api) => api,
            Err(failure) => return failure,
        };
        let ctx = CallContext::new("playlist search");
        finish(
            api.search(&SearchQuery::playlists(query, max_results)).await,
            &ctx,
            |items| ToolOutcome::Success(project::playlist_search_results(&items)),
        )
    }

    async fn get_playlist_items(&self, playlist_id: &str, max_results: u32) -> ToolOutcome {
        let api = match self.api() {
            Ok(api) => api,
            Err(failure) => return failure,
        };
        let ctx = CallContext::new("listing playlist items")
            .missing_entity(format!("Playlist with ID '{}'", playlist_id));
        finish(
            api.list_playlist_items(playlist_id, max_results).await,
            &ctx,
            |items| ToolOutcome::Success(project::playlist_item_results(&items)),
        )
    }

    async fn get_related_videos(&self, video_id: &str, max_results: u32) -> ToolOutcome {
        let api = match self.api() {
            Ok(api) => api,
            Err(failure) => return failure,
        };
        let ctx = CallContext::new("fetching related videos")
            .missing_entity(format!("Video with ID '{}'", video_id));
        finish(
            api.search(&SearchQuery::related_to(video_id, max_results))
                .await,
            &ctx,
            |items| ToolOutcome::Success(project::video_search_results(&items)),
        )
    }

    async fn get_popular_videos(
        &self,
        region_code: &str,
        video_category_id: Option<&str>,
        max_results: u32,
    ) -> ToolOutcome {
        let api = match self.api() {
            Ok(api) => api,
            Err(failure) => return failure,
        };
        let mut ctx =
            CallContext::new("fetching popular videos").suspect_param("regionCode", region_code);
        if let Some(category_id) = video_category_id {
            ctx = ctx.suspect_param("videoCategoryId", category_id);
        }
        let query = VideoQuery::MostPopular {
            region_code: region_code.to_string(),
            video_category_id: video_category_id.map(String::from),
            max_results,
        };
        finish(api.list_videos(&query).await, &ctx, |items| {
            ToolOutcome::Success(project::popular_video_results(&items))
        })
    }
}

/// Shared tail of every tool: classify failures, hand successes to the
/// completion closure (projection, plus the empty-items check where one
/// applies).
fn finish<T>(
    result: Result<ListResponse<T>>,
    ctx: &CallContext,
    complete: impl FnOnce(Vec<T>) -> ToolOutcome,
) -> ToolOutcome {
    match result {
        Ok(response) => complete(response.items),
        Err(error) => ToolOutcome::Failure(classify(&error, ctx)),
    }
}

fn required_str(args: &Value, key: &str) -> std::result::Result<String, String> {
    args.get(key)
        .and_then(|v| v.as_str())
        .map(String::from)
        .ok_or_else(|| format!("Missing '{}' argument", key))
}

fn optional_str(args: &Value, key: &str) -> Option<String> {
    args.get(key).and_then(|v| v.as_str()).map(String::from)
}

fn optional_u32(args: &Value, key: &str, default: u32) -> u32 {
    args.get(key)
        .and_then(|v| v.as_u64())
        .map(|v| v as u32)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::YtLensError;
    use crate::youtube::{
        Channel, PlaylistItem, PlaylistItemSnippet, ResourceId, SearchItem, SearchResultId,
        Snippet, Video,
    };
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio_test::block_on;

    /// Canned upstream response for one test.
    enum FakeResponse {
        SearchItems(Vec<SearchItem>),
        Videos(Vec<Video>),
        Channels(Vec<Channel>),
        PlaylistItems(Vec<PlaylistItem>),
        Error(u16, &'static str),
    }

    struct FakeApi {
        calls: AtomicUsize,
        response: FakeResponse,
    }

    impl FakeApi {
        fn new(response: FakeResponse) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                response,
            })
        }

        fn error(&self) -> Option<YtLensError> {
            match self.response {
                FakeResponse::Error(status, body) => Some(YtLensError::Api {
                    status,
                    body: body.to_string(),
                }),
                _ => None,
            }
        }
    }

    #[async_trait]
    impl VideoApi for FakeApi {
        async fn search(&self, _query: &SearchQuery) -> crate::Result<ListResponse<SearchItem>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(error) = self.error() {
                return Err(error);
            }
            match &self.response {
                FakeResponse::SearchItems(items) => Ok(ListResponse {
                    items: items.clone(),
                }),
                _ => panic!("unexpected search call"),
            }
        }

        async fn list_videos(&self, _query: &VideoQuery) -> crate::Result<ListResponse<Video>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(error) = self.error() {
                return Err(error);
            }
            match &self.response {
                FakeResponse::Videos(items) => Ok(ListResponse {
                    items: items.clone(),
                }),
                _ => panic!("unexpected list_videos call"),
            }
        }

        async fn list_channels(&self, _channel_id: &str) -> crate::Result<ListResponse<Channel>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(error) = self.error() {
                return Err(error);
            }
            match &self.response {
                FakeResponse::Channels(items) => Ok(ListResponse {
                    items: items.clone(),
                }),
                _ => panic!("unexpected list_channels call"),
            }
        }

        async fn list_playlist_items(
            &self,
            _playlist_id: &str,
            _max_results: u32,
        ) -> crate::Result<ListResponse<PlaylistItem>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(error) = self.error() {
                return Err(error);
            }
            match &self.response {
                FakeResponse::PlaylistItems(items) => Ok(ListResponse {
                    items: items.clone(),
                }),
                _ => panic!("unexpected list_playlist_items call"),
            }
        }
    }

    fn video_search_item(video_id: &str, title: &str) -> SearchItem {
        SearchItem {
            id: SearchResultId {
                kind: "youtube#video".to_string(),
                video_id: Some(video_id.to_string()),
                playlist_id: None,
                channel_id: None,
            },
            snippet: Snippet {
                title: Some(title.to_string()),
                description: Some("desc".to_string()),
                channel_title: Some("chan".to_string()),
                published_at: None,
            },
        }
    }

    #[test]
    fn test_missing_credential_fails_every_tool() {
        let toolbox = Toolbox::disabled();
        let calls: Vec<(&str, Value)> = vec![
            ("search_videos", json!({"query": "lofi"})),
            ("get_video_details", json!({"video_id": "abc"})),
            ("get_channel_details", json!({"channel_id": "UC1"})),
            ("get_channel_videos", json!({"channel_id": "UC1"})),
            ("search_playlists", json!({"query": "mix"})),
            ("get_playlist_items", json!({"playlist_id": "PL1"})),
            ("get_related_videos", json!({"video_id": "abc"})),
            ("get_popular_videos", json!({})),
        ];

        for (name, args) in calls {
            let outcome = block_on(toolbox.invoke(name, Some(args)));
            assert_eq!(
                outcome,
                ToolOutcome::Failure(MISSING_KEY_MESSAGE.to_string()),
                "tool {} should hit the credential guard",
                name
            );
        }
    }

    #[test]
    fn test_search_videos_end_to_end() {
        let api = FakeApi::new(FakeResponse::SearchItems(vec![
            video_search_item("id1", "first"),
            video_search_item("id2", "second"),
        ]));
        let toolbox = Toolbox::with_api(api.clone());

        let outcome = block_on(toolbox.invoke(
            "search_videos",
            Some(json!({"query": "lofi", "max_results": 2})),
        ));

        let ToolOutcome::Success(value) = outcome else {
            panic!("expected success");
        };
        let videos = value["videos"].as_array().unwrap();
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0]["videoId"], "id1");
        assert_eq!(videos[1]["videoId"], "id2");
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_video_not_found_message_is_exact() {
        let api = FakeApi::new(FakeResponse::Videos(vec![]));
        let toolbox = Toolbox::with_api(api);

        let outcome = block_on(
            toolbox.invoke("get_video_details", Some(json!({"video_id": "missing123"}))),
        );

        assert_eq!(
            outcome,
            ToolOutcome::Failure("Video with ID 'missing123' not found.".to_string())
        );
    }

    #[test]
    fn test_channel_not_found_message() {
        let api = FakeApi::new(FakeResponse::Channels(vec![]));
        let toolbox = Toolbox::with_api(api);

        let outcome = block_on(
            toolbox.invoke("get_channel_details", Some(json!({"channel_id": "UCmissing"}))),
        );

        assert_eq!(
            outcome,
            ToolOutcome::Failure("Channel with ID 'UCmissing' not found.".to_string())
        );
    }

    #[test]
    fn test_popular_videos_400_names_region_and_category() {
        let api = FakeApi::new(FakeResponse::Error(400, "invalidRegionCode"));
        let toolbox = Toolbox::with_api(api);

        let outcome = block_on(toolbox.invoke(
            "get_popular_videos",
            Some(json!({"region_code": "ZZ", "video_category_id": "0"})),
        ));

        let ToolOutcome::Failure(message) = outcome else {
            panic!("expected failure");
        };
        assert!(message.contains("400"));
        assert!(message.contains("ZZ"));
        assert!(message.contains("'0'"));
    }

    #[test]
    fn test_playlist_items_drop_unresolvable_entries() {
        let with_id = PlaylistItem {
            snippet: PlaylistItemSnippet {
                title: Some("kept".to_string()),
                resource_id: Some(ResourceId {
                    kind: "youtube#video".to_string(),
                    video_id: Some("vid1".to_string()),
                }),
                ..Default::default()
            },
        };
        let without_id = PlaylistItem {
            snippet: PlaylistItemSnippet {
                title: Some("dropped".to_string()),
                resource_id: None,
                ..Default::default()
            },
        };
        let api = FakeApi::new(FakeResponse::PlaylistItems(vec![with_id, without_id]));
        let toolbox = Toolbox::with_api(api);

        let outcome = block_on(
            toolbox.invoke("get_playlist_items", Some(json!({"playlist_id": "PL1"}))),
        );

        let ToolOutcome::Success(value) = outcome else {
            panic!("expected success");
        };
        assert_eq!(value["items"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_playlist_404_reports_private_or_missing() {
        let api = FakeApi::new(FakeResponse::Error(404, "playlistNotFound"));
        let toolbox = Toolbox::with_api(api);

        let outcome = block_on(
            toolbox.invoke("get_playlist_items", Some(json!({"playlist_id": "PLgone"}))),
        );

        assert_eq!(
            outcome,
            ToolOutcome::Failure("Playlist with ID 'PLgone' not found or is private.".to_string())
        );
    }

    #[test]
    fn test_related_videos_404() {
        let api = FakeApi::new(FakeResponse::Error(404, "videoNotFound"));
        let toolbox = Toolbox::with_api(api);

        let outcome = block_on(
            toolbox.invoke("get_related_videos", Some(json!({"video_id": "gone1"}))),
        );

        assert_eq!(
            outcome,
            ToolOutcome::Failure("Video with ID 'gone1' not found or is private.".to_string())
        );
    }

    #[test]
    fn test_missing_required_argument() {
        let api = FakeApi::new(FakeResponse::SearchItems(vec![]));
        let toolbox = Toolbox::with_api(api.clone());

        let outcome = block_on(toolbox.invoke("search_videos", Some(json!({}))));

        assert_eq!(
            outcome,
            ToolOutcome::Failure("Missing 'query' argument".to_string())
        );
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unknown_tool() {
        let toolbox = Toolbox::disabled();
        let outcome = block_on(toolbox.invoke("count_subscribers", None));
        assert_eq!(
            outcome,
            ToolOutcome::Failure("Unknown tool: count_subscribers".to_string())
        );
    }
}

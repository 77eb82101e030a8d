//! reqwest-backed YouTube Data API client.

use super::types::{Channel, ListResponse, PlaylistItem, SearchItem, Video};
use super::VideoApi;
use crate::config::Settings;
use crate::error::{Result, YtLensError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Upstream cap on `maxResults` for list endpoints (the API rejects values
/// outside 1-50). Documented here and in the tool schemas; values are passed
/// through, not clamped locally.
pub const MAX_RESULTS_LIMIT: u32 = 50;

/// What a search should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Video,
    Playlist,
}

impl SearchKind {
    fn as_param(&self) -> &'static str {
        match self {
            SearchKind::Video => "video",
            SearchKind::Playlist => "playlist",
        }
    }
}

/// Parameters for the `search` endpoint.
///
/// The channel-uploads and related-videos tools reuse this endpoint with a
/// filter parameter; the upstream API has no dedicated endpoint for either.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub channel_id: Option<String>,
    pub related_to_video_id: Option<String>,
    pub kind: SearchKind,
    pub order: Option<&'static str>,
    pub max_results: u32,
}

impl SearchQuery {
    /// Free-text video search.
    pub fn videos(query: &str, max_results: u32) -> Self {
        Self {
            q: Some(query.to_string()),
            channel_id: None,
            related_to_video_id: None,
            kind: SearchKind::Video,
            order: None,
            max_results,
        }
    }

    /// Free-text playlist search.
    pub fn playlists(query: &str, max_results: u32) -> Self {
        Self {
            q: Some(query.to_string()),
            channel_id: None,
            related_to_video_id: None,
            kind: SearchKind::Playlist,
            order: None,
            max_results,
        }
    }

    /// A channel's videos, newest first.
    pub fn channel_uploads(channel_id: &str, max_results: u32) -> Self {
        Self {
            q: None,
            channel_id: Some(channel_id.to_string()),
            related_to_video_id: None,
            kind: SearchKind::Video,
            order: Some("date"),
            max_results,
        }
    }

    /// Videos related to a given video.
    pub fn related_to(video_id: &str, max_results: u32) -> Self {
        Self {
            q: None,
            channel_id: None,
            related_to_video_id: Some(video_id.to_string()),
            kind: SearchKind::Video,
            order: None,
            max_results,
        }
    }

    /// Build the query string pairs for this search.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("part", "id,snippet".to_string()),
            ("type", self.kind.as_param().to_string()),
            ("maxResults", self.max_results.to_string()),
        ];
        if let Some(q) = &self.q {
            params.push(("q", q.clone()));
        }
        if let Some(channel_id) = &self.channel_id {
            params.push(("channelId", channel_id.clone()));
        }
        if let Some(video_id) = &self.related_to_video_id {
            params.push(("relatedToVideoId", video_id.clone()));
        }
        if let Some(order) = self.order {
            params.push(("order", order.to_string()));
        }
        params
    }
}

/// Parameters for the `videos` endpoint.
#[derive(Debug, Clone)]
pub enum VideoQuery {
    /// Single-video lookup by id.
    ById { video_id: String },
    /// The mostPopular chart, filtered by region and optionally category.
    MostPopular {
        region_code: String,
        video_category_id: Option<String>,
        max_results: u32,
    },
}

impl VideoQuery {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        match self {
            VideoQuery::ById { video_id } => vec![
                ("part", "snippet,contentDetails,statistics".to_string()),
                ("id", video_id.clone()),
            ],
            VideoQuery::MostPopular {
                region_code,
                video_category_id,
                max_results,
            } => {
                let mut params = vec![
                    ("part", "snippet,statistics".to_string()),
                    ("chart", "mostPopular".to_string()),
                    ("regionCode", region_code.clone()),
                    ("maxResults", max_results.to_string()),
                ];
                if let Some(category_id) = video_category_id {
                    params.push(("videoCategoryId", category_id.clone()));
                }
                params
            }
        }
    }
}

/// reqwest client bound to the YouTube Data API.
pub struct YoutubeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl YoutubeClient {
    /// Build a client from the resolved API key and settings.
    pub fn new(api_key: String, settings: &Settings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.youtube.timeout_seconds))
            .build()
            .map_err(|e| YtLensError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: settings.youtube.api_base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, resource);
        tracing::debug!(resource, "calling YouTube Data API");

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "upstream error response");
            return Err(YtLensError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl VideoApi for YoutubeClient {
    async fn search(&self, query: &SearchQuery) -> Result<ListResponse<SearchItem>> {
        self.get("search", &query.to_params()).await
    }

    async fn list_videos(&self, query: &VideoQuery) -> Result<ListResponse<Video>> {
        self.get("videos", &query.to_params()).await
    }

    async fn list_channels(&self, channel_id: &str) -> Result<ListResponse<Channel>> {
        let params = vec![
            ("part", "snippet,statistics".to_string()),
            ("id", channel_id.to_string()),
        ];
        self.get("channels", &params).await
    }

    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Result<ListResponse<PlaylistItem>> {
        let params = vec![
            ("part", "snippet".to_string()),
            ("playlistId", playlist_id.to_string()),
            ("maxResults", max_results.to_string()),
        ];
        self.get("playlistItems", &params).await
    }
}

//! Upstream YouTube Data API v3 client.
//!
//! The tool adapter talks to the upstream API through the [`VideoApi`] trait so
//! tests can inject a fake. [`YoutubeClient`] is the real reqwest-backed
//! implementation.

mod client;
mod types;

pub use client::{SearchKind, SearchQuery, VideoQuery, YoutubeClient, MAX_RESULTS_LIMIT};
pub use types::{
    Channel, ChannelSnippet, ChannelStatistics, ContentDetails, ListResponse, PlaylistItem,
    PlaylistItemSnippet, ResourceId, SearchItem, SearchResultId, Snippet, Video, VideoStatistics,
};

use crate::error::Result;
use async_trait::async_trait;

/// The four upstream list operations the tools need.
///
/// Each call maps to exactly one HTTP request; errors surface the HTTP status
/// and raw body via `YtLensError::Api`.
#[async_trait]
pub trait VideoApi: Send + Sync {
    /// `GET /search` - videos or playlists, free-text or filtered.
    async fn search(&self, query: &SearchQuery) -> Result<ListResponse<SearchItem>>;

    /// `GET /videos` - lookup by id, or the mostPopular chart.
    async fn list_videos(&self, query: &VideoQuery) -> Result<ListResponse<Video>>;

    /// `GET /channels` - lookup by channel id.
    async fn list_channels(&self, channel_id: &str) -> Result<ListResponse<Channel>>;

    /// `GET /playlistItems` - entries of one playlist.
    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Result<ListResponse<PlaylistItem>>;
}

//! Result projection: narrow typed upstream items into the mappings returned
//! to the caller.
//!
//! All functions here are pure. Absent optional fields become the "N/A"
//! sentinel, never an absent key. When a search response mixes result kinds,
//! items whose kind tag does not match the expected kind are dropped before
//! projection.

use crate::youtube::{Channel, PlaylistItem, SearchItem, Video};
use serde_json::{json, Value};

/// Sentinel substituted for absent optional fields.
pub const NOT_AVAILABLE: &str = "N/A";

const VIDEO_KIND: &str = "youtube#video";
const PLAYLIST_KIND: &str = "youtube#playlist";

fn text(field: &Option<String>) -> String {
    field.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// `search_videos` / `get_related_videos`: `{"videos": [...]}`.
pub fn video_search_results(items: &[SearchItem]) -> Value {
    let videos: Vec<Value> = items
        .iter()
        .filter(|item| item.id.kind == VIDEO_KIND)
        .filter_map(|item| {
            let video_id = item.id.video_id.as_ref()?;
            Some(json!({
                "title": text(&item.snippet.title),
                "videoId": video_id,
                "channelTitle": text(&item.snippet.channel_title),
                "description": text(&item.snippet.description),
            }))
        })
        .collect();

    json!({ "videos": videos })
}

/// `get_channel_videos`: `{"videos": [...]}`, newest first per the upstream
/// `order=date`.
pub fn channel_video_results(items: &[SearchItem]) -> Value {
    let videos: Vec<Value> = items
        .iter()
        .filter(|item| item.id.kind == VIDEO_KIND)
        .filter_map(|item| {
            let video_id = item.id.video_id.as_ref()?;
            Some(json!({
                "title": text(&item.snippet.title),
                "videoId": video_id,
                "publishedAt": text(&item.snippet.published_at),
                "description": text(&item.snippet.description),
            }))
        })
        .collect();

    json!({ "videos": videos })
}

/// `search_playlists`: `{"playlists": [...]}`.
pub fn playlist_search_results(items: &[SearchItem]) -> Value {
    let playlists: Vec<Value> = items
        .iter()
        .filter(|item| item.id.kind == PLAYLIST_KIND)
        .filter_map(|item| {
            let playlist_id = item.id.playlist_id.as_ref()?;
            Some(json!({
                "title": text(&item.snippet.title),
                "playlistId": playlist_id,
                "channelTitle": text(&item.snippet.channel_title),
                "description": text(&item.snippet.description),
            }))
        })
        .collect();

    json!({ "playlists": playlists })
}

/// `get_video_details`: flat mapping for one video.
pub fn video_details(video: &Video) -> Value {
    let duration = video
        .content_details
        .as_ref()
        .and_then(|d| d.duration.clone());
    let stats = video.statistics.clone().unwrap_or_default();

    json!({
        "title": text(&video.snippet.title),
        "description": text(&video.snippet.description),
        "channelTitle": text(&video.snippet.channel_title),
        "publishedAt": text(&video.snippet.published_at),
        "duration": text(&duration),
        "viewCount": text(&stats.view_count),
        "likeCount": text(&stats.like_count),
        "commentCount": text(&stats.comment_count),
    })
}

/// `get_channel_details`: flat mapping for one channel.
pub fn channel_details(channel: &Channel) -> Value {
    let stats = channel.statistics.clone().unwrap_or_default();

    json!({
        "title": text(&channel.snippet.title),
        "description": text(&channel.snippet.description),
        "customUrl": text(&channel.snippet.custom_url),
        "publishedAt": text(&channel.snippet.published_at),
        "subscriberCount": text(&stats.subscriber_count),
        "videoCount": text(&stats.video_count),
        "viewCount": text(&stats.view_count),
    })
}

/// `get_playlist_items`: `{"items": [...]}`. Entries without a resolvable
/// video id (deleted/private videos) are dropped even when a snippet is
/// present.
pub fn playlist_item_results(items: &[PlaylistItem]) -> Value {
    let entries: Vec<Value> = items
        .iter()
        .filter_map(|item| {
            let video_id = item
                .snippet
                .resource_id
                .as_ref()
                .and_then(|r| r.video_id.as_ref())?;
            Some(json!({
                "title": text(&item.snippet.title),
                "videoId": video_id,
                "position": item.snippet.position,
                "publishedAt": text(&item.snippet.published_at),
            }))
        })
        .collect();

    json!({ "items": entries })
}

/// `get_popular_videos`: `{"videos": [...]}` from the mostPopular chart.
pub fn popular_video_results(items: &[Video]) -> Value {
    let videos: Vec<Value> = items
        .iter()
        .map(|video| {
            let stats = video.statistics.clone().unwrap_or_default();
            json!({
                "title": text(&video.snippet.title),
                "videoId": video.id.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                "channelTitle": text(&video.snippet.channel_title),
                "viewCount": text(&stats.view_count),
                "likeCount": text(&stats.like_count),
            })
        })
        .collect();

    json!({ "videos": videos })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube::{
        PlaylistItemSnippet, ResourceId, SearchResultId, Snippet, VideoStatistics,
    };

    fn search_item(kind: &str, video_id: Option<&str>, title: &str) -> SearchItem {
        SearchItem {
            id: SearchResultId {
                kind: kind.to_string(),
                video_id: video_id.map(String::from),
                playlist_id: None,
                channel_id: None,
            },
            snippet: Snippet {
                title: Some(title.to_string()),
                description: Some("desc".to_string()),
                channel_title: Some("chan".to_string()),
                published_at: Some("2024-01-01T00:00:00Z".to_string()),
            },
        }
    }

    #[test]
    fn test_video_search_preserves_order_and_fields() {
        let items = vec![
            search_item("youtube#video", Some("id1"), "first"),
            search_item("youtube#video", Some("id2"), "second"),
        ];

        let result = video_search_results(&items);
        let videos = result["videos"].as_array().unwrap();

        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0]["title"], "first");
        assert_eq!(videos[0]["videoId"], "id1");
        assert_eq!(videos[1]["videoId"], "id2");
        assert_eq!(videos[0]["channelTitle"], "chan");
        assert_eq!(videos[0]["description"], "desc");
    }

    #[test]
    fn test_non_video_kinds_excluded() {
        let items = vec![
            search_item("youtube#video", Some("id1"), "video"),
            search_item("youtube#channel", None, "a channel"),
            search_item("youtube#playlist", None, "a playlist"),
        ];

        let result = channel_video_results(&items);
        let videos = result["videos"].as_array().unwrap();

        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0]["title"], "video");
    }

    #[test]
    fn test_missing_optional_field_becomes_sentinel() {
        let mut item = search_item("youtube#video", Some("id1"), "title");
        item.snippet.description = None;

        let result = video_search_results(&[item]);
        assert_eq!(result["videos"][0]["description"], NOT_AVAILABLE);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let items = vec![search_item("youtube#video", Some("id1"), "title")];
        assert_eq!(video_search_results(&items), video_search_results(&items));
    }

    #[test]
    fn test_video_details_defaults() {
        let video = Video {
            id: Some("abc".to_string()),
            snippet: Snippet {
                title: Some("title".to_string()),
                ..Default::default()
            },
            content_details: None,
            statistics: Some(VideoStatistics {
                view_count: Some("100".to_string()),
                like_count: None,
                comment_count: None,
            }),
        };

        let details = video_details(&video);
        assert_eq!(details["title"], "title");
        assert_eq!(details["duration"], NOT_AVAILABLE);
        assert_eq!(details["viewCount"], "100");
        assert_eq!(details["likeCount"], NOT_AVAILABLE);
    }

    #[test]
    fn test_playlist_items_without_video_id_dropped() {
        let with_id = PlaylistItem {
            snippet: PlaylistItemSnippet {
                title: Some("kept".to_string()),
                position: Some(0),
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
                position: Some(1),
                resource_id: None,
                ..Default::default()
            },
        };

        let result = playlist_item_results(&[with_id, without_id]);
        let entries = result["items"].as_array().unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["videoId"], "vid1");
    }

    #[test]
    fn test_playlist_search_projection() {
        let mut item = search_item("youtube#playlist", None, "mix");
        item.id.playlist_id = Some("PL123".to_string());

        let result = playlist_search_results(&[item]);
        let playlists = result["playlists"].as_array().unwrap();

        assert_eq!(playlists.len(), 1);
        assert_eq!(playlists[0]["playlistId"], "PL123");
    }
}

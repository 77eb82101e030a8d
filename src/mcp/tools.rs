//! MCP tool definitions for ytlens.
//!
//! Parameter schemas document the upstream maxResults bound (1-50); values
//! are passed through to the API, which rejects out-of-range requests.

use super::protocol::Tool;
use serde_json::json;

/// Get all available tools.
pub fn get_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "search_videos".to_string(),
            description: "Search YouTube for videos matching a query. \
                Returns title, video ID, channel title, and description for each match."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search term"
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum number of results (upstream allows 1-50)",
                        "default": 5
                    }
                },
                "required": ["query"]
            }),
        },
        Tool {
            name: "get_video_details".to_string(),
            description: "Get detailed information for a specific YouTube video: \
                title, description, channel, publish date, duration, and view/like/comment counts."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "video_id": {
                        "type": "string",
                        "description": "The ID of the YouTube video"
                    }
                },
                "required": ["video_id"]
            }),
        },
        Tool {
            name: "get_channel_details".to_string(),
            description: "Get information about a YouTube channel: title, description, \
                custom URL, creation date, and subscriber/video/view counts."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "channel_id": {
                        "type": "string",
                        "description": "The ID of the YouTube channel"
                    }
                },
                "required": ["channel_id"]
            }),
        },
        Tool {
            name: "get_channel_videos".to_string(),
            description: "List a channel's videos, newest first."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "channel_id": {
                        "type": "string",
                        "description": "The ID of the YouTube channel"
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum number of results (upstream allows 1-50)",
                        "default": 10
                    }
                },
                "required": ["channel_id"]
            }),
        },
        Tool {
            name: "search_playlists".to_string(),
            description: "Search YouTube for playlists matching a query."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search term"
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum number of results (upstream allows 1-50)",
                        "default": 5
                    }
                },
                "required": ["query"]
            }),
        },
        Tool {
            name: "get_playlist_items".to_string(),
            description: "List the videos in a playlist. Entries whose video is \
                deleted or private are omitted."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "playlist_id": {
                        "type": "string",
                        "description": "The ID of the YouTube playlist"
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum number of results (upstream allows 1-50)",
                        "default": 25
                    }
                },
                "required": ["playlist_id"]
            }),
        },
        Tool {
            name: "get_related_videos".to_string(),
            description: "Find videos related to a given video."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "video_id": {
                        "type": "string",
                        "description": "The ID of the YouTube video to find related videos for"
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum number of results (upstream allows 1-50)",
                        "default": 5
                    }
                },
                "required": ["video_id"]
            }),
        },
        Tool {
            name: "get_popular_videos".to_string(),
            description: "Get the most popular (trending) videos for a region, \
                optionally filtered by video category."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "region_code": {
                        "type": "string",
                        "description": "ISO 3166-1 alpha-2 region code",
                        "default": "US"
                    },
                    "video_category_id": {
                        "type": "string",
                        "description": "YouTube video category ID (omit for all categories)"
                    },
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum number of results (upstream allows 1-50)",
                        "default": 10
                    }
                },
                "required": []
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_eight_tools_registered() {
        let tools = get_tools();
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "search_videos",
                "get_video_details",
                "get_channel_details",
                "get_channel_videos",
                "search_playlists",
                "get_playlist_items",
                "get_related_videos",
                "get_popular_videos",
            ]
        );
    }

    #[test]
    fn test_schemas_declare_required_params() {
        for tool in get_tools() {
            let schema = &tool.input_schema;
            assert_eq!(schema["type"], "object", "tool {}", tool.name);
            assert!(schema["required"].is_array(), "tool {}", tool.name);
        }
    }
}

use serde::{Deserialize, Serialize};

/// Base for item reference links.
pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

// ---------------------------------------------------------------------------
// Raw payloads (one set per endpoint)
// ---------------------------------------------------------------------------

/// Response of `channels?part=snippet,statistics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelListResponse {
    pub items: Vec<Channel>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub snippet: ChannelSnippet,
    #[serde(default)]
    pub statistics: ChannelStatistics,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelSnippet {
    #[serde(default)]
    pub title: String,
}

/// Channel counters. The API serializes them as strings; hidden counters are
/// omitted entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    #[serde(default, deserialize_with = "de_opt_count")]
    pub subscriber_count: Option<u64>,
    #[serde(default, deserialize_with = "de_opt_count")]
    pub view_count: Option<u64>,
    #[serde(default, deserialize_with = "de_opt_count")]
    pub video_count: Option<u64>,
}

/// Response of `search?part=snippet&channelId=...`.
///
/// Entries are decoded one by one; an entry that does not decode becomes a
/// default (id-less) result, so it is skipped like any other non-video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchListResponse {
    #[serde(deserialize_with = "de_lenient_entries")]
    pub items: Vec<SearchResult>,
}

/// One listing entry. Besides videos the search endpoint may return channels
/// and playlists; only entries with `id.videoId` are countable items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "de_null_default")]
    pub id: SearchResultId,
    #[serde(default, deserialize_with = "de_null_default")]
    pub snippet: SearchSnippet,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultId {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchSnippet {
    #[serde(default, deserialize_with = "de_null_default")]
    pub title: String,
}

impl SearchResult {
    /// The video id, if this entry is a video with a non-blank id.
    pub fn video_id(&self) -> Option<&str> {
        self.id
            .video_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    pub fn title(&self) -> &str {
        &self.snippet.title
    }
}

/// Response of `videos?part=statistics&id=...`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoListResponse {
    pub items: Vec<Video>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub statistics: VideoStatistics,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default, deserialize_with = "de_opt_count")]
    pub view_count: Option<u64>,
    #[serde(default, deserialize_with = "de_opt_count")]
    pub like_count: Option<u64>,
    #[serde(default, deserialize_with = "de_opt_count")]
    pub comment_count: Option<u64>,
}

/// Serde helper: parse a counter from either a JSON number or a string.
/// Negative values are clamped to zero.
fn de_count_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct CountVisitor;

    impl<'de> Visitor<'de> for CountVisitor {
        type Value = u64;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a string or integer representing a count")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(u64::try_from(v).unwrap_or(0))
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if !v.is_finite() || v.fract() != 0.0 {
                return Err(E::custom(format!("non-integral count {v}")));
            }
            // `as` saturates; negatives land on 0.
            Ok(v as u64)
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            let s = s.trim();
            if let Ok(n) = s.parse::<u64>() {
                return Ok(n);
            }
            s.parse::<i64>()
                .map(|n| u64::try_from(n).unwrap_or(0))
                .map_err(E::custom)
        }
    }

    deserializer.deserialize_any(CountVisitor)
}

fn de_opt_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Count(#[serde(deserialize_with = "de_count_from_string_or_number")] u64);

    let v = Option::<Count>::deserialize(deserializer)?;
    Ok(v.map(|Count(n)| n))
}

/// `null` reads as the type's default instead of failing the whole payload.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn de_lenient_entries<'de, D>(deserializer: D) -> Result<Vec<SearchResult>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap_or_default())
        .collect())
}

// ---------------------------------------------------------------------------
// Domain records
// ---------------------------------------------------------------------------

/// Channel-level figures shown in the report's summary block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSummary {
    pub name: String,
    pub subscriber_count: u64,
    pub total_view_count: u64,
    pub total_video_count: u64,
}

impl ChannelSummary {
    /// Build from the first element of a channels response.
    ///
    /// Exactly one channel id is queried per request, so the first element is
    /// the channel. Returns `None` when the response has no elements.
    pub fn from_response(resp: &ChannelListResponse) -> Option<Self> {
        resp.items.first().map(Self::from)
    }
}

impl From<&Channel> for ChannelSummary {
    fn from(c: &Channel) -> Self {
        Self {
            name: c.snippet.title.clone(),
            subscriber_count: c.statistics.subscriber_count.unwrap_or(0),
            total_view_count: c.statistics.view_count.unwrap_or(0),
            total_video_count: c.statistics.video_count.unwrap_or(0),
        }
    }
}

/// One row of the report: a listed video merged with its statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub title: String,
    pub reference_url: String,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
}

impl ItemRecord {
    /// Merge a listing entry's title and id with its statistics; missing
    /// counters become 0.
    pub fn new(title: impl Into<String>, video_id: &str, stats: &VideoStatistics) -> Self {
        Self {
            title: title.into(),
            reference_url: format!("{WATCH_URL_PREFIX}{video_id}"),
            view_count: stats.view_count.unwrap_or(0),
            like_count: stats.like_count.unwrap_or(0),
            comment_count: stats.comment_count.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_accept_strings_numbers_and_negatives() {
        let s: VideoStatistics =
            serde_json::from_str(r#"{"viewCount":"1200","likeCount":7,"commentCount":"-3"}"#)
                .unwrap();
        assert_eq!(s.view_count, Some(1200));
        assert_eq!(s.like_count, Some(7));
        assert_eq!(s.comment_count, Some(0));
    }

    #[test]
    fn missing_and_null_counts_are_none() {
        let s: VideoStatistics = serde_json::from_str(r#"{"viewCount":null}"#).unwrap();
        assert_eq!(s, VideoStatistics::default());
    }

    #[test]
    fn integral_float_counts_are_accepted() {
        let s: VideoStatistics =
            serde_json::from_str(r#"{"viewCount":12.0,"likeCount":-1.0}"#).unwrap();
        assert_eq!(s.view_count, Some(12));
        assert_eq!(s.like_count, Some(0));
        assert!(serde_json::from_str::<VideoStatistics>(r#"{"viewCount":1.5}"#).is_err());
    }

    #[test]
    fn null_or_malformed_listing_entries_do_not_spoil_the_page() {
        let resp: SearchListResponse = serde_json::from_str(
            r#"{"items":[
                {"id":null,"snippet":{"title":"weird"}},
                {"id":{"kind":"youtube#video","videoId":"v1"},"snippet":{"title":null}},
                {"id":7,"snippet":"nope"},
                {"id":{"kind":"youtube#video","videoId":"v2"},"snippet":{"title":"Fine"}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(resp.items.len(), 4);
        assert_eq!(resp.items[0].video_id(), None);
        assert_eq!(resp.items[1].video_id(), Some("v1"));
        assert_eq!(resp.items[1].title(), "");
        assert_eq!(resp.items[2].video_id(), None);
        assert_eq!(resp.items[3].title(), "Fine");
    }

    #[test]
    fn blank_video_id_is_not_resolvable() {
        let r: SearchResult =
            serde_json::from_str(r#"{"id":{"kind":"youtube#video","videoId":"  "}}"#).unwrap();
        assert_eq!(r.video_id(), None);
    }
}

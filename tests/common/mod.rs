//! In-memory stand-in for the YouTube Data API used by the integration tests.
#![allow(dead_code)]

use reqwest::StatusCode;
use std::cell::RefCell;
use std::collections::HashMap;
use ytc_rs::{Config, HttpGet, HttpResponse, ItemRecord};

/// Canned responses keyed by resource (and video id for `videos`).
#[derive(Default)]
pub struct FakeApi {
    pub channels: Option<HttpResponse>,
    pub search: Option<HttpResponse>,
    pub videos: HashMap<String, HttpResponse>,
    pub calls: RefCell<Vec<String>>,
}

pub fn ok(body: &str) -> HttpResponse {
    HttpResponse {
        status: StatusCode::OK,
        body: body.to_string(),
    }
}

pub fn status(code: u16) -> HttpResponse {
    HttpResponse {
        status: StatusCode::from_u16(code).unwrap(),
        body: format!(r#"{{"error":{{"code":{code},"message":"request failed"}}}}"#),
    }
}

pub fn channel_body(title: &str, subs: &str, views: &str, videos: &str) -> String {
    format!(
        r#"{{"kind":"youtube#channelListResponse","items":[{{"id":"UC1","snippet":{{"title":"{title}"}},
        "statistics":{{"subscriberCount":"{subs}","viewCount":"{views}","videoCount":"{videos}","hiddenSubscriberCount":false}}}}]}}"#
    )
}

pub fn video_entry(id: &str, title: &str) -> String {
    format!(r#"{{"id":{{"kind":"youtube#video","videoId":"{id}"}},"snippet":{{"title":"{title}"}}}}"#)
}

pub fn playlist_entry(title: &str) -> String {
    format!(
        r#"{{"id":{{"kind":"youtube#playlist","playlistId":"PL1"}},"snippet":{{"title":"{title}"}}}}"#
    )
}

pub fn search_body(entries: &[String]) -> String {
    format!(r#"{{"items":[{}]}}"#, entries.join(","))
}

pub fn stats_body(id: &str, stats: &str) -> String {
    format!(r#"{{"items":[{{"id":"{id}","statistics":{stats}}}]}}"#)
}

impl FakeApi {
    pub fn with_channel(mut self, resp: HttpResponse) -> Self {
        self.channels = Some(resp);
        self
    }

    pub fn with_search(mut self, resp: HttpResponse) -> Self {
        self.search = Some(resp);
        self
    }

    pub fn with_video(mut self, id: &str, resp: HttpResponse) -> Self {
        self.videos.insert(id.to_string(), resp);
        self
    }

    /// Number of requests made against `resource`.
    pub fn calls_to(&self, resource: &str) -> usize {
        self.urls_for(resource).len()
    }

    pub fn urls_for(&self, resource: &str) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|url| resource_of(url) == resource)
            .cloned()
            .collect()
    }
}

fn query_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|kv| kv.split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v)
}

fn resource_of(url: &str) -> &str {
    let path = url.split_once('?').map_or(url, |(p, _)| p);
    path.rsplit('/').next().unwrap_or_default()
}

impl HttpGet for FakeApi {
    fn get(&self, url: &str) -> anyhow::Result<HttpResponse> {
        self.calls.borrow_mut().push(url.to_string());
        let query = url.split_once('?').map_or("", |(_, q)| q);

        let resp = match resource_of(url) {
            "channels" => self.channels.clone(),
            "search" => self.search.clone(),
            "videos" => query_param(query, "id").and_then(|id| self.videos.get(id).cloned()),
            _ => None,
        };
        Ok(resp.unwrap_or_else(|| status(404)))
    }
}

/// Config writing its artifacts into `dir`.
pub fn config_in(dir: &std::path::Path) -> Config {
    Config::new("test-key")
        .with_base_url("http://api.invalid/youtube/v3/")
        .with_output(ytc_rs::OutputPaths {
            report: dir.join("output.md"),
            chart: dir.join("likes_to_views_ratio.png"),
        })
}

pub fn item(title: &str, id: &str, views: u64, likes: u64, comments: u64) -> ItemRecord {
    ItemRecord {
        title: title.into(),
        reference_url: format!("https://www.youtube.com/watch?v={id}"),
        view_count: views,
        like_count: likes,
        comment_count: comments,
    }
}

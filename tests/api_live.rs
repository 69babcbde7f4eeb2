//! Live API tests. Run with: `YOUTUBE_API_KEY=... cargo test --features online -- --nocapture`
#![cfg(feature = "online")]

use ytc_rs::{Client, Config};

// Google for Developers
const CHANNEL: &str = "UC_x5XG1OV2P6uZZ5FSM9Ttw";

#[test]
fn fetch_channel_and_recent_uploads() {
    let cfg = Config::from_env().unwrap().with_max_results(5);
    let client = Client::new(&cfg).unwrap();

    let analysis = ytc_rs::analyze::collect(&client, CHANNEL).unwrap();
    assert!(!analysis.summary.name.is_empty());
    assert!(analysis.summary.total_video_count > 0);
    assert!(analysis.items.len() <= 5);
    assert!(
        analysis
            .items
            .iter()
            .all(|i| i.reference_url.starts_with("https://www.youtube.com/watch?v="))
    );
}

#[test]
fn unknown_channel_is_not_found() {
    let cfg = Config::from_env().unwrap();
    let client = Client::new(&cfg).unwrap();
    assert!(ytc_rs::analyze::collect(&client, "UCthis-channel-does-not-exist00").is_err());
}

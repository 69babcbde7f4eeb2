use anyhow::Result;
use clap::Parser;
use ytc_rs::{Client, Config};

#[derive(Parser, Debug)]
#[command(
    name = "ytc",
    version,
    about = "Fetch YouTube channel statistics and write a Markdown report with a likes-to-views chart",
    long_about = "Fetch YouTube channel statistics and write a Markdown report with a likes-to-views chart.\n\n\
                  Reads the API key from YOUTUBE_API_KEY. Optional: YOUTUBE_API_URL, YOUTUBE_MAX_RESULTS.\n\
                  Writes output.md (and likes_to_views_ratio.png) in the current directory."
)]
struct Cli {
    /// The YouTube channel ID (e.g., UC_x5XG1OV2P6uZZ5FSM9Ttw)
    #[arg(long = "channel-id", visible_alias = "channel_id")]
    channel_id: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    let client = Client::new(&config)?;

    ytc_rs::analyze(&client, &cli.channel_id)?;
    Ok(())
}

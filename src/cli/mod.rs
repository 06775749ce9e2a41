use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long)]
    pub session_signing_key: String,
    #[arg(long)]
    #[arg(default_value = "countries.example.ndjson")]
    pub countries: PathBuf,
    #[arg(long, value_delimiter = ',')]
    #[arg(default_value = "http://127.0.0.1:3000,http://localhost:3000")]
    pub allowed_origins: Vec<String>,
    #[arg(long)]
    #[arg(default_value_t = 30)]
    pub session_max_age_days: u64,
    /// Width and height of rendered border silhouettes, in pixels.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=4096))]
    #[arg(default_value_t = 512)]
    pub border_image_size: u32,
    /// Render every country silhouette into this directory and exit.
    #[arg(long)]
    pub export_borders: Option<PathBuf>,
}

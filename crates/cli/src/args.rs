//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// creator-studio: caption and hashtag helper backend for content creators
#[derive(Parser, Debug)]
#[command(name = "creator-studio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API server
    Serve(ServeArgs),

    /// Generate a caption from a topic
    Caption(CaptionArgs),

    /// Suggest hashtags for a caption
    Hashtags(HashtagsArgs),

    /// Store and list creator posts
    Posts(PostsArgs),

    /// Configuration management
    Config(ConfigArgs),

    /// Validate configuration and show status
    Doctor(DoctorArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug)]
pub struct CaptionArgs {
    /// Subject of the post
    #[arg(long)]
    pub topic: String,

    /// Tone of voice, e.g. "playful"
    #[arg(long)]
    pub tone: Option<String>,

    /// Intended audience
    #[arg(long)]
    pub audience: Option<String>,

    /// Keyword to append as a hashtag (repeatable)
    #[arg(long = "keyword")]
    pub keywords: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct HashtagsArgs {
    /// Caption text
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// File containing the caption (use - for stdin)
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Maximum number of hashtags
    #[arg(long, default_value_t = creator_studio_domain::HashtagRequest::DEFAULT_MAX_TAGS)]
    pub max_tags: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct PostsArgs {
    #[command(subcommand)]
    pub command: PostsCommands,
}

#[derive(Subcommand, Debug)]
pub enum PostsCommands {
    /// List stored posts
    List {
        /// Only show posts with this status (draft, scheduled, published)
        #[arg(long)]
        status: Option<String>,

        /// Maximum number of posts
        #[arg(long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Store a post read from a JSON file
    Add {
        /// JSON file describing the post (use - for stdin)
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Init {
        /// Path to write config file
        #[arg(long, default_value = "./config.toml")]
        path: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}

#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

//! Posts command - store and list creator posts

use anyhow::{Context, Result};
use creator_studio_domain::{CreatorPost, PostList, PostStatus, StoredPost};
use std::path::{Path, PathBuf};

use crate::args::{PostsArgs, PostsCommands};
use crate::commands::{build_catalog, read_input};
use crate::config::AppConfig;

pub async fn execute(args: PostsArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref())?;

    match args.command {
        PostsCommands::List {
            status,
            limit,
            json,
        } => list_posts(&config, status.as_deref(), limit, json).await,
        PostsCommands::Add { file } => add_post(&config, &file).await,
    }
}

async fn list_posts(
    config: &AppConfig,
    status: Option<&str>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let status = match status.map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(s.parse::<PostStatus>()?),
    };

    let catalog = build_catalog(config).await?;
    let items = catalog
        .list(status, limit)
        .await
        .context("Failed to list posts")?;

    if json {
        let json = serde_json::to_string_pretty(&PostList { items })
            .context("Failed to serialize output")?;
        println!("{}", json);
        return Ok(());
    }

    if items.is_empty() {
        println!("No posts found.");
        return Ok(());
    }

    for item in &items {
        print_post(item);
    }
    println!();
    println!("{} post(s)", items.len());

    Ok(())
}

fn print_post(item: &StoredPost) {
    let post = &item.post;
    println!("{} [{}] {}", item.id, post.status, post.title);
    if let Some(ref url) = post.image_url {
        println!("  image: {}", url);
    }
    if !post.hashtags.is_empty() {
        println!("  tags: {}", post.hashtags.join(" "));
    }
}

async fn add_post(config: &AppConfig, file: &Path) -> Result<()> {
    let content = read_input(file)?;
    let post: CreatorPost =
        serde_json::from_str(&content).context("Failed to parse post JSON")?;

    let catalog = build_catalog(config).await?;
    let id = catalog.save(&post).await.context("Failed to save post")?;

    println!("{}", id);
    Ok(())
}

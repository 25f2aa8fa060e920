//! Hashtags command - one-shot hashtag suggestion

use anyhow::{Context, Result};
use creator_studio_domain::HashtagResponse;
use creator_studio_domain::usecases::suggest_hashtags;
use std::path::Path;

use crate::args::HashtagsArgs;
use crate::commands::read_input;

pub async fn execute(args: HashtagsArgs) -> Result<()> {
    let caption = get_input_text(&args)?;

    tracing::debug!(
        caption_length = caption.len(),
        max_tags = args.max_tags,
        "Suggesting hashtags"
    );

    let hashtags = suggest_hashtags(&caption, args.max_tags);

    if args.json {
        let json = serde_json::to_string_pretty(&HashtagResponse { hashtags })
            .context("Failed to serialize output")?;
        println!("{}", json);
    } else {
        println!("{}", hashtags.join(" "));
    }

    Ok(())
}

fn get_input_text(args: &HashtagsArgs) -> Result<String> {
    if let Some(ref text) = args.text {
        return Ok(text.clone());
    }

    // Default to stdin if no input specified
    let path = args.file.as_deref().unwrap_or(Path::new("-"));
    read_input(path)
}

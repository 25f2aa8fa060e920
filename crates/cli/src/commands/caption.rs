//! Caption command - one-shot caption generation

use anyhow::{Context, Result};
use creator_studio_domain::usecases::compose_caption;
use creator_studio_domain::{CaptionRequest, CaptionResponse};

use crate::args::CaptionArgs;

pub async fn execute(args: CaptionArgs) -> Result<()> {
    let request = CaptionRequest {
        topic: args.topic,
        tone: args.tone,
        audience: args.audience,
        keywords: (!args.keywords.is_empty()).then_some(args.keywords),
    };

    let caption = compose_caption(&request);

    if args.json {
        let json = serde_json::to_string_pretty(&CaptionResponse { caption })
            .context("Failed to serialize output")?;
        println!("{}", json);
    } else {
        println!("{}", caption);
    }

    Ok(())
}

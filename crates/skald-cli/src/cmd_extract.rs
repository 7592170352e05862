use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context};
use skald_pipeline::Pipeline;

pub fn execute(file: Option<&Path>, rules_only: bool, pretty: bool) -> anyhow::Result<()> {
    let transcript = read_transcript(file)?;
    // Blank input is the caller's problem, not the extractor's.
    if transcript.trim().is_empty() {
        bail!("transcript is empty");
    }

    let pipeline = if rules_only {
        Pipeline::rules_only()
    } else {
        Pipeline::from_env()
    };

    let result = tokio::runtime::Runtime::new()?.block_on(pipeline.extract(&transcript));

    let out = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{out}");
    Ok(())
}

fn read_transcript(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read transcript {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read transcript from stdin")?;
            Ok(buf)
        }
    }
}

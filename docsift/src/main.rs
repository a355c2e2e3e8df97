use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use futures::stream::{self, StreamExt};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docsift::config::LoggingConfig;
use docsift::{Config, ContentExtractor, DocsiftError, ExtractedContent, FormatFamily, Payload};

#[derive(Parser)]
#[command(name = "docsift")]
#[command(about = "Extract plain text from documents, spreadsheets, slides and images")]
struct Args {
    /// Files to extract
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Print one JSON object per file
    #[arg(long)]
    json: bool,

    /// Only print the format family of each path
    #[arg(long)]
    classify: bool,

    /// Maximum number of files extracted concurrently
    #[arg(long, short = 'j', value_parser = clap::value_parser!(u16).range(1..))]
    jobs: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    init_tracing(LoggingConfig::from_env().json);

    let config = Config::from_env();
    config.validate()?;

    if args.classify {
        for path in &args.paths {
            let family = FormatFamily::from_path(path);
            if args.json {
                println!("{}", json!({ "path": path.display().to_string(), "family": family }));
            } else {
                println!("{}\t{}", path.display(), family);
            }
        }
        return Ok(ExitCode::SUCCESS);
    }

    let jobs = args.jobs.map(usize::from).unwrap_or_else(|| {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    });

    tracing::debug!(files = args.paths.len(), jobs, "Starting extraction");
    let extractor = Arc::new(ContentExtractor::new(&config));

    // `buffered` keeps results in input order while running up to `jobs` at once.
    let mut results = stream::iter(args.paths.iter().cloned())
        .map(|path| {
            let extractor = Arc::clone(&extractor);
            async move {
                let task_path = path.clone();
                let result = tokio::task::spawn_blocking(move || extractor.extract(&task_path))
                    .await
                    .map_err(|e| anyhow::anyhow!("extraction task failed: {e}"));
                (path, result)
            }
        })
        .buffered(jobs);

    let show_headers = args.paths.len() > 1;
    let mut failed = false;
    let mut first = true;

    while let Some((path, joined)) = results.next().await {
        let result = joined?;
        failed |= result.is_err();

        if args.json {
            println!("{}", json_line(&path, &result));
            continue;
        }

        if show_headers {
            if !first {
                println!();
            }
            println!("==> {} <==", path.display());
        }
        first = false;

        match result {
            Ok(content) => print_content(&content),
            Err(e) => eprintln!("docsift: {}: {e}", path.display()),
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "docsift=info".into());

    let (json_layer, text_layer) = if json {
        (
            Some(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
            None,
        )
    } else {
        (
            None,
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn print_content(content: &ExtractedContent) {
    match &content.payload {
        Payload::Text(text) | Payload::Advisory(text) => println!("{text}"),
        Payload::Absent => {}
    }
}

fn json_line(path: &Path, result: &Result<ExtractedContent, DocsiftError>) -> String {
    let value = match result {
        Ok(content) => json!({
            "path": path.display().to_string(),
            "family": content.family,
            "payload": content.payload,
            "word_count": content.word_count,
        }),
        Err(e) => json!({
            "path": path.display().to_string(),
            "family": FormatFamily::from_path(path),
            "error": e.to_string(),
            "error_kind": e.kind(),
        }),
    };
    value.to_string()
}

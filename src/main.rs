use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use blogchain::{
    run_pipeline, serve, server::ErrorBody, AppState, BlogRequest, BlogResponse, OpenAiClient,
    OpenAiConfig, ServerConfig,
};

/// Characters shown per section unless --full is given
const PREVIEW_CHARS: usize = 500;

#[derive(Parser)]
#[command(name = "blogchain")]
#[command(author, version, about = "Research, draft and review blog posts with an LLM", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to bind
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(long, env = "PORT", default_value = "8000")]
        port: u16,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run the pipeline once and print each stage's output
    Generate {
        /// Blog topic
        #[arg(short, long)]
        topic: String,

        /// Tone (professional, casual, technical, friendly, ...)
        #[arg(long, default_value = "professional")]
        tone: String,

        /// Length: short, medium or long
        #[arg(short, long, default_value = "medium")]
        length: String,

        /// Print full sections instead of previews
        #[arg(long)]
        full: bool,

        /// Send the request to a running server instead of calling the model directly
        #[arg(long)]
        url: Option<String>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Query a running server's health endpoint
    Health {
        /// Base URL of the server
        #[arg(long, default_value = "http://localhost:8000")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            verbose,
        } => {
            setup_logging(verbose);
            run_server(ServerConfig { host, port }).await
        }
        Commands::Generate {
            topic,
            tone,
            length,
            full,
            url,
            verbose,
        } => {
            setup_logging(verbose);
            let request = BlogRequest::new(topic).with_tone(tone).with_length(length);
            match url {
                Some(url) => generate_remote(&url, request, full).await,
                None => generate_once(request, full).await,
            }
        }
        Commands::Health { url } => {
            setup_logging(false);
            check_health(&url).await
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn build_client() -> Result<OpenAiClient> {
    let client = OpenAiClient::new(OpenAiConfig::from_env()?);
    info!("Using model {}", client.model());
    Ok(client)
}

async fn run_server(config: ServerConfig) -> Result<()> {
    // Missing credentials must stop startup, not the first request
    let client = build_client()?;
    let state = AppState::new(Arc::new(client));

    serve(&config, state).await
}

async fn generate_once(request: BlogRequest, full: bool) -> Result<()> {
    let client = build_client()?;

    info!(
        "Generating: topic={:?}, tone={:?}, length={}",
        request.topic, request.tone, request.length
    );

    let state = run_pipeline(&client, &request).await?;

    for record in &state.completed {
        info!(
            "{}: {} chars in {}ms",
            record.stage, record.output_chars, record.elapsed_ms
        );
    }

    let response = state.into_response()?;
    print_response(&response, full);

    Ok(())
}

async fn generate_remote(url: &str, request: BlogRequest, full: bool) -> Result<()> {
    let endpoint = format!("{}/generate", url.trim_end_matches('/'));
    info!("Posting to {}: topic={:?}", endpoint, request.topic);

    let started = Instant::now();
    let response = reqwest::Client::new()
        .post(&endpoint)
        .json(&request)
        .send()
        .await
        .with_context(|| format!("Cannot connect to API at {}", url))?;
    let elapsed = started.elapsed();

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!(
            "Generation failed with status {}: {}",
            status,
            error_detail(body)
        );
    }

    let response: BlogResponse = response
        .json()
        .await
        .context("Generate endpoint returned an unexpected body")?;

    info!("Blog generated in {:.2}s", elapsed.as_secs_f64());
    print_response(&response, full);

    Ok(())
}

async fn check_health(url: &str) -> Result<()> {
    let endpoint = format!("{}/health", url.trim_end_matches('/'));
    let response = reqwest::get(&endpoint)
        .await
        .with_context(|| format!("Cannot connect to API at {}", url))?;

    let status = response.status();
    let body: serde_json::Value = response
        .json()
        .await
        .context("Health endpoint returned invalid JSON")?;

    if !status.is_success() {
        anyhow::bail!("Health check failed with status {}: {}", status, body);
    }

    println!("Health check passed: {}", body);
    Ok(())
}

/// Prefer the server's `detail` field, fall back to the raw body
fn error_detail(body: String) -> String {
    serde_json::from_str::<ErrorBody>(&body)
        .map(|e| e.detail)
        .unwrap_or(body)
}

fn print_response(response: &BlogResponse, full: bool) {
    print_section("RESEARCH OUTPUT", &response.research, full);
    print_section("DRAFT OUTPUT", &response.draft, full);
    print_section("FINAL BLOG OUTPUT", &response.final_blog, full);
}

fn print_section(title: &str, text: &str, full: bool) {
    println!("{}", "=".repeat(80));
    println!("{}", title);
    println!("{}", "=".repeat(80));
    if full {
        println!("{}", text);
    } else {
        println!("{}", preview(text, PREVIEW_CHARS));
    }
    println!();
}

/// Truncate on a char boundary, marking the cut with "..."
fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

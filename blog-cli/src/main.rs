use anyhow::Result;
use blog_client::{FeedSession, HttpClient, Post, PostDraft};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const DEFAULT_SERVER: &str = "http://localhost:3000";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Blog server URL (falls back to BLOG_SERVER, then http://localhost:3000)
    #[arg(short, long)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every post in store order
    List,

    /// Create a post and show the refreshed feed
    Create {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        body: String,

        #[arg(short, long)]
        author: String,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    let server = cli
        .server
        .or_else(|| std::env::var("BLOG_SERVER").ok())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());

    println!("🔌 Connecting to: {}", server);

    let mut session = FeedSession::activate(Arc::new(HttpClient::new(server)));
    session.settle().await;

    let code = match cli.command {
        Commands::List => match session.last_error() {
            Some(e) => {
                eprintln!("{}", format!("❌ Failed to list posts: {}", e).red());
                ExitCode::from(1)
            }
            None => {
                print_posts(session.view().posts);
                ExitCode::SUCCESS
            }
        },

        Commands::Create {
            title,
            body,
            author,
        } => {
            println!("📝 Creating new post...");

            session.open_form();
            session.submit(PostDraft::new(title, body, author));

            if let Some(e) = session.form_error() {
                eprintln!("{}", format!("❌ {}", e).red());
                return Ok(ExitCode::from(2));
            }

            session.settle().await;

            // A failed create leaves the form open
            if session.view().form_open {
                let reason = session
                    .last_error()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "unknown error".to_string());
                eprintln!("{}", format!("❌ Failed to create post: {}", reason).red());
                ExitCode::from(1)
            } else {
                println!("{}", "✅ Post created successfully!".green());
                if let Some(e) = session.last_error() {
                    eprintln!("{}", format!("⚠️ Feed not refreshed: {}", e).yellow());
                }
                print_posts(session.view().posts);
                ExitCode::SUCCESS
            }
        }
    };

    Ok(code)
}

fn print_posts(posts: &[Post]) {
    println!("📋 {} posts", posts.len());
    println!();

    if posts.is_empty() {
        println!("   No posts found");
        println!("   Tip: blog-cli create --title \"My Post\" --body \"Hello\" --author \"me\"");
        return;
    }

    for (i, post) in posts.iter().enumerate() {
        println!("   {}. [{}] {}", i + 1, post.id, post.title.bold());
        println!("      {}", post.byline());
        println!("      {}", truncate(&post.body, 50));
        println!();
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

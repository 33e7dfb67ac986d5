use clap::{Args, Parser, Subcommand};
use std::io::{BufRead, Write};

use crate::command_logic::{browse::browse, create::create_tag, list::list_tags};
use crate::config::{get_config_path, Config};
use crate::constants::{Message, COMPLETE_SETUP};
use crate::external_api::{tags_api::TagsApi, ApiError};
use crate::slug::derive_slug;

#[derive(Parser)]
#[command(
    name = "tagdesk",
    version = "0.1.0",
    author,
    about = "Admin client for video tags. tagdesk - list, filter and create tags",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show one page of tags
    List(ListArgs),
    /// Create a new tag
    Create(CreateArgs),
    /// Print the slug derived from a title
    Slug(SlugArgs),
    /// Page through tags interactively
    Browse(BrowseArgs),
    /// Set up the backend url and page size
    Config,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only tags whose title contains this text
    #[arg(long, short)]
    pub filter: Option<String>,
    /// Page number
    #[arg(long, short, value_parser = validate_u32_more_then_zero)]
    pub page: Option<u32>,
    /// Restore the view from a shared link
    #[arg(long, short)]
    pub link: Option<String>,
    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CreateArgs {
    /// Tag title
    #[arg(long, short, required = true)]
    pub title: String,
    /// Do not ask for confirmation
    #[arg(long, short)]
    pub yes: bool,
}

#[derive(Args)]
pub struct SlugArgs {
    /// Tag title
    pub title: String,
}

#[derive(Args)]
pub struct BrowseArgs {
    /// Start from a shared link
    #[arg(long, short)]
    pub link: Option<String>,
}

fn validate_u32_more_then_zero(value: &str) -> Result<u32, ApiError> {
    let page: u32 = value.parse().map_err(|_| ApiError::Parse(value.to_string()))?;
    if page == 0 {
        return Err(ApiError::PageMoreThenZero)
    }
    Ok(page)
}

fn load_tags_api() -> Result<TagsApi, ApiError> {
    let config = Config::load(&get_config_path()?)?;
    TagsApi::new(&config)
}

fn setup_config<R: BufRead, W: Write>(input: R, mut output: W) -> Result<String, ApiError> {
    let config = Config::from_user_input(input, &mut output)?;
    let path = get_config_path()?;
    config.save(&path)?;
    Ok(format!(
        "{}\n{}",
        Message::ConfigSaved(path.display().to_string()).to_formatted_string(),
        COMPLETE_SETUP
    ))
}

pub async fn handle_command(
    cli: Cli,
    stdin: std::io::Stdin,
    mut stdout: std::io::Stdout,
) {
    match &cli.command {
        Commands::Slug(value) => println!("{}", derive_slug(&value.title)),
        Commands::Config => {
            match setup_config(stdin.lock(), stdout) {
                Ok(value) => println!("{}", value),
                Err(e) => eprintln!("Failed to create config: {}", e),
            };
        }
        Commands::List(value) => {
            let result = match load_tags_api() {
                Ok(tags_api) => list_tags(value, &tags_api, &mut stdout).await,
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                eprintln!("Failed to list tags: {}", e);
            }
        }
        Commands::Create(value) => {
            let result = match load_tags_api() {
                Ok(tags_api) => create_tag(value, &tags_api, stdin.lock(), &mut stdout).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(value) => println!("{}", value),
                Err(e) => eprintln!("Failed to create tag: {}", e),
            };
        }
        Commands::Browse(value) => {
            let result = match load_tags_api() {
                Ok(tags_api) => browse(value, &tags_api, stdin.lock(), &mut stdout).await,
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                eprintln!("Failed to browse tags: {}", e);
            }
        }
    }
}

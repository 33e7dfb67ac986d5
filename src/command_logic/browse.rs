use std::io::{BufRead, Write};

use log::warn;

use super::list::start_url;
use super::render_page;
use crate::cli_app::BrowseArgs;
use crate::constants::{Message, BROWSE_HELP};
use crate::controller::ListController;
use crate::external_api::tags_api::TagsApi;
use crate::external_api::ApiError;
use crate::query::{Navigator, UrlNavigator};
use crate::tag_form::TagForm;

#[derive(Debug, PartialEq, Eq)]
enum BrowseCommand {
    Next,
    Previous,
    GoTo(String),
    Filter(String),
    Create(String),
    Quit,
    Unknown,
}

impl BrowseCommand {
    fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let (command, argument) = match line.split_once(' ') {
            Some((command, argument)) => (command, argument.to_string()),
            None => (line, String::new()),
        };
        match command {
            "n" => Self::Next,
            "p" => Self::Previous,
            "g" => Self::GoTo(argument),
            "f" => Self::Filter(argument),
            "c" => Self::Create(argument),
            "q" => Self::Quit,
            _ => Self::Unknown,
        }
    }
}

/// Interactive session over the tag list; runs until `q` or end of input
pub async fn browse<R, W>(
    browse_args: &BrowseArgs,
    tags_api: &TagsApi,
    input: R,
    output: &mut W,
) -> Result<(), ApiError>
where
    R: BufRead,
    W: Write,
{
    let navigator = UrlNavigator::new(start_url(browse_args.link.as_deref(), tags_api)?);
    let mut controller = ListController::new(tags_api, navigator);
    writeln!(output, "{}", BROWSE_HELP)?;
    refresh(&mut controller, output).await?;

    for line in input.lines() {
        match BrowseCommand::parse(&line?) {
            BrowseCommand::Next => {
                controller.next_page();
            }
            BrowseCommand::Previous => {
                controller.previous_page();
            }
            BrowseCommand::GoTo(page) => {
                let result = page
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| ApiError::Parse(page.clone()))
                    .and_then(|page| controller.go_to_page(page));
                if let Err(e) = result {
                    writeln!(output, "{}", e)?;
                    continue;
                }
            }
            BrowseCommand::Filter(text) => {
                controller.set_draft_filter(&text);
                controller.commit_filter();
            }
            BrowseCommand::Create(title) => {
                match controller.create_tag(&TagForm::new(&title)).await {
                    Ok(()) => writeln!(output, "{}", Message::TagCreated(title).to_formatted_string())?,
                    Err(e) => writeln!(output, "Failed to create tag: {}", e)?,
                }
            }
            BrowseCommand::Quit => break,
            BrowseCommand::Unknown => {
                writeln!(output, "{}", BROWSE_HELP)?;
                continue;
            }
        }
        refresh(&mut controller, output).await?;
    }
    Ok(())
}

/// Sync and redraw; a failed fetch leaves the previous page on screen
async fn refresh<N, W>(controller: &mut ListController<'_, N>, output: &mut W) -> Result<(), ApiError>
where
    N: Navigator,
    W: Write,
{
    if let Err(e) = controller.sync().await {
        warn!("Tag list fetch failed: {}", e);
        writeln!(output, "Failed to load tags: {}", e)?;
    }
    render_page(controller.displayed(), controller.is_stale(), output)?;
    Ok(())
}

use std::io::Write;

use reqwest::Url;

use super::render_page;
use crate::cli_app::ListArgs;
use crate::constants::Message;
use crate::controller::ListController;
use crate::external_api::tags_api::TagsApi;
use crate::external_api::ApiError;
use crate::query::UrlNavigator;

/// Address the view starts from: the shared link, or the backend root
pub fn start_url(link: Option<&str>, tags_api: &TagsApi) -> Result<Url, ApiError> {
    match link {
        Some(link) => Url::parse(link).map_err(|e| ApiError::Parse(e.to_string())),
        None => Ok(tags_api.client.base_url.clone()),
    }
}

/// Show one page of tags for the requested filter and page
pub async fn list_tags<W: Write>(
    list_args: &ListArgs,
    tags_api: &TagsApi,
    output: &mut W,
) -> Result<(), ApiError> {
    let navigator = UrlNavigator::new(start_url(list_args.link.as_deref(), tags_api)?);
    let mut controller = ListController::new(tags_api, navigator);
    if let Some(filter) = &list_args.filter {
        controller.set_draft_filter(filter);
        controller.commit_filter();
    }
    if let Some(page) = list_args.page {
        controller.go_to_page(page)?;
    }
    controller.sync().await?;

    if list_args.json {
        serde_json::to_writer_pretty(&mut *output, &controller.displayed())?;
        writeln!(output)?;
        return Ok(());
    }
    render_page(controller.displayed(), controller.is_stale(), output)?;
    writeln!(
        output,
        "{}",
        Message::ShareLink(controller.navigator().url().to_string()).to_formatted_string()
    )?;
    Ok(())
}

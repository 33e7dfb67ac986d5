use std::io::{BufRead, Write};

use super::render_page;
use crate::cli_app::CreateArgs;
use crate::constants::Message;
use crate::controller::ListController;
use crate::external_api::tags_api::TagsApi;
use crate::external_api::ApiError;
use crate::query::MemoryNavigator;
use crate::tag_form::TagForm;

/// Create a tag, then show the refreshed first page
pub async fn create_tag<R, W>(
    create_args: &CreateArgs,
    tags_api: &TagsApi,
    input: R,
    output: &mut W,
) -> Result<String, ApiError>
where
    R: BufRead,
    W: Write,
{
    let form = TagForm::new(&create_args.title);
    form.validate()?;
    if create_args.yes {
        writeln!(output, "{}", Message::SlugPreview(form.slug()).to_formatted_string())?;
    } else {
        confirm_create(&form, input, &mut *output)?;
    }
    let mut controller = ListController::new(tags_api, MemoryNavigator::default());
    controller.create_tag(&form).await?;
    render_page(controller.displayed(), controller.is_stale(), output)?;
    Ok(Message::TagCreated(form.title().to_string()).to_formatted_string())
}

/// Confirm the title and slug before sending
fn confirm_create<R, W>(form: &TagForm, mut input: R, mut output: W) -> Result<(), ApiError>
where
    R: BufRead,
    W: Write,
{
    output.write_all(
        Message::ApproveCreateTag(form.title().to_string(), form.slug())
            .to_formatted_string()
            .as_bytes(),
    )?;
    output.flush()?;

    let mut confirmation = String::new();
    input.read_line(&mut confirmation)?;

    let trimmed = confirmation.trim().to_lowercase();
    if !matches!(trimmed.as_str(), "y" | "yes" | "") {
        return Err(ApiError::CreateCancelledByUser);
    }
    Ok(())
}

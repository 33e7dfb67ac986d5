pub mod browse;
pub mod create;
pub mod list;

use std::io::Write;

use crate::constants::Message;
use crate::external_api::tags_api::models::tag_page::TagPage;

/// Print the tag table and the pagination footer
pub fn render_page<W: Write>(page: Option<&TagPage>, stale: bool, output: &mut W) -> std::io::Result<()> {
    let Some(page) = page else {
        return Ok(());
    };
    if stale {
        writeln!(output, "{}", Message::ShowingPrevious.to_formatted_string())?;
    }
    if page.data.is_empty() {
        writeln!(output, "{}", Message::NoTagsFound.to_formatted_string())?;
    }
    for tag in &page.data {
        writeln!(output, "{}", Message::TagRow(tag).to_formatted_string())?;
    }
    writeln!(
        output,
        "{}",
        Message::PageSummary(page.page, page.page_count.max(1), page.total_items).to_formatted_string()
    )?;
    output.flush()
}

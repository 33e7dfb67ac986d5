use crate::external_api::tags_api::models::tag::Tag;

pub const CONFIG_DIR: &str = ".config/tagdesk";
pub const CONFIG_FILE: &str = "config.json";
pub const BASE_URL_ENV: &str = "TAGDESK_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";
pub const DEFAULT_PER_PAGE: u32 = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const ENTER_BACKEND_URL: &str = "Enter the url of the tags backend: ";
pub const ENTER_PER_PAGE: &str = "Enter the number of tags per page [10]: ";
pub const COMPLETE_SETUP: &str = "To view the available commands, type: tagdesk --help";
pub const BROWSE_HELP: &str =
    "Commands: n (next), p (previous), g <N> (go to page), f <TEXT> (filter), c <TITLE> (create), q (quit)";

/// Standard message
#[derive(Debug)]
pub enum Message<'a> {
    TagRow(&'a Tag),
    PageSummary(u32, u32, u64),
    NoTagsFound,
    ShowingPrevious,
    ShareLink(String),
    SlugPreview(String),
    ApproveCreateTag(String, String),
    TagCreated(String),
    ConfigSaved(String),
}

impl Message<'_> {
    pub fn to_formatted_string(&self) -> String {
        match self {
            Message::TagRow(tag) => format!(
                "{}  ({})  {} video(s)",
                tag.title, tag.id, tag.amount_of_videos
            ),
            Message::PageSummary(page, page_count, total_items) => format!(
                "Page {} of {}, {} item(s)",
                page, page_count, total_items
            ),
            Message::NoTagsFound => "No tags found".to_string(),
            Message::ShowingPrevious => "(showing previous results)".to_string(),
            Message::ShareLink(url) => format!("Link: {}", url),
            Message::SlugPreview(slug) => format!("Slug: {}", slug),
            Message::ApproveCreateTag(title, slug) => format!(
                "You want to create the tag '{}' with slug '{}' [y/n]? ",
                title, slug
            ),
            Message::TagCreated(title) => format!("Tag created: {}", title),
            Message::ConfigSaved(path) => format!("Config saved: {}", path),
        }
    }
}

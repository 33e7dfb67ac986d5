use super::tag::Tag;

/// One page of tags as displayed by the list
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TagPage {
    pub data: Vec<Tag>,
    pub page: u32,
    pub page_count: u32,
    pub total_items: u64,
}

/// Raw `GET /tags` body.
///
/// Accepts both `{data, page, pageCount, totalItems}` and the json-server
/// envelope `{first, prev, next, last, pages, items, data}`.
#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TagPageResponse {
    pub data: Vec<Tag>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(alias = "pages", default)]
    pub page_count: u32,
    #[serde(alias = "items", default)]
    pub total_items: u64,
}

impl TagPageResponse {
    pub fn into_page(self, requested_page: u32) -> TagPage {
        TagPage {
            data: self.data,
            page: self.page.unwrap_or(requested_page),
            page_count: self.page_count,
            total_items: self.total_items,
        }
    }
}

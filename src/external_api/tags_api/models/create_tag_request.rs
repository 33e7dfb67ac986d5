/// Body of `POST /tags`
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagRequest {
    pub title: String,
    pub slug: String,
    pub amount_of_videos: u32,
}

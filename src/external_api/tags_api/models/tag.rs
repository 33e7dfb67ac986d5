#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub title: String,
    pub amount_of_videos: u32,
}

impl Tag {

    #[cfg(test)]
    pub fn new(id: &str, title: &str, amount_of_videos: u32) -> Self {
        Self { id: id.to_string(), title: title.to_string(), amount_of_videos }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Domain whose entities get a linked topic comment.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DomainKind {
    Event,
    Page,
}

impl DomainKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Page => "page",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct DomainTopicDto {
    pub domain: DomainKind,
    pub domain_id: i32,
    pub comment_id: i32,
}

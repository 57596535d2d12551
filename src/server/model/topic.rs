//! Reserved root topics and the domains anchored beneath them.

use crate::model::topic::{DomainKind, DomainTopicDto};

/// Sentinel comments acting as the global roots of each domain's forest.
///
/// They are seeded once at startup with fixed ids and are the only comments
/// without a parent or an author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootTopic {
    Event,
    Page,
    Forum,
    Legacy,
}

impl RootTopic {
    pub const ALL: [RootTopic; 4] = [
        RootTopic::Event,
        RootTopic::Page,
        RootTopic::Forum,
        RootTopic::Legacy,
    ];

    /// Reserved comment id of the root.
    pub fn id(self) -> i32 {
        match self {
            Self::Event => 1,
            Self::Page => 2,
            Self::Forum => 3,
            Self::Legacy => 4,
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|root| root.id() == id)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Event => "Event topics",
            Self::Page => "Page topics",
            Self::Forum => "Forum topics",
            Self::Legacy => "Legacy topics",
        }
    }
}

impl DomainKind {
    /// Root under which topics for this domain are created.
    pub fn root(self) -> RootTopic {
        match self {
            Self::Event => RootTopic::Event,
            Self::Page => RootTopic::Page,
        }
    }

    pub fn topic_title(self, domain_id: i32) -> String {
        format!("Root topic comment for {} ID: {}", self.as_str(), domain_id)
    }

    pub fn topic_body(self, domain_id: i32) -> String {
        format!("Root topic for {} {}", self.as_str(), domain_id)
    }
}

/// Binding between a domain entity and its topic comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainTopic {
    pub domain: DomainKind,
    pub domain_id: i32,
    pub comment_id: i32,
}

impl DomainTopic {
    pub fn into_dto(self) -> DomainTopicDto {
        DomainTopicDto {
            domain: self.domain,
            domain_id: self.domain_id,
            comment_id: self.comment_id,
        }
    }
}

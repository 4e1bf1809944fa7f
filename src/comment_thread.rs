//! Transient comment state owned by one mounted post.
//!
//! Nothing here touches the DOM; `post_view` drives a [`CommentThread`] from
//! the textarea, the form submit and the delete buttons.

use log::debug;

#[derive(Hash, Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct CommentId(pub u64);

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Hash, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
}

/// Extra checks applied on submit. Both are off by default, so whitespace-only
/// and repeated comments are accepted verbatim.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentPolicy {
    pub reject_blank: bool,
    pub reject_duplicates: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    Blank,
    Duplicate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    Published(CommentId),
    /// the draft is empty, so the submit action is not available
    Disabled,
    Rejected(RejectReason),
}

#[derive(Clone, Debug, Default)]
pub struct CommentThread {
    draft: String,
    comments: Vec<Comment>,
    next_id: u64,
    policy: CommentPolicy,
}

impl CommentThread {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: CommentPolicy) -> Self {
        CommentThread {
            policy,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn contents(&self) -> Vec<&str> {
        self.comments.iter().map(|c| c.content.as_str()).collect()
    }

    pub fn can_submit(&self) -> bool {
        !self.draft.is_empty()
    }

    pub fn on_draft_change(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn submit(&mut self) -> Submission {
        if !self.can_submit() {
            return Submission::Disabled;
        }

        if self.policy.reject_blank && self.draft.trim().is_empty() {
            return Submission::Rejected(RejectReason::Blank);
        }

        if self.policy.reject_duplicates && self.comments.iter().any(|c| c.content == self.draft) {
            return Submission::Rejected(RejectReason::Duplicate);
        }

        let id = CommentId(self.next_id);
        self.next_id += 1;

        let content = std::mem::take(&mut self.draft);
        debug!("comment {} published: {:?}", id, content);
        self.comments.push(Comment { id, content });

        Submission::Published(id)
    }

    /// Removes every comment whose content equals `target`.
    pub fn delete_comment(&mut self, target: &str) {
        let before = self.comments.len();
        self.comments.retain(|c| c.content != target);
        debug!("deleted {} comment(s) matching {:?}", before - self.comments.len(), target);
    }

    pub fn delete_comment_by_id(&mut self, id: CommentId) -> Option<Comment> {
        let index = self.comments.iter().position(|c| c.id == id)?;
        debug!("deleted comment {}", id);
        Some(self.comments.remove(index))
    }
}

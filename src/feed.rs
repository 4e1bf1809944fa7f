use chrono::Duration;
use log::info;
use web_sys::{Document, Element};

use crate::config::FeedConfig;
use crate::error::UiError;
use crate::post::PostData;
use crate::post_view::PostView;

pub struct Feed {
    pub posts: Vec<PostView>,
    stale_after: Duration,
}

impl Feed {
    /// Number of labels that changed.
    pub fn refresh_stale_labels(&self) -> usize {
        self.posts
            .iter()
            .filter(|post| post.refresh_if_stale(self.stale_after))
            .count()
    }

    pub fn unmount(self) {
        for post in self.posts {
            post.unmount();
        }
    }
}

/// Clears `root` and mounts one post view per entry, in order.
pub fn render_feed(
    document: &Document,
    root: &Element,
    config: &FeedConfig,
    posts: &[PostData],
) -> Result<Feed, UiError> {
    root.set_inner_html("");

    let views = posts
        .iter()
        .map(|post| PostView::mount(document, root, post, config))
        .collect::<Result<Vec<_>, _>>()?;

    info!("mounted {} post(s) into {}", views.len(), config.root_selector);

    Ok(Feed {
        posts: views,
        stale_after: config.stale_after(),
    })
}

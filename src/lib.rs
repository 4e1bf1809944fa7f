extern crate console_error_panic_hook;
extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod avatar;
pub mod comment_thread;
pub mod comment_view;
pub mod config;
pub mod error;
pub mod feed;
pub mod logger;
pub mod post;
pub mod post_view;
pub mod published_at;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::config::FeedConfig;
use crate::error::UiError;
use crate::feed::Feed;

pub use crate::logger::init_logger;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(contents: &str);
}

thread_local! {
    static MOUNTED_FEED: RefCell<Option<Feed>> = RefCell::new(None);
}

pub fn document_and_root(root_selector: &str) -> Result<(Document, Element), UiError> {
    let window = web_sys::window().ok_or(UiError::NoWindow)?;
    let document = window.document().ok_or(UiError::NoDocument)?;
    let root = document
        .query_selector(root_selector)?
        .ok_or_else(|| UiError::RootNotFound(root_selector.to_owned()))?;

    Ok((document, root))
}

/// Mounts the posts in `posts_json` into the configured root, replacing any
/// feed mounted by an earlier call.
#[wasm_bindgen]
pub fn bootstrap(config_json: &str, posts_json: &str) -> Result<(), JsValue> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    init_logger();

    let config = FeedConfig::from_json(config_json)?;
    let posts = post::parse_posts(posts_json)?;
    let (document, root) = document_and_root(&config.root_selector)?;

    MOUNTED_FEED.with(|mounted| {
        if let Some(previous) = mounted.borrow_mut().take() {
            previous.unmount();
        }
    });

    let feed = feed::render_feed(&document, &root, &config, &posts)?;
    MOUNTED_FEED.with(|mounted| *mounted.borrow_mut() = Some(feed));

    Ok(())
}

/// Recomputes relative timestamps older than the configured threshold, for
/// hosts that want to refresh on visibility changes instead of waiting for the
/// timer.
#[wasm_bindgen]
pub fn refresh_stale_labels() -> usize {
    MOUNTED_FEED.with(|mounted| {
        mounted
            .borrow()
            .as_ref()
            .map(|feed| feed.refresh_stale_labels())
            .unwrap_or(0)
    })
}

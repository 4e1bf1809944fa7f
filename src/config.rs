use chrono::Duration;

use crate::comment_thread::CommentPolicy;
use crate::error::UiError;

pub const DEFAULT_ROOT_SELECTOR: &'static str = "#feed_root";
pub const DEFAULT_RELATIVE_TIME_REFRESH_MS: u32 = 60_000;
pub const DEFAULT_STALE_AFTER_MS: u32 = 60_000;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedConfig {
    /// css selector of the element the feed is mounted into
    pub root_selector: String,
    /// interval of the timer that recomputes relative timestamps, `0` disables it
    pub relative_time_refresh_ms: u32,
    pub stale_after_ms: u32,
    pub comment_policy: CommentPolicy,
    pub comment_avatar_url: Option<String>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            root_selector: DEFAULT_ROOT_SELECTOR.to_owned(),
            relative_time_refresh_ms: DEFAULT_RELATIVE_TIME_REFRESH_MS,
            stale_after_ms: DEFAULT_STALE_AFTER_MS,
            comment_policy: CommentPolicy::default(),
            comment_avatar_url: None,
        }
    }
}

impl FeedConfig {
    /// An empty (or whitespace) payload yields the defaults.
    pub fn from_json(data: &str) -> Result<Self, UiError> {
        if data.trim().is_empty() {
            return Ok(FeedConfig::default());
        }

        let config: FeedConfig = serde_json::from_str(data).map_err(UiError::Config)?;
        config.refresh_interval()?;

        Ok(config)
    }

    /// Delay handed to `setInterval`, `None` when the timer is disabled.
    pub fn refresh_interval(&self) -> Result<Option<i32>, UiError> {
        if self.relative_time_refresh_ms == 0 {
            return Ok(None);
        }

        i32::try_from(self.relative_time_refresh_ms)
            .map(Some)
            .map_err(|_| {
                UiError::InvalidConfig(format!(
                    "relativeTimeRefreshMs must be at most {}, got {}",
                    i32::MAX,
                    self.relative_time_refresh_ms
                ))
            })
    }

    pub fn stale_after(&self) -> Duration {
        Duration::milliseconds(i64::from(self.stale_after_ms))
    }
}

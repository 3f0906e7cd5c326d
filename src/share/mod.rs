//! Shareable app-state workflow
//!
//! A [`ShareSession`] sits behind the component's save/load callbacks: it
//! fingerprints the current layout, persists it through a [`ShareStore`],
//! hands back a shareable link, and restores snapshots referenced by the
//! `?state=` query parameter. A lock flag gates other callbacks while a
//! restored layout settles (the component fires an interval to release it).

pub mod link;
pub mod store;

use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::json;

use crate::config::ShareConfig;
use crate::error::Result;
use crate::hash::fingerprint_state;
use crate::layout::{AppLayout, ComponentUpdates, update_component_state};

pub use link::{STATE_PARAM, parse_query_string, share_url, url_base};
pub use store::{FileStore, ShareStore};

/// Component ids and timings the share workflow wires up
#[derive(Debug, Clone)]
pub struct ShareOptions {
    /// Id of the wrapper div holding the whole app layout
    pub layout_id: String,

    /// Id of the one-shot interval that unlocks the app after a reload
    pub interval_id: String,

    /// Id of the modal presenting the share link
    pub modal_id: String,

    /// Id of the textarea holding the share link
    pub link_id: String,

    /// How long the app stays locked after a reload, in milliseconds
    pub interval_delay_ms: u64,

    /// Deployment path prefix appended to the link base (e.g. "/dash")
    pub url_path_prefix: Option<String>,
}

impl Default for ShareOptions {
    fn default() -> Self {
        Self {
            layout_id: "app-layout".to_string(),
            interval_id: "update-timer".to_string(),
            modal_id: "save-modal".to_string(),
            link_id: "url-link".to_string(),
            interval_delay_ms: 2000,
            url_path_prefix: None,
        }
    }
}

impl From<&ShareConfig> for ShareOptions {
    fn from(config: &ShareConfig) -> Self {
        Self {
            interval_delay_ms: config.interval_delay_ms,
            url_path_prefix: config.url_path_prefix.clone(),
            ..Self::default()
        }
    }
}

/// Result of a successful save: the snapshot fingerprint and its share link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedShare {
    pub fingerprint: String,
    pub link: String,
}

/// Coordinates saving and restoring shared app state
pub struct ShareSession<S: ShareStore> {
    store: S,
    options: ShareOptions,
    pre_save: ComponentUpdates,
    locked: AtomicBool,
}

impl<S: ShareStore> ShareSession<S> {
    pub fn new(store: S, options: ShareOptions) -> Self {
        Self {
            store,
            options,
            pre_save: ComponentUpdates::new(),
            locked: AtomicBool::new(false),
        }
    }

    /// Prop patches applied to the layout right before every save
    /// (e.g. reset a transient component so it is not shared).
    #[must_use]
    pub fn with_pre_save_updates(mut self, updates: ComponentUpdates) -> Self {
        self.pre_save = updates;
        self
    }

    pub fn options(&self) -> &ShareOptions {
        &self.options
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Lock callbacks gated through [`Self::guarded`]
    pub fn lock(&self) {
        self.locked.store(true, Ordering::SeqCst);
    }

    /// Release the lock
    pub fn unlock(&self) {
        self.locked.store(false, Ordering::SeqCst);
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::SeqCst)
    }

    /// Run a callback only when the session is unlocked.
    ///
    /// `None` maps to the host's no-update sentinel: the callback's outputs
    /// stay untouched while a restored layout settles.
    pub fn guarded<T>(&self, f: impl FnOnce() -> T) -> Option<T> {
        if self.is_locked() { None } else { Some(f()) }
    }

    /// Save the current layout and build its share link.
    ///
    /// `trigger` is the save control's click count; `None` or zero means the
    /// save has not fired and nothing is written. `href` is the browser's
    /// current location, used for the link base.
    pub fn save_state(
        &self,
        trigger: Option<u64>,
        state: &AppLayout,
        href: &str,
    ) -> Result<Option<SavedShare>> {
        if trigger.unwrap_or(0) == 0 {
            return Ok(None);
        }

        let mut snapshot = state.clone();
        update_component_state(&mut snapshot, &self.pre_save)?;

        let fingerprint = fingerprint_state(&snapshot)?;
        // Existing snapshot with the same fingerprint wins
        self.store.save(&fingerprint, &snapshot)?;

        let base = url_base(href, self.options.url_path_prefix.as_deref())?;
        let link = share_url(&base, &fingerprint);

        Ok(Some(SavedShare { fingerprint, link }))
    }

    /// Restore the layout referenced by a location query string.
    ///
    /// Returns the stored snapshot when `?state=<fingerprint>` names a known
    /// one (with the share modal patched closed), otherwise the current
    /// layout unchanged.
    pub fn load_state(&self, query: &str, current: AppLayout) -> Result<AppLayout> {
        let params = parse_query_string(query);
        let Some(fingerprint) = params.get(STATE_PARAM) else {
            return Ok(current);
        };

        match self.store.load(fingerprint)? {
            Some(mut snapshot) => {
                let mut updates = ComponentUpdates::new();
                updates.set(&self.options.modal_id, "is_open", json!(false));
                update_component_state(&mut snapshot, &updates)?;
                Ok(snapshot)
            }
            None => Ok(current),
        }
    }
}

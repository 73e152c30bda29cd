//! Browser-backed theme environment.
//!
//! Reads the persisted preference from `localStorage`, falls back to the
//! `prefers-color-scheme` media query, and reflects the active mode on the
//! `<html>` element as both the `dark` class and a `data-theme` attribute.
//! Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic (the server always
//! renders light and the client re-resolves after hydration).

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{StorageError, ThemeEnvironment, ThemeMode};

#[cfg(feature = "hydrate")]
const DARK_CLASS: &str = "dark";

/// [`ThemeEnvironment`] over `window`, `localStorage` and `document`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserThemeEnvironment;

impl ThemeEnvironment for BrowserThemeEnvironment {
    fn read_persisted(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write_persisted(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|_| StorageError::WriteRejected { key: key.to_owned() })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn system_prefers_dark(&self) -> Option<bool> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()?
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
                .map(|mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn apply_presentation(&self, mode: ThemeMode) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                if let Some(el) = doc.document_element() {
                    let class_list = el.class_list();
                    let _ = if mode.is_dark() {
                        class_list.add_1(DARK_CLASS)
                    } else {
                        class_list.remove_1(DARK_CLASS)
                    };
                    let _ = el.set_attribute("data-theme", mode.as_str());
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = mode;
        }
    }
}

use cfg_if::cfg_if;

/// Outcome of asking the browser for a new tab. Popup blockers suppress the
/// request silently, so the only signal is the state of the returned handle.
///
/// `Indeterminate` means the handle exists but its `closed` capability cannot
/// be read (missing or non-boolean). Callers treat it the same as
/// `BlockedOrClosed`; a still-initializing context will be redirected in
/// place rather than left in limbo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewTab {
    Opened,
    BlockedOrClosed,
    Indeterminate,
}

/// Browser navigation seam. The production implementation drives the DOM
/// window; tests substitute a recording mock.
pub trait Navigator {
    /// Request a new browsing context for `url`. `Err` means the creation
    /// call itself raised (e.g. security policy), not that it was blocked.
    fn open_new_tab(&self, url: &str) -> anyhow::Result<NewTab>;

    /// Navigate the current browsing context to `url`, replacing the
    /// present page.
    fn redirect(&self, url: &str);
}

cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use anyhow::anyhow;
        use wasm_bindgen::JsValue;

        /// [`Navigator`] backed by the real DOM window.
        #[derive(Debug, Clone, Copy, Default)]
        pub struct Dom;

        impl Navigator for Dom {
            fn open_new_tab(&self, url: &str) -> anyhow::Result<NewTab> {
                let win = web_sys::window().ok_or_else(|| anyhow!("no window object"))?;
                let handle = win
                    .open_with_url_and_target(url, "_blank")
                    .map_err(|e| anyhow!("{e:#?}"))?;
                let Some(handle) = handle else {
                    return Ok(NewTab::BlockedOrClosed);
                };
                // Read `closed` reflectively rather than through the typed
                // binding: some embedders leave it undefined, and that case
                // must stay distinguishable from a real boolean.
                Ok(
                    match js_sys::Reflect::get(&handle, &JsValue::from_str("closed")) {
                        Ok(v) if v.is_undefined() => NewTab::Indeterminate,
                        Ok(v) => match v.as_bool() {
                            Some(true) => NewTab::BlockedOrClosed,
                            Some(false) => NewTab::Opened,
                            None => NewTab::Indeterminate,
                        },
                        Err(_) => NewTab::Indeterminate,
                    },
                )
            }

            fn redirect(&self, url: &str) {
                if let Some(win) = web_sys::window() {
                    _ = win.location().set_href(url);
                }
            }
        }
    }
}

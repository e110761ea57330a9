use crate::navigation::{Navigator, NewTab};
use crate::value::CallbackValue;

/// Opens `url` in a new tab, falling back to a same-tab redirect when the
/// popup is blocked or the new context cannot be confirmed open. Absent or
/// empty input is a no-op. Never fails: every failure path resolves into the
/// fallback redirect.
pub fn open_url(nav: &impl Navigator, url: Option<&str>) -> CallbackValue {
    let Some(url) = url.filter(|u| !u.is_empty()) else {
        return CallbackValue::NoUpdate;
    };
    match nav.open_new_tab(url) {
        Ok(NewTab::Opened) => {}
        Ok(NewTab::BlockedOrClosed | NewTab::Indeterminate) => {
            tracing::info!("popup blocked, navigating in same tab");
            nav.redirect(url);
        }
        Err(_) => nav.redirect(url),
    }
    CallbackValue::Update("".to_string())
}

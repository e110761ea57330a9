use std::collections::HashMap;

use crate::dispatch;
use crate::navigation::Navigator;
use crate::value::CallbackValue;

/// Identifier the host framework resolves to reach the URL dispatcher.
pub const OPEN_URL: &str = "clientside.ui.open";

pub type Callback = Box<dyn Fn(Option<&str>) -> CallbackValue>;

/// Maps namespaced callback identifiers (`<namespace>.<module>.<function>`)
/// to handlers. Owned by the hosting application and built once at startup;
/// later registrations win, which makes the override semantics explicit
/// instead of leaving them to whichever script ran last.
#[derive(Default)]
pub struct CallbackRegistry {
    handlers: HashMap<String, Callback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        CallbackRegistry::default()
    }

    /// Registry pre-populated with the builtin URL dispatcher over `nav`.
    pub fn with_builtins(nav: impl Navigator + 'static) -> Self {
        let mut r = CallbackRegistry::new();
        r.register(OPEN_URL, Box::new(move |url| dispatch::open_url(&nav, url)));
        r
    }

    pub fn register<S: Into<String>>(&mut self, id: S, cb: Callback) {
        let id = id.into();
        if self.handlers.insert(id.clone(), cb).is_some() {
            tracing::debug!("overriding callback {id}");
        }
    }

    /// Folds `other` into `self`; entries from `other` win on collision.
    pub fn merge(&mut self, other: CallbackRegistry) {
        for (id, cb) in other.handlers {
            self.register(id, cb);
        }
    }

    /// `None` when nothing is registered under `id`.
    pub fn invoke(&self, id: &str, arg: Option<&str>) -> Option<CallbackValue> {
        self.handlers.get(id).map(|cb| cb(arg))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.handlers.contains_key(id)
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::navigation::{Navigator, NewTab};
    use crate::registry::{CallbackRegistry, OPEN_URL};
    use crate::value::CallbackValue;

    #[derive(Default)]
    struct RecordingNavigator {
        opened: Rc<RefCell<Vec<String>>>,
    }

    impl Navigator for RecordingNavigator {
        fn open_new_tab(&self, url: &str) -> anyhow::Result<NewTab> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(NewTab::Opened)
        }

        fn redirect(&self, _url: &str) {}
    }

    #[test]
    fn test_unknown_id() {
        let r = CallbackRegistry::new();
        assert!(r.invoke("nope.nothing", None).is_none());
    }

    #[test]
    fn test_later_registration_wins() {
        let mut r = CallbackRegistry::new();
        r.register("ns.mod.f", Box::new(|_| CallbackValue::from("first")));
        r.register("ns.mod.f", Box::new(|_| CallbackValue::from("second")));
        assert_eq!(r.invoke("ns.mod.f", None), Some(CallbackValue::from("second")));
    }

    #[test]
    fn test_merge_overrides() {
        let mut base = CallbackRegistry::new();
        base.register("ns.a.f", Box::new(|_| CallbackValue::from("base")));
        base.register("ns.b.f", Box::new(|_| CallbackValue::NoUpdate));

        let mut overlay = CallbackRegistry::new();
        overlay.register("ns.a.f", Box::new(|_| CallbackValue::from("overlay")));

        base.merge(overlay);
        assert_eq!(base.invoke("ns.a.f", None), Some(CallbackValue::from("overlay")));
        assert!(base.contains("ns.b.f"));
    }

    #[test]
    fn test_builtin_routes_to_dispatcher() {
        let opened = Rc::new(RefCell::new(vec![]));
        let nav = RecordingNavigator {
            opened: opened.clone(),
        };
        let r = CallbackRegistry::with_builtins(nav);
        let ret = r.invoke(OPEN_URL, Some("https://example.com"));
        assert_eq!(ret, Some(CallbackValue::Update("".to_string())));
        assert_eq!(*opened.borrow(), vec!["https://example.com"]);

        let ret = r.invoke(OPEN_URL, None);
        assert_eq!(ret, Some(CallbackValue::NoUpdate));
    }
}

use cfg_if::cfg_if;

pub mod dispatch;
pub mod navigation;
pub mod registry;
pub mod value;

// The wasm entry points live in lib.rs because wasm-bindgen exports need to
// come from the crate root of a lib target.
cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use std::cell::RefCell;

        use wasm_bindgen::prelude::wasm_bindgen;
        use tracing_subscriber::prelude::*;
        use tracing_web::MakeWebConsoleWriter;

        use crate::registry::CallbackRegistry;
        use crate::value::CallbackValue;

        thread_local! {
            static REGISTRY: RefCell<Option<CallbackRegistry>> = const { RefCell::new(None) };
        }

        /// Client-side bootstrap. Call once before any `invoke`.
        #[wasm_bindgen]
        pub fn init() {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false) // Only partially supported across browsers
                .without_time()   // std::time is not available in browsers
                .with_writer(MakeWebConsoleWriter::new());
            tracing_subscriber::registry().with(fmt_layer).init();

            REGISTRY.with(|r| {
                *r.borrow_mut() = Some(CallbackRegistry::with_builtins(navigation::Dom));
            });
        }

        /// Binding boundary for the host framework: resolves `id` and calls
        /// the handler with one positional argument. `None` is the no-update
        /// sentinel on the wire; `Some(v)` is applied to the bound output.
        #[wasm_bindgen]
        pub fn invoke(id: &str, arg: Option<String>) -> Option<String> {
            REGISTRY.with(|r| {
                let r = r.borrow();
                let Some(reg) = r.as_ref() else {
                    tracing::warn!("invoke({id}) before init");
                    return None;
                };
                match reg.invoke(id, arg.as_deref()) {
                    Some(CallbackValue::Update(v)) => Some(v),
                    Some(CallbackValue::NoUpdate) => None,
                    None => {
                        tracing::warn!("no callback registered for {id}");
                        None
                    }
                }
            })
        }
    }
}

//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::cell::Cell;

use leptos::prelude::*;
use wasm_bindgen::prelude::{wasm_bindgen, Closure, JsValue};

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::modal::{Dismissal, ModalState};

/// Page-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Startup configuration
    pub config: StoredValue<SiteConfig>,
    /// Project detail overlay
    pub modal: ModalHandle,
}

impl AppContext {
    pub fn new(config: SiteConfig, catalog: Catalog) -> Self {
        Self {
            config: StoredValue::new(config),
            modal: ModalHandle::new(catalog),
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Modal state plus the catalog it renders from
#[derive(Clone, Copy)]
pub struct ModalHandle {
    pub state: RwSignal<ModalState>,
    pub catalog: StoredValue<Catalog>,
}

impl ModalHandle {
    fn new(catalog: Catalog) -> Self {
        Self {
            state: RwSignal::new(ModalState::default()),
            catalog: StoredValue::new(catalog),
        }
    }

    pub fn open(&self, id: u32) {
        let state = self.state;
        self.catalog.with_value(|catalog| {
            state.update(|modal| {
                modal.open(catalog, id);
            })
        });
    }

    pub fn close(&self) {
        self.state.update(|modal| {
            modal.close();
        });
    }

    /// Close on a dismissing gesture; subscribers are only notified when
    /// the overlay actually closed.
    pub fn dismiss(&self, trigger: Dismissal<'_>) {
        self.state.maybe_update(|modal| modal.dismiss(trigger));
    }
}

thread_local! {
    static GLOBAL_MODAL: Cell<Option<ModalHandle>> = const { Cell::new(None) };
}

/// Global names of the modal entry points
pub const OPEN_ENTRY_POINT: &str = "openProjectModal";
pub const CLOSE_ENTRY_POINT: &str = "closeProjectModal";

/// Make `handle` reachable from the JS entry points, and publish them as
/// `window.openProjectModal` / `window.closeProjectModal` so inline markup
/// can call them without going through the bundler's module object.
pub fn register_global_modal(handle: ModalHandle) {
    GLOBAL_MODAL.with(|slot| slot.set(Some(handle)));
    if let Err(err) = publish_entry_points() {
        log::warn!("modal entry points not published: {:?}", err);
    }
}

fn publish_entry_points() -> Result<(), JsValue> {
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    // Page-lifetime functions, never freed.
    let open = Closure::<dyn Fn(u32)>::new(open_project_modal).into_js_value();
    let close = Closure::<dyn Fn()>::new(close_project_modal).into_js_value();
    js_sys::Reflect::set(&win, &JsValue::from_str(OPEN_ENTRY_POINT), &open)?;
    js_sys::Reflect::set(&win, &JsValue::from_str(CLOSE_ENTRY_POINT), &close)?;
    Ok(())
}

/// `openProjectModal(id)` for markup-level handlers. Also exported from the
/// wasm module (`window.wasmBindings.openProjectModal` under Trunk).
#[wasm_bindgen(js_name = openProjectModal)]
pub fn open_project_modal(id: u32) {
    match GLOBAL_MODAL.with(Cell::get) {
        Some(handle) => handle.open(id),
        None => log::warn!("{} called before the page mounted", OPEN_ENTRY_POINT),
    }
}

/// `closeProjectModal()` for markup-level handlers
#[wasm_bindgen(js_name = closeProjectModal)]
pub fn close_project_modal() {
    if let Some(handle) = GLOBAL_MODAL.with(Cell::get) {
        handle.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_points_before_mount_are_noops() {
        assert!(GLOBAL_MODAL.with(Cell::get).is_none());
        open_project_modal(1);
        close_project_modal();
        assert!(GLOBAL_MODAL.with(Cell::get).is_none());
    }

    #[test]
    fn test_entry_point_names() {
        assert_eq!(OPEN_ENTRY_POINT, "openProjectModal");
        assert_eq!(CLOSE_ENTRY_POINT, "closeProjectModal");
    }
}

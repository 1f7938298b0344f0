//! WASM exports for the tool-window desktop
//!
//! This module provides wasm-bindgen exports for the DesktopEngine,
//! allowing the whiteboard page to drive windows directly. The page renders
//! from `scene_json` and calls back in for every user action.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::PointerEvent;

use crate::background::BackgroundTheme;
use crate::config::DesktopConfig;
use crate::engine::DesktopEngine;
use crate::input::{InputResult, ListenerHost, ListenerScope};
use crate::math::Vec2;
use crate::tool::{ToolKind, TOOL_CATALOG};
use crate::window::WindowId;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Date, js_name = now)]
    fn date_now() -> f64;

    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

type SharedEngine = Rc<RefCell<DesktopEngine>>;
type ChangeCallback = Rc<RefCell<Option<js_sys::Function>>>;
type ListenerSlot = Rc<RefCell<Option<ListenerScope<PagePointerListeners>>>>;

const UNHANDLED_JSON: &str = r#"{"type":"unhandled"}"#;

/// Desktop controller for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    engine: SharedEngine,
    on_change: ChangeCallback,
    /// Page-wide pointer listeners, present only while a gesture is in flight
    listeners: ListenerSlot,
}

impl Default for DesktopController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a desktop controller with the default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_engine(DesktopEngine::new())
    }

    /// Create a desktop controller from a (possibly partial) JSON configuration
    #[wasm_bindgen]
    pub fn with_config(config_json: &str) -> Result<DesktopController, JsValue> {
        let config = DesktopConfig::from_json(config_json).map_err(to_js_error)?;
        Ok(Self::from_engine(DesktopEngine::with_config(config)))
    }

    /// Register a callback invoked whenever live geometry changes outside a
    /// direct call (page-wide pointer moves and releases)
    #[wasm_bindgen]
    pub fn set_on_change(&mut self, callback: js_sys::Function) {
        *self.on_change.borrow_mut() = Some(callback);
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Open a tool window, returning its id
    #[wasm_bindgen]
    pub fn open(&mut self, tool_id: &str) -> Result<String, JsValue> {
        let kind: ToolKind = tool_id.parse().map_err(to_js_error)?;
        let mut engine = self.engine.borrow_mut();
        sync_viewport(&mut engine);
        Ok(engine.open(kind, date_now()).to_string())
    }

    /// Close a window
    #[wasm_bindgen]
    pub fn close(&mut self, id: &str) {
        self.engine.borrow_mut().close(&WindowId::from(id));
        self.release_listeners_if_idle();
    }

    /// Bring a window to the top
    #[wasm_bindgen]
    pub fn focus(&mut self, id: &str) {
        self.engine.borrow_mut().focus(&WindowId::from(id));
    }

    /// Commit a window position
    #[wasm_bindgen]
    pub fn move_window(&mut self, id: &str, x: f32, y: f32) {
        self.engine.borrow_mut().move_window(&WindowId::from(id), x, y);
    }

    /// Commit a window size
    #[wasm_bindgen]
    pub fn resize_window(&mut self, id: &str, width: f32, height: f32) {
        self.engine.borrow_mut().resize_window(&WindowId::from(id), width, height);
    }

    /// Switch a window between opaque and ghost chrome
    #[wasm_bindgen]
    pub fn set_transparent(&mut self, id: &str, transparent: bool) {
        self.engine.borrow_mut().set_transparent(&WindowId::from(id), transparent);
        self.release_listeners_if_idle();
    }

    /// Set the desktop background by id (`grid`, `dots`, `white`, `black`)
    #[wasm_bindgen]
    pub fn set_background(&mut self, background: &str) -> Result<(), JsValue> {
        let theme: BackgroundTheme = background.parse().map_err(to_js_error)?;
        self.engine.borrow_mut().set_background(theme);
        Ok(())
    }

    /// Current background id
    #[wasm_bindgen]
    pub fn background(&self) -> String {
        self.engine.borrow().windows.background().id().to_string()
    }

    /// Id of the topmost window
    #[wasm_bindgen]
    pub fn focused(&self) -> Option<String> {
        self.engine.borrow().windows.focused().map(|id| id.to_string())
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Everything the page needs to paint, as JSON
    #[wasm_bindgen]
    pub fn scene_json(&self) -> String {
        let mut engine = self.engine.borrow_mut();
        sync_viewport(&mut engine);
        serde_json::to_string(&engine.scene()).unwrap_or_else(|_| "{}".to_string())
    }

    /// CSS cursor for the window part under a surface position
    #[wasm_bindgen]
    pub fn cursor_at(&self, x: f32, y: f32) -> String {
        self.engine
            .borrow()
            .region_at(Vec2::new(x, y))
            .map(|(_, region)| region.cursor())
            .unwrap_or("default")
            .to_string()
    }

    /// Background themes as JSON
    #[wasm_bindgen]
    pub fn backgrounds_json(&self) -> String {
        let themes: Vec<serde_json::Value> = BackgroundTheme::all()
            .iter()
            .map(|theme| serde_json::json!({ "id": theme.id(), "name": theme.name() }))
            .collect();
        serde_json::to_string(&themes).unwrap_or_else(|_| "[]".to_string())
    }

    /// Tool catalog as JSON
    #[wasm_bindgen]
    pub fn catalog_json(&self) -> String {
        let tools: Vec<serde_json::Value> = TOOL_CATALOG
            .iter()
            .map(|spec| {
                serde_json::json!({
                    "id": spec.id,
                    "title": spec.title,
                    "defaultSize": { "width": spec.default_size.width, "height": spec.default_size.height },
                    "transparentByDefault": spec.transparent_by_default
                })
            })
            .collect();
        serde_json::to_string(&tools).unwrap_or_else(|_| "[]".to_string())
    }

    // =========================================================================
    // Input Handling
    // =========================================================================

    /// Handle pointer down on the desktop surface
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, pointer_id: i32, x: f32, y: f32) -> String {
        let result = {
            let mut engine = self.engine.borrow_mut();
            sync_viewport(&mut engine);
            engine.handle_pointer_down(pointer_id, x, y)
        };
        self.after_gesture_start();
        to_result_json(&result)
    }

    /// Start dragging a window from its grip
    #[wasm_bindgen]
    pub fn start_drag(&mut self, id: &str, pointer_id: i32, x: f32, y: f32) -> String {
        let result = self.engine.borrow_mut().start_drag(&WindowId::from(id), pointer_id, x, y);
        self.after_gesture_start();
        to_result_json(&result)
    }

    /// Start resizing a window from its corner handle
    #[wasm_bindgen]
    pub fn start_resize(&mut self, id: &str, pointer_id: i32, x: f32, y: f32) -> String {
        let result = self.engine.borrow_mut().start_resize(&WindowId::from(id), pointer_id, x, y);
        self.after_gesture_start();
        to_result_json(&result)
    }

    /// Handle pointer move (for hosts that route moves themselves)
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, pointer_id: i32, x: f32, y: f32) -> String {
        let mut engine = self.engine.borrow_mut();
        sync_viewport(&mut engine);
        to_result_json(&engine.handle_pointer_move(pointer_id, x, y))
    }

    /// Handle pointer up (for hosts that route releases themselves)
    #[wasm_bindgen]
    pub fn pointer_up(&mut self, pointer_id: i32) -> String {
        let result = self.engine.borrow_mut().handle_pointer_up(pointer_id);
        self.release_listeners_if_idle();
        to_result_json(&result)
    }

    /// Handle pointer cancel
    #[wasm_bindgen]
    pub fn pointer_cancel(&mut self, pointer_id: i32) -> String {
        let result = self.engine.borrow_mut().handle_pointer_cancel(pointer_id);
        self.release_listeners_if_idle();
        to_result_json(&result)
    }

    /// Check if any drag or resize is in flight
    #[wasm_bindgen]
    pub fn is_interacting(&self) -> bool {
        self.engine.borrow().input.is_interacting()
    }
}

impl DesktopController {
    fn from_engine(mut engine: DesktopEngine) -> Self {
        console_error_panic_hook::set_once();
        init_tracing();
        sync_viewport(&mut engine);
        tracing::info!(
            width = engine.viewport.width(),
            height = engine.viewport.height(),
            tools = TOOL_CATALOG.len(),
            "desktop ready"
        );

        Self {
            engine: Rc::new(RefCell::new(engine)),
            on_change: Rc::new(RefCell::new(None)),
            listeners: Rc::new(RefCell::new(None)),
        }
    }

    /// Attach the page-wide listeners if a gesture just started
    fn after_gesture_start(&self) {
        if !self.engine.borrow().input.is_interacting() {
            return;
        }
        let mut slot = self.listeners.borrow_mut();
        if slot.is_none() {
            let host = PagePointerListeners {
                engine: Rc::downgrade(&self.engine),
                on_change: Rc::downgrade(&self.on_change),
                slot: Rc::downgrade(&self.listeners),
            };
            *slot = Some(ListenerScope::acquire(host));
        }
    }

    fn release_listeners_if_idle(&self) {
        if self.engine.borrow().input.is_interacting() {
            return;
        }
        // Dropping the scope detaches the listeners
        let scope = self.listeners.borrow_mut().take();
        drop(scope);
    }
}

impl Drop for DesktopController {
    fn drop(&mut self) {
        self.engine.borrow_mut().input.cancel_all();
        let scope = self.listeners.borrow_mut().take();
        drop(scope);
    }
}

// =============================================================================
// Page-wide pointer listeners
// =============================================================================

/// Installs the gesture listeners on the browser window
///
/// Moves feed the live geometry. A release, a cancel, a lost pointer capture
/// or the pointer leaving the page all end the gesture and commit it.
struct PagePointerListeners {
    engine: Weak<RefCell<DesktopEngine>>,
    on_change: Weak<RefCell<Option<js_sys::Function>>>,
    slot: Weak<RefCell<Option<ListenerScope<PagePointerListeners>>>>,
}

/// Closures must be stored to prevent garbage collection
struct PointerClosures {
    target: Option<web_sys::Window>,
    on_move: Closure<dyn FnMut(PointerEvent)>,
    on_up: Closure<dyn FnMut(PointerEvent)>,
    on_leave: Closure<dyn FnMut(PointerEvent)>,
}

const END_EVENTS: [&str; 3] = ["pointerup", "pointercancel", "lostpointercapture"];

impl ListenerHost for PagePointerListeners {
    type Registration = PointerClosures;

    fn attach(&self) -> PointerClosures {
        let on_move = {
            let engine = self.engine.clone();
            let on_change = self.on_change.clone();
            Closure::wrap(Box::new(move |event: PointerEvent| {
                let Some(engine) = engine.upgrade() else { return };
                let handled = {
                    let mut engine = engine.borrow_mut();
                    sync_viewport(&mut engine);
                    engine
                        .handle_pointer_move(event.pointer_id(), event.client_x() as f32, event.client_y() as f32)
                        .is_handled()
                };
                if handled {
                    notify(&on_change);
                }
            }) as Box<dyn FnMut(PointerEvent)>)
        };

        let on_up = {
            let engine = self.engine.clone();
            let on_change = self.on_change.clone();
            let slot = self.slot.clone();
            Closure::wrap(Box::new(move |event: PointerEvent| {
                end_gesture(&engine, &on_change, &slot, event.pointer_id());
            }) as Box<dyn FnMut(PointerEvent)>)
        };

        // pointerout with no related target means the pointer left the page
        let on_leave = {
            let engine = self.engine.clone();
            let on_change = self.on_change.clone();
            let slot = self.slot.clone();
            Closure::wrap(Box::new(move |event: PointerEvent| {
                if event.related_target().is_some() {
                    return;
                }
                end_gesture(&engine, &on_change, &slot, event.pointer_id());
            }) as Box<dyn FnMut(PointerEvent)>)
        };

        let target = web_sys::window();
        if let Some(window) = &target {
            let result = window
                .add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref())
                .and_then(|_| {
                    END_EVENTS.iter().try_for_each(|name| {
                        window.add_event_listener_with_callback(name, on_up.as_ref().unchecked_ref())
                    })
                })
                .and_then(|_| window.add_event_listener_with_callback("pointerout", on_leave.as_ref().unchecked_ref()));
            if let Err(e) = result {
                tracing::warn!(error = ?e, "failed to attach pointer listeners");
            }
        }

        PointerClosures { target, on_move, on_up, on_leave }
    }

    fn detach(&self, registration: PointerClosures) {
        let Some(window) = &registration.target else { return };
        let _ = window.remove_event_listener_with_callback("pointermove", registration.on_move.as_ref().unchecked_ref());
        for name in END_EVENTS {
            let _ = window.remove_event_listener_with_callback(name, registration.on_up.as_ref().unchecked_ref());
        }
        let _ = window.remove_event_listener_with_callback("pointerout", registration.on_leave.as_ref().unchecked_ref());
    }
}

/// Commit the gesture of `pointer`, then schedule listener release if idle
fn end_gesture(
    engine: &Weak<RefCell<DesktopEngine>>,
    on_change: &Weak<RefCell<Option<js_sys::Function>>>,
    slot: &Weak<RefCell<Option<ListenerScope<PagePointerListeners>>>>,
    pointer: i32,
) {
    let Some(engine) = engine.upgrade() else { return };
    let (result, idle) = {
        let mut engine = engine.borrow_mut();
        sync_viewport(&mut engine);
        let result = engine.handle_pointer_cancel(pointer);
        (result, !engine.input.is_interacting())
    };
    if result.is_handled() {
        notify(on_change);
    }
    if idle {
        release_later(Rc::downgrade(&engine), slot.clone());
    }
}

/// Drop the listener scope once the current event has finished dispatching
///
/// The scope owns the closure that is running right now, so it cannot be
/// dropped synchronously from inside it.
fn release_later(engine: Weak<RefCell<DesktopEngine>>, slot: Weak<RefCell<Option<ListenerScope<PagePointerListeners>>>>) {
    wasm_bindgen_futures::spawn_local(async move {
        let (Some(engine), Some(slot)) = (engine.upgrade(), slot.upgrade()) else { return };
        // A new gesture may have started in between
        if engine.borrow().input.is_interacting() {
            return;
        }
        let scope = slot.borrow_mut().take();
        drop(scope);
    });
}

fn notify(on_change: &Weak<RefCell<Option<js_sys::Function>>>) {
    let Some(on_change) = on_change.upgrade() else { return };
    let callback = on_change.borrow().clone();
    if let Some(callback) = callback {
        if let Err(e) = callback.call0(&JsValue::NULL) {
            tracing::warn!(error = ?e, "change callback failed");
        }
    }
}

/// Refresh the engine viewport from the live page size
fn sync_viewport(engine: &mut DesktopEngine) {
    let Some(window) = web_sys::window() else { return };
    let width = window.inner_width().ok().and_then(|v| v.as_f64());
    let height = window.inner_height().ok().and_then(|v| v.as_f64());
    if let (Some(width), Some(height)) = (width, height) {
        engine.set_viewport(width as f32, height as f32);
    }
}

// =============================================================================
// Logging
// =============================================================================

/// Route `tracing` events to the browser console
///
/// A second controller on the same page keeps the subscriber already set.
fn init_tracing() {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::prelude::*;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_writer(ConsoleWriter::default);

    let _ = tracing_subscriber::registry()
        .with(LevelFilter::DEBUG)
        .with(fmt_layer)
        .try_init();
}

/// One formatted event, printed with `console.log` when dropped
#[derive(Default)]
struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl std::io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if !line.is_empty() {
            log(line);
        }
    }
}

fn to_result_json(result: &InputResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|_| UNHANDLED_JSON.to_string())
}

fn to_js_error(e: crate::error::DesktopError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

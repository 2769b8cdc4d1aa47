//! The DOM-attached dial widget
//!
//! [`AngleDial::attach`] creates the canvas, inserts it into the document,
//! wires the mouse and touch listeners, and performs the initial render.
//! All shared state lives in one `Rc<RefCell<DialCore>>` per instance; the
//! event closures each hold a clone. Dropping the widget (or calling
//! [`AngleDial::dispose`]) detaches every listener and removes the canvas;
//! [`AngleDial::forget`] leaks it for page-lifetime widgets.

use std::cell::RefCell;
use std::rc::Rc;

use glam::DVec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Event, EventInit, HtmlCanvasElement, HtmlInputElement, MouseEvent,
    TouchEvent,
};

use crate::config::{DialConfig, DialOptions};
use crate::render;
use crate::state::{self, DialState};

struct DialCore {
    config: DialConfig,
    state: DialState,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    field: Option<HtmlInputElement>,
}

impl DialCore {
    fn repaint(&self) {
        let style = self.config.style_for(self.state.interaction());
        if let Err(e) = render::paint(&self.ctx, &self.config, &style, self.state.angle()) {
            log::warn!("dial paint failed: {e:?}");
        }
    }

    fn write_field(&self) {
        if let Some(field) = &self.field {
            let value = state::display_value(&self.config, self.state.angle());
            field.set_value(&value.to_string());
        }
    }

    fn offset_from_mouse(&self, event: &MouseEvent) -> DVec2 {
        DVec2::new(f64::from(event.offset_x()), f64::from(event.offset_y())) - self.config.center
    }

    fn offset_from_touch(&self, event: &TouchEvent) -> Option<DVec2> {
        let touch = event.touches().get(0)?;
        let rect = self.canvas.get_bounding_client_rect();
        let x = f64::from(touch.client_x()) - rect.left();
        let y = f64::from(touch.client_y()) - rect.top();
        Some(DVec2::new(x, y) - self.config.center)
    }
}

/// Normalize and store `angle`, mirror it into the bound field, repaint,
/// then notify field listeners. The change event is dispatched outside the
/// borrow so a listener may call back into the dial.
fn apply_value(core: &Rc<RefCell<DialCore>>, angle: f64) {
    let field = {
        let mut core = core.borrow_mut();
        core.state.set_angle(angle);
        core.write_field();
        core.repaint();
        core.field.clone()
    };
    if let Some(field) = field {
        fire_change(&field);
    }
}

/// Dispatch a non-bubbling, cancelable `change` event on the bound field.
fn fire_change(field: &HtmlInputElement) {
    let init = EventInit::new();
    init.set_bubbles(false);
    init.set_cancelable(true);
    if let Ok(event) = Event::new_with_event_init_dict("change", &init) {
        let _ = field.dispatch_event(&event);
    }
}

/// The attached event closures, kept so they can be detached again
struct Listeners {
    mouse_down: Closure<dyn FnMut(MouseEvent)>,
    mouse_move: Closure<dyn FnMut(MouseEvent)>,
    mouse_up: Closure<dyn FnMut(MouseEvent)>,
    mouse_over: Closure<dyn FnMut(MouseEvent)>,
    mouse_out: Closure<dyn FnMut(MouseEvent)>,
    touch_start: Closure<dyn FnMut(TouchEvent)>,
    touch_move: Closure<dyn FnMut(TouchEvent)>,
    touch_end: Closure<dyn FnMut(TouchEvent)>,
}

impl Listeners {
    fn attach(canvas: &HtmlCanvasElement, core: &Rc<RefCell<DialCore>>) -> Listeners {
        let mouse_down = {
            let core = core.clone();
            Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let angle = {
                    let mut c = core.borrow_mut();
                    c.state.begin_drag();
                    state::angle_from_offset(&c.config, c.offset_from_mouse(&event))
                };
                apply_value(&core, angle);
            })
        };

        let mouse_move = {
            let core = core.clone();
            Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let angle = {
                    let c = core.borrow();
                    if !c.state.dragging() {
                        return;
                    }
                    state::angle_from_offset(&c.config, c.offset_from_mouse(&event))
                };
                apply_value(&core, angle);
            })
        };

        let mouse_up = {
            let core = core.clone();
            Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut c = core.borrow_mut();
                c.state.end_drag();
                c.repaint();
            })
        };

        let mouse_over = {
            let core = core.clone();
            Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut c = core.borrow_mut();
                c.state.enter();
                c.repaint();
            })
        };

        let mouse_out = {
            let core = core.clone();
            Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut c = core.borrow_mut();
                c.state.leave();
                c.repaint();
            })
        };

        let touch_start = {
            let core = core.clone();
            Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let angle = {
                    let mut c = core.borrow_mut();
                    c.state.begin_drag();
                    c.offset_from_touch(&event)
                        .map(|offset| state::angle_from_offset(&c.config, offset))
                };
                if let Some(angle) = angle {
                    apply_value(&core, angle);
                }
            })
        };

        let touch_move = {
            let core = core.clone();
            Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                let angle = {
                    let c = core.borrow();
                    if !c.state.dragging() {
                        return;
                    }
                    c.offset_from_touch(&event)
                        .map(|offset| state::angle_from_offset(&c.config, offset))
                };
                if let Some(angle) = angle {
                    apply_value(&core, angle);
                }
            })
        };

        let touch_end = {
            let core = core.clone();
            Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let mut c = core.borrow_mut();
                c.state.end_drag();
                c.repaint();
            })
        };

        let listeners = Listeners {
            mouse_down,
            mouse_move,
            mouse_up,
            mouse_over,
            mouse_out,
            touch_start,
            touch_move,
            touch_end,
        };
        for (name, callback) in listeners.callbacks() {
            let _ = canvas.add_event_listener_with_callback(name, callback.unchecked_ref());
        }
        listeners
    }

    fn detach(&self, canvas: &HtmlCanvasElement) {
        for (name, callback) in self.callbacks() {
            let _ = canvas.remove_event_listener_with_callback(name, callback.unchecked_ref());
        }
    }

    fn callbacks(&self) -> [(&'static str, &JsValue); 8] {
        [
            ("mousedown", self.mouse_down.as_ref()),
            ("mousemove", self.mouse_move.as_ref()),
            ("mouseup", self.mouse_up.as_ref()),
            ("mouseover", self.mouse_over.as_ref()),
            ("mouseout", self.mouse_out.as_ref()),
            ("touchstart", self.touch_start.as_ref()),
            ("touchmove", self.touch_move.as_ref()),
            ("touchend", self.touch_end.as_ref()),
        ]
    }
}

/// A dial widget attached to the document
pub struct AngleDial {
    core: Rc<RefCell<DialCore>>,
    listeners: Option<Listeners>,
}

impl AngleDial {
    /// Create a dial and insert its canvas into the document: immediately
    /// before `field` when one is given, appended to the body otherwise.
    ///
    /// Returns `None` when the environment cannot provide a canvas with a
    /// 2-D context - nothing is created and the document is untouched.
    pub fn attach(field: Option<HtmlInputElement>, options: DialOptions) -> Option<AngleDial> {
        let config = options.resolve();
        let document = web_sys::window()?.document()?;

        let canvas: HtmlCanvasElement = document.create_element("canvas").ok()?.dyn_into().ok()?;
        canvas.set_width(config.size);
        canvas.set_height(config.size);
        let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;

        match &field {
            Some(field) => {
                let parent = field.parent_node()?;
                let anchor: &web_sys::Node = field.as_ref();
                parent.insert_before(&canvas, Some(anchor)).ok()?;
            }
            None => {
                document.body()?.append_child(&canvas).ok()?;
            }
        }

        let initial = config.initial_value;
        let core = Rc::new(RefCell::new(DialCore {
            config,
            state: DialState::default(),
            canvas: canvas.clone(),
            ctx,
            field,
        }));
        let listeners = Listeners::attach(&canvas, &core);

        let dial = AngleDial {
            core,
            listeners: Some(listeners),
        };
        // initial normalize-and-render goes through the same path as any
        // later update, field sync included
        dial.set_value(initial);
        Some(dial)
    }

    /// Set the angle in radians. Any finite value is accepted and
    /// normalized to [0, 2π); the bound field is updated and notified.
    pub fn set_value(&self, angle: f64) {
        apply_value(&self.core, angle);
    }

    /// Current angle in radians, in [0, 2π)
    pub fn value(&self) -> f64 {
        self.core.borrow().state.angle()
    }

    /// The widget's drawing surface
    pub fn canvas(&self) -> HtmlCanvasElement {
        self.core.borrow().canvas.clone()
    }

    /// Tear the widget down: detach all listeners and remove the canvas
    /// from the document. Dropping the widget does the same.
    pub fn dispose(self) {}

    /// Keep the widget alive for the rest of the page's lifetime without
    /// holding a handle to it.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for AngleDial {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.take() {
            let core = self.core.borrow();
            listeners.detach(&core.canvas);
            if let Some(parent) = core.canvas.parent_node() {
                let _ = parent.remove_child(&core.canvas);
            }
        }
    }
}

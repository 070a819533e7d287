//! Event bridge: owns the mounted toy, turns DOM events into [`UiEvent`]s and
//! carries out the reducer's [`Effect`]s.
//!
//! One toy lives per thread in `APP`. Every mount gets a fresh epoch; timers
//! and callbacks carry the epoch they were created under and do nothing once
//! that mount is gone.

use std::cell::{Cell, RefCell};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, HtmlInputElement, KeyboardEvent, Window, window};

use crate::config::GameConfig;
use crate::dom::{self, Surface};
use crate::error::MountError;
use crate::render::render;
use crate::rng::Xorshift64;
use crate::state::{Effect, KeyOrigin, PresentationState, UiEvent, reduce};

type Callback = Closure<dyn FnMut(Event)>;

/// A DOM subscription that unsubscribes itself when dropped.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Callback,
}

impl Listener {
    pub fn attach(target: &EventTarget, kind: &'static str, callback: Callback) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {:?}", self.kind, e);
        }
    }
}

struct App {
    epoch: u64,
    state: PresentationState,
    config: GameConfig,
    rng: Xorshift64,
    surface: Surface,
    listeners: Vec<Listener>,
}

impl App {
    fn step(&mut self, event: &UiEvent) -> Vec<Effect> {
        let t = reduce(&self.state, event, &self.config, &mut self.rng);
        log::debug!("{:?} -> {} effect(s)", event, t.effects.len());
        if t.state != self.state {
            self.state = t.state;
            if let Err(e) = self.surface.apply(&render(&self.state)) {
                log::warn!("render failed: {:?}", e);
            }
        }
        t.effects
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // handlers go first so nothing fires into a half-removed tree
        self.listeners.clear();
        self.surface.unmount();
        log::info!("toddler-keys: unmounted (epoch {})", self.epoch);
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    static EPOCH: Cell<u64> = const { Cell::new(0) };
}

/// Mount the toy, replacing any instance already running on this thread.
pub fn mount(config: GameConfig) -> Result<(), MountError> {
    config.validate()?;
    unmount();

    let win = window().ok_or(MountError::NoWindow)?;
    let doc = win.document().ok_or(MountError::NoDocument)?;
    if doc.get_element_by_id(&config.root_id).is_none() && doc.body().is_none() {
        return Err(MountError::NoBody);
    }

    let epoch = EPOCH.with(|e| {
        e.set(e.get() + 1);
        e.get()
    });
    let surface = Surface::mount(&doc, &config.root_id)?;
    let listeners = match install_listeners(&win, &surface, epoch) {
        Ok(l) => l,
        Err(e) => {
            surface.unmount();
            return Err(e.into());
        }
    };

    let state = PresentationState::initial(viewport_width(&win), &config);
    if let Err(e) = surface.apply(&render(&state)) {
        log::warn!("initial render failed: {:?}", e);
    }
    log::info!(
        "toddler-keys: mounted into #{} (epoch {}, width {}px, mobile {})",
        config.root_id,
        epoch,
        state.viewport_width,
        state.is_mobile_layout
    );

    let app = App {
        epoch,
        state,
        config,
        rng: Xorshift64::from_entropy(),
        surface,
        listeners,
    };
    APP.with(|cell| *cell.borrow_mut() = Some(app));
    Ok(())
}

/// Tear down the running toy, if any.
pub fn unmount() {
    // Take first, drop outside the borrow: removing nodes can fire blur.
    let app = APP.with(|cell| cell.borrow_mut().take());
    drop(app);
}

pub fn is_mounted() -> bool {
    APP.with(|cell| cell.borrow().is_some())
}

/// Current presentation state of the mounted toy.
pub fn snapshot() -> Option<PresentationState> {
    APP.with(|cell| cell.borrow().as_ref().map(|app| app.state))
}

/// Feed an event to whichever toy is currently mounted.
pub fn dispatch(event: UiEvent) {
    let epoch = EPOCH.with(Cell::get);
    dispatch_to(epoch, event);
}

fn dispatch_to(epoch: u64, event: UiEvent) {
    let effects = APP.with(|cell| {
        let mut slot = cell.borrow_mut();
        match slot.as_mut() {
            Some(app) if app.epoch == epoch => app.step(&event),
            _ => Vec::new(),
        }
    });
    // Effects run with APP released: focus and blur re-enter through their listeners.
    for effect in effects {
        perform(epoch, effect);
    }
}

fn perform(epoch: u64, effect: Effect) {
    match effect {
        Effect::ResetAnimation {
            generation,
            after_ms,
        } => schedule(after_ms, move || {
            dispatch_to(epoch, UiEvent::AnimationElapsed { generation })
        }),
        Effect::ClearMobileInput { after_ms } => schedule(after_ms, move || {
            if let Some(input) = mobile_input(epoch) {
                dom::clear_input(&input);
            }
        }),
        Effect::FocusMobileInput => {
            if let Some(input) = mobile_input(epoch) {
                dom::focus_input(&input);
            }
        }
        Effect::BlurMobileInput => {
            if let Some(input) = mobile_input(epoch) {
                dom::blur_input(&input);
            }
        }
    }
}

fn mobile_input(epoch: u64) -> Option<HtmlInputElement> {
    APP.with(|cell| {
        cell.borrow()
            .as_ref()
            .filter(|app| app.epoch == epoch)
            .map(|app| app.surface.input().clone())
    })
}

/// Fire-and-forget `setTimeout`.
fn schedule(after_ms: u32, f: impl FnOnce() + 'static) {
    let Some(win) = window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    let delay = i32::try_from(after_ms).unwrap_or(i32::MAX);
    if let Err(e) =
        win.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
    {
        log::warn!("setTimeout failed: {:?}", e);
    }
}

fn viewport_width(win: &Window) -> u32 {
    win.inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map(|w| w.max(0.0) as u32)
        .unwrap_or(0)
}

fn install_listeners(win: &Window, surface: &Surface, epoch: u64) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = Vec::with_capacity(8);

    // Keyboard: anything aimed at the hidden input is tagged so the reducer can
    // leave characters to the input event.
    {
        let input = surface.input().clone();
        let closure = Closure::wrap(Box::new(move |evt: Event| {
            let Some(kev) = evt.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let origin = match evt.target() {
                Some(t) if dom::is_target(&t, &input) => KeyOrigin::MobileInput,
                _ => KeyOrigin::Physical,
            };
            dispatch_to(epoch, UiEvent::KeyDown { key: kev.key(), origin });
        }) as Box<dyn FnMut(_)>);
        listeners.push(Listener::attach(win, "keydown", closure)?);
    }

    {
        let win_resize = win.clone();
        let closure = Closure::wrap(Box::new(move |_evt: Event| {
            let width = viewport_width(&win_resize);
            dispatch_to(epoch, UiEvent::Resize { width });
        }) as Box<dyn FnMut(_)>);
        listeners.push(Listener::attach(win, "resize", closure)?);
    }

    {
        let input = surface.input().clone();
        let closure = Closure::wrap(Box::new(move |_evt: Event| {
            dispatch_to(epoch, UiEvent::MobileInput { value: input.value() });
        }) as Box<dyn FnMut(_)>);
        listeners.push(Listener::attach(surface.input(), "input", closure)?);
    }

    {
        let closure = Closure::wrap(Box::new(move |_evt: Event| {
            dispatch_to(epoch, UiEvent::MobileFocus);
        }) as Box<dyn FnMut(_)>);
        listeners.push(Listener::attach(surface.input(), "focus", closure)?);
    }

    {
        let closure = Closure::wrap(Box::new(move |_evt: Event| {
            dispatch_to(epoch, UiEvent::MobileBlur);
        }) as Box<dyn FnMut(_)>);
        listeners.push(Listener::attach(surface.input(), "blur", closure)?);
    }

    // Touch suppresses the synthetic click that would follow, so a tap counts once.
    {
        let closure = Closure::wrap(Box::new(move |evt: Event| {
            evt.prevent_default();
            dispatch_to(epoch, UiEvent::SurfaceTap);
        }) as Box<dyn FnMut(_)>);
        listeners.push(Listener::attach(surface.game_area(), "touchstart", closure)?);
    }

    for target in [surface.game_area(), surface.mobile_button()] {
        let closure = Closure::wrap(Box::new(move |_evt: Event| {
            dispatch_to(epoch, UiEvent::SurfaceTap);
        }) as Box<dyn FnMut(_)>);
        listeners.push(Listener::attach(target, "click", closure)?);
    }

    Ok(listeners)
}

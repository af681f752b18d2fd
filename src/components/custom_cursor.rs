use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::models::cursor::{
    is_interactive_tag, CursorModel, Point, INTERACTIVE_SELECTOR, SCROLL_SETTLE_MS,
};

const CURSOR_IMAGE: &str = "/assets/perfume.png";
const HOVER_IMAGE: &str = "/assets/spray.png";

/// Frame loop and scroll-settle timer owned by one mounted cursor
#[derive(Default)]
struct CursorTimers {
    frame: Cell<Option<AnimationFrameRequestHandle>>,
    scroll_settle: Cell<Option<TimeoutHandle>>,
    stopped: Cell<bool>,
}

impl CursorTimers {
    fn stop(&self) {
        self.stopped.set(true);
        if let Some(frame) = self.frame.take() {
            frame.cancel();
        }
        if let Some(timeout) = self.scroll_settle.take() {
            timeout.clear();
        }
    }
}

fn schedule_frame(cursor: RwSignal<CursorModel>, timers: Rc<CursorTimers>) {
    if timers.stopped.get() {
        return;
    }
    let next = Rc::clone(&timers);
    let requested = request_animation_frame_with_handle(move || {
        if next.stopped.get() {
            return;
        }
        cursor.update(CursorModel::step);
        schedule_frame(cursor, next);
    });
    match requested {
        Ok(handle) => timers.frame.set(Some(handle)),
        Err(e) => tracing::warn!("cursor animation stopped: {e:?}"),
    }
}

fn is_over_interactive(event: &MouseEvent) -> bool {
    let Some(element) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        return false;
    };

    is_interactive_tag(&element.tag_name())
        || matches!(element.closest(INTERACTIVE_SELECTOR), Ok(Some(_)))
}

/// Decorative image that trails the pointer.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let cursor = RwSignal::new(CursorModel::default());
    let timers = Rc::new(CursorTimers::default());

    let mouse_move = window_event_listener(leptos::ev::mousemove, move |ev| {
        let hovering = is_over_interactive(&ev);
        cursor.update(|model| {
            model.target = Point {
                x: f64::from(ev.client_x()),
                y: f64::from(ev.client_y()),
            };
            model.hovering = hovering;
        });
    });
    let mouse_down = window_event_listener(leptos::ev::mousedown, move |_| {
        cursor.update(|model| model.clicking = true);
    });
    let mouse_up = window_event_listener(leptos::ev::mouseup, move |_| {
        cursor.update(|model| model.clicking = false);
    });

    let scroll_timers = SendWrapper::new(Rc::clone(&timers));
    let scroll = window_event_listener(leptos::ev::scroll, move |_| {
        cursor.update(|model| model.scrolling = true);
        if let Some(previous) = scroll_timers.scroll_settle.take() {
            previous.clear();
        }
        let settled = set_timeout_with_handle(
            move || cursor.update(|model| model.scrolling = false),
            Duration::from_millis(SCROLL_SETTLE_MS),
        );
        match settled {
            Ok(handle) => scroll_timers.scroll_settle.set(Some(handle)),
            Err(e) => tracing::warn!("failed to schedule scroll settle: {e:?}"),
        }
    });

    schedule_frame(cursor, Rc::clone(&timers));

    let teardown = SendWrapper::new((timers, [mouse_move, mouse_down, mouse_up, scroll]));
    on_cleanup(move || {
        let (timers, listeners) = teardown.take();
        timers.stop();
        for listener in listeners {
            listener.remove();
        }
    });

    let style = move || {
        cursor.with(|model| {
            let size = model.size_px();
            format!(
                "position: fixed; left: {x}px; top: {y}px; width: {size}px; height: {size}px; \
                 pointer-events: none; transform: translate(-50%, -50%); z-index: 9999;",
                x = model.position.x,
                y = model.position.y,
            )
        })
    };

    view! {
        <img
            src=move || if cursor.with(|model| model.hovering) { HOVER_IMAGE } else { CURSOR_IMAGE }
            alt="Custom Cursor"
            class=move || cursor.with(CursorModel::css_class)
            style=style
        />
    }
}

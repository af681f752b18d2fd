use web_sys::MouseEvent;

/// Whether a click landed on the listening element itself rather than a child
pub fn is_backdrop_event(ev: &MouseEvent) -> bool {
    match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => js_sys::Object::is(target.as_ref(), current.as_ref()),
        _ => false,
    }
}

/// Toggle page scrolling while a modal covers the page
pub fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };

    let value = if locked { "hidden" } else { "" };
    if let Err(e) = body.style().set_property("overflow", value) {
        tracing::warn!("failed to set body overflow: {e:?}");
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

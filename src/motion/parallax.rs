//! Parallax on the hero's floating decorations: elements drift with the mouse
//! offset from viewport center and with the scroll offset. Both channels feed
//! one shared state and every update writes a single composed transform per
//! element, so the two effects stay additive without fighting over
//! `style.transform`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement, MouseEvent};

use super::tween;

/// Horizontal/vertical shift for a mouse position normalized to [0, 1].
pub fn mouse_offset(normalized: f64, speed: f64) -> f64 {
    (normalized - 0.5) * 50.0 * speed
}

/// Vertical shift for the current scroll offset.
pub fn scroll_offset(scroll_y: f64, speed: f64) -> f64 {
    -(scroll_y * speed * 0.1)
}

#[derive(Clone, Copy, Default)]
struct Input {
    mouse_x: f64,
    mouse_y: f64,
    scroll_y: f64,
}

fn element_speed(element: &HtmlElement) -> f64 {
    element
        .get_attribute("data-speed")
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(1.0)
}

fn collect(document: &Document) -> Vec<(HtmlElement, f64)> {
    let mut elements = Vec::new();
    if let Ok(nodes) = document.query_selector_all(".floating-element") {
        for index in 0..nodes.length() {
            if let Some(element) = nodes
                .get(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            {
                let speed = element_speed(&element);
                elements.push((element, speed));
            }
        }
    }
    elements
}

fn apply(elements: &[(HtmlElement, f64)], input: Input) {
    for (element, speed) in elements {
        let x = mouse_offset(input.mouse_x, *speed);
        let y = mouse_offset(input.mouse_y, *speed) + scroll_offset(input.scroll_y, *speed);
        let _ = element
            .style()
            .set_property("transform", &format!("translate3d({x:.2}px, {y:.2}px, 0)"));
    }
}

pub fn init() {
    let Some(window) = window() else { return };
    let Some(document) = window.document() else {
        return;
    };
    let elements = Rc::new(collect(&document));
    if elements.is_empty() {
        return;
    }
    let input = Rc::new(RefCell::new(Input::default()));

    {
        let elements = elements.clone();
        let input = input.clone();
        let win = window.clone();
        let on_mouse = Closure::wrap(Box::new(move |event: MouseEvent| {
            if tween::is_frozen() {
                return;
            }
            let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            let mut input = input.borrow_mut();
            input.mouse_x = f64::from(event.client_x()) / width.max(1.0);
            input.mouse_y = f64::from(event.client_y()) / height.max(1.0);
            apply(&elements, *input);
        }) as Box<dyn FnMut(MouseEvent)>);
        let _ = window
            .add_event_listener_with_callback("mousemove", on_mouse.as_ref().unchecked_ref());
        on_mouse.forget();
    }

    {
        let win = window.clone();
        let on_scroll = Closure::wrap(Box::new(move || {
            if tween::is_frozen() {
                return;
            }
            let mut input = input.borrow_mut();
            input.scroll_y = win.scroll_y().unwrap_or(0.0);
            apply(&elements, *input);
        }) as Box<dyn FnMut()>);
        let _ = window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        on_scroll.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_mouse_means_no_shift() {
        assert_eq!(mouse_offset(0.5, 1.0), 0.0);
        assert_eq!(mouse_offset(0.5, 3.0), 0.0);
    }

    #[test]
    fn mouse_shift_scales_with_distance_and_speed() {
        assert_eq!(mouse_offset(1.0, 1.0), 25.0);
        assert_eq!(mouse_offset(0.0, 1.0), -25.0);
        assert_eq!(mouse_offset(1.0, 2.0), 50.0);
    }

    #[test]
    fn scroll_shift_moves_against_the_scroll() {
        assert_eq!(scroll_offset(0.0, 1.0), 0.0);
        assert_eq!(scroll_offset(100.0, 1.0), -10.0);
        assert_eq!(scroll_offset(100.0, 0.5), -5.0);
    }

    #[test]
    fn channels_compose_additively() {
        let y = mouse_offset(1.0, 2.0) + scroll_offset(200.0, 2.0);
        assert_eq!(y, 50.0 - 40.0);
    }
}

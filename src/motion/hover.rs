//! Pointer feedback: program cards scale up under the cursor, glass cards get
//! a radial highlight that follows it.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement, MouseEvent};

use super::tween::{self, Ease, Props, TweenSpec};

/// Cursor position within an element as a 0-100 percentage, clamped.
pub fn pointer_percent(client: f64, rect_start: f64, rect_size: f64) -> f64 {
    if rect_size <= 0.0 {
        return 50.0;
    }
    ((client - rect_start) / rect_size * 100.0).clamp(0.0, 100.0)
}

fn each(document: &Document, selector: &str, mut f: impl FnMut(HtmlElement)) {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    for index in 0..nodes.length() {
        if let Some(element) = nodes
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        {
            f(element);
        }
    }
}

fn on_mouse(element: &HtmlElement, event: &str, callback: impl FnMut(MouseEvent) + 'static) {
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(MouseEvent)>);
    let _ = element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn init() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    // With timelines frozen a hover tween would register but never finish,
    // piling up in the engine on every pass of the cursor.
    if !tween::is_frozen() {
        each(&document, ".program-card", |card| {
            let enter_target = card.clone();
            on_mouse(&card, "mouseenter", move |_| {
                tween::animate(
                    &enter_target,
                    TweenSpec::new(Props::default().scale(1.0, 1.05), 300.0).ease(Ease::Power2Out),
                );
            });
            let leave_target = card.clone();
            on_mouse(&card, "mouseleave", move |_| {
                tween::animate(
                    &leave_target,
                    TweenSpec::new(Props::default().scale(1.05, 1.0), 300.0).ease(Ease::Power2Out),
                );
            });
        });
    }

    each(&document, ".glass-card", |card| {
        let move_target = card.clone();
        on_mouse(&card, "mousemove", move |event: MouseEvent| {
            let rect = move_target.get_bounding_client_rect();
            let x = pointer_percent(f64::from(event.client_x()), rect.left(), rect.width());
            let y = pointer_percent(f64::from(event.client_y()), rect.top(), rect.height());
            let _ = move_target.style().set_property(
                "background",
                &format!(
                    "radial-gradient(circle at {x:.1}% {y:.1}%, rgba(0, 255, 136, 0.1) 0%, transparent 50%), rgba(255, 255, 255, 0.05)"
                ),
            );
        });
        let leave_target = card.clone();
        on_mouse(&card, "mouseleave", move |_| {
            let _ = leave_target.style().remove_property("background");
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_percent_spans_the_element() {
        assert_eq!(pointer_percent(100.0, 100.0, 200.0), 0.0);
        assert_eq!(pointer_percent(200.0, 100.0, 200.0), 50.0);
        assert_eq!(pointer_percent(300.0, 100.0, 200.0), 100.0);
    }

    #[test]
    fn pointer_percent_clamps_outside_the_rect() {
        assert_eq!(pointer_percent(50.0, 100.0, 200.0), 0.0);
        assert_eq!(pointer_percent(400.0, 100.0, 200.0), 100.0);
        assert_eq!(pointer_percent(10.0, 0.0, 0.0), 50.0);
    }
}

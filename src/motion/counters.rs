//! Stat counters: a `.stat-number[data-target]` element counts from 0 to its
//! target over two seconds in 100 interval ticks, the first time it scrolls
//! into view. Elements without a parseable target are skipped.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};

use super::scroll::entered;
use crate::config::{COUNTER_DURATION_MS, COUNTER_STEPS, COUNTER_TRIGGER_FRACTION};

/// Displayed value at tick `step`: floored linear interpolation, with the
/// final tick landing exactly on the target.
pub fn value_at_step(target: i64, step: u32) -> i64 {
    if step >= COUNTER_STEPS {
        target
    } else {
        target * i64::from(step) / i64::from(COUNTER_STEPS)
    }
}

fn animate(element: HtmlElement, target: i64) {
    let step = Rc::new(RefCell::new(0u32));
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

    let interval = {
        let handle = handle.clone();
        Interval::new(COUNTER_DURATION_MS / COUNTER_STEPS, move || {
            let mut step = step.borrow_mut();
            *step += 1;
            element.set_text_content(Some(&value_at_step(target, *step).to_string()));
            if *step >= COUNTER_STEPS {
                // Self-cancel on reaching the target.
                handle.borrow_mut().take();
            }
        })
    };
    *handle.borrow_mut() = Some(interval);
}

/// Watch every counter; each fires at most once, marked with `data-counted`.
pub fn init() {
    let Some(window) = window() else { return };
    let Some(document) = window.document() else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(".stat-number[data-target]") else {
        return;
    };

    let mut counters = Vec::new();
    for index in 0..nodes.length() {
        let Some(element) = nodes
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let Some(target) = element
            .get_attribute("data-target")
            .and_then(|t| t.parse::<i64>().ok())
        else {
            continue;
        };
        counters.push((element, target));
    }

    let win = window.clone();
    let check = move || {
        let viewport_height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        for (element, target) in &counters {
            if element.has_attribute("data-counted") {
                continue;
            }
            let top = element.get_bounding_client_rect().top();
            if entered(top, viewport_height, COUNTER_TRIGGER_FRACTION) {
                let _ = element.set_attribute("data-counted", "true");
                animate(element.clone(), *target);
            }
        }
    };
    check();

    let callback = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
    callback.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_lands_exactly_on_its_target() {
        assert_eq!(value_at_step(250, COUNTER_STEPS), 250);
        assert_eq!(value_at_step(250, COUNTER_STEPS + 7), 250);
        assert_eq!(value_at_step(0, COUNTER_STEPS), 0);
    }

    #[test]
    fn intermediate_values_are_non_decreasing_integers() {
        let target = 250;
        let mut last = 0;
        for step in 0..=COUNTER_STEPS {
            let value = value_at_step(target, step);
            assert!(value >= last);
            assert!(value <= target);
            last = value;
        }
    }

    #[test]
    fn small_targets_floor_rather_than_round() {
        // 7 * 50 / 100 = 3.5, floored
        assert_eq!(value_at_step(7, 50), 3);
        assert_eq!(value_at_step(1, 99), 0);
        assert_eq!(value_at_step(1, 100), 1);
    }
}

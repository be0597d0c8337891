//! Indefinite decorative loops: CTA buttons and social icons bob, step icons
//! rotate. These never stop; the global time scale is the only thing that
//! freezes them.

use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement};

use super::tween::{self, Ease, Mode, Props, TweenSpec};

fn each(document: &Document, selector: &str, mut f: impl FnMut(usize, HtmlElement)) {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    for index in 0..nodes.length() {
        if let Some(element) = nodes
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        {
            f(index as usize, element);
        }
    }
}

pub fn init() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    each(&document, ".btn-hero", |index, button| {
        tween::animate(
            &button,
            TweenSpec::new(Props::default().y(0.0, -10.0), 2000.0)
                .ease(Ease::Power1InOut)
                .delay(index as f64 * 200.0)
                .mode(Mode::Loop { yoyo: true }),
        );
    });

    each(&document, ".step-icon", |_, icon| {
        tween::animate(
            &icon,
            TweenSpec::new(Props::default().rotation(0.0, 360.0), 20_000.0)
                .mode(Mode::Loop { yoyo: false }),
        );
    });

    each(&document, ".social-icon, .social-fixed-icon", |index, icon| {
        tween::animate(
            &icon,
            TweenSpec::new(Props::default().y(0.0, -5.0), 1500.0)
                .ease(Ease::Power1InOut)
                .delay(index as f64 * 100.0)
                .mode(Mode::Loop { yoyo: true }),
        );
    });
}

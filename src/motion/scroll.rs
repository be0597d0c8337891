//! Scroll-triggered entrance animations, driven by a declarative rule table.
//! Each matched element gets a persistent reversible tween: it plays forward
//! when the element's top crosses the trigger fraction of the viewport and
//! reverses when scrolled back above it.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement};

use super::tween::{self, Ease, Mode, Props, TweenHandle, TweenSpec};

pub struct EntranceRule {
    pub selector: &'static str,
    pub trigger_fraction: f64,
    pub from_y: f64,
    pub from_scale: Option<f64>,
    pub from_rotation: Option<f64>,
    pub duration_ms: f64,
    pub stagger_ms: f64,
    pub ease: Ease,
}

pub const ENTRANCE_RULES: &[EntranceRule] = &[
    EntranceRule {
        selector: ".glass-card, .stat-item, .section-title, .section-subtitle",
        trigger_fraction: 0.85,
        from_y: 50.0,
        from_scale: None,
        from_rotation: None,
        duration_ms: 800.0,
        stagger_ms: 100.0,
        ease: Ease::Power3Out,
    },
    EntranceRule {
        selector: ".step-card",
        trigger_fraction: 0.80,
        from_y: 60.0,
        from_scale: None,
        from_rotation: Some(5.0),
        duration_ms: 800.0,
        stagger_ms: 200.0,
        ease: Ease::BackOut(1.7),
    },
    EntranceRule {
        selector: ".program-card",
        trigger_fraction: 0.80,
        from_y: 40.0,
        from_scale: Some(0.9),
        from_rotation: None,
        duration_ms: 800.0,
        stagger_ms: 150.0,
        ease: Ease::Power3Out,
    },
];

impl EntranceRule {
    fn props(&self) -> Props {
        let mut props = Props::default().opacity(0.0, 1.0).y(self.from_y, 0.0);
        if let Some(scale) = self.from_scale {
            props = props.scale(scale, 1.0);
        }
        if let Some(rotation) = self.from_rotation {
            props = props.rotation(rotation, 0.0);
        }
        props
    }
}

/// An element has "entered" once its top is above the trigger line.
pub fn entered(top: f64, viewport_height: f64, fraction: f64) -> bool {
    top <= viewport_height * fraction
}

/// Scroll-indicator fade: 0 at the top of the hero, 1 once the hero has
/// scrolled past.
pub fn scrub_progress(scroll_y: f64, hero_height: f64) -> f64 {
    if hero_height <= 0.0 {
        return 1.0;
    }
    (scroll_y / hero_height).clamp(0.0, 1.0)
}

struct Watched {
    element: HtmlElement,
    handle: TweenHandle,
    trigger_fraction: f64,
}

fn collect(document: &Document) -> Vec<Watched> {
    let mut watched = Vec::new();
    for rule in ENTRANCE_RULES {
        let Ok(nodes) = document.query_selector_all(rule.selector) else {
            continue;
        };
        for index in 0..nodes.length() {
            let Some(element) = nodes
                .get(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            let spec = TweenSpec::new(rule.props(), rule.duration_ms)
                .ease(rule.ease)
                .delay(index as f64 * rule.stagger_ms)
                .mode(Mode::Toggle);
            let handle = tween::animate(&element, spec);
            watched.push(Watched {
                element,
                handle,
                trigger_fraction: rule.trigger_fraction,
            });
        }
    }
    watched
}

/// Wire up every entrance rule plus the hero pieces, and evaluate once so
/// elements already in view animate in immediately.
pub fn init() {
    let Some(window) = window() else { return };
    let Some(document) = window.document() else {
        return;
    };

    // With timelines frozen a `from`-style tween would pin its element at the
    // hidden start state, so entrances are skipped entirely and the content
    // simply appears in place.
    if !tween::is_frozen() {
        // Hero headline rises in on load, no scroll trigger.
        if let Some(hero) = document
            .query_selector(".hero-content")
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        {
            tween::animate(
                &hero,
                TweenSpec::new(Props::default().opacity(0.0, 1.0).y(50.0, 0.0), 1000.0)
                    .ease(Ease::Power3Out),
            );
        }
    }

    let watched = if tween::is_frozen() {
        Vec::new()
    } else {
        collect(&document)
    };
    let indicator = document
        .query_selector(".scroll-indicator")
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());
    let hero_section = document
        .query_selector(".hero")
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok());

    let win = window.clone();
    let check = move || {
        let viewport_height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        for w in &watched {
            let top = w.element.get_bounding_client_rect().top();
            tween::set_direction(w.handle, entered(top, viewport_height, w.trigger_fraction));
        }
        if let Some(indicator) = &indicator {
            let scroll_y = win.scroll_y().unwrap_or(0.0);
            // The fade spans the hero section itself, which can run taller
            // than the viewport.
            let hero_height = hero_section
                .as_ref()
                .map(|h| f64::from(h.offset_height()))
                .filter(|h| *h > 0.0)
                .unwrap_or(viewport_height);
            let progress = scrub_progress(scroll_y, hero_height);
            let style = indicator.style();
            let _ = style.set_property("opacity", &format!("{:.4}", 1.0 - progress));
            let _ = style.set_property("transform", &format!("translateY({:.2}px)", -50.0 * progress));
        }
    };
    check();

    let callback = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
    let _ = window
        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
    // Page-lifetime listener.
    callback.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entered_matches_the_trigger_line() {
        // viewport 1000px, 85% trigger
        assert!(entered(850.0, 1000.0, 0.85));
        assert!(entered(0.0, 1000.0, 0.85));
        assert!(entered(-200.0, 1000.0, 0.85)); // scrolled past: stays played
        assert!(!entered(851.0, 1000.0, 0.85));
    }

    #[test]
    fn rules_cover_the_expected_sections() {
        assert_eq!(ENTRANCE_RULES.len(), 3);
        for rule in ENTRANCE_RULES {
            assert!((0.0..=1.0).contains(&rule.trigger_fraction));
            assert!(rule.duration_ms > 0.0);
            let props = rule.props();
            assert!(props.opacity.is_some() && props.y.is_some());
        }
    }

    #[test]
    fn scrub_progress_clamps_to_unit_range() {
        assert_eq!(scrub_progress(0.0, 900.0), 0.0);
        assert_eq!(scrub_progress(450.0, 900.0), 0.5);
        assert_eq!(scrub_progress(5000.0, 900.0), 1.0);
        assert_eq!(scrub_progress(-10.0, 900.0), 0.0);
        assert_eq!(scrub_progress(100.0, 0.0), 1.0);
    }

    #[test]
    fn scrub_tracks_a_hero_taller_than_the_viewport() {
        // 1400px hero in a 900px viewport: halfway through the hero, not
        // fully faded at one viewport of scroll.
        assert_eq!(scrub_progress(700.0, 1400.0), 0.5);
        assert!(scrub_progress(900.0, 1400.0) < 1.0);
        assert_eq!(scrub_progress(1400.0, 1400.0), 1.0);
    }
}

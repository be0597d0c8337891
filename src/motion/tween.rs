//! A small tween engine: eased property animation over inline styles, driven
//! by one shared `requestAnimationFrame` loop. Covers what the page needs
//! from a timeline library: one-shot tweens, reversible scroll-entrance
//! tweens, infinite decorative loops, and a global time scale (zero under
//! `prefers-reduced-motion`).
//!
//! The playhead math is plain `f64` arithmetic, kept free of `web-sys` so the
//! curves and stepping rules test natively.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Ease {
    Linear,
    Power1InOut,
    Power2Out,
    Power3Out,
    /// Overshooting ease-out; the parameter controls the overshoot amount.
    BackOut(f64),
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::BackOut(s) => {
                let u = t - 1.0;
                1.0 + u * u * ((s + 1.0) * u + s)
            }
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Segment {
    pub from: f64,
    pub to: f64,
}

impl Segment {
    pub fn sample(self, eased: f64) -> f64 {
        self.from + (self.to - self.from) * eased
    }
}

/// The animatable properties. `x`/`y` are translate offsets in px, `scale` is
/// unitless, `rotation` is degrees.
#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub struct Props {
    pub opacity: Option<Segment>,
    pub x: Option<Segment>,
    pub y: Option<Segment>,
    pub scale: Option<Segment>,
    pub rotation: Option<Segment>,
}

impl Props {
    pub fn opacity(mut self, from: f64, to: f64) -> Self {
        self.opacity = Some(Segment { from, to });
        self
    }

    pub fn x(mut self, from: f64, to: f64) -> Self {
        self.x = Some(Segment { from, to });
        self
    }

    pub fn y(mut self, from: f64, to: f64) -> Self {
        self.y = Some(Segment { from, to });
        self
    }

    pub fn scale(mut self, from: f64, to: f64) -> Self {
        self.scale = Some(Segment { from, to });
        self
    }

    pub fn rotation(mut self, from: f64, to: f64) -> Self {
        self.rotation = Some(Segment { from, to });
        self
    }

    fn has_transform(&self) -> bool {
        self.x.is_some() || self.y.is_some() || self.scale.is_some() || self.rotation.is_some()
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Mode {
    /// Runs forward once, then is dropped (inline styles persist).
    Once,
    /// Persistent; the playhead chases a target of 0 or 1 set via
    /// `set_direction`. Used by scroll-triggered entrances.
    Toggle,
    /// Runs forever; `yoyo` bounces between the endpoints, otherwise the
    /// playhead wraps.
    Loop { yoyo: bool },
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TweenSpec {
    pub props: Props,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub ease: Ease,
    pub mode: Mode,
}

impl TweenSpec {
    pub fn new(props: Props, duration_ms: f64) -> Self {
        TweenSpec {
            props,
            duration_ms,
            delay_ms: 0.0,
            ease: Ease::Linear,
            mode: Mode::Once,
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

/// Move a playhead toward `target` by `dt/duration`, never overshooting.
pub fn step_playhead(playhead: f64, target: f64, dt_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return target;
    }
    let delta = dt_ms / duration_ms;
    if target > playhead {
        (playhead + delta).min(target)
    } else {
        (playhead - delta).max(target)
    }
}

/// Advance a looping playhead. Returns the new playhead and direction.
pub fn step_loop(playhead: f64, direction: f64, dt_ms: f64, duration_ms: f64, yoyo: bool) -> (f64, f64) {
    if duration_ms <= 0.0 {
        return (playhead, direction);
    }
    let mut p = playhead + direction * dt_ms / duration_ms;
    let mut dir = direction;
    if yoyo {
        if p > 1.0 {
            p = 2.0 - p;
            dir = -1.0;
        } else if p < 0.0 {
            p = -p;
            dir = 1.0;
        }
        p = p.clamp(0.0, 1.0);
    } else if p >= 1.0 {
        p -= p.floor();
    }
    (p, dir)
}

struct ActiveTween {
    id: usize,
    target: HtmlElement,
    spec: TweenSpec,
    playhead: f64,
    /// Toggle: the chased target state. Loop: the travel direction.
    direction: f64,
    pending_delay: f64,
    on_complete: Option<Box<dyn FnOnce()>>,
    done: bool,
}

impl ActiveTween {
    fn apply(&self) {
        let eased = self.spec.ease.apply(self.playhead);
        let style = self.target.style();
        if let Some(seg) = self.spec.props.opacity {
            let _ = style.set_property("opacity", &format!("{:.4}", seg.sample(eased)));
        }
        if self.spec.props.has_transform() {
            let x = self.spec.props.x.map_or(0.0, |s| s.sample(eased));
            let y = self.spec.props.y.map_or(0.0, |s| s.sample(eased));
            let scale = self.spec.props.scale.map_or(1.0, |s| s.sample(eased));
            let rotation = self.spec.props.rotation.map_or(0.0, |s| s.sample(eased));
            let _ = style.set_property(
                "transform",
                &format!("translate({x:.2}px, {y:.2}px) scale({scale:.4}) rotate({rotation:.2}deg)"),
            );
        }
    }
}

struct Engine {
    tweens: Vec<ActiveTween>,
    time_scale: f64,
    last_ts: Option<f64>,
    running: bool,
    next_id: usize,
}

thread_local! {
    static ENGINE: Rc<RefCell<Engine>> = Rc::new(RefCell::new(Engine {
        tweens: Vec::new(),
        time_scale: 1.0,
        last_ts: None,
        running: false,
        next_id: 0,
    }));

    static FRAME: RefCell<Option<Closure<dyn FnMut(f64)>>> = RefCell::new(None);
}

/// Global multiplier on frame time. Zero freezes every timeline.
pub fn set_global_time_scale(scale: f64) {
    ENGINE.with(|e| e.borrow_mut().time_scale = scale);
}

pub fn global_time_scale() -> f64 {
    ENGINE.with(|e| e.borrow().time_scale)
}

pub fn is_frozen() -> bool {
    global_time_scale() == 0.0
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TweenHandle {
    id: usize,
}

pub fn animate(target: &HtmlElement, spec: TweenSpec) -> TweenHandle {
    register(target, spec, None)
}

pub fn animate_then(
    target: &HtmlElement,
    spec: TweenSpec,
    on_complete: impl FnOnce() + 'static,
) -> TweenHandle {
    register(target, spec, Some(Box::new(on_complete)))
}

fn register(
    target: &HtmlElement,
    spec: TweenSpec,
    on_complete: Option<Box<dyn FnOnce()>>,
) -> TweenHandle {
    let id = ENGINE.with(|e| {
        let mut engine = e.borrow_mut();
        let id = engine.next_id;
        engine.next_id += 1;
        let tween = ActiveTween {
            id,
            target: target.clone(),
            pending_delay: spec.delay_ms,
            spec,
            playhead: 0.0,
            direction: match spec.mode {
                Mode::Loop { .. } => 1.0,
                _ => 0.0,
            },
            on_complete,
            done: false,
        };
        // Put the element into its start state right away so `from`-style
        // entrances begin hidden rather than flashing their natural state.
        tween.apply();
        engine.tweens.push(tween);
        id
    });
    ensure_running();
    TweenHandle { id }
}

/// Point a `Toggle` tween at its forward (true) or reverse (false) endpoint.
pub fn set_direction(handle: TweenHandle, forward: bool) {
    ENGINE.with(|e| {
        let mut engine = e.borrow_mut();
        if let Some(tween) = engine.tweens.iter_mut().find(|t| t.id == handle.id) {
            tween.direction = if forward { 1.0 } else { 0.0 };
        }
    });
}

fn ensure_running() {
    let start = ENGINE.with(|e| {
        let mut engine = e.borrow_mut();
        if engine.running {
            false
        } else {
            engine.running = true;
            engine.last_ts = None;
            true
        }
    });
    if !start {
        return;
    }
    FRAME.with(|f| {
        if f.borrow().is_none() {
            *f.borrow_mut() = Some(Closure::wrap(Box::new(|ts: f64| {
                frame(ts);
                schedule();
            }) as Box<dyn FnMut(f64)>));
        }
    });
    schedule();
}

fn schedule() {
    FRAME.with(|f| {
        if let (Some(window), Some(callback)) = (web_sys::window(), f.borrow().as_ref()) {
            let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    });
}

fn frame(ts: f64) {
    let completions = ENGINE.with(|e| {
        let mut engine = e.borrow_mut();
        let dt = match engine.last_ts {
            Some(last) => (ts - last).max(0.0),
            None => 0.0,
        };
        engine.last_ts = Some(ts);
        let dt = dt * engine.time_scale;

        let mut completions: Vec<Box<dyn FnOnce()>> = Vec::new();
        for tween in &mut engine.tweens {
            let mut dt = dt;
            if tween.pending_delay > 0.0 {
                // Only an active tween burns its delay: a Toggle still aimed
                // at 0 waits for its trigger before the stagger starts.
                let waiting = matches!(tween.spec.mode, Mode::Toggle) && tween.direction == 0.0
                    && tween.playhead == 0.0;
                if waiting {
                    continue;
                }
                let consumed = tween.pending_delay.min(dt);
                tween.pending_delay -= consumed;
                dt -= consumed;
                if dt <= 0.0 {
                    continue;
                }
            }

            let before = tween.playhead;
            match tween.spec.mode {
                Mode::Once => {
                    tween.playhead =
                        step_playhead(tween.playhead, 1.0, dt, tween.spec.duration_ms);
                    if tween.playhead >= 1.0 {
                        tween.done = true;
                    }
                }
                Mode::Toggle => {
                    tween.playhead = step_playhead(
                        tween.playhead,
                        tween.direction,
                        dt,
                        tween.spec.duration_ms,
                    );
                }
                Mode::Loop { yoyo } => {
                    let (p, dir) = step_loop(
                        tween.playhead,
                        tween.direction,
                        dt,
                        tween.spec.duration_ms,
                        yoyo,
                    );
                    tween.playhead = p;
                    tween.direction = dir;
                }
            }

            // Writing styles only when the playhead moved lets a settled
            // entrance tween coexist with a hover tween on the same element.
            if tween.playhead != before || matches!(tween.spec.mode, Mode::Loop { .. }) {
                tween.apply();
            }
            if tween.done {
                if let Some(callback) = tween.on_complete.take() {
                    completions.push(callback);
                }
            }
        }
        engine.tweens.retain(|t| !t.done);
        completions
    });

    // Run completion callbacks outside the borrow; they may register tweens.
    for callback in completions {
        callback();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_hit_their_endpoints() {
        for ease in [
            Ease::Linear,
            Ease::Power1InOut,
            Ease::Power2Out,
            Ease::Power3Out,
            Ease::BackOut(1.7),
        ] {
            assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
        }
    }

    #[test]
    fn out_eases_are_monotonic() {
        for ease in [Ease::Linear, Ease::Power1InOut, Ease::Power2Out, Ease::Power3Out] {
            let mut last = ease.apply(0.0);
            for step in 1..=100 {
                let v = ease.apply(step as f64 / 100.0);
                assert!(v >= last, "{ease:?} dipped at step {step}");
                last = v;
            }
        }
    }

    #[test]
    fn back_out_overshoots_then_settles() {
        let ease = Ease::BackOut(1.7);
        let peak = (0..=100)
            .map(|s| ease.apply(s as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn segment_sampling_is_linear_in_the_eased_value() {
        let seg = Segment { from: 50.0, to: 0.0 };
        assert_eq!(seg.sample(0.0), 50.0);
        assert_eq!(seg.sample(0.5), 25.0);
        assert_eq!(seg.sample(1.0), 0.0);
    }

    #[test]
    fn playhead_converges_without_overshoot() {
        let mut p = 0.0;
        for _ in 0..100 {
            p = step_playhead(p, 1.0, 16.0, 800.0);
            assert!(p <= 1.0);
        }
        assert_eq!(p, 1.0);

        // reverse from partway
        let mut p = 0.6;
        for _ in 0..100 {
            p = step_playhead(p, 0.0, 16.0, 800.0);
            assert!(p >= 0.0);
        }
        assert_eq!(p, 0.0);
    }

    #[test]
    fn zero_dt_leaves_the_playhead_alone() {
        assert_eq!(step_playhead(0.3, 1.0, 0.0, 800.0), 0.3);
        let (p, dir) = step_loop(0.3, 1.0, 0.0, 2000.0, true);
        assert_eq!((p, dir), (0.3, 1.0));
    }

    #[test]
    fn zero_time_scale_reports_frozen() {
        assert!(!is_frozen());
        set_global_time_scale(0.0);
        assert!(is_frozen());
        set_global_time_scale(1.0);
        assert!(!is_frozen());
    }

    #[test]
    fn yoyo_loop_bounces_between_endpoints() {
        let mut p = 0.0;
        let mut dir = 1.0;
        let mut seen_reverse = false;
        for _ in 0..1000 {
            let (np, ndir) = step_loop(p, dir, 16.0, 2000.0, true);
            assert!((0.0..=1.0).contains(&np));
            if ndir < 0.0 {
                seen_reverse = true;
            }
            p = np;
            dir = ndir;
        }
        assert!(seen_reverse);
    }

    #[test]
    fn plain_loop_wraps_around() {
        let (p, dir) = step_loop(0.95, 1.0, 200.0, 2000.0, false);
        assert!((0.0..1.0).contains(&p));
        assert!((p - 0.05).abs() < 1e-9);
        assert_eq!(dir, 1.0);
    }
}

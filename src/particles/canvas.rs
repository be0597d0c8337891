//! The canvas-owning component: sizes the surface to the viewport, rebuilds
//! the particle set on resize, and runs the draw loop for the page's
//! lifetime. A canvas without a 2d context is a startup failure; nothing here
//! recovers from it.

use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use super::field::{self, Bounds, Particle, ParticleKind};

#[function_component(ParticleCanvas)]
pub fn particle_canvas() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    start(canvas);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <canvas
            id="particles-canvas"
            ref={canvas_ref}
            style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; z-index: 0; pointer-events: none;"
        />
    }
}

struct FieldState {
    bounds: Bounds,
    particles: Vec<Particle>,
    rng: fastrand::Rng,
}

impl FieldState {
    /// Size the surface to the viewport and regenerate every particle. Runs
    /// at startup and again on every resize.
    fn reset(&mut self, canvas: &HtmlCanvasElement) {
        self.bounds = viewport_bounds();
        canvas.set_width(self.bounds.width as u32);
        canvas.set_height(self.bounds.height as u32);
        self.particles = field::spawn_field(&mut self.rng, self.bounds);
    }
}

fn viewport_bounds() -> Bounds {
    let window = window().expect("no window");
    Bounds {
        width: window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
        height: window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
    }
}

fn start(canvas: HtmlCanvasElement) {
    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .expect("2d context")
        .expect("2d context")
        .dyn_into()
        .expect("2d context");

    let state = Rc::new(RefCell::new(FieldState {
        bounds: Bounds {
            width: 0.0,
            height: 0.0,
        },
        particles: Vec::new(),
        rng: fastrand::Rng::new(),
    }));
    state.borrow_mut().reset(&canvas);

    {
        let canvas = canvas.clone();
        let state = state.clone();
        let on_resize = Closure::wrap(Box::new(move || {
            state.borrow_mut().reset(&canvas);
        }) as Box<dyn FnMut()>);
        let _ = window()
            .expect("no window")
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        on_resize.forget();
    }

    // `f` holds the frame closure so it can reschedule itself; the loop runs
    // until the page goes away.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            let mut state = state.borrow_mut();
            let bounds = state.bounds;
            context.clear_rect(0.0, 0.0, bounds.width, bounds.height);
            draw_connections(&context, &state.particles);
            for particle in &mut state.particles {
                particle.advance(bounds);
                draw_particle(&context, particle);
            }
        }
        let _ = window()
            .expect("no window")
            .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }) as Box<dyn FnMut()>));

    let _ = window()
        .expect("no window")
        .request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
}

fn draw_connections(context: &CanvasRenderingContext2d, particles: &[Particle]) {
    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let a = &particles[i];
            let b = &particles[j];
            let distance = (a.x - b.x).hypot(a.y - b.y);
            let alpha = field::connection_alpha(distance);
            if alpha > 0.0 {
                context.set_stroke_style_str(&format!("rgba(0, 255, 136, {alpha:.4})"));
                context.set_line_width(0.5);
                context.begin_path();
                context.move_to(a.x, a.y);
                context.line_to(b.x, b.y);
                context.stroke();
            }
        }
    }
}

fn draw_particle(context: &CanvasRenderingContext2d, particle: &Particle) {
    context.save();
    let alpha = particle.pulse_opacity();

    if particle.kind == ParticleKind::Dot {
        if let Ok(gradient) = context.create_radial_gradient(
            particle.x,
            particle.y,
            0.0,
            particle.x,
            particle.y,
            particle.size,
        ) {
            let _ = gradient.add_color_stop(0.0, &format!("rgba(0, 255, 136, {alpha:.4})"));
            let _ = gradient.add_color_stop(1.0, "rgba(0, 255, 136, 0)");
            context.set_fill_style_canvas_gradient(&gradient);
            context.begin_path();
            let _ = context.arc(particle.x, particle.y, particle.size, 0.0, PI * 2.0);
            context.fill();
        }
    } else {
        context.set_fill_style_str(&format!("rgba(0, 255, 136, {alpha:.4})"));
        let weight = if particle.kind == ParticleKind::Label {
            "bold "
        } else {
            ""
        };
        context.set_font(&format!("{weight}{:.0}px 'Inter', monospace", particle.size));
        context.set_text_align("center");
        context.set_text_baseline("middle");
        context.set_shadow_blur(10.0);
        context.set_shadow_color("rgba(0, 255, 136, 0.5)");
        let _ = context.fill_text(particle.content, particle.x, particle.y);
    }

    context.restore();
}

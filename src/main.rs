use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod consent;
mod components {
    pub mod cookie_banner;
    pub mod video_modal;
}
mod motion {
    pub mod ambient;
    pub mod counters;
    pub mod hover;
    pub mod parallax;
    pub mod scroll;
    pub mod tween;
}
mod pages {
    pub mod home;
    pub mod termsprivacy;
}
mod particles {
    pub mod canvas;
    pub mod field;
}

use pages::{
    home::Home,
    termsprivacy::{PrivacyPolicy, TermsAndConditions},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
    }
}

/// Smooth-scroll to an in-page anchor, stopping short of the fixed navbar.
pub fn scroll_to_anchor(href: &str) {
    if href == "#" {
        return;
    }
    let Some(window) = window() else { return };
    let Some(document) = window.document() else {
        return;
    };
    if let Some(target) = document
        .query_selector(href)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    {
        let top = f64::from(target.offset_top()) - config::ANCHOR_SCROLL_OFFSET;
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let win = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = win.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(offset > config::NAV_SCROLL_THRESHOLD);
                }) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Clicking anywhere outside the nav closes the mobile menu.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();
                let click_callback = Closure::wrap(Box::new(move |event: MouseEvent| {
                    let inside_nav = event
                        .target()
                        .and_then(|t| t.dyn_into::<Element>().ok())
                        .and_then(|el| el.closest(".top-nav").ok().flatten())
                        .is_some();
                    if !inside_nav {
                        menu_open.set(false);
                    }
                }) as Box<dyn FnMut(MouseEvent)>);
                document
                    .add_event_listener_with_callback(
                        "click",
                        click_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                move || {
                    document
                        .remove_event_listener_with_callback(
                            "click",
                            click_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let anchor = |href: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_anchor(href);
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-menu mobile-menu-open"
    } else {
        "nav-menu"
    };

    html! {
        <nav id="navbar" class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"KIMI Capital"}
                </Link<Route>>

                <button id="mobileMenuToggle" class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div id="navMenu" class={menu_class}>
                    <a href="#how-it-works" class="nav-link" onclick={anchor("#how-it-works")}>
                        {"How It Works"}
                    </a>
                    <a href="#programs" class="nav-link" onclick={anchor("#programs")}>
                        {"Programs"}
                    </a>
                    <a href="#features" class="nav-link" onclick={anchor("#features")}>
                        {"Why Us"}
                    </a>
                    <a href="#programs" class="nav-cta" onclick={anchor("#programs")}>
                        {"Get Funded"}
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn reduced_motion_preferred() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    if reduced_motion_preferred() {
        info!("Reduced motion preferred; freezing animation timelines");
        motion::tween::set_global_time_scale(0.0);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

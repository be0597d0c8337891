//! Cookie consent banner: shown after a short delay on a first visit, never
//! again once a choice is stored.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::COOKIE_BANNER_DELAY_MS;
use crate::consent::{self, CookieChoice};
use crate::motion::tween::{self, Ease, Props, TweenSpec};
use crate::Route;

#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let visible = use_state(|| false);
    let dismissed = use_state(|| consent::load().is_some());

    {
        let visible = visible.clone();
        let already_chosen = *dismissed;
        use_effect_with_deps(
            move |_| {
                if !already_chosen {
                    let timeout = Timeout::new(COOKIE_BANNER_DELAY_MS, move || {
                        visible.set(true);
                    });
                    timeout.forget();
                }
                || ()
            },
            (),
        );
    }

    let choose = |choice: CookieChoice| {
        let dismissed = dismissed.clone();
        Callback::from(move |_: MouseEvent| {
            consent::store(choice);
            let banner = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("cookieConsent"))
                .and_then(|e| e.dyn_into::<HtmlElement>().ok());
            match banner {
                // Slide out, then unmount. With timelines frozen the tween
                // would never finish, so dismiss immediately instead.
                Some(banner) if !tween::is_frozen() => {
                    let dismissed = dismissed.clone();
                    tween::animate_then(
                        &banner,
                        TweenSpec::new(
                            Props::default().opacity(1.0, 0.0).y(0.0, 50.0),
                            500.0,
                        )
                        .ease(Ease::Power2Out),
                        move || dismissed.set(true),
                    );
                }
                _ => dismissed.set(true),
            }
        })
    };

    if *dismissed {
        return html! {};
    }

    html! {
        <div
            id="cookieConsent"
            class={classes!("cookie-consent", (*visible).then_some("show"))}
        >
            <div class="cookie-text">
                <p>
                    {"We use cookies to improve your experience and analyze traffic. See our "}
                    <Link<Route> to={Route::Privacy}>{"privacy policy"}</Link<Route>>
                    {" for details."}
                </p>
            </div>
            <div class="cookie-actions">
                <button
                    id="acceptCookies"
                    class="btn-cookie btn-cookie-accept"
                    onclick={choose(CookieChoice::Accepted)}
                >
                    {"Accept"}
                </button>
                <button
                    id="declineCookies"
                    class="btn-cookie btn-cookie-decline"
                    onclick={choose(CookieChoice::Declined)}
                >
                    {"Decline"}
                </button>
            </div>
        </div>
    }
}

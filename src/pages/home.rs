use yew::prelude::*;

use crate::components::cookie_banner::CookieBanner;
use crate::components::video_modal::VideoModal;
use crate::motion::tween::{Ease, Props, TweenSpec};
use crate::motion::{ambient, counters, hover, parallax, scroll, tween};
use crate::particles::canvas::ParticleCanvas;

#[function_component(Home)]
pub fn home() -> Html {
    let modal_open = use_state(|| false);

    // Everything event-driven hooks up once, after the first render has put
    // the sections in the DOM.
    use_effect_with_deps(
        move |_| {
            scroll::init();
            counters::init();
            parallax::init();
            ambient::init();
            hover::init();

            if !tween::is_frozen() {
                if let Some(body) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.body())
                {
                    tween::animate(
                        &body,
                        TweenSpec::new(Props::default().opacity(0.0, 1.0), 500.0)
                            .ease(Ease::Power2Out),
                    );
                }
            }
            || ()
        },
        (),
    );

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| modal_open.set(true))
    };
    let goto = |href: &'static str| {
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            crate::scroll_to_anchor(href);
        })
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(false))
    };

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #0a0f0d;
                        color: #e8f5ee;
                        font-family: 'Inter', sans-serif;
                    }
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 100;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(10, 15, 13, 0.92);
                        box-shadow: 0 2px 16px rgba(0, 0, 0, 0.4);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 16px 32px;
                    }
                    .nav-logo { color: #00ff88; font-weight: bold; text-decoration: none; }
                    .nav-menu { display: flex; gap: 24px; align-items: center; }
                    .nav-link, .nav-cta { color: #e8f5ee; text-decoration: none; }
                    .nav-cta {
                        padding: 8px 20px;
                        border: 1px solid #00ff88;
                        border-radius: 24px;
                        color: #00ff88;
                    }
                    .burger-menu { display: none; background: none; border: none; cursor: pointer; }
                    .burger-menu span {
                        display: block;
                        width: 22px;
                        height: 2px;
                        margin: 5px 0;
                        background: #e8f5ee;
                    }
                    @media (max-width: 768px) {
                        .burger-menu { display: block; }
                        .nav-menu {
                            position: absolute;
                            top: 100%;
                            right: 0;
                            flex-direction: column;
                            background: rgba(10, 15, 13, 0.97);
                            padding: 24px;
                            display: none;
                        }
                        .nav-menu.mobile-menu-open { display: flex; }
                    }
                    section { position: relative; z-index: 1; padding: 96px 24px; }
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .floating-element {
                        position: absolute;
                        width: 120px;
                        height: 120px;
                        border-radius: 16px;
                        background: rgba(0, 255, 136, 0.06);
                        border: 1px solid rgba(0, 255, 136, 0.15);
                    }
                    .floating-chart { top: 20%; left: 12%; }
                    .floating-coin { top: 60%; right: 10%; border-radius: 50%; }
                    .floating-grid { bottom: 15%; left: 30%; }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 32px;
                        left: 50%;
                        margin-left: -20px;
                        text-align: center;
                        opacity: 1;
                    }
                    .scroll-indicator-line {
                        width: 1px;
                        height: 48px;
                        margin: 8px auto 0;
                        background: linear-gradient(#00ff88, transparent);
                    }
                    .stats-grid, .steps-grid, .programs-grid, .features-grid {
                        display: grid;
                        gap: 24px;
                        max-width: 1100px;
                        margin: 0 auto;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    }
                    .stat-item { text-align: center; }
                    .stat-number { font-size: 2.5rem; color: #00ff88; display: block; }
                    .step-card, .program-card, .glass-card {
                        padding: 32px;
                        border-radius: 16px;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(0, 255, 136, 0.1);
                        backdrop-filter: blur(10px);
                    }
                    .program-card-featured { border-color: #00ff88; }
                    .btn-hero {
                        display: inline-block;
                        margin: 8px;
                        padding: 14px 32px;
                        border-radius: 32px;
                        text-decoration: none;
                    }
                    .btn-primary { background: #00ff88; color: #0a0f0d; }
                    .btn-secondary { border: 1px solid #00ff88; color: #00ff88; }
                    .play-button {
                        display: block;
                        margin: 24px auto 0;
                        background: none;
                        border: none;
                        color: #e8f5ee;
                        cursor: pointer;
                    }
                    .play-icon { color: #00ff88; margin-right: 8px; }
                    .cookie-consent {
                        position: fixed;
                        bottom: 24px;
                        left: 0;
                        right: 0;
                        width: fit-content;
                        margin: 0 auto;
                        z-index: 200;
                        display: flex;
                        gap: 16px;
                        align-items: center;
                        max-width: 640px;
                        padding: 16px 24px;
                        border-radius: 12px;
                        background: rgba(10, 15, 13, 0.97);
                        border: 1px solid rgba(0, 255, 136, 0.2);
                        opacity: 0;
                        visibility: hidden;
                        transition: opacity 0.4s ease, visibility 0.4s ease;
                    }
                    .cookie-consent.show { opacity: 1; visibility: visible; }
                    .btn-cookie {
                        padding: 8px 20px;
                        border-radius: 20px;
                        border: 1px solid #00ff88;
                        background: none;
                        color: #00ff88;
                        cursor: pointer;
                    }
                    .btn-cookie-accept { background: #00ff88; color: #0a0f0d; }
                    .video-modal {
                        position: fixed;
                        inset: 0;
                        z-index: 300;
                        display: none;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.85);
                    }
                    .video-modal.active { display: flex; }
                    .video-modal-content {
                        position: relative;
                        width: min(90vw, 960px);
                        aspect-ratio: 16 / 9;
                    }
                    .video-modal-content iframe { width: 100%; height: 100%; border: 0; }
                    .modal-close {
                        position: absolute;
                        top: -40px;
                        right: 0;
                        background: none;
                        border: none;
                        color: #e8f5ee;
                        font-size: 28px;
                        cursor: pointer;
                    }
                    .footer { padding: 48px 24px; }
                    .footer-content {
                        display: flex;
                        justify-content: space-between;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .social-icon {
                        display: inline-block;
                        margin-left: 16px;
                        color: #00ff88;
                        text-decoration: none;
                    }
                "#}
            </style>
            <ParticleCanvas />

            <section id="home" class="hero">
                <div class="hero-background">
                    <div class="floating-element floating-chart" data-speed="1"></div>
                    <div class="floating-element floating-coin" data-speed="2"></div>
                    <div class="floating-element floating-grid" data-speed="3"></div>
                </div>
                <div class="hero-content">
                    <h1>{"Trade Our Capital."}<br />{"Keep Up To 90% Of The Profit."}</h1>
                    <p class="hero-subtitle">
                        {"Pass a two-step evaluation and get funded with up to $200,000 in buying power. No recurring fees, payouts every two weeks."}
                    </p>
                    <div class="hero-actions">
                        <a href="#programs" class="btn-hero btn-primary" onclick={goto("#programs")}>{"Get Funded"}</a>
                        <a href="#how-it-works" class="btn-hero btn-secondary" onclick={goto("#how-it-works")}>{"How It Works"}</a>
                    </div>
                    <button id="playButton" class="play-button" onclick={open_modal}>
                        <span class="play-icon">{"▶"}</span>
                        {"Watch the 2-minute intro"}
                    </button>
                </div>
                <div class="scroll-indicator">
                    <span>{"Scroll"}</span>
                    <div class="scroll-indicator-line"></div>
                </div>
            </section>

            <section class="stats">
                <div class="stats-grid">
                    <div class="stat-item">
                        <span class="stat-number" data-target="12500">{"0"}</span>
                        <span class="stat-label">{"Funded Traders"}</span>
                    </div>
                    <div class="stat-item">
                        <span class="stat-number" data-target="250">{"0"}</span>
                        <span class="stat-label">{"Payouts Every Month"}</span>
                    </div>
                    <div class="stat-item">
                        <span class="stat-number" data-target="90">{"0"}</span>
                        <span class="stat-label">{"% Profit Split"}</span>
                    </div>
                    <div class="stat-item">
                        <span class="stat-number" data-target="24">{"0"}</span>
                        <span class="stat-label">{"Hour Support"}</span>
                    </div>
                </div>
            </section>

            <section id="how-it-works" class="how-it-works">
                <h2 class="section-title">{"Three Steps To Funding"}</h2>
                <p class="section-subtitle">
                    {"Prove your edge on a demo account, then trade real capital."}
                </p>
                <div class="steps-grid">
                    <div class="step-card">
                        <div class="step-icon">{"📈"}</div>
                        <h3>{"1. Take The Challenge"}</h3>
                        <p>{"Hit an 8% profit target while respecting the daily drawdown limit. No time pressure."}</p>
                    </div>
                    <div class="step-card">
                        <div class="step-icon">{"🔍"}</div>
                        <h3>{"2. Verification"}</h3>
                        <p>{"Repeat with a 5% target so we know the first run wasn't luck."}</p>
                    </div>
                    <div class="step-card">
                        <div class="step-icon">{"💰"}</div>
                        <h3>{"3. Get Funded"}</h3>
                        <p>{"Trade our capital and keep up to 90% of everything you make."}</p>
                    </div>
                </div>
            </section>

            <section id="programs" class="programs">
                <h2 class="section-title">{"Choose Your Account Size"}</h2>
                <p class="section-subtitle">{"One-time fee, refunded with your first payout."}</p>
                <div class="programs-grid">
                    <div class="program-card">
                        <h3>{"Starter"}</h3>
                        <div class="program-price">{"$25,000"}</div>
                        <ul>
                            <li>{"$199 evaluation fee"}</li>
                            <li>{"80% profit split"}</li>
                            <li>{"5% daily drawdown"}</li>
                        </ul>
                        <a href="#" class="btn-program">{"Start Evaluation"}</a>
                    </div>
                    <div class="program-card program-card-featured">
                        <h3>{"Pro"}</h3>
                        <div class="program-price">{"$100,000"}</div>
                        <ul>
                            <li>{"$499 evaluation fee"}</li>
                            <li>{"85% profit split"}</li>
                            <li>{"5% daily drawdown"}</li>
                        </ul>
                        <a href="#" class="btn-program">{"Start Evaluation"}</a>
                    </div>
                    <div class="program-card">
                        <h3>{"Elite"}</h3>
                        <div class="program-price">{"$200,000"}</div>
                        <ul>
                            <li>{"$899 evaluation fee"}</li>
                            <li>{"90% profit split"}</li>
                            <li>{"6% daily drawdown"}</li>
                        </ul>
                        <a href="#" class="btn-program">{"Start Evaluation"}</a>
                    </div>
                </div>
            </section>

            <section id="features" class="features">
                <h2 class="section-title">{"Built For Serious Traders"}</h2>
                <div class="features-grid">
                    <div class="glass-card">
                        <h3>{"Fast Payouts"}</h3>
                        <p>{"Bi-weekly payouts, processed within 24 hours of the request."}</p>
                    </div>
                    <div class="glass-card">
                        <h3>{"No Time Limits"}</h3>
                        <p>{"Take the evaluation at your own pace. The account stays open while you trade."}</p>
                    </div>
                    <div class="glass-card">
                        <h3>{"Raw Spreads"}</h3>
                        <p>{"Institutional liquidity with no hidden markups or commissions."}</p>
                    </div>
                    <div class="glass-card">
                        <h3>{"Scale Up"}</h3>
                        <p>{"Grow a consistent account by 25% every three months, up to $1M."}</p>
                    </div>
                </div>
            </section>

            <footer class="footer">
                <div class="footer-content">
                    <span class="footer-brand">{"KIMI Capital"}</span>
                    <div class="footer-social">
                        <a href="https://x.com" class="social-icon" aria-label="X">{"𝕏"}</a>
                        <a href="https://discord.com" class="social-icon" aria-label="Discord">{"💬"}</a>
                        <a href="https://youtube.com" class="social-icon" aria-label="YouTube">{"▶"}</a>
                    </div>
                </div>
            </footer>

            <CookieBanner />
            <VideoModal open={*modal_open} on_close={close_modal} />
        </div>
    }
}

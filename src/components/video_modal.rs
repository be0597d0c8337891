//! Intro-video modal: opening locks page scroll; closing (button, backdrop,
//! or Escape) restores it and reassigns the iframe src to stop playback.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlIFrameElement, KeyboardEvent};
use yew::prelude::*;

const VIDEO_SRC: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

#[derive(Properties, PartialEq)]
pub struct VideoModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(VideoModal)]
pub fn video_modal(props: &VideoModalProps) -> Html {
    let iframe_ref = use_node_ref();

    // Scroll lock follows the open state; closing also resets the iframe so
    // playback stops.
    {
        let iframe_ref = iframe_ref.clone();
        use_effect_with_deps(
            move |open| {
                if let Some(body) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.body())
                {
                    let overflow = if *open { "hidden" } else { "" };
                    let _ = body.style().set_property("overflow", overflow);
                }
                if !*open {
                    if let Some(iframe) = iframe_ref.cast::<HtmlIFrameElement>() {
                        let src = iframe.src();
                        iframe.set_src(&src);
                    }
                }
                || ()
            },
            props.open,
        );
    }

    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                    if event.key() == "Escape" {
                        on_close.emit(());
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);
                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback(
                        "keydown",
                        keydown.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(document) = &document {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                    }
                    drop(keydown);
                }
            },
            (),
        );
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_content = Callback::from(|event: MouseEvent| event.stop_propagation());
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            id="videoModal"
            class={classes!("video-modal", props.open.then_some("active"))}
            onclick={on_backdrop}
        >
            <div class="video-modal-content" onclick={on_content}>
                <button id="modalClose" class="modal-close" onclick={on_close_button}>
                    {"×"}
                </button>
                <iframe
                    ref={iframe_ref}
                    src={VIDEO_SRC}
                    title="How funding works"
                    allow="accelerometer; autoplay; encrypted-media; gyroscope"
                />
            </div>
        </div>
    }
}

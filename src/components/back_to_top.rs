use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::i18n::LanguageHandle;

const SHOW_AFTER_PX: f64 = 400.0;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub lang: LanguageHandle,
}

/// Button that fades in once the visitor has scrolled past the hero and
/// smooth-scrolls back to the top.
#[function_component(BackToTop)]
pub fn back_to_top(props: &Props) -> Html {
    let locale = props.lang.current();
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let visible = visible.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    visible.set(scroll_y > SHOW_AFTER_PX);
                                }
                            }
                        }
                    });
                    if window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .is_ok()
                    {
                        Box::new(move || {
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback(
                                    "scroll",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        })
                    } else {
                        Box::new(|| ())
                    }
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let on_click = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    if !*visible {
        return html! {};
    }

    html! {
        <button class="back-to-top" onclick={on_click} aria-label={locale.text("backToTop.label")}>
            <style>{r#"
                .back-to-top {
                    position: fixed;
                    bottom: 1.25rem;
                    right: 1.25rem;
                    z-index: 40;
                    width: 3rem;
                    height: 3rem;
                    border: none;
                    border-radius: 50%;
                    background: rgba(0, 0, 0, 0.45);
                    color: white;
                    font-size: 1.2rem;
                    cursor: pointer;
                }
            "#}</style>
            { "↑" }
        </button>
    }
}

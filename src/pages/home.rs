use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::audio::AudioHandle;
use crate::components::back_to_top::BackToTop;
use crate::components::call_to_action::CallToAction;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::product_showcase::ProductShowcase;
use crate::data::{bottle, BottleKey, DEFAULT_GRADIENT};
use crate::i18n::LanguageHandle;
use crate::visibility::SectionObserver;

/// Gradient for the whole page given the currently dominant section.
pub fn page_gradient(active: Option<BottleKey>) -> &'static str {
    match active {
        Some(key) => bottle(key).gradient,
        None => DEFAULT_GRADIENT,
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub lang: LanguageHandle,
    pub audio: AudioHandle,
    pub animations_enabled: bool,
}

#[function_component(Home)]
pub fn home(props: &Props) -> Html {
    let active = use_state(|| None::<BottleKey>);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    // Browsers only allow playback after a user gesture, so the first click
    // or touch anywhere on the page warms the audio engine. The warmup is
    // one-shot internally; later gestures are no-ops.
    {
        let audio = props.audio.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(move || audio.initialize());
                    let options = web_sys::AddEventListenerOptions::new();
                    options.set_once(true);
                    let mut attached = Vec::new();
                    for event in ["click", "touchstart"] {
                        if window
                            .add_event_listener_with_callback_and_add_event_listener_options(
                                event,
                                callback.as_ref().unchecked_ref(),
                                &options,
                            )
                            .is_ok()
                        {
                            attached.push(event);
                        }
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            for event in attached {
                                let _ = win.remove_event_listener_with_callback(
                                    event,
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    // Track which bottle section dominates the viewport. One direct
    // measurement shortly after mount seeds the gradient before the first
    // scroll event arrives.
    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let on_active = Callback::from(move |key| active.set(key));
                let observer = SectionObserver::new(on_active).ok().map(std::rc::Rc::new);
                let mut seed = None;
                if let Some(observer) = &observer {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        for key in BottleKey::ALL {
                            if let Some(element) = document.get_element_by_id(key.key()) {
                                observer.observe(&element);
                            }
                        }
                    }
                    // Layout needs a beat to settle before the seed
                    // measurement is honest.
                    let observer = observer.clone();
                    seed = Some(Timeout::new(500, move || observer.measure_now()));
                }
                move || {
                    drop(seed);
                    drop(observer);
                }
            },
            (),
        );
    }

    let gradient = page_gradient(*active);
    let background_style = if props.animations_enabled {
        format!("background: {gradient}; transition: background 1.5s ease;")
    } else {
        format!("background: {gradient};")
    };

    html! {
        <div class="home" style={background_style}>
            <style>{r#"
                .home {
                    min-height: 100vh;
                }
                .pattern-bar {
                    height: 0.75rem;
                    background: repeating-linear-gradient(
                        45deg,
                        rgba(255, 255, 255, 0.35) 0 12px,
                        transparent 12px 24px
                    );
                }
            "#}</style>
            <div class="pattern-bar"></div>
            <Hero lang={props.lang.clone()} />
            <ProductShowcase lang={props.lang.clone()} audio={props.audio.clone()} />
            <CallToAction lang={props.lang.clone()} />
            <BackToTop lang={props.lang.clone()} />
            <Footer lang={props.lang.clone()} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_follows_the_active_section() {
        assert_eq!(page_gradient(None), DEFAULT_GRADIENT);
        for key in BottleKey::ALL {
            assert_eq!(page_gradient(Some(key)), bottle(key).gradient);
            assert!(page_gradient(Some(key)).starts_with("linear-gradient"));
        }
    }
}

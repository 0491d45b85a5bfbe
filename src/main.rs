mod audio;
mod components;
mod config;
mod data;
mod i18n;
mod pages;
mod supabase;
mod visibility;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::audio::{AudioHandle, AudioPlayer, DEFAULT_VOLUME};
use crate::components::audio_controls::AudioControls;
use crate::components::cookie_consent::CookieConsent;
use crate::components::navigation::Navigation;
use crate::i18n::LanguageHandle;
use crate::pages::about::About;
use crate::pages::admin::Admin;
use crate::pages::contact::Contact;
use crate::pages::home::Home;
use crate::pages::imprint::Imprint;
use crate::pages::privacy::Privacy;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/privacy")]
    Privacy,
    #[at("/imprint")]
    Imprint,
    #[at("/contact")]
    Contact,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, lang: LanguageHandle, audio: AudioHandle, animations: bool) -> Html {
    match route {
        Route::Home => html! {
            <Home lang={lang} audio={audio} animations_enabled={animations} />
        },
        Route::About => html! { <About lang={lang} /> },
        Route::Privacy => html! { <Privacy lang={lang} /> },
        Route::Imprint => html! { <Imprint lang={lang} /> },
        Route::Contact => html! { <Contact lang={lang} /> },
        Route::Admin => html! { <Admin /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let locale = use_state(i18n::load_locale);
    let lang = LanguageHandle::new(locale);

    // One element set for the whole session; route changes must not restart
    // the music.
    let player = use_state(|| AudioPlayer::new().expect("audio elements are constructible"));
    let playing = use_state(|| false);
    let volume = use_state(|| DEFAULT_VOLUME);
    let audio = AudioHandle::new((*player).clone(), playing, volume);

    // Background animation is opt-in.
    let animations_enabled = use_state(|| false);

    // Language changes made in another tab arrive as storage events.
    {
        let lang = lang.clone();
        use_effect_with_deps(
            move |lang: &LanguageHandle| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn(web_sys::StorageEvent)>::new({
                        let lang = lang.clone();
                        move |event: web_sys::StorageEvent| {
                            if event.key().as_deref() == Some("preferredLanguage") {
                                if let Some(code) = event.new_value() {
                                    lang.apply_broadcast(&code);
                                }
                            }
                        }
                    });
                    if window
                        .add_event_listener_with_callback(
                            "storage",
                            callback.as_ref().unchecked_ref(),
                        )
                        .is_ok()
                    {
                        Box::new(move || {
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback(
                                    "storage",
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
            lang,
        );
    }

    let toggle_animations = {
        let animations_enabled = animations_enabled.clone();
        Callback::from(move |()| animations_enabled.set(!*animations_enabled))
    };

    let render = {
        let lang = lang.clone();
        let audio = audio.clone();
        let animations = *animations_enabled;
        Callback::from(move |route: Route| {
            switch(route, lang.clone(), audio.clone(), animations)
        })
    };

    html! {
        <BrowserRouter>
            <Navigation lang={lang.clone()} />
            <Switch<Route> render={render} />
            <AudioControls
                audio={audio}
                animations_enabled={*animations_enabled}
                on_toggle_animations={toggle_animations}
            />
            <CookieConsent lang={lang} />
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

use yew::prelude::*;
use yew_router::components::Link;

use crate::i18n::LanguageHandle;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub lang: LanguageHandle,
}

/// Fixed top bar: wordmark on the left, language toggle and menu button on
/// the right, with a fullscreen overlay menu for the static pages.
#[function_component(Navigation)]
pub fn navigation(props: &Props) -> Html {
    let locale = props.lang.current();
    let menu_open = use_state(|| false);

    let scroll_to_top = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    let toggle_language = {
        let lang = props.lang.clone();
        Callback::from(move |_: MouseEvent| lang.toggle())
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_entries = [
        (Route::About, "menu.about"),
        (Route::Privacy, "menu.privacy"),
        (Route::Imprint, "menu.imprint"),
        (Route::Contact, "menu.contact"),
    ];

    html! {
        <>
            <style>{r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem 1.5rem;
                }
                .top-nav .wordmark {
                    font-size: 1.5rem;
                    font-weight: 800;
                    letter-spacing: 0.05em;
                    color: white;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .top-nav .controls {
                    display: flex;
                    gap: 0.75rem;
                    align-items: center;
                }
                .top-nav .controls button {
                    border: 1px solid rgba(255, 255, 255, 0.6);
                    background: rgba(0, 0, 0, 0.25);
                    color: white;
                    border-radius: 999px;
                    padding: 0.4rem 0.9rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .overlay-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 55;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                    background: rgba(10, 10, 10, 0.92);
                }
                .overlay-menu a {
                    color: white;
                    font-size: 2rem;
                    font-weight: 700;
                    text-decoration: none;
                }
                .overlay-menu .close {
                    position: absolute;
                    top: 1rem;
                    right: 1.5rem;
                    font-size: 2rem;
                    background: none;
                    border: none;
                    color: white;
                    cursor: pointer;
                }
            "#}</style>
            <nav class="top-nav">
                <button class="wordmark" onclick={scroll_to_top}>{ "AfroSoda" }</button>
                <div class="controls">
                    <button onclick={toggle_language} aria-label={locale.text("navigation.language")}>
                        { locale.other().code().to_uppercase() }
                    </button>
                    <button onclick={toggle_menu.clone()} aria-label="Menu">{ "☰" }</button>
                </div>
            </nav>
            if *menu_open {
                <div class="overlay-menu">
                    <button class="close" onclick={close_menu.clone()} aria-label="Close">{ "×" }</button>
                    <Link<Route> to={Route::Home}>
                        <span onclick={close_menu.clone()}>{ "AfroSoda" }</span>
                    </Link<Route>>
                    { for menu_entries.into_iter().map(|(route, key)| html! {
                        <Link<Route> to={route}>
                            <span onclick={close_menu.clone()}>{ locale.text(key) }</span>
                        </Link<Route>>
                    }) }
                </div>
            }
        </>
    }
}

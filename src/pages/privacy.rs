use yew::prelude::*;

use crate::components::data_request_form::DataRequestForm;
use crate::components::footer::Footer;
use crate::i18n::{LanguageHandle, Locale};

/// Section layout of the privacy policy: title key, body key, optional
/// bullet-list key.
const SECTIONS: &[(&str, &str, Option<&str>)] = &[
    (
        "privacy.sections.introduction.title",
        "privacy.sections.introduction.content",
        None,
    ),
    (
        "privacy.sections.collection.title",
        "privacy.sections.collection.content",
        Some("privacy.sections.collection.items"),
    ),
    (
        "privacy.sections.usage.title",
        "privacy.sections.usage.content",
        Some("privacy.sections.usage.items"),
    ),
    (
        "privacy.sections.cookies.title",
        "privacy.sections.cookies.content",
        None,
    ),
    (
        "privacy.sections.rights.title",
        "privacy.sections.rights.content",
        Some("privacy.sections.rights.items"),
    ),
    (
        "privacy.sections.security.title",
        "privacy.sections.security.content",
        None,
    ),
    (
        "privacy.sections.changes.title",
        "privacy.sections.changes.content",
        None,
    ),
    (
        "privacy.sections.contact.title",
        "privacy.sections.contact.content",
        None,
    ),
];

fn section(locale: Locale, title: &'static str, body: &'static str, items: Option<&'static str>) -> Html {
    html! {
        <section>
            <h2>{ locale.text(title) }</h2>
            <p>{ locale.text(body) }</p>
            if let Some(items) = items {
                <ul>
                    { for locale.list(items).iter().map(|item| html! { <li>{ *item }</li> }) }
                </ul>
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub lang: LanguageHandle,
}

#[function_component(Privacy)]
pub fn privacy(props: &Props) -> Html {
    let locale = props.lang.current();

    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="static-page privacy-page">
            <style>{r#"
                .privacy-page {
                    min-height: 100vh;
                    color: white;
                    background: linear-gradient(to bottom, #1e1b4b, #4c1d95, #831843);
                }
                .privacy-page .page-hero {
                    padding: 8rem 1.5rem 3rem;
                    text-align: center;
                }
                .privacy-page .content {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 0 1.5rem 4rem;
                }
                .privacy-page section { margin-bottom: 2rem; }
                .privacy-page .last-updated {
                    margin-top: 3rem;
                    font-size: 0.85rem;
                    opacity: 0.7;
                }
            "#}</style>
            <header class="page-hero">
                <h1>{ locale.text("privacy.hero.title") }</h1>
                <p>{ locale.text("privacy.hero.subtitle") }</p>
            </header>
            <main class="content">
                { for SECTIONS.iter().map(|&(title, body, items)| section(locale, title, body, items)) }
                <DataRequestForm lang={props.lang.clone()} />
                <p class="last-updated">{ locale.text("privacy.lastUpdated") }</p>
            </main>
            <Footer lang={props.lang.clone()} />
        </div>
    }
}

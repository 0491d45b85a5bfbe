use yew::prelude::*;

use crate::components::footer::Footer;
use crate::i18n::LanguageHandle;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub lang: LanguageHandle,
}

#[function_component(Imprint)]
pub fn imprint(props: &Props) -> Html {
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

    let paragraph_sections = [
        (
            "imprint.sections.management.title",
            "imprint.sections.management.content",
        ),
        (
            "imprint.sections.register.title",
            "imprint.sections.register.content",
        ),
        (
            "imprint.sections.responsible.title",
            "imprint.sections.responsible.content",
        ),
        (
            "imprint.sections.liability.title",
            "imprint.sections.liability.content",
        ),
        (
            "imprint.sections.copyright.title",
            "imprint.sections.copyright.content",
        ),
    ];

    html! {
        <div class="static-page imprint-page">
            <style>{r#"
                .imprint-page {
                    min-height: 100vh;
                    color: white;
                    background: linear-gradient(to bottom, #0f172a, #334155, #475569);
                }
                .imprint-page .page-hero {
                    padding: 8rem 1.5rem 3rem;
                    text-align: center;
                }
                .imprint-page .content {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 0 1.5rem 4rem;
                }
                .imprint-page section { margin-bottom: 2rem; }
                .imprint-page address { font-style: normal; line-height: 1.7; }
                .imprint-page .last-updated {
                    margin-top: 3rem;
                    font-size: 0.85rem;
                    opacity: 0.7;
                }
            "#}</style>
            <header class="page-hero">
                <h1>{ locale.text("imprint.hero.title") }</h1>
                <p>{ locale.text("imprint.hero.subtitle") }</p>
            </header>
            <main class="content">
                <section>
                    <h2>{ locale.text("imprint.sections.company.title") }</h2>
                    <address>
                        <strong>{ locale.text("imprint.sections.company.name") }</strong><br />
                        { locale.text("imprint.sections.company.address") }<br />
                        { locale.text("imprint.sections.company.phone") }<br />
                        { locale.text("imprint.sections.company.fax") }<br />
                        { locale.text("imprint.sections.company.email") }<br />
                        { locale.text("imprint.sections.company.website") }
                    </address>
                </section>
                { for paragraph_sections.into_iter().map(|(title, body)| html! {
                    <section>
                        <h2>{ locale.text(title) }</h2>
                        <p>{ locale.text(body) }</p>
                    </section>
                }) }
                <p class="last-updated">{ locale.text("imprint.lastUpdated") }</p>
            </main>
            <Footer lang={props.lang.clone()} />
        </div>
    }
}

use yew::prelude::*;

use crate::components::footer::Footer;
use crate::i18n::LanguageHandle;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub lang: LanguageHandle,
}

#[function_component(About)]
pub fn about(props: &Props) -> Html {
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

    let values = [
        (
            "about.values.items.passion.title",
            "about.values.items.passion.description",
        ),
        (
            "about.values.items.community.title",
            "about.values.items.community.description",
        ),
        (
            "about.values.items.quality.title",
            "about.values.items.quality.description",
        ),
    ];

    html! {
        <div class="static-page about-page">
            <style>{r#"
                .static-page {
                    min-height: 100vh;
                    color: white;
                    background: linear-gradient(to bottom, #9333ea, #ec4899, #f97316);
                }
                .static-page .page-hero {
                    padding: 8rem 1.5rem 3rem;
                    text-align: center;
                }
                .static-page .page-hero h1 {
                    font-size: clamp(2rem, 6vw, 3.5rem);
                    margin: 0;
                }
                .static-page .page-hero p {
                    font-size: 1.2rem;
                    opacity: 0.9;
                }
                .static-page .content {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 0 1.5rem 4rem;
                }
                .static-page .content h2 {
                    margin-top: 2.5rem;
                }
                .value-cards {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                }
                .value-cards article {
                    flex: 1 1 200px;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: rgba(0, 0, 0, 0.25);
                }
                .value-cards h3 { margin-top: 0; }
            "#}</style>
            <header class="page-hero">
                <h1>{ locale.text("about.hero.title") }</h1>
                <p>{ locale.text("about.hero.subtitle") }</p>
            </header>
            <main class="content">
                <h2>{ locale.text("about.story.title") }</h2>
                { for locale.list("about.story.paragraphs").iter().map(|paragraph| html! {
                    <p>{ *paragraph }</p>
                }) }
                <h2>{ locale.text("about.values.title") }</h2>
                <div class="value-cards">
                    { for values.into_iter().map(|(title, description)| html! {
                        <article>
                            <h3>{ locale.text(title) }</h3>
                            <p>{ locale.text(description) }</p>
                        </article>
                    }) }
                </div>
            </main>
            <Footer lang={props.lang.clone()} />
        </div>
    }
}

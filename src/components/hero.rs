use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;
use crate::data::BOTTLES;
use crate::i18n::LanguageHandle;

const ROTATE_MS: u32 = 4_000;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub lang: LanguageHandle,
}

/// Landing hero: headline, a bottle image cycling through the catalog and
/// the two feature cards.
#[function_component(Hero)]
pub fn hero(props: &Props) -> Html {
    let locale = props.lang.current();
    let bottle_index = use_state(|| 0_usize);

    {
        let bottle_index = bottle_index.clone();
        use_effect_with_deps(
            move |_| {
                // The handle captured here never sees later renders, so the
                // position is tracked locally instead of read back from it.
                let mut index = 0_usize;
                let interval = Interval::new(ROTATE_MS, move || {
                    index = (index + 1) % BOTTLES.len();
                    bottle_index.set(index);
                });
                move || drop(interval)
            },
            (),
        );
    }

    let bottle = &BOTTLES[*bottle_index % BOTTLES.len()];
    let features = [
        ("features.rhythm.title", "features.rhythm.description"),
        ("features.energy.title", "features.energy.description"),
    ];

    html! {
        <header class="hero">
            <style>{r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 6rem 1.5rem 3rem;
                    color: white;
                }
                .hero h1 {
                    font-size: clamp(2.5rem, 8vw, 5rem);
                    margin: 0;
                    text-shadow: 0 4px 24px rgba(0, 0, 0, 0.35);
                }
                .hero .subtitle {
                    font-size: 1.4rem;
                    max-width: 560px;
                    margin: 1rem auto 2rem;
                    opacity: 0.9;
                }
                .hero .bottle {
                    height: 340px;
                    transition: opacity 0.6s ease;
                }
                .hero .feature-cards {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    justify-content: center;
                    margin-top: 3rem;
                }
                .hero .feature-cards article {
                    max-width: 300px;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: rgba(0, 0, 0, 0.25);
                    backdrop-filter: blur(6px);
                }
                .hero .feature-cards h3 { margin-top: 0; }
            "#}</style>
            <h1>{ locale.text("hero.title") }</h1>
            <p class="subtitle">{ locale.text("hero.subtitle") }</p>
            <img
                class="bottle"
                src={config::media_url(bottle.hero_image)}
                alt={locale.text(bottle.key.name_key())}
            />
            <div class="feature-cards">
                { for features.into_iter().map(|(title, description)| html! {
                    <article>
                        <h3>{ locale.text(title) }</h3>
                        <p>{ locale.text(description) }</p>
                    </article>
                }) }
            </div>
        </header>
    }
}

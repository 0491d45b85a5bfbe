use yew::prelude::*;

use crate::audio::AudioHandle;
use crate::config;
use crate::data::{bottle, BottleKey};
use crate::i18n::LanguageHandle;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub lang: LanguageHandle,
    pub audio: AudioHandle,
}

/// One full-height section per bottle. The section ids are the catalog keys
/// that the landing page's intersection tracking observes; tapping a bottle
/// plays its percussion hit.
#[function_component(ProductShowcase)]
pub fn product_showcase(props: &Props) -> Html {
    let locale = props.lang.current();

    let section = |key: BottleKey| -> Html {
        let entry = bottle(key);
        let on_tap = {
            let audio = props.audio.clone();
            Callback::from(move |_: MouseEvent| audio.play_effect(key))
        };
        html! {
            <section id={key.key()} class="bottle-section">
                <img
                    src={config::media_url(entry.showcase_image)}
                    alt={locale.text(key.name_key())}
                    onclick={on_tap}
                />
                <div class="copy">
                    <h3 style={format!("background-image: {};", entry.accent)}>
                        { locale.text(key.name_key()) }
                    </h3>
                    <p>{ locale.text(key.description_key()) }</p>
                    <ul>
                        { for locale.list(key.features_key()).iter().map(|feature| html! {
                            <li>{ *feature }</li>
                        }) }
                    </ul>
                </div>
            </section>
        }
    };

    html! {
        <div class="product-showcase">
            <style>{r#"
                .product-showcase h2 {
                    text-align: center;
                    font-size: 2.5rem;
                    margin: 0 0 2rem;
                    color: white;
                }
                .bottle-section {
                    min-height: 100vh;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: center;
                    gap: 3rem;
                    padding: 4rem 1.5rem;
                    color: white;
                }
                .bottle-section img {
                    max-height: 420px;
                    border-radius: 1rem;
                    cursor: pointer;
                }
                .bottle-section .copy { max-width: 420px; }
                .bottle-section h3 {
                    font-size: 2rem;
                    margin: 0 0 1rem;
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .bottle-section ul {
                    padding-left: 1.25rem;
                }
                .bottle-section li { margin: 0.4rem 0; }
            "#}</style>
            <h2>{ locale.text("products.title") }</h2>
            { for BottleKey::ALL.into_iter().map(section) }
        </div>
    }
}

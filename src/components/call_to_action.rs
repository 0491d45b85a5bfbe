use yew::prelude::*;
use yew_router::components::Link;

use crate::i18n::LanguageHandle;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub lang: LanguageHandle,
}

#[function_component(CallToAction)]
pub fn call_to_action(props: &Props) -> Html {
    let locale = props.lang.current();
    html! {
        <section class="cta">
            <style>{r#"
                .cta {
                    text-align: center;
                    padding: 5rem 1.5rem;
                    color: white;
                }
                .cta h2 {
                    font-size: 2.5rem;
                    margin-bottom: 2rem;
                }
                .cta a {
                    display: inline-block;
                    padding: 1rem 2.5rem;
                    border-radius: 999px;
                    background: linear-gradient(to right, #facc15, #f97316);
                    color: #111;
                    font-size: 1.2rem;
                    font-weight: 700;
                    text-decoration: none;
                }
            "#}</style>
            <h2>{ locale.text("cta.title") }</h2>
            <Link<Route> to={Route::Contact}>{ locale.text("cta.button") }</Link<Route>>
        </section>
    }
}

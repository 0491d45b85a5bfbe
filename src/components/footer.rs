use yew::prelude::*;
use yew_router::components::Link;

use crate::i18n::LanguageHandle;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub lang: LanguageHandle,
}

#[function_component(Footer)]
pub fn footer(props: &Props) -> Html {
    let locale = props.lang.current();
    let links = [
        (Route::About, "menu.about"),
        (Route::Privacy, "menu.privacy"),
        (Route::Imprint, "menu.imprint"),
        (Route::Contact, "menu.contact"),
    ];
    html! {
        <footer class="site-footer">
            <style>{r#"
                .site-footer {
                    padding: 2.5rem 1.5rem;
                    text-align: center;
                    color: rgba(255, 255, 255, 0.85);
                    background: rgba(0, 0, 0, 0.35);
                }
                .site-footer nav {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                    justify-content: center;
                    margin-bottom: 1rem;
                }
                .site-footer a {
                    color: inherit;
                    text-decoration: none;
                }
                .site-footer a:hover { text-decoration: underline; }
                .site-footer .copyright { font-size: 0.85rem; opacity: 0.7; }
            "#}</style>
            <nav>
                { for links.into_iter().map(|(route, key)| html! {
                    <Link<Route> to={route}>{ locale.text(key) }</Link<Route>>
                }) }
            </nav>
            <p class="copyright">{ locale.text("footer.copyright") }</p>
        </footer>
    }
}

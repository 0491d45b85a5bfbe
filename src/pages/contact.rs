use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::footer::Footer;
use crate::i18n::LanguageHandle;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub lang: LanguageHandle,
}

/// Trade contact page: the company's postal details next to the form.
#[function_component(Contact)]
pub fn contact(props: &Props) -> Html {
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
        <div class="static-page contact-page">
            <style>{r#"
                .contact-page {
                    min-height: 100vh;
                    color: white;
                    background: linear-gradient(to bottom, #9333ea, #ec4899, #f97316);
                }
                .contact-page .page-hero {
                    padding: 8rem 1.5rem 1rem;
                    text-align: center;
                }
                .contact-page .company-details {
                    max-width: 640px;
                    margin: 0 auto 1rem;
                    padding: 0 1.5rem;
                    text-align: center;
                    line-height: 1.8;
                }
            "#}</style>
            <header class="page-hero">
                <h1>{ locale.text("contact.title") }</h1>
            </header>
            <address class="company-details">
                <strong>{ locale.text("contact.company") }</strong><br />
                { for locale.list("contact.address").iter().map(|line| html! {
                    <>{ *line }<br /></>
                }) }
                { locale.text("contact.phone") }<br />
                { locale.text("contact.fax") }<br />
                { locale.text("contact.email") }
            </address>
            <ContactForm lang={props.lang.clone()} />
            <Footer lang={props.lang.clone()} />
        </div>
    }
}

use std::collections::BTreeMap;

use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::i18n::LanguageHandle;
use crate::supabase::Supabase;

/// Everything the trade contact form collects. One struct instead of a
/// state handle per field so validation and reset see a single snapshot.
#[derive(Clone, PartialEq, Default)]
pub struct ContactFields {
    pub business_type: String,
    pub company: String,
    pub street: String,
    pub postal_code: String,
    pub city: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub marketing_consent: bool,
    pub privacy_consent: bool,
}

/// Row shape of the `contact_submissions` table. `request_token` lets the
/// server drop a duplicate insert when a submit is retried.
#[derive(Serialize)]
struct ContactSubmissionRow<'a> {
    business_type: &'a str,
    company: &'a str,
    street: &'a str,
    postal_code: &'a str,
    city: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    phone: &'a str,
    email: &'a str,
    message: &'a str,
    marketing_consent: bool,
    privacy_consent: bool,
    status: &'a str,
    request_token: &'a str,
}

#[derive(Clone, PartialEq)]
enum SubmitState {
    Idle,
    Sending,
    Success,
    Failed(String),
}

/// Field id -> translation key of its error message. Every failing field is
/// reported at once, not just the first.
pub fn validate(fields: &ContactFields) -> BTreeMap<&'static str, &'static str> {
    let mut errors = BTreeMap::new();
    if fields.business_type.trim().is_empty() {
        errors.insert("businessType", "form.contact.errors.businessType");
    }
    if fields.company.trim().is_empty() {
        errors.insert("company", "form.contact.errors.company");
    }
    if fields.street.trim().is_empty() {
        errors.insert("street", "form.contact.errors.street");
    }
    if fields.postal_code.trim().is_empty() {
        errors.insert("postalCode", "form.contact.errors.postalCode");
    }
    if fields.city.trim().is_empty() {
        errors.insert("city", "form.contact.errors.city");
    }
    if fields.first_name.trim().is_empty() {
        errors.insert("firstName", "form.contact.errors.firstName");
    }
    if fields.last_name.trim().is_empty() {
        errors.insert("lastName", "form.contact.errors.lastName");
    }
    if fields.email.trim().is_empty() {
        errors.insert("email", "form.contact.errors.email");
    } else if !email_looks_valid(&fields.email) {
        errors.insert("email", "form.contact.errors.emailFormat");
    }
    if !fields.privacy_consent {
        errors.insert("privacyConsent", "form.contact.errors.privacyConsent");
    }
    errors
}

/// Same shape the browser's own loose check accepts: something before the
/// `@`, something after it containing a dot, no whitespace.
pub fn email_looks_valid(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub lang: LanguageHandle,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &Props) -> Html {
    let locale = props.lang.current();
    let fields = use_state(ContactFields::default);
    let errors = use_state(BTreeMap::<&'static str, &'static str>::new);
    let state = use_state(|| SubmitState::Idle);
    // One token per form fill: a retry of the same submission reuses it so
    // the server can deduplicate, a fresh form gets a fresh one.
    let request_token = use_state(|| uuid::Uuid::new_v4().to_string());

    let text_input = |field: fn(&mut ContactFields, String)| {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*fields).clone();
            field(&mut next, value);
            fields.set(next);
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        let errors = errors.clone();
        let state = state.clone();
        let request_token = request_token.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *state == SubmitState::Sending {
                return;
            }
            let found = validate(&fields);
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(BTreeMap::new());
            state.set(SubmitState::Sending);

            let snapshot = (*fields).clone();
            let token = (*request_token).clone();
            let fields = fields.clone();
            let state = state.clone();
            let request_token = request_token.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let row = ContactSubmissionRow {
                    business_type: &snapshot.business_type,
                    company: &snapshot.company,
                    street: &snapshot.street,
                    postal_code: &snapshot.postal_code,
                    city: &snapshot.city,
                    first_name: &snapshot.first_name,
                    last_name: &snapshot.last_name,
                    phone: &snapshot.phone,
                    email: &snapshot.email,
                    message: &snapshot.message,
                    marketing_consent: snapshot.marketing_consent,
                    privacy_consent: snapshot.privacy_consent,
                    status: "new",
                    request_token: &token,
                };
                match Supabase::new().from("contact_submissions").insert(&row).await {
                    Ok(()) => {
                        fields.set(ContactFields::default());
                        request_token.set(uuid::Uuid::new_v4().to_string());
                        state.set(SubmitState::Success);
                        let state = state.clone();
                        gloo_timers::callback::Timeout::new(5_000, move || {
                            state.set(SubmitState::Idle);
                        })
                        .forget();
                    }
                    Err(err) => {
                        gloo_console::log!("Contact submission failed:", err.to_string());
                        state.set(SubmitState::Failed(err.to_string()));
                    }
                }
            });
        })
    };

    let field_error = |field: &str| -> Html {
        match errors.get(field) {
            Some(&key) => html! { <p class="field-error">{ locale.text(key) }</p> },
            None => html! {},
        }
    };

    let business_types = [
        ("restaurant", "form.contact.businessType.restaurant"),
        ("supplier", "form.contact.businessType.supplier"),
        ("hotel", "form.contact.businessType.hotel"),
        ("bar", "form.contact.businessType.bar"),
    ];

    html! {
        <section class="contact-form">
            <style>{r#"
                .contact-form {
                    max-width: 640px;
                    margin: 0 auto;
                    padding: 2rem 1.5rem 4rem;
                }
                .contact-form h2 {
                    font-size: 2rem;
                    margin-bottom: 1.5rem;
                    text-align: center;
                }
                .contact-form .row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .contact-form label {
                    display: block;
                    margin: 1rem 0 0.25rem;
                    font-weight: 600;
                }
                .contact-form input[type="text"],
                .contact-form input[type="email"],
                .contact-form input[type="tel"],
                .contact-form select,
                .contact-form textarea {
                    width: 100%;
                    padding: 0.75rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.9);
                    font-size: 1rem;
                }
                .contact-form .checkbox {
                    display: flex;
                    gap: 0.5rem;
                    align-items: flex-start;
                    margin-top: 1rem;
                }
                .contact-form .field-error {
                    color: #fecaca;
                    font-size: 0.85rem;
                    margin: 0.25rem 0 0;
                }
                .contact-form button[type="submit"] {
                    margin-top: 1.5rem;
                    width: 100%;
                    padding: 0.9rem;
                    border: none;
                    border-radius: 999px;
                    font-size: 1.1rem;
                    font-weight: 700;
                    cursor: pointer;
                    background: linear-gradient(to right, #facc15, #f97316);
                }
                .contact-form button[disabled] {
                    opacity: 0.6;
                    cursor: wait;
                }
                .form-banner {
                    margin-top: 1.5rem;
                    padding: 1rem;
                    border-radius: 0.5rem;
                    text-align: center;
                }
                .form-banner.success { background: rgba(22, 163, 74, 0.85); }
                .form-banner.error { background: rgba(220, 38, 38, 0.85); }
            "#}</style>
            <h2>{ locale.text("form.contact.title") }</h2>
            <form onsubmit={onsubmit}>
                <label for="businessType">{ locale.text("form.contact.businessType.label") }</label>
                <select
                    id="businessType"
                    value={fields.business_type.clone()}
                    onchange={{
                        let fields = fields.clone();
                        Callback::from(move |e: Event| {
                            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                            let mut next = (*fields).clone();
                            next.business_type = value;
                            fields.set(next);
                        })
                    }}
                >
                    <option value="" selected={fields.business_type.is_empty()}>
                        { locale.text("form.contact.businessType.placeholder") }
                    </option>
                    { for business_types.iter().map(|&(value, key)| html! {
                        <option value={value} selected={fields.business_type == value}>
                            { locale.text(key) }
                        </option>
                    }) }
                </select>
                { field_error("businessType") }

                <label for="company">{ locale.text("form.contact.company") }</label>
                <input type="text" id="company" value={fields.company.clone()}
                    oninput={text_input(|f, v| f.company = v)} />
                { field_error("company") }

                <label for="street">{ locale.text("form.contact.street") }</label>
                <input type="text" id="street" value={fields.street.clone()}
                    oninput={text_input(|f, v| f.street = v)} />
                { field_error("street") }

                <div class="row">
                    <div>
                        <label for="postalCode">{ locale.text("form.contact.postalCode") }</label>
                        <input type="text" id="postalCode" value={fields.postal_code.clone()}
                            oninput={text_input(|f, v| f.postal_code = v)} />
                        { field_error("postalCode") }
                    </div>
                    <div>
                        <label for="city">{ locale.text("form.contact.city") }</label>
                        <input type="text" id="city" value={fields.city.clone()}
                            oninput={text_input(|f, v| f.city = v)} />
                        { field_error("city") }
                    </div>
                </div>

                <div class="row">
                    <div>
                        <label for="firstName">{ locale.text("form.contact.firstName") }</label>
                        <input type="text" id="firstName" value={fields.first_name.clone()}
                            oninput={text_input(|f, v| f.first_name = v)} />
                        { field_error("firstName") }
                    </div>
                    <div>
                        <label for="lastName">{ locale.text("form.contact.lastName") }</label>
                        <input type="text" id="lastName" value={fields.last_name.clone()}
                            oninput={text_input(|f, v| f.last_name = v)} />
                        { field_error("lastName") }
                    </div>
                </div>

                <label for="phone">{ locale.text("form.contact.phone") }</label>
                <input type="tel" id="phone" value={fields.phone.clone()}
                    oninput={text_input(|f, v| f.phone = v)} />

                <label for="email">{ locale.text("form.contact.email") }</label>
                <input type="email" id="email" value={fields.email.clone()}
                    oninput={text_input(|f, v| f.email = v)} />
                { field_error("email") }

                <label for="message">{ locale.text("form.contact.message") }</label>
                <textarea id="message" rows="5" value={fields.message.clone()}
                    oninput={{
                        let fields = fields.clone();
                        Callback::from(move |e: InputEvent| {
                            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                            let mut next = (*fields).clone();
                            next.message = value;
                            fields.set(next);
                        })
                    }} />

                <div class="checkbox">
                    <input type="checkbox" id="marketingConsent"
                        checked={fields.marketing_consent}
                        onchange={{
                            let fields = fields.clone();
                            Callback::from(move |e: Event| {
                                let checked = e.target_unchecked_into::<HtmlInputElement>().checked();
                                let mut next = (*fields).clone();
                                next.marketing_consent = checked;
                                fields.set(next);
                            })
                        }} />
                    <label for="marketingConsent">{ locale.text("form.contact.marketingConsent") }</label>
                </div>

                <div class="checkbox">
                    <input type="checkbox" id="privacyConsent"
                        checked={fields.privacy_consent}
                        onchange={{
                            let fields = fields.clone();
                            Callback::from(move |e: Event| {
                                let checked = e.target_unchecked_into::<HtmlInputElement>().checked();
                                let mut next = (*fields).clone();
                                next.privacy_consent = checked;
                                fields.set(next);
                            })
                        }} />
                    <label for="privacyConsent">{ locale.text("form.contact.privacyConsent") }</label>
                </div>
                { field_error("privacyConsent") }

                <button type="submit" disabled={*state == SubmitState::Sending}>
                    { if *state == SubmitState::Sending {
                        locale.text("form.contact.sending")
                    } else {
                        locale.text("form.contact.submit")
                    } }
                </button>
            </form>
            {
                match &*state {
                    SubmitState::Success => html! {
                        <div class="form-banner success">
                            <strong>{ locale.text("form.contact.success.title") }</strong>
                            <p>{ locale.text("form.contact.success.body") }</p>
                        </div>
                    },
                    SubmitState::Failed(message) => html! {
                        <div class="form-banner error">
                            <strong>{ locale.text("form.contact.error.title") }</strong>
                            <p>{ if message.is_empty() {
                                locale.text("form.contact.error.fallback").to_string()
                            } else {
                                message.clone()
                            } }</p>
                        </div>
                    },
                    _ => html! {},
                }
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            business_type: "restaurant".into(),
            company: "Club Tropicana".into(),
            street: "Sonnenallee 1".into(),
            postal_code: "12045".into(),
            city: "Berlin".into(),
            first_name: "Ada".into(),
            last_name: "Okafor".into(),
            phone: "+49 30 1234567".into(),
            email: "ada@example.com".into(),
            message: "Please send a price list.".into(),
            marketing_consent: false,
            privacy_consent: true,
        }
    }

    #[test]
    fn a_filled_form_validates_clean() {
        assert!(validate(&filled()).is_empty());
    }

    #[test]
    fn every_missing_field_is_reported_at_once() {
        let errors = validate(&ContactFields::default());
        for field in [
            "businessType",
            "company",
            "street",
            "postalCode",
            "city",
            "firstName",
            "lastName",
            "email",
            "privacyConsent",
        ] {
            assert!(errors.contains_key(field), "missing error for {field}");
        }
        // Phone, message and marketing consent are optional.
        assert!(!errors.contains_key("phone"));
        assert!(!errors.contains_key("message"));
        assert!(!errors.contains_key("marketingConsent"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut fields = filled();
        fields.company = "   ".into();
        assert_eq!(
            validate(&fields).get("company"),
            Some(&"form.contact.errors.company")
        );
    }

    #[test]
    fn bad_email_gets_the_format_message() {
        let mut fields = filled();
        fields.email = "not-an-address".into();
        assert_eq!(
            validate(&fields).get("email"),
            Some(&"form.contact.errors.emailFormat")
        );
        fields.email = String::new();
        assert_eq!(
            validate(&fields).get("email"),
            Some(&"form.contact.errors.email")
        );
    }

    #[test]
    fn email_shape_check() {
        assert!(email_looks_valid("a@b.co"));
        assert!(email_looks_valid("first.last@mail.example.de"));
        assert!(!email_looks_valid("a@b"));
        assert!(!email_looks_valid("@b.co"));
        assert!(!email_looks_valid("a b@c.de"));
        assert!(!email_looks_valid("a@@b.co"));
        assert!(!email_looks_valid("a@.co"));
    }
}

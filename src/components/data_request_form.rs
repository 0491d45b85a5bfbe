use std::collections::BTreeMap;

use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::contact_form::email_looks_valid;
use crate::i18n::LanguageHandle;
use crate::supabase::Supabase;

/// GDPR request categories. The wire form is the lowercase name stored in
/// the `request_type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    Access,
    Delete,
    Rectify,
    Restrict,
    Portability,
    Object,
}

impl RequestType {
    pub const ALL: [RequestType; 6] = [
        RequestType::Access,
        RequestType::Delete,
        RequestType::Rectify,
        RequestType::Restrict,
        RequestType::Portability,
        RequestType::Object,
    ];

    pub fn value(self) -> &'static str {
        match self {
            RequestType::Access => "access",
            RequestType::Delete => "delete",
            RequestType::Rectify => "rectify",
            RequestType::Restrict => "restrict",
            RequestType::Portability => "portability",
            RequestType::Object => "object",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }

    pub fn label_key(self) -> &'static str {
        match self {
            RequestType::Access => "form.dataRequest.types.access",
            RequestType::Delete => "form.dataRequest.types.delete",
            RequestType::Rectify => "form.dataRequest.types.rectify",
            RequestType::Restrict => "form.dataRequest.types.restrict",
            RequestType::Portability => "form.dataRequest.types.portability",
            RequestType::Object => "form.dataRequest.types.object",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct RequestFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub request_type: RequestType,
    pub message: String,
    pub consent: bool,
}

impl Default for RequestFields {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            request_type: RequestType::Access,
            message: String::new(),
            consent: false,
        }
    }
}

#[derive(Serialize)]
struct DataRequestRow<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    request_type: RequestType,
    message: &'a str,
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

pub fn validate(fields: &RequestFields) -> BTreeMap<&'static str, &'static str> {
    let mut errors = BTreeMap::new();
    if fields.first_name.trim().is_empty() {
        errors.insert("firstName", "form.dataRequest.errors.firstName");
    }
    if fields.last_name.trim().is_empty() {
        errors.insert("lastName", "form.dataRequest.errors.lastName");
    }
    if fields.email.trim().is_empty() {
        errors.insert("email", "form.dataRequest.errors.email");
    } else if !email_looks_valid(&fields.email) {
        errors.insert("email", "form.dataRequest.errors.emailFormat");
    }
    if fields.message.trim().is_empty() {
        errors.insert("message", "form.dataRequest.errors.message");
    }
    if !fields.consent {
        errors.insert("consent", "form.dataRequest.errors.consent");
    }
    errors
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub lang: LanguageHandle,
}

#[function_component(DataRequestForm)]
pub fn data_request_form(props: &Props) -> Html {
    let locale = props.lang.current();
    let fields = use_state(RequestFields::default);
    let errors = use_state(BTreeMap::<&'static str, &'static str>::new);
    let state = use_state(|| SubmitState::Idle);
    let request_token = use_state(|| uuid::Uuid::new_v4().to_string());

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
                let row = DataRequestRow {
                    first_name: &snapshot.first_name,
                    last_name: &snapshot.last_name,
                    email: &snapshot.email,
                    request_type: snapshot.request_type,
                    message: &snapshot.message,
                    status: "pending",
                    request_token: &token,
                };
                match Supabase::new().from("data_requests").insert(&row).await {
                    Ok(()) => {
                        fields.set(RequestFields::default());
                        request_token.set(uuid::Uuid::new_v4().to_string());
                        state.set(SubmitState::Success);
                        let state = state.clone();
                        gloo_timers::callback::Timeout::new(5_000, move || {
                            state.set(SubmitState::Idle);
                        })
                        .forget();
                    }
                    Err(err) => {
                        gloo_console::log!("Data request failed:", err.to_string());
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

    html! {
        <section class="data-request-form">
            <style>{r#"
                .data-request-form {
                    max-width: 640px;
                    margin: 3rem auto 0;
                    padding: 2rem;
                    border-radius: 1rem;
                    background: rgba(0, 0, 0, 0.25);
                }
                .data-request-form h2 {
                    font-size: 1.6rem;
                    margin-bottom: 0.5rem;
                }
                .data-request-form .intro {
                    margin-bottom: 1rem;
                    opacity: 0.85;
                }
                .data-request-form label {
                    display: block;
                    margin: 1rem 0 0.25rem;
                    font-weight: 600;
                }
                .data-request-form input,
                .data-request-form select,
                .data-request-form textarea {
                    width: 100%;
                    padding: 0.7rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.9);
                    font-size: 1rem;
                }
                .data-request-form .checkbox {
                    display: flex;
                    gap: 0.5rem;
                    align-items: flex-start;
                    margin-top: 1rem;
                }
                .data-request-form .checkbox input { width: auto; }
                .data-request-form .field-error {
                    color: #fecaca;
                    font-size: 0.85rem;
                    margin: 0.25rem 0 0;
                }
                .data-request-form button[type="submit"] {
                    margin-top: 1.5rem;
                    padding: 0.8rem 2rem;
                    border: none;
                    border-radius: 999px;
                    font-weight: 700;
                    cursor: pointer;
                    background: linear-gradient(to right, #a855f7, #f472b6);
                    color: white;
                }
                .data-request-form button[disabled] {
                    opacity: 0.6;
                    cursor: wait;
                }
            "#}</style>
            <h2>{ locale.text("form.dataRequest.title") }</h2>
            <p class="intro">{ locale.text("form.dataRequest.intro") }</p>
            <form onsubmit={onsubmit}>
                <label for="dr-firstName">{ locale.text("form.dataRequest.firstName") }</label>
                <input type="text" id="dr-firstName" value={fields.first_name.clone()}
                    oninput={{
                        let fields = fields.clone();
                        Callback::from(move |e: InputEvent| {
                            let value = e.target_unchecked_into::<HtmlInputElement>().value();
                            let mut next = (*fields).clone();
                            next.first_name = value;
                            fields.set(next);
                        })
                    }} />
                { field_error("firstName") }

                <label for="dr-lastName">{ locale.text("form.dataRequest.lastName") }</label>
                <input type="text" id="dr-lastName" value={fields.last_name.clone()}
                    oninput={{
                        let fields = fields.clone();
                        Callback::from(move |e: InputEvent| {
                            let value = e.target_unchecked_into::<HtmlInputElement>().value();
                            let mut next = (*fields).clone();
                            next.last_name = value;
                            fields.set(next);
                        })
                    }} />
                { field_error("lastName") }

                <label for="dr-email">{ locale.text("form.dataRequest.email") }</label>
                <input type="email" id="dr-email" value={fields.email.clone()}
                    oninput={{
                        let fields = fields.clone();
                        Callback::from(move |e: InputEvent| {
                            let value = e.target_unchecked_into::<HtmlInputElement>().value();
                            let mut next = (*fields).clone();
                            next.email = value;
                            fields.set(next);
                        })
                    }} />
                { field_error("email") }

                <label for="dr-requestType">{ locale.text("form.dataRequest.requestType") }</label>
                <select id="dr-requestType"
                    onchange={{
                        let fields = fields.clone();
                        Callback::from(move |e: Event| {
                            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                            if let Some(request_type) = RequestType::from_value(&value) {
                                let mut next = (*fields).clone();
                                next.request_type = request_type;
                                fields.set(next);
                            }
                        })
                    }}
                >
                    { for RequestType::ALL.into_iter().map(|t| html! {
                        <option value={t.value()} selected={fields.request_type == t}>
                            { locale.text(t.label_key()) }
                        </option>
                    }) }
                </select>

                <label for="dr-message">{ locale.text("form.dataRequest.message") }</label>
                <textarea id="dr-message" rows="4" value={fields.message.clone()}
                    oninput={{
                        let fields = fields.clone();
                        Callback::from(move |e: InputEvent| {
                            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                            let mut next = (*fields).clone();
                            next.message = value;
                            fields.set(next);
                        })
                    }} />
                { field_error("message") }

                <div class="checkbox">
                    <input type="checkbox" id="dr-consent" checked={fields.consent}
                        onchange={{
                            let fields = fields.clone();
                            Callback::from(move |e: Event| {
                                let checked = e.target_unchecked_into::<HtmlInputElement>().checked();
                                let mut next = (*fields).clone();
                                next.consent = checked;
                                fields.set(next);
                            })
                        }} />
                    <label for="dr-consent">{ locale.text("form.dataRequest.consent") }</label>
                </div>
                { field_error("consent") }

                <button type="submit" disabled={*state == SubmitState::Sending}>
                    { if *state == SubmitState::Sending {
                        locale.text("form.dataRequest.sending")
                    } else {
                        locale.text("form.dataRequest.submit")
                    } }
                </button>
            </form>
            {
                match &*state {
                    SubmitState::Success => html! {
                        <div class="form-banner success">
                            <strong>{ locale.text("form.dataRequest.success.title") }</strong>
                            <p>{ locale.text("form.dataRequest.success.body") }</p>
                        </div>
                    },
                    SubmitState::Failed(message) => html! {
                        <div class="form-banner error">
                            <strong>{ locale.text("form.dataRequest.error.title") }</strong>
                            <p>{ if message.is_empty() {
                                locale.text("form.dataRequest.error.fallback").to_string()
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

    fn filled() -> RequestFields {
        RequestFields {
            first_name: "Nia".into(),
            last_name: "Mensah".into(),
            email: "nia@example.com".into(),
            request_type: RequestType::Delete,
            message: "Please remove my contact data.".into(),
            consent: true,
        }
    }

    #[test]
    fn a_filled_request_validates_clean() {
        assert!(validate(&filled()).is_empty());
    }

    #[test]
    fn empty_request_reports_every_required_field() {
        let errors = validate(&RequestFields::default());
        for field in ["firstName", "lastName", "email", "message", "consent"] {
            assert!(errors.contains_key(field), "missing error for {field}");
        }
    }

    #[test]
    fn request_types_round_trip_and_serialize_lowercase() {
        for t in RequestType::ALL {
            assert_eq!(RequestType::from_value(t.value()), Some(t));
            assert_eq!(
                serde_json::to_string(&t).unwrap(),
                format!("\"{}\"", t.value())
            );
        }
        assert_eq!(RequestType::from_value("erase"), None);
    }
}

use serde::{Deserialize, Serialize};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::supabase::Supabase;

// TODO: replace with a server-verified session once the site gets a real
// backend; a client-side check only keeps casual visitors out.
const ADMIN_EMAIL: &str = "info@africadrinks.de";
const ADMIN_PASSWORD: &str = "123456";

/// Workflow state of a submission as stored in the `status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    #[serde(rename = "new")]
    New,
    #[serde(rename = "in_progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 3] = [
        SubmissionStatus::New,
        SubmissionStatus::InProgress,
        SubmissionStatus::Completed,
    ];

    /// Inbox wording shown to the operator.
    pub fn label(self) -> &'static str {
        match self {
            SubmissionStatus::New => "Unread",
            SubmissionStatus::InProgress => "Read",
            SubmissionStatus::Completed => "Replied",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactSubmission {
    pub id: String,
    pub created_at: String,
    pub business_type: String,
    pub company: String,
    pub street: String,
    pub postal_code: String,
    pub city: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub marketing_consent: bool,
    pub status: SubmissionStatus,
}

#[derive(Serialize)]
struct StatusPatch<'a> {
    status: SubmissionStatus,
    updated_at: &'a str,
}

/// `2026-08-29T09:41:03.512Z` -> `2026-08-29 09:41`. Anything shorter is
/// shown as-is rather than dropped.
pub fn format_timestamp(iso: &str) -> String {
    match (iso.get(..10), iso.get(11..16)) {
        (Some(date), Some(time)) if iso.as_bytes().get(10) == Some(&b'T') => {
            format!("{date} {time}")
        }
        _ => iso.to_string(),
    }
}

/// Per-status tallies for the inbox header, in [`SubmissionStatus::ALL`]
/// order.
pub fn status_counts(submissions: &[ContactSubmission]) -> [usize; 3] {
    let mut counts = [0; 3];
    for submission in submissions {
        let slot = SubmissionStatus::ALL
            .iter()
            .position(|s| *s == submission.status)
            .unwrap_or(0);
        counts[slot] += 1;
    }
    counts
}

#[derive(Clone, PartialEq)]
enum Inbox {
    Loading,
    Ready(Vec<ContactSubmission>),
    Failed(String),
}

#[function_component(Admin)]
pub fn admin() -> Html {
    let authenticated = use_state(|| false);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let login_error = use_state(|| None::<String>);
    let inbox = use_state(|| Inbox::Loading);
    let selected = use_state(|| None::<String>);

    let reload = {
        let inbox = inbox.clone();
        Callback::from(move |_: ()| {
            let inbox = inbox.clone();
            inbox.set(Inbox::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match Supabase::new()
                    .from("contact_submissions")
                    .select_ordered::<ContactSubmission>("created_at.desc")
                    .await
                {
                    Ok(rows) => inbox.set(Inbox::Ready(rows)),
                    Err(err) => {
                        gloo_console::log!("Failed to load submissions:", err.to_string());
                        inbox.set(Inbox::Failed(err.to_string()));
                    }
                }
            });
        })
    };

    {
        let reload = reload.clone();
        let authenticated = *authenticated;
        use_effect_with_deps(
            move |logged_in| {
                if *logged_in {
                    reload.emit(());
                }
                || ()
            },
            authenticated,
        );
    }

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let authenticated = authenticated.clone();
        let login_error = login_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *email == ADMIN_EMAIL && *password == ADMIN_PASSWORD {
                login_error.set(None);
                authenticated.set(true);
            } else {
                login_error.set(Some("Invalid credentials".to_string()));
            }
        })
    };

    let set_status = {
        let reload = reload.clone();
        Callback::from(move |(id, status): (String, SubmissionStatus)| {
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let now = String::from(js_sys::Date::new_0().to_iso_string());
                let patch = StatusPatch {
                    status,
                    updated_at: &now,
                };
                match Supabase::new()
                    .from("contact_submissions")
                    .update_by_id(&id, &patch)
                    .await
                {
                    Ok(()) => reload.emit(()),
                    Err(err) => {
                        gloo_console::log!("Failed to update status:", err.to_string());
                    }
                }
            });
        })
    };

    let delete = {
        let reload = reload.clone();
        let selected = selected.clone();
        Callback::from(move |id: String| {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Delete this submission?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let reload = reload.clone();
            let selected = selected.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match Supabase::new()
                    .from("contact_submissions")
                    .delete_by_id(&id)
                    .await
                {
                    Ok(()) => {
                        selected.set(None);
                        reload.emit(());
                    }
                    Err(err) => {
                        gloo_console::log!("Failed to delete submission:", err.to_string());
                    }
                }
            });
        })
    };

    let admin_css = r#"
        .admin {
            min-height: 100vh;
            padding: 2rem 1.5rem;
            background: #0f172a;
            color: #e2e8f0;
            font-size: 0.95rem;
        }
        .admin h1 { margin-top: 0; }
        .admin-login {
            max-width: 360px;
            margin: 6rem auto;
            padding: 2rem;
            border-radius: 1rem;
            background: #1e293b;
        }
        .admin-login label { display: block; margin: 1rem 0 0.25rem; }
        .admin-login input {
            width: 100%;
            padding: 0.6rem;
            border: none;
            border-radius: 0.4rem;
        }
        .admin-login button {
            margin-top: 1.5rem;
            width: 100%;
            padding: 0.7rem;
            border: none;
            border-radius: 0.4rem;
            background: #38bdf8;
            font-weight: 700;
            cursor: pointer;
        }
        .admin-login .error { color: #f87171; margin-top: 1rem; }
        .inbox-counts {
            display: flex;
            gap: 1.5rem;
            margin-bottom: 1.5rem;
        }
        .inbox-counts span { opacity: 0.8; }
        .inbox-table { width: 100%; border-collapse: collapse; }
        .inbox-table th, .inbox-table td {
            padding: 0.6rem 0.75rem;
            text-align: left;
            border-bottom: 1px solid #334155;
        }
        .inbox-table tr.unread { font-weight: 700; }
        .inbox-table tr { cursor: pointer; }
        .inbox-table tr:hover td { background: #1e293b; }
        .submission-detail {
            margin-top: 2rem;
            padding: 1.5rem;
            border-radius: 1rem;
            background: #1e293b;
        }
        .submission-detail .actions {
            display: flex;
            gap: 0.75rem;
            margin-top: 1rem;
        }
        .submission-detail button {
            padding: 0.5rem 1rem;
            border: none;
            border-radius: 0.4rem;
            cursor: pointer;
        }
        .submission-detail button.danger { background: #ef4444; color: white; }
        .admin .banner { padding: 1rem; border-radius: 0.5rem; background: #7f1d1d; }
    "#;

    if !*authenticated {
        return html! {
            <div class="admin">
                <style>{admin_css}</style>
                <form class="admin-login" onsubmit={onsubmit}>
                    <h1>{ "Inbox" }</h1>
                    <label for="admin-email">{ "Email" }</label>
                    <input type="email" id="admin-email" value={(*email).clone()}
                        oninput={{
                            let email = email.clone();
                            Callback::from(move |e: InputEvent| {
                                email.set(e.target_unchecked_into::<HtmlInputElement>().value());
                            })
                        }} />
                    <label for="admin-password">{ "Password" }</label>
                    <input type="password" id="admin-password" value={(*password).clone()}
                        oninput={{
                            let password = password.clone();
                            Callback::from(move |e: InputEvent| {
                                password.set(e.target_unchecked_into::<HtmlInputElement>().value());
                            })
                        }} />
                    <button type="submit">{ "Sign in" }</button>
                    if let Some(message) = &*login_error {
                        <p class="error">{ message.clone() }</p>
                    }
                </form>
            </div>
        };
    }

    let body = match &*inbox {
        Inbox::Loading => html! { <p>{ "Loading submissions…" }</p> },
        Inbox::Failed(message) => html! {
            <div class="banner">{ format!("Could not load submissions: {message}") }</div>
        },
        Inbox::Ready(submissions) => {
            let counts = status_counts(submissions);
            let detail = selected
                .as_ref()
                .and_then(|id| submissions.iter().find(|s| &s.id == id));
            html! {
                <>
                    <div class="inbox-counts">
                        <span>{ format!("Total: {}", submissions.len()) }</span>
                        { for SubmissionStatus::ALL.iter().zip(counts).map(|(status, count)| html! {
                            <span>{ format!("{}: {count}", status.label()) }</span>
                        }) }
                    </div>
                    <table class="inbox-table">
                        <thead>
                            <tr>
                                <th>{ "Received" }</th>
                                <th>{ "Company" }</th>
                                <th>{ "Contact" }</th>
                                <th>{ "Status" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for submissions.iter().map(|submission| {
                                let row_class = if submission.status == SubmissionStatus::New {
                                    "unread"
                                } else {
                                    ""
                                };
                                let onclick = {
                                    let selected = selected.clone();
                                    let set_status = set_status.clone();
                                    let id = submission.id.clone();
                                    let status = submission.status;
                                    Callback::from(move |_: MouseEvent| {
                                        selected.set(Some(id.clone()));
                                        // Opening an unread submission marks it read.
                                        if status == SubmissionStatus::New {
                                            set_status
                                                .emit((id.clone(), SubmissionStatus::InProgress));
                                        }
                                    })
                                };
                                html! {
                                    <tr class={row_class} {onclick}>
                                        <td>{ format_timestamp(&submission.created_at) }</td>
                                        <td>{ submission.company.clone() }</td>
                                        <td>{ format!("{} {} <{}>",
                                            submission.first_name,
                                            submission.last_name,
                                            submission.email) }</td>
                                        <td>{ submission.status.label() }</td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                    if let Some(submission) = detail {
                        <div class="submission-detail">
                            <h2>{ format!("{} — {}", submission.company,
                                format_timestamp(&submission.created_at)) }</h2>
                            <p>{ format!("{} {} · {} · {}",
                                submission.first_name,
                                submission.last_name,
                                submission.email,
                                submission.phone) }</p>
                            <p>{ format!("{}, {} {} {}",
                                submission.street,
                                submission.postal_code,
                                submission.city,
                                submission.business_type) }</p>
                            <p>{ submission.message.clone() }</p>
                            <p>{ format!("Marketing consent: {}",
                                if submission.marketing_consent { "yes" } else { "no" }) }</p>
                            <div class="actions">
                                { for SubmissionStatus::ALL.iter().map(|status| {
                                    let set_status = set_status.clone();
                                    let id = submission.id.clone();
                                    let status = *status;
                                    let onclick = Callback::from(move |_: MouseEvent| {
                                        set_status.emit((id.clone(), status));
                                    });
                                    html! {
                                        <button disabled={submission.status == status} {onclick}>
                                            { status.label() }
                                        </button>
                                    }
                                }) }
                                <button class="danger" onclick={{
                                    let delete = delete.clone();
                                    let id = submission.id.clone();
                                    Callback::from(move |_: MouseEvent| delete.emit(id.clone()))
                                }}>{ "Delete" }</button>
                            </div>
                        </div>
                    }
                </>
            }
        }
    };

    html! {
        <div class="admin">
            <style>{admin_css}</style>
            <h1>{ "Inbox" }</h1>
            { body }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(id: &str, status: SubmissionStatus) -> ContactSubmission {
        ContactSubmission {
            id: id.to_string(),
            created_at: "2026-08-29T09:41:03.512Z".to_string(),
            business_type: "bar".to_string(),
            company: "Club Tropicana".to_string(),
            street: "Sonnenallee 1".to_string(),
            postal_code: "12045".to_string(),
            city: "Berlin".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Okafor".to_string(),
            phone: String::new(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
            marketing_consent: false,
            status,
        }
    }

    #[test]
    fn timestamps_render_date_and_minutes() {
        assert_eq!(
            format_timestamp("2026-08-29T09:41:03.512Z"),
            "2026-08-29 09:41"
        );
        assert_eq!(format_timestamp("2026-08-29"), "2026-08-29");
        assert_eq!(format_timestamp(""), "");
    }

    #[test]
    fn counts_follow_status_order() {
        let submissions = vec![
            submission("1", SubmissionStatus::New),
            submission("2", SubmissionStatus::New),
            submission("3", SubmissionStatus::InProgress),
            submission("4", SubmissionStatus::Completed),
        ];
        assert_eq!(status_counts(&submissions), [2, 1, 1]);
        assert_eq!(status_counts(&[]), [0, 0, 0]);
    }

    #[test]
    fn status_wire_form_matches_the_table() {
        assert_eq!(
            serde_json::to_string(&SubmissionStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        let parsed: SubmissionStatus = serde_json::from_str("\"new\"").unwrap();
        assert_eq!(parsed, SubmissionStatus::New);
    }

    #[test]
    fn rows_tolerate_missing_optional_columns() {
        let row = r#"{
            "id": "abc",
            "created_at": "2026-08-29T09:41:03.512Z",
            "business_type": "hotel",
            "company": "Hotel Savanne",
            "street": "Hauptstr. 9",
            "postal_code": "10115",
            "city": "Berlin",
            "first_name": "Kofi",
            "last_name": "Addo",
            "email": "kofi@example.com",
            "status": "completed"
        }"#;
        let parsed: ContactSubmission = serde_json::from_str(row).unwrap();
        assert_eq!(parsed.status, SubmissionStatus::Completed);
        assert!(parsed.phone.is_empty());
        assert!(parsed.message.is_empty());
    }
}

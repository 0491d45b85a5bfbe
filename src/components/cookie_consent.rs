use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;
use yew::prelude::*;

use crate::i18n::LanguageHandle;

const CONSENT_COOKIE: &str = "afrosoda_cookie_consent";
const CONSENT_DAYS: u32 = 365;

/// Stored consent decision. `necessary` is always true; the banner only
/// lets visitors toggle the other three categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookiePreferences {
    pub necessary: bool,
    pub functional: bool,
    pub analytics: bool,
    pub marketing: bool,
}

impl CookiePreferences {
    pub fn all_accepted() -> Self {
        Self {
            necessary: true,
            functional: true,
            analytics: true,
            marketing: true,
        }
    }

    pub fn necessary_only() -> Self {
        Self {
            necessary: true,
            functional: false,
            analytics: false,
            marketing: false,
        }
    }
}

impl Default for CookiePreferences {
    fn default() -> Self {
        Self::necessary_only()
    }
}

/// Value of `name` inside a `document.cookie` header, if present.
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

pub fn parse_preferences(raw: &str) -> Option<CookiePreferences> {
    let decoded = decode_value(raw)?;
    let mut parsed: CookiePreferences = serde_json::from_str(&decoded).ok()?;
    // A tampered cookie cannot opt out of necessary cookies.
    parsed.necessary = true;
    Some(parsed)
}

/// Set-cookie string for the consent decision, valid for a year. The JSON
/// payload is percent-encoded per RFC 6265.
pub fn consent_cookie(preferences: &CookiePreferences) -> String {
    let value = encode_value(&serde_json::to_string(preferences).unwrap_or_default());
    let max_age = u64::from(CONSENT_DAYS) * 24 * 60 * 60;
    format!("{CONSENT_COOKIE}={value}; max-age={max_age}; path=/; SameSite=Lax")
}

fn encode_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Inverse of [`encode_value`]. Unencoded input (a cookie written by an
/// older build) passes through untouched.
fn decode_value(value: &str) -> Option<String> {
    let mut bytes = Vec::with_capacity(value.len());
    let mut rest = value.bytes();
    while let Some(byte) = rest.next() {
        if byte == b'%' {
            let pair = [rest.next()?, rest.next()?];
            let hex = std::str::from_utf8(&pair).ok()?;
            bytes.push(u8::from_str_radix(hex, 16).ok()?);
        } else {
            bytes.push(byte);
        }
    }
    String::from_utf8(bytes).ok()
}

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into().ok()
}

fn stored_preferences() -> Option<CookiePreferences> {
    let header = html_document()?.cookie().ok()?;
    parse_preferences(find_cookie(&header, CONSENT_COOKIE)?)
}

fn store_preferences(preferences: &CookiePreferences) {
    if let Some(document) = html_document() {
        if let Err(err) = document.set_cookie(&consent_cookie(preferences)) {
            gloo_console::log!("Failed to store cookie consent:", err);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub lang: LanguageHandle,
}

#[function_component(CookieConsent)]
pub fn cookie_consent(props: &Props) -> Html {
    let locale = props.lang.current();
    let decided = use_state(|| stored_preferences().is_some());
    let show_preferences = use_state(|| false);
    let draft = use_state(CookiePreferences::default);

    if *decided {
        return html! {};
    }

    let decide = |preferences: CookiePreferences| {
        let decided = decided.clone();
        Callback::from(move |_: MouseEvent| {
            store_preferences(&preferences);
            decided.set(true);
        })
    };

    let save_draft = {
        let decided = decided.clone();
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            store_preferences(&draft);
            decided.set(true);
        })
    };

    let toggle_panel = {
        let show_preferences = show_preferences.clone();
        Callback::from(move |_: MouseEvent| show_preferences.set(!*show_preferences))
    };

    let category_row = |name_key: &'static str,
                        description_key: &'static str,
                        checked: bool,
                        disabled: bool,
                        update: Option<fn(&mut CookiePreferences, bool)>|
     -> Html {
        let onchange = match update {
            Some(update) => {
                let draft = draft.clone();
                Callback::from(move |e: Event| {
                    let checked = e
                        .target_unchecked_into::<web_sys::HtmlInputElement>()
                        .checked();
                    let mut next = *draft;
                    update(&mut next, checked);
                    draft.set(next);
                })
            }
            None => Callback::noop(),
        };
        html! {
            <div class="cookie-category">
                <label>
                    <input type="checkbox" {checked} {disabled} {onchange} />
                    <strong>{ locale.text(name_key) }</strong>
                </label>
                <p>{ locale.text(description_key) }</p>
            </div>
        }
    };

    html! {
        <div class="cookie-consent">
            <style>{r#"
                .cookie-consent {
                    position: fixed;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    z-index: 60;
                    padding: 1.25rem 1.5rem;
                    background: rgba(17, 17, 17, 0.95);
                    color: white;
                }
                .cookie-consent h3 { margin: 0 0 0.5rem; }
                .cookie-consent .actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin-top: 1rem;
                }
                .cookie-consent button {
                    padding: 0.6rem 1.25rem;
                    border: none;
                    border-radius: 999px;
                    font-weight: 600;
                    cursor: pointer;
                }
                .cookie-consent button.primary {
                    background: linear-gradient(to right, #facc15, #f97316);
                }
                .cookie-consent button.secondary {
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.5);
                    color: white;
                }
                .cookie-category {
                    padding: 0.5rem 0;
                    border-top: 1px solid rgba(255, 255, 255, 0.15);
                }
                .cookie-category label {
                    display: flex;
                    gap: 0.5rem;
                    align-items: center;
                }
                .cookie-category p {
                    margin: 0.25rem 0 0 1.75rem;
                    font-size: 0.85rem;
                    opacity: 0.8;
                }
            "#}</style>
            <h3>{ locale.text("cookies.banner.title") }</h3>
            <p>{ locale.text("cookies.banner.body") }</p>
            if *show_preferences {
                <div class="cookie-categories">
                    { category_row(
                        "cookies.categories.necessary.name",
                        "cookies.categories.necessary.description",
                        true,
                        true,
                        None,
                    ) }
                    { category_row(
                        "cookies.categories.functional.name",
                        "cookies.categories.functional.description",
                        draft.functional,
                        false,
                        Some(|p, v| p.functional = v),
                    ) }
                    { category_row(
                        "cookies.categories.analytics.name",
                        "cookies.categories.analytics.description",
                        draft.analytics,
                        false,
                        Some(|p, v| p.analytics = v),
                    ) }
                    { category_row(
                        "cookies.categories.marketing.name",
                        "cookies.categories.marketing.description",
                        draft.marketing,
                        false,
                        Some(|p, v| p.marketing = v),
                    ) }
                </div>
            }
            <div class="actions">
                <button class="primary" onclick={decide(CookiePreferences::all_accepted())}>
                    { locale.text("cookies.acceptAll") }
                </button>
                <button class="secondary" onclick={decide(CookiePreferences::necessary_only())}>
                    { locale.text("cookies.rejectAll") }
                </button>
                if *show_preferences {
                    <button class="primary" onclick={save_draft}>
                        { locale.text("cookies.save") }
                    </button>
                } else {
                    <button class="secondary" onclick={toggle_panel}>
                        { locale.text("cookies.preferences") }
                    </button>
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_value_is_found_in_a_header() {
        let header = "theme=dark; afrosoda_cookie_consent={\"necessary\":true}; _ga=GA1.2";
        assert_eq!(
            find_cookie(header, CONSENT_COOKIE),
            Some("{\"necessary\":true}")
        );
        assert_eq!(find_cookie(header, "missing"), None);
        assert_eq!(find_cookie("", CONSENT_COOKIE), None);
    }

    #[test]
    fn stored_decision_round_trips() {
        let prefs = CookiePreferences {
            necessary: true,
            functional: true,
            analytics: false,
            marketing: true,
        };
        let cookie = consent_cookie(&prefs);
        assert!(cookie.starts_with("afrosoda_cookie_consent="));
        assert!(cookie.contains("max-age=31536000"));
        assert!(cookie.contains("path=/"));

        let value = find_cookie(&cookie, CONSENT_COOKIE).unwrap();
        // The payload is percent-encoded, so none of the JSON punctuation
        // leaks into the cookie header.
        assert!(!value.contains('"'));
        assert!(!value.contains(','));
        assert!(!value.contains(';'));
        assert_eq!(parse_preferences(value), Some(prefs));
    }

    #[test]
    fn legacy_unencoded_payloads_still_parse() {
        let raw = r#"{"necessary":true,"functional":true,"analytics":false,"marketing":false}"#;
        let parsed = parse_preferences(raw).unwrap();
        assert!(parsed.functional);
        assert!(!parsed.analytics);
    }

    #[test]
    fn percent_decoding_rejects_truncated_escapes() {
        assert_eq!(decode_value("%7B%22a%22%3A1%7D"), Some("{\"a\":1}".to_string()));
        assert_eq!(decode_value("%7"), None);
        assert_eq!(decode_value("%ZZ"), None);
    }

    #[test]
    fn necessary_cannot_be_opted_out() {
        let parsed = parse_preferences(
            r#"{"necessary":false,"functional":false,"analytics":false,"marketing":false}"#,
        )
        .unwrap();
        assert!(parsed.necessary);
    }

    #[test]
    fn garbage_cookie_is_treated_as_no_decision() {
        assert_eq!(parse_preferences("not json"), None);
        assert_eq!(parse_preferences(""), None);
    }
}

//! Display-language selection and translation lookup. The active locale
//! lives in the App root, is persisted under one local-storage key and is
//! re-broadcast as a `storage` event so other open tabs converge.

mod de;
mod en;

use thiserror::Error;
use yew::UseStateHandle;

const STORAGE_KEY: &str = "preferredLanguage";

/// A translated value: a single string or an ordered list of strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    One(&'static str),
    Many(&'static [&'static str]),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("missing translation {locale}:{key}")]
pub struct MissingKey {
    pub locale: &'static str,
    pub key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    De,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        // Older builds persisted the code JSON-encoded; accept the quoted
        // form so those visitors keep their language.
        let code = code.trim().trim_matches('"');
        match code.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Some(Locale::En),
            "de" | "de-de" | "de-at" | "de-ch" => Some(Locale::De),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Locale::En => Locale::De,
            Locale::De => Locale::En,
        }
    }

    /// Typed lookup: a miss names the full path it failed on.
    pub fn try_lookup(self, key: &str) -> Result<Text, MissingKey> {
        let found = match self {
            Locale::En => en::lookup(key),
            Locale::De => de::lookup(key),
        };
        found.ok_or_else(|| MissingKey {
            locale: self.code(),
            key: key.to_string(),
        })
    }

    /// Scalar value for rendering. Falls back to the key itself so a missing
    /// or mistyped path shows up on screen instead of crashing.
    pub fn text(self, key: &'static str) -> &'static str {
        match self.try_lookup(key) {
            Ok(Text::One(s)) => s,
            Ok(Text::Many(items)) => items.first().copied().unwrap_or(key),
            Err(_) => key,
        }
    }

    /// List value for rendering. A scalar hit or a miss yields an empty
    /// slice; callers iterate whatever they get.
    pub fn list(self, key: &'static str) -> &'static [&'static str] {
        match self.try_lookup(key) {
            Ok(Text::Many(items)) => items,
            _ => &[],
        }
    }
}

/// Read the persisted locale; anything missing or unrecognized is the
/// primary default.
pub fn load_locale() -> Locale {
    use gloo_storage::Storage;
    gloo_storage::LocalStorage::raw()
        .get_item(STORAGE_KEY)
        .ok()
        .flatten()
        .and_then(|code| Locale::from_code(&code))
        .unwrap_or(Locale::En)
}

fn persist_locale(locale: Locale) {
    use gloo_storage::Storage;
    // Stored as the bare two-letter code. Sibling tabs see exactly this
    // string in their native storage event, so it must parse as-is.
    if let Err(err) = gloo_storage::LocalStorage::raw().set_item(STORAGE_KEY, locale.code()) {
        gloo_console::log!("Failed to persist locale:", err);
    }
    broadcast_locale(locale);
}

/// Re-dispatch the change as a `storage` event so listeners in this tab and
/// any sibling tab pick it up.
fn broadcast_locale(locale: Locale) {
    if let Some(window) = web_sys::window() {
        let init = web_sys::StorageEventInit::new();
        init.set_key(Some(STORAGE_KEY));
        init.set_new_value(Some(locale.code()));
        if let Ok(event) = web_sys::StorageEvent::new_with_event_init_dict("storage", &init) {
            let _ = window.dispatch_event(&event);
        }
    }
}

/// Locale service constructed once at the App root and passed down through
/// props. Mutation goes through [`LanguageHandle::set`] only.
#[derive(Clone, PartialEq)]
pub struct LanguageHandle {
    state: UseStateHandle<Locale>,
}

impl LanguageHandle {
    pub fn new(state: UseStateHandle<Locale>) -> Self {
        Self { state }
    }

    pub fn current(&self) -> Locale {
        *self.state
    }

    pub fn set(&self, locale: Locale) {
        if locale != *self.state {
            persist_locale(locale);
            self.state.set(locale);
        }
    }

    pub fn toggle(&self) {
        self.set(self.current().other());
    }

    /// Apply a change broadcast from another tab without re-persisting.
    pub fn apply_broadcast(&self, code: &str) {
        if let Some(locale) = Locale::from_code(code) {
            if locale != *self.state {
                self.state.set(locale);
            }
        }
    }
}

/// Every key path the UI reads. Both locale tables must resolve each of
/// these to a defined, non-empty value.
pub const UI_KEYS: &[&str] = &[
    "navigation.language",
    "menu.about",
    "menu.privacy",
    "menu.imprint",
    "menu.contact",
    "hero.title",
    "hero.subtitle",
    "features.rhythm.title",
    "features.rhythm.description",
    "features.energy.title",
    "features.energy.description",
    "products.title",
    "products.bottles.goldenHibiscus.name",
    "products.bottles.goldenHibiscus.description",
    "products.bottles.goldenHibiscus.features",
    "products.bottles.kinkyCoconut.name",
    "products.bottles.kinkyCoconut.description",
    "products.bottles.kinkyCoconut.features",
    "products.bottles.magicMango.name",
    "products.bottles.magicMango.description",
    "products.bottles.magicMango.features",
    "products.bottles.bubbleBanana.name",
    "products.bottles.bubbleBanana.description",
    "products.bottles.bubbleBanana.features",
    "products.bottles.cosmicCola.name",
    "products.bottles.cosmicCola.description",
    "products.bottles.cosmicCola.features",
    "cta.title",
    "cta.button",
    "footer.copyright",
    "backToTop.label",
    "contact.title",
    "contact.company",
    "contact.address",
    "contact.phone",
    "contact.fax",
    "contact.email",
    "form.contact.title",
    "form.contact.businessType.label",
    "form.contact.businessType.placeholder",
    "form.contact.businessType.restaurant",
    "form.contact.businessType.supplier",
    "form.contact.businessType.hotel",
    "form.contact.businessType.bar",
    "form.contact.company",
    "form.contact.street",
    "form.contact.postalCode",
    "form.contact.city",
    "form.contact.firstName",
    "form.contact.lastName",
    "form.contact.phone",
    "form.contact.email",
    "form.contact.message",
    "form.contact.marketingConsent",
    "form.contact.privacyConsent",
    "form.contact.submit",
    "form.contact.sending",
    "form.contact.success.title",
    "form.contact.success.body",
    "form.contact.error.title",
    "form.contact.error.fallback",
    "form.contact.errors.businessType",
    "form.contact.errors.company",
    "form.contact.errors.street",
    "form.contact.errors.postalCode",
    "form.contact.errors.city",
    "form.contact.errors.firstName",
    "form.contact.errors.lastName",
    "form.contact.errors.email",
    "form.contact.errors.emailFormat",
    "form.contact.errors.privacyConsent",
    "form.dataRequest.title",
    "form.dataRequest.intro",
    "form.dataRequest.firstName",
    "form.dataRequest.lastName",
    "form.dataRequest.email",
    "form.dataRequest.requestType",
    "form.dataRequest.message",
    "form.dataRequest.consent",
    "form.dataRequest.types.access",
    "form.dataRequest.types.delete",
    "form.dataRequest.types.rectify",
    "form.dataRequest.types.restrict",
    "form.dataRequest.types.portability",
    "form.dataRequest.types.object",
    "form.dataRequest.submit",
    "form.dataRequest.sending",
    "form.dataRequest.success.title",
    "form.dataRequest.success.body",
    "form.dataRequest.error.title",
    "form.dataRequest.error.fallback",
    "form.dataRequest.errors.firstName",
    "form.dataRequest.errors.lastName",
    "form.dataRequest.errors.email",
    "form.dataRequest.errors.emailFormat",
    "form.dataRequest.errors.message",
    "form.dataRequest.errors.consent",
    "about.hero.title",
    "about.hero.subtitle",
    "about.story.title",
    "about.story.paragraphs",
    "about.values.title",
    "about.values.items.passion.title",
    "about.values.items.passion.description",
    "about.values.items.community.title",
    "about.values.items.community.description",
    "about.values.items.quality.title",
    "about.values.items.quality.description",
    "privacy.hero.title",
    "privacy.hero.subtitle",
    "privacy.sections.introduction.title",
    "privacy.sections.introduction.content",
    "privacy.sections.collection.title",
    "privacy.sections.collection.content",
    "privacy.sections.collection.items",
    "privacy.sections.usage.title",
    "privacy.sections.usage.content",
    "privacy.sections.usage.items",
    "privacy.sections.cookies.title",
    "privacy.sections.cookies.content",
    "privacy.sections.rights.title",
    "privacy.sections.rights.content",
    "privacy.sections.rights.items",
    "privacy.sections.security.title",
    "privacy.sections.security.content",
    "privacy.sections.changes.title",
    "privacy.sections.changes.content",
    "privacy.sections.contact.title",
    "privacy.sections.contact.content",
    "privacy.lastUpdated",
    "imprint.hero.title",
    "imprint.hero.subtitle",
    "imprint.sections.company.title",
    "imprint.sections.company.name",
    "imprint.sections.company.address",
    "imprint.sections.company.phone",
    "imprint.sections.company.fax",
    "imprint.sections.company.email",
    "imprint.sections.company.website",
    "imprint.sections.management.title",
    "imprint.sections.management.content",
    "imprint.sections.register.title",
    "imprint.sections.register.content",
    "imprint.sections.responsible.title",
    "imprint.sections.responsible.content",
    "imprint.sections.liability.title",
    "imprint.sections.liability.content",
    "imprint.sections.copyright.title",
    "imprint.sections.copyright.content",
    "imprint.lastUpdated",
    "cookies.banner.title",
    "cookies.banner.body",
    "cookies.acceptAll",
    "cookies.rejectAll",
    "cookies.preferences",
    "cookies.save",
    "cookies.categories.necessary.name",
    "cookies.categories.necessary.description",
    "cookies.categories.functional.name",
    "cookies.categories.functional.description",
    "cookies.categories.analytics.name",
    "cookies.categories.analytics.description",
    "cookies.categories.marketing.name",
    "cookies.categories.marketing.description",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_accepts_region_variants() {
        assert_eq!(Locale::from_code("EN"), Some(Locale::En));
        assert_eq!(Locale::from_code("de-AT"), Some(Locale::De));
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn stored_wire_form_round_trips_through_from_code() {
        // The persisted value and the cross-tab storage-event payload are
        // the bare two-letter code.
        for locale in [Locale::En, Locale::De] {
            assert_eq!(locale.code().len(), 2);
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
        // A JSON-encoded value written by an older build still parses.
        assert_eq!(
            Locale::from_code(&serde_json::to_string("de").unwrap()),
            Some(Locale::De)
        );
        assert_eq!(Locale::from_code("\"en\""), Some(Locale::En));
    }

    #[test]
    fn every_ui_key_is_defined_and_non_empty_in_both_locales() {
        for locale in [Locale::En, Locale::De] {
            for key in UI_KEYS {
                match locale.try_lookup(key) {
                    Ok(Text::One(s)) => {
                        assert!(!s.is_empty(), "{}:{} is empty", locale.code(), key)
                    }
                    Ok(Text::Many(items)) => {
                        assert!(!items.is_empty(), "{}:{} is empty", locale.code(), key);
                        assert!(
                            items.iter().all(|s| !s.is_empty()),
                            "{}:{} has an empty entry",
                            locale.code(),
                            key
                        );
                    }
                    Err(miss) => panic!("{miss}"),
                }
            }
        }
    }

    #[test]
    fn miss_is_observable_and_names_the_path() {
        let err = Locale::En.try_lookup("hero.doesNotExist").unwrap_err();
        assert_eq!(err.locale, "en");
        assert_eq!(err.key, "hero.doesNotExist");
        assert_eq!(err.to_string(), "missing translation en:hero.doesNotExist");
    }

    #[test]
    fn rendering_helpers_never_panic_on_misses() {
        assert_eq!(Locale::De.text("no.such.key"), "no.such.key");
        assert!(Locale::De.list("no.such.key").is_empty());
        // A scalar read through the list helper degrades to empty.
        assert!(Locale::En.list("hero.title").is_empty());
    }

    #[test]
    fn scalar_read_of_list_degrades_to_first_entry() {
        let first = Locale::En.text("contact.address");
        assert_eq!(Locale::En.list("contact.address")[0], first);
    }
}

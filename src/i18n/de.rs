//! German translation table. Key paths mirror `en.rs` exactly.

use super::Text::{self, Many, One};

pub(super) fn lookup(key: &str) -> Option<Text> {
    Some(match key {
        "navigation.language" => One("English"),
        "menu.about" => One("Über uns"),
        "menu.privacy" => One("Datenschutz"),
        "menu.imprint" => One("Impressum"),
        "menu.contact" => One("Kontakt"),

        "hero.title" => One("Schmeck den Rhythmus"),
        "hero.subtitle" => {
            One("Fünf Sorten. Ein Beat. AfroSoda bringt die Party in deine Flasche.")
        }

        "features.rhythm.title" => One("Voller Rhythmus"),
        "features.rhythm.description" => {
            One("Jeder Schluck bewegt. Kräftige Frucht, feine Perlage und ein Beat zum Schmecken.")
        }
        "features.energy.title" => One("Pure Energie"),
        "features.energy.description" => {
            One("Natürliche Zutaten, echte Frucht und keine künstlichen Farbstoffe. Energie, die tanzt.")
        }

        "products.title" => One("Unsere Sorten"),
        "products.bottles.goldenHibiscus.name" => One("Golden Hibiscus"),
        "products.bottles.goldenHibiscus.description" => {
            One("Herbe Hibiskusblüte trifft goldene Honignoten. Der Klassiker der westafrikanischen Küste in der Flasche.")
        }
        "products.bottles.goldenHibiscus.features" => Many(&[
            "Echter Hibiskusextrakt",
            "Sanft kohlensäurehaltig",
            "Ohne künstliche Farbstoffe",
        ]),
        "products.bottles.kinkyCoconut.name" => One("Kinky Coconut"),
        "products.bottles.kinkyCoconut.description" => {
            One("Cremige Kokosnuss mit grünem Limetten-Kick. Strandurlaub, abgefüllt.")
        }
        "products.bottles.kinkyCoconut.features" => Many(&[
            "Basis aus Kokoswasser",
            "Ein Spritzer Limette",
            "Erfrischend leicht",
        ]),
        "products.bottles.magicMango.name" => One("Magic Mango"),
        "products.bottles.magicMango.description" => {
            One("Sonnengereifte Mango, ein Hauch Chili. Erst süß, dann passiert die Magie.")
        }
        "products.bottles.magicMango.features" => Many(&[
            "Alphonso-Mangosaft",
            "Eine Spur Chili",
            "Vegane Rezeptur",
        ]),
        "products.bottles.bubbleBanana.name" => One("Bubble Banana"),
        "products.bottles.bubbleBanana.description" => {
            One("Reife Banane und verspielte Bläschen. Die Spaßkanone im Kasten.")
        }
        "products.bottles.bubbleBanana.features" => Many(&[
            "Echtes Bananenpüree",
            "Extra feine Perlage",
            "Liebling der Kinder",
        ]),
        "products.bottles.cosmicCola.name" => One("Cosmic Cola"),
        "products.bottles.cosmicCola.description" => {
            One("Cola, aber aus einer anderen Galaxie: Kolanuss, dunkle Gewürze und Sternenstaub-Prickeln.")
        }
        "products.bottles.cosmicCola.features" => Many(&[
            "Echte Kolanuss",
            "Weniger Zucker als klassische Cola",
            "Natürlich koffeinhaltig",
        ]),

        "cta.title" => One("Hol dir AfroSoda in deine Bar, dein Hotel oder Restaurant"),
        "cta.button" => One("Partner werden"),

        "footer.copyright" => One("© 2025 Africa Drinks GmbH. Alle Rechte vorbehalten."),
        "backToTop.label" => One("Nach oben"),

        "contact.title" => One("Kontaktieren Sie uns"),
        "contact.company" => One("Africa Drinks GmbH"),
        "contact.address" => Many(&["Rhythmusstraße 12", "10115 Berlin", "Deutschland"]),
        "contact.phone" => One("+49 30 1234560"),
        "contact.fax" => One("+49 30 1234561"),
        "contact.email" => One("info@africadrinks.de"),

        "form.contact.title" => One("Schreiben Sie uns"),
        "form.contact.businessType.label" => One("Was sind Sie?"),
        "form.contact.businessType.placeholder" => One("Bitte auswählen..."),
        "form.contact.businessType.restaurant" => One("Restaurant"),
        "form.contact.businessType.supplier" => One("Zulieferer"),
        "form.contact.businessType.hotel" => One("Hotel"),
        "form.contact.businessType.bar" => One("Bar"),
        "form.contact.company" => One("Firma"),
        "form.contact.street" => One("Straße"),
        "form.contact.postalCode" => One("Postleitzahl"),
        "form.contact.city" => One("Ort"),
        "form.contact.firstName" => One("Vorname"),
        "form.contact.lastName" => One("Nachname"),
        "form.contact.phone" => One("Telefon"),
        "form.contact.email" => One("E-Mail-Adresse"),
        "form.contact.message" => One("Bemerkung"),
        "form.contact.marketingConsent" => {
            One("Ich möchte Marketingmitteilungen von AfroSoda über neue Produkte, Aktionen und Veranstaltungen erhalten. (Optional)")
        }
        "form.contact.privacyConsent" => {
            One("Ich habe die Datenschutzerklärung gelesen und stimme ihr zu.")
        }
        "form.contact.submit" => One("Nachricht senden"),
        "form.contact.sending" => One("Wird gesendet..."),
        "form.contact.success.title" => One("Nachricht erfolgreich gesendet"),
        "form.contact.success.body" => {
            One("Vielen Dank für Ihre Kontaktaufnahme! Wir melden uns so schnell wie möglich bei Ihnen.")
        }
        "form.contact.error.title" => One("Fehler beim Senden der Nachricht"),
        "form.contact.error.fallback" => {
            One("Beim Senden Ihrer Nachricht ist ein Fehler aufgetreten. Bitte versuchen Sie es später erneut.")
        }
        "form.contact.errors.businessType" => One("Bitte wählen Sie Ihren Geschäftstyp"),
        "form.contact.errors.company" => One("Firmenname ist erforderlich"),
        "form.contact.errors.street" => One("Straße ist erforderlich"),
        "form.contact.errors.postalCode" => One("Postleitzahl ist erforderlich"),
        "form.contact.errors.city" => One("Stadt ist erforderlich"),
        "form.contact.errors.firstName" => One("Vorname ist erforderlich"),
        "form.contact.errors.lastName" => One("Nachname ist erforderlich"),
        "form.contact.errors.email" => One("E-Mail ist erforderlich"),
        "form.contact.errors.emailFormat" => One("E-Mail ist ungültig"),
        "form.contact.errors.privacyConsent" => {
            One("Sie müssen der Datenschutzerklärung zustimmen")
        }

        "form.dataRequest.title" => One("Betroffenenanfrage"),
        "form.dataRequest.intro" => {
            One("Nach der DSGVO können Sie Auskunft, Berichtigung oder Löschung Ihrer personenbezogenen Daten verlangen. Nutzen Sie dieses Formular, wir antworten innerhalb von 30 Tagen.")
        }
        "form.dataRequest.firstName" => One("Vorname"),
        "form.dataRequest.lastName" => One("Nachname"),
        "form.dataRequest.email" => One("E-Mail-Adresse"),
        "form.dataRequest.requestType" => One("Art der Anfrage"),
        "form.dataRequest.message" => One("Details"),
        "form.dataRequest.consent" => {
            One("Ich willige in die Verarbeitung dieser Anfrage und der darin angegebenen Daten ein.")
        }
        "form.dataRequest.types.access" => One("Zugriff auf meine Daten"),
        "form.dataRequest.types.delete" => One("Meine Daten löschen"),
        "form.dataRequest.types.rectify" => One("Meine Daten korrigieren"),
        "form.dataRequest.types.restrict" => One("Verarbeitung einschränken"),
        "form.dataRequest.types.portability" => One("Datenübertragbarkeit"),
        "form.dataRequest.types.object" => One("Widerspruch gegen die Verarbeitung"),
        "form.dataRequest.submit" => One("Anfrage senden"),
        "form.dataRequest.sending" => One("Wird übermittelt..."),
        "form.dataRequest.success.title" => One("Anfrage eingegangen"),
        "form.dataRequest.success.body" => {
            One("Wir haben Ihre Anfrage erhalten und antworten an die angegebene E-Mail-Adresse.")
        }
        "form.dataRequest.error.title" => One("Fehler beim Übermitteln der Anfrage"),
        "form.dataRequest.error.fallback" => {
            One("Beim Übermitteln Ihrer Anfrage ist ein Fehler aufgetreten. Bitte versuchen Sie es später erneut.")
        }
        "form.dataRequest.errors.firstName" => One("Vorname ist erforderlich"),
        "form.dataRequest.errors.lastName" => One("Nachname ist erforderlich"),
        "form.dataRequest.errors.email" => One("E-Mail ist erforderlich"),
        "form.dataRequest.errors.emailFormat" => One("E-Mail ist ungültig"),
        "form.dataRequest.errors.message" => {
            One("Bitte geben Sie Details zu Ihrer Anfrage an")
        }
        "form.dataRequest.errors.consent" => {
            One("Sie müssen der Verarbeitung Ihrer Daten zustimmen")
        }

        "about.hero.title" => One("Unsere Geschichte"),
        "about.hero.subtitle" => One("Vom Berliner Hinterhof in Bars in ganz Europa."),
        "about.story.title" => One("Wie AfroSoda entstand"),
        "about.story.paragraphs" => Many(&[
            "AfroSoda begann 2019 mit einer Kiste Hibiskusblüten, einer geliehenen Abfüllmaschine und einer Anlage, die für den Hinterhof deutlich zu laut war.",
            "Wir wollten eine Limonade, die so schmeckt wie die Musik, mit der wir aufgewachsen sind: hell, warm und unmöglich still zu sitzen. Fünf Sorten später ist das immer noch das ganze Rezept.",
            "Heute füllen wir in Brandenburg ab, beziehen unsere Früchte von Kooperativen, die wir beim Namen kennen, und streiten in der Abfüllhalle immer noch über die Playlist.",
        ]),
        "about.values.title" => One("Wofür wir stehen"),
        "about.values.items.passion.title" => One("Leidenschaft"),
        "about.values.items.passion.description" => {
            One("Jede Rezeptur wird probiert, diskutiert und durchgetanzt, bevor sie rausgeht.")
        }
        "about.values.items.community.title" => One("Gemeinschaft"),
        "about.values.items.community.description" => {
            One("Wir kaufen bei Erzeugern, die wir kennen, und unterstützen die Läden, die unseren Sound spielen.")
        }
        "about.values.items.quality.title" => One("Qualität"),
        "about.values.items.quality.description" => {
            One("Echte Frucht, keine künstlichen Farbstoffe und Kohlensäure, die sehr ernst genommen wird.")
        }

        "privacy.hero.title" => One("Datenschutzerklärung"),
        "privacy.hero.subtitle" => One("Wie wir mit Ihren Daten umgehen — verständlich erklärt."),
        "privacy.sections.introduction.title" => One("Einleitung"),
        "privacy.sections.introduction.content" => {
            One("Die Africa Drinks GmbH nimmt den Schutz Ihrer personenbezogenen Daten ernst. Diese Erklärung beschreibt, was wir auf dieser Website erheben, warum, und welche Rechte Sie haben.")
        }
        "privacy.sections.collection.title" => One("Was wir erheben"),
        "privacy.sections.collection.content" => {
            One("Wir erheben nur Daten, die Sie uns aktiv geben:")
        }
        "privacy.sections.collection.items" => Many(&[
            "Kontaktdaten aus dem Partnerformular",
            "Ihre Sprachpräferenz, lokal im Browser gespeichert",
            "Ihre Cookie-Einwilligungen",
        ]),
        "privacy.sections.usage.title" => One("Wie wir sie nutzen"),
        "privacy.sections.usage.content" => {
            One("Übermittelte Daten werden ausschließlich genutzt, um:")
        }
        "privacy.sections.usage.items" => Many(&[
            "Ihre Anfrage zu beantworten",
            "Marketingmitteilungen zu senden, nur bei erteilter Einwilligung",
            "Gesetzliche Aufbewahrungspflichten zu erfüllen",
        ]),
        "privacy.sections.cookies.title" => One("Cookies"),
        "privacy.sections.cookies.content" => {
            One("Über die technisch notwendigen Cookies hinaus wird nichts ohne Ihre Einwilligung gesetzt. Ihre Auswahl können Sie jederzeit über das Cookie-Banner ändern.")
        }
        "privacy.sections.rights.title" => One("Ihre Rechte"),
        "privacy.sections.rights.content" => {
            One("Nach der DSGVO haben Sie das Recht auf:")
        }
        "privacy.sections.rights.items" => Many(&[
            "Auskunft über die zu Ihnen gespeicherten Daten",
            "Berichtigung unrichtiger Daten",
            "Löschung Ihrer Daten",
            "Einschränkung der oder Widerspruch gegen die Verarbeitung",
            "Übertragung Ihrer Daten in einem gängigen Format",
        ]),
        "privacy.sections.security.title" => One("Sicherheit"),
        "privacy.sections.security.content" => {
            One("Formulardaten werden verschlüsselt übertragen und bei unserem Hosting-Anbieter innerhalb der EU gespeichert.")
        }
        "privacy.sections.changes.title" => One("Änderungen dieser Erklärung"),
        "privacy.sections.changes.content" => {
            One("Wir können diese Erklärung gelegentlich aktualisieren; die jeweils aktuelle Fassung ist auf dieser Seite veröffentlicht.")
        }
        "privacy.sections.contact.title" => One("Fragen?"),
        "privacy.sections.contact.content" => {
            One("Bei Datenschutzfragen oder zur Ausübung Ihrer Rechte schreiben Sie an privacy@africadrinks.de oder nutzen Sie das Formular unten.")
        }
        "privacy.lastUpdated" => One("Stand: März 2025"),

        "imprint.hero.title" => One("Impressum"),
        "imprint.hero.subtitle" => One("Angaben gemäß § 5 TMG."),
        "imprint.sections.company.title" => One("Unternehmen"),
        "imprint.sections.company.name" => One("Africa Drinks GmbH"),
        "imprint.sections.company.address" => {
            Many(&["Rhythmusstraße 12", "10115 Berlin", "Deutschland"])
        }
        "imprint.sections.company.phone" => One("Telefon: +49 30 1234560"),
        "imprint.sections.company.fax" => One("Fax: +49 30 1234561"),
        "imprint.sections.company.email" => One("E-Mail: info@africadrinks.de"),
        "imprint.sections.company.website" => One("Website: www.afrosoda.de"),
        "imprint.sections.management.title" => One("Geschäftsführung"),
        "imprint.sections.management.content" => One("Geschäftsführer: Stefan Asemota"),
        "imprint.sections.register.title" => One("Handelsregister"),
        "imprint.sections.register.content" => Many(&[
            "Eingetragen beim Amtsgericht Charlottenburg",
            "Registernummer: HRB 123456 B",
            "USt-IdNr.: DE312345678",
        ]),
        "imprint.sections.responsible.title" => One("Verantwortlich für den Inhalt"),
        "imprint.sections.responsible.content" => Many(&[
            "Stefan Asemota",
            "Rhythmusstraße 12, 10115 Berlin",
        ]),
        "imprint.sections.liability.title" => One("Haftung für Links"),
        "imprint.sections.liability.content" => {
            One("Unsere Seite verlinkt auf externe Websites, auf deren Inhalte wir keinen Einfluss haben. Für die Inhalte der verlinkten Seiten ist der jeweilige Anbieter verantwortlich.")
        }
        "imprint.sections.copyright.title" => One("Urheberrecht"),
        "imprint.sections.copyright.content" => {
            One("Alle Inhalte und Werke auf dieser Seite unterliegen dem deutschen Urheberrecht. Vervielfältigung bedarf der schriftlichen Zustimmung der Africa Drinks GmbH.")
        }
        "imprint.lastUpdated" => One("Stand: März 2025"),

        "cookies.banner.title" => One("Wir verwenden Cookies"),
        "cookies.banner.body" => {
            One("Wir verwenden Cookies, damit diese Seite funktioniert, und mit Ihrer Einwilligung, um die Nutzung zu verstehen. Sie können alle akzeptieren, alle ablehnen oder je Kategorie wählen.")
        }
        "cookies.acceptAll" => One("Alle akzeptieren"),
        "cookies.rejectAll" => One("Alle ablehnen"),
        "cookies.preferences" => One("Einstellungen"),
        "cookies.save" => One("Auswahl speichern"),
        "cookies.categories.necessary.name" => One("Notwendig"),
        "cookies.categories.necessary.description" => {
            One("Diese Cookies sind für die ordnungsgemäße Funktion der Website unerlässlich.")
        }
        "cookies.categories.functional.name" => One("Funktional"),
        "cookies.categories.functional.description" => {
            One("Diese Cookies ermöglichen personalisierte Funktionen und Merkmale.")
        }
        "cookies.categories.analytics.name" => One("Analyse"),
        "cookies.categories.analytics.description" => {
            One("Diese Cookies helfen uns zu verstehen, wie Besucher mit unserer Website interagieren.")
        }
        "cookies.categories.marketing.name" => One("Marketing"),
        "cookies.categories.marketing.description" => {
            One("Diese Cookies werden verwendet, um relevante Werbung anzuzeigen.")
        }

        _ => return None,
    })
}

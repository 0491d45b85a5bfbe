//! English translation table.

use super::Text::{self, Many, One};

pub(super) fn lookup(key: &str) -> Option<Text> {
    Some(match key {
        "navigation.language" => One("Deutsch"),
        "menu.about" => One("About Us"),
        "menu.privacy" => One("Privacy"),
        "menu.imprint" => One("Imprint"),
        "menu.contact" => One("Contact"),

        "hero.title" => One("Taste the Rhythm"),
        "hero.subtitle" => One("Five flavours. One beat. AfroSoda brings the party to your bottle."),

        "features.rhythm.title" => One("Full of Rhythm"),
        "features.rhythm.description" => {
            One("Every sip moves. Bold fruit, fine bubbles and a beat you can taste.")
        }
        "features.energy.title" => One("Pure Energy"),
        "features.energy.description" => {
            One("Natural ingredients, real fruit and no artificial colours. Energy that dances.")
        }

        "products.title" => One("Our Flavours"),
        "products.bottles.goldenHibiscus.name" => One("Golden Hibiscus"),
        "products.bottles.goldenHibiscus.description" => {
            One("Tangy hibiscus blossom meets golden honey notes. The classic of the West African coast in a bottle.")
        }
        "products.bottles.goldenHibiscus.features" => Many(&[
            "Real hibiscus extract",
            "Gently carbonated",
            "No artificial colours",
        ]),
        "products.bottles.kinkyCoconut.name" => One("Kinky Coconut"),
        "products.bottles.kinkyCoconut.description" => {
            One("Creamy coconut with a green lime kick. Beach holiday, bottled.")
        }
        "products.bottles.kinkyCoconut.features" => Many(&[
            "Coconut water base",
            "A squeeze of lime",
            "Refreshingly light",
        ]),
        "products.bottles.magicMango.name" => One("Magic Mango"),
        "products.bottles.magicMango.description" => {
            One("Sun-ripened mango, a whisper of chili. Sweet first, then the magic happens.")
        }
        "products.bottles.magicMango.features" => Many(&[
            "Alphonso mango juice",
            "A hint of chili",
            "Vegan recipe",
        ]),
        "products.bottles.bubbleBanana.name" => One("Bubble Banana"),
        "products.bottles.bubbleBanana.description" => {
            One("Ripe banana and playful bubbles. The fun one in the crate.")
        }
        "products.bottles.bubbleBanana.features" => Many(&[
            "Real banana puree",
            "Extra fine bubbles",
            "Kids' favourite",
        ]),
        "products.bottles.cosmicCola.name" => One("Cosmic Cola"),
        "products.bottles.cosmicCola.description" => {
            One("Cola, but from another galaxy: kola nut, dark spices and stardust sparkle.")
        }
        "products.bottles.cosmicCola.features" => Many(&[
            "Real kola nut",
            "Less sugar than classic cola",
            "Naturally caffeinated",
        ]),

        "cta.title" => One("Bring AfroSoda to your bar, hotel or restaurant"),
        "cta.button" => One("Become a partner"),

        "footer.copyright" => One("© 2025 Africa Drinks GmbH. All rights reserved."),
        "backToTop.label" => One("Back to top"),

        "contact.title" => One("Contact Us"),
        "contact.company" => One("Africa Drinks GmbH"),
        "contact.address" => Many(&["Rhythmusstraße 12", "10115 Berlin", "Germany"]),
        "contact.phone" => One("+49 30 1234560"),
        "contact.fax" => One("+49 30 1234561"),
        "contact.email" => One("info@africadrinks.de"),

        "form.contact.title" => One("Get in touch"),
        "form.contact.businessType.label" => One("What are you?"),
        "form.contact.businessType.placeholder" => One("Please select..."),
        "form.contact.businessType.restaurant" => One("Restaurant"),
        "form.contact.businessType.supplier" => One("Supplier"),
        "form.contact.businessType.hotel" => One("Hotel"),
        "form.contact.businessType.bar" => One("Bar"),
        "form.contact.company" => One("Company"),
        "form.contact.street" => One("Street"),
        "form.contact.postalCode" => One("Postal Code"),
        "form.contact.city" => One("City"),
        "form.contact.firstName" => One("First Name"),
        "form.contact.lastName" => One("Last Name"),
        "form.contact.phone" => One("Phone"),
        "form.contact.email" => One("Email Address"),
        "form.contact.message" => One("Message"),
        "form.contact.marketingConsent" => {
            One("I would like to receive marketing communications from AfroSoda about new products, promotions and events. (Optional)")
        }
        "form.contact.privacyConsent" => {
            One("I have read and agree to the privacy policy.")
        }
        "form.contact.submit" => One("Send Message"),
        "form.contact.sending" => One("Sending..."),
        "form.contact.success.title" => One("Message Sent Successfully"),
        "form.contact.success.body" => {
            One("Thank you for contacting us! We will get back to you as soon as possible.")
        }
        "form.contact.error.title" => One("Error Sending Message"),
        "form.contact.error.fallback" => {
            One("There was an error sending your message. Please try again later.")
        }
        "form.contact.errors.businessType" => One("Please select your business type"),
        "form.contact.errors.company" => One("Company name is required"),
        "form.contact.errors.street" => One("Street address is required"),
        "form.contact.errors.postalCode" => One("Postal code is required"),
        "form.contact.errors.city" => One("City is required"),
        "form.contact.errors.firstName" => One("First name is required"),
        "form.contact.errors.lastName" => One("Last name is required"),
        "form.contact.errors.email" => One("Email is required"),
        "form.contact.errors.emailFormat" => One("Email is invalid"),
        "form.contact.errors.privacyConsent" => One("You must agree to the privacy policy"),

        "form.dataRequest.title" => One("Data Subject Request"),
        "form.dataRequest.intro" => {
            One("Under the GDPR you can request access to, correction or deletion of your personal data. Use this form and we will respond within 30 days.")
        }
        "form.dataRequest.firstName" => One("First Name"),
        "form.dataRequest.lastName" => One("Last Name"),
        "form.dataRequest.email" => One("Email Address"),
        "form.dataRequest.requestType" => One("Type of Request"),
        "form.dataRequest.message" => One("Details"),
        "form.dataRequest.consent" => {
            One("I consent to the processing of this request and the data provided in it.")
        }
        "form.dataRequest.types.access" => One("Access My Data"),
        "form.dataRequest.types.delete" => One("Delete My Data"),
        "form.dataRequest.types.rectify" => One("Correct My Data"),
        "form.dataRequest.types.restrict" => One("Restrict Processing"),
        "form.dataRequest.types.portability" => One("Data Portability"),
        "form.dataRequest.types.object" => One("Object to Processing"),
        "form.dataRequest.submit" => One("Submit Request"),
        "form.dataRequest.sending" => One("Submitting..."),
        "form.dataRequest.success.title" => One("Request Received"),
        "form.dataRequest.success.body" => {
            One("We have received your request and will respond to the email address provided.")
        }
        "form.dataRequest.error.title" => One("Error Submitting Request"),
        "form.dataRequest.error.fallback" => {
            One("There was an error submitting your request. Please try again later.")
        }
        "form.dataRequest.errors.firstName" => One("First name is required"),
        "form.dataRequest.errors.lastName" => One("Last name is required"),
        "form.dataRequest.errors.email" => One("Email is required"),
        "form.dataRequest.errors.emailFormat" => One("Email is invalid"),
        "form.dataRequest.errors.message" => One("Please provide details about your request"),
        "form.dataRequest.errors.consent" => {
            One("You must consent to the processing of your data")
        }

        "about.hero.title" => One("Our Story"),
        "about.hero.subtitle" => One("From a Berlin backyard to bars across Europe."),
        "about.story.title" => One("How AfroSoda Happened"),
        "about.story.paragraphs" => Many(&[
            "AfroSoda started in 2019 with a crate of hibiscus blossoms, a borrowed bottling machine and a sound system that was far too loud for the backyard it stood in.",
            "We wanted a soft drink that tastes like the music we grew up with: bright, warm and impossible to sit still to. Five flavours later, that is still the whole recipe.",
            "Today we bottle in Brandenburg, source our fruit from farming cooperatives we know by name, and still argue about the playlist in the bottling hall.",
        ]),
        "about.values.title" => One("What We Stand For"),
        "about.values.items.passion.title" => One("Passion"),
        "about.values.items.passion.description" => {
            One("Every recipe is tasted, argued over and danced to before it ships.")
        }
        "about.values.items.community.title" => One("Community"),
        "about.values.items.community.description" => {
            One("We buy from growers we know and back the venues that play our sound.")
        }
        "about.values.items.quality.title" => One("Quality"),
        "about.values.items.quality.description" => {
            One("Real fruit, no artificial colours, and bubbles that are taken very seriously.")
        }

        "privacy.hero.title" => One("Privacy Policy"),
        "privacy.hero.subtitle" => One("How we handle your data — plainly explained."),
        "privacy.sections.introduction.title" => One("Introduction"),
        "privacy.sections.introduction.content" => {
            One("Africa Drinks GmbH takes the protection of your personal data seriously. This policy explains what we collect on this website, why, and what rights you have.")
        }
        "privacy.sections.collection.title" => One("What We Collect"),
        "privacy.sections.collection.content" => {
            One("We only collect data you actively give us:")
        }
        "privacy.sections.collection.items" => Many(&[
            "Contact details you submit through the partner form",
            "Your language preference, stored locally in your browser",
            "Cookie consent choices",
        ]),
        "privacy.sections.usage.title" => One("How We Use It"),
        "privacy.sections.usage.content" => One("Submitted data is used exclusively to:"),
        "privacy.sections.usage.items" => Many(&[
            "Answer your enquiry",
            "Send marketing communications, only where you opted in",
            "Meet legal record-keeping obligations",
        ]),
        "privacy.sections.cookies.title" => One("Cookies"),
        "privacy.sections.cookies.content" => {
            One("Beyond the strictly necessary cookies, nothing is set without your consent. You can change your choice at any time via the cookie banner.")
        }
        "privacy.sections.rights.title" => One("Your Rights"),
        "privacy.sections.rights.content" => {
            One("Under the GDPR you have the right to:")
        }
        "privacy.sections.rights.items" => Many(&[
            "Access the data we hold about you",
            "Have incorrect data corrected",
            "Have your data deleted",
            "Restrict or object to processing",
            "Receive your data in a portable format",
        ]),
        "privacy.sections.security.title" => One("Security"),
        "privacy.sections.security.content" => {
            One("Form submissions are transmitted encrypted and stored with our hosting provider inside the EU.")
        }
        "privacy.sections.changes.title" => One("Changes to This Policy"),
        "privacy.sections.changes.content" => {
            One("We may update this policy from time to time; the current version is always published on this page.")
        }
        "privacy.sections.contact.title" => One("Questions?"),
        "privacy.sections.contact.content" => {
            One("For any privacy question, or to exercise your rights, write to privacy@africadrinks.de or use the request form below.")
        }
        "privacy.lastUpdated" => One("Last updated: March 2025"),

        "imprint.hero.title" => One("Imprint"),
        "imprint.hero.subtitle" => One("Legal information pursuant to § 5 TMG."),
        "imprint.sections.company.title" => One("Company"),
        "imprint.sections.company.name" => One("Africa Drinks GmbH"),
        "imprint.sections.company.address" => {
            Many(&["Rhythmusstraße 12", "10115 Berlin", "Germany"])
        }
        "imprint.sections.company.phone" => One("Phone: +49 30 1234560"),
        "imprint.sections.company.fax" => One("Fax: +49 30 1234561"),
        "imprint.sections.company.email" => One("Email: info@africadrinks.de"),
        "imprint.sections.company.website" => One("Website: www.afrosoda.de"),
        "imprint.sections.management.title" => One("Management"),
        "imprint.sections.management.content" => One("Managing Director: Stefan Asemota"),
        "imprint.sections.register.title" => One("Commercial Register"),
        "imprint.sections.register.content" => Many(&[
            "Registered at Amtsgericht Charlottenburg",
            "Registration number: HRB 123456 B",
            "VAT ID: DE312345678",
        ]),
        "imprint.sections.responsible.title" => One("Responsible for Content"),
        "imprint.sections.responsible.content" => Many(&[
            "Stefan Asemota",
            "Rhythmusstraße 12, 10115 Berlin",
        ]),
        "imprint.sections.liability.title" => One("Liability for Links"),
        "imprint.sections.liability.content" => {
            One("Our site links to external websites over whose content we have no control. The respective provider is responsible for the content of linked pages.")
        }
        "imprint.sections.copyright.title" => One("Copyright"),
        "imprint.sections.copyright.content" => {
            One("All content and works on this site are subject to German copyright law. Reproduction requires the written consent of Africa Drinks GmbH.")
        }
        "imprint.lastUpdated" => One("Last updated: March 2025"),

        "cookies.banner.title" => One("We use cookies"),
        "cookies.banner.body" => {
            One("We use cookies to make this site work and, with your consent, to understand how it is used. You can accept all, reject all, or set preferences per category.")
        }
        "cookies.acceptAll" => One("Accept All"),
        "cookies.rejectAll" => One("Reject All"),
        "cookies.preferences" => One("Preferences"),
        "cookies.save" => One("Save Choices"),
        "cookies.categories.necessary.name" => One("Necessary"),
        "cookies.categories.necessary.description" => {
            One("These cookies are essential for the website to function properly.")
        }
        "cookies.categories.functional.name" => One("Functional"),
        "cookies.categories.functional.description" => {
            One("These cookies enable personalized features and functionality.")
        }
        "cookies.categories.analytics.name" => One("Analytics"),
        "cookies.categories.analytics.description" => {
            One("These cookies help us understand how visitors interact with our website.")
        }
        "cookies.categories.marketing.name" => One("Marketing"),
        "cookies.categories.marketing.description" => {
            One("These cookies are used to display relevant advertisements.")
        }

        _ => return None,
    })
}

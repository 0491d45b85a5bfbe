//! The bottle catalog: the five flavours, their background gradients and
//! their media assets. Names, descriptions and feature lists live in the
//! translation tables under `products.bottles.<key>.*`.

/// Identifier of a product section on the landing page. The string form is
/// used both as translation key segment and as DOM element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BottleKey {
    GoldenHibiscus,
    KinkyCoconut,
    MagicMango,
    BubbleBanana,
    CosmicCola,
}

impl BottleKey {
    pub const ALL: [BottleKey; 5] = [
        BottleKey::GoldenHibiscus,
        BottleKey::KinkyCoconut,
        BottleKey::MagicMango,
        BottleKey::BubbleBanana,
        BottleKey::CosmicCola,
    ];

    pub fn key(self) -> &'static str {
        match self {
            BottleKey::GoldenHibiscus => "goldenHibiscus",
            BottleKey::KinkyCoconut => "kinkyCoconut",
            BottleKey::MagicMango => "magicMango",
            BottleKey::BubbleBanana => "bubbleBanana",
            BottleKey::CosmicCola => "cosmicCola",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.key() == key)
    }

    /// Translation key of the bottle's display name.
    pub fn name_key(self) -> &'static str {
        match self {
            BottleKey::GoldenHibiscus => "products.bottles.goldenHibiscus.name",
            BottleKey::KinkyCoconut => "products.bottles.kinkyCoconut.name",
            BottleKey::MagicMango => "products.bottles.magicMango.name",
            BottleKey::BubbleBanana => "products.bottles.bubbleBanana.name",
            BottleKey::CosmicCola => "products.bottles.cosmicCola.name",
        }
    }

    pub fn description_key(self) -> &'static str {
        match self {
            BottleKey::GoldenHibiscus => "products.bottles.goldenHibiscus.description",
            BottleKey::KinkyCoconut => "products.bottles.kinkyCoconut.description",
            BottleKey::MagicMango => "products.bottles.magicMango.description",
            BottleKey::BubbleBanana => "products.bottles.bubbleBanana.description",
            BottleKey::CosmicCola => "products.bottles.cosmicCola.description",
        }
    }

    pub fn features_key(self) -> &'static str {
        match self {
            BottleKey::GoldenHibiscus => "products.bottles.goldenHibiscus.features",
            BottleKey::KinkyCoconut => "products.bottles.kinkyCoconut.features",
            BottleKey::MagicMango => "products.bottles.magicMango.features",
            BottleKey::BubbleBanana => "products.bottles.bubbleBanana.features",
            BottleKey::CosmicCola => "products.bottles.cosmicCola.features",
        }
    }
}

pub struct Bottle {
    pub key: BottleKey,
    /// CSS gradient behind the whole page while this section is active.
    pub gradient: &'static str,
    /// Accent gradient for buttons and highlights within the section.
    pub accent: &'static str,
    /// File names inside the public media bucket.
    pub hero_image: &'static str,
    pub showcase_image: &'static str,
    pub effect_sound: &'static str,
}

/// Gradient used before any section has been scrolled into view.
pub const DEFAULT_GRADIENT: &str =
    "linear-gradient(to bottom, #9333ea, #ec4899, #f97316)";

pub const BOTTLES: [Bottle; 5] = [
    Bottle {
        key: BottleKey::GoldenHibiscus,
        gradient: "linear-gradient(to bottom, #dc2626, #f97316, #fbbf24)",
        accent: "linear-gradient(to right, #ef4444, #facc15)",
        hero_image: "images/single-hibiscus.png",
        showcase_image: "images/hib-detail.jpg",
        effect_sound: "music/cowbell-sharp-hit-2.wav",
    },
    Bottle {
        key: BottleKey::KinkyCoconut,
        gradient: "linear-gradient(to bottom, #16a34a, #84cc16, #2dd4bf)",
        accent: "linear-gradient(to right, #22c55e, #a3e635)",
        hero_image: "images/single-coco.png",
        showcase_image: "images/coco-detail.jpg",
        effect_sound: "music/cowbell-sharp-hit-3.wav",
    },
    Bottle {
        key: BottleKey::MagicMango,
        gradient: "linear-gradient(to bottom, #d97706, #f97316, #f87171)",
        accent: "linear-gradient(to right, #f59e0b, #fb923c)",
        hero_image: "images/single-mango.png",
        showcase_image: "images/mango-detail.jpg",
        effect_sound: "music/cowbell-sharp-hit-4.wav",
    },
    Bottle {
        key: BottleKey::BubbleBanana,
        gradient: "linear-gradient(to bottom, #ca8a04, #f97316, #facc15)",
        accent: "linear-gradient(to right, #eab308, #fde047)",
        hero_image: "images/single-banana.png",
        showcase_image: "images/banana-detail.jpg",
        effect_sound: "music/cowbell-sharp-hit-3.wav",
    },
    Bottle {
        key: BottleKey::CosmicCola,
        gradient: "linear-gradient(to bottom, #9333ea, #ec4899, #a855f7)",
        accent: "linear-gradient(to right, #a855f7, #f472b6)",
        hero_image: "images/single-cola.png",
        showcase_image: "images/cola-detail.jpg",
        effect_sound: "music/cowbell-sharp-hit-3.wav",
    },
];

pub fn bottle(key: BottleKey) -> &'static Bottle {
    // BOTTLES covers every variant, so the lookup always succeeds.
    BOTTLES.iter().find(|b| b.key == key).unwrap_or(&BOTTLES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_round_trip() {
        for k in BottleKey::ALL {
            assert_eq!(BottleKey::from_key(k.key()), Some(k));
        }
        assert_eq!(BottleKey::from_key("fantaOrange"), None);
    }

    #[test]
    fn catalog_covers_every_key_once() {
        let keys: HashSet<_> = BOTTLES.iter().map(|b| b.key).collect();
        assert_eq!(keys.len(), BottleKey::ALL.len());
        for b in &BOTTLES {
            assert!(b.gradient.starts_with("linear-gradient"));
            assert!(!b.hero_image.is_empty());
            assert!(!b.effect_sound.is_empty());
            assert!(b.key.name_key().contains(b.key.key()));
            assert!(b.key.description_key().contains(b.key.key()));
            assert!(b.key.features_key().contains(b.key.key()));
        }
    }
}

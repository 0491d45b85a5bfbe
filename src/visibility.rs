//! Tracks which product section dominates the viewport. An
//! `IntersectionObserver` feeds per-section visible fractions into the
//! pure selection in [`select_active`].

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

use crate::data::BottleKey;

/// Fraction of a section visible in a viewport of the given height, as a
/// share of the section's own height, clamped to [0, 1].
pub fn visible_fraction(top: f64, bottom: f64, viewport_height: f64) -> f64 {
    let height = bottom - top;
    if height <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    let visible_top = top.max(0.0);
    let visible_bottom = bottom.min(viewport_height);
    ((visible_bottom - visible_top).max(0.0) / height).clamp(0.0, 1.0)
}

/// Pick the section with the strictly greatest visible fraction. An exact
/// tie keeps the currently active section so the gradient never flickers;
/// when nothing is visible the current key stays as well.
pub fn select_active(
    fractions: &[(BottleKey, f64)],
    current: Option<BottleKey>,
) -> Option<BottleKey> {
    let mut best: Option<(BottleKey, f64)> = None;
    for &(key, fraction) in fractions {
        if fraction <= 0.0 {
            continue;
        }
        match best {
            None => best = Some((key, fraction)),
            Some((_, best_fraction)) => {
                if fraction > best_fraction
                    || (fraction == best_fraction && Some(key) == current)
                {
                    best = Some((key, fraction));
                }
            }
        }
    }
    best.map(|(key, _)| Some(key)).unwrap_or(current)
}

type Ratios = Rc<RefCell<HashMap<BottleKey, f64>>>;

/// Observer wiring. Holds the JS callback alive; dropping it disconnects.
pub struct SectionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
    ratios: Ratios,
    current: Rc<Cell<Option<BottleKey>>>,
    on_active: Callback<Option<BottleKey>>,
}

impl SectionObserver {
    pub fn new(on_active: Callback<Option<BottleKey>>) -> Result<Self, JsValue> {
        let ratios: Ratios = Rc::default();
        let current: Rc<Cell<Option<BottleKey>>> = Rc::default();

        let callback = Closure::<dyn FnMut(js_sys::Array)>::new({
            let ratios = ratios.clone();
            let current = current.clone();
            let on_active = on_active.clone();
            move |entries: js_sys::Array| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if let Some(key) = BottleKey::from_key(&entry.target().id()) {
                        let ratio = if entry.is_intersecting() {
                            entry.intersection_ratio()
                        } else {
                            0.0
                        };
                        ratios.borrow_mut().insert(key, ratio);
                    }
                }
                publish(&ratios, &current, &on_active);
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&thresholds());
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            observer,
            _callback: callback,
            ratios,
            current,
            on_active,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    /// Measure every section directly from its bounding box and publish.
    /// Used once after mount, when layout has settled but no scroll has
    /// happened yet.
    pub fn measure_now(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let viewport = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        for key in BottleKey::ALL {
            if let Some(element) = document.get_element_by_id(key.key()) {
                let rect = element.get_bounding_client_rect();
                let fraction = visible_fraction(rect.top(), rect.bottom(), viewport);
                self.ratios.borrow_mut().insert(key, fraction);
            }
        }
        publish(&self.ratios, &self.current, &self.on_active);
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn publish(
    ratios: &Ratios,
    current: &Rc<Cell<Option<BottleKey>>>,
    on_active: &Callback<Option<BottleKey>>,
) {
    // Catalog order keeps the earliest section winning when fractions are
    // equal and neither is the current one.
    let snapshot: Vec<(BottleKey, f64)> = BottleKey::ALL
        .into_iter()
        .map(|key| (key, ratios.borrow().get(&key).copied().unwrap_or(0.0)))
        .collect();
    let next = select_active(&snapshot, current.get());
    if next != current.get() {
        current.set(next);
        on_active.emit(next);
    }
}

fn thresholds() -> JsValue {
    let steps = js_sys::Array::new();
    for i in 0..=10 {
        steps.push(&JsValue::from_f64(f64::from(i) / 10.0));
    }
    steps.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BottleKey::*;

    #[test]
    fn fraction_is_clamped_intersection_over_height() {
        // Fully inside the viewport.
        assert_eq!(visible_fraction(100.0, 300.0, 800.0), 1.0);
        // Half scrolled off the top.
        assert_eq!(visible_fraction(-100.0, 100.0, 800.0), 0.5);
        // Hanging off the bottom.
        assert_eq!(visible_fraction(700.0, 900.0, 800.0), 0.5);
        // Entirely outside.
        assert_eq!(visible_fraction(900.0, 1100.0, 800.0), 0.0);
        assert_eq!(visible_fraction(-300.0, -100.0, 800.0), 0.0);
        // Degenerate rect.
        assert_eq!(visible_fraction(100.0, 100.0, 800.0), 0.0);
    }

    #[test]
    fn greatest_fraction_wins() {
        let fractions = [(GoldenHibiscus, 0.2), (MagicMango, 0.8), (CosmicCola, 0.5)];
        assert_eq!(select_active(&fractions, None), Some(MagicMango));
        assert_eq!(
            select_active(&fractions, Some(GoldenHibiscus)),
            Some(MagicMango)
        );
    }

    #[test]
    fn exact_tie_keeps_the_previous_key() {
        let fractions = [(GoldenHibiscus, 0.5), (MagicMango, 0.5)];
        // Previously active section wins the tie, regardless of order.
        assert_eq!(
            select_active(&fractions, Some(MagicMango)),
            Some(MagicMango)
        );
        assert_eq!(
            select_active(&fractions, Some(GoldenHibiscus)),
            Some(GoldenHibiscus)
        );
        // With no previous key the earliest listed wins.
        assert_eq!(select_active(&fractions, None), Some(GoldenHibiscus));
    }

    #[test]
    fn nothing_visible_keeps_current() {
        let fractions = [(GoldenHibiscus, 0.0), (MagicMango, 0.0)];
        assert_eq!(select_active(&fractions, Some(CosmicCola)), Some(CosmicCola));
        assert_eq!(select_active(&fractions, None), None);
    }

    #[test]
    fn selection_is_idempotent_for_a_stable_layout() {
        let fractions = [(BubbleBanana, 0.9), (KinkyCoconut, 0.3)];
        let first = select_active(&fractions, None);
        assert_eq!(select_active(&fractions, first), first);
    }
}

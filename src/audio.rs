//! One looping backdrop track plus a one-shot effect handle per bottle.
//! Playback is gated behind the first user gesture; failures are logged
//! and never shown to the visitor.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_console::log;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;
use yew::UseStateHandle;

use crate::config;
use crate::data::{BottleKey, BOTTLES};

pub const DEFAULT_VOLUME: f64 = 0.7;

const BACKDROP_TRACK: &str = "music/afrosoda-groove.mp3";

struct Inner {
    backdrop: HtmlAudioElement,
    effects: HashMap<BottleKey, HtmlAudioElement>,
    initialized: Cell<bool>,
}

/// Owns the audio element lifecycle. Created once at the App root; cloning
/// shares the same handles.
#[derive(Clone)]
pub struct AudioPlayer {
    inner: Rc<Inner>,
}

impl PartialEq for AudioPlayer {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl AudioPlayer {
    pub fn new() -> Result<Self, JsValue> {
        let backdrop = HtmlAudioElement::new_with_src(&config::media_url(BACKDROP_TRACK))?;
        backdrop.set_loop(true);
        backdrop.set_volume(DEFAULT_VOLUME);
        backdrop.set_preload("auto");

        let mut effects = HashMap::new();
        for bottle in &BOTTLES {
            let el = HtmlAudioElement::new_with_src(&config::media_url(bottle.effect_sound))?;
            el.set_volume(DEFAULT_VOLUME);
            el.set_preload("auto");
            effects.insert(bottle.key, el);
        }

        Ok(Self {
            inner: Rc::new(Inner {
                backdrop,
                effects,
                initialized: Cell::new(false),
            }),
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.initialized.get()
    }

    /// Play-then-pause every handle under the current user gesture so later
    /// playback calls are allowed. Transitions the initialized flag exactly
    /// once; a rejected play is logged and otherwise ignored.
    pub fn warm_up(&self) {
        if self.inner.initialized.replace(true) {
            return;
        }
        for element in self.all_handles() {
            match element.play() {
                Ok(promise) => {
                    let element = element.clone();
                    spawn_local(async move {
                        match JsFuture::from(promise).await {
                            Ok(_) => {
                                let _ = element.pause();
                                element.set_current_time(0.0);
                            }
                            Err(err) => log!("Sound initialization failed:", err),
                        }
                    });
                }
                Err(err) => log!("Sound initialization failed:", err),
            }
        }
    }

    fn resume_backdrop(&self, volume: f64, on_started: impl FnOnce() + 'static) {
        let backdrop = &self.inner.backdrop;
        backdrop.set_volume(volume);
        match backdrop.play() {
            Ok(promise) => spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => on_started(),
                    Err(err) => log!("Audio playback failed:", err),
                }
            }),
            Err(err) => log!("Audio playback failed:", err),
        }
    }

    fn pause_backdrop(&self) {
        let _ = self.inner.backdrop.pause();
    }

    /// One-shot effect: rewind first so rapid triggers restart instead of
    /// queueing.
    fn play_effect(&self, key: BottleKey, volume: f64) {
        if !self.is_initialized() {
            return;
        }
        let Some(element) = self.inner.effects.get(&key) else {
            return;
        };
        element.set_volume(volume);
        element.set_current_time(0.0);
        match element.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log!("Effect playback failed:", key.key(), err);
                }
            }),
            Err(err) => log!("Effect playback failed:", key.key(), err),
        }
    }

    fn apply_volume(&self, volume: f64) {
        for element in self.all_handles() {
            element.set_volume(volume);
        }
    }

    fn all_handles(&self) -> impl Iterator<Item = &HtmlAudioElement> {
        std::iter::once(&self.inner.backdrop).chain(self.inner.effects.values())
    }
}

/// Audio service threaded through component props. Pairs the element owner
/// with the play/volume UI state owned by the App root.
#[derive(Clone, PartialEq)]
pub struct AudioHandle {
    player: AudioPlayer,
    playing: UseStateHandle<bool>,
    volume: UseStateHandle<f64>,
}

impl AudioHandle {
    pub fn new(
        player: AudioPlayer,
        playing: UseStateHandle<bool>,
        volume: UseStateHandle<f64>,
    ) -> Self {
        Self {
            player,
            playing,
            volume,
        }
    }

    pub fn is_playing(&self) -> bool {
        *self.playing
    }

    pub fn volume(&self) -> f64 {
        *self.volume
    }

    /// First-gesture hook: warms the engine without starting playback.
    pub fn initialize(&self) {
        self.player.warm_up();
    }

    /// Play/pause toggle. Before initialization this routes to the warmup
    /// instead — the next toggle actually starts the music.
    pub fn toggle(&self) {
        if !self.player.is_initialized() {
            self.player.warm_up();
            return;
        }
        if *self.playing {
            self.player.pause_backdrop();
            self.playing.set(false);
        } else {
            let playing = self.playing.clone();
            // Volume is re-applied on every resume in case it changed while
            // paused.
            self.player
                .resume_backdrop(*self.volume, move || playing.set(true));
        }
    }

    pub fn set_volume(&self, volume: f64) {
        let volume = volume.clamp(0.0, 1.0);
        self.volume.set(volume);
        self.player.apply_volume(volume);
    }

    pub fn play_effect(&self, key: BottleKey) {
        self.player.play_effect(key, *self.volume);
    }
}

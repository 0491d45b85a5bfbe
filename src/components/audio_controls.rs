use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::audio::AudioHandle;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub audio: AudioHandle,
    pub animations_enabled: bool,
    pub on_toggle_animations: Callback<()>,
}

/// Floating control cluster: music play/pause, volume slider and the
/// background-animation toggle.
#[function_component(AudioControls)]
pub fn audio_controls(props: &Props) -> Html {
    let toggle_music = {
        let audio = props.audio.clone();
        Callback::from(move |_: MouseEvent| audio.toggle())
    };

    let change_volume = {
        let audio = props.audio.clone();
        Callback::from(move |e: InputEvent| {
            let raw = e.target_unchecked_into::<HtmlInputElement>().value();
            if let Ok(percent) = raw.parse::<f64>() {
                audio.set_volume(percent / 100.0);
            }
        })
    };

    let toggle_animations = {
        let on_toggle = props.on_toggle_animations.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    let volume_percent = (props.audio.volume() * 100.0).round() as i32;

    html! {
        <div class="audio-controls">
            <style>{r#"
                .audio-controls {
                    position: fixed;
                    bottom: 1.25rem;
                    left: 1.25rem;
                    z-index: 40;
                    display: flex;
                    gap: 0.6rem;
                    align-items: center;
                    padding: 0.5rem 0.9rem;
                    border-radius: 999px;
                    background: rgba(0, 0, 0, 0.45);
                    backdrop-filter: blur(6px);
                }
                .audio-controls button {
                    border: none;
                    background: none;
                    color: white;
                    font-size: 1.2rem;
                    cursor: pointer;
                }
                .audio-controls input[type="range"] {
                    width: 90px;
                    accent-color: #facc15;
                }
                .audio-controls button.dimmed { opacity: 0.45; }
            "#}</style>
            <button onclick={toggle_music} aria-label="Music">
                { if props.audio.is_playing() { "⏸" } else { "▶" } }
            </button>
            <input
                type="range"
                min="0"
                max="100"
                value={volume_percent.to_string()}
                oninput={change_volume}
                aria-label="Volume"
            />
            <button
                class={if props.animations_enabled { "" } else { "dimmed" }}
                onclick={toggle_animations}
                aria-label="Animations"
            >
                { "✨" }
            </button>
        </div>
    }
}

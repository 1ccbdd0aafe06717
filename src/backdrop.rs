//! Looping background video
//!
//! Cosmetic only: plays while a round runs, pauses and rewinds when it stops.
//! Nothing flows back into the simulation.

use wasm_bindgen::JsCast;
use web_sys::HtmlVideoElement;

use crate::sim::GameEvent;

/// Backdrop cue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackdropCue {
    Play,
    Stop,
}

impl BackdropCue {
    /// The cue carried by a game event, if any
    pub fn from_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::BackdropPlay => Some(BackdropCue::Play),
            GameEvent::BackdropStop => Some(BackdropCue::Stop),
            _ => None,
        }
    }
}

/// Background video controller
pub struct Backdrop {
    video: Option<HtmlVideoElement>,
}

impl Backdrop {
    /// Look up the video element by id (missing element disables the backdrop)
    pub fn new(element_id: &str) -> Self {
        let video = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
            .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok());
        if video.is_none() {
            log::warn!("No #{} video element - backdrop disabled", element_id);
        }
        if let Some(v) = &video {
            v.set_loop(true);
            v.set_muted(true);
        }
        Self { video }
    }

    pub fn apply(&self, cue: BackdropCue) {
        let Some(video) = &self.video else { return };
        match cue {
            BackdropCue::Play => {
                // Autoplay may be refused until a user gesture; the round runs regardless
                if let Err(e) = video.play() {
                    log::warn!("Backdrop play refused: {:?}", e);
                }
            }
            BackdropCue::Stop => {
                if let Err(e) = video.pause() {
                    log::warn!("Backdrop pause failed: {:?}", e);
                }
                video.set_current_time(0.0);
            }
        }
    }

    /// Apply every backdrop cue found in a batch of events
    pub fn handle_events(&self, events: &[GameEvent]) {
        for cue in events.iter().filter_map(BackdropCue::from_event) {
            self.apply(cue);
        }
    }
}

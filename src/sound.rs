//! Click sound effect trigger.
//!
//! Playback is fire-and-forget: hosts routinely refuse autoplay until the
//! user has interacted, so failures are logged and swallowed. They must
//! never reach the UI.

use std::fmt;
use std::rc::Rc;

use log::warn;

/// Asset path of the click effect.
pub const CLICK_SOUND_PATH: &str = "sound/click.mp3";

/// Playback volume for the click effect (0.0 .. 1.0).
pub const CLICK_SOUND_VOLUME: f32 = 0.4;

/// Why a playback attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// The host refused playback (e.g. autoplay restriction)
    Blocked(String),
    /// The asset could not be loaded
    Unavailable(String),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::Blocked(reason) => write!(f, "playback blocked: {reason}"),
            AudioError::Unavailable(reason) => write!(f, "audio asset unavailable: {reason}"),
        }
    }
}

impl std::error::Error for AudioError {}

/// Host hook for actually producing sound.
pub trait AudioSink {
    fn play(&self, path: &str, volume: f32) -> Result<(), AudioError>;
}

/// The click effect bound to its asset and volume.
pub struct ClickSound {
    sink: Rc<dyn AudioSink>,
}

impl ClickSound {
    pub fn new(sink: Rc<dyn AudioSink>) -> Self {
        Self { sink }
    }

    /// Attempt playback. Failures are logged at warn level and discarded.
    pub fn play(&self) {
        if let Err(err) = self.sink.play(CLICK_SOUND_PATH, CLICK_SOUND_VOLUME) {
            warn!("click sound not played: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingSink {
        calls: RefCell<Vec<(String, f32)>>,
        fail: bool,
    }

    impl AudioSink for RecordingSink {
        fn play(&self, path: &str, volume: f32) -> Result<(), AudioError> {
            self.calls.borrow_mut().push((path.to_string(), volume));
            if self.fail {
                Err(AudioError::Blocked("needs user interaction".into()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_plays_click_asset_at_configured_volume() {
        let sink = Rc::new(RecordingSink {
            calls: RefCell::new(Vec::new()),
            fail: false,
        });
        let click = ClickSound::new(sink.clone());
        click.play();

        let calls = sink.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, CLICK_SOUND_PATH);
        assert_eq!(calls[0].1, CLICK_SOUND_VOLUME);
    }

    #[test]
    fn test_failure_does_not_propagate() {
        let sink = Rc::new(RecordingSink {
            calls: RefCell::new(Vec::new()),
            fail: true,
        });
        let click = ClickSound::new(sink.clone());
        // Must not panic or return an error
        click.play();
        click.play();
        assert_eq!(sink.calls.borrow().len(), 2);
    }

    #[test]
    fn test_audio_error_display() {
        let err = AudioError::Blocked("autoplay".into());
        assert_eq!(err.to_string(), "playback blocked: autoplay");
        let err = AudioError::Unavailable("404".into());
        assert!(err.to_string().contains("unavailable"));
    }
}

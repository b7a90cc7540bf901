// File: src/speech.rs
use crate::core::builtin::{VOICE_TEST_EN, VOICE_TEST_HI};
use crate::core::types::Language;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::process::{Child, Command, Stdio};
use std::rc::Rc;
use tracing::{debug, warn};

/// Rate, pitch and volume applied to every utterance. Bounds are left to the
/// control that edits them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            rate: 0.9,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub lang: &'static str,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

/// The platform text-to-speech engine.
pub trait SpeechOutput {
    /// Stops whatever is being spoken. No-op when idle.
    fn cancel(&mut self);
    /// Starts speaking. Fire-and-forget: completion is never reported back.
    fn speak(&mut self, utterance: Utterance);
}

/// Turns text into utterances with one-at-a-time semantics: a new request
/// preempts the previous one instead of queueing behind it.
pub struct SpeechDispatcher {
    output: Box<dyn SpeechOutput>,
    settings: VoiceSettings,
}

impl SpeechDispatcher {
    pub fn new(output: Box<dyn SpeechOutput>, settings: VoiceSettings) -> Self {
        Self { output, settings }
    }

    pub fn speak(&mut self, text: &str, language: Language) {
        let utterance = Utterance {
            text: text.to_string(),
            lang: language.locale(),
            rate: self.settings.rate,
            pitch: self.settings.pitch,
            volume: self.settings.volume,
        };
        self.output.cancel();
        self.output.speak(utterance);
    }

    pub fn settings(&self) -> VoiceSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: VoiceSettings) {
        self.settings = settings;
    }
}

pub fn voice_test_phrase(language: Language) -> &'static str {
    match language {
        Language::English => VOICE_TEST_EN,
        Language::Hindi => VOICE_TEST_HI,
    }
}

/// Prints each utterance instead of playing it.
#[derive(Debug, Default)]
pub struct ConsoleSpeech;

impl SpeechOutput for ConsoleSpeech {
    fn cancel(&mut self) {}

    fn speak(&mut self, utterance: Utterance) {
        println!("🔊 [{}] {}", utterance.lang, utterance.text);
    }
}

/// Speaks through an external program with an espeak-compatible command line.
/// Cancelling kills the running child.
pub struct CommandSpeech {
    program: String,
    child: Option<Child>,
}

impl CommandSpeech {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            child: None,
        }
    }

    fn voice(lang: &str) -> &'static str {
        match lang {
            "hi-IN" => "hi",
            _ => "en-us",
        }
    }
}

impl SpeechOutput for CommandSpeech {
    fn cancel(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Ok(None) = child.try_wait() {
                let _ = child.kill();
            }
            let _ = child.wait();
        }
    }

    fn speak(&mut self, utterance: Utterance) {
        // espeak: 175 wpm, pitch 50 and amplitude 100 are the 1.0 baselines
        let wpm = (175.0 * utterance.rate).round().max(1.0) as u32;
        let pitch = (50.0 * utterance.pitch).round().clamp(0.0, 99.0) as u32;
        let amplitude = (100.0 * utterance.volume).round().clamp(0.0, 200.0) as u32;

        let spawned = Command::new(&self.program)
            .arg("-v")
            .arg(Self::voice(utterance.lang))
            .arg("-s")
            .arg(wpm.to_string())
            .arg("-p")
            .arg(pitch.to_string())
            .arg("-a")
            .arg(amplitude.to_string())
            .arg(&utterance.text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => {
                debug!(program = %self.program, lang = utterance.lang, "speaking");
                self.child = Some(child);
            }
            Err(e) => warn!(program = %self.program, error = %e, "speech program failed to start"),
        }
    }
}

impl Drop for CommandSpeech {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpeechEvent {
    Cancelled,
    Spoke(Utterance),
}

/// Records every call. Clones share the same log, so a test can keep one
/// handle and give the other to the board.
#[derive(Debug, Clone, Default)]
pub struct MemorySpeech {
    events: Rc<RefCell<Vec<SpeechEvent>>>,
}

impl MemorySpeech {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SpeechEvent> {
        self.events.borrow().clone()
    }

    /// Only the utterances, oldest first.
    pub fn spoken(&self) -> Vec<Utterance> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                SpeechEvent::Spoke(u) => Some(u.clone()),
                SpeechEvent::Cancelled => None,
            })
            .collect()
    }

    pub fn last_text(&self) -> Option<String> {
        self.spoken().pop().map(|u| u.text)
    }
}

impl SpeechOutput for MemorySpeech {
    fn cancel(&mut self) {
        self.events.borrow_mut().push(SpeechEvent::Cancelled);
    }

    fn speak(&mut self, utterance: Utterance) {
        self.events.borrow_mut().push(SpeechEvent::Spoke(utterance));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancels_before_every_utterance() {
        let speech = MemorySpeech::new();
        let mut dispatcher = SpeechDispatcher::new(Box::new(speech.clone()), VoiceSettings::default());
        dispatcher.speak("Water", Language::English);
        dispatcher.speak("पानी", Language::Hindi);

        let events = speech.events();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0], SpeechEvent::Cancelled);
        assert_eq!(events[2], SpeechEvent::Cancelled);
        let spoken = speech.spoken();
        assert_eq!(spoken[0].lang, "en-US");
        assert_eq!(spoken[1].lang, "hi-IN");
        assert_eq!(spoken[1].text, "पानी");
    }

    #[test]
    fn test_utterance_carries_settings() {
        let speech = MemorySpeech::new();
        let mut dispatcher = SpeechDispatcher::new(Box::new(speech.clone()), VoiceSettings::default());
        dispatcher.set_settings(VoiceSettings { rate: 1.5, pitch: 0.5, volume: 0.2 });
        dispatcher.speak("Go", Language::English);

        let utterance = &speech.spoken()[0];
        assert_eq!(utterance.rate, 1.5);
        assert_eq!(utterance.pitch, 0.5);
        assert_eq!(utterance.volume, 0.2);
    }

    #[test]
    fn test_default_settings() {
        let settings = VoiceSettings::default();
        assert_eq!(settings.rate, 0.9);
        assert_eq!(settings.pitch, 1.0);
        assert_eq!(settings.volume, 1.0);
    }

    #[test]
    fn test_missing_program_is_not_fatal() {
        let mut speech = CommandSpeech::new("definitely-not-a-tts-program-xyz");
        speech.speak(Utterance {
            text: "hello".into(),
            lang: "en-US",
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
        });
        speech.cancel();
    }
}

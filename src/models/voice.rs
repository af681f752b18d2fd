use std::fmt;
use std::rc::Rc;

use thiserror::Error;

/// Identifies one recognition session. Events tagged with an older token are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionToken(u64);

impl SessionToken {
    pub const fn first() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Something the platform recognizer reported for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    Result { transcript: String, is_final: bool },
    Error(RecognitionError),
    End,
}

/// Recognition failures. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecognitionError {
    #[error("Microphone access denied. Please check your browser settings and permissions.")]
    PermissionDenied,

    #[error("No speech was detected. Please try again.")]
    NoSpeech,

    #[error("Network error occurred. Please check your internet connection.")]
    Network,

    #[error("No microphone was found. Please check your device settings.")]
    NoMicrophone,

    #[error("Speech recognition service is not allowed. Please try again later.")]
    ServiceNotAllowed,

    #[error("Could not understand speech. Please try again.")]
    NoMatch,

    #[error("Speech recognition is still initializing. Please try again in a moment.")]
    Initializing,

    #[error("Speech recognition is not available.")]
    Unavailable,

    #[error("Failed to start speech recognition. Please try again.")]
    StartFailed { detail: String },

    #[error("An error occurred with speech recognition.")]
    Other { code: String },
}

impl RecognitionError {
    /// Map a `SpeechRecognitionErrorEvent.error` code
    pub fn from_code(code: &str) -> Self {
        match code {
            "not-allowed" => Self::PermissionDenied,
            "no-speech" => Self::NoSpeech,
            "network" => Self::Network,
            "audio-capture" => Self::NoMicrophone,
            "service-not-allowed" => Self::ServiceNotAllowed,
            other => Self::Other {
                code: other.to_string(),
            },
        }
    }
}

/// Receives recognizer events on later event-loop turns.
pub type SpeechEventSink = Rc<dyn Fn(SessionToken, SpeechEvent)>;

/// Platform speech-to-text capability.
///
/// Implementations deliver events for a session to their sink tagged with the
/// token passed to `start`, and must not deliver anything for a session once
/// `stop` has returned.
pub trait SpeechAdapter {
    fn is_supported(&self) -> bool;

    /// Begin a new session, tearing down any previous one
    fn start(&self, token: SessionToken) -> Result<(), RecognitionError>;

    /// End the current session, if any
    fn stop(&self);
}

/// Stand-in used when the platform has no speech recognition.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledSpeech;

impl SpeechAdapter for DisabledSpeech {
    fn is_supported(&self) -> bool {
        false
    }

    fn start(&self, _token: SessionToken) -> Result<(), RecognitionError> {
        Err(RecognitionError::Unavailable)
    }

    fn stop(&self) {}
}

/// Where the voice input currently is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoicePhase {
    Initializing,
    /// The platform has no recognizer; voice input stays off for this overlay
    Unsupported,
    Idle,
    Listening,
    Error(RecognitionError),
}

impl VoicePhase {
    pub const fn is_listening(&self) -> bool {
        matches!(self, Self::Listening)
    }
}

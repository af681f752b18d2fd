use crate::models::product::{search, Product};
use crate::models::voice::{RecognitionError, SessionToken, SpeechAdapter, SpeechEvent, VoicePhase};

/// What the overlay renders. Owned by one overlay instance and dropped when it closes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<Product>,
    pub listening: bool,
    pub error: Option<String>,
}

/// Follow-up work the caller owes after driving the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceOutcome {
    /// Nothing changed (stale token, interim result, unsupported platform)
    Ignored,
    /// A session started; pending timers belong to older sessions
    Started(SessionToken),
    /// Voice input stopped on request; cancel any pending timers
    Stopped,
    /// A final transcript landed; (re)arm the quiet-period timer for this token
    ArmQuietTimer(SessionToken),
    /// The session ended on its own; cancel any pending timers
    Finished,
    /// The session failed; schedule error dismissal for this token
    Failed(SessionToken),
}

/// Controller behind the search overlay: free-text filtering plus the voice
/// input state machine.
pub struct SearchSession<'a> {
    catalog: &'a [Product],
    adapter: Box<dyn SpeechAdapter>,
    state: SearchState,
    phase: VoicePhase,
    token: SessionToken,
    quiet_pending: bool,
}

impl<'a> SearchSession<'a> {
    pub fn new(catalog: &'a [Product], adapter: Box<dyn SpeechAdapter>) -> Self {
        Self {
            catalog,
            adapter,
            state: SearchState::default(),
            phase: VoicePhase::Initializing,
            token: SessionToken::first(),
            quiet_pending: false,
        }
    }

    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    pub const fn phase(&self) -> &VoicePhase {
        &self.phase
    }

    /// Whether the voice control should be offered at all
    pub const fn voice_available(&self) -> bool {
        !matches!(self.phase, VoicePhase::Initializing | VoicePhase::Unsupported)
    }

    /// Check the platform for speech recognition. Only meaningful once, while initializing.
    pub fn probe(&mut self) {
        if self.phase != VoicePhase::Initializing {
            return;
        }

        self.phase = if self.adapter.is_supported() {
            VoicePhase::Idle
        } else {
            tracing::info!("speech recognition unsupported; voice search disabled");
            VoicePhase::Unsupported
        };
    }

    /// Replace the query and refilter the catalog
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
        self.state.results = search(self.catalog, &self.state.query);
    }

    /// Empty the query and results and stop listening
    pub fn clear(&mut self) -> VoiceOutcome {
        self.set_query(String::new());
        self.stop_listening()
    }

    pub fn toggle_voice(&mut self) -> VoiceOutcome {
        match self.phase {
            VoicePhase::Unsupported => VoiceOutcome::Ignored,
            VoicePhase::Initializing => {
                // Phase stays Initializing; the dismiss timer clears the message
                self.token = self.token.next();
                self.state.error = Some(RecognitionError::Initializing.to_string());
                VoiceOutcome::Failed(self.token)
            }
            VoicePhase::Listening => self.stop_listening(),
            VoicePhase::Idle | VoicePhase::Error(_) => self.start_listening(),
        }
    }

    fn start_listening(&mut self) -> VoiceOutcome {
        // Invalidate the previous session before the platform sees the new one
        self.token = self.token.next();
        self.adapter.stop();
        self.quiet_pending = false;
        self.state.error = None;

        match self.adapter.start(self.token) {
            Ok(()) => {
                tracing::debug!(token = %self.token, "voice session started");
                self.phase = VoicePhase::Listening;
                self.state.listening = true;
                VoiceOutcome::Started(self.token)
            }
            Err(e) => self.fail(e),
        }
    }

    /// Stop any in-flight session. Safe to call in every phase.
    pub fn stop_listening(&mut self) -> VoiceOutcome {
        self.token = self.token.next();
        self.adapter.stop();
        self.quiet_pending = false;
        self.state.listening = false;
        // Any pending dismissal carries the old token, so the message goes now
        self.state.error = None;
        match self.phase {
            VoicePhase::Listening => {
                tracing::debug!("voice session stopped");
                self.phase = VoicePhase::Idle;
            }
            VoicePhase::Error(_) => self.phase = VoicePhase::Idle,
            VoicePhase::Initializing | VoicePhase::Unsupported | VoicePhase::Idle => {}
        }
        VoiceOutcome::Stopped
    }

    /// Tear down before the overlay goes away
    pub fn shutdown(&mut self) {
        self.stop_listening();
    }

    fn fail(&mut self, error: RecognitionError) -> VoiceOutcome {
        tracing::warn!(?error, "voice session failed");
        self.token = self.token.next();
        self.adapter.stop();
        self.quiet_pending = false;
        self.state.listening = false;
        self.state.error = Some(error.to_string());
        self.phase = VoicePhase::Error(error);
        VoiceOutcome::Failed(self.token)
    }

    fn is_current(&self, token: SessionToken) -> bool {
        self.token == token && self.phase.is_listening()
    }

    /// Apply an event from the recognizer. Events from superseded sessions are dropped.
    pub fn handle_event(&mut self, token: SessionToken, event: SpeechEvent) -> VoiceOutcome {
        if !self.is_current(token) {
            tracing::debug!(%token, current = %self.token, "dropping stale speech event");
            return VoiceOutcome::Ignored;
        }

        match event {
            SpeechEvent::Result {
                is_final: false, ..
            } => VoiceOutcome::Ignored,
            SpeechEvent::Result {
                transcript,
                is_final: true,
            } => {
                self.set_query(transcript.trim());
                self.quiet_pending = true;
                VoiceOutcome::ArmQuietTimer(token)
            }
            SpeechEvent::Error(error) => self.fail(error),
            SpeechEvent::End => {
                self.token = self.token.next();
                self.adapter.stop();
                self.quiet_pending = false;
                self.state.listening = false;
                self.phase = VoicePhase::Idle;
                VoiceOutcome::Finished
            }
        }
    }

    /// The quiet period after the last final transcript ran out
    pub fn quiet_period_elapsed(&mut self, token: SessionToken) -> VoiceOutcome {
        if !self.is_current(token) || !self.quiet_pending {
            return VoiceOutcome::Ignored;
        }

        self.token = self.token.next();
        self.adapter.stop();
        self.quiet_pending = false;
        self.state.listening = false;
        self.phase = VoicePhase::Idle;
        VoiceOutcome::Finished
    }

    /// Clear a transient error message, returning to idle
    pub fn dismiss_error(&mut self, token: SessionToken) -> VoiceOutcome {
        if self.token != token || self.state.error.is_none() {
            return VoiceOutcome::Ignored;
        }

        self.state.error = None;
        if matches!(self.phase, VoicePhase::Error(_)) {
            self.phase = VoicePhase::Idle;
        }
        VoiceOutcome::Finished
    }
}

impl Drop for SearchSession<'_> {
    fn drop(&mut self) {
        self.adapter.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::models::product::{Category, CATALOG};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Start(SessionToken),
        Stop,
    }

    #[derive(Clone)]
    struct ScriptedSpeech {
        supported: bool,
        start_error: Option<RecognitionError>,
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl ScriptedSpeech {
        fn supported() -> Self {
            Self {
                supported: true,
                start_error: None,
                calls: Rc::default(),
            }
        }

        fn starts(&self) -> Vec<SessionToken> {
            self.calls
                .borrow()
                .iter()
                .filter_map(|call| match call {
                    Call::Start(token) => Some(*token),
                    Call::Stop => None,
                })
                .collect()
        }

        fn last_call(&self) -> Option<Call> {
            self.calls.borrow().last().cloned()
        }
    }

    impl SpeechAdapter for ScriptedSpeech {
        fn is_supported(&self) -> bool {
            self.supported
        }

        fn start(&self, token: SessionToken) -> Result<(), RecognitionError> {
            if let Some(error) = self.start_error.clone() {
                return Err(error);
            }
            self.calls.borrow_mut().push(Call::Start(token));
            Ok(())
        }

        fn stop(&self) {
            self.calls.borrow_mut().push(Call::Stop);
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            Product {
                id: "1",
                name: "Luxury Collection Perfume",
                description: "",
                category: Category::Bestsellers,
                image: "",
                price_cents: 0,
            },
            Product {
                id: "2",
                name: "Premium Series Fragrance",
                description: "",
                category: Category::NewArrivals,
                image: "",
                price_cents: 0,
            },
            Product {
                id: "3",
                name: "Classic Collection",
                description: "",
                category: Category::Gallery,
                image: "",
                price_cents: 0,
            },
        ]
    }

    fn listening_session(catalog: &[Product]) -> (SearchSession<'_>, ScriptedSpeech, SessionToken) {
        let speech = ScriptedSpeech::supported();
        let mut session = SearchSession::new(catalog, Box::new(speech.clone()));
        session.probe();
        let VoiceOutcome::Started(token) = session.toggle_voice() else {
            panic!("voice should start");
        };
        (session, speech, token)
    }

    fn final_result(text: &str) -> SpeechEvent {
        SpeechEvent::Result {
            transcript: text.to_string(),
            is_final: true,
        }
    }

    #[test]
    fn test_query_filters_fixture() {
        let catalog = fixture();
        let mut session = SearchSession::new(&catalog, Box::new(ScriptedSpeech::supported()));

        session.set_query("collection");
        let ids: Vec<_> = session.state().results.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1", "3"]);

        session.set_query("zzz");
        assert!(session.state().results.is_empty());
    }

    #[test]
    fn test_storefront_catalog_is_searchable() {
        let mut session = SearchSession::new(&CATALOG, Box::new(ScriptedSpeech::supported()));
        session.set_query("PERFUME");
        let names: Vec<_> = session.state().results.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Luxury Collection Perfume"]);
    }

    #[test]
    fn test_clear_empties_results_and_stops_voice() {
        let catalog = fixture();
        let (mut session, speech, _) = listening_session(&catalog);
        session.set_query("premium");
        assert_eq!(session.state().results.len(), 1);

        assert_eq!(session.clear(), VoiceOutcome::Stopped);
        assert_eq!(session.state(), &SearchState::default());
        assert_eq!(session.phase(), &VoicePhase::Idle);
        assert_eq!(speech.last_call(), Some(Call::Stop));
    }

    #[test]
    fn test_probe_without_support_disables_voice() {
        let catalog = fixture();
        let speech = ScriptedSpeech {
            supported: false,
            ..ScriptedSpeech::supported()
        };
        let mut session = SearchSession::new(&catalog, Box::new(speech.clone()));
        assert_eq!(session.phase(), &VoicePhase::Initializing);

        session.probe();
        assert_eq!(session.phase(), &VoicePhase::Unsupported);
        assert!(!session.voice_available());
        assert_eq!(session.toggle_voice(), VoiceOutcome::Ignored);
        assert!(speech.starts().is_empty());
        assert_eq!(session.state().error, None);
    }

    #[test]
    fn test_toggle_while_initializing_reports_message() {
        let catalog = fixture();
        let speech = ScriptedSpeech::supported();
        let mut session = SearchSession::new(&catalog, Box::new(speech.clone()));

        let VoiceOutcome::Failed(dismiss_token) = session.toggle_voice() else {
            panic!("toggling while initializing should schedule a dismissal");
        };
        assert_eq!(
            session.state().error.as_deref(),
            Some("Speech recognition is still initializing. Please try again in a moment.")
        );
        assert!(speech.starts().is_empty());

        assert_eq!(session.dismiss_error(dismiss_token), VoiceOutcome::Finished);
        assert_eq!(session.state().error, None);
        assert_eq!(session.phase(), &VoicePhase::Initializing);

        session.probe();
        assert_eq!(session.phase(), &VoicePhase::Idle);
    }

    #[test]
    fn test_toggle_on_and_off() {
        let catalog = fixture();
        let (mut session, speech, token) = listening_session(&catalog);
        assert!(session.state().listening);
        assert_eq!(speech.starts(), vec![token]);

        assert_eq!(session.toggle_voice(), VoiceOutcome::Stopped);
        assert!(!session.state().listening);
        assert_eq!(session.phase(), &VoicePhase::Idle);
    }

    #[test]
    fn test_interim_results_never_touch_query() {
        let catalog = fixture();
        let (mut session, _, token) = listening_session(&catalog);
        session.set_query("typed");

        let outcome = session.handle_event(
            token,
            SpeechEvent::Result {
                transcript: "lux".to_string(),
                is_final: false,
            },
        );
        assert_eq!(outcome, VoiceOutcome::Ignored);
        assert_eq!(session.state().query, "typed");
    }

    #[test]
    fn test_final_transcript_sets_query_then_quiet_period_stops() {
        let catalog = fixture();
        let (mut session, speech, token) = listening_session(&catalog);

        assert_eq!(
            session.handle_event(token, final_result(" classic ")),
            VoiceOutcome::ArmQuietTimer(token)
        );
        assert_eq!(session.state().query, "classic");
        assert_eq!(session.state().results.len(), 1);
        assert!(session.state().listening);

        assert_eq!(session.quiet_period_elapsed(token), VoiceOutcome::Finished);
        assert!(!session.state().listening);
        assert_eq!(session.phase(), &VoicePhase::Idle);
        assert_eq!(speech.last_call(), Some(Call::Stop));
        assert_eq!(session.state().query, "classic");
    }

    #[test]
    fn test_latest_final_transcript_wins() {
        let catalog = fixture();
        let (mut session, _, token) = listening_session(&catalog);

        session.handle_event(token, final_result("luxury"));
        session.handle_event(token, final_result("premium"));
        assert_eq!(session.state().query, "premium");
    }

    #[test]
    fn test_close_stops_session_and_ignores_late_callbacks() {
        let catalog = fixture();
        let (mut session, speech, token) = listening_session(&catalog);
        session.set_query("lux");
        let before = session.state().clone();

        session.shutdown();
        assert_eq!(speech.last_call(), Some(Call::Stop));
        let after_close = session.state().clone();
        assert!(!after_close.listening);

        // Delayed platform callbacks and timers for the closed session
        assert_eq!(
            session.handle_event(token, final_result("premium")),
            VoiceOutcome::Ignored
        );
        assert_eq!(
            session.handle_event(token, SpeechEvent::Error(RecognitionError::Network)),
            VoiceOutcome::Ignored
        );
        assert_eq!(session.quiet_period_elapsed(token), VoiceOutcome::Ignored);
        assert_eq!(session.state(), &after_close);
        assert_eq!(session.state().query, before.query);
    }

    #[test]
    fn test_restart_supersedes_previous_session() {
        let catalog = fixture();
        let (mut session, speech, first) = listening_session(&catalog);

        session.toggle_voice();
        let VoiceOutcome::Started(second) = session.toggle_voice() else {
            panic!("voice should restart");
        };
        assert_ne!(first, second);
        assert_eq!(speech.starts(), vec![first, second]);

        assert_eq!(
            session.handle_event(first, final_result("luxury")),
            VoiceOutcome::Ignored
        );
        assert_eq!(session.handle_event(first, SpeechEvent::End), VoiceOutcome::Ignored);
        assert!(session.state().listening);
        assert_eq!(session.state().query, "");
    }

    #[test]
    fn test_quiet_timer_from_older_transcript_is_stale_after_end() {
        let catalog = fixture();
        let (mut session, _, token) = listening_session(&catalog);

        session.handle_event(token, final_result("woody"));
        assert_eq!(session.handle_event(token, SpeechEvent::End), VoiceOutcome::Finished);
        assert_eq!(session.quiet_period_elapsed(token), VoiceOutcome::Ignored);
        assert_eq!(session.state().query, "woody");
    }

    #[test]
    fn test_end_without_result_never_restarts() {
        let catalog = fixture();
        let (mut session, speech, token) = listening_session(&catalog);

        assert_eq!(session.handle_event(token, SpeechEvent::End), VoiceOutcome::Finished);
        assert_eq!(session.phase(), &VoicePhase::Idle);
        assert_eq!(speech.starts().len(), 1);
    }

    #[test]
    fn test_platform_error_surfaces_message_then_dismisses() {
        let catalog = fixture();
        let (mut session, speech, token) = listening_session(&catalog);

        let VoiceOutcome::Failed(dismiss_token) = session.handle_event(
            token,
            SpeechEvent::Error(RecognitionError::from_code("not-allowed")),
        ) else {
            panic!("error should fail the session");
        };
        assert_eq!(
            session.phase(),
            &VoicePhase::Error(RecognitionError::PermissionDenied)
        );
        assert!(!session.state().listening);
        assert_eq!(
            session.state().error.as_deref(),
            Some("Microphone access denied. Please check your browser settings and permissions.")
        );
        assert_eq!(speech.last_call(), Some(Call::Stop));

        assert_eq!(session.dismiss_error(dismiss_token), VoiceOutcome::Finished);
        assert_eq!(session.phase(), &VoicePhase::Idle);
        assert_eq!(session.state().error, None);
    }

    #[test]
    fn test_no_match_error() {
        let catalog = fixture();
        let (mut session, _, token) = listening_session(&catalog);

        session.handle_event(token, SpeechEvent::Error(RecognitionError::NoMatch));
        assert_eq!(
            session.state().error.as_deref(),
            Some("Could not understand speech. Please try again.")
        );
    }

    #[test]
    fn test_restart_from_error_makes_old_dismissal_stale() {
        let catalog = fixture();
        let (mut session, _, token) = listening_session(&catalog);

        let VoiceOutcome::Failed(dismiss_token) =
            session.handle_event(token, SpeechEvent::Error(RecognitionError::NoSpeech))
        else {
            panic!("error should fail the session");
        };

        assert!(matches!(session.toggle_voice(), VoiceOutcome::Started(_)));
        assert_eq!(session.state().error, None);
        assert_eq!(session.dismiss_error(dismiss_token), VoiceOutcome::Ignored);
        assert!(session.state().listening);
    }

    #[test]
    fn test_clear_during_error_removes_message() {
        let catalog = fixture();
        let (mut session, _, token) = listening_session(&catalog);

        let VoiceOutcome::Failed(dismiss_token) =
            session.handle_event(token, SpeechEvent::Error(RecognitionError::Network))
        else {
            panic!("error should fail the session");
        };

        assert_eq!(session.clear(), VoiceOutcome::Stopped);
        assert_eq!(session.state().error, None);
        assert_eq!(session.phase(), &VoicePhase::Idle);

        // The timer scheduled for the failure is now stale and must not resurrect anything
        assert_eq!(session.dismiss_error(dismiss_token), VoiceOutcome::Ignored);
        assert_eq!(session.state(), &SearchState::default());
    }

    #[test]
    fn test_shutdown_during_error_returns_to_idle() {
        let catalog = fixture();
        let (mut session, _, token) = listening_session(&catalog);
        session.handle_event(token, SpeechEvent::Error(RecognitionError::NoMicrophone));

        session.shutdown();
        assert_eq!(session.phase(), &VoicePhase::Idle);
        assert_eq!(session.state().error, None);
    }

    #[test]
    fn test_start_failure_is_reported() {
        let catalog = fixture();
        let speech = ScriptedSpeech {
            start_error: Some(RecognitionError::StartFailed {
                detail: "InvalidStateError".to_string(),
            }),
            ..ScriptedSpeech::supported()
        };
        let mut session = SearchSession::new(&catalog, Box::new(speech));
        session.probe();

        assert!(matches!(session.toggle_voice(), VoiceOutcome::Failed(_)));
        assert!(!session.state().listening);
        assert_eq!(
            session.state().error.as_deref(),
            Some("Failed to start speech recognition. Please try again.")
        );
    }

    #[test]
    fn test_drop_stops_adapter() {
        let catalog = fixture();
        let (session, speech, _) = listening_session(&catalog);
        drop(session);
        assert_eq!(speech.last_call(), Some(Call::Stop));
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::voice::{
    DisabledSpeech, RecognitionError, SessionToken, SpeechAdapter, SpeechEvent, SpeechEventSink,
};

/// Constructor names probed on `window`, most standard first.
const RECOGNIZER_CONSTRUCTORS: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];

#[wasm_bindgen]
extern "C" {
    type Recognizer;

    #[wasm_bindgen(method, setter)]
    fn set_continuous(this: &Recognizer, value: bool);
    #[wasm_bindgen(method, setter = interimResults)]
    fn set_interim_results(this: &Recognizer, value: bool);
    #[wasm_bindgen(method, setter = maxAlternatives)]
    fn set_max_alternatives(this: &Recognizer, value: u32);
    #[wasm_bindgen(method, setter)]
    fn set_lang(this: &Recognizer, value: &str);

    #[wasm_bindgen(method, setter)]
    fn set_onresult(this: &Recognizer, handler: Option<&Function>);
    #[wasm_bindgen(method, setter)]
    fn set_onerror(this: &Recognizer, handler: Option<&Function>);
    #[wasm_bindgen(method, setter)]
    fn set_onnomatch(this: &Recognizer, handler: Option<&Function>);
    #[wasm_bindgen(method, setter)]
    fn set_onend(this: &Recognizer, handler: Option<&Function>);

    #[wasm_bindgen(method, catch)]
    fn start(this: &Recognizer) -> Result<(), JsValue>;
    #[wasm_bindgen(method)]
    fn abort(this: &Recognizer);

    type RecognitionResultEvent;

    #[wasm_bindgen(method, getter)]
    fn results(this: &RecognitionResultEvent) -> RecognitionResultList;

    type RecognitionResultList;

    #[wasm_bindgen(method, getter)]
    fn length(this: &RecognitionResultList) -> u32;
    #[wasm_bindgen(method, js_name = item)]
    fn result_at(this: &RecognitionResultList, index: u32) -> RecognitionResult;

    type RecognitionResult;

    #[wasm_bindgen(method, getter = isFinal)]
    fn is_final(this: &RecognitionResult) -> bool;
    #[wasm_bindgen(method, js_name = item)]
    fn alternative_at(this: &RecognitionResult, index: u32) -> RecognitionAlternative;

    type RecognitionAlternative;

    #[wasm_bindgen(method, getter)]
    fn transcript(this: &RecognitionAlternative) -> String;

    type RecognitionErrorEvent;

    #[wasm_bindgen(method, getter)]
    fn error(this: &RecognitionErrorEvent) -> String;
}

/// JS handlers attached to one recognizer instance. Dropped only after detaching.
struct Handlers {
    _on_result: Closure<dyn FnMut(RecognitionResultEvent)>,
    _on_error: Closure<dyn FnMut(RecognitionErrorEvent)>,
    _on_no_match: Closure<dyn FnMut(JsValue)>,
    _on_end: Closure<dyn FnMut(JsValue)>,
}

struct ActiveSession {
    recognizer: Recognizer,
    _handlers: Handlers,
}

impl ActiveSession {
    /// Detach every handler, then abort, so nothing fires for this session afterwards
    fn detach(&self) {
        self.recognizer.set_onresult(None);
        self.recognizer.set_onerror(None);
        self.recognizer.set_onnomatch(None);
        self.recognizer.set_onend(None);
        self.recognizer.abort();
    }
}

/// Web Speech API adapter. Each session gets a fresh recognizer instance.
pub struct WebSpeech {
    constructor: Function,
    language: String,
    sink: SpeechEventSink,
    active: RefCell<Option<ActiveSession>>,
    /// Last stopped session; its handlers may still be on the call stack
    retired: RefCell<Option<ActiveSession>>,
}

impl WebSpeech {
    /// The browser's recognizer when present, otherwise a disabled adapter
    pub fn detect(language: &str, sink: SpeechEventSink) -> Box<dyn SpeechAdapter> {
        match find_constructor() {
            Some(constructor) => Box::new(Self {
                constructor,
                language: language.to_string(),
                sink,
                active: RefCell::new(None),
                retired: RefCell::new(None),
            }),
            None => Box::new(DisabledSpeech),
        }
    }

    fn build_session(&self, token: SessionToken) -> Result<ActiveSession, RecognitionError> {
        let recognizer: Recognizer = Reflect::construct(&self.constructor, &Array::new())
            .map_err(|e| RecognitionError::StartFailed {
                detail: format!("{e:?}"),
            })?
            .unchecked_into();

        recognizer.set_continuous(false);
        recognizer.set_interim_results(true);
        recognizer.set_max_alternatives(1);
        recognizer.set_lang(&self.language);

        let sink = Rc::clone(&self.sink);
        let on_result: Closure<dyn FnMut(RecognitionResultEvent)> =
            Closure::new(move |event: RecognitionResultEvent| {
                let results = event.results();
                let count = results.length();
                if count == 0 {
                    return;
                }
                let latest = results.result_at(count - 1);
                sink(
                    token,
                    SpeechEvent::Result {
                        transcript: latest.alternative_at(0).transcript(),
                        is_final: latest.is_final(),
                    },
                );
            });

        let sink = Rc::clone(&self.sink);
        let on_error: Closure<dyn FnMut(RecognitionErrorEvent)> =
            Closure::new(move |event: RecognitionErrorEvent| {
                let error = RecognitionError::from_code(&event.error());
                sink(token, SpeechEvent::Error(error));
            });

        let sink = Rc::clone(&self.sink);
        let on_no_match: Closure<dyn FnMut(JsValue)> = Closure::new(move |_: JsValue| {
            sink(token, SpeechEvent::Error(RecognitionError::NoMatch));
        });

        let sink = Rc::clone(&self.sink);
        let on_end: Closure<dyn FnMut(JsValue)> = Closure::new(move |_: JsValue| {
            sink(token, SpeechEvent::End);
        });

        recognizer.set_onresult(Some(on_result.as_ref().unchecked_ref()));
        recognizer.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        recognizer.set_onnomatch(Some(on_no_match.as_ref().unchecked_ref()));
        recognizer.set_onend(Some(on_end.as_ref().unchecked_ref()));

        Ok(ActiveSession {
            recognizer,
            _handlers: Handlers {
                _on_result: on_result,
                _on_error: on_error,
                _on_no_match: on_no_match,
                _on_end: on_end,
            },
        })
    }
}

impl SpeechAdapter for WebSpeech {
    fn is_supported(&self) -> bool {
        true
    }

    fn start(&self, token: SessionToken) -> Result<(), RecognitionError> {
        self.stop();

        let session = self.build_session(token)?;
        if let Err(e) = session.recognizer.start() {
            session.detach();
            return Err(RecognitionError::StartFailed {
                detail: format!("{e:?}"),
            });
        }

        *self.active.borrow_mut() = Some(session);
        Ok(())
    }

    fn stop(&self) {
        if let Some(session) = self.active.borrow_mut().take() {
            session.detach();
            self.retired.replace(Some(session));
        }
    }
}

impl Drop for WebSpeech {
    fn drop(&mut self) {
        self.stop();
    }
}

fn find_constructor() -> Option<Function> {
    let window = web_sys::window()?;
    RECOGNIZER_CONSTRUCTORS.iter().find_map(|name| {
        Reflect::get(&window, &JsValue::from_str(name))
            .ok()
            .filter(JsValue::is_function)
            .map(JsCast::unchecked_into)
    })
}

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use web_sys::{HtmlInputElement, KeyboardEvent, MouseEvent};

use crate::components::icons::{self, Icon};
use crate::config::SiteConfig;
use crate::models::app_state::Navigator;
use crate::models::product::{Product, CATALOG};
use crate::models::search_state::{SearchSession, SearchState, VoiceOutcome};
use crate::models::voice::{SessionToken, SpeechEvent, SpeechEventSink};
use crate::platform::dom::is_backdrop_event;
use crate::platform::speech::WebSpeech;

const POPULAR_SEARCHES: [&str; 4] = ["Floral", "Citrus", "Woody", "Oriental"];

type Session = SearchSession<'static>;

/// Full-screen search panel toggled from the navigation bar.
/// The panel and its session only exist while `open` is true.
#[component]
pub fn SearchOverlay(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <SearchPanel open=open />
        </Show>
    }
}

/// Pending timeouts for the voice session
#[derive(Default)]
struct VoiceTimers {
    quiet: Cell<Option<TimeoutHandle>>,
    dismiss: Cell<Option<TimeoutHandle>>,
}

impl VoiceTimers {
    fn arm(slot: &Cell<Option<TimeoutHandle>>, delay: Duration, callback: impl FnOnce() + 'static) {
        if let Some(previous) = slot.take() {
            previous.clear();
        }
        match set_timeout_with_handle(callback, delay) {
            Ok(handle) => slot.set(Some(handle)),
            Err(e) => tracing::warn!("failed to schedule voice timer: {e:?}"),
        }
    }

    fn clear_quiet(&self) {
        if let Some(handle) = self.quiet.take() {
            handle.clear();
        }
    }

    fn clear_all(&self) {
        self.clear_quiet();
        if let Some(handle) = self.dismiss.take() {
            handle.clear();
        }
    }
}

/// Drives the session and mirrors it into signals. Holds the session weakly so
/// recognizer callbacks and timers that outlive the panel find nothing to mutate.
#[derive(Clone)]
struct OverlayController {
    session: SendWrapper<Weak<RefCell<Session>>>,
    snapshot: RwSignal<SearchState>,
    voice_available: RwSignal<bool>,
    open: RwSignal<bool>,
    navigator: Navigator,
    timers: SendWrapper<Rc<VoiceTimers>>,
    quiet_period: Duration,
    error_dismiss: Duration,
}

impl OverlayController {
    fn drive(&self, action: impl FnOnce(&mut Session) -> VoiceOutcome) {
        let Some(session) = self.session.upgrade() else {
            return;
        };

        let (outcome, state, voice_available) = {
            let mut session = session.borrow_mut();
            let outcome = action(&mut session);
            (outcome, session.state().clone(), session.voice_available())
        };

        self.snapshot.set(state);
        self.voice_available.set(voice_available);
        self.follow_up(outcome);
    }

    fn follow_up(&self, outcome: VoiceOutcome) {
        match outcome {
            VoiceOutcome::Ignored => {}
            VoiceOutcome::Started(_) | VoiceOutcome::Stopped | VoiceOutcome::Finished => {
                self.timers.clear_quiet();
            }
            VoiceOutcome::ArmQuietTimer(token) => {
                let this = self.clone();
                VoiceTimers::arm(&self.timers.quiet, self.quiet_period, move || {
                    this.drive(|session| session.quiet_period_elapsed(token));
                });
            }
            VoiceOutcome::Failed(token) => {
                self.timers.clear_quiet();
                let this = self.clone();
                VoiceTimers::arm(&self.timers.dismiss, self.error_dismiss, move || {
                    this.drive(|session| session.dismiss_error(token));
                });
            }
        }
    }

    fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.drive(move |session| {
            session.set_query(query);
            VoiceOutcome::Ignored
        });
    }

    fn close(&self) {
        self.drive(|session| {
            session.shutdown();
            VoiceOutcome::Stopped
        });
        self.timers.clear_all();
        self.open.set(false);
    }

    fn select(&self, product: Product) {
        tracing::debug!(id = product.id, "search result selected");
        self.navigator.navigate(product.category.route());
        self.close();
    }
}

#[component]
fn SearchPanel(open: RwSignal<bool>) -> impl IntoView {
    let config = use_context::<SiteConfig>().expect("SiteConfig context missing");
    let navigator = use_context::<Navigator>().expect("Navigator context missing");

    let snapshot = RwSignal::new(SearchState::default());
    let voice_available = RwSignal::new(false);
    let timers = Rc::new(VoiceTimers::default());

    let make_controller = |session: Weak<RefCell<Session>>| OverlayController {
        session: SendWrapper::new(session),
        snapshot,
        voice_available,
        open,
        navigator,
        timers: SendWrapper::new(Rc::clone(&timers)),
        quiet_period: Duration::from_millis(u64::from(config.quiet_period_ms)),
        error_dismiss: Duration::from_millis(u64::from(config.error_dismiss_ms)),
    };

    let session: Rc<RefCell<Session>> = Rc::new_cyclic(|weak| {
        let events = make_controller(weak.clone());
        let sink: SpeechEventSink = Rc::new(move |token: SessionToken, event: SpeechEvent| {
            events.drive(|session| session.handle_event(token, event));
        });
        RefCell::new(SearchSession::new(
            &CATALOG,
            WebSpeech::detect(&config.speech_language, sink),
        ))
    });
    let controller = make_controller(Rc::downgrade(&session));

    controller.drive(|session| {
        session.probe();
        VoiceOutcome::Ignored
    });

    // Ctrl+Space toggles voice input while the panel is open
    let hotkey = window_event_listener(leptos::ev::keydown, {
        let controller = controller.clone();
        move |ev: KeyboardEvent| {
            if ev.ctrl_key() && ev.code() == "Space" && voice_available.get_untracked() {
                ev.prevent_default();
                controller.drive(Session::toggle_voice);
            }
        }
    });

    let teardown = SendWrapper::new((Rc::clone(&session), Rc::clone(&timers), hotkey));
    on_cleanup(move || {
        let (session, timers, hotkey) = teardown.take();
        hotkey.remove();
        timers.clear_all();
        if let Ok(mut session) = session.try_borrow_mut() {
            session.shutdown();
        };
    });

    // Auto-focus the input on mount
    let input_ref = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let html_input: &HtmlInputElement = &input;
            let _ = html_input.focus();
        }
    });

    let on_backdrop = {
        let controller = controller.clone();
        move |ev: MouseEvent| {
            if is_backdrop_event(&ev) {
                controller.close();
            }
        }
    };

    let on_input = {
        let controller = controller.clone();
        move |ev: leptos::ev::Event| controller.set_query(event_target_value(&ev))
    };

    let listening = move || snapshot.with(|state| state.listening);

    view! {
        <div class="fixed inset-0 bg-black/50 backdrop-blur-sm z-50" on:mousedown=on_backdrop>
            <div class="fixed inset-x-0 top-0 bg-white dark:bg-slate-800 shadow-lg p-4 animate-slide-down">
                <div class="max-w-4xl mx-auto">
                    <form class="relative" on:submit=|ev| ev.prevent_default()>
                        <div class="relative">
                            <Icon
                                paths=icons::SEARCH
                                class="absolute left-4 top-1/2 -translate-y-1/2 text-slate-400 w-5 h-5"
                            />
                            <input
                                type="text"
                                node_ref=input_ref
                                prop:value=move || snapshot.with(|state| state.query.clone())
                                on:input=on_input
                                placeholder=move || {
                                    if voice_available.get() {
                                        "Search for perfumes... (Ctrl + Space for voice search)"
                                    } else {
                                        "Search for perfumes..."
                                    }
                                }
                                aria-label="Search for perfumes"
                                class="w-full pl-12 pr-24 py-3 border border-slate-200 dark:border-slate-700 rounded-lg focus:outline-none focus:ring-2 focus:ring-slate-400 dark:focus:ring-slate-600 focus:border-transparent bg-white dark:bg-slate-700 text-slate-900 dark:text-white placeholder-slate-400 dark:placeholder-slate-300"
                            />
                            <div class="absolute right-4 top-1/2 -translate-y-1/2 flex items-center space-x-2">
                                {clear_button(controller.clone())}
                                {voice_button(controller.clone())}
                            </div>
                        </div>

                        {move || {
                            snapshot
                                .with(|state| state.error.clone())
                                .map(|message| {
                                    view! {
                                        <div class="mt-2 text-sm text-rose-600 dark:text-rose-400" role="alert">
                                            {message}
                                        </div>
                                    }
                                })
                        }}

                        <Show when=listening>
                            <ListeningIndicator />
                        </Show>

                        {results_view(controller.clone())}
                    </form>
                </div>
            </div>
        </div>
    }
}

fn clear_button(controller: OverlayController) -> impl IntoView {
    let snapshot = controller.snapshot;
    move || {
        let has_query = snapshot.with(|state| !state.query.is_empty());
        has_query.then(|| {
            let controller = controller.clone();
            view! {
                <button
                    type="button"
                    on:click=move |_| controller.drive(Session::clear)
                    class="text-slate-400 hover:text-slate-600 dark:hover:text-slate-200 p-1"
                    aria-label="Clear search"
                >
                    <Icon paths=icons::CLOSE class="w-5 h-5" />
                </button>
            }
        })
    }
}

fn voice_button(controller: OverlayController) -> impl IntoView {
    let snapshot = controller.snapshot;
    let voice_available = controller.voice_available;
    move || {
        voice_available.get().then(|| {
            let controller = controller.clone();
            let listening = move || snapshot.with(|state| state.listening);
            view! {
                <button
                    type="button"
                    on:click=move |_| controller.drive(Session::toggle_voice)
                    class=move || {
                        if listening() {
                            "p-1 rounded-full transition-all duration-300 bg-rose-100 dark:bg-rose-900 text-rose-600 dark:text-rose-300 animate-pulse"
                        } else {
                            "p-1 rounded-full transition-all duration-300 text-slate-400 hover:text-slate-600 dark:hover:text-slate-200"
                        }
                    }
                    aria-label=move || {
                        if listening() { "Stop voice search" } else { "Start voice search" }
                    }
                >
                    {move || {
                        if listening() {
                            view! { <Icon paths=icons::MIC class="w-5 h-5" /> }.into_any()
                        } else {
                            view! { <Icon paths=icons::MIC_OFF class="w-5 h-5" /> }.into_any()
                        }
                    }}
                </button>
            }
        })
    }
}

#[component]
fn ListeningIndicator() -> impl IntoView {
    view! {
        <div class="mt-2 flex items-center justify-center space-x-1">
            <div class="flex items-center space-x-1">
                {(0..3)
                    .map(|i| {
                        view! {
                            <div
                                class="w-1 h-4 bg-rose-500 dark:bg-rose-400 rounded-full animate-wave"
                                style=format!("animation-delay: {}s", f64::from(i) * 0.2)
                            />
                        }
                    })
                    .collect_view()}
            </div>
            <span class="text-sm text-slate-600 dark:text-slate-300 ml-2">"Listening..."</span>
        </div>
    }
}

fn results_view(controller: OverlayController) -> impl IntoView {
    let snapshot = controller.snapshot;
    move || {
        let state = snapshot.get();

        if state.query.is_empty() {
            let controller = controller.clone();
            return view! {
                <div class="mt-4">
                    <h3 class="text-sm font-medium text-slate-700 dark:text-slate-300 mb-2">
                        "Popular Searches"
                    </h3>
                    <div class="flex flex-wrap gap-2">
                        {POPULAR_SEARCHES
                            .into_iter()
                            .map(|term| {
                                let controller = controller.clone();
                                view! {
                                    <button
                                        type="button"
                                        on:click=move |_| controller.set_query(term)
                                        class="px-3 py-1 bg-slate-100 dark:bg-slate-700 hover:bg-slate-200 dark:hover:bg-slate-600 rounded-full text-sm text-slate-700 dark:text-slate-300 transition-colors"
                                    >
                                        {term}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            }
            .into_any();
        }

        if state.results.is_empty() {
            return view! {
                <div class="mt-4 text-center py-8">
                    <p class="text-slate-600 dark:text-slate-300">
                        {format!("No products found matching \"{}\"", state.query)}
                    </p>
                </div>
            }
            .into_any();
        }

        view! {
            <div class="mt-4 max-h-[60vh] overflow-y-auto">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    {state
                        .results
                        .into_iter()
                        .map(|product| {
                            let controller = controller.clone();
                            view! { <ResultCard product=product on_select=move || controller.select(product) /> }
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any()
    }
}

#[component]
fn ResultCard(product: Product, on_select: impl Fn() + 'static) -> impl IntoView {
    view! {
        <div
            on:click=move |_| on_select()
            class="flex items-center space-x-4 p-4 bg-slate-50 dark:bg-slate-700 rounded-lg hover:bg-slate-100 dark:hover:bg-slate-600 transition-colors cursor-pointer"
        >
            <img src=product.image alt=product.name class="w-20 h-20 object-cover rounded-md" />
            <div>
                <h3 class="font-serif text-lg text-slate-800 dark:text-white">{product.name}</h3>
                <p class="text-sm text-slate-600 dark:text-slate-300">{product.description}</p>
                <div class="flex items-center mt-1">
                    <span class="text-sm font-medium text-slate-800 dark:text-white">
                        {product.formatted_price()}
                    </span>
                    <span class="ml-2 px-2 py-1 text-xs bg-slate-200 dark:bg-slate-600 text-slate-600 dark:text-slate-300 rounded-full">
                        {product.category.label()}
                    </span>
                </div>
            </div>
        </div>
    }
}

use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use log::info;

use crate::config;
use crate::scheduling;
use crate::quiz::engine::{QuizAction, QuizSession, QuizStep};

const MRR_OPTIONS: [&str; 5] = [
    "Pre-revenue (building)",
    "$1K–$5K",
    "$5K–$25K",
    "$25K–$50K",
    "$50K+",
];

const CHANNEL_OPTIONS: [&str; 5] = [
    "Cold email",
    "LinkedIn outreach",
    "Paid ads",
    "Content marketing",
    "None yet",
];

const ICP_OPTIONS: [&str; 4] = [
    "Crystal clear (can name 10)",
    "Somewhat clear",
    "Fuzzy",
    "No idea",
];

const PRICING_OPTIONS: [&str; 5] = [
    "Under $2K",
    "$2K–$5K",
    "$5K–$10K",
    "$10K+",
    "I'd prefer one-time project pricing",
];

#[derive(Properties, PartialEq)]
pub struct QuizModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

fn act(dispatch: &Callback<QuizAction>, action: QuizAction) -> Callback<MouseEvent> {
    let dispatch = dispatch.clone();
    Callback::from(move |_: MouseEvent| dispatch.emit(action.clone()))
}

#[function_component(QuizModal)]
pub fn quiz_modal(props: &QuizModalProps) -> Html {
    let session = use_state(QuizSession::new);

    // Restart the session every time the modal opens
    {
        let session = session.clone();
        use_effect_with_deps(
            move |is_open| {
                if *is_open {
                    session.set(QuizSession::new());
                }
                || ()
            },
            props.is_open,
        );
    }

    if !props.is_open {
        return html! {};
    }

    let dispatch = {
        let session = session.clone();
        Callback::from(move |action: QuizAction| {
            let mut next = (*session).clone();
            let was_done = next.step() == QuizStep::Success;
            if next.apply(action) {
                if !was_done && next.step() == QuizStep::Success {
                    info!(
                        "diagnostic complete: {}",
                        serde_json::to_string(next.answers()).unwrap_or_default()
                    );
                }
                session.set(next);
            }
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let step = session.step();
    let answers = session.answers();

    let content = match step {
        QuizStep::Welcome => html! {
            <div class="quiz-step quiz-center">
                <div class="quiz-eyebrow">{"Hey founder"}</div>
                <h2>{"2 minutes. 6 questions. Real answers."}</h2>
                <p class="quiz-lead">{"Tell us where you're stuck and we'll tell you what to fix first."}</p>
                <button class="quiz-primary" onclick={act(&dispatch, QuizAction::Start)}>
                    {"Start diagnostic"}
                </button>
            </div>
        },
        QuizStep::Mrr => html! {
            <div class="quiz-step">
                <div class="quiz-counter">{"Question 1 of 6"}</div>
                <h3 class="quiz-prompt">{"First one's easy — just pick your bracket."}</h3>
                <h2>{"What's your current MRR?"}</h2>
                <div class="quiz-options">
                    { for MRR_OPTIONS.iter().map(|opt| html! {
                        <button
                            class="quiz-option"
                            onclick={act(&dispatch, QuizAction::PickMrr(opt.to_string()))}
                        >
                            {opt}
                        </button>
                    })}
                </div>
            </div>
        },
        QuizStep::Pain => {
            let oninput = {
                let dispatch = dispatch.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    if let Ok(level) = input.value().parse::<u8>() {
                        dispatch.emit(QuizAction::SetPainLevel(level));
                    }
                })
            };
            html! {
                <div class="quiz-step">
                    <div class="quiz-counter">{"Question 2 of 6"}</div>
                    <h3 class="quiz-prompt">{"Now be honest — this matters."}</h3>
                    <h2>{"On a scale of 1–10, how unpredictable is your revenue?"}</h2>
                    <div class="quiz-slider-block">
                        <input
                            type="range"
                            min="1"
                            max="10"
                            class="quiz-slider"
                            value={answers.pain_level.to_string()}
                            oninput={oninput}
                        />
                        <div class="quiz-slider-labels">
                            <span>{"1 = Predictable"}</span>
                            <span class="quiz-slider-value">{answers.pain_level.to_string()}</span>
                            <span>{"10 = I check Stripe daily"}</span>
                        </div>
                        <p class="quiz-hint">{"Move the slider to reflect how often revenue surprises you."}</p>
                    </div>
                    <button class="quiz-primary quiz-wide" onclick={act(&dispatch, QuizAction::PainNext)}>
                        {"Next"}
                    </button>
                </div>
            }
        }
        QuizStep::Channels => html! {
            <div class="quiz-step">
                <div class="quiz-counter">{"Question 3 of 6"}</div>
                <h3 class="quiz-prompt">{"If you've tried stuff, tell us what didn't work."}</h3>
                <h2>{"Which of these have you tried and failed at?"}</h2>
                <div class="quiz-options">
                    { for CHANNEL_OPTIONS.iter().map(|opt| {
                        let selected = answers.failed_channels.iter().any(|c| c == opt);
                        html! {
                            <button
                                class={classes!("quiz-option", selected.then_some("selected"))}
                                onclick={act(&dispatch, QuizAction::ToggleChannel(opt.to_string()))}
                            >
                                <span>{opt}</span>
                                if selected {
                                    <span class="quiz-check">{"✓"}</span>
                                }
                            </button>
                        }
                    })}
                </div>
                <button class="quiz-primary quiz-wide" onclick={act(&dispatch, QuizAction::ChannelsNext)}>
                    {"Next"}
                </button>
            </div>
        },
        QuizStep::Icp => html! {
            <div class="quiz-step">
                <div class="quiz-counter">{"Question 4 of 6"}</div>
                <h3 class="quiz-prompt">{"This separates founders who scale from those who don't."}</h3>
                <h2>{"How clearly can you describe your ideal customer?"}</h2>
                <div class="quiz-options">
                    { for ICP_OPTIONS.iter().map(|opt| html! {
                        <button
                            class="quiz-option"
                            onclick={act(&dispatch, QuizAction::PickIcp(opt.to_string()))}
                        >
                            {opt}
                        </button>
                    })}
                </div>
            </div>
        },
        QuizStep::Blocker => {
            let oninput = {
                let dispatch = dispatch.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    dispatch.emit(QuizAction::SetBlocker(input.value()));
                })
            };
            html! {
                <div class="quiz-step">
                    <div class="quiz-counter">{"Question 5 of 6"}</div>
                    <h3 class="quiz-prompt">{"Tell me plainly — this is the best part."}</h3>
                    <h2>{"What's the #1 thing preventing you from growing consistently right now?"}</h2>
                    <textarea
                        class="quiz-textarea"
                        placeholder="Example: I'm a solo tech founder... I tried 500 cold emails and got 2 replies..."
                        value={answers.blocker.clone()}
                        oninput={oninput}
                    />
                    <button class="quiz-primary quiz-wide" onclick={act(&dispatch, QuizAction::BlockerNext)}>
                        {"Next"}
                    </button>
                </div>
            }
        }
        QuizStep::Pricing => html! {
            <div class="quiz-step">
                <div class="quiz-counter">{"Question 6 of 6"}</div>
                <h3 class="quiz-prompt">{"Quick one — not a yes/no about buying."}</h3>
                <h2>{"If someone built you a complete revenue system, what should that cost monthly?"}</h2>
                <div class="quiz-options">
                    { for PRICING_OPTIONS.iter().map(|opt| html! {
                        <button
                            class="quiz-option"
                            onclick={act(&dispatch, QuizAction::PickPricing(opt.to_string()))}
                        >
                            {opt}
                        </button>
                    })}
                </div>
            </div>
        },
        QuizStep::InterviewOffer => {
            let accept = {
                let dispatch = dispatch.clone();
                Callback::from(move |_: MouseEvent| {
                    scheduling::open_popup(config::get_calendly_url());
                    dispatch.emit(QuizAction::OfferReply { booked: true });
                })
            };
            html! {
                <div class="quiz-step">
                    <h3 class="quiz-prompt quiz-urgent">{"You're bleeding — want a short call to map fixes?"}</h3>
                    <h2>{"Would you be open to a 15-minute diagnostic call where we show what's broken and one action to fix it?"}</h2>
                    <div class="quiz-options">
                        <button class="quiz-option quiz-option-accent" onclick={accept}>
                            <span>{"Yes — show calendar"}</span>
                            <span>{"→"}</span>
                        </button>
                        <button class="quiz-option" onclick={act(&dispatch, QuizAction::OfferReply { booked: false })}>
                            {"Maybe later (send email)"}
                        </button>
                        <button class="quiz-option" onclick={act(&dispatch, QuizAction::OfferReply { booked: false })}>
                            {"No thanks"}
                        </button>
                    </div>
                </div>
            }
        }
        QuizStep::EmailOptin => {
            let on_name = {
                let dispatch = dispatch.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    dispatch.emit(QuizAction::SetName(input.value()));
                })
            };
            let on_email = {
                let dispatch = dispatch.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    dispatch.emit(QuizAction::SetEmail(input.value()));
                })
            };
            html! {
                <div class="quiz-step">
                    <h3 class="quiz-prompt">{"Get a full breakdown in your inbox."}</h3>
                    <h2>{"Want the full diagnostic breakdown?"}</h2>
                    <div class="quiz-field">
                        <label>{"First Name (Optional)"}</label>
                        <input type="text" value={answers.name.clone()} oninput={on_name} />
                    </div>
                    <div class="quiz-field">
                        <label>{"Email (Required)"}</label>
                        <input type="email" value={answers.email.clone()} oninput={on_email} />
                    </div>
                    <button
                        class="quiz-primary quiz-wide"
                        disabled={answers.email.is_empty()}
                        onclick={act(&dispatch, QuizAction::SubmitEmail)}
                    >
                        {"Send me the breakdown"}
                    </button>
                    <button class="quiz-skip" onclick={act(&dispatch, QuizAction::SkipEmail)}>
                        {"Skip — show my results"}
                    </button>
                </div>
            }
        }
        QuizStep::Success => {
            let (headline, body) = if session.high_intent() {
                (
                    "Got it — we'll send the breakdown and see you on the call.",
                    "Check your email for next steps. Add the call to your calendar.",
                )
            } else {
                (
                    "Check your email in ~5 minutes.",
                    "We'll send your diagnostic and the #1 fix to try this week.",
                )
            };
            html! {
                <div class="quiz-step quiz-center">
                    <div class="quiz-badge">{"✓"}</div>
                    <h2>{headline}</h2>
                    <p class="quiz-lead">{body}</p>
                    <button class="quiz-secondary" onclick={close.clone()}>
                        {"Back to site"}
                    </button>
                </div>
            }
        }
    };

    let show_progress = step != QuizStep::Welcome && step != QuizStep::Success;
    let show_back = session.history_len() > 0 && step != QuizStep::Success;

    html! {
        <div class="quiz-overlay">
            <style>
                {r#"
                    .quiz-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 16px;
                    }
                    .quiz-backdrop {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(4px);
                    }
                    .quiz-dialog {
                        position: relative;
                        background: #0E0E0E;
                        border: 1px solid #333;
                        border-radius: 8px;
                        width: 100%;
                        max-width: 520px;
                        max-height: 90vh;
                        overflow-y: auto;
                        padding: 40px;
                        color: #fff;
                    }
                    .quiz-dialog h2 {
                        font-size: 1.5rem;
                        margin: 0 0 24px;
                    }
                    .quiz-close {
                        position: absolute;
                        top: 16px;
                        right: 16px;
                        background: none;
                        border: none;
                        color: #666;
                        font-size: 1.2rem;
                        cursor: pointer;
                    }
                    .quiz-close:hover { color: #fff; }
                    .quiz-progress-track {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 4px;
                        background: #1A1A1A;
                    }
                    .quiz-progress-fill {
                        height: 100%;
                        background: #F2C94C;
                        transition: width 0.3s;
                    }
                    .quiz-back {
                        background: none;
                        border: none;
                        color: #666;
                        font-size: 0.75rem;
                        cursor: pointer;
                        padding: 0;
                        margin-bottom: 16px;
                    }
                    .quiz-back:hover { color: #fff; }
                    .quiz-center { text-align: center; }
                    .quiz-eyebrow {
                        color: #F2C94C;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        font-size: 0.85rem;
                        font-weight: 700;
                        margin-bottom: 8px;
                    }
                    .quiz-counter { color: #D2D2D2; font-size: 0.85rem; margin-bottom: 12px; }
                    .quiz-prompt { color: #F2C94C; font-weight: 600; margin: 0 0 8px; }
                    .quiz-urgent { color: #EB5757; }
                    .quiz-lead { color: #D2D2D2; font-size: 1.1rem; margin-bottom: 32px; }
                    .quiz-options { display: flex; flex-direction: column; gap: 12px; }
                    .quiz-option {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        text-align: left;
                        padding: 16px;
                        border-radius: 4px;
                        background: #1A1A1A;
                        border: 1px solid #333;
                        color: #D2D2D2;
                        cursor: pointer;
                        transition: all 0.2s;
                    }
                    .quiz-option:hover { border-color: #F2C94C; background: #252525; }
                    .quiz-option.selected { background: #252525; border-color: #F2C94C; color: #fff; }
                    .quiz-option-accent {
                        background: #F2C94C;
                        border-color: #F2C94C;
                        color: #0E0E0E;
                        font-weight: 700;
                    }
                    .quiz-check { color: #F2C94C; }
                    .quiz-primary {
                        background: #F2C94C;
                        color: #0E0E0E;
                        font-weight: 700;
                        font-size: 1rem;
                        padding: 14px 32px;
                        border: none;
                        border-radius: 4px;
                        cursor: pointer;
                    }
                    .quiz-primary:hover { opacity: 0.9; }
                    .quiz-primary:disabled { opacity: 0.5; cursor: not-allowed; }
                    .quiz-wide { width: 100%; margin-top: 16px; }
                    .quiz-secondary {
                        background: #1A1A1A;
                        border: 1px solid #333;
                        color: #fff;
                        padding: 12px 32px;
                        border-radius: 4px;
                        cursor: pointer;
                    }
                    .quiz-secondary:hover { border-color: #F2C94C; }
                    .quiz-skip {
                        display: block;
                        width: 100%;
                        background: none;
                        border: none;
                        color: #666;
                        font-size: 0.85rem;
                        text-decoration: underline;
                        cursor: pointer;
                        margin-top: 8px;
                    }
                    .quiz-skip:hover { color: #D2D2D2; }
                    .quiz-slider-block { padding: 32px 0 16px; }
                    .quiz-slider { width: 100%; accent-color: #F2C94C; cursor: pointer; }
                    .quiz-slider-labels {
                        display: flex;
                        justify-content: space-between;
                        margin-top: 16px;
                        color: #D2D2D2;
                        font-size: 0.85rem;
                    }
                    .quiz-slider-value { color: #F2C94C; font-weight: 700; font-size: 1.25rem; }
                    .quiz-hint { color: #666; font-size: 0.75rem; text-align: center; margin-top: 8px; }
                    .quiz-textarea {
                        width: 100%;
                        box-sizing: border-box;
                        height: 128px;
                        background: #1A1A1A;
                        border: 1px solid #333;
                        border-radius: 4px;
                        padding: 16px;
                        color: #fff;
                        resize: vertical;
                    }
                    .quiz-textarea:focus { border-color: #F2C94C; outline: none; }
                    .quiz-field { margin-bottom: 16px; }
                    .quiz-field label {
                        display: block;
                        color: #D2D2D2;
                        font-size: 0.85rem;
                        margin-bottom: 4px;
                    }
                    .quiz-field input {
                        width: 100%;
                        box-sizing: border-box;
                        background: #1A1A1A;
                        border: 1px solid #333;
                        border-radius: 4px;
                        padding: 12px;
                        color: #fff;
                    }
                    .quiz-field input:focus { border-color: #F2C94C; outline: none; }
                    .quiz-badge {
                        width: 64px;
                        height: 64px;
                        margin: 0 auto 24px;
                        border-radius: 50%;
                        background: #1A1A1A;
                        border: 2px solid #F2C94C;
                        color: #F2C94C;
                        font-size: 1.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                "#}
            </style>
            <div class="quiz-backdrop" onclick={close.clone()} />
            <div class="quiz-dialog">
                <button class="quiz-close" onclick={close}>{"✕"}</button>
                if show_progress {
                    <div class="quiz-progress-track">
                        <div
                            class="quiz-progress-fill"
                            style={format!("width: {}%;", session.progress() * 100.0)}
                        />
                    </div>
                }
                if show_back {
                    <button class="quiz-back" onclick={act(&dispatch, QuizAction::Back)}>
                        {"← Back"}
                    </button>
                }
                {content}
            </div>
        </div>
    }
}

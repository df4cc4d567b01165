//! One renderer per section shape. Each widget owns its interactive state
//! locally; nothing here is persisted except the quiz completion score,
//! which is handed back up through `on_quiz_complete`.

use dioxus::prelude::*;

use notes_core::model::{
    ActionItem, Hadith, PreparationNote, QuizQuestion, QuizScore, Story, Takeaway, Theme, Verse,
    VocabWord,
};
use notes_core::parse::ParsedSection;
use services::AudioLease;

use crate::context::AppContext;
use crate::vm::{Checklist, FlipDeck, QuestionState, QuizVm, SectionCardVm};

#[component]
pub fn SectionCard(
    card: SectionCardVm,
    expanded: bool,
    prior_quiz_percent: Option<u8>,
    on_toggle: EventHandler<()>,
    on_quiz_complete: EventHandler<QuizScore>,
) -> Element {
    let icon = card.presentation.icon;
    let tint = card.presentation.tint;
    let accent = card.presentation.accent;

    rsx! {
        section { class: "section-card", id: "{card.id}",
            button {
                class: "section-card-header",
                r#type: "button",
                style: "background: {tint}; color: {accent};",
                onclick: move |_| on_toggle.call(()),
                span { class: "section-card-icon", "{icon}" }
                h3 { class: "section-card-title", "{card.title}" }
                span { class: "section-card-caret",
                    if expanded { "▾" } else { "▸" }
                }
            }
            if expanded {
                div { class: "section-card-body",
                    SectionBody {
                        card: card.clone(),
                        prior_quiz_percent,
                        on_quiz_complete,
                    }
                }
            }
        }
    }
}

#[component]
fn SectionBody(
    card: SectionCardVm,
    prior_quiz_percent: Option<u8>,
    on_quiz_complete: EventHandler<QuizScore>,
) -> Element {
    match &card.content {
        ParsedSection::Themes(items) => rsx! {
            ThemeList { items: items.clone() }
        },
        ParsedSection::Verses(verses) => rsx! {
            VerseList { verses: verses.clone() }
        },
        ParsedSection::Vocabulary(words) => rsx! {
            FlashcardGrid { words: words.clone() }
        },
        ParsedSection::Hadith(items) => rsx! {
            HadithList { items: items.clone() }
        },
        ParsedSection::Stories(items) => rsx! {
            StoryList { items: items.clone() }
        },
        ParsedSection::ActionItems(items) => rsx! {
            ChecklistWidget { items: items.clone() }
        },
        ParsedSection::Takeaways(items) => rsx! {
            TakeawayList { items: items.clone() }
        },
        ParsedSection::Quiz(questions) => rsx! {
            QuizWidget {
                questions: questions.clone(),
                prior_percent: prior_quiz_percent,
                on_complete: on_quiz_complete,
            }
        },
        ParsedSection::Preparation(items) => rsx! {
            PreparationList { items: items.clone() }
        },
        ParsedSection::Raw => rsx! {
            RawBody { body: card.body.clone() }
        },
    }
}

#[component]
fn ThemeList(items: Vec<Theme>) -> Element {
    rsx! {
        div { class: "theme-list",
            for item in items {
                div { class: "theme-item",
                    h4 { class: "theme-title", "{item.title}" }
                    p { class: "theme-body", "{item.body}" }
                }
            }
        }
    }
}

/// Verse cards with the shared listen channel. Starting playback on one
/// verse preempts whichever verse was playing before, app-wide.
#[component]
fn VerseList(verses: Vec<Verse>) -> Element {
    let ctx = use_context::<AppContext>();
    let audio = ctx.audio();
    let mut lease = use_signal(|| None::<AudioLease>);

    let cards = verses.iter().map(|verse| {
        let reference = verse.reference.clone();
        let arabic = verse.arabic.clone();
        let translation = verse.translation.clone();
        let playing = lease()
            .as_ref()
            .is_some_and(|held| held.owner() == reference && audio.is_active(held));
        let audio_for_play = audio.clone();
        let audio_for_stop = audio.clone();
        let owner = reference.clone();
        rsx! {
            div { class: "verse-card",
                div { class: "verse-header",
                    span { class: "verse-reference", "{reference}" }
                    if playing {
                        button {
                            class: "btn btn-secondary verse-audio",
                            r#type: "button",
                            onclick: move |_| {
                                if let Some(held) = lease() {
                                    audio_for_stop.release(&held);
                                }
                                lease.set(None);
                            },
                            "Stop"
                        }
                    } else {
                        button {
                            class: "btn btn-secondary verse-audio",
                            r#type: "button",
                            onclick: move |_| {
                                lease.set(Some(audio_for_play.acquire(owner.clone())));
                            },
                            "Listen"
                        }
                    }
                }
                if let Some(text) = arabic {
                    p { class: "verse-arabic", dir: "rtl", lang: "ar", "{text}" }
                }
                blockquote { class: "verse-translation", "{translation}" }
            }
        }
    });

    rsx! {
        div { class: "verse-list", {cards} }
    }
}

/// Tap-to-flip vocabulary cards plus a reveal-all toggle.
#[component]
fn FlashcardGrid(words: Vec<VocabWord>) -> Element {
    let total = words.len();
    let mut deck = use_signal(move || FlipDeck::new(total));

    let all_flipped = deck.read().all_flipped();
    let cards = words.iter().enumerate().map(|(index, word)| {
        let flipped = deck.read().is_flipped(index);
        let arabic = word.arabic.clone();
        let transliteration = word.transliteration.clone();
        let meaning = word.meaning.clone();
        let class = if flipped {
            "flashcard flashcard--flipped"
        } else {
            "flashcard"
        };
        rsx! {
            button {
                class: "{class}",
                r#type: "button",
                onclick: move |_| deck.write().toggle(index),
                if flipped {
                    span { class: "flashcard-meaning", "{meaning}" }
                } else {
                    span { class: "flashcard-arabic", dir: "rtl", lang: "ar", "{arabic}" }
                    if let Some(roman) = transliteration {
                        span { class: "flashcard-transliteration", "{roman}" }
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "flashcard-widget",
            div { class: "flashcard-toolbar",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| deck.write().toggle_all(),
                    if all_flipped { "Hide all" } else { "Reveal all" }
                }
            }
            div { class: "flashcard-grid", {cards} }
        }
    }
}

#[component]
fn HadithList(items: Vec<Hadith>) -> Element {
    rsx! {
        div { class: "hadith-list",
            for item in items {
                div { class: "hadith-card",
                    blockquote { class: "hadith-text", "{item.text}" }
                    if let Some(source) = item.source {
                        p { class: "hadith-source", "{source}" }
                    }
                }
            }
        }
    }
}

#[component]
fn StoryList(items: Vec<Story>) -> Element {
    rsx! {
        div { class: "story-list",
            for item in items {
                div { class: "story-item",
                    h4 { class: "story-title", "{item.title}" }
                    p { class: "story-body", "{item.body}" }
                }
            }
        }
    }
}

/// Action points with local-only checkboxes. Checks reset on reload.
#[component]
fn ChecklistWidget(items: Vec<ActionItem>) -> Element {
    let mut checks = use_signal(Checklist::new);

    let rows = items.iter().enumerate().map(|(index, item)| {
        let checked = checks.read().is_checked(index);
        let lead = item.lead.clone();
        let detail = item.detail.clone();
        let class = if checked {
            "checklist-row checklist-row--done"
        } else {
            "checklist-row"
        };
        rsx! {
            li {
                class: "{class}",
                label {
                    input {
                        r#type: "checkbox",
                        checked,
                        onchange: move |_| checks.write().toggle(index),
                    }
                    span { class: "checklist-lead", "{lead}" }
                    if let Some(text) = detail {
                        span { class: "checklist-detail", "{text}" }
                    }
                }
            }
        }
    });

    rsx! {
        ul { class: "checklist", {rows} }
    }
}

#[component]
fn TakeawayList(items: Vec<Takeaway>) -> Element {
    rsx! {
        ul { class: "takeaway-list",
            for item in items {
                li { class: "takeaway-item", "{item.text}" }
            }
        }
    }
}

#[component]
fn PreparationList(items: Vec<PreparationNote>) -> Element {
    rsx! {
        ul { class: "preparation-list",
            for item in items {
                li { class: "preparation-item", "{item.text}" }
            }
        }
    }
}

/// Interactive quiz. Answer states only move forward; the completion
/// score is emitted exactly once, when the last answer is revealed.
#[component]
fn QuizWidget(
    questions: Vec<QuizQuestion>,
    prior_percent: Option<u8>,
    on_complete: EventHandler<QuizScore>,
) -> Element {
    let mut vm = use_signal(move || QuizVm::new(questions));

    let snapshot = vm.read().clone();
    let final_percent = if snapshot.is_complete() {
        QuizScore::from_counts(snapshot.correct_count(), snapshot.total())
            .ok()
            .map(|score| score.percent())
    } else {
        None
    };

    let question_blocks = snapshot
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let state = snapshot.state(index);
            let revealed = snapshot.is_revealed(index);
            let prompt = question.prompt.clone();
            let number = question.number;
            let explanation = question.explanation.clone();
            let answer = question.answer;
            let options = question.options.iter().map(|option| {
                let letter = option.letter;
                let text = option.text.clone();
                let selected = matches!(
                    state,
                    QuestionState::Selected(l) | QuestionState::Revealed(l) if l == letter
                );
                let class = match state {
                    QuestionState::Revealed(_) if letter == answer => {
                        "quiz-option quiz-option--correct"
                    }
                    QuestionState::Revealed(l) if l == letter => "quiz-option quiz-option--wrong",
                    _ if selected => "quiz-option quiz-option--selected",
                    _ => "quiz-option",
                };
                rsx! {
                    button {
                        class: "{class}",
                        r#type: "button",
                        disabled: revealed,
                        onclick: move |_| vm.write().select(index, letter),
                        span { class: "quiz-option-letter", "{letter}" }
                        span { class: "quiz-option-text", "{text}" }
                    }
                }
            });
            let can_reveal = matches!(state, QuestionState::Selected(_));
            rsx! {
                div { class: "quiz-question",
                    h4 { class: "quiz-prompt", "Q{number}. {prompt}" }
                    div { class: "quiz-options", {options} }
                    if revealed {
                        if let QuestionState::Revealed(picked) = state {
                            if picked.eq_ignore_ascii_case(&answer) {
                                p { class: "quiz-verdict quiz-verdict--correct", "Correct!" }
                            } else {
                                p { class: "quiz-verdict quiz-verdict--wrong",
                                    "The answer is {answer}."
                                }
                            }
                        }
                        if let Some(text) = explanation {
                            p { class: "quiz-explanation", "{text}" }
                        }
                    } else {
                        button {
                            class: "btn btn-secondary quiz-check",
                            r#type: "button",
                            disabled: !can_reveal,
                            onclick: move |_| {
                                if let Some(score) = vm.write().reveal(index) {
                                    on_complete.call(score);
                                }
                            },
                            "Check answer"
                        }
                    }
                }
            }
        });

    rsx! {
        div { class: "quiz-widget",
            if let Some(percent) = prior_percent {
                p { class: "quiz-prior", "Previous score: {percent}%" }
            }
            {question_blocks}
            div { class: "quiz-footer",
                if let Some(percent) = final_percent {
                    p { class: "quiz-score", "Score: {percent}%" }
                } else {
                    p { class: "quiz-progress",
                        "{snapshot.revealed_count()} of {snapshot.total()} answered"
                    }
                }
            }
        }
    }
}

/// Fallback for sections whose body carries no structure the micro-parsers
/// recognize: plain paragraphs, preserved verbatim.
#[component]
fn RawBody(body: String) -> Element {
    let paragraphs = body
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_owned)
        .collect::<Vec<_>>();
    rsx! {
        div { class: "raw-body",
            for block in paragraphs {
                p { class: "raw-paragraph", "{block}" }
            }
        }
    }
}

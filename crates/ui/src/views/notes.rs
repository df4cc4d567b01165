use dioxus::prelude::*;
use dioxus_router::Link;

use notes_core::model::{CourseId, QuizScore, SessionId};
use services::{AccessError, NotesError};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::widgets::SectionCard;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ExpandSet, SectionCardVm, TocEntry, section_cards, toc_entries};

/// Everything the notes page needs once loading settles. Built inside the
/// resource so the render path is a pure function of this value.
#[derive(Clone, Debug, PartialEq)]
struct NotesPage {
    title: String,
    summary: Option<String>,
    created_label: String,
    session_number: u32,
    course_id: CourseId,
    unlocked: bool,
    price_pounds: u32,
    cards: Vec<SectionCardVm>,
    toc: Vec<TocEntry>,
    prior_quiz_percent: Option<u8>,
}

/// The lesson-notes page: fetch, authorize, then either render the parsed
/// sections or the paywall card. Progress writes are fire-and-forget; a
/// failed upsert never disturbs what the student is reading.
#[component]
pub fn NotesView(session_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let student_id = ctx.student_id();
    let parsed_session = session_id.parse::<SessionId>().ok();

    let notes = ctx.notes();
    let access = ctx.access();
    let resource = use_resource(move || {
        let notes = notes.clone();
        let access = access.clone();
        async move {
            let Some(session_id) = parsed_session else {
                return Err(ViewError::NotFound);
            };

            let data = notes.load_notes(session_id).await.map_err(|err| match err {
                NotesError::NotFound => ViewError::NotFound,
                _ => ViewError::Unknown,
            })?;

            // The note itself names the course; authorization follows the
            // fetch, and the document is only exposed past the gate below.
            let course_id = data.note.course_id();
            let session_number = data.note.session_number();
            let course_access = access
                .course_access(course_id, student_id)
                .await
                .map_err(|err| match err {
                    AccessError::NotEnrolled => ViewError::AccessDenied,
                    _ => ViewError::Unknown,
                })?;
            let unlocked = course_access.session_unlocked(session_number);

            let mut prior_quiz_percent = None;
            if unlocked {
                // Best-effort progress marker and score readback.
                let _ = notes.record_view(session_id, student_id).await;
                prior_quiz_percent = notes
                    .quiz_result(session_id, student_id)
                    .await
                    .ok()
                    .flatten()
                    .map(|result| result.score.percent());
            }

            let (cards, toc) = if unlocked {
                (section_cards(&data.sections), toc_entries(&data.sections))
            } else {
                (Vec::new(), Vec::new())
            };

            Ok::<_, ViewError>(NotesPage {
                title: data.note.title().to_string(),
                summary: data.note.summary().map(str::to_string),
                created_label: data.note.created_at().format("%-d %B %Y").to_string(),
                session_number,
                course_id,
                unlocked,
                price_pounds: course_access.price_pounds,
                cards,
                toc,
                prior_quiz_percent,
            })
        }
    });

    let notes_for_quiz = ctx.notes();
    let on_quiz_complete = move |score: QuizScore| {
        let notes = notes_for_quiz.clone();
        if let Some(session_id) = parsed_session {
            spawn(async move {
                let _ = notes.record_quiz_score(session_id, student_id, score).await;
            });
        }
    };

    let state = view_state_from_resource(&resource);
    rsx! {
        div { class: "page notes-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "notes-loading", "Loading notes..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "notes-error", "{err.message()}" }
                    div { class: "notes-error-actions",
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let mut resource = resource;
                                resource.restart();
                            },
                            "Retry"
                        }
                        Link { class: "btn btn-secondary", to: Route::Home {}, "Back to home" }
                    }
                },
                ViewState::Ready(page) => rsx! {
                    header { class: "view-header",
                        h2 { class: "view-title", "{page.title}" }
                        if let Some(summary) = page.summary.as_ref() {
                            p { class: "view-subtitle", "{summary}" }
                        }
                        p { class: "view-meta", "AI study notes · {page.created_label}" }
                    }
                    div { class: "view-divider" }
                    if page.unlocked {
                        SectionList {
                            cards: page.cards.clone(),
                            toc: page.toc.clone(),
                            prior_quiz_percent: page.prior_quiz_percent,
                            on_quiz_complete,
                        }
                    } else {
                        PaywallCard {
                            course_id: page.course_id,
                            session_number: page.session_number,
                            price_pounds: page.price_pounds,
                        }
                    }
                },
            }
        }
    }
}

/// Table of contents plus the section cards, sharing one expand/collapse
/// set. A TOC click expands its target before the anchor jump.
#[component]
fn SectionList(
    cards: Vec<SectionCardVm>,
    toc: Vec<TocEntry>,
    prior_quiz_percent: Option<u8>,
    on_quiz_complete: EventHandler<QuizScore>,
) -> Element {
    let mut expand = use_signal({
        let cards = cards.clone();
        move || ExpandSet::with_first_expanded(cards.iter().map(|card| card.id.as_str()))
    });

    let toc_links = toc.iter().map(|entry| {
        let id = entry.id.clone();
        let title = entry.title.clone();
        let icon = entry.icon;
        let target = entry.id.clone();
        rsx! {
            a {
                class: "toc-link",
                href: "#{id}",
                onclick: move |_| expand.write().expand(&target),
                span { class: "toc-icon", "{icon}" }
                span { class: "toc-title", "{title}" }
            }
        }
    });

    let section_blocks = cards.iter().map(|card| {
        let id = card.id.clone();
        let expanded = expand.read().is_expanded(&card.id);
        rsx! {
            SectionCard {
                card: card.clone(),
                expanded,
                prior_quiz_percent,
                on_toggle: move |()| expand.write().toggle(&id),
                on_quiz_complete,
            }
        }
    });

    rsx! {
        if toc.len() > 1 {
            nav { class: "toc",
                {toc_links}
                button {
                    class: "btn btn-secondary toc-expand-all",
                    r#type: "button",
                    onclick: move |_| expand.write().expand_all(),
                    "Expand all"
                }
            }
        }
        div { class: "section-list", {section_blocks} }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum CheckoutState {
    Idle,
    Creating,
    Ready(String),
    Error,
}

/// Shown in place of the sections for locked sessions. Session 1 is never
/// gated, so this only renders for later sessions without a completed
/// payment.
#[component]
fn PaywallCard(course_id: CourseId, session_number: u32, price_pounds: u32) -> Element {
    let ctx = use_context::<AppContext>();
    let student_id = ctx.student_id();
    let access = ctx.access();
    let mut checkout = use_signal(|| CheckoutState::Idle);

    rsx! {
        div { class: "paywall-card",
            h3 { class: "paywall-title", "Session {session_number} is part of the full course" }
            p { class: "paywall-body",
                "The first session is free. Unlock every session's notes, quizzes and flashcards for £{price_pounds}."
            }
            match checkout() {
                CheckoutState::Ready(url) => rsx! {
                    a { class: "btn btn-primary paywall-link", href: "{url}",
                        "Complete payment"
                    }
                },
                CheckoutState::Error => rsx! {
                    p { class: "paywall-error", "Checkout could not be started. Please try again." }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| checkout.set(CheckoutState::Idle),
                        "Back"
                    }
                },
                CheckoutState::Idle | CheckoutState::Creating => rsx! {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: checkout() == CheckoutState::Creating,
                        onclick: move |_| {
                            let access = access.clone();
                            spawn(async move {
                                checkout.set(CheckoutState::Creating);
                                match access.create_checkout(course_id, student_id).await {
                                    Ok(url) => checkout.set(CheckoutState::Ready(url)),
                                    Err(_) => checkout.set(CheckoutState::Error),
                                }
                            });
                        },
                        if checkout() == CheckoutState::Creating { "Starting checkout..." } else { "Unlock the course" }
                    }
                },
            }
        }
    }
}

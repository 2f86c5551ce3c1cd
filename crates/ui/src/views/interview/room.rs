use std::time::Duration;

use dioxus::prelude::*;

use mockview_core::wizard::{InterviewWizard, MediaState, TickOutcome};
use services::QuestionQueue;

use super::scripts::{
    PREVIEW_ELEMENT_ID, acquire_media, release_media, set_camera, set_microphone,
};
use crate::views::{Notice, NoticeBar};
use crate::vm::{format_clock, map_transcript};

#[component]
pub fn InterviewRoom(wizard: Signal<InterviewWizard>, questions: Signal<QuestionQueue>) -> Element {
    let mut wizard = wizard;
    let mut questions = questions;
    let epoch = wizard.peek().timer_epoch().unwrap_or_default();
    let mut draft = use_signal(String::new);
    let notice = use_signal(|| None::<Notice>);
    let mut acquiring = use_signal(|| false);

    // Dropped with the room; the epoch check covers a tick racing the stage change.
    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            match wizard.write().tick(epoch) {
                TickOutcome::Running { .. } => {}
                TickOutcome::Expired => {
                    tracing::info!("interview timer expired");
                    break;
                }
                TickOutcome::Ignored => break,
            }
        }
    });

    // One acquisition attempt per pending state; retries come from the user.
    use_effect(move || {
        let pending = wizard
            .read()
            .active()
            .is_some_and(|active| active.media() == &MediaState::Pending);
        if !pending || *acquiring.peek() {
            return;
        }
        let Some(config) = wizard.peek().active().map(|active| active.config().clone()) else {
            return;
        };
        acquiring.set(true);
        spawn(async move {
            let result = acquire_media(config.camera_enabled, config.mic_enabled).await;
            let mut guard = wizard.write();
            let _ = match result {
                Ok(()) => guard.media_granted(),
                Err(err) => {
                    tracing::warn!(error = %err, "media acquisition failed");
                    guard.media_denied(err)
                }
            };
            drop(guard);
            acquiring.set(false);
        });
    });

    use_drop(release_media);

    let on_send = use_callback(move |()| {
        let mut notice = notice;
        let text = draft();
        let mut guard = wizard.write();
        if let Err(err) = guard.send_message(&text) {
            notice.set(Some(Notice::Error(err.to_string())));
            return;
        }
        if let Some(question) = questions.write().next_question() {
            let _ = guard.ask(&question);
        }
        drop(guard);
        notice.set(None);
        draft.set(String::new());
    });

    let snapshot = wizard.read();
    let Some(active) = snapshot.active() else {
        return rsx! {};
    };
    let config = active.config().clone();
    let remaining = format_clock(active.remaining_secs());
    let mic_on = active.mic_on();
    let camera_on = active.camera_on();
    let media = active.media().clone();
    let transcript = map_transcript(active.transcript());
    drop(snapshot);

    let show_preview = config.modality.needs_camera() && media == MediaState::Granted;

    rsx! {
        div { class: "interview-room",
            header { class: "interview-room__header",
                div {
                    h2 { "{config.employer.name} interview" }
                    p { class: "muted", "{config.difficulty.label()} · {config.modality.label()}" }
                }
                div { class: "interview-room__timer", role: "timer", aria_live: "polite", "{remaining}" }
            }

            NoticeBar { notice: notice() }

            match media {
                MediaState::NotRequired | MediaState::Granted => rsx! {},
                MediaState::Pending => rsx! {
                    p { class: "notice notice--info", "Requesting camera and microphone access..." }
                },
                MediaState::Denied(err) => rsx! {
                    div { class: "notice notice--error", role: "alert",
                        p { "{err}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                if wizard.write().retry_media() {
                                    tracing::debug!("retrying media acquisition");
                                }
                            },
                            "Retry"
                        }
                    }
                },
            }

            if config.modality.needs_media() {
                div { class: "interview-room__media",
                    if config.modality.needs_camera() {
                        video {
                            id: PREVIEW_ELEMENT_ID,
                            class: if show_preview { "preview" } else { "preview preview--off" },
                            autoplay: true,
                            muted: true,
                            playsinline: true,
                        }
                    }
                    div { class: "media-controls",
                        if config.modality.needs_microphone() {
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                aria_pressed: if mic_on { "true" } else { "false" },
                                onclick: move |_| {
                                    if let Ok(on) = wizard.write().toggle_mic() {
                                        spawn(set_microphone(on));
                                    }
                                },
                                if mic_on { "Mute" } else { "Unmute" }
                            }
                        }
                        if config.modality.needs_camera() {
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                aria_pressed: if camera_on { "true" } else { "false" },
                                onclick: move |_| {
                                    if let Ok(on) = wizard.write().toggle_camera() {
                                        spawn(set_camera(on));
                                    }
                                },
                                if camera_on { "Stop video" } else { "Start video" }
                            }
                        }
                    }
                }
            }

            section { class: "transcript", aria_live: "polite",
                for (index, line) in transcript.iter().enumerate() {
                    div { key: "{index}", class: "transcript__line",
                        span { class: "transcript__speaker", "{line.speaker}" }
                        span { class: "transcript__at muted", "{line.at}" }
                        p { "{line.text}" }
                    }
                }
            }

            form {
                class: "chat-input",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_send.call(());
                },
                textarea {
                    rows: "3",
                    placeholder: "Type your answer",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", "Send" }
            }

            button {
                class: "btn btn-danger",
                r#type: "button",
                onclick: move |_| {
                    if wizard.write().end().is_ok() {
                        tracing::info!("interview ended by user");
                    }
                },
                "End interview"
            }
        }
    }
}

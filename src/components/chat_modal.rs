//! Deal-intelligence chat modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened from an opportunity's "Ask AI" button through `UiState::open_chat`.
//! Every open (tracked by `chat_open_seq`) resets the `ChatSession` to a
//! single welcome message. Submits go through `ChatSession::begin_submit`,
//! the request is posted with `net::api::post_chat`, and the outcome is
//! written back with `ChatSession::resolve`.
//!
//! While open, Escape anywhere in the window closes the modal, Tab focus
//! wraps inside the panel, and the page body does not scroll.

use leptos::prelude::*;

use crate::state::chat::{ChatRole, ChatSession, KeyModifiers, PendingChat, is_submit_key};
use crate::state::ui::UiState;
use crate::util::clock::message_time_label;
use crate::util::markdown::render_markdown_html;

/// Grow the compose field with its content, up to a fixed cap.
#[cfg(feature = "hydrate")]
fn autosize(el: &web_sys::HtmlTextAreaElement) {
    const INPUT_MAX_HEIGHT_PX: i32 = 160;
    let style = el.style();
    let _ = style.set_property("height", "auto");
    let height = el.scroll_height().min(INPUT_MAX_HEIGHT_PX);
    let _ = style.set_property("height", &format!("{height}px"));
}

/// Send `pending` and write the outcome back into the session.
fn dispatch(chat: RwSignal<ChatSession>, pending: PendingChat) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::post_chat(&pending.request).await;
            chat.update(|c| {
                if !c.resolve(&pending.placeholder_id, outcome) {
                    log::debug!("chat reply dropped; placeholder {} no longer present", pending.placeholder_id);
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        chat.update(|c| {
            c.resolve(&pending.placeholder_id, Err(crate::net::types::ChatError::Unavailable));
        });
    }
}

/// Modal dialog hosting a chat about the currently selected opportunity.
#[component]
pub fn ChatModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let chat = expect_context::<RwSignal<ChatSession>>();

    let panel_ref = NodeRef::<leptos::html::Div>::new();
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    Effect::new(move |prev: Option<u64>| {
        let seq = ui.with(|u| u.chat_open_seq);
        if prev != Some(seq) && seq > 0 {
            let subject = ui.with_untracked(|u| u.chat_subject.clone());
            chat.update(|c| c.open(subject));
            #[cfg(feature = "hydrate")]
            {
                if let Some(el) = input_ref.get_untracked() {
                    let _ = el.focus();
                }
            }
        }
        seq
    });

    Effect::new(move |prev: Option<u64>| {
        let (seq, sending) = chat.with(|c| (c.focus_seq, c.is_sending));
        if prev.is_some_and(|p| p != seq) && !sending {
            #[cfg(feature = "hydrate")]
            {
                if let Some(el) = input_ref.get_untracked() {
                    // The `disabled` binding may not have re-rendered yet.
                    el.set_disabled(false);
                    let _ = el.focus();
                }
            }
        }
        seq
    });

    Effect::new(move || {
        let state = chat.get();
        let _ = state.messages.len();
        let _ = state.is_typing;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let close = move || ui.update(UiState::close_chat);

    #[cfg(feature = "hydrate")]
    {
        let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
            if !ui.with_untracked(|u| u.chat_open) {
                return;
            }
            if ev.key() == "Escape" {
                ev.prevent_default();
                close();
            } else if let Some(panel) = panel_ref.get_untracked() {
                crate::util::modal::trap_tab_focus(&panel, &ev);
            }
        });

        let saved_overflow = StoredValue::new(None::<String>);
        Effect::new(move || {
            let open = ui.with(|u| u.chat_open);
            let locked = saved_overflow.with_value(Option::is_some);
            if open && !locked {
                saved_overflow.set_value(Some(crate::util::modal::lock_body_scroll()));
            } else if !open && locked {
                if let Some(previous) = saved_overflow.get_value() {
                    crate::util::modal::restore_body_scroll(&previous);
                }
                saved_overflow.set_value(None);
            }
        });

        on_cleanup(move || {
            keydown.remove();
            if let Some(previous) = saved_overflow.try_get_value().flatten() {
                crate::util::modal::restore_body_scroll(&previous);
            }
        });
    }

    let send = move || {
        let mut pending = None;
        chat.update(|c| pending = c.begin_submit());
        let Some(pending) = pending else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = input_ref.get_untracked() {
                el.set_value("");
                autosize(&el);
            }
        }
        dispatch(chat, pending);
    };

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        chat.update(|c| c.input = value);
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = input_ref.get_untracked() {
                autosize(&el);
            }
        }
    };

    let on_input_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let modifiers = KeyModifiers {
            shift: ev.shift_key(),
            ctrl: ev.ctrl_key(),
            alt: ev.alt_key(),
            meta: ev.meta_key(),
        };
        if is_submit_key(&ev.key(), modifiers, ev.is_composing()) {
            ev.prevent_default();
            send();
        }
    };

    let messages = move || {
        chat.get()
            .messages
            .into_iter()
            .map(|msg| {
                let is_ai = msg.role == ChatRole::Ai;
                let time = message_time_label(msg.timestamp);
                let body = if is_ai {
                    view! { <div class="chat__text chat__markdown" inner_html=render_markdown_html(&msg.text)></div> }
                        .into_any()
                } else {
                    view! { <div class="chat__text">{msg.text}</div> }.into_any()
                };
                view! {
                    <div class="chat__row" class:chat__row--user=!is_ai>
                        <div class="chat__bubble" class:chat__bubble--ai=is_ai class:chat__bubble--user=!is_ai>
                            {body}
                            <div class="chat__time">{time}</div>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || ui.get().chat_open>
            <div class="chat-modal__backdrop" on:click=move |_| close()>
                <div
                    class="chat-modal"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    node_ref=panel_ref
                    on:click=move |ev| ev.stop_propagation()
                >
                    <div class="chat-modal__header">
                        <div>
                            <h3>"Deal Intelligence Chat"</h3>
                            <p class="chat-modal__subject">{move || chat.with(|c| c.subject_label().to_owned())}</p>
                        </div>
                        <button class="chat-modal__close" title="Close chat" on:click=move |_| close()>
                            "✕"
                        </button>
                    </div>

                    <div class="chat-modal__messages" node_ref=messages_ref>
                        {messages}
                        <Show when=move || chat.get().is_typing>
                            <div class="chat__row">
                                <div class="chat__bubble chat__bubble--ai chat__typing" aria-label="Assistant is typing">
                                    <span></span>
                                    <span></span>
                                    <span></span>
                                </div>
                            </div>
                        </Show>
                    </div>

                    <div class="chat-modal__compose">
                        <textarea
                            class="chat-modal__input"
                            rows="1"
                            placeholder="Ask about this opportunity…"
                            node_ref=input_ref
                            prop:value=move || chat.get().input
                            disabled=move || chat.get().is_sending
                            on:input=on_input
                            on:keydown=on_input_keydown
                        ></textarea>
                        <button
                            class="btn-primary chat-modal__send"
                            disabled=move || !chat.get().can_send()
                            on:click=move |_| send()
                        >
                            "Send"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

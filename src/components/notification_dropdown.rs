//! Notification bell with unread badge and dropdown list.
//!
//! The dropdown closes on a click outside of it (a transparent backdrop
//! catches those) and on Escape.

use leptos::prelude::*;

use crate::state::notifications::NotificationsState;

/// Bell button plus dropdown; reads and mutates `NotificationsState` from context.
#[component]
pub fn NotificationDropdown() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" && notifications.get_untracked().open {
            ev.prevent_default();
            notifications.update(NotificationsState::close);
        }
    };

    let list = move || {
        let items = notifications.get().items;
        if items.is_empty() {
            return view! {
                <div class="notifications__empty">
                    <span class="notifications__empty-icon" aria-hidden="true">"🔔"</span>
                    <p>"No notifications"</p>
                </div>
            }
            .into_any();
        }

        items
            .into_iter()
            .map(|item| {
                let id = item.id;
                view! {
                    <div
                        class="notification"
                        class:notification--unread=!item.is_read
                        on:click=move |_| notifications.update(|n| n.mark_read(id))
                    >
                        <div class=format!("notification__icon {}", item.kind.accent_class())>{item.icon}</div>
                        <div class="notification__content">
                            <h4 class="notification__title">{item.title}</h4>
                            <p class="notification__message">{item.message}</p>
                            <span class="notification__time">{item.time}</span>
                        </div>
                        <button
                            class="notification__delete"
                            title="Delete notification"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                notifications.update(|n| n.delete(id));
                            }
                        >
                            "✕"
                        </button>
                    </div>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <div class="notifications" on:keydown=on_keydown>
            <button
                class="notifications__bell"
                title="Notifications"
                aria-haspopup="true"
                aria-expanded=move || notifications.get().open.to_string()
                on:click=move |_| notifications.update(NotificationsState::toggle_open)
            >
                <span aria-hidden="true">"🔔"</span>
                {move || {
                    notifications
                        .get()
                        .badge_label()
                        .map(|label| view! { <span class="notifications__badge">{label}</span> })
                }}
            </button>

            <Show when=move || notifications.get().open>
                <div class="notifications__backdrop" on:click=move |_| notifications.update(NotificationsState::close)></div>
                <div class="notifications__panel" role="menu">
                    <div class="notifications__header">
                        <div>
                            <h3>"Notifications"</h3>
                            {move || {
                                notifications
                                    .get()
                                    .unread_summary()
                                    .map(|summary| view! { <p class="notifications__summary">{summary}</p> })
                            }}
                        </div>
                        <Show when=move || !notifications.get().items.is_empty()>
                            <div class="notifications__actions">
                                <Show when=move || notifications.get().has_unread()>
                                    <button
                                        class="notifications__action"
                                        on:click=move |_| notifications.update(NotificationsState::mark_all_read)
                                    >
                                        "Mark all read"
                                    </button>
                                </Show>
                                <button
                                    class="notifications__action notifications__action--danger"
                                    on:click=move |_| notifications.update(NotificationsState::clear_all)
                                >
                                    "Clear all"
                                </button>
                            </div>
                        </Show>
                    </div>
                    <div class="notifications__list">{list}</div>
                </div>
            </Show>
        </div>
    }
}

//! Fixed top bar: logo, tagline, live clock, and notifications.

use leptos::prelude::*;

use crate::components::notification_dropdown::NotificationDropdown;
use crate::util::clock;

/// Application header with a clock that ticks once per second.
#[component]
pub fn Header() -> impl IntoView {
    let now = RwSignal::new(clock::now_ms());

    #[cfg(feature = "hydrate")]
    {
        let tick_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let tick_alive_task = tick_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(clock::CLOCK_TICK_MS))).await;
                if !tick_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                now.set(clock::now_ms());
            }
        });
        on_cleanup(move || tick_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <div class="header-bar">
            <header class="header">
                <a href="/" class="header__brand">
                    <img src="/image/image.png" alt="Tionale Logo" class="header__logo"/>
                    <span class="header__tagline">"Revenue Intelligence Platform"</span>
                </a>
                <div class="header__right">
                    <div class="header__live">
                        <span class="header__live-dot"></span>
                        <span class="header__live-label">"Live"</span>
                        <span class="header__sep">"•"</span>
                        <span>{move || clock::clock_label(now.get())}</span>
                    </div>
                    <NotificationDropdown/>
                </div>
            </header>
        </div>
    }
}

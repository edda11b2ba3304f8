use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlMetaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::notifications::{self, Badge};

/// Reads the supervisor marker the server renders into the page head.
pub fn supervisor_page() -> bool {
    let content = window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector("meta[name=\"is-supervisor\"]").ok().flatten())
        .and_then(|meta| meta.dyn_into::<HtmlMetaElement>().ok())
        .map(|meta| meta.content());
    notifications::is_supervisor(content.as_deref())
}

fn apply_title(count: u32) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let pathname = window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    if let Some(title) = notifications::document_title(count, &pathname) {
        document.set_title(&title);
    }
}

#[function_component(NotificationBadge)]
pub fn notification_badge() -> Html {
    let is_supervisor = use_state(supervisor_page);
    let badge = use_state(|| Badge::Hidden);

    let poll = {
        let badge = badge.clone();
        Callback::from(move |_: ()| {
            let badge = badge.clone();
            spawn_local(async move {
                match notifications::fetch_unread_count().await {
                    Ok(count) => {
                        badge.set(Badge::for_count(count));
                        apply_title(count);
                    }
                    Err(e) => {
                        gloo_console::error!(format!("Failed to fetch unread count: {}", e));
                    }
                }
            });
        })
    };

    {
        let poll = poll.clone();
        let is_supervisor = *is_supervisor;
        use_mount(move || {
            if is_supervisor {
                log::info!("supervisor page: polling unread count");
                poll.emit(());
            }
        });
    }

    let period = if *is_supervisor { config::UNREAD_POLL_MS } else { 0 };
    use_interval(move || poll.emit(()), period);

    if !*is_supervisor {
        return html! {};
    }

    html! {
        <span
            id="notificationBadge"
            class={classes!("notification-badge", badge.is_active().then_some("active"))}
        >
            { badge.text().to_string() }
        </span>
    }
}

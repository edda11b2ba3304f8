use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::{info, Level};
use web_sys::{window, MouseEvent, Node, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use wasm_bindgen::JsCast;

mod config;
mod content;
mod error;
mod notifications;
mod carousel {
    pub mod timer;
    pub mod viewport;
    pub mod reviews;
    pub mod cards;
}
mod media {
    pub mod lazy_image;
    pub mod video;
}
mod components {
    pub mod listener;
    pub mod observer;
    pub mod lazy_image;
    pub mod review_carousel;
    pub mod card_carousel;
    pub mod hero_video;
    pub mod notification_badge;
}
mod pages {
    pub mod home;
    pub mod dashboard;
}

use carousel::viewport;
use components::notification_badge::{supervisor_page, NotificationBadge};
use pages::{
    home::Home,
    dashboard::SupervisorDashboard,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/supervisor/dashboard")]
    SupervisorDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::NotFound => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::SupervisorDashboard => {
            info!("Rendering Supervisor dashboard");
            html! { <SupervisorDashboard /> }
        },
    }
}

/// In-page sections reachable from the navigation.
const SECTION_LINKS: [(&str, &str); 3] = [
    ("features", "المميزات"),
    ("support", "الدعم"),
    ("reviews", "آراء الطلاب"),
];

fn scroll_to_section(id: &str) {
    let target = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(target) = target {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_supervisor = use_state(supervisor_page);
    let nav_ref = use_node_ref();

    // Clicks anywhere outside the nav close the mobile menu.
    {
        let menu_open = menu_open.clone();
        let nav_ref = nav_ref.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let mobile = viewport::current_width().map_or(false, viewport::is_mobile_nav);
            if !*menu_open || !mobile {
                return;
            }
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = nav_ref
                .cast::<Node>()
                .map(|nav| nav.contains(target.as_ref()))
                .unwrap_or(false);
            if !inside {
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-links active"
    } else {
        "nav-links"
    };

    html! {
        <nav class="main-nav" ref={nav_ref} dir="rtl">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    { config::SITE_TITLE }
                </Link<Route>>

                <button class="menu-toggle" aria-label="القائمة" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class} id="navLinks">
                    { for SECTION_LINKS.iter().map(|&(id, label)| {
                        let close = close_menu.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            scroll_to_section(id);
                            close.emit(e);
                        });
                        html! {
                            <a key={id} href={format!("#{}", id)} class="nav-link" {onclick}>{label}</a>
                        }
                    }) }
                    {
                        if *is_supervisor {
                            html! {
                                <div onclick={close_menu.clone()}>
                                    <Link<Route> to={Route::SupervisorDashboard} classes="nav-link">
                                        {"لوحة المشرف"}
                                        <NotificationBadge />
                                    </Link<Route>>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

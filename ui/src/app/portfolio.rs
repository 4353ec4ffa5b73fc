use crate::console_info;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::components::display::NotificationBanner;
use crate::components::layout::{MobileMenu, NavBar};
use crate::components::sections::{AboutSection, ContactSection, ProjectsSection};
use crate::features::contact::{ContactAction, ContactState};
use crate::features::navigation::{NavState, Section};
use crate::features::profile::PROFILE;
use crate::services::config::get_global_config;
use crate::utils::{is_mobile_viewport, on_window_event, scroll_to_section, scroll_y};

const PORTFOLIO_CSS: Asset = asset!("/assets/styling/portfolio.css");

#[component]
pub fn Portfolio() -> Element {
    let config = use_hook(get_global_config);

    // All page state lives here and flows down as props
    let mut contact = use_signal(ContactState::default);
    let mut nav = use_signal(NavState::default);

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: ContactAction| {
        contact.with_mut(|s| s.reduce_in_place(action));
    });

    // Follow viewport width and scroll position for the navigation bar
    let nav_config = config.navigation.clone();
    use_effect(move || {
        let breakpoint = nav_config.mobile_breakpoint_px;
        let initial_y = scroll_y();
        nav.with_mut(|n| {
            n.set_mobile(is_mobile_viewport(breakpoint));
            n.update_scroll(initial_y, &nav_config);
        });
        console_info!("[Portfolio] Navigation listeners attached");

        let scroll_config = nav_config.clone();
        on_window_event("scroll", move || {
            let y = scroll_y();
            // Only write when the flag flips so the bar is not re-rendered per frame
            if nav.peek().scrolled != (y > scroll_config.scroll_threshold_px) {
                nav.with_mut(|n| n.update_scroll(y, &scroll_config));
            }
        });

        on_window_event("resize", move || {
            let is_mobile = is_mobile_viewport(breakpoint);
            if nav.peek().is_mobile != is_mobile {
                nav.with_mut(|n| n.set_mobile(is_mobile));
            }
        });
    });

    // Hide each notification after a while unless a newer one replaced it
    let auto_hide_ms = config.notification.auto_hide_ms;
    let shown_generation = use_memo(move || {
        let state = contact.read();
        state
            .notification
            .visible
            .then_some(state.notification.generation)
    });
    use_effect(move || {
        if let Some(generation) = shown_generation() {
            spawn(async move {
                TimeoutFuture::new(auto_hide_ms).await;
                dispatch.call(ContactAction::ExpireNotification(generation));
            });
        }
    });

    let on_navigate = EventHandler::new(move |section: Section| {
        nav.with_mut(|n| n.close_menu());
        scroll_to_section(section);
    });

    let height = nav().menu_height(&config.navigation);

    rsx! {
        document::Link { rel: "stylesheet", href: PORTFOLIO_CSS }

        NotificationBanner {
            notification: contact().notification,
            on_dismiss: move |_| dispatch.call(ContactAction::DismissNotification)
        }

        NavBar {
            nav: nav(),
            height: height,
            owner_name: PROFILE.name.to_string(),
            on_navigate: on_navigate,
            on_toggle_menu: move |_| nav.with_mut(|n| n.toggle_menu())
        }

        if nav().is_mobile {
            MobileMenu {
                open: nav().menu_open,
                top: height,
                on_navigate: on_navigate
            }
        }

        main {
            class: "page-content",
            style: "margin-top: {height}px;",

            AboutSection {
                glint_duration_ms: config.animation.glint_duration_ms
            }

            ProjectsSection {}

            ContactSection {
                state: contact,
                dispatch: dispatch
            }
        }
    }
}

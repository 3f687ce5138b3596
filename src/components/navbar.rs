use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::icons::{Icon, SvgIcon};
use crate::content;
use crate::state::MenuState;

/// Smooth-scrolls the viewport to the section carrying `id`. Unknown ids
/// are silently ignored; a missed scroll is not worth surfacing.
pub fn scroll_to_section(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_get_started: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu = use_state(MenuState::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = *menu;
            next.toggle();
            menu.set(next);
        })
    };

    // One handler per nav link: close the drawer first, then scroll. The
    // close happens even when the anchor is missing.
    let make_nav_onclick = {
        let menu = menu.clone();
        move |id: &'static str| {
            let menu = menu.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                let mut next = *menu;
                next.close();
                menu.set(next);
                scroll_to_section(id);
            })
        }
    };

    let scroll_top = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    let open_booking = {
        let on_get_started = props.on_get_started.clone();
        Callback::from(move |_: MouseEvent| on_get_started.emit(()))
    };

    let open_booking_from_menu = {
        let menu = menu.clone();
        let on_get_started = props.on_get_started.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.close();
            menu.set(next);
            on_get_started.emit(());
        })
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <div class="nav-logo" onclick={scroll_top}>
                    <div class="logo-mark"><div class="logo-pill"></div></div>
                    <span class="logo-word">{"Raft"}</span>
                </div>

                <div class="nav-links">
                    { for content::NAV_SECTIONS.iter().map(|&(label, id)| html! {
                        <button class="nav-link" onclick={make_nav_onclick(id)}>{ label }</button>
                    }) }
                </div>

                <div class="nav-actions">
                    <button class="nav-login">{"Log In"}</button>
                    <button class="nav-cta" onclick={open_booking}>
                        {"Get Started"}
                        <SvgIcon icon={Icon::ArrowRight} size={16} />
                    </button>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    if menu.is_open() {
                        <SvgIcon icon={Icon::Close} />
                    } else {
                        <SvgIcon icon={Icon::Menu} />
                    }
                </button>
            </div>

            if menu.is_open() {
                <div class="mobile-menu">
                    { for content::NAV_SECTIONS.iter().map(|&(label, id)| html! {
                        <button class="mobile-link" onclick={make_nav_onclick(id)}>{ label }</button>
                    }) }
                    <hr />
                    <button class="mobile-cta" onclick={open_booking_from_menu}>{"Get Started"}</button>
                </div>
            }
        </nav>
    }
}

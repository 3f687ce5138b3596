use yew::prelude::*;

/// The small stroke-icon set the page uses. Rendered inline so the site
/// ships no icon font or sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    Brain,
    CheckCircle,
    ChevronDown,
    Close,
    Heart,
    Mail,
    MapPin,
    Menu,
    MoveRight,
    Phone,
    Play,
    Shield,
    Sparkles,
    Star,
    Users,
}

#[derive(Properties, PartialEq)]
pub struct SvgIconProps {
    pub icon: Icon,
    #[prop_or(24)]
    pub size: u32,
    /// Fill the shape with the current color instead of stroking it.
    #[prop_or_default]
    pub filled: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(SvgIcon)]
pub fn svg_icon(props: &SvgIconProps) -> Html {
    let fill = if props.filled { "currentColor" } else { "none" };
    html! {
        <svg
            class={props.class.clone()}
            xmlns="http://www.w3.org/2000/svg"
            width={props.size.to_string()}
            height={props.size.to_string()}
            viewBox="0 0 24 24"
            fill={fill}
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { shape(props.icon) }
        </svg>
    }
}

fn shape(icon: Icon) -> Html {
    match icon {
        Icon::ArrowRight => html! {
            <>
                <path d="M5 12h14" />
                <path d="m12 5 7 7-7 7" />
            </>
        },
        Icon::Brain => html! {
            <>
                <path d="M9.5 2A2.5 2.5 0 0 1 12 4.5v15a2.5 2.5 0 0 1-4.96.44 2.5 2.5 0 0 1-2.96-3.08 3 3 0 0 1-.34-5.58 2.5 2.5 0 0 1 1.32-4.24 2.5 2.5 0 0 1 1.98-3A2.5 2.5 0 0 1 9.5 2Z" />
                <path d="M14.5 2A2.5 2.5 0 0 0 12 4.5v15a2.5 2.5 0 0 0 4.96.44 2.5 2.5 0 0 0 2.96-3.08 3 3 0 0 0 .34-5.58 2.5 2.5 0 0 0-1.32-4.24 2.5 2.5 0 0 0-1.98-3A2.5 2.5 0 0 0 14.5 2Z" />
            </>
        },
        Icon::CheckCircle => html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <path d="m9 12 2 2 4-4" />
            </>
        },
        Icon::ChevronDown => html! {
            <path d="m6 9 6 6 6-6" />
        },
        Icon::Close => html! {
            <>
                <path d="M18 6 6 18" />
                <path d="m6 6 12 12" />
            </>
        },
        Icon::Heart => html! {
            <path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.51 4.04 3 5.5l7 7Z" />
        },
        Icon::Mail => html! {
            <>
                <rect width="20" height="16" x="2" y="4" rx="2" />
                <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
            </>
        },
        Icon::MapPin => html! {
            <>
                <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
                <circle cx="12" cy="10" r="3" />
            </>
        },
        Icon::Menu => html! {
            <>
                <line x1="4" x2="20" y1="6" y2="6" />
                <line x1="4" x2="20" y1="12" y2="12" />
                <line x1="4" x2="20" y1="18" y2="18" />
            </>
        },
        Icon::MoveRight => html! {
            <>
                <path d="M18 8L22 12L18 16" />
                <path d="M2 12H22" />
            </>
        },
        Icon::Phone => html! {
            <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
        },
        Icon::Play => html! {
            <polygon points="6 3 20 12 6 21 6 3" />
        },
        Icon::Shield => html! {
            <path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1 1 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" />
        },
        Icon::Sparkles => html! {
            <>
                <path d="M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z" />
                <path d="M20 3v4" />
                <path d="M22 5h-4" />
                <path d="M4 17v2" />
                <path d="M5 18H3" />
            </>
        },
        Icon::Star => html! {
            <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
        },
        Icon::Users => html! {
            <>
                <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
                <circle cx="9" cy="7" r="4" />
                <path d="M22 21v-2a4 4 0 0 0-3-3.87" />
                <path d="M16 3.13a4 4 0 0 1 0 7.75" />
            </>
        },
    }
}

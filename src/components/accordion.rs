use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, SvgIcon};

// The parent owns which entry is expanded; an item only reports clicks.
// That is what keeps at most one answer open across the whole list.
#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: String,
    pub answer: String,
    pub open: bool,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={props.on_toggle.clone()}>
                <span class="question-text">{ &props.question }</span>
                <span class="toggle-icon"><SvgIcon icon={Icon::ChevronDown} /></span>
            </button>
            <div class="faq-answer">
                <p>{ &props.answer }</p>
            </div>
        </div>
    }
}

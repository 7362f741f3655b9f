use yew::prelude::*;

/// Pager navigation intents. Clamping happens in the list controller, so the
/// buttons only need to report which jump was asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PageMove {
    First,
    Previous,
    Next,
    Last,
}

#[derive(Properties, PartialEq)]
pub(crate) struct PagerProps {
    pub current: u32,
    pub total: u32,
    pub on_move: Callback<PageMove>,
}

#[function_component(Pager)]
pub(crate) fn pager(props: &PagerProps) -> Html {
    let at_start = props.current <= 1;
    let at_end = props.current >= props.total;
    let button = |label: &str, intent: PageMove, disabled: bool| {
        let on_move = props.on_move.clone();
        html! {
            <button
                class="ghost"
                disabled={disabled}
                onclick={Callback::from(move |_| on_move.emit(intent))}
            >
                {label}
            </button>
        }
    };

    html! {
        <div class="pager">
            {button("First", PageMove::First, at_start)}
            {button("Previous", PageMove::Previous, at_start)}
            <span class="muted">{format!("Page {} of {}", props.current, props.total)}</span>
            {button("Next", PageMove::Next, at_end)}
            {button("Last", PageMove::Last, at_end)}
        </div>
    }
}

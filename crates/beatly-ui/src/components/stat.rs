use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct StatCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
}

#[function_component(StatCard)]
pub(crate) fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="card stat">
            <span class="muted">{props.label.clone()}</span>
            <strong class="stat-value">{props.value.clone()}</strong>
        </div>
    }
}

use crate::core::list::{LIMIT_CHOICES, SortKey, SortOrder, parse_sort_value};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ListControlsProps {
    pub sort_by: SortKey,
    pub order: SortOrder,
    pub limit: u32,
    pub on_sort: Callback<(SortKey, SortOrder)>,
    pub on_limit: Callback<u32>,
}

/// Sort and page-size selectors shared by every collection screen.
#[function_component(ListControls)]
pub(crate) fn list_controls(props: &ListControlsProps) -> Html {
    let sort_value = format!("{}|{}", props.sort_by.as_str(), props.order.as_str());
    let on_sort_change = {
        let on_sort = props.on_sort.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                if let Some(parsed) = parse_sort_value(&select.value()) {
                    on_sort.emit(parsed);
                }
            }
        })
    };
    let on_limit_change = {
        let on_limit = props.on_limit.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                if let Ok(limit) = select.value().parse::<u32>() {
                    on_limit.emit(limit);
                }
            }
        })
    };

    html! {
        <div class="list-controls">
            <label class="stack">
                <span class="muted">{"Sort by"}</span>
                <select value={sort_value.clone()} onchange={on_sort_change}>
                    <option value="createdAt|desc" selected={sort_value == "createdAt|desc"}>{"Most Recent"}</option>
                    <option value="createdAt|asc" selected={sort_value == "createdAt|asc"}>{"Oldest First"}</option>
                    <option value="views|desc" selected={sort_value == "views|desc"}>{"Most Viewed"}</option>
                </select>
            </label>
            <label class="stack">
                <span class="muted">{"Per page"}</span>
                <select value={props.limit.to_string()} onchange={on_limit_change}>
                    {for LIMIT_CHOICES.iter().map(|choice| html! {
                        <option value={choice.to_string()} selected={*choice == props.limit}>
                            {format!("{choice} videos")}
                        </option>
                    })}
                </select>
            </label>
        </div>
    }
}

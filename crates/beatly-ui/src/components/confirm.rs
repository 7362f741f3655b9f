use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ConfirmDialogProps {
    pub open: bool,
    pub title: AttrValue,
    pub body: AttrValue,
    pub confirm_label: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmDialog)]
pub(crate) fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    if !props.open {
        return html! {};
    }
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_| on_confirm.emit(()))
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    html! {
        <div class="overlay" role="dialog" aria-modal="true">
            <div class="card dialog">
                <header>
                    <h3>{props.title.clone()}</h3>
                </header>
                <p class="muted">{props.body.clone()}</p>
                <div class="actions">
                    <button class="ghost" onclick={on_cancel}>{"Cancel"}</button>
                    <button class="solid danger" onclick={on_confirm}>{props.confirm_label.clone()}</button>
                </div>
            </div>
        </div>
    }
}

use crate::models::VideoRow;
use yew::prelude::*;

const PLACEHOLDER_THUMB: &str = "https://via.placeholder.com/300x200";

#[derive(Properties, PartialEq)]
pub(crate) struct VideoCardProps {
    pub row: VideoRow,
    pub on_select: Callback<String>,
    /// Present on the management grid only.
    #[prop_or_default]
    pub on_delete: Option<Callback<String>>,
}

#[function_component(VideoCard)]
pub(crate) fn video_card(props: &VideoCardProps) -> Html {
    let row = &props.row;
    let thumbnail = row
        .thumbnail
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_THUMB.to_string());
    let on_click = {
        let on_select = props.on_select.clone();
        let id = row.id.clone();
        Callback::from(move |_| on_select.emit(id.clone()))
    };
    let delete_button = props.on_delete.as_ref().map(|on_delete| {
        let on_delete = on_delete.clone();
        let id = row.id.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_delete.emit(id.clone());
        });
        html! {
            <button class="ghost danger" onclick={onclick}>{"Delete"}</button>
        }
    });

    html! {
        <article class="card video-card" onclick={on_click}>
            <img class="thumb" src={thumbnail} alt={row.title.clone()} loading="lazy" />
            <div class="card-body">
                <h3 class="title">{row.title.clone()}</h3>
                <p class="muted">{format!("Uploaded on {}", row.created_label)}</p>
                <div class="counts">
                    <span>{format!("{} views", row.views)}</span>
                    <span>{format!("{} comments", row.comments)}</span>
                    <span>{format!("{} likes", row.likes)}</span>
                </div>
                {delete_button}
            </div>
        </article>
    }
}

//! Upload modal for new videos.

use crate::app::api::ApiCtx;
use crate::core::store::AppStore;
use crate::features::upload::logic::{TagAdd, UploadErrors, add_tag, remove_tag, validate};
use crate::models::{ToastKind, UploadInput};
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;
use yewdux::prelude::Dispatch;

#[derive(Properties, PartialEq)]
pub(crate) struct UploadModalProps {
    pub on_close: Callback<()>,
}

#[function_component(UploadModal)]
pub(crate) fn upload_modal(props: &UploadModalProps) -> Html {
    let title = use_state(String::new);
    let description = use_state(String::new);
    let tags = use_state(Vec::<String>::new);
    let current_tag = use_state(String::new);
    let errors = use_state(UploadErrors::default);
    let busy = use_state(|| false);
    let video_file = use_state(|| None as Option<File>);
    let thumbnail_file = use_state(|| None as Option<File>);
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_context::<ApiCtx>();

    let on_title = {
        let title = title.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                title.set(input.value());
            }
        })
    };
    let on_description = {
        let description = description.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<web_sys::HtmlTextAreaElement>() {
                description.set(area.value());
            }
        })
    };
    let on_current_tag = {
        let current_tag = current_tag.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                current_tag.set(input.value());
            }
        })
    };
    let on_add_tag = {
        let tags = tags.clone();
        let current_tag = current_tag.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_| match add_tag(&tags, &current_tag) {
            TagAdd::Added(next) => {
                tags.set(next);
                current_tag.set(String::new());
            }
            TagAdd::Duplicate => current_tag.set(String::new()),
            TagAdd::LimitReached => dispatch.reduce_mut(|store| {
                store.toasts.push(ToastKind::Info, "Maximum of 10 tags allowed");
            }),
            TagAdd::Empty => {}
        })
    };
    let on_remove_tag = {
        let tags = tags.clone();
        Callback::from(move |value: String| tags.set(remove_tag(&tags, &value)))
    };
    let on_video = file_picker(&video_file);
    let on_thumbnail = file_picker(&thumbnail_file);

    let on_submit = {
        let title = title.clone();
        let description = description.clone();
        let tags = tags.clone();
        let current_tag = current_tag.clone();
        let errors = errors.clone();
        let busy = busy.clone();
        let video_file = video_file.clone();
        let thumbnail_file = thumbnail_file.clone();
        let dispatch = dispatch;
        let api_ctx = api_ctx;
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if *busy {
                return;
            }
            let checked = validate(&title, &description, &tags, video_file.is_some());
            if !checked.is_clean() {
                errors.set(checked);
                dispatch.reduce_mut(|store| {
                    store.toasts.push(ToastKind::Error, "Please check your input fields");
                });
                return;
            }
            let Some(video) = (*video_file).clone() else {
                return;
            };
            let Some(api_ctx) = api_ctx.clone() else {
                return;
            };
            errors.set(UploadErrors::default());
            busy.set(true);
            let input = UploadInput {
                title: title.trim().to_string(),
                description: description.trim().to_string(),
                tags: (*tags).clone(),
                video,
                thumbnail: (*thumbnail_file).clone(),
            };
            let client = api_ctx.client.clone();
            let title = title.clone();
            let description = description.clone();
            let tags = tags.clone();
            let current_tag = current_tag.clone();
            let video_file = video_file.clone();
            let thumbnail_file = thumbnail_file.clone();
            let busy = busy.clone();
            let dispatch = dispatch.clone();
            let on_close = on_close.clone();
            yew::platform::spawn_local(async move {
                match client.upload_video(input).await {
                    Ok(()) => {
                        dispatch.reduce_mut(|store| {
                            store
                                .toasts
                                .push(ToastKind::Success, "Your video has been uploaded");
                        });
                        title.set(String::new());
                        description.set(String::new());
                        tags.set(Vec::new());
                        current_tag.set(String::new());
                        video_file.set(None);
                        thumbnail_file.set(None);
                        on_close.emit(());
                    }
                    Err(err) => dispatch
                        .reduce_mut(|store| store.toasts.push(ToastKind::Error, err.message)),
                }
                busy.set(false);
            });
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="overlay" role="dialog" aria-modal="true">
            <div class="card dialog upload">
                <header>
                    <h3>{"Upload Video"}</h3>
                    <button class="ghost" aria-label="Close" onclick={on_cancel}>{"✕"}</button>
                </header>
                <label class="stack">
                    <span>{"Title"}</span>
                    <input placeholder="Enter video title" value={(*title).clone()} oninput={on_title} />
                    {field_error(errors.title.as_deref())}
                </label>
                <label class="stack">
                    <span>{"Description"}</span>
                    <textarea
                        rows="3"
                        placeholder="Enter video description"
                        value={(*description).clone()}
                        oninput={on_description}
                    />
                    {field_error(errors.description.as_deref())}
                </label>
                <label class="stack">
                    <span>{"Tags"}</span>
                    <div class="tag-entry">
                        <input
                            placeholder="Add tags (max 10)"
                            value={(*current_tag).clone()}
                            oninput={on_current_tag}
                        />
                        <button class="ghost" onclick={on_add_tag}>{"Add Tag"}</button>
                    </div>
                    {field_error(errors.tags.as_deref())}
                    <div class="pill-row">
                        {for tags.iter().map(|tag| {
                            let on_remove_tag = on_remove_tag.clone();
                            let value = tag.clone();
                            html! {
                                <span class="pill" key={tag.clone()}>
                                    {tag.clone()}
                                    <button
                                        class="ghost"
                                        aria-label="Remove tag"
                                        onclick={Callback::from(move |_| on_remove_tag.emit(value.clone()))}
                                    >
                                        {"✕"}
                                    </button>
                                </span>
                            }
                        })}
                    </div>
                </label>
                <label class="stack">
                    <span>{"Video File"}</span>
                    <input type="file" accept="video/*" onchange={on_video} />
                    {field_error(errors.video.as_deref())}
                </label>
                <label class="stack">
                    <span>{"Thumbnail (Optional)"}</span>
                    <input type="file" accept="image/*" onchange={on_thumbnail} />
                </label>
                <button class="solid" disabled={*busy} onclick={on_submit}>
                    {if *busy { "Uploading..." } else { "Upload Video" }}
                </button>
            </div>
        </div>
    }
}

fn field_error(message: Option<&str>) -> Html {
    message.map_or_else(
        || html! {},
        |text| html! { <p class="error-text">{text.to_string()}</p> },
    )
}

fn file_picker(slot: &UseStateHandle<Option<File>>) -> Callback<Event> {
    let slot = slot.clone();
    Callback::from(move |event: Event| {
        let picked = event
            .target_dyn_into::<HtmlInputElement>()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        slot.set(picked);
    })
}

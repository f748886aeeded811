/// Bookmark card with inline edit and delete

use crate::bookmark::Bookmark;
use crate::operations::UrlList;
use crate::ui::components::{use_api, TagChip};
use crate::ui::dom;
use patternfly_yew::prelude::{Button, ButtonVariant};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookmarkCardProps {
    pub bookmark: Bookmark,
    /// Re-run the current view after an edit or delete
    pub on_refresh: Callback<()>,
    pub on_tag_click: Callback<String>,
}

#[function_component(BookmarkCard)]
pub fn bookmark_card(props: &BookmarkCardProps) -> Html {
    let api = use_api();
    let editing = use_state(|| false);
    let hovered = use_state(|| false);
    let busy = use_state(|| false);
    let draft_link = use_state(|| props.bookmark.link.clone());
    let draft_summary = use_state(|| props.bookmark.summary.clone());

    let start_edit = {
        let editing = editing.clone();
        let draft_link = draft_link.clone();
        let draft_summary = draft_summary.clone();
        let bookmark = props.bookmark.clone();
        Callback::from(move |_: MouseEvent| {
            draft_link.set(bookmark.link.clone());
            draft_summary.set(bookmark.summary.clone());
            editing.set(true);
        })
    };

    let cancel_edit = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(false))
    };

    let on_link_input = {
        let draft_link = draft_link.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                draft_link.set(input.value());
            }
        })
    };

    let on_summary_input = {
        let draft_summary = draft_summary.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlTextAreaElement>() {
                draft_summary.set(input.value());
            }
        })
    };

    let on_save = {
        let api = api.clone();
        let editing = editing.clone();
        let busy = busy.clone();
        let draft_link = draft_link.clone();
        let draft_summary = draft_summary.clone();
        let original = props.bookmark.link.clone();
        let on_refresh = props.on_refresh.clone();

        Callback::from(move |_: MouseEvent| {
            let api = api.clone();
            let editing = editing.clone();
            let busy = busy.clone();
            let original = original.clone();
            let new_link = (*draft_link).clone();
            let new_summary = (*draft_summary).clone();
            let on_refresh = on_refresh.clone();

            busy.set(true);
            spawn_local(async move {
                match api.update_bookmark(&original, &new_link, &new_summary).await {
                    Ok(_) => {
                        editing.set(false);
                        on_refresh.emit(());
                    }
                    Err(e) => {
                        log::error!("updating {} failed: {}", original, e);
                        dom::alert("Failed to update bookmark. Please try again shortly.");
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_delete = {
        let busy = busy.clone();
        let link = props.bookmark.link.clone();
        let on_refresh = props.on_refresh.clone();

        Callback::from(move |_: MouseEvent| {
            if !dom::confirm("Delete this bookmark?") {
                return;
            }

            let api = api.clone();
            let busy = busy.clone();
            let link = link.clone();
            let on_refresh = on_refresh.clone();

            busy.set(true);
            spawn_local(async move {
                match api.remove_bookmark(&UrlList::from(link.as_str())).await {
                    Ok(_) => {
                        log::info!("deleted {}", link);
                        on_refresh.emit(());
                    }
                    Err(e) => {
                        log::error!("deleting {} failed: {}", link, e);
                        dom::alert("Failed to delete bookmark. Please try again shortly.");
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let bookmark = &props.bookmark;

    if *editing {
        return html! {
            <div class="bookmark-card editing">
                <input
                    type="text"
                    class="form-input"
                    value={(*draft_link).clone()}
                    oninput={on_link_input}
                    disabled={*busy}
                />
                <textarea
                    class="form-textarea"
                    rows="3"
                    value={(*draft_summary).clone()}
                    oninput={on_summary_input}
                    disabled={*busy}
                />
                <div class="card-actions">
                    <Button onclick={on_save} disabled={*busy} variant={ButtonVariant::Primary}>
                        {"Save"}
                    </Button>
                    <Button onclick={cancel_edit} disabled={*busy} variant={ButtonVariant::Secondary}>
                        {"Cancel"}
                    </Button>
                </div>
            </div>
        };
    }

    html! {
        <div class="bookmark-card" onmouseenter={on_enter} onmouseleave={on_leave}>
            <div class="card-title">
                <img class="favicon" src={bookmark.favicon_url()} alt="" width="16" height="16" />
                <a href={bookmark.link.clone()} target="_blank" rel="noopener noreferrer">
                    {bookmark.title()}
                </a>
                <span class="source-badge">{bookmark.source_type.label()}</span>
            </div>

            if *hovered {
                if let Some(image) = bookmark.image_url.clone().filter(|url| !url.is_empty()) {
                    <img class="card-preview" src={image} alt="" />
                }
            }

            <div class="card-host">{bookmark.host()}</div>

            if !bookmark.tags.is_empty() {
                <div class="card-tags">
                    {for bookmark.tags.iter().map(|tag| html! {
                        <TagChip key={tag.clone()} tag={tag.clone()} on_click={props.on_tag_click.clone()} />
                    })}
                </div>
            }

            <div class="card-actions">
                <button class="icon-button" title="Edit" onclick={start_edit} disabled={*busy}>{"✎"}</button>
                <button class="icon-button" title="Delete" onclick={on_delete} disabled={*busy}>{"🗑"}</button>
            </div>
        </div>
    }
}

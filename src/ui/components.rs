/// Reusable UI components

use crate::api::ApiClient;
use crate::config::ClientConfig;
use yew::prelude::*;

/// Backend client provided by the app root
#[hook]
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| {
        log::warn!("no ApiClient in context, using build-time config");
        ApiClient::from_config(&ClientConfig::from_env())
    })
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or_default]
    pub message: Option<String>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    html! {
        <span class="loading-spinner" aria-busy="true">
            <svg class="spinner-svg" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                <circle class="spinner-track" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                <path class="spinner-head" fill="currentColor" d="M4 12a8 8 0 018-8v4a4 4 0 00-4 4H4z"></path>
            </svg>
            if let Some(msg) = &props.message {
                <span class="loading-message">{msg}</span>
            }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    /// Ignore close requests, e.g. while a request is in flight
    #[prop_or(false)]
    pub locked: bool,
    pub children: Children,
}

/// Overlay dialog; clicking the backdrop closes it
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        let locked = props.locked;
        Callback::from(move |_: MouseEvent| {
            if !locked {
                on_close.emit(());
            }
        })
    };

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal-dialog" onclick={stop}>
                <button class="modal-close" onclick={close} disabled={props.locked}>{"✕"}</button>
                <h2 class="modal-title">{props.title.clone()}</h2>
                {props.children.clone()}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TagChipProps {
    pub tag: AttrValue,
    pub on_click: Callback<String>,
}

#[function_component(TagChip)]
pub fn tag_chip(props: &TagChipProps) -> Html {
    let onclick = {
        let tag = props.tag.to_string();
        props.on_click.reform(move |_: MouseEvent| tag.clone())
    };

    html! {
        <button class="tag-chip" {onclick}>{format!("#{}", props.tag)}</button>
    }
}

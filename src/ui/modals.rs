/// Add-bookmark and configuration dialogs

use crate::operations::{parse_url_lines, validate_api_key};
use crate::ui::components::{use_api, LoadingSpinner, Modal};
use crate::ui::dom;
use patternfly_yew::prelude::{Alert, AlertType, Button, ButtonVariant};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AddBookmarkModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_added: Callback<()>,
}

#[function_component(AddBookmarkModal)]
pub fn add_bookmark_modal(props: &AddBookmarkModalProps) -> Html {
    let api = use_api();
    let urls = use_state(String::new);
    let loading = use_state(|| false);

    let on_input = {
        let urls = urls.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlTextAreaElement>() {
                urls.set(input.value());
            }
        })
    };

    let on_submit = {
        let urls = urls.clone();
        let loading = loading.clone();
        let on_close = props.on_close.clone();
        let on_added = props.on_added.clone();

        Callback::from(move |_: MouseEvent| {
            // Nothing goes to the backend unless at least one line is a URL
            let list = match parse_url_lines(&urls) {
                Ok(list) => list,
                Err(e) => {
                    dom::alert(&e.to_string());
                    return;
                }
            };

            let api = api.clone();
            let urls = urls.clone();
            let loading = loading.clone();
            let on_close = on_close.clone();
            let on_added = on_added.clone();

            loading.set(true);
            spawn_local(async move {
                match api.add_bookmark(&list).await {
                    Ok(_) => {
                        log::info!("added {} bookmark(s)", list.len());
                        dom::alert("Bookmarks added!");
                        urls.set(String::new());
                        on_close.emit(());
                        on_added.emit(());
                    }
                    Err(e) => {
                        log::error!("adding bookmarks failed: {}", e);
                        dom::alert("Failed to add bookmarks. Please try again shortly.");
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <Modal open={props.open} title="Add bookmarks" on_close={props.on_close.clone()} locked={*loading}>
            <label class="form-label" for="bookmark-urls">
                {"URLs (one per line)"}
            </label>
            <textarea
                id="bookmark-urls"
                class="form-textarea"
                rows="5"
                placeholder={"https://example.com\nhttps://another-example.com"}
                value={(*urls).clone()}
                oninput={on_input}
                disabled={*loading}
            />
            <div class="modal-actions">
                <Button onclick={on_submit} disabled={*loading} variant={ButtonVariant::Primary} block={true}>
                    if *loading {
                        <LoadingSpinner message={"Adding..."} />
                    } else {
                        {"Add bookmarks"}
                    }
                </Button>
                <Button
                    onclick={props.on_close.reform(|_: MouseEvent| ())}
                    disabled={*loading}
                    variant={ButtonVariant::Secondary}
                    block={true}
                >
                    {"Cancel"}
                </Button>
            </div>
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfigurationModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(ConfigurationModal)]
pub fn configuration_modal(props: &ConfigurationModalProps) -> Html {
    let api = use_api();
    let api_key = use_state(String::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let test_result = use_state(|| None::<String>);

    // Load the current key every time the dialog opens
    {
        let api = api.clone();
        let api_key = api_key.clone();
        let loading = loading.clone();
        let error = error.clone();
        let test_result = test_result.clone();

        use_effect_with(props.open, move |open| {
            if *open {
                test_result.set(None);
                loading.set(true);
                spawn_local(async move {
                    match api.get_config().await {
                        Ok(config) => api_key.set(config.google_api_key),
                        Err(e) => {
                            log::error!("loading config failed: {}", e);
                            error.set(Some(
                                "Failed to load settings. Please try again shortly.".to_string(),
                            ));
                        }
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    let on_input = {
        let api_key = api_key.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                api_key.set(input.value());
            }
        })
    };

    let on_save = {
        let api = api.clone();
        let api_key = api_key.clone();
        let loading = loading.clone();
        let error = error.clone();

        Callback::from(move |_: MouseEvent| {
            let key = match validate_api_key(&api_key) {
                Ok(key) => key,
                Err(e) => {
                    dom::alert(&e.to_string());
                    return;
                }
            };

            let api = api.clone();
            let loading = loading.clone();
            let error = error.clone();

            loading.set(true);
            spawn_local(async move {
                match api.update_config(&key).await {
                    Ok(_) => {
                        error.set(None);
                        dom::alert("API key saved.");
                    }
                    Err(e) => {
                        log::error!("saving config failed: {}", e);
                        error.set(Some(
                            "Failed to save settings. Please try again shortly.".to_string(),
                        ));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_test = {
        let loading = loading.clone();
        let error = error.clone();
        let test_result = test_result.clone();

        Callback::from(move |_: MouseEvent| {
            let api = api.clone();
            let loading = loading.clone();
            let error = error.clone();
            let test_result = test_result.clone();

            test_result.set(None);
            error.set(None);
            loading.set(true);
            spawn_local(async move {
                match api.test_models().await {
                    Ok(check) => test_result.set(Some(check.message)),
                    Err(e) => {
                        log::error!("model test failed: {}", e);
                        error.set(Some(
                            "API key check failed. Verify the key and try again.".to_string(),
                        ));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <Modal open={props.open} title="API settings" on_close={props.on_close.clone()}>
            <label class="form-label" for="google-api-key">{"Google API key"}</label>
            <input
                id="google-api-key"
                type="text"
                class="form-input"
                placeholder="Enter your Google API Key"
                value={(*api_key).clone()}
                oninput={on_input}
            />
            <div class="modal-actions">
                <Button onclick={on_save} disabled={*loading} variant={ButtonVariant::Primary} block={true}>
                    {"Save"}
                </Button>
                <Button onclick={on_test} disabled={*loading} variant={ButtonVariant::Secondary} block={true}>
                    {"Test key"}
                </Button>
            </div>
            if *loading {
                <LoadingSpinner />
            }
            if let Some(message) = (*test_result).clone() {
                <Alert r#type={AlertType::Success} title={message} inline={true}>
                </Alert>
            }
            if let Some(err) = (*error).clone() {
                <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                    {err}
                </Alert>
            }
        </Modal>
    }
}

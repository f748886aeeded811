/// Page header: add, export, settings and theme controls

use crate::bookmark::Bookmark;
use crate::export::{netscape_html, EXPORT_FILENAME, EXPORT_MIME};
use crate::ui::dom;
use crate::ui::modals::{AddBookmarkModal, ConfigurationModal};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub dark_mode: bool,
    pub on_toggle_dark: Callback<()>,
    /// Reload the full list after bookmarks are added
    pub on_refresh: Callback<()>,
    /// Full bookmark list, used by the export
    pub bookmarks: Rc<Vec<Bookmark>>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let add_open = use_state(|| false);
    let config_open = use_state(|| false);
    let download_open = use_state(|| false);

    let open_add = {
        let add_open = add_open.clone();
        Callback::from(move |_: MouseEvent| add_open.set(true))
    };
    let close_add = {
        let add_open = add_open.clone();
        Callback::from(move |_: ()| add_open.set(false))
    };

    let open_config = {
        let config_open = config_open.clone();
        Callback::from(move |_: MouseEvent| config_open.set(true))
    };
    let close_config = {
        let config_open = config_open.clone();
        Callback::from(move |_: ()| config_open.set(false))
    };

    let toggle_download = {
        let download_open = download_open.clone();
        Callback::from(move |_: MouseEvent| download_open.set(!*download_open))
    };

    let on_download = {
        let bookmarks = props.bookmarks.clone();
        let download_open = download_open.clone();

        Callback::from(move |_: MouseEvent| {
            match netscape_html(&bookmarks, dom::now_secs()) {
                Ok(html) => {
                    log::info!("exporting {} bookmarks", bookmarks.len());
                    dom::download(&html, EXPORT_FILENAME, EXPORT_MIME);
                }
                Err(e) => dom::alert(&e.to_string()),
            }
            download_open.set(false);
        })
    };

    let on_toggle_dark = props.on_toggle_dark.reform(|_: MouseEvent| ());

    html! {
        <>
            <header class="app-header">
                <div class="header-inner">
                    <a class="logo" href="/">{"Tagscope"}</a>
                    <div class="header-actions">
                        <button class="icon-button" title="Add bookmark" onclick={open_add}>{"＋"}</button>

                        <div class="dropdown">
                            <button class="icon-button" title="Download" onclick={toggle_download}>{"⬇"}</button>
                            if *download_open {
                                <div class="dropdown-menu">
                                    <button class="dropdown-item" onclick={on_download}>
                                        {"Export as HTML"}
                                    </button>
                                </div>
                            }
                        </div>

                        <button class="icon-button" title="Settings" onclick={open_config}>{"⚙"}</button>
                        <button class="icon-button" title="Toggle theme" onclick={on_toggle_dark}>
                            {if props.dark_mode { "☀" } else { "☾" }}
                        </button>
                    </div>
                </div>
            </header>

            <AddBookmarkModal
                open={*add_open}
                on_close={close_add}
                on_added={props.on_refresh.clone()}
            />
            <ConfigurationModal open={*config_open} on_close={close_config} />
        </>
    }
}

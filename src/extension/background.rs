/// Service-worker side of the extension: icon state and add-on-click

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::extension::tracker::{icon_path, BookmarkState, ClickStep, Notice, TabId, TabTracker};
use crate::operations::UrlList;
use js_sys::Promise;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

// Import JS bridge functions
#[wasm_bindgen(module = "/background.js")]
extern "C" {
    fn setIcon(tab_id: i32, path: &str);

    #[wasm_bindgen(catch)]
    async fn sendTabMessage(tab_id: i32, message: JsValue) -> Result<JsValue, JsValue>;

    fn openTab(url: &str);
}

/// Context-menu entry that opens the frontend
pub const OPEN_SITE_MENU_ID: &str = "openBookmarkSite";

/// Owned by the service worker for its lifetime
#[wasm_bindgen]
pub struct Background {
    tracker: Rc<RefCell<TabTracker>>,
    api: ApiClient,
    frontend_url: String,
}

#[wasm_bindgen]
impl Background {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Background {
        let config = ClientConfig::from_env();
        log::info!("background started, backend at {}", config.api_base_url);

        Background {
            tracker: Rc::new(RefCell::new(TabTracker::new())),
            api: ApiClient::from_config(&config),
            frontend_url: config.frontend_url,
        }
    }

    pub fn open_site_menu_id() -> String {
        OPEN_SITE_MENU_ID.to_string()
    }

    /// Toolbar icon clicked: check, then add if missing
    pub fn on_action_clicked(&self, tab_id: i32, url: Option<String>) -> Promise {
        let tracker = self.tracker.clone();
        let api = self.api.clone();

        future_to_promise(async move {
            match url {
                Some(url) => handle_click(&tracker, &api, tab_id, &url).await,
                None => {
                    log::warn!("tab {} has no url to bookmark", tab_id);
                    tracker.borrow_mut().record_check(tab_id, false);
                    show_icon(tab_id, BookmarkState::NotBookmarked);
                    notify(tab_id, Notice::Failed).await;
                }
            }
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Tab finished loading: refresh its icon
    pub fn on_tab_updated(&self, tab_id: i32, status: Option<String>, url: Option<String>) -> Promise {
        let tracker = self.tracker.clone();
        let api = self.api.clone();

        future_to_promise(async move {
            if let (Some("complete"), Some(url)) = (status.as_deref(), url) {
                let bookmarked = check_existing(&api, tab_id, &url).await;
                let state = tracker.borrow_mut().record_check(tab_id, bookmarked);
                show_icon(tab_id, state);
            }
            Ok(JsValue::UNDEFINED)
        })
    }

    pub fn on_tab_removed(&self, tab_id: i32) {
        self.tracker.borrow_mut().forget(tab_id);
    }

    pub fn on_context_menu_clicked(&self, menu_item_id: &str) {
        if menu_item_id == OPEN_SITE_MENU_ID {
            openTab(&self.frontend_url);
        } else {
            log::warn!("ignoring context menu item {}", menu_item_id);
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::new()
    }
}

async fn handle_click(tracker: &RefCell<TabTracker>, api: &ApiClient, tab_id: TabId, url: &str) {
    let bookmarked = check_existing(api, tab_id, url).await;
    let step = tracker.borrow_mut().on_click_checked(tab_id, bookmarked);

    let notice = match step {
        ClickStep::Done(notice) => notice,
        ClickStep::SendAdd => {
            show_icon(tab_id, BookmarkState::Pending);
            let ok = api.add_bookmark(&UrlList::from(url)).await.is_ok();
            tracker.borrow_mut().finish_add(tab_id, ok)
        }
    };

    let state = tracker.borrow().state(tab_id);
    show_icon(tab_id, state);
    notify(tab_id, notice).await;
}

/// A failed lookup counts as not bookmarked
async fn check_existing(api: &ApiClient, tab_id: TabId, url: &str) -> bool {
    match api.is_bookmarked(url).await {
        Ok(found) => found,
        Err(err) => {
            log::warn!("bookmark check for tab {} failed: {}", tab_id, err);
            false
        }
    }
}

fn show_icon(tab_id: TabId, state: BookmarkState) {
    setIcon(tab_id, icon_path(state));
}

async fn notify(tab_id: TabId, notice: Notice) {
    let message = match serde_wasm_bindgen::to_value(&notice) {
        Ok(message) => message,
        Err(e) => {
            log::error!("failed to encode notice: {:?}", e);
            return;
        }
    };

    // Pages without the content script (chrome://, the web store) reject this
    if let Err(e) = sendTabMessage(tab_id, message).await {
        log::debug!("tab {} did not take the notice: {:?}", tab_id, e);
    }
}

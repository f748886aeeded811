/// Web app root: owns the bookmark list, search state and theme

use crate::api::ApiClient;
use crate::bookmark::Bookmark;
use crate::config::ClientConfig;
use crate::search::{SearchPlan, SearchRequest, SearchSequence};
use crate::tags::top_tags;
use crate::ui::bookmark_list::BookmarkList;
use crate::ui::components::{use_api, LoadingSpinner};
use crate::ui::dom;
use crate::ui::header::Header;
use crate::ui::search_bar::SearchBar;
use patternfly_yew::prelude::{Alert, AlertType};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[function_component(App)]
pub fn app() -> Html {
    let api = use_memo((), |_| ApiClient::from_config(&ClientConfig::from_env()));

    html! {
        <ContextProvider<ApiClient> context={(*api).clone()}>
            <Home />
        </ContextProvider<ApiClient>>
    }
}

#[function_component(Home)]
fn home() -> Html {
    let api = use_api();
    let bookmarks = use_state(|| Rc::new(Vec::<Bookmark>::new()));
    let search_results = use_state(|| Rc::new(Vec::<Bookmark>::new()));
    let current_query = use_state(|| None::<SearchRequest>);
    let loading = use_state(|| true);
    let fatal = use_state(|| None::<String>);
    let banner = use_state(|| None::<String>);
    let searching = use_state(|| false);
    let dark_mode = use_state(dom::load_dark_mode);
    let sequence = use_mut_ref(SearchSequence::default);

    use_effect_with(*dark_mode, |dark| {
        dom::apply_dark_mode(*dark);
        || ()
    });

    // Initial load
    {
        let api = api.clone();
        let bookmarks = bookmarks.clone();
        let loading = loading.clone();
        let fatal = fatal.clone();
        let sequence = sequence.clone();

        use_effect_with((), move |_| {
            let ticket = sequence.borrow_mut().issue();
            spawn_local(async move {
                let result = api.get_all_bookmarks().await;
                if !sequence.borrow().is_current(ticket) {
                    log::debug!("initial load superseded by a newer request");
                    loading.set(false);
                    return;
                }
                match result {
                    Ok(list) => {
                        log::info!("loaded {} bookmarks", list.len());
                        bookmarks.set(Rc::new(list));
                    }
                    Err(e) => {
                        log::error!("initial load failed: {}", e);
                        fatal.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let run_search = {
        let api = api.clone();
        let bookmarks = bookmarks.clone();
        let search_results = search_results.clone();
        let current_query = current_query.clone();
        let banner = banner.clone();
        let searching = searching.clone();
        let sequence = sequence.clone();

        Callback::from(move |plan: SearchPlan| {
            let api = api.clone();
            let bookmarks = bookmarks.clone();
            let search_results = search_results.clone();
            let banner = banner.clone();
            let searching = searching.clone();
            let sequence = sequence.clone();
            let ticket = sequence.borrow_mut().issue();

            banner.set(None);
            match plan {
                SearchPlan::ShowAll => {
                    current_query.set(None);
                    spawn_local(async move {
                        let result = api.get_all_bookmarks().await;
                        if !sequence.borrow().is_current(ticket) {
                            log::debug!("dropping stale list response");
                            return;
                        }
                        match result {
                            Ok(list) => bookmarks.set(Rc::new(list)),
                            Err(e) => {
                                log::error!("reloading bookmarks failed: {}", e);
                                banner.set(Some(e.to_string()));
                            }
                        }
                        searching.set(false);
                    });
                }
                SearchPlan::Query(request) => {
                    current_query.set(Some(request.clone()));
                    searching.set(true);
                    spawn_local(async move {
                        let result = api.search_bookmarks(&request).await;
                        if !sequence.borrow().is_current(ticket) {
                            log::debug!("dropping stale results for {:?}", request.query);
                            return;
                        }
                        match result {
                            Ok(results) => {
                                log::info!("{} result(s) for {:?}", results.len(), request.query);
                                search_results.set(Rc::new(results));
                            }
                            Err(e) => {
                                log::error!("search for {:?} failed: {}", request.query, e);
                                search_results.set(Rc::new(Vec::new()));
                                banner.set(Some(e.to_string()));
                            }
                        }
                        searching.set(false);
                    });
                }
            }
        })
    };

    // Edits and deletes re-run whatever the user is looking at
    let on_refresh = {
        let run_search = run_search.clone();
        let current = (*current_query).clone();
        Callback::from(move |_: ()| {
            let plan = match &current {
                Some(request) => SearchPlan::Query(request.clone()),
                None => SearchPlan::ShowAll,
            };
            run_search.emit(plan);
        })
    };

    let on_tag_search = {
        let run_search = run_search.clone();
        Callback::from(move |tag: String| {
            run_search.emit(SearchPlan::Query(SearchRequest::for_tag(&tag)));
        })
    };

    // Full list only; search mode, if any, is kept
    let reload_list = {
        let api = api.clone();
        let bookmarks = bookmarks.clone();
        let banner = banner.clone();
        Callback::from(move |_: ()| {
            let api = api.clone();
            let bookmarks = bookmarks.clone();
            let banner = banner.clone();
            spawn_local(async move {
                match api.get_all_bookmarks().await {
                    Ok(list) => bookmarks.set(Rc::new(list)),
                    Err(e) => {
                        log::error!("reloading bookmarks failed: {}", e);
                        banner.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    let on_toggle_dark = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |_: ()| dark_mode.set(!*dark_mode))
    };

    let search_mode = current_query.is_some();
    let displayed = if search_mode {
        (*search_results).clone()
    } else {
        (*bookmarks).clone()
    };

    // Ranked once per list so unrelated re-renders keep the same tags
    let ranked = use_memo(displayed.clone(), |list| {
        top_tags(list, &mut rand::thread_rng())
    });

    if let Some(err) = (*fatal).clone() {
        return html! {
            <div class="app-error">
                <h2>{"Failed to load bookmarks"}</h2>
                <p>{err}</p>
            </div>
        };
    }

    html! {
        <div class="app">
            <Header
                dark_mode={*dark_mode}
                on_toggle_dark={on_toggle_dark}
                on_refresh={reload_list}
                bookmarks={(*bookmarks).clone()}
            />

            <main class="app-main">
                <SearchBar top_tags={ranked.clone()} searching={*searching} on_search={run_search} />

                if let Some(err) = (*banner).clone() {
                    <Alert r#type={AlertType::Danger} title={"Request failed"} inline={true}>
                        {err}
                    </Alert>
                }

                if *loading {
                    <LoadingSpinner message={"Loading bookmarks..."} />
                } else if search_mode && displayed.is_empty() && !*searching {
                    <p class="empty-state">{"No search results."}</p>
                } else {
                    <BookmarkList
                        bookmarks={displayed}
                        top_tags={ranked}
                        on_refresh={on_refresh}
                        on_tag_search={on_tag_search}
                    />
                }
            </main>

            <footer class="app-footer">{format!("Tagscope v{}", VERSION)}</footer>
        </div>
    }
}

/// Search input with precision, type and tag filters

use crate::bookmark::SourceType;
use crate::search::{plan, SearchForm, SearchPlan};
use crate::ui::components::LoadingSpinner;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub top_tags: Rc<Vec<String>>,
    pub searching: bool,
    pub on_search: Callback<SearchPlan>,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let form = use_state(SearchForm::default);
    let show_filters = use_state(|| false);

    let on_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                next.query = input.value();
                form.set(next);
            }
        })
    };

    let on_keydown = {
        let form = form.clone();
        let show_filters = show_filters.clone();
        let on_search = props.on_search.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "Enter" => on_search.emit(plan(&form)),
            "Escape" => show_filters.set(false),
            _ => {}
        })
    };

    let toggle_filters = {
        let show_filters = show_filters.clone();
        Callback::from(move |_: MouseEvent| show_filters.set(!*show_filters))
    };

    let on_popover_key = {
        let show_filters = show_filters.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                show_filters.set(false);
            }
        })
    };

    let on_precision = {
        let form = form.clone();
        Callback::from(move |_: Event| {
            let mut next = (*form).clone();
            next.precision = !next.precision;
            form.set(next);
        })
    };

    let on_type = {
        let form = form.clone();
        move |source_type: SourceType| {
            let form = form.clone();
            Callback::from(move |_: Event| {
                let mut next = (*form).clone();
                next.toggle_type(source_type);
                form.set(next);
            })
        }
    };

    let on_tag = {
        let form = form.clone();
        move |tag: String| {
            let form = form.clone();
            Callback::from(move |_: Event| {
                let mut next = (*form).clone();
                next.toggle_tag(&tag);
                form.set(next);
            })
        }
    };

    let indicator = if form.indicator_checked() {
        "filter-indicator checked"
    } else {
        "filter-indicator"
    };

    html! {
        <div class="search-bar">
            <div class="search-input-wrap">
                <span class="search-icon">{"🔍"}</span>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search bookmarks"
                    value={form.query.clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                />
                if props.searching {
                    <LoadingSpinner />
                }
            </div>

            <label class={indicator} onclick={toggle_filters}>
                {"Filters"}
            </label>

            if *show_filters {
                <div class="filter-popover" onkeydown={on_popover_key}>
                    <div class="filter-section">
                        <div class="filter-heading">{"Search options"}</div>
                        <label class="filter-option">
                            <input type="checkbox" checked={form.precision} onchange={on_precision} />
                            {"Precision mode"}
                        </label>
                    </div>

                    <div class="filter-section">
                        <div class="filter-heading">{"Categories"}</div>
                        {for SourceType::ALL.iter().map(|source_type| html! {
                            <label key={source_type.label()} class="filter-option">
                                <input
                                    type="checkbox"
                                    checked={form.types.contains(source_type)}
                                    onchange={on_type(*source_type)}
                                />
                                {source_type.label()}
                            </label>
                        })}
                    </div>

                    if !props.top_tags.is_empty() {
                        <div class="filter-section">
                            <div class="filter-heading">{"Tags"}</div>
                            {for props.top_tags.iter().map(|tag| html! {
                                <label key={tag.clone()} class="filter-option">
                                    <input
                                        type="checkbox"
                                        checked={form.tags.contains(tag)}
                                        onchange={on_tag(tag.clone())}
                                    />
                                    {tag}
                                </label>
                            })}
                        </div>
                    }
                </div>
            }
        </div>
    }
}

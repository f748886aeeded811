/// Paginated bookmark grid with a tag facet strip

use crate::bookmark::Bookmark;
use crate::operations::filter_by_score;
use crate::pagination::{page_numbers, page_range, window_for_width, Pager};
use crate::tags::FACET_DISPLAY_COUNT;
use crate::ui::bookmark_card::BookmarkCard;
use crate::ui::components::TagChip;
use crate::ui::dom;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookmarkListProps {
    pub bookmarks: Rc<Vec<Bookmark>>,
    pub top_tags: Rc<Vec<String>>,
    pub on_refresh: Callback<()>,
    pub on_tag_search: Callback<String>,
}

#[function_component(BookmarkList)]
pub fn bookmark_list(props: &BookmarkListProps) -> Html {
    // Survives refreshes; a list that shrank under it is clamped below
    let page = use_state(|| 1usize);

    let visible = use_memo(props.bookmarks.clone(), |bookmarks| filter_by_score(bookmarks));

    let pager = Pager::new(*page, visible.len());
    let current = pager.clamped();
    let pager = Pager { current, ..pager };
    let window = window_for_width(dom::viewport_width());

    let goto = {
        let page = page.clone();
        move |target: usize| {
            let page = page.clone();
            Callback::from(move |_: MouseEvent| page.set(target))
        }
    };

    let on_facet = {
        let page = page.clone();
        let on_tag_search = props.on_tag_search.clone();
        Callback::from(move |tag: String| {
            page.set(1);
            on_tag_search.emit(tag);
        })
    };

    let items = &visible[page_range(visible.len(), current)];

    html! {
        <div class="bookmark-list">
            if !props.top_tags.is_empty() {
                <div class="facet-strip">
                    {for props.top_tags.iter().take(FACET_DISPLAY_COUNT).map(|tag| html! {
                        <TagChip key={tag.clone()} tag={tag.clone()} on_click={on_facet.clone()} />
                    })}
                </div>
            }

            <div class="bookmark-grid">
                {for items.iter().map(|bookmark| html! {
                    <BookmarkCard
                        key={bookmark.link.clone()}
                        bookmark={bookmark.clone()}
                        on_refresh={props.on_refresh.clone()}
                        on_tag_click={on_facet.clone()}
                    />
                })}
            </div>

            if pager.total > 1 {
                <nav class="pagination">
                    <button class="page-button" onclick={goto(pager.prev())} disabled={pager.is_first()}>
                        {"‹"}
                    </button>
                    {for page_numbers(pager.total, current, window).into_iter().enumerate().map(|(pos, item)| {
                        match pager.go(item) {
                            Some(target) => html! {
                                <button
                                    key={format!("page-{}", target)}
                                    class={if target == current { "page-button active" } else { "page-button" }}
                                    onclick={goto(target)}
                                >
                                    {target}
                                </button>
                            },
                            None => html! {
                                <span key={format!("gap-{}", pos)} class="page-ellipsis">{"…"}</span>
                            },
                        }
                    })}
                    <button class="page-button" onclick={goto(pager.next())} disabled={pager.is_last()}>
                        {"›"}
                    </button>
                </nav>
            }
        </div>
    }
}

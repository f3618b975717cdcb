use leptos::either::Either;
use leptos::prelude::*;

use super::post_card::PostCard;
use crate::models::Post;

/// Distinct categories in `posts`, sorted.
pub fn unique_categories(posts: &[Post]) -> Vec<String> {
    let mut categories: Vec<String> = posts.iter().map(|p| p.category.clone()).collect();
    categories.sort();
    categories.dedup();
    categories
}

/// Posts in `category`, in their original order. `None` keeps everything.
pub fn filter_by_category(posts: &[Post], category: Option<&str>) -> Vec<Post> {
    match category {
        None => posts.to_vec(),
        Some(category) => posts
            .iter()
            .filter(|post| post.category == category)
            .cloned()
            .collect(),
    }
}

#[component]
pub fn PostList(posts: Vec<Post>) -> impl IntoView {
    let selected = RwSignal::new(None::<String>);
    let categories = unique_categories(&posts);
    let posts = StoredValue::new(posts);

    let on_category_select = Callback::new(move |category: String| {
        log::debug!("filtering posts by category: {}", category);
        selected.set(Some(category));
    });

    let button_class = move |active: bool| {
        if active {
            "px-3 py-1 text-sm rounded-md bg-blue-500 text-white"
        } else {
            "px-3 py-1 text-sm rounded-md bg-[#EDEDED] dark:bg-[#262626] text-[#404040] dark:text-[#B5B5B5]"
        }
    };

    view! {
        <div class="pt-4 space-y-4">
            <div class="flex flex-wrap gap-2 pl-4">
                <button
                    class=move || button_class(selected.get().is_none())
                    on:click=move |_| {
                        log::debug!("clearing category filter");
                        selected.set(None);
                    }
                >
                    "All"
                </button>
                {categories
                    .into_iter()
                    .map(|category| {
                        let value = category.clone();
                        let current = category.clone();
                        view! {
                            <button
                                class=move || {
                                    button_class(selected.get().as_deref() == Some(current.as_str()))
                                }
                                on:click=move |_| on_category_select.run(value.clone())
                            >
                                {category}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                let visible = posts
                    .with_value(|posts| filter_by_category(posts, selected.get().as_deref()));
                if visible.is_empty() {
                    Either::Left(view! {
                        <div class="text-center text-gray-500 dark:text-gray-400">"No posts found"</div>
                    })
                } else {
                    Either::Right(view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-10">
                            {visible
                                .into_iter()
                                .map(|post| {
                                    view! { <PostCard post=post on_category_select=on_category_select/> }
                                })
                                .collect_view()}
                        </div>
                    })
                }
            }}
        </div>
    }
}

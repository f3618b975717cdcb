use leptos::prelude::*;

use super::tag_chips::TagChips;
use super::thumbnail::Thumbnail;
use crate::config::use_card_config;
use crate::models::Post;

/// Click handler for the category label: hands `post.category` to the callback.
fn category_click(post: &Post, on_category_select: Callback<String>) -> impl Fn() + Clone + 'static {
    let category = post.category.clone();
    move || {
        log::trace!("category label clicked: {}", category);
        on_category_select.run(category.clone());
    }
}

/// Preview card for a single post.
///
/// The thumbnail and the title/description block both link to `post.url`.
/// The category label sits outside either link: clicking it hands
/// `post.category` to `on_category_select` and does not navigate.
#[component]
pub fn PostCard(post: Post, #[prop(into)] on_category_select: Callback<String>) -> impl IntoView {
    let config = use_card_config();
    let src = post.thumbnail_src(&config.thumbnail_prefix);
    let on_category_click = category_click(&post, on_category_select);

    view! {
        <article class="flex flex-col max-w-[490px] w-full mx-auto">
            <a href=post.url.clone()>
                <figure class="overflow-hidden w-full rounded-[12px]">
                    <Thumbnail
                        src=src
                        width=config.thumbnail_width
                        height=config.thumbnail_height
                        priority=config.thumbnail_priority
                    />
                </figure>
            </a>
            <div>
                <p
                    class="cursor-pointer font-bold text-[15px] mt-3 bg-gradient-to-r from-[#832374] to-[#E93ECE] dark:from-blue-500 dark:to-green-500 inline-block text-transparent bg-clip-text"
                    on:click=move |_| on_category_click()
                >
                    {post.category}
                </p>
            </div>
            <a href=post.url class="group">
                <p class="font-bold text-xl mt-1 group-hover:text-blue-500 dark:group-hover:text-blue-500 group-hover:underline">
                    {post.title}
                </p>
                <p class="font-normal text-base mt-1 text-[#525252] dark:text-[#A3A3A3]">
                    {post.description}
                </p>
            </a>
            <TagChips tags=post.tags/>
        </article>
    }
}

use leptos::prelude::*;

/// Fixed-size image used as the card's thumbnail.
///
/// `src` goes to the `<img>` untouched. Priority images load eagerly; the rest
/// are left to the browser's lazy loading.
#[component]
pub fn Thumbnail(
    #[prop(into)] src: String,
    width: u32,
    height: u32,
    #[prop(optional)] priority: bool,
    #[prop(default = "thumbnail")] alt: &'static str,
) -> impl IntoView {
    let loading = if priority { "eager" } else { "lazy" };
    let style = format!("max-height: {}px", height);

    view! {
        <img
            src=src
            width=width.to_string()
            height=height.to_string()
            alt=alt
            loading=loading
            style=style
            class="transition-transform duration-300 ease-in-out hover:scale-105"
        />
    }
}

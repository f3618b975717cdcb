use leptos::prelude::*;

/// Chip labels for `tags`, in order.
///
/// The iterator is lazy. Calling `chips` again, or cloning before anything
/// is consumed, replays the sequence from the first tag; a clone taken
/// mid-way continues from where the original was.
pub fn chips(tags: &[String]) -> impl Iterator<Item = &str> + Clone {
    tags.iter().map(String::as_str)
}

#[component]
pub fn TagChip(#[prop(into)] tag: String) -> impl IntoView {
    view! {
        <div class="tag-chip h-8 mt-2.5 mr-2 bg-[#EDEDED] dark:bg-[#262626] rounded-[10px] w-auto inline-flex flex-wrap justify-center items-center">
            <div class="font-normal text-base mx-2 text-[#404040] dark:text-[#B5B5B5]">
                {tag}
            </div>
        </div>
    }
}

#[component]
pub fn TagChips(tags: Vec<String>) -> impl IntoView {
    view! {
        <div>
            {chips(&tags)
                .map(|tag| view! { <TagChip tag=tag.to_string()/> })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn chips_follow_input_order() {
        let tags = tags(&["go", "rust", "go"]);
        assert_eq!(chips(&tags).collect::<Vec<_>>(), vec!["go", "rust", "go"]);
    }

    #[test]
    fn chips_restart_from_a_clone() {
        let tags = tags(&["a", "b"]);
        let mut sequence = chips(&tags);
        let restart = sequence.clone();
        assert_eq!(sequence.next(), Some("a"));
        assert_eq!(sequence.next(), Some("b"));
        assert_eq!(sequence.next(), None);
        assert_eq!(restart.collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn clone_mid_way_continues_and_fresh_call_restarts() {
        let tags = tags(&["a", "b", "c"]);
        let mut sequence = chips(&tags);
        assert_eq!(sequence.next(), Some("a"));
        assert_eq!(sequence.clone().collect::<Vec<_>>(), vec!["b", "c"]);
        assert_eq!(chips(&tags).collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn no_tags_no_chips() {
        assert_eq!(chips(&[]).count(), 0);
    }

    #[test]
    fn renders_tag_text_verbatim() {
        let html = Owner::new().with(|| {
            view! { <TagChips tags=tags(&["C++ & friends", "rust"])/> }.to_html()
        });
        assert_eq!(html.matches("tag-chip").count(), 2);
        // text nodes are escaped, but never trimmed or rewritten
        assert!(html.contains("C++ &amp; friends"));
        assert!(html.find("C++").unwrap() < html.find(">rust<").unwrap());
    }
}

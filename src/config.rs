use leptos::prelude::*;

pub const THUMBNAIL_PREFIX: &str = "/img/thumbnail/";
pub const THUMBNAIL_WIDTH: u32 = 490;
pub const THUMBNAIL_HEIGHT: u32 = 245;

/// Rendering hints shared by every card on a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardConfig {
    pub thumbnail_prefix: String,
    pub thumbnail_width: u32,
    pub thumbnail_height: u32,
    pub thumbnail_priority: bool,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            thumbnail_prefix: THUMBNAIL_PREFIX.to_string(),
            thumbnail_width: THUMBNAIL_WIDTH,
            thumbnail_height: THUMBNAIL_HEIGHT,
            thumbnail_priority: true,
        }
    }
}

pub fn provide_card_config(config: CardConfig) {
    provide_context(config);
}

/// The config provided by an ancestor, or the defaults when there is none.
pub fn use_card_config() -> CardConfig {
    use_context::<CardConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_hints() {
        let config = CardConfig::default();
        assert_eq!(config.thumbnail_prefix, "/img/thumbnail/");
        assert_eq!(config.thumbnail_width, 490);
        assert_eq!(config.thumbnail_height, 245);
        assert!(config.thumbnail_priority);
    }

    #[test]
    fn context_overrides_defaults() {
        let owner = Owner::new();
        owner.with(|| {
            assert_eq!(use_card_config(), CardConfig::default());

            provide_card_config(CardConfig {
                thumbnail_prefix: "/cdn/".to_string(),
                ..CardConfig::default()
            });
            assert_eq!(use_card_config().thumbnail_prefix, "/cdn/");
        });
    }
}

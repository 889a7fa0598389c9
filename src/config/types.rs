// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_ELEMENTS_ID_PREFIX: &str = "ad-process-notice";
pub const DEFAULT_LIST_TAG: &str = "ul";
pub const DEFAULT_ITEM_TAG: &str = "li";

/// Appended to the prefix to form the shared list's DOM id
pub const LIST_ID_SUFFIX: &str = "__list";
/// Appended to the prefix to form the shared loader's DOM id
pub const LOADER_ID_SUFFIX: &str = "__loader";

/// Process-wide defaults shared by every widget of a context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub elements_id_prefix: String,
    pub list_tag: String,
    pub item_tag: String,
    pub center_list: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            elements_id_prefix: DEFAULT_ELEMENTS_ID_PREFIX.to_string(),
            list_tag: DEFAULT_LIST_TAG.to_string(),
            item_tag: DEFAULT_ITEM_TAG.to_string(),
            center_list: false,
        }
    }
}

impl Defaults {
    /// Overwrite the fields present in `patch`
    pub fn merge(&mut self, patch: &DefaultsPatch) {
        if let Some(prefix) = &patch.elements_id_prefix {
            self.elements_id_prefix = prefix.clone();
        }
        if let Some(tag) = &patch.list_tag {
            self.list_tag = tag.clone();
        }
        if let Some(tag) = &patch.item_tag {
            self.item_tag = tag.clone();
        }
        if let Some(center) = patch.center_list {
            self.center_list = center;
        }
    }
}

/// Partial update of [`Defaults`]; also the `[defaults]` config section
///
/// Keys outside this set are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DefaultsPatch {
    #[serde(alias = "elementsIdPrefix")]
    pub elements_id_prefix: Option<String>,
    #[serde(alias = "listTag")]
    pub list_tag: Option<String>,
    #[serde(alias = "itemTag")]
    pub item_tag: Option<String>,
    #[serde(alias = "centerList")]
    pub center_list: Option<bool>,
}

impl DefaultsPatch {
    pub fn list_tag(tag: &str) -> Self {
        DefaultsPatch {
            list_tag: Some(tag.to_string()),
            ..Default::default()
        }
    }
}

/// Per-widget overrides; also the `[widget]` config section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InstanceOptions {
    #[serde(alias = "centerList")]
    pub center_list: Option<bool>,
    #[serde(alias = "listClass")]
    pub list_class: Option<String>,
    #[serde(alias = "listItemClass")]
    pub list_item_class: Option<String>,
    #[serde(alias = "loaderClass")]
    pub loader_class: Option<String>,
}

/// Instance options resolved against the defaults at widget construction
///
/// Classes stay `None` unless configured; elements then carry no class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetOptions {
    pub center_list: bool,
    pub item_tag: String,
    pub list_class: Option<String>,
    pub list_item_class: Option<String>,
    pub loader_class: Option<String>,
}

impl WidgetOptions {
    pub fn resolve(defaults: &Defaults, options: &InstanceOptions) -> Self {
        WidgetOptions {
            center_list: options.center_list.unwrap_or(defaults.center_list),
            item_tag: defaults.item_tag.clone(),
            list_class: options.list_class.clone(),
            list_item_class: options.list_item_class.clone(),
            loader_class: options.loader_class.clone(),
        }
    }
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self::resolve(&Defaults::default(), &InstanceOptions::default())
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsPatch,
    #[serde(default)]
    pub widget: InstanceOptions,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;

//! Pagination/search/filter state shared by every list screen.
//!
//! All mutation goes through [`PageConfig::apply`]: an explicit reducer over
//! [`PageConfigPatch`] values, so the "anything that changes the result set
//! resets to page 1" invariant lives in exactly one place.

use std::collections::BTreeMap;

use leptos::prelude::*;

/// Allowed page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::Twenty,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    pub fn as_u32(self) -> u32 {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

/// Value held by one active filter dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Single(String),
    Many(Vec<String>),
}

impl FilterValue {
    pub fn contains(&self, value: &str) -> bool {
        match self {
            FilterValue::Single(v) => v == value,
            FilterValue::Many(vs) => vs.iter().any(|v| v == value),
        }
    }

    /// Human-readable summary for a filter chip, resolving values to labels
    /// through the supplied lookup.
    pub fn summary(&self, label_of: impl Fn(&str) -> Option<String>) -> String {
        match self {
            FilterValue::Single(v) => label_of(v).unwrap_or_else(|| v.clone()),
            FilterValue::Many(vs) if vs.len() == 1 => {
                label_of(&vs[0]).unwrap_or_else(|| vs[0].clone())
            }
            FilterValue::Many(vs) => format!("{} Selected", vs.len()),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            FilterValue::Single(v) => v.is_empty(),
            FilterValue::Many(vs) => vs.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// 1-based current page.
    pub page: u32,
    pub count: PageSize,
    /// Committed free-text search term (the `key` query parameter).
    pub search: Option<String>,
    pub filters: BTreeMap<String, FilterValue>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page: 1,
            count: PageSize::Ten,
            search: None,
            filters: BTreeMap::new(),
        }
    }
}

/// One mutation of the page config. Everything except `Page` resets the
/// current page to 1, because it changes which result set is being viewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageConfigPatch {
    Page(u32),
    Count(PageSize),
    Search(String),
    ClearSearch,
    SetFilter(String, FilterValue),
    RemoveFilter(String),
}

impl PageConfig {
    pub fn apply(&self, patch: PageConfigPatch) -> PageConfig {
        let mut next = self.clone();
        match patch {
            PageConfigPatch::Page(page) => {
                next.page = page.max(1);
                return next;
            }
            PageConfigPatch::Count(count) => next.count = count,
            PageConfigPatch::Search(term) => next.search = Some(term),
            PageConfigPatch::ClearSearch => next.search = None,
            PageConfigPatch::SetFilter(key, value) => {
                next.filters.insert(key, value);
            }
            PageConfigPatch::RemoveFilter(key) => {
                next.filters.remove(&key);
            }
        }
        next.page = 1;
        next
    }

    /// Filter whose key currently holds a non-empty value.
    pub fn has_filter_value(&self, key: &str) -> bool {
        self.filters.get(key).is_some_and(|v| !v.is_empty())
    }

    /// Query pairs in wire order: page, count, key, then filters.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("count".to_string(), self.count.as_u32().to_string()),
        ];
        if let Some(search) = &self.search {
            if !search.is_empty() {
                pairs.push(("key".to_string(), search.clone()));
            }
        }
        for (key, value) in &self.filters {
            match value {
                FilterValue::Single(v) => pairs.push((key.clone(), v.clone())),
                FilterValue::Many(vs) => {
                    for v in vs {
                        pairs.push((key.clone(), v.clone()));
                    }
                }
            }
        }
        pairs
    }

    pub fn to_query_string(&self) -> String {
        self.to_query_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Apply a patch to a page-config signal in place.
pub fn dispatch(config: RwSignal<PageConfig>, patch: PageConfigPatch) {
    config.update(|c| *c = c.apply(patch));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page_3() -> PageConfig {
        PageConfig {
            page: 3,
            ..PageConfig::default()
        }
    }

    #[test]
    fn filter_change_resets_page() {
        let config = on_page_3().apply(PageConfigPatch::SetFilter(
            "status".into(),
            FilterValue::Single("true".into()),
        ));
        assert_eq!(config.page, 1);
        assert!(config.has_filter_value("status"));
    }

    #[test]
    fn filter_removal_resets_page_and_drops_key() {
        let config = on_page_3()
            .apply(PageConfigPatch::SetFilter(
                "roleId".into(),
                FilterValue::Single("2".into()),
            ))
            .apply(PageConfigPatch::Page(4))
            .apply(PageConfigPatch::RemoveFilter("roleId".into()));
        assert_eq!(config.page, 1);
        assert!(!config.filters.contains_key("roleId"));
    }

    #[test]
    fn count_change_resets_page() {
        let config = on_page_3().apply(PageConfigPatch::Count(PageSize::Fifty));
        assert_eq!(config.page, 1);
        assert_eq!(config.count, PageSize::Fifty);
    }

    #[test]
    fn search_commit_and_clear_reset_page() {
        let config = on_page_3().apply(PageConfigPatch::Search("napa".into()));
        assert_eq!(config.page, 1);
        assert_eq!(config.search.as_deref(), Some("napa"));

        let config = config
            .apply(PageConfigPatch::Page(2))
            .apply(PageConfigPatch::ClearSearch);
        assert_eq!(config.page, 1);
        assert_eq!(config.search, None);
    }

    #[test]
    fn page_change_keeps_everything_else() {
        let config = PageConfig::default()
            .apply(PageConfigPatch::Search("x".into()))
            .apply(PageConfigPatch::Page(5));
        assert_eq!(config.page, 5);
        assert_eq!(config.search.as_deref(), Some("x"));
    }

    #[test]
    fn query_string_repeats_multi_values() {
        let config = PageConfig::default()
            .apply(PageConfigPatch::SetFilter(
                "dosageType".into(),
                FilterValue::Many(vec!["tablet".into(), "syrup".into()]),
            ))
            .apply(PageConfigPatch::Search("para cetamol".into()));
        assert_eq!(
            config.to_query_string(),
            "page=1&count=10&key=para%20cetamol&dosageType=tablet&dosageType=syrup"
        );
    }
}

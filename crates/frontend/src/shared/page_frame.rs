//! PageFrame: root wrapper for every page rendered in the content area.
//!
//! Sets `id` (`"{entity}--{category}"`, e.g. `"a001_product--list"`) and
//! `data-page-category` on the root element.

use leptos::prelude::*;

/// Table of records with filters
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard / report view
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Login and other pages outside the shell
pub const PAGE_CAT_SYSTEM: &str = "system";

pub fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    }
}

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class=page_class(category) data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(PAGE_CAT_LIST), "page");
        assert_eq!(page_class(PAGE_CAT_DASHBOARD), "page page--dashboard");
        assert_eq!(page_class("anything"), "page");
    }
}

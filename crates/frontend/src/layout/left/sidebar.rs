//! Static navigation menu; every entry is a route link.

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<MenuItem>,
}

fn item(path: &'static str, label: &'static str, icon: &'static str) -> MenuItem {
    MenuItem { path, label, icon }
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Tổng quan",
            items: vec![
                item("/", "Bảng điều khiển", "dashboard"),
                item("/reports", "Báo cáo", "reports"),
            ],
        },
        MenuGroup {
            label: "Bán hàng",
            items: vec![
                item("/orders", "Đơn hàng", "orders"),
                item("/customers", "Khách hàng", "customers"),
                item("/promotions", "Khuyến mãi", "promotions"),
            ],
        },
        MenuGroup {
            label: "Hàng hóa",
            items: vec![
                item("/products", "Sản phẩm", "products"),
                item("/categories", "Danh mục", "categories"),
                item("/inventory", "Kho hàng", "inventory"),
                item("/purchase-orders", "Nhập hàng", "purchases"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="app-sidebar__content">
            {menu_groups().into_iter().map(|group| view! {
                <div class="app-sidebar__group">
                    <div class="app-sidebar__group-label">{group.label}</div>
                    {group.items.into_iter().map(|entry| view! {
                        // the root link would otherwise match every page
                        <A href=entry.path exact={entry.path == "/"} attr:class="app-sidebar__item">
                            <span class="app-sidebar__item-content">
                                {icon(entry.icon)}
                                <span>{entry.label}</span>
                            </span>
                        </A>
                    }).collect_view()}
                </div>
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_menu_paths_are_unique_and_absolute() {
        let paths: Vec<_> = menu_groups()
            .into_iter()
            .flat_map(|g| g.items)
            .map(|i| i.path)
            .collect();
        assert_eq!(paths.len(), 9);
        assert!(paths.iter().all(|p| p.starts_with('/')));
        assert_eq!(paths.iter().collect::<HashSet<_>>().len(), paths.len());
    }
}

use leptos::prelude::*;

/// Stroke paths of the 24x24 icon set, keyed by name
fn icon_paths(name: &str) -> &'static [&'static str] {
    match name {
        "dashboard" => &[
            "M3 3h7v9H3z",
            "M14 3h7v5h-7z",
            "M14 12h7v9h-7z",
            "M3 16h7v5H3z",
        ],
        "products" => &[
            "M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z",
            "M3.27 6.96 12 12l8.73-5.04",
            "M12 22V12",
        ],
        "categories" => &["M4 6h16", "M4 12h16", "M4 18h10"],
        "customers" => &[
            "M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2",
            "M9 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8z",
            "M23 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        "orders" => &[
            "M9 21a1 1 0 1 0 0-2 1 1 0 0 0 0 2z",
            "M20 21a1 1 0 1 0 0-2 1 1 0 0 0 0 2z",
            "M1 1h4l2.68 12.39a2 2 0 0 0 2 1.61h7.72a2 2 0 0 0 2-1.61L23 6H6",
        ],
        "promotions" => &[
            "M20.59 13.41l-7.17 7.17a2 2 0 0 1-2.83 0L2 12V2h10l8.59 8.59a2 2 0 0 1 0 2.82z",
            "M7 7h.01",
        ],
        "inventory" => &[
            "M3 3h7v7H3z",
            "M14 3h7v7h-7z",
            "M14 14h7v7h-7z",
            "M3 14h7v7H3z",
        ],
        "purchases" => &[
            "M14 2H6a2 2 0 0 0-2 2v16l4-2 4 2 4-2 4 2V8z",
            "M14 2v6h6",
            "M8 13h8",
            "M8 17h5",
        ],
        "reports" => &["M18 20V10", "M12 20V4", "M6 20v-6"],
        "bell" => &[
            "M18 8A6 6 0 0 0 6 8c0 7-3 9-3 9h18s-3-2-3-9",
            "M13.73 21a2 2 0 0 1-3.46 0",
        ],
        "logout" => &[
            "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4",
            "M16 17l5-5-5-5",
            "M21 12H9",
        ],
        "plus" => &["M12 5v14", "M5 12h14"],
        "edit" => &[
            "M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7",
            "M18.5 2.5a2.121 2.121 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z",
        ],
        "trash" => &[
            "M3 6h18",
            "M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6",
            "M10 11v6",
            "M14 11v6",
            "M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2",
        ],
        "refresh" => &[
            "M23 4v6h-6",
            "M1 20v-6h6",
            "M3.51 9a9 9 0 0 1 14.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0 0 20.49 15",
        ],
        "check" => &["M20 6 9 17l-5-5"],
        "x" => &["M18 6 6 18", "M6 6l12 12"],
        "money" => &["M12 1v22", "M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"],
        "alert" => &[
            "M10.29 3.86 1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z",
            "M12 9v4",
            "M12 17h.01",
        ],
        _ => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z"],
    }
}

pub fn icon(name: &str) -> AnyView {
    let paths = icon_paths(name)
        .iter()
        .map(|d| view! { <path d=*d /> })
        .collect_view();
    view! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths}
        </svg>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_icons_are_known() {
        let fallback = icon_paths("no-such-icon");
        for name in ["dashboard", "products", "orders", "reports", "bell", "logout"] {
            assert_ne!(icon_paths(name), fallback, "{name}");
        }
    }
}

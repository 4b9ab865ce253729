use contracts::domain::a004_order::aggregate::OrderStatus;
use contracts::domain::a007_purchase_order::aggregate::PurchaseOrderStatus;
use leptos::prelude::*;
use thaw::*;

pub fn order_status_color(status: OrderStatus) -> BadgeColor {
    match status {
        OrderStatus::Pending => BadgeColor::Warning,
        OrderStatus::Confirmed => BadgeColor::Informative,
        OrderStatus::Shipping => BadgeColor::Brand,
        OrderStatus::Completed => BadgeColor::Success,
        OrderStatus::Cancelled => BadgeColor::Danger,
        OrderStatus::Unknown => BadgeColor::Subtle,
    }
}

pub fn purchase_status_color(status: PurchaseOrderStatus) -> BadgeColor {
    match status {
        PurchaseOrderStatus::Draft => BadgeColor::Subtle,
        PurchaseOrderStatus::Ordered => BadgeColor::Informative,
        PurchaseOrderStatus::Received => BadgeColor::Success,
        PurchaseOrderStatus::Cancelled => BadgeColor::Danger,
        PurchaseOrderStatus::Unknown => BadgeColor::Subtle,
    }
}

#[component]
pub fn StatusBadge(label: &'static str, color: BadgeColor) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>{label}</Badge>
    }
}

use crate::dashboards::{OverviewDashboard, SalesReportDashboard};
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_customer::ui::list::CustomerList;
use crate::domain::a004_order::ui::list::OrderList;
use crate::domain::a005_promotion::ui::list::PromotionList;
use crate::domain::a006_inventory::ui::list::InventoryList;
use crate::domain::a007_purchase_order::ui::list::PurchaseOrderList;
use crate::layout::Shell;
use crate::system::auth::guard::RequireSession;
use crate::system::auth::AuthSession;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--system">
            <h1 class="page__title">"Không tìm thấy trang"</h1>
            <A href="/">"Về trang chủ"</A>
        </div>
    }
}

/// Route table. Everything except `/login` sits behind the session guard
/// inside the application shell.
#[component]
pub fn AppRoutes(session: AuthSession) -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/login") view=move || view! { <LoginPage session=session /> } />
                <ParentRoute
                    path=path!("")
                    view=move || view! {
                        <RequireSession session=session>
                            <Shell session=session>
                                <Outlet />
                            </Shell>
                        </RequireSession>
                    }
                >
                    <Route path=path!("") view=move || view! { <OverviewDashboard session=session /> } />
                    <Route path=path!("products") view=move || view! { <ProductList session=session /> } />
                    <Route path=path!("categories") view=move || view! { <CategoryList session=session /> } />
                    <Route path=path!("customers") view=move || view! { <CustomerList session=session /> } />
                    <Route path=path!("orders") view=move || view! { <OrderList session=session /> } />
                    <Route path=path!("promotions") view=move || view! { <PromotionList session=session /> } />
                    <Route path=path!("inventory") view=move || view! { <InventoryList session=session /> } />
                    <Route path=path!("purchase-orders") view=move || view! { <PurchaseOrderList session=session /> } />
                    <Route path=path!("reports") view=move || view! { <SalesReportDashboard session=session /> } />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

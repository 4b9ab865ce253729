use crate::dashboards::d400_overview::api;
use crate::shared::components::list_status::ListStatus;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{CardTone, StatCard};
use crate::shared::components::status_badge::{order_status_color, StatusBadge};
use crate::domain::a004_order::ui::list::OrderCells;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::number_format::{format_number_int, format_vnd};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::system::auth::AuthSession;
use contracts::dashboards::d400_overview::aggregate::DashboardStats;
use leptos::prelude::*;
use thaw::*;

fn low_stock_tone(count: u32) -> CardTone {
    if count > 0 {
        CardTone::Warning
    } else {
        CardTone::Good
    }
}

/// Landing page: headline figures and the latest orders
#[component]
pub fn OverviewDashboard(session: AuthSession) -> impl IntoView {
    let controller = ListController::<DashboardStats>::new();

    let reload = move || {
        let client = session.client();
        controller.load(move |scope| async move { api::stats(&client, &scope).await.map(|s| vec![s]) });
    };
    reload();

    let stats = Memo::new(move |_| controller.record().unwrap_or_default());
    let greeting = move || session.user().map(|u| format!("Xin chào, {}", u.display_name()));

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Tổng quan" subtitle=Signal::derive(greeting)>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| reload()
                    disabled=Signal::derive(move || controller.is_loading())
                >
                    {icon("refresh")}
                    " Làm mới"
                </Button>
            </PageHeader>

            <ListStatus
                state=Signal::derive(move || controller.view())
                error=Signal::derive(move || controller.error())
            >
                <div class="stat-grid">
                    <StatCard
                        label="Doanh thu hôm nay"
                        icon_name="money"
                        value=Signal::derive(move || format_vnd(stats.get().today_revenue))
                        tone=CardTone::Good
                        subtitle=Signal::derive(move || Some(format!("Tổng: {}", format_vnd(stats.get().total_revenue))))
                    />
                    <StatCard
                        label="Đơn hàng"
                        icon_name="orders"
                        value=Signal::derive(move || format_number_int(stats.get().total_orders as f64))
                        subtitle=Signal::derive(move || Some(format!("{} đơn chờ xử lý", stats.get().pending_orders)))
                    />
                    <StatCard
                        label="Khách hàng"
                        icon_name="customers"
                        value=Signal::derive(move || format_number_int(stats.get().total_customers as f64))
                    />
                    <StatCard
                        label="Sản phẩm sắp hết"
                        icon_name="alert"
                        value=Signal::derive(move || stats.get().low_stock_products.to_string())
                        tone=Signal::derive(move || low_stock_tone(stats.get().low_stock_products))
                        subtitle=Signal::derive(move || Some(format!("trên {} sản phẩm", stats.get().total_products)))
                    />
                </div>

                <section class="dashboard-section">
                    <h2 class="dashboard-section__title">"Đơn hàng gần đây"</h2>
                    {move || {
                        let orders = stats.get().recent_orders;
                        if orders.is_empty() {
                            return view! { <div class="list-status list-status--empty">"Chưa có đơn hàng"</div> }.into_any();
                        }
                        view! {
                            <Table attr:style="width: 100%;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell resizable=false>"Mã đơn"</TableHeaderCell>
                                        <TableHeaderCell resizable=false>"Khách hàng"</TableHeaderCell>
                                        <TableHeaderCell resizable=false>"Tổng tiền"</TableHeaderCell>
                                        <TableHeaderCell resizable=false>"Trạng thái"</TableHeaderCell>
                                        <TableHeaderCell resizable=false>"Ngày tạo"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {orders.into_iter().map(|o| {
                                        let status = o.status;
                                        let OrderCells { code, customer, total, created } = OrderCells::of(&o);
                                        view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout>{code}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout truncate=true>{customer}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{total}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <StatusBadge label=status.label() color=order_status_color(status) />
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell><TableCellLayout>{created}</TableCellLayout></TableCell>
                                            </TableRow>
                                        }
                                    }).collect_view()}
                                </TableBody>
                            </Table>
                        }
                        .into_any()
                    }}
                </section>
            </ListStatus>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_stock_card_warns_only_when_needed() {
        assert_eq!(low_stock_tone(0), CardTone::Good);
        assert_eq!(low_stock_tone(3), CardTone::Warning);
    }
}

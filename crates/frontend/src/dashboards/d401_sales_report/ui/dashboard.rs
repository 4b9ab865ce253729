use crate::dashboards::d401_sales_report::api;
use crate::shared::components::list_status::ListStatus;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::number_format::{format_number_int, format_vnd};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::system::auth::AuthSession;
use contracts::dashboards::d401_sales_report::aggregate::{ReportPeriod, SalesReport};
use leptos::prelude::*;
use thaw::*;

/// Bar width in percent of the busiest day
fn bar_percent(revenue: f64, peak: f64) -> f64 {
    if peak <= 0.0 || revenue <= 0.0 {
        return 0.0;
    }
    (revenue / peak * 100.0).clamp(0.0, 100.0)
}

#[component]
pub fn SalesReportDashboard(session: AuthSession) -> impl IntoView {
    let controller = ListController::<SalesReport>::new();
    let period = RwSignal::new(ReportPeriod::default().as_str().to_string());

    let reload = move || {
        let client = session.client();
        let selected = ReportPeriod::from_str_value(&period.get_untracked());
        controller.load(move |scope| async move {
            api::sales(&client, &scope, selected).await.map(|r| vec![r])
        });
    };

    Effect::new(move |_| {
        period.track();
        reload();
    });

    let report = Memo::new(move |_| controller.record().unwrap_or_default());

    view! {
        <PageFrame page_id="d401_sales_report--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Báo cáo doanh thu">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <Select value=period>
                        {ReportPeriod::ALL.into_iter().map(|p| view! {
                            <option value=p.as_str()>{p.label()}</option>
                        }).collect_view()}
                    </Select>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reload()
                        disabled=Signal::derive(move || controller.is_loading())
                    >
                        {icon("refresh")}
                    </Button>
                </Flex>
            </PageHeader>

            <ListStatus
                state=Signal::derive(move || controller.view())
                error=Signal::derive(move || controller.error())
            >
                <div class="stat-grid">
                    <StatCard
                        label="Doanh thu"
                        icon_name="money"
                        value=Signal::derive(move || format_vnd(report.get().total_revenue))
                    />
                    <StatCard
                        label="Số đơn hàng"
                        icon_name="orders"
                        value=Signal::derive(move || format_number_int(report.get().total_orders as f64))
                    />
                    <StatCard
                        label="Giá trị trung bình"
                        icon_name="reports"
                        value=Signal::derive(move || format_vnd(report.get().average_order_value))
                    />
                </div>

                <div class="report-grid">
                    <section class="dashboard-section">
                        <h2 class="dashboard-section__title">"Doanh thu theo ngày"</h2>
                        {move || {
                            let report = report.get();
                            let peak = report.peak_revenue();
                            if report.revenue_by_day.is_empty() {
                                return view! { <div class="list-status list-status--empty">"Không có dữ liệu"</div> }.into_any();
                            }
                            report.revenue_by_day.into_iter().map(|point| {
                                let width = format!("width: {:.1}%;", bar_percent(point.revenue, peak));
                                view! {
                                    <div class="bar-row">
                                        <span class="bar-row__label">{format_date(&point.date)}</span>
                                        <div class="bar-row__track">
                                            <div class="bar-row__fill" style=width></div>
                                        </div>
                                        <span class="bar-row__value">{format_vnd(point.revenue)}</span>
                                        <span class="bar-row__hint">{format!("{} đơn", point.orders)}</span>
                                    </div>
                                }
                            }).collect_view().into_any()
                        }}
                    </section>

                    <section class="dashboard-section">
                        <h2 class="dashboard-section__title">"Sản phẩm bán chạy"</h2>
                        {move || {
                            let top = report.get().top_products;
                            if top.is_empty() {
                                return view! { <div class="list-status list-status--empty">"Không có dữ liệu"</div> }.into_any();
                            }
                            view! {
                                <Table attr:style="width: 100%;">
                                    <TableHeader>
                                        <TableRow>
                                            <TableHeaderCell resizable=false>"#"</TableHeaderCell>
                                            <TableHeaderCell resizable=false>"Sản phẩm"</TableHeaderCell>
                                            <TableHeaderCell resizable=false>"Đã bán"</TableHeaderCell>
                                            <TableHeaderCell resizable=false>"Doanh thu"</TableHeaderCell>
                                        </TableRow>
                                    </TableHeader>
                                    <TableBody>
                                        {top.into_iter().enumerate().map(|(i, p)| {
                                            let rank = i + 1;
                                            let sold = format_number_int(p.quantity_sold as f64);
                                            let revenue = format_vnd(p.revenue);
                                            let name = p.name;
                                            view! {
                                                <TableRow>
                                                    <TableCell><TableCellLayout>{rank}</TableCellLayout></TableCell>
                                                    <TableCell><TableCellLayout truncate=true>{name}</TableCellLayout></TableCell>
                                                    <TableCell><TableCellLayout>{sold}</TableCellLayout></TableCell>
                                                    <TableCell><TableCellLayout>{revenue}</TableCellLayout></TableCell>
                                                </TableRow>
                                            }
                                        }).collect_view()}
                                    </TableBody>
                                </Table>
                            }
                            .into_any()
                        }}
                    </section>
                </div>
            </ListStatus>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_percent() {
        assert_eq!(bar_percent(250.0, 250.0), 100.0);
        assert_eq!(bar_percent(50.0, 200.0), 25.0);
        assert_eq!(bar_percent(10.0, 0.0), 0.0);
        assert_eq!(bar_percent(-5.0, 100.0), 0.0);
    }
}

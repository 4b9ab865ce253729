use crate::domain::a001_product::api as product_api;
use crate::domain::a003_customer::api as customer_api;
use crate::domain::a004_order::api;
use crate::domain::a004_order::ui::details::{OrderCreate, OrderView};
use crate::shared::alert::confirm;
use crate::shared::components::list_status::ListStatus;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::{order_status_color, StatusBadge};
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::modal::Modal;
use crate::shared::number_format::format_vnd;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::AuthSession;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a003_customer::aggregate::Customer;
use contracts::domain::a004_order::aggregate::{CreateOrderDto, Order, OrderStatus};
use leptos::prelude::*;
use thaw::*;

/// Display texts of one order row, shared with the overview dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCells {
    pub code: String,
    pub customer: String,
    pub total: String,
    pub created: String,
}

impl OrderCells {
    pub fn of(order: &Order) -> Self {
        Self {
            code: order.display_code(),
            customer: order.customer_display().to_string(),
            total: format_vnd(order.total_amount),
            created: format_datetime_opt(&order.created_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Dialog {
    Create,
    View(Order),
}

#[component]
pub fn OrderList(session: AuthSession) -> impl IntoView {
    let controller = ListController::<Order>::new();
    let products = ListController::<Product>::new();
    let customers = ListController::<Customer>::new();
    let search = RwSignal::new(String::new());
    let status = RwSignal::new("all".to_string());
    let dialog = RwSignal::new(None::<Dialog>);

    let reload = move || {
        let client = session.client();
        let text = search.get_untracked();
        let filter = status.get_untracked();
        controller.load(move |scope| async move { api::list(&client, &scope, &text, &filter).await });
    };

    Effect::new(move |_| {
        status.track();
        reload();
    });

    // lookups for the create form, fetched when it opens
    let open_create = move || {
        let client = session.client();
        products.load(move |scope| async move { product_api::list(&client, &scope, "").await });
        let client = session.client();
        customers.load(move |scope| async move { customer_api::list(&client, &scope, "").await });
        dialog.set(Some(Dialog::Create));
    };

    let create = Callback::new(move |dto: CreateOrderDto| {
        let client = session.client();
        controller.mutate(
            "Tạo đơn hàng thất bại",
            move |scope| async move { api::create(&client, &scope, &dto).await },
            move |_| {
                dialog.set(None);
                reload();
            },
        );
    });

    let change_status = move |order: Order, next: OrderStatus| {
        if next == order.status || next == OrderStatus::Unknown {
            return;
        }
        if next == OrderStatus::Cancelled
            && !confirm(&format!("Hủy đơn hàng {}?", order.display_code()))
        {
            reload();
            return;
        }
        let client = session.client();
        controller.mutate(
            "Cập nhật trạng thái thất bại",
            move |scope| async move { api::update_status(&client, &scope, &order.id, next).await },
            move |_| reload(),
        );
    };

    let remove = move |order: Order| {
        if !confirm(&format!("Xóa đơn hàng {}?", order.display_code())) {
            return;
        }
        let client = session.client();
        controller.mutate(
            "Xóa đơn hàng thất bại",
            move |scope| async move { api::delete(&client, &scope, &order.id).await },
            move |_| reload(),
        );
    };

    view! {
        <PageFrame page_id="a004_order--list" category=PAGE_CAT_LIST>
            <PageHeader title="Đơn hàng">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                    {icon("plus")}
                    " Tạo đơn hàng"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 320px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Tìm kiếm:"</Label>
                                <Input value=search placeholder="Mã đơn hoặc tên khách hàng..." />
                            </Flex>
                        </div>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Trạng thái:"</Label>
                            <Select value=status>
                                <option value="all">"Tất cả"</option>
                                {OrderStatus::ALL.into_iter().map(|s| view! {
                                    <option value=s.as_str()>{s.label()}</option>
                                }).collect_view()}
                            </Select>
                        </Flex>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| reload()
                            disabled=Signal::derive(move || controller.is_loading())
                        >
                            " Tìm"
                        </Button>
                    </Flex>
                </div>

                <ListStatus
                    state=Signal::derive(move || controller.view())
                    error=Signal::derive(move || controller.error())
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%; min-width: 1000px;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell resizable=false min_width=120.0>"Mã đơn"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=180.0>"Khách hàng"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=130.0>"Tổng tiền"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=130.0>"Trạng thái"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=150.0>"Ngày tạo"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=170.0>"Chuyển trạng thái"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=90.0>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || controller.items().into_iter().map(|o| {
                                    let for_view = o.clone();
                                    let for_status = o.clone();
                                    let for_delete = o.clone();
                                    let current = o.status;
                                    let OrderCells { code, customer, total, created } = OrderCells::of(&o);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <a href="#" class="table__link" on:click=move |ev| {
                                                        ev.prevent_default();
                                                        dialog.set(Some(Dialog::View(for_view.clone())));
                                                    }>
                                                        {code}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout truncate=true>{customer}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{total}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge label=current.label() color=order_status_color(current) />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{created}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <select
                                                        class="form__input form__input--small"
                                                        disabled=current.is_final()
                                                        on:change=move |ev| {
                                                            let next = OrderStatus::from_str_value(&event_target_value(&ev));
                                                            change_status(for_status.clone(), next);
                                                        }
                                                    >
                                                        {OrderStatus::ALL.into_iter().map(|s| view! {
                                                            <option value=s.as_str() selected=s == current>{s.label()}</option>
                                                        }).collect_view()}
                                                    </select>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <button class="button button--icon" title="Xóa"
                                                        on:click=move |_| remove(for_delete.clone())>
                                                        {icon("trash")}
                                                    </button>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    </div>
                </ListStatus>
            </div>

            {move || dialog.get().map(|d| {
                let close = Callback::new(move |_| dialog.set(None));
                match d {
                    Dialog::Create => view! {
                        <Modal title="Tạo đơn hàng" on_close=close>
                            <OrderCreate
                                products=Signal::derive(move || products.items())
                                customers=Signal::derive(move || customers.items())
                                on_submit=create
                                on_cancel=close
                            />
                        </Modal>
                    }
                    .into_any(),
                    Dialog::View(order) => {
                        let title = format!("Đơn hàng {}", order.display_code());
                        view! {
                            <Modal title=title on_close=close>
                                <OrderView order=order />
                            </Modal>
                        }
                        .into_any()
                    }
                }
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_order::aggregate::WALK_IN_CUSTOMER;

    #[test]
    fn test_row_cells_do_not_borrow_the_order() {
        let order: Order = serde_json::from_str(
            r#"{"id":7,"orderNumber":"DH-007","total":1500000,"status":"pending"}"#,
        )
        .unwrap();
        let cells = OrderCells::of(&order);
        drop(order);
        assert_eq!(cells.code, "DH-007");
        assert_eq!(cells.customer, WALK_IN_CUSTOMER);
        assert_eq!(cells.total, format_vnd(1_500_000.0));
        assert_eq!(cells.created, format_datetime_opt(&None));
    }
}

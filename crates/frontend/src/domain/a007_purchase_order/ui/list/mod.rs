use crate::domain::a001_product::api as product_api;
use crate::domain::a007_purchase_order::api;
use crate::domain::a007_purchase_order::ui::details::{PurchaseOrderCreate, PurchaseOrderView};
use crate::shared::alert::confirm;
use crate::shared::components::list_status::ListStatus;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::{purchase_status_color, StatusBadge};
use crate::shared::date_utils::{format_date, format_datetime_opt};
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::modal::Modal;
use crate::shared::number_format::format_vnd;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::AuthSession;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a007_purchase_order::aggregate::{
    CreatePurchaseOrderDto, PurchaseOrder, PurchaseOrderStatus,
};
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, PartialEq)]
enum Dialog {
    Create,
    View(PurchaseOrder),
}

/// Status moves offered for a purchase order, with button captions
fn next_steps(status: PurchaseOrderStatus) -> &'static [(PurchaseOrderStatus, &'static str)] {
    match status {
        PurchaseOrderStatus::Draft => &[
            (PurchaseOrderStatus::Ordered, "Đặt hàng"),
            (PurchaseOrderStatus::Cancelled, "Hủy"),
        ],
        PurchaseOrderStatus::Ordered => &[
            (PurchaseOrderStatus::Received, "Nhận hàng"),
            (PurchaseOrderStatus::Cancelled, "Hủy"),
        ],
        _ => &[],
    }
}

#[component]
pub fn PurchaseOrderList(session: AuthSession) -> impl IntoView {
    let controller = ListController::<PurchaseOrder>::new();
    let products = ListController::<Product>::new();
    let status = RwSignal::new("all".to_string());
    let dialog = RwSignal::new(None::<Dialog>);

    let reload = move || {
        let client = session.client();
        let filter = status.get_untracked();
        controller.load(move |scope| async move { api::list(&client, &scope, &filter).await });
    };

    Effect::new(move |_| {
        status.track();
        reload();
    });

    let open_create = move || {
        let client = session.client();
        products.load(move |scope| async move { product_api::list(&client, &scope, "").await });
        dialog.set(Some(Dialog::Create));
    };

    let create = Callback::new(move |dto: CreatePurchaseOrderDto| {
        let client = session.client();
        controller.mutate(
            "Tạo phiếu nhập thất bại",
            move |scope| async move { api::create(&client, &scope, &dto).await },
            move |_| {
                dialog.set(None);
                reload();
            },
        );
    });

    let change_status = move |order: PurchaseOrder, next: PurchaseOrderStatus| {
        if next == PurchaseOrderStatus::Cancelled
            && !confirm(&format!("Hủy phiếu nhập {}?", order.display_code()))
        {
            return;
        }
        let client = session.client();
        controller.mutate(
            "Cập nhật trạng thái thất bại",
            move |scope| async move { api::update_status(&client, &scope, &order.id, next).await },
            move |_| reload(),
        );
    };

    let remove = move |order: PurchaseOrder| {
        if !confirm(&format!("Xóa phiếu nhập {}?", order.display_code())) {
            return;
        }
        let client = session.client();
        controller.mutate(
            "Xóa phiếu nhập thất bại",
            move |scope| async move { api::delete(&client, &scope, &order.id).await },
            move |_| reload(),
        );
    };

    view! {
        <PageFrame page_id="a007_purchase_order--list" category=PAGE_CAT_LIST>
            <PageHeader title="Nhập hàng">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                    {icon("plus")}
                    " Tạo phiếu nhập"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Trạng thái:"</Label>
                            <Select value=status>
                                <option value="all">"Tất cả"</option>
                                {PurchaseOrderStatus::ALL.into_iter().map(|s| view! {
                                    <option value=s.as_str()>{s.label()}</option>
                                }).collect_view()}
                            </Select>
                        </Flex>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| reload()
                            disabled=Signal::derive(move || controller.is_loading())
                        >
                            {icon("refresh")}
                            " Làm mới"
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
                                    <TableHeaderCell resizable=false min_width=120.0>"Mã phiếu"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=200.0>"Nhà cung cấp"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=130.0>"Tổng tiền"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=130.0>"Trạng thái"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=120.0>"Dự kiến nhận"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=150.0>"Ngày tạo"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=200.0>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || controller.items().into_iter().map(|po| {
                                    let for_view = po.clone();
                                    let for_delete = po.clone();
                                    let current = po.status;
                                    let code = po.display_code();
                                    let supplier = po.supplier_name.clone();
                                    let total = format_vnd(po.total_amount);
                                    let created = format_datetime_opt(&po.created_at);
                                    let expected = po.expected_date.as_deref().map(format_date).unwrap_or_else(|| "-".to_string());
                                    let steps = next_steps(current).iter().map(|&(next, caption)| {
                                        let target = po.clone();
                                        view! {
                                            <button class="button button--small" on:click=move |_| change_status(target.clone(), next)>
                                                {caption}
                                            </button>
                                        }
                                    }).collect_view();
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
                                            <TableCell><TableCellLayout truncate=true>{supplier}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{total}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <StatusBadge label=current.label() color=purchase_status_color(current) />
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{expected}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{created}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="table__actions">
                                                        {steps}
                                                        <button class="button button--icon" title="Xóa"
                                                            on:click=move |_| remove(for_delete.clone())>
                                                            {icon("trash")}
                                                        </button>
                                                    </div>
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
                        <Modal title="Tạo phiếu nhập" on_close=close>
                            <PurchaseOrderCreate
                                products=Signal::derive(move || products.items())
                                on_submit=create
                                on_cancel=close
                            />
                        </Modal>
                    }
                    .into_any(),
                    Dialog::View(order) => {
                        let title = format!("Phiếu nhập {}", order.display_code());
                        view! {
                            <Modal title=title on_close=close>
                                <PurchaseOrderView order=order />
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

    #[test]
    fn test_final_states_offer_no_steps() {
        assert!(next_steps(PurchaseOrderStatus::Received).is_empty());
        assert!(next_steps(PurchaseOrderStatus::Cancelled).is_empty());
        assert!(next_steps(PurchaseOrderStatus::Unknown).is_empty());
    }

    #[test]
    fn test_draft_can_be_ordered_or_cancelled() {
        let targets: Vec<_> = next_steps(PurchaseOrderStatus::Draft).iter().map(|s| s.0).collect();
        assert_eq!(targets, vec![PurchaseOrderStatus::Ordered, PurchaseOrderStatus::Cancelled]);
        assert_eq!(next_steps(PurchaseOrderStatus::Ordered)[0].0, PurchaseOrderStatus::Received);
    }
}

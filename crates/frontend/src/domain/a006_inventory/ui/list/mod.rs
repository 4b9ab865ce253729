use crate::domain::a001_product::api as product_api;
use crate::domain::a006_inventory::api;
use crate::domain::a006_inventory::ui::details::TransactionCreate;
use crate::shared::components::list_status::ListStatus;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::modal::Modal;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::AuthSession;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a006_inventory::aggregate::{
    CreateInventoryTransactionDto, InventoryTransaction, TransactionKind,
};
use leptos::prelude::*;
use thaw::*;

fn kind_color(kind: TransactionKind) -> BadgeColor {
    match kind {
        TransactionKind::Import => BadgeColor::Success,
        TransactionKind::Export => BadgeColor::Warning,
        TransactionKind::Adjustment => BadgeColor::Informative,
        TransactionKind::Unknown => BadgeColor::Subtle,
    }
}

/// Signed quantity as it affects stock
fn quantity_text(t: &InventoryTransaction) -> String {
    match t.kind {
        TransactionKind::Import => format!("+{}", t.quantity),
        TransactionKind::Export => format!("-{}", t.quantity.abs()),
        _ if t.quantity > 0 => format!("+{}", t.quantity),
        _ => t.quantity.to_string(),
    }
}

#[component]
pub fn InventoryList(session: AuthSession) -> impl IntoView {
    let controller = ListController::<InventoryTransaction>::new();
    let products = ListController::<Product>::new();
    let creating = RwSignal::new(false);

    let reload = move || {
        let client = session.client();
        controller.load(move |scope| async move { api::list(&client, &scope).await });
    };
    let reload_products = move || {
        let client = session.client();
        products.load(move |scope| async move { product_api::list(&client, &scope, "").await });
    };
    reload();

    let open_create = move || {
        reload_products();
        creating.set(true);
    };

    let create = Callback::new(move |dto: CreateInventoryTransactionDto| {
        let client = session.client();
        controller.mutate(
            "Tạo giao dịch kho thất bại",
            move |scope| async move { api::create(&client, &scope, &dto).await },
            move |_| {
                creating.set(false);
                reload();
            },
        );
    });

    view! {
        <PageFrame page_id="a006_inventory--list" category=PAGE_CAT_LIST>
            <PageHeader title="Kho hàng">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| reload()>
                    {icon("refresh")}
                    " Làm mới"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                    {icon("plus")}
                    " Tạo phiếu kho"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ListStatus
                    state=Signal::derive(move || controller.view())
                    error=Signal::derive(move || controller.error())
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%; min-width: 900px;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell resizable=false min_width=150.0>"Thời gian"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=200.0>"Sản phẩm"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=110.0>"Loại"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=90.0>"Số lượng"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=200.0>"Ghi chú"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=120.0>"Người tạo"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || controller.items().into_iter().map(|t| {
                                    let created = format_datetime_opt(&t.created_at);
                                    let product = t.product_name.clone().unwrap_or_else(|| format!("#{}", t.product_id));
                                    let kind = t.kind;
                                    let quantity = quantity_text(&t);
                                    let note = t.note.clone().unwrap_or_default();
                                    let author = t.created_by.clone().unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{created}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{product}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge appearance=BadgeAppearance::Tint color=kind_color(kind)>{kind.label()}</Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{quantity}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{note}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{author}</TableCellLayout></TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    </div>
                </ListStatus>
            </div>

            <Show when=move || creating.get()>
                <Modal title="Tạo phiếu kho" on_close=Callback::new(move |_| creating.set(false))>
                    <TransactionCreate
                        products=Signal::derive(move || products.items())
                        on_submit=create
                        on_cancel=Callback::new(move |_| creating.set(false))
                    />
                </Modal>
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_sign_follows_kind() {
        let mut t: InventoryTransaction =
            serde_json::from_str(r#"{"id":1,"product_id":2,"type":"export","quantity":3}"#).unwrap();
        assert_eq!(quantity_text(&t), "-3");
        t.kind = TransactionKind::Import;
        assert_eq!(quantity_text(&t), "+3");
        t.kind = TransactionKind::Adjustment;
        t.quantity = -2;
        assert_eq!(quantity_text(&t), "-2");
    }
}

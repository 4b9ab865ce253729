use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::details::ProductDetails;
use crate::domain::a002_category::api as category_api;
use crate::shared::alert::confirm;
use crate::shared::components::list_status::ListStatus;
use crate::shared::components::page_header::PageHeader;
use crate::shared::form::FormMode;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::modal::Modal;
use crate::shared::number_format::{format_number_int, format_vnd};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::AuthSession;
use contracts::domain::a001_product::aggregate::{Product, ProductDto};
use contracts::domain::a002_category::aggregate::Category;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProductList(session: AuthSession) -> impl IntoView {
    let controller = ListController::<Product>::new();
    let categories = ListController::<Category>::new();
    let search = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<FormMode<Product>>);

    let reload = move || {
        let client = session.client();
        let text = search.get_untracked();
        controller.load(move |scope| async move { api::list(&client, &scope, &text).await });
    };

    let client = session.client();
    categories.load(move |scope| async move { category_api::list(&client, &scope).await });
    reload();

    let save = Callback::new(move |dto: ProductDto| {
        let client = session.client();
        let target = editing.get_untracked().and_then(|m| m.record().map(|p| p.id.clone()));
        controller.mutate(
            "Lưu sản phẩm thất bại",
            move |scope| async move {
                match target {
                    Some(id) => api::update(&client, &scope, &id, &dto).await,
                    None => api::create(&client, &scope, &dto).await,
                }
            },
            move |_| {
                editing.set(None);
                reload();
            },
        );
    });

    let remove = move |product: Product| {
        if !confirm(&format!("Xóa sản phẩm \"{}\"?", product.name)) {
            return;
        }
        let client = session.client();
        controller.mutate(
            "Xóa sản phẩm thất bại",
            move |scope| async move { api::delete(&client, &scope, &product.id).await },
            move |_| reload(),
        );
    };

    let category_name = move |p: &Product| {
        p.category_name.clone().or_else(|| {
            let id = p.category_id.as_ref()?;
            categories
                .state
                .with(|s| s.items.iter().find(|c| &c.id == id).map(|c| c.name.clone()))
        })
    };

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Sản phẩm"
                subtitle=Signal::derive(move || Some(format!("{} sản phẩm", controller.state.with(|s| s.items.len()))))
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| editing.set(Some(FormMode::Create))
                >
                    {icon("plus")}
                    " Thêm sản phẩm"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 360px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Tìm kiếm:"</Label>
                                <Input value=search placeholder="Tên hoặc mã SKU..." />
                            </Flex>
                        </div>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| reload()
                            disabled=Signal::derive(move || controller.is_loading())
                        >
                            {icon("refresh")}
                            " Tìm"
                        </Button>
                    </Flex>
                </div>

                <ListStatus
                    state=Signal::derive(move || controller.view())
                    error=Signal::derive(move || controller.error())
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%; min-width: 900px;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell resizable=false min_width=220.0>"Tên sản phẩm"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=110.0>"SKU"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=150.0>"Danh mục"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=120.0>"Giá bán"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=90.0>"Tồn kho"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=110.0>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || controller.items().into_iter().map(|p| {
                                    let low = p.is_low_stock();
                                    let category = category_name(&p).unwrap_or_else(|| "-".to_string());
                                    let name = p.name.clone();
                                    let sku = p.sku.clone().unwrap_or_else(|| "-".to_string());
                                    let price = format_vnd(p.price);
                                    let stock = format_number_int(p.stock as f64);
                                    let for_edit = p.clone();
                                    let for_delete = p;
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout truncate=true>{name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{sku}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{category}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{price}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=if low { "text-warning" } else { "" }>
                                                        {stock}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <button class="button button--icon" title="Sửa"
                                                        on:click=move |_| editing.set(Some(FormMode::Edit(for_edit.clone())))>
                                                        {icon("edit")}
                                                    </button>
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

            {move || editing.get().map(|mode| {
                let title = if mode.is_edit() { "Sửa sản phẩm" } else { "Thêm sản phẩm" };
                view! {
                    <Modal title=title on_close=Callback::new(move |_| editing.set(None))>
                        <ProductDetails
                            initial=mode.record().cloned()
                            categories=Signal::derive(move || categories.items())
                            on_submit=save
                            on_cancel=Callback::new(move |_| editing.set(None))
                        />
                    </Modal>
                }
            })}
        </PageFrame>
    }
}

use crate::domain::a002_category::api;
use crate::domain::a002_category::ui::details::CategoryDetails;
use crate::shared::alert::confirm;
use crate::shared::components::list_status::ListStatus;
use crate::shared::components::page_header::PageHeader;
use crate::shared::form::FormMode;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::modal::Modal;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::AuthSession;
use contracts::domain::a002_category::aggregate::{Category, CategoryDto};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CategoryList(session: AuthSession) -> impl IntoView {
    let controller = ListController::<Category>::new();
    let editing = RwSignal::new(None::<FormMode<Category>>);

    let reload = move || {
        let client = session.client();
        controller.load(move |scope| async move { api::list(&client, &scope).await });
    };
    reload();

    let save = Callback::new(move |dto: CategoryDto| {
        let client = session.client();
        let target = editing.get_untracked().and_then(|m| m.record().map(|c| c.id.clone()));
        controller.mutate(
            "Lưu danh mục thất bại",
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

    let remove = move |category: Category| {
        if !confirm(&format!("Xóa danh mục \"{}\"?", category.name)) {
            return;
        }
        let client = session.client();
        controller.mutate(
            "Xóa danh mục thất bại",
            move |scope| async move { api::delete(&client, &scope, &category.id).await },
            move |_| reload(),
        );
    };

    view! {
        <PageFrame page_id="a002_category--list" category=PAGE_CAT_LIST>
            <PageHeader title="Danh mục">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| reload()>
                    {icon("refresh")}
                    " Làm mới"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| editing.set(Some(FormMode::Create))
                >
                    {icon("plus")}
                    " Thêm danh mục"
                </Button>
            </PageHeader>

            <div class="page__content">
                <ListStatus
                    state=Signal::derive(move || controller.view())
                    error=Signal::derive(move || controller.error())
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell resizable=false min_width=200.0>"Tên danh mục"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=300.0>"Mô tả"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=100.0>"Số sản phẩm"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=110.0>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || controller.items().into_iter().map(|c| {
                                    let name = c.name.clone();
                                    let description = c.description.clone().unwrap_or_default();
                                    let products = c.product_count.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string());
                                    let for_edit = c.clone();
                                    let for_delete = c;
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{description}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{products}</TableCellLayout></TableCell>
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
                let title = if mode.is_edit() { "Sửa danh mục" } else { "Thêm danh mục" };
                view! {
                    <Modal title=title on_close=Callback::new(move |_| editing.set(None))>
                        <CategoryDetails
                            initial=mode.record().cloned()
                            on_submit=save
                            on_cancel=Callback::new(move |_| editing.set(None))
                        />
                    </Modal>
                }
            })}
        </PageFrame>
    }
}

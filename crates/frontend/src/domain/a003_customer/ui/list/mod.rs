use crate::domain::a003_customer::api;
use crate::domain::a003_customer::ui::details::CustomerDetails;
use crate::shared::alert::confirm;
use crate::shared::components::list_status::ListStatus;
use crate::shared::components::page_header::PageHeader;
use crate::shared::form::FormMode;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::modal::Modal;
use crate::shared::number_format::format_vnd;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::AuthSession;
use contracts::domain::a003_customer::aggregate::{Customer, CustomerDto};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CustomerList(session: AuthSession) -> impl IntoView {
    let controller = ListController::<Customer>::new();
    let search = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<FormMode<Customer>>);

    let reload = move || {
        let client = session.client();
        let text = search.get_untracked();
        controller.load(move |scope| async move { api::list(&client, &scope, &text).await });
    };
    reload();

    let save = Callback::new(move |dto: CustomerDto| {
        let client = session.client();
        let target = editing.get_untracked().and_then(|m| m.record().map(|c| c.id.clone()));
        controller.mutate(
            "Lưu khách hàng thất bại",
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

    let remove = move |customer: Customer| {
        if !confirm(&format!("Xóa khách hàng \"{}\"?", customer.name)) {
            return;
        }
        let client = session.client();
        controller.mutate(
            "Xóa khách hàng thất bại",
            move |scope| async move { api::delete(&client, &scope, &customer.id).await },
            move |_| reload(),
        );
    };

    view! {
        <PageFrame page_id="a003_customer--list" category=PAGE_CAT_LIST>
            <PageHeader title="Khách hàng">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| editing.set(Some(FormMode::Create))
                >
                    {icon("plus")}
                    " Thêm khách hàng"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="flex: 1; max-width: 360px;">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Tìm kiếm:"</Label>
                                <Input value=search placeholder="Tên, số điện thoại hoặc email..." />
                            </Flex>
                        </div>
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
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell resizable=false min_width=200.0>"Tên khách hàng"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=130.0>"Điện thoại"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=180.0>"Email"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=90.0>"Số đơn"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=140.0>"Tổng chi tiêu"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=110.0>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || controller.items().into_iter().map(|c| {
                                    let name = c.name.clone();
                                    let phone = c.phone.clone().unwrap_or_else(|| "-".to_string());
                                    let email = c.email.clone().unwrap_or_else(|| "-".to_string());
                                    let orders = c.order_count;
                                    let spent = format_vnd(c.total_spent);
                                    let for_edit = c.clone();
                                    let for_delete = c;
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{phone}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{email}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{orders}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{spent}</TableCellLayout></TableCell>
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
                let title = if mode.is_edit() { "Sửa khách hàng" } else { "Thêm khách hàng" };
                view! {
                    <Modal title=title on_close=Callback::new(move |_| editing.set(None))>
                        <CustomerDetails
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

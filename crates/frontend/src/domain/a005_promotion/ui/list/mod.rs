use crate::domain::a005_promotion::api::{self, STATUS_FILTERS};
use crate::domain::a005_promotion::ui::details::PromotionDetails;
use crate::shared::alert::confirm;
use crate::shared::components::list_status::ListStatus;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_date;
use crate::shared::form::FormMode;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::modal::Modal;
use crate::shared::number_format::{format_number_int, format_vnd};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::system::auth::AuthSession;
use contracts::domain::a005_promotion::aggregate::{DiscountType, Promotion, PromotionDto};
use leptos::prelude::*;
use thaw::*;

fn discount_text(p: &Promotion) -> String {
    match p.discount_type {
        DiscountType::Percent => format!("{}%", format_number_int(p.discount_value)),
        DiscountType::Fixed => format_vnd(p.discount_value),
    }
}

fn period_text(p: &Promotion) -> String {
    let from = p.start_date.as_deref().map(format_date).unwrap_or_else(|| "...".to_string());
    let to = p.end_date.as_deref().map(format_date).unwrap_or_else(|| "...".to_string());
    format!("{} - {}", from, to)
}

#[component]
pub fn PromotionList(session: AuthSession) -> impl IntoView {
    let controller = ListController::<Promotion>::new();
    let status = RwSignal::new("all".to_string());
    let editing = RwSignal::new(None::<FormMode<Promotion>>);

    let reload = move || {
        let client = session.client();
        let filter = status.get_untracked();
        controller.load(move |scope| async move { api::list(&client, &scope, &filter).await });
    };

    // initial load and every filter change
    Effect::new(move |_| {
        status.track();
        reload();
    });

    let save = Callback::new(move |dto: PromotionDto| {
        let client = session.client();
        let target = editing.get_untracked().and_then(|m| m.record().map(|p| p.id.clone()));
        controller.mutate(
            "Lưu khuyến mãi thất bại",
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

    let remove = move |promotion: Promotion| {
        if !confirm(&format!("Xóa chương trình \"{}\"?", promotion.name)) {
            return;
        }
        let client = session.client();
        controller.mutate(
            "Xóa khuyến mãi thất bại",
            move |scope| async move { api::delete(&client, &scope, &promotion.id).await },
            move |_| reload(),
        );
    };

    view! {
        <PageFrame page_id="a005_promotion--list" category=PAGE_CAT_LIST>
            <PageHeader title="Khuyến mãi">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| editing.set(Some(FormMode::Create))
                >
                    {icon("plus")}
                    " Thêm khuyến mãi"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Trạng thái:"</Label>
                            <Select value=status>
                                {STATUS_FILTERS.into_iter().map(|(value, label)| view! {
                                    <option value=value>{label}</option>
                                }).collect_view()}
                            </Select>
                        </Flex>
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
                                    <TableHeaderCell resizable=false min_width=110.0>"Mã"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=200.0>"Chương trình"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=110.0>"Giảm"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=190.0>"Thời gian"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=80.0>"Lượt dùng"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=120.0>"Trạng thái"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=110.0>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || controller.items().into_iter().map(|p| {
                                    let discount = discount_text(&p);
                                    let period = period_text(&p);
                                    let active = p.is_active;
                                    let code = p.code.clone();
                                    let name = p.name.clone();
                                    let usage = p.usage_count;
                                    let for_edit = p.clone();
                                    let for_delete = p;
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout><code>{code}</code></TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{name}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{discount}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{period}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{usage}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if active {
                                                        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Đang áp dụng"</Badge> }.into_any()
                                                    } else {
                                                        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>"Ngừng"</Badge> }.into_any()
                                                    }}
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
                let title = if mode.is_edit() { "Sửa khuyến mãi" } else { "Thêm khuyến mãi" };
                view! {
                    <Modal title=title on_close=Callback::new(move |_| editing.set(None))>
                        <PromotionDetails
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_and_period_text() {
        let p: Promotion = serde_json::from_str(
            r#"{"id":1,"code":"HE","name":"Hè","discount_type":"fixed","discount_value":50000,"start_date":"2025-06-01"}"#,
        )
        .unwrap();
        assert_eq!(discount_text(&p), "50.000 ₫");
        assert_eq!(period_text(&p), "01/06/2025 - ...");
    }
}

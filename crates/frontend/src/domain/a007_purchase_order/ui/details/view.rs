use super::draft::{PurchaseDraft, PurchaseDraftLine};
use crate::shared::components::form_field::{FormActions, FormError, FormField, FormTextarea};
use crate::shared::components::status_badge::{purchase_status_color, StatusBadge};
use crate::shared::date_utils::{format_date, format_datetime_opt};
use crate::shared::icons::icon;
use crate::shared::number_format::format_vnd;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a007_purchase_order::aggregate::{CreatePurchaseOrderDto, PurchaseOrder};
use leptos::prelude::*;

#[component]
pub fn PurchaseOrderCreate(
    #[prop(into)] products: Signal<Vec<Product>>,
    on_submit: Callback<CreatePurchaseOrderDto>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = PurchaseDraft::default();
    let supplier_name = RwSignal::new(draft.supplier_name);
    let expected_date = RwSignal::new(draft.expected_date);
    let note = RwSignal::new(draft.note);
    let lines = RwSignal::new(draft.lines);
    let error = RwSignal::new(None::<String>);

    let current = move || PurchaseDraft {
        supplier_name: supplier_name.get(),
        expected_date: expected_date.get(),
        note: note.get(),
        lines: lines.get(),
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match untrack(current).to_dto() {
            Ok(dto) => {
                error.set(None);
                on_submit.run(dto);
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    let edit_line = move |index: usize, edit: Box<dyn FnOnce(&mut PurchaseDraftLine)>| {
        lines.update(|ls| {
            if let Some(line) = ls.get_mut(index) {
                edit(line);
            }
        });
    };

    view! {
        <form class="form" on:submit=submit>
            <div class="form__row">
                <FormField label="Nhà cung cấp" value=supplier_name required=true />
                <FormField label="Ngày dự kiến nhận" value=expected_date input_type="date" />
            </div>

            <div class="order-lines">
                {move || lines.get().into_iter().enumerate().map(|(index, line)| {
                    let selected = line.product_id.clone();
                    view! {
                        <div class="form__row order-lines__row">
                            <select
                                class="form__input"
                                required
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    edit_line(index, Box::new(move |l| l.product_id = value));
                                }
                            >
                                <option value="" selected=selected.is_empty()>"-- Chọn sản phẩm --"</option>
                                {products.get().into_iter().map(|p| {
                                    let value = p.id.as_string();
                                    let is_selected = value == selected;
                                    view! { <option value=value selected=is_selected>{p.name}</option> }
                                }).collect_view()}
                            </select>
                            <input
                                class="form__input order-lines__qty"
                                type="number"
                                min="1"
                                step="1"
                                required
                                title="Số lượng"
                                prop:value=line.quantity
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    edit_line(index, Box::new(move |l| l.quantity = value));
                                }
                            />
                            <input
                                class="form__input order-lines__cost"
                                type="number"
                                min="0"
                                placeholder="Giá nhập"
                                prop:value=line.unit_cost
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    edit_line(index, Box::new(move |l| l.unit_cost = value));
                                }
                            />
                            <button
                                type="button"
                                class="button button--icon"
                                title="Bỏ dòng"
                                disabled=move || lines.with(|ls| ls.len() <= 1)
                                on:click=move |_| lines.update(|ls| {
                                    if ls.len() > 1 && index < ls.len() {
                                        ls.remove(index);
                                    }
                                })
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }).collect_view()}
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| lines.update(|ls| ls.push(PurchaseDraftLine::default()))
                >
                    {icon("plus")}
                    " Thêm dòng"
                </button>
            </div>

            <FormTextarea label="Ghi chú" value=note />
            <div class="order-lines__total">
                "Tổng giá trị: "
                <strong>{move || format_vnd(current().preview_total())}</strong>
            </div>
            <FormError error=error />
            <FormActions on_cancel=on_cancel />
        </form>
    }
}

#[component]
pub fn PurchaseOrderView(order: PurchaseOrder) -> impl IntoView {
    let expected = order
        .expected_date
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| "-".to_string());
    let lines = order.items.clone();
    view! {
        <div class="order-view">
            <div class="order-view__meta">
                <div>"Mã phiếu: " <strong>{order.display_code()}</strong></div>
                <div>"Nhà cung cấp: " {order.supplier_name.clone()}</div>
                <div>"Ngày tạo: " {format_datetime_opt(&order.created_at)}</div>
                <div>"Dự kiến nhận: " {expected}</div>
                <div>"Trạng thái: " <StatusBadge label=order.status.label() color=purchase_status_color(order.status) /></div>
            </div>
            <table class="table__data">
                <thead>
                    <tr>
                        <th>"Sản phẩm"</th>
                        <th>"Số lượng"</th>
                        <th>"Giá nhập"</th>
                        <th>"Thành tiền"</th>
                    </tr>
                </thead>
                <tbody>
                    {lines.into_iter().map(|item| {
                        let name = item.product_name.clone().unwrap_or_else(|| format!("#{}", item.product_id));
                        view! {
                            <tr>
                                <td>{name}</td>
                                <td>{item.quantity}</td>
                                <td>{format_vnd(item.unit_cost)}</td>
                                <td>{format_vnd(item.unit_cost * item.quantity as f64)}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
            <div class="order-view__total">"Tổng cộng: " <strong>{format_vnd(order.total_amount)}</strong></div>
        </div>
    }
}

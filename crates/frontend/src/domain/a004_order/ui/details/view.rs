use super::draft::{DraftLine, OrderDraft, PAYMENT_METHODS};
use crate::shared::components::form_field::{FormActions, FormError, FormTextarea};
use crate::shared::components::status_badge::{order_status_color, StatusBadge};
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::icons::icon;
use crate::shared::number_format::format_vnd;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a003_customer::aggregate::Customer;
use contracts::domain::a004_order::aggregate::{CreateOrderDto, Order};
use leptos::prelude::*;

#[component]
pub fn OrderCreate(
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(into)] customers: Signal<Vec<Customer>>,
    on_submit: Callback<CreateOrderDto>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = OrderDraft::default();
    let customer_id = RwSignal::new(draft.customer_id);
    let payment_method = RwSignal::new(draft.payment_method);
    let note = RwSignal::new(draft.note);
    let lines = RwSignal::new(draft.lines);
    let error = RwSignal::new(None::<String>);

    let current = move || OrderDraft {
        customer_id: customer_id.get(),
        payment_method: payment_method.get(),
        note: note.get(),
        lines: lines.get(),
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = untrack(current);
        match products.with_untracked(|p| draft.to_dto(p)) {
            Ok(dto) => {
                error.set(None);
                on_submit.run(dto);
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    let set_line = move |index: usize, edit: Box<dyn FnOnce(&mut DraftLine)>| {
        lines.update(|ls| {
            if let Some(line) = ls.get_mut(index) {
                edit(line);
            }
        });
    };

    view! {
        <form class="form" on:submit=submit>
            <div class="form__row">
                <label class="form__field">
                    <span class="form__label">"Khách hàng"</span>
                    <select class="form__input" on:change=move |ev| customer_id.set(event_target_value(&ev))>
                        <option value="">"Khách vãng lai"</option>
                        {move || customers.get().into_iter().map(|c| view! {
                            <option value=c.id.as_string()>{c.name}</option>
                        }).collect_view()}
                    </select>
                </label>
                <label class="form__field">
                    <span class="form__label">"Thanh toán"</span>
                    <select class="form__input" on:change=move |ev| payment_method.set(event_target_value(&ev))>
                        {PAYMENT_METHODS.into_iter().map(|(value, label)| view! {
                            <option value=value selected=move || payment_method.get() == value>{label}</option>
                        }).collect_view()}
                    </select>
                </label>
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
                                    set_line(index, Box::new(move |l| l.product_id = value));
                                }
                            >
                                <option value="" selected=selected.is_empty()>"-- Chọn sản phẩm --"</option>
                                {products.get().into_iter().map(|p| {
                                    let value = p.id.as_string();
                                    let is_selected = value == selected;
                                    view! {
                                        <option value=value selected=is_selected>
                                            {format!("{} ({})", p.name, format_vnd(p.price))}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                            <input
                                class="form__input order-lines__qty"
                                type="number"
                                min="1"
                                step="1"
                                required
                                prop:value=line.quantity
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_line(index, Box::new(move |l| l.quantity = value));
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
                    on:click=move |_| lines.update(|ls| ls.push(DraftLine {
                        product_id: String::new(),
                        quantity: "1".to_string(),
                    }))
                >
                    {icon("plus")}
                    " Thêm dòng"
                </button>
            </div>

            <FormTextarea label="Ghi chú" value=note />
            <div class="order-lines__total">
                "Tạm tính: "
                <strong>{move || products.with(|p| format_vnd(current().preview_total(p)))}</strong>
            </div>
            <FormError error=error />
            <FormActions on_cancel=on_cancel />
        </form>
    }
}

/// Read-only order detail with its lines
#[component]
pub fn OrderView(order: Order) -> impl IntoView {
    let lines = order.items.clone();
    view! {
        <div class="order-view">
            <div class="order-view__meta">
                <div>"Mã đơn: " <strong>{order.display_code()}</strong></div>
                <div>"Khách hàng: " {order.customer_display().to_string()}</div>
                <div>"Ngày tạo: " {format_datetime_opt(&order.created_at)}</div>
                <div>"Trạng thái: " <StatusBadge label=order.status.label() color=order_status_color(order.status) /></div>
            </div>
            <table class="table__data">
                <thead>
                    <tr>
                        <th>"Sản phẩm"</th>
                        <th>"Số lượng"</th>
                        <th>"Đơn giá"</th>
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
                                <td>{format_vnd(item.price)}</td>
                                <td>{format_vnd(item.price * item.quantity as f64)}</td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
            <div class="order-view__total">"Tổng cộng: " <strong>{format_vnd(order.total_amount)}</strong></div>
        </div>
    }
}

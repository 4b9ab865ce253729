use crate::shared::components::form_field::{FormActions, FormError, FormField, FormTextarea};
use crate::shared::form::{optional, parse_positive, parse_quantity};
use contracts::common::EntityId;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a006_inventory::aggregate::{CreateInventoryTransactionDto, TransactionKind};
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    pub product_id: String,
    pub kind: String,
    pub quantity: String,
    pub note: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            product_id: String::new(),
            kind: TransactionKind::Import.as_str().to_string(),
            quantity: String::new(),
            note: String::new(),
        }
    }
}

impl TransactionForm {
    /// Import/export take a positive amount; an adjustment may be negative but not zero
    pub fn to_dto(&self, products: &[Product]) -> Result<CreateInventoryTransactionDto, String> {
        let product_id = EntityId::parse(&self.product_id)
            .ok_or_else(|| "Vui lòng chọn sản phẩm.".to_string())?;
        let kind = TransactionKind::from_str_value(&self.kind);
        let quantity = match kind {
            TransactionKind::Import | TransactionKind::Export => {
                parse_positive("Số lượng", &self.quantity)?
            }
            TransactionKind::Adjustment => match parse_quantity("Số lượng", &self.quantity, true)? {
                0 => return Err("Số lượng điều chỉnh phải khác 0.".to_string()),
                n => n,
            },
            TransactionKind::Unknown => return Err("Loại giao dịch không hợp lệ.".to_string()),
        };

        if kind == TransactionKind::Export {
            if let Some(p) = products.iter().find(|p| p.id == product_id) {
                if quantity > p.stock {
                    return Err(format!("\"{}\" chỉ còn {} trong kho.", p.name, p.stock));
                }
            }
        }

        Ok(CreateInventoryTransactionDto {
            product_id,
            kind,
            quantity,
            note: optional(&self.note),
        })
    }
}

#[component]
pub fn TransactionCreate(
    #[prop(into)] products: Signal<Vec<Product>>,
    on_submit: Callback<CreateInventoryTransactionDto>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = TransactionForm::default();
    let product_id = RwSignal::new(form.product_id);
    let kind = RwSignal::new(form.kind);
    let quantity = RwSignal::new(form.quantity);
    let note = RwSignal::new(form.note);
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = TransactionForm {
            product_id: product_id.get_untracked(),
            kind: kind.get_untracked(),
            quantity: quantity.get_untracked(),
            note: note.get_untracked(),
        };
        match products.with_untracked(|p| form.to_dto(p)) {
            Ok(dto) => {
                error.set(None);
                on_submit.run(dto);
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    view! {
        <form class="form" on:submit=submit>
            <label class="form__field">
                <span class="form__label">"Sản phẩm *"</span>
                <select class="form__input" required on:change=move |ev| product_id.set(event_target_value(&ev))>
                    <option value="">"-- Chọn sản phẩm --"</option>
                    {move || products.get().into_iter().map(|p| view! {
                        <option value=p.id.as_string()>{format!("{} (tồn: {})", p.name, p.stock)}</option>
                    }).collect_view()}
                </select>
            </label>
            <div class="form__row">
                <label class="form__field">
                    <span class="form__label">"Loại giao dịch"</span>
                    <select class="form__input" on:change=move |ev| kind.set(event_target_value(&ev))>
                        {TransactionKind::ALL.into_iter().map(|k| view! {
                            <option value=k.as_str() selected=move || kind.get() == k.as_str()>{k.label()}</option>
                        }).collect_view()}
                    </select>
                </label>
                <FormField label="Số lượng" value=quantity input_type="number" required=true step="1" />
            </div>
            <FormTextarea label="Ghi chú" value=note />
            <FormError error=error />
            <FormActions on_cancel=on_cancel />
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products() -> Vec<Product> {
        serde_json::from_str(r#"[{"id":5,"name":"Sữa tươi","price":30000,"stock":4}]"#).unwrap()
    }

    fn form(kind: TransactionKind, quantity: &str) -> TransactionForm {
        TransactionForm {
            product_id: "5".into(),
            kind: kind.as_str().into(),
            quantity: quantity.into(),
            note: String::new(),
        }
    }

    #[test]
    fn test_import_requires_positive_quantity() {
        assert_eq!(form(TransactionKind::Import, "10").to_dto(&products()).unwrap().quantity, 10);
        assert!(form(TransactionKind::Import, "-2").to_dto(&products()).is_err());
    }

    #[test]
    fn test_export_limited_by_stock() {
        assert!(form(TransactionKind::Export, "4").to_dto(&products()).is_ok());
        assert!(form(TransactionKind::Export, "5").to_dto(&products()).is_err());
    }

    #[test]
    fn test_adjustment_may_be_negative() {
        let dto = form(TransactionKind::Adjustment, "-3").to_dto(&products()).unwrap();
        assert_eq!(dto.kind, TransactionKind::Adjustment);
        assert_eq!(dto.quantity, -3);
        assert!(form(TransactionKind::Adjustment, "0").to_dto(&products()).is_err());
    }

    #[test]
    fn test_product_required() {
        let mut f = form(TransactionKind::Import, "1");
        f.product_id = String::new();
        assert!(f.to_dto(&products()).is_err());
    }
}

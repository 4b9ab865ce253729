use crate::shared::components::form_field::{FormActions, FormError, FormField};
use crate::shared::form::{optional, parse_amount, required};
use contracts::domain::a005_promotion::aggregate::{DiscountType, Promotion, PromotionDto};
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct PromotionForm {
    pub code: String,
    pub name: String,
    pub discount_type: String,
    pub discount_value: String,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
}

impl Default for PromotionForm {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            discount_type: DiscountType::Percent.as_str().to_string(),
            discount_value: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            is_active: true,
        }
    }
}

/// `<input type="date">` wants `YYYY-MM-DD`
fn date_input_value(value: &Option<String>) -> String {
    value
        .as_deref()
        .map(|v| v.split('T').next().unwrap_or(v).to_string())
        .unwrap_or_default()
}

impl PromotionForm {
    pub fn from_promotion(p: &Promotion) -> Self {
        Self {
            code: p.code.clone(),
            name: p.name.clone(),
            discount_type: p.discount_type.as_str().to_string(),
            discount_value: p.discount_value.to_string(),
            start_date: date_input_value(&p.start_date),
            end_date: date_input_value(&p.end_date),
            is_active: p.is_active,
        }
    }

    pub fn to_dto(&self) -> Result<PromotionDto, String> {
        let discount_type = DiscountType::from_str_value(&self.discount_type);
        let discount_value = parse_amount("Giá trị giảm", &self.discount_value)?;
        if discount_type == DiscountType::Percent && discount_value > 100.0 {
            return Err("Giảm theo phần trăm không được vượt quá 100%.".to_string());
        }
        let start_date = optional(&self.start_date);
        let end_date = optional(&self.end_date);
        // ISO dates compare correctly as strings
        if let (Some(start), Some(end)) = (&start_date, &end_date) {
            if end < start {
                return Err("Ngày kết thúc phải sau ngày bắt đầu.".to_string());
            }
        }
        Ok(PromotionDto {
            code: required("Mã khuyến mãi", &self.code)?.to_uppercase(),
            name: required("Tên chương trình", &self.name)?,
            discount_type,
            discount_value,
            start_date,
            end_date,
            is_active: self.is_active,
        })
    }
}

#[component]
pub fn PromotionDetails(
    initial: Option<Promotion>,
    on_submit: Callback<PromotionDto>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = initial
        .as_ref()
        .map(PromotionForm::from_promotion)
        .unwrap_or_default();
    let code = RwSignal::new(form.code);
    let name = RwSignal::new(form.name);
    let discount_type = RwSignal::new(form.discount_type);
    let discount_value = RwSignal::new(form.discount_value);
    let start_date = RwSignal::new(form.start_date);
    let end_date = RwSignal::new(form.end_date);
    let is_active = RwSignal::new(form.is_active);
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = PromotionForm {
            code: code.get_untracked(),
            name: name.get_untracked(),
            discount_type: discount_type.get_untracked(),
            discount_value: discount_value.get_untracked(),
            start_date: start_date.get_untracked(),
            end_date: end_date.get_untracked(),
            is_active: is_active.get_untracked(),
        };
        match form.to_dto() {
            Ok(dto) => {
                error.set(None);
                on_submit.run(dto);
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    view! {
        <form class="form" on:submit=submit>
            <div class="form__row">
                <FormField label="Mã khuyến mãi" value=code required=true />
                <FormField label="Tên chương trình" value=name required=true />
            </div>
            <div class="form__row">
                <label class="form__field">
                    <span class="form__label">"Loại giảm giá"</span>
                    <select
                        class="form__input"
                        on:change=move |ev| discount_type.set(event_target_value(&ev))
                    >
                        <option value="percent" selected=move || discount_type.get() == "percent">"Phần trăm (%)"</option>
                        <option value="fixed" selected=move || discount_type.get() == "fixed">"Số tiền (₫)"</option>
                    </select>
                </label>
                <FormField label="Giá trị giảm" value=discount_value input_type="number" required=true min="0" step="any" />
            </div>
            <div class="form__row">
                <FormField label="Ngày bắt đầu" value=start_date input_type="date" />
                <FormField label="Ngày kết thúc" value=end_date input_type="date" />
            </div>
            <label class="form-check">
                <input
                    type="checkbox"
                    prop:checked=move || is_active.get()
                    on:change=move |ev| is_active.set(event_target_checked(&ev))
                />
                " Đang áp dụng"
            </label>
            <FormError error=error />
            <FormActions on_cancel=on_cancel />
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PromotionForm {
        PromotionForm {
            code: "tet2025".into(),
            name: "Khuyến mãi Tết".into(),
            discount_value: "15".into(),
            start_date: "2025-01-20".into(),
            end_date: "2025-02-05".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form() {
        let dto = form().to_dto().unwrap();
        assert_eq!(dto.code, "TET2025");
        assert_eq!(dto.discount_type, DiscountType::Percent);
        assert_eq!(dto.discount_value, 15.0);
        assert!(dto.is_active);
    }

    #[test]
    fn test_percent_over_hundred_rejected() {
        let mut f = form();
        f.discount_value = "120".into();
        assert!(f.to_dto().is_err());

        f.discount_type = "fixed".into();
        assert_eq!(f.to_dto().unwrap().discount_type, DiscountType::Fixed);
    }

    #[test]
    fn test_end_before_start_rejected() {
        let mut f = form();
        f.end_date = "2025-01-01".into();
        assert!(f.to_dto().is_err());
    }

    #[test]
    fn test_dates_trimmed_for_date_input() {
        let p: Promotion = serde_json::from_str(
            r#"{"id":1,"code":"A","name":"B","startDate":"2025-03-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(PromotionForm::from_promotion(&p).start_date, "2025-03-01");
    }
}

use crate::shared::components::form_field::{FormActions, FormError, FormField, FormTextarea};
use crate::shared::form::{optional, required};
use contracts::domain::a003_customer::aggregate::{Customer, CustomerDto};
use leptos::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl CustomerForm {
    pub fn from_customer(c: &Customer) -> Self {
        Self {
            name: c.name.clone(),
            phone: c.phone.clone().unwrap_or_default(),
            email: c.email.clone().unwrap_or_default(),
            address: c.address.clone().unwrap_or_default(),
        }
    }

    pub fn to_dto(&self) -> Result<CustomerDto, String> {
        let phone = optional(&self.phone);
        if let Some(p) = &phone {
            let digits = p.chars().filter(|c| c.is_ascii_digit()).count();
            if digits < 9 || p.chars().any(|c| !(c.is_ascii_digit() || " +-.()".contains(c))) {
                return Err("Số điện thoại không hợp lệ.".to_string());
            }
        }
        Ok(CustomerDto {
            name: required("Tên khách hàng", &self.name)?,
            phone,
            email: optional(&self.email),
            address: optional(&self.address),
        })
    }
}

#[component]
pub fn CustomerDetails(
    initial: Option<Customer>,
    on_submit: Callback<CustomerDto>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = initial
        .as_ref()
        .map(CustomerForm::from_customer)
        .unwrap_or_default();
    let name = RwSignal::new(form.name);
    let phone = RwSignal::new(form.phone);
    let email = RwSignal::new(form.email);
    let address = RwSignal::new(form.address);
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = CustomerForm {
            name: name.get_untracked(),
            phone: phone.get_untracked(),
            email: email.get_untracked(),
            address: address.get_untracked(),
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
            <FormField label="Tên khách hàng" value=name required=true />
            <div class="form__row">
                <FormField label="Số điện thoại" value=phone input_type="tel" />
                <FormField label="Email" value=email input_type="email" />
            </div>
            <FormTextarea label="Địa chỉ" value=address />
            <FormError error=error />
            <FormActions on_cancel=on_cancel />
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_validation() {
        let mut form = CustomerForm {
            name: "Nguyễn Văn A".into(),
            phone: "0901 234 567".into(),
            ..Default::default()
        };
        assert_eq!(form.to_dto().unwrap().phone.as_deref(), Some("0901 234 567"));

        form.phone = "abc".into();
        assert!(form.to_dto().is_err());

        form.phone = "".into();
        assert_eq!(form.to_dto().unwrap().phone, None);
    }
}

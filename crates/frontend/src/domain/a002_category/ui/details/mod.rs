use crate::shared::components::form_field::{FormActions, FormError, FormField, FormTextarea};
use crate::shared::form::{optional, required};
use contracts::domain::a002_category::aggregate::{Category, CategoryDto};
use leptos::prelude::*;

pub fn to_dto(name: &str, description: &str) -> Result<CategoryDto, String> {
    Ok(CategoryDto {
        name: required("Tên danh mục", name)?,
        description: optional(description),
    })
}

#[component]
pub fn CategoryDetails(
    initial: Option<Category>,
    on_submit: Callback<CategoryDto>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let dto = initial.as_ref().map(CategoryDto::from).unwrap_or_default();
    let name = RwSignal::new(dto.name);
    let description = RwSignal::new(dto.description.unwrap_or_default());
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match to_dto(&name.get_untracked(), &description.get_untracked()) {
            Ok(dto) => {
                error.set(None);
                on_submit.run(dto);
            }
            Err(msg) => error.set(Some(msg)),
        }
    };

    view! {
        <form class="form" on:submit=submit>
            <FormField label="Tên danh mục" value=name required=true />
            <FormTextarea label="Mô tả" value=description />
            <FormError error=error />
            <FormActions on_cancel=on_cancel />
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_dto() {
        let dto = to_dto(" Đồ uống ", "").unwrap();
        assert_eq!(dto.name, "Đồ uống");
        assert_eq!(dto.description, None);
        assert!(to_dto("   ", "x").is_err());
    }
}

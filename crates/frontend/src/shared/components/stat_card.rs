use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardTone {
    #[default]
    Neutral,
    Good,
    Warning,
}

impl CardTone {
    fn class(self) -> &'static str {
        match self {
            CardTone::Neutral => "stat-card",
            CardTone::Good => "stat-card stat-card--success",
            CardTone::Warning => "stat-card stat-card--warning",
        }
    }
}

/// Dashboard tile: icon, label and an already formatted value
#[component]
pub fn StatCard(
    label: &'static str,
    icon_name: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] tone: Signal<CardTone>,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class=move || tone.get().class()>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {move || subtitle.get().map(|s| view! {
                    <div class="stat-card__subtitle">{s}</div>
                })}
            </div>
        </div>
    }
}

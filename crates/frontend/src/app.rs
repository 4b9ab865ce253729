use crate::config::Config;
use crate::routes::routes::AppRoutes;
use crate::system::auth::AuthSession;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App(config: Config) -> impl IntoView {
    // the only session handle; pages receive it as a prop
    let session = AuthSession::restore(config);

    view! {
        <ConfigProvider>
            <AppRoutes session=session />
        </ConfigProvider>
    }
}

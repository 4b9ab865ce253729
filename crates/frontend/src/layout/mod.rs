pub mod left;
pub mod top_header;

use crate::system::auth::AuthSession;
use leptos::prelude::*;
use top_header::TopHeader;

/// Application frame for signed-in pages.
///
/// ```text
/// +--------------------------------+
/// |           TopHeader            |
/// +--------------------------------+
/// |  Sidebar  |     children       |
/// +--------------------------------+
/// ```
#[component]
pub fn Shell(session: AuthSession, children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader session=session />
            <div class="app-body">
                <aside class="app-sidebar">
                    <left::Sidebar />
                </aside>
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}

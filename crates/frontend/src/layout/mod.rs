pub mod log_panel;
pub mod tabs;
pub mod toasts;
pub mod top_header;

use leptos::prelude::*;
use log_panel::LogPanel;
use tabs::{TabBar, TabPages};
use top_header::TopHeader;

/// Console page shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |              TabBar                      |
/// +------------------------------------------+
/// |      Tab pages          |    LogPanel    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <TabBar />
            <div class="app-body">
                <div data-zone="center" class="app-main">
                    <TabPages />
                </div>
                <div data-zone="right" class="app-right">
                    <LogPanel />
                </div>
            </div>
        </div>
    }
}

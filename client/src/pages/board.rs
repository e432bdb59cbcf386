//! Board page: header, canvas surface and status bar in a column layout.

use leptos::prelude::*;

use crate::components::canvas_host::CanvasHost;
use crate::components::header::Header;
use crate::components::status_bar::StatusBar;

/// Board page. The card collection lives in the canvas engine; the page only
/// arranges the chrome around it.
#[component]
pub fn BoardPage() -> impl IntoView {
    view! {
        <div class="board-page">
            <div class="board-page__toolbar">
                <Header/>
            </div>
            <div class="board-page__canvas">
                <CanvasHost/>
            </div>
            <div class="board-page__status-bar">
                <StatusBar/>
            </div>
        </div>
    }
}

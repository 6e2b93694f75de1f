use leptos::prelude::*;

/// A drop target for one workflow status.
#[component]
pub fn KanbanColumn(
    #[prop(into)] status: String,
    /// Heading text; the raw status when omitted.
    #[prop(optional, into)]
    title: Option<String>,
    children: Children,
) -> impl IntoView {
    let heading = title.unwrap_or_else(|| status.clone());
    view! {
        <div class="kanban-column" data-status=status>
            <div class="column-header">
                <h3>{heading}</h3>
            </div>
            <div class="column-content">{children()}</div>
        </div>
    }
}

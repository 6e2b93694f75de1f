use leptos::prelude::*;

// Render exactly one of batch_code / product_id: the batch code attribute
// alone decides the card kind.
#[component]
pub fn KanbanCard(
    #[prop(into)] status: String,
    #[prop(optional, into)] batch_code: Option<String>,
    #[prop(optional, into)] product_id: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            class="kanban-card"
            draggable="true"
            data-status=status
            data-batch-code=batch_code
            data-product-id=product_id
        >
            {children.map(|children| children())}
        </div>
    }
}

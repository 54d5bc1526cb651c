use leptos::prelude::*;

/// Radial light drawn behind highlighted tiles.
#[component]
pub fn GradientLight(
    /// Overlay classes (`Theme::ambient_overlay`)
    #[prop(into)]
    class: String,
) -> impl IntoView {
    view! { <div class=class></div> }
}

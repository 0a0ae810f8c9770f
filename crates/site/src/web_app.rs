use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use ui_showcase::{ComponentFamily, UiShowcaseApp};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Primitive Stories" />
        <Meta name="description" content="Interactive stories for the shared buttons, fields, and bottom sheet." />

        <Router>
            <Routes>
                <Route path="" view=|| view! { <UiShowcaseApp /> } />
                <Route path="/components/:name" view=ComponentRoute />
            </Routes>
        </Router>
    }
}

#[component]
pub fn ComponentRoute() -> impl IntoView {
    let params = use_params_map();
    let name = move || params.with(|map| map.get("name").cloned()).unwrap_or_default();

    move || match ComponentFamily::from_slug(&name()) {
        Some(family) => view! { <UiShowcaseApp family=family /> }.into_view(),
        None => view! {
            <section class="story-missing">
                <h1>"Unknown component"</h1>
                <p>{format!("No stories for `{}`.", name())}</p>
                <A href="/">"Back to all stories"</A>
            </section>
        }
        .into_view(),
    }
}

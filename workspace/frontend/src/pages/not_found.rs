use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::layout::Layout;
use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <Layout title="404">
            <div class="text-center">
                <p class="mb-6">{"This page does not exist."}</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">{"Go home"}</Link<Route>>
            </div>
        </Layout>
    }
}

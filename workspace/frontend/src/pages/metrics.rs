use compute::metrics_from_dto;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client;
use crate::common::error::ErrorDisplay;
use crate::common::fetch_hook::use_presentation;
use crate::common::loading::Loading;
use crate::components::layout::layout::Layout;
use crate::components::render::YewRenderer;
use crate::hooks::FetchState;
use crate::router::Route;

#[function_component(MetricsPage)]
pub fn metrics_page() -> Html {
    let (state, refetch) = use_presentation(api_client::get_metrics, metrics_from_dto);

    let body = match &*state {
        FetchState::Loading => html! { <Loading text={Some("Loading model metrics...".to_string())} /> },
        FetchState::Error(message) => html! {
            <ErrorDisplay message={message.clone()} on_retry={Some(refetch.clone())} />
        },
        FetchState::Success(presentation) => presentation.render(&YewRenderer),
    };

    html! {
        <Layout
            title="Model performance"
            subtitle={Some("How the ensemble compares to the baseline".to_string())}
        >
            {body}
            <div class="flex justify-center">
                <Link<Route> to={Route::Results} classes="btn btn-outline">
                    <i class="fas fa-arrow-left"></i>{" Back to results"}
                </Link<Route>>
            </div>
        </Layout>
    }
}

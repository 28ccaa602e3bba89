use compute::results_from_dto;
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

#[function_component(ResultsPage)]
pub fn results_page() -> Html {
    let (state, refetch) = use_presentation(api_client::get_results, results_from_dto);

    let body = match &*state {
        FetchState::Loading => html! { <Loading text={Some("Loading forecast...".to_string())} /> },
        FetchState::Error(message) => html! {
            <ErrorDisplay message={message.clone()} on_retry={Some(refetch.clone())} />
        },
        FetchState::Success(presentation) => presentation.render(&YewRenderer),
    };

    html! {
        <Layout
            title="Forecast results"
            subtitle={Some("Predicted sales for the coming months".to_string())}
        >
            {body}
            <div class="flex justify-center gap-4">
                <Link<Route> to={Route::Upload} classes="btn btn-outline">
                    <i class="fas fa-upload"></i>{" New forecast"}
                </Link<Route>>
                <Link<Route> to={Route::Metrics} classes="btn btn-primary">
                    <i class="fas fa-chart-bar"></i>{" Compare models"}
                </Link<Route>>
            </div>
        </Layout>
    }
}

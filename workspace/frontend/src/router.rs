use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::layout::Layout;
use crate::pages::landing::Landing;
use crate::pages::metrics::MetricsPage;
use crate::pages::not_found::NotFound;
use crate::pages::results::ResultsPage;
use crate::pages::upload::UploadPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/upload")]
    Upload,
    #[at("/results")]
    Results,
    #[at("/metrics")]
    Metrics,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering landing page");
            html! { <Layout title="SalesVision AI"><Landing /></Layout> }
        }
        Route::Upload => {
            log::trace!("Rendering upload page");
            html! { <UploadPage /> }
        }
        Route::Results => {
            log::trace!("Rendering results page");
            html! { <ResultsPage /> }
        }
        Route::Metrics => {
            log::trace!("Rendering metrics page");
            html! { <MetricsPage /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <NotFound /> }
        }
    }
}

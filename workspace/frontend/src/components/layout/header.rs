use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4">
                <Link<Route> to={Route::Home} classes="flex items-center gap-3">
                    <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content font-bold text-xl">
                        <i class="fas fa-chart-line"></i>
                    </div>
                    <span class="text-2xl font-bold tracking-tight">{"SalesVision AI"}</span>
                </Link<Route>>
            </div>
            <ul class="menu menu-horizontal px-1 gap-1">
                <li><Link<Route> to={Route::Home}><i class="fas fa-home"></i>{" Home"}</Link<Route>></li>
                <li><Link<Route> to={Route::Upload}><i class="fas fa-upload"></i>{" Upload"}</Link<Route>></li>
                <li><Link<Route> to={Route::Results}><i class="fas fa-chart-area"></i>{" Results"}</Link<Route>></li>
                <li><Link<Route> to={Route::Metrics}><i class="fas fa-chart-bar"></i>{" Metrics"}</Link<Route>></li>
            </ul>
        </div>
    }
}

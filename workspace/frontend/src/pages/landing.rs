use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="hero min-h-[60vh] bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-xl">
                    <h1 class="text-5xl font-bold">{"Forecast your sales"}</h1>
                    <p class="py-6">
                        {"Upload your monthly sales history and compare how a baseline model "}
                        {"and an ensemble predict the months ahead."}
                    </p>
                    <div class="flex gap-4 justify-center">
                        <Link<Route> to={Route::Upload} classes="btn btn-primary">
                            <i class="fas fa-upload"></i>{" Upload data"}
                        </Link<Route>>
                        <Link<Route> to={Route::Metrics} classes="btn btn-outline">
                            {"See model metrics"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}

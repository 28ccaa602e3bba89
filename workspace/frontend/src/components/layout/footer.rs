use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer footer-center p-6 bg-base-100 text-base-content border-t border-base-300">
            <p>{"SalesVision AI · sales forecasting with model ensembles"}</p>
        </footer>
    }
}

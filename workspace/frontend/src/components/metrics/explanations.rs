use common::MetricKind;
use yew::prelude::*;

#[function_component(MetricExplanations)]
pub fn metric_explanations() -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            {for MetricKind::ALL.iter().map(|kind| html! {
                <div>
                    <h3 class="text-lg font-bold text-primary mb-2">
                        {format!("{} ({})", kind.label(), kind.full_name())}
                    </h3>
                    <p class="opacity-80">{kind.description()}</p>
                </div>
            })}
        </div>
    }
}

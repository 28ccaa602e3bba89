use compute::LegendEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub entries: Vec<LegendEntry>,
}

#[function_component(SeriesLegend)]
pub fn series_legend(props: &Props) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            {for props.entries.iter().map(|entry| html! {
                <div class="flex items-start gap-3">
                    <i class="fas fa-info-circle text-primary mt-1"></i>
                    <div>
                        <p class="font-semibold">{&entry.label}</p>
                        <p class="text-sm opacity-70">{&entry.description}</p>
                    </div>
                </div>
            })}
        </div>
    }
}

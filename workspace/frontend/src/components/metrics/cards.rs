use compute::{MetricCard, Severity};
use yew::prelude::*;

/// Badge class for a severity; shared with the comparison table.
pub fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Good => "text-success",
        Severity::Neutral => "text-base-content",
        Severity::Bad => "text-error",
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub cards: Vec<MetricCard>,
    pub model: String,
}

#[function_component(MetricCards)]
pub fn metric_cards(props: &Props) -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
            {for props.cards.iter().map(|card| html! {
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="text-sm font-semibold opacity-70">{card.title}</h3>
                        <span class={classes!("text-3xl", "font-bold", severity_class(card.severity))}>
                            {&card.value}
                        </span>
                        <p class="text-xs opacity-60">{format!("{} · {}", props.model, card.kind.label())}</p>
                    </div>
                </div>
            })}
        </div>
    }
}

use compute::MetricRow;
use yew::prelude::*;

use super::cards::severity_class;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub rows: Vec<MetricRow>,
    pub model_a: String,
    pub model_b: String,
}

#[function_component(ComparisonTable)]
pub fn comparison_table(props: &Props) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class="table w-full">
                <thead>
                    <tr>
                        <th>{"Metric"}</th>
                        <th class="text-right">{&props.model_a}</th>
                        <th class="text-right">{&props.model_b}</th>
                        <th class="text-right">{"Improvement"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.rows.iter().map(|row| {
                        let improvement_class = if row.model_b_better { "text-success" } else { "opacity-70" };
                        html! {
                            <tr key={row.label}>
                                <td class="font-semibold">{row.label}</td>
                                <td class={classes!("text-right", "font-mono", severity_class(row.severity_a))}>{&row.model_a}</td>
                                <td class={classes!("text-right", "font-mono", severity_class(row.severity_b))}>{&row.model_b}</td>
                                <td class={classes!("text-right", "font-mono", improvement_class)}>{&row.improvement_text}</td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}

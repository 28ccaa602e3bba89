use compute::TableRow;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub rows: Vec<TableRow>,
    pub model_a: String,
    pub model_b: String,
}

#[function_component(PredictionTable)]
pub fn prediction_table(props: &Props) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>{"Date"}</th>
                        <th class="text-right">{"Actual"}</th>
                        <th class="text-right">{&props.model_a}</th>
                        <th class="text-right">{&props.model_b}</th>
                        <th class="text-right">{"Lower bound"}</th>
                        <th class="text-right">{"Upper bound"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for props.rows.iter().map(|row| html! {
                        <tr key={row.date.clone()}>
                            <td class="font-mono">{&row.date}</td>
                            <td class="text-right font-mono">{&row.actual}</td>
                            <td class="text-right font-mono text-info">{&row.prediction_a}</td>
                            <td class="text-right font-mono text-warning">{&row.prediction_b}</td>
                            <td class="text-right font-mono opacity-70">{&row.lower_bound}</td>
                            <td class="text-right font-mono opacity-70">{&row.upper_bound}</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}

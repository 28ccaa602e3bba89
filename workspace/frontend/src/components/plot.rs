use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

/// Serializes a plotly trace or layout; failures are logged and skipped.
pub fn to_plot_json<T: Serialize>(item: &T) -> Option<Value> {
    serde_json::to_value(item)
        .map_err(|e| log::error!("Failed to serialize chart element: {}", e))
        .ok()
}

fn to_js(value: &Value) -> Option<JsValue> {
    js_sys::JSON::parse(&value.to_string())
        .map_err(|e| log::error!("Failed to hand chart data to Plotly: {:?}", e))
        .ok()
}

#[derive(Properties, PartialEq)]
pub struct PlotlyChartProps {
    pub div_id: String,
    pub traces: Vec<Value>,
    pub layout: Value,
    #[prop_or(400)]
    pub height: u32,
}

/// Draws already serialized plotly traces into a div.
#[function_component(PlotlyChart)]
pub fn plotly_chart(props: &PlotlyChartProps) -> Html {
    let container_ref = use_node_ref();

    use_effect_with(
        (container_ref.clone(), props.traces.clone(), props.layout.clone(), props.div_id.clone()),
        move |(container_ref, traces, layout, div_id)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(div_id);

                let data = js_sys::Array::new();
                for trace in traces.iter().filter_map(to_js) {
                    data.push(&trace);
                }

                if let Some(layout) = to_js(layout) {
                    log::trace!("Plotting {} traces into #{}", data.length(), div_id);
                    newPlot(div_id, data.into(), layout);
                }
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style={format!("width:100%; height:{}px;", props.height)}></div>
    }
}

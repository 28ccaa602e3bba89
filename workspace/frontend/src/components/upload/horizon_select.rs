use model::Horizon;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: Horizon,
    pub on_change: Callback<Horizon>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(HorizonSelect)]
pub fn horizon_select(props: &Props) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<u32>().map(Horizon::try_from) {
                Ok(Ok(horizon)) => on_change.emit(horizon),
                _ => log::warn!("Ignoring unknown horizon option: {}", select.value()),
            }
        })
    };

    html! {
        <label class="form-control w-full">
            <div class="label">
                <span class="label-text font-semibold">{"Forecast horizon"}</span>
            </div>
            <select class="select select-bordered w-full" disabled={props.disabled} {onchange}>
                {for Horizon::ALL.iter().map(|horizon| html! {
                    <option
                        value={horizon.months().to_string()}
                        selected={*horizon == props.value}
                    >
                        {horizon.label()}
                    </option>
                })}
            </select>
        </label>
    }
}

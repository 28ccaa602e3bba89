use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub headline: Option<String>,
    pub explained_variance: Option<String>,
}

#[function_component(Interpretation)]
pub fn interpretation(props: &Props) -> Html {
    if props.headline.is_none() && props.explained_variance.is_none() {
        return html! {};
    }

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body text-center">
                <i class="fas fa-bullseye text-4xl text-primary mb-2"></i>
                <h2 class="text-2xl font-bold mb-2">{"Interpretation"}</h2>
                {for props.headline.iter().map(|text| html! {
                    <p class="text-xl text-success font-bold">{text}</p>
                })}
                {for props.explained_variance.iter().map(|text| html! {
                    <p class="opacity-80">{text}</p>
                })}
            </div>
        </div>
    }
}

use yew::prelude::*;

use super::footer::Footer;
use super::header::Header;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
    #[prop_or_default]
    pub subtitle: Option<String>,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Header />
            <main class="flex-1 max-w-7xl w-full mx-auto px-4 py-10">
                <div class="text-center mb-10">
                    <h1 class="text-4xl font-bold mb-2" id="page-title">{&props.title}</h1>
                    {for props.subtitle.iter().map(|subtitle| html! {
                        <p class="text-xl opacity-70">{subtitle}</p>
                    })}
                </div>
                { for props.children.iter() }
            </main>
            <Footer />
        </div>
    }
}

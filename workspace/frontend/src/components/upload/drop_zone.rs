use web_sys::{DragEvent, File, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_file: Callback<File>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Drag-and-drop target with a fallback file picker. Only the first file of
/// a drop is taken.
#[function_component(DropZone)]
pub fn drop_zone(props: &Props) -> Html {
    let dragging = use_state(|| false);

    let ondragover = {
        let dragging = dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging.set(true);
        })
    };

    let ondragleave = {
        let dragging = dragging.clone();
        Callback::from(move |_: DragEvent| dragging.set(false))
    };

    let ondrop = {
        let dragging = dragging.clone();
        let on_file = props.on_file.clone();
        let disabled = props.disabled;
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging.set(false);
            if disabled {
                return;
            }
            let file = e
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0));
            match file {
                Some(file) => on_file.emit(file),
                None => log::debug!("Drop without a file"),
            }
        })
    };

    let onchange = {
        let on_file = props.on_file.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_file.emit(file);
            }
            // allow picking the same file again after a rejection
            input.set_value("");
        })
    };

    let zone_class = classes!(
        "border-2",
        "border-dashed",
        "rounded-xl",
        "p-12",
        "text-center",
        "transition-colors",
        if *dragging { "border-primary bg-primary/10" } else { "border-base-300" },
        props.disabled.then_some("opacity-50"),
    );

    html! {
        <div class={zone_class} {ondragover} {ondragleave} {ondrop}>
            <i class="fas fa-cloud-upload-alt text-5xl text-primary mb-4"></i>
            <p class="text-lg font-semibold mb-2">{"Drag your CSV file here"}</p>
            <p class="text-sm opacity-70 mb-4">{"or pick one from your computer"}</p>
            <label class={classes!("btn", "btn-primary", props.disabled.then_some("btn-disabled"))}>
                {"Choose file"}
                <input
                    type="file"
                    accept=".csv,text/csv"
                    class="hidden"
                    disabled={props.disabled}
                    {onchange}
                />
            </label>
        </div>
    }
}

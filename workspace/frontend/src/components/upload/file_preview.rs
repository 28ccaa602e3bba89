use model::UploadFile;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub file: UploadFile,
    pub on_clear: Callback<()>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(FilePreview)]
pub fn file_preview(props: &Props) -> Html {
    let onclick = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_| on_clear.emit(()))
    };

    html! {
        <div class="flex items-center justify-between bg-base-200 rounded-lg p-4">
            <div class="flex items-center gap-3">
                <i class="fas fa-file-csv text-3xl text-success"></i>
                <div>
                    <p class="font-semibold">{props.file.name()}</p>
                    <p class="text-sm opacity-70">{format!("{:.2} KB", props.file.size_kb())}</p>
                </div>
            </div>
            <button class="btn btn-sm btn-ghost btn-circle" disabled={props.disabled} {onclick}>
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}

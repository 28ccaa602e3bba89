use compute::{Completion, UploadState};
use model::{Horizon, UploadFile};
use web_sys::File;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::common::toast::ToastContext;
use crate::components::layout::layout::Layout;
use crate::components::upload::{DropZone, FilePreview, HorizonSelect};
use crate::router::Route;
use crate::services::prediction::{PendingSubmission, PredictionService, SimulatedPredictionService};
use crate::settings;

fn describe(file: &File) -> UploadFile {
    UploadFile::new(file.name(), Some(file.type_()), file.size() as u64)
}

#[function_component(CsvFormat)]
fn csv_format() -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{"Required CSV format"}</h3>
                <p>
                    {"Upload a CSV with the columns "}
                    <span class="font-mono text-primary">{"fecha, ventas_previas, otras_vars"}</span>
                </p>
                <div class="mockup-code text-sm">
                    <pre data-prefix="#"><code>{"Example"}</code></pre>
                    <pre class="text-success"><code>{"fecha,ventas_previas,otras_vars"}</code></pre>
                    <pre><code>{"2023-01-01,5000,variable1"}</code></pre>
                    <pre><code>{"2023-01-02,5200,variable2"}</code></pre>
                </div>
            </div>
        </div>
    }
}

/// Horizon selection, CSV pick and hand-off to the prediction service.
///
/// `UploadState` lives in a `RefCell` so the submission callback always
/// sees the current state; the component re-renders on demand. The picked
/// browser `File` is kept in the state next to its descriptor.
#[function_component(UploadPage)]
pub fn upload_page() -> Html {
    let state = use_mut_ref(UploadState::<File>::default);
    let pending = use_mut_ref(|| None::<PendingSubmission>);
    let rerender = use_force_update();
    let toast_ctx = use_context::<ToastContext>();
    let navigator = use_navigator();
    let service = use_memo((), |_| {
        SimulatedPredictionService::from_settings(&settings::get_settings())
    });

    // Leaving the page abandons an in-flight submission
    {
        let state = state.clone();
        let pending = pending.clone();
        use_effect_with((), move |_| {
            move || {
                pending.borrow_mut().take();
                state.borrow_mut().cancel();
            }
        });
    }

    let show_error = {
        let toast_ctx = toast_ctx.clone();
        move |message: String| match &toast_ctx {
            Some(toast_ctx) => toast_ctx.show_error(message),
            None => log::error!("{}", message),
        }
    };

    let on_horizon = {
        let state = state.clone();
        let rerender = rerender.clone();
        Callback::from(move |horizon: Horizon| {
            state.borrow_mut().select_horizon(horizon);
            rerender.force_update();
        })
    };

    let on_file = {
        let state = state.clone();
        let rerender = rerender.clone();
        let show_error = show_error.clone();
        Callback::from(move |file: File| {
            let offered = state.borrow_mut().offer_file(describe(&file), file);
            if let Err(e) = offered {
                show_error(e.to_string());
            }
            rerender.force_update();
        })
    };

    let on_clear = {
        let state = state.clone();
        let rerender = rerender.clone();
        Callback::from(move |_| {
            state.borrow_mut().clear_file();
            rerender.force_update();
        })
    };

    let on_submit = {
        let state = state.clone();
        let pending = pending.clone();
        let rerender = rerender.clone();
        let toast_ctx = toast_ctx.clone();
        let service = service.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(request) = state.borrow_mut().begin_submission() else {
                log::debug!("Submit ignored: no file or already submitting");
                return;
            };
            let ticket = request.ticket;
            if let Some(toast_ctx) = &toast_ctx {
                toast_ctx.show_info(format!("Uploading {}...", request.file.name()));
            }

            let on_complete = {
                let state = state.clone();
                let rerender = rerender.clone();
                let toast_ctx = toast_ctx.clone();
                let navigator = navigator.clone();
                let show_error = show_error.clone();
                Callback::from(move |outcome: Result<(), String>| {
                    let completion = state.borrow_mut().complete(ticket, outcome);
                    match completion {
                        Completion::Navigate => {
                            if let Some(toast_ctx) = &toast_ctx {
                                toast_ctx.show_success("Forecast ready".to_string());
                            }
                            match &navigator {
                                Some(navigator) => navigator.push(&Route::Results),
                                None => log::error!("No router available to show the results"),
                            }
                        }
                        Completion::Failed(e) => {
                            show_error(e.to_string());
                            rerender.force_update();
                        }
                        Completion::Stale => log::debug!("Ignoring stale submission result"),
                    }
                })
            };

            *pending.borrow_mut() = Some(service.submit(request, on_complete));
            rerender.force_update();
        })
    };

    let current = state.borrow();
    let submitting = current.is_submitting();

    html! {
        <Layout
            title="Configure your forecast"
            subtitle={Some("Pick a horizon and upload your sales history".to_string())}
        >
            <div class="max-w-3xl mx-auto flex flex-col gap-6">
                <HorizonSelect value={current.horizon()} on_change={on_horizon} disabled={submitting} />

                {match current.file() {
                    Some(file) => html! {
                        <FilePreview file={file.clone()} on_clear={on_clear} disabled={submitting} />
                    },
                    None => html! { <DropZone on_file={on_file} disabled={submitting} /> },
                }}

                <CsvFormat />

                <button
                    class="btn btn-primary btn-lg w-full"
                    disabled={!current.can_submit()}
                    onclick={on_submit}
                >
                    {if submitting {
                        html! {
                            <>
                                <span class="loading loading-spinner"></span>
                                {" Generating forecast..."}
                            </>
                        }
                    } else {
                        html! { <>{"Generate forecast"}</> }
                    }}
                </button>
            </div>
        </Layout>
    }
}

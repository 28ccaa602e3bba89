use compute::Presentation;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use crate::common::toast::ToastContext;
use crate::hooks::FetchState;

/// Fetches a payload on mount and turns it into a view.
///
/// Transport failures end in `FetchState::Error` (with a toast and a retry
/// callback); a payload that fails validation still succeeds as
/// `Presentation::Unavailable`.
#[hook]
pub fn use_presentation<D, V, F, Fut>(
    fetch_fn: F,
    present: fn(D) -> Presentation<V>,
) -> (UseStateHandle<FetchState<Presentation<V>>>, Callback<()>)
where
    D: 'static,
    V: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<D, String>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let toast_ctx = use_context::<ToastContext>();
    let fetch_fn = use_state(|| Rc::new(fetch_fn));

    let refetch = {
        let fetch_state = fetch_state.clone();
        let fetch_fn = fetch_fn.clone();

        use_callback((), move |_, _| {
            let fetch_state = fetch_state.clone();
            let toast_ctx = toast_ctx.clone();
            let fetch_fn = fetch_fn.clone();

            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                match (*fetch_fn)().await {
                    Ok(data) => fetch_state.set(FetchState::Success(present(data))),
                    Err(err) => {
                        fetch_state.set(FetchState::Error(err.clone()));
                        if let Some(toast_ctx) = toast_ctx {
                            toast_ctx.show_error(err);
                        }
                    }
                }
            });
        })
    };

    // Fetch on mount
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            || ()
        });
    }

    (fetch_state, refetch)
}

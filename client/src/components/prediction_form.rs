//! Input form: textarea plus the submit button.

use leptos::prelude::*;
use panel::view::PLACEHOLDER;
use panel::{Effect, PanelEvent, PanelState, Predictor, render};

use crate::net::api::BrowserPredictor;

/// Text input and "Check News" button.
///
/// Submitting applies `PanelEvent::Submit`; when the panel asks for a
/// request, the call runs on a local task and its outcome is fed back as
/// `PanelEvent::Settled`.
#[component]
pub fn PredictionForm() -> impl IntoView {
    let state = expect_context::<RwSignal<PanelState>>();
    let panel_view = Memo::new(move |_| state.with(render));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let effect = state
            .try_update(|s| s.apply(PanelEvent::Submit))
            .unwrap_or(Effect::None);
        let Effect::Request(request) = effect else {
            return;
        };
        leptos::task::spawn_local(async move {
            let outcome = BrowserPredictor.predict(&request).await;
            state.update(|s| {
                s.apply(PanelEvent::Settled(outcome));
            });
        });
    };

    view! {
        <form class="detector__form" on:submit=on_submit>
            <textarea
                class="detector__input"
                rows="5"
                placeholder=PLACEHOLDER
                prop:value=move || state.with(|s| s.text.clone())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    state.update(|s| {
                        s.apply(PanelEvent::Edit(text));
                    });
                }
            ></textarea>
            <button
                class="btn btn--primary detector__submit"
                type="submit"
                disabled=move || panel_view.with(|v| v.submit_disabled)
            >
                {move || {
                    panel_view
                        .with(|v| v.busy)
                        .then(|| view! { <span class="detector__spinner" aria-hidden="true"></span> })
                }}
                {move || panel_view.with(|v| v.submit_label)}
            </button>
        </form>
    }
}

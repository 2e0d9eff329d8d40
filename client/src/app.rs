//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use panel::PanelState;
use panel::view::TITLE;

use crate::components::{prediction_form::PredictionForm, result_card::ResultCard};

/// Root component.
///
/// Owns the single `RwSignal<PanelState>` and provides it to the form and
/// the result card through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(PanelState::default());
    provide_context(state);

    view! {
        <Title text=TITLE/>
        <main class="detector">
            <header class="detector__header">
                <span class="detector__icon" aria-hidden="true">"📰"</span>
                <h1 class="detector__title">{TITLE}</h1>
            </header>
            <PredictionForm/>
            <ResultCard/>
        </main>
    }
}

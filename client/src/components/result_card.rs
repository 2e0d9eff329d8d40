//! Result panel: label, message, confidence, and score breakdown.

use leptos::prelude::*;
use panel::view::{CONFIDENCE_PREFIX, SCORES_HEADING};
use panel::{PanelState, ResultView, render};

use crate::util::style::label_class;

/// Shows the last result, or nothing while absent or pending.
#[component]
pub fn ResultCard() -> impl IntoView {
    let state = expect_context::<RwSignal<PanelState>>();
    let result = Memo::new(move |_| state.with(render).result);

    view! { {move || result.get().map(result_section)} }
}

fn result_section(result: ResultView) -> impl IntoView {
    let heading_class = label_class(result.category);
    let confidence = result.confidence.map(|value| {
        view! {
            <p class="result__confidence">
                {CONFIDENCE_PREFIX}
                <span class="result__confidence-value">{value}</span>
            </p>
        }
    });

    let scores = (!result.scores.is_empty()).then(|| {
        let rows = result
            .scores
            .into_iter()
            .map(|row| {
                view! {
                    <li class="result__score">
                        <span class="result__score-label">{row.label}</span>
                        <span class="result__score-value">{row.percent}</span>
                    </li>
                }
            })
            .collect::<Vec<_>>();
        view! {
            <div class="result__scores">
                <h3 class="result__scores-heading">{SCORES_HEADING}</h3>
                <ul class="result__score-list">{rows}</ul>
            </div>
        }
    });

    view! {
        <section class="result">
            <h2 class=heading_class>{result.label}</h2>
            <p class="result__message">{result.message}</p>
            {confidence}
            {scores}
        </section>
    }
}

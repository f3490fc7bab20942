//! Bias viewer: the flat bias vector at the selected step.

use leptos::prelude::*;
use tensors::BiasSnapshot;
use tensors::format::display_cell;

use crate::components::controls::{FontSizeControl, RangeControl, RoundControl, separator};
use crate::state::viewer::{BiasSelection, DisplaySettings};

#[component]
pub fn BiasView(#[prop(into)] name: String, snapshot: BiasSnapshot) -> impl IntoView {
    let selection = RwSignal::new(BiasSelection::for_snapshot(&snapshot));
    let display = RwSignal::new(DisplaySettings::default());
    let range = BiasSelection::step_range(&snapshot);
    let snapshot = StoredValue::new(snapshot);

    let on_step = move |raw: String| snapshot.with_value(|s| selection.update(|sel| sel.set_step(s, &raw)));

    let values = move || {
        let step = selection.get().step;
        let rounding = display.with(DisplaySettings::rounding);
        snapshot
            .with_value(|s| {
                s.at(step)
                    .map(|values| values.iter().map(|&v| display_cell(Some(v), rounding)).collect::<Vec<_>>())
            })
            .unwrap_or_default()
            .into_iter()
            .map(|text| view! { <div class="tensor-value">{text}</div> })
            .collect_view()
    };

    view! {
        <div class="bias-component">
            <div class="controls-container">
                <div class="mb-1">
                    <strong>{name} " - Bias"</strong>
                </div>
                <div class="d-flex">
                    <RangeControl
                        label="Step"
                        step="1"
                        value=Signal::derive(move || selection.get().step.to_string())
                        min=Signal::stored(range.map_or(0, |b| b.min).to_string())
                        max=Signal::stored(range.map_or(0, |b| b.max).to_string())
                        disabled=Signal::stored(range.is_none())
                        on_input=on_step
                    />
                    {separator()}
                    <FontSizeControl
                        value=Signal::derive(move || tensors::format::to_js_string(display.get().font_size))
                        on_input=move |raw: String| display.update(|d| d.set_font_size(&raw))
                    />
                    {separator()}
                    <RoundControl
                        round=Signal::derive(move || display.get().round)
                        decimals=Signal::derive(move || display.get().decimals)
                        on_toggle=move |round: bool| display.update(|d| d.round = round)
                        on_decimals=move |raw: String| display.update(|d| d.set_decimals(&raw))
                    />
                </div>
            </div>
            <div class="overflow-auto">
                <div class="bias-container" style=move || display.with(DisplaySettings::container_style)>
                    {values}
                </div>
            </div>
        </div>
    }
}

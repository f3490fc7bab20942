//! Kernel viewer: one `rows × cols` slice of a 4-D kernel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once per layer on the current page. The step slider spans
//! `0..=max` present step; steps with no recorded kernel show an empty grid.
//! Input/output sliders follow the shape of the selected step's kernel.

use leptos::prelude::*;
use tensors::format::display_cell;
use tensors::{KernelSnapshot, kernel};

use crate::components::controls::{FontSizeControl, RangeControl, RoundControl, separator};
use crate::state::viewer::{DisplaySettings, KernelSelection};

#[component]
pub fn KernelView(#[prop(into)] name: String, snapshot: KernelSnapshot) -> impl IntoView {
    let selection = RwSignal::new(KernelSelection::for_snapshot(&snapshot));
    let display = RwSignal::new(DisplaySettings::default());
    let (step_min, step_max) = KernelSelection::step_range(&snapshot);
    let snapshot = StoredValue::new(snapshot);

    let channels = Memo::new(move |_| {
        let sel = selection.get();
        snapshot.with_value(|s| sel.channels(s))
    });

    let on_step = move |raw: String| snapshot.with_value(|s| selection.update(|sel| sel.set_step(s, &raw)));
    let on_input = move |raw: String| selection.update(|sel| sel.set_input(&raw));
    let on_output = move |raw: String| selection.update(|sel| sel.set_output(&raw));

    let grid = move || {
        let sel = selection.get();
        let rounding = display.with(DisplaySettings::rounding);
        snapshot
            .with_value(|s| kernel::grid_at(s, sel.step, sel.input, sel.output))
            .into_iter()
            .map(|row| {
                view! {
                    <div class="tensor-row">
                        {row
                            .into_iter()
                            .map(|cell| view! { <div class="tensor-value">{display_cell(cell, rounding)}</div> })
                            .collect_view()}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="tensor-component">
            <div class="controls-container">
                <div class="mb-1">
                    <strong>{name} " - Kernel"</strong>
                </div>
                <div class="d-flex">
                    <RangeControl
                        label="Step"
                        step="1"
                        value=Signal::derive(move || selection.get().step.to_string())
                        min=Signal::stored(step_min.to_string())
                        max=Signal::stored(step_max.to_string())
                        disabled=Signal::stored(false)
                        on_input=on_step
                    />
                    {separator()}
                    <RangeControl
                        label="Input"
                        step="1"
                        value=Signal::derive(move || selection.get().input.to_string())
                        min=Signal::stored("0".to_owned())
                        max=Signal::derive(move || channels.get().max_input().unwrap_or(0).to_string())
                        disabled=Signal::derive(move || channels.get().max_input().is_none())
                        on_input=on_input
                    />
                    {separator()}
                    <RangeControl
                        label="Output"
                        step="1"
                        value=Signal::derive(move || selection.get().output.to_string())
                        min=Signal::stored("0".to_owned())
                        max=Signal::derive(move || channels.get().max_output().unwrap_or(0).to_string())
                        disabled=Signal::derive(move || channels.get().max_output().is_none())
                        on_input=on_output
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
                <div class="tensor-container" style=move || display.with(DisplaySettings::container_style)>
                    {grid}
                </div>
            </div>
        </div>
    }
}

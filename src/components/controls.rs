//! Slider, checkbox, and number controls shared by the viewers.
//!
//! Controls hand raw `<input>` values to their callbacks as strings; parsing
//! and clamping live in `state::viewer`.

use leptos::prelude::*;
use tensors::format::MAX_DECIMALS;

use crate::state::viewer::{FONT_SIZE_MAX, FONT_SIZE_MIN, FONT_SIZE_STEP};

/// Labelled range slider showing its current value.
#[component]
pub fn RangeControl<F>(
    #[prop(into)] label: String,
    #[prop(into)] step: String,
    value: Signal<String>,
    min: Signal<String>,
    max: Signal<String>,
    disabled: Signal<bool>,
    on_input: F,
) -> impl IntoView
where
    F: Fn(String) + Clone + 'static,
{
    view! {
        <label class="controls-item">
            <span>{label} ": " {move || value.get()}</span>
            <input
                class="slider"
                type="range"
                step=step
                min=move || min.get()
                max=move || max.get()
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input(event_target_value(&ev))
            />
        </label>
    }
}

/// Font scale slider in `em`.
#[component]
pub fn FontSizeControl<F>(value: Signal<String>, on_input: F) -> impl IntoView
where
    F: Fn(String) + Clone + 'static,
{
    view! {
        <RangeControl
            label="Font Size"
            step=FONT_SIZE_STEP.to_string()
            value=value
            min=Signal::stored(FONT_SIZE_MIN.to_string())
            max=Signal::stored(FONT_SIZE_MAX.to_string())
            disabled=Signal::stored(false)
            on_input=on_input
        />
    }
}

/// Round checkbox plus decimal count; the count is editable only while
/// rounding is on.
#[component]
pub fn RoundControl<T, D>(round: Signal<bool>, decimals: Signal<u32>, on_toggle: T, on_decimals: D) -> impl IntoView
where
    T: Fn(bool) + Clone + 'static,
    D: Fn(String) + Clone + 'static,
{
    view! {
        <label class="controls-item">
            <span>"Round Decimals:"</span>
            <div>
                <input
                    type="checkbox"
                    name="round"
                    prop:checked=move || round.get()
                    on:change=move |ev| on_toggle(event_target_checked(&ev))
                />
                <input
                    type="number"
                    min="0"
                    max=MAX_DECIMALS.to_string()
                    prop:value=move || decimals.get().to_string()
                    disabled=move || !round.get()
                    on:input=move |ev| on_decimals(event_target_value(&ev))
                />
            </div>
        </label>
    }
}

/// Vertical rule between control groups.
pub fn separator() -> impl IntoView {
    view! { <hr class="controls-separator"/> }
}

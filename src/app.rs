//! Root panel component: step-window pagination over the layer list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by the `render` entry point. Owns the only shared state,
//! [`PanelState`], and passes each layer's snapshots down to its viewers as
//! props. Every navigation action produces at most one request; responses
//! are applied through the sequence check in [`PanelState::apply`].

use leptos::prelude::*;
use tensors::LayerEntry;

use crate::components::bias_view::BiasView;
use crate::components::kernel_view::KernelView;
use crate::config::PanelConfig;
use crate::state::panel::{PanelState, PendingRequest};

#[component]
pub fn TensorsPanel(config: PanelConfig) -> impl IntoView {
    let endpoint = StoredValue::new(config.endpoint.clone());
    let panel = RwSignal::new(PanelState::new(config));

    // Derived views of the panel state. Memos keep the viewer list from being
    // rebuilt (and losing slider positions) on unrelated state changes.
    let loading = Memo::new(move |_| panel.with(|s| s.loading));
    let layers = Memo::new(move |_| panel.with(|s| s.layers.clone()));
    let shown = Memo::new(move |_| panel.with(|s| (s.shows_kernel(), s.shows_bias())));

    let send = move |request: Option<PendingRequest>| {
        let Some(PendingRequest { seq, query }) = request else {
            return;
        };
        log::info!("tensors request seq={seq} cursor={} limit={}", query.cursor, query.limit);
        leptos::task::spawn_local(async move {
            let page = crate::net::api::fetch_page(&endpoint.get_value(), &query).await;
            panel.maybe_update(|s| {
                let applied = s.apply(seq, page);
                if !applied {
                    log::debug!("discarded stale tensors page seq={seq}");
                }
                applied
            });
        });
    };

    send(panel.try_update(PanelState::load));

    let on_previous = move |_| send(panel.try_update(PanelState::previous).flatten());
    let on_next = move |_| send(panel.try_update(PanelState::next).flatten());
    let on_kernel_toggle = move |ev: leptos::ev::Event| {
        let show = event_target_checked(&ev);
        send(panel.try_update(|s| s.set_show_kernel(show)).flatten());
    };
    let on_bias_toggle = move |ev: leptos::ev::Event| {
        let show = event_target_checked(&ev);
        send(panel.try_update(|s| s.set_show_bias(show)).flatten());
    };

    let window_label = move || {
        let (first, last) = panel.with(PanelState::window);
        format!(" ({first} - {last})")
    };

    view! {
        <div>
            <div class="mb-2">
                <strong>"Steps"</strong>
                {window_label}
                <div>
                    <button
                        type="button"
                        on:click=on_previous
                        disabled=move || !panel.with(PanelState::can_go_previous)
                    >
                        "Previous"
                    </button>
                    <button type="button" on:click=on_next disabled=move || !panel.with(PanelState::can_go_next)>
                        "Next"
                    </button>
                    <label class="controls-item">
                        <input type="checkbox" prop:checked=move || shown.get().0 on:change=on_kernel_toggle/>
                        "Kernel"
                    </label>
                    <label class="controls-item">
                        <input type="checkbox" prop:checked=move || shown.get().1 on:change=on_bias_toggle/>
                        "Bias"
                    </label>
                </div>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <div>"Loading..."</div> }>
                {move || {
                    let (show_kernel, show_bias) = shown.get();
                    layers
                        .get()
                        .into_iter()
                        .map(|layer| layer_view(layer, show_kernel, show_bias))
                        .collect_view()
                }}
            </Show>
        </div>
    }
}

fn layer_view(layer: LayerEntry, show_kernel: bool, show_bias: bool) -> impl IntoView {
    let LayerEntry { name, kernel, bias } = layer;
    let kernel_view = show_kernel.then(|| view! { <KernelView name=name.clone() snapshot=kernel/> });
    let bias_view = show_bias.then(|| view! { <BiasView name=name snapshot=bias/> });
    view! { <div class="mb-2">{kernel_view} {bias_view}</div> }
}

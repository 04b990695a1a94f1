use leptos::ev;
use leptos::prelude::*;
use modal_contracts::ModalConfiguration;

/// Default close affordance
#[component]
pub fn CloseButton(#[prop(into)] style: Signal<String>) -> impl IntoView {
    view! {
        <button class="defaultCloseIcon" style=move || style.get()>
            "✕"
        </button>
    }
}

fn with_extra(base: String, extra: Option<String>) -> String {
    match extra {
        Some(extra) => format!("{base} {extra}"),
        None => base,
    }
}

/// Dialog chrome (backdrop + container + close affordance + body).
///
/// Backdrop clicks close; clicks inside the container stop propagation so they
/// never reach the backdrop handler.
#[component]
pub fn ModalFrame(
    /// Validated configuration of the owning modal
    #[prop(into)]
    config: Signal<ModalConfiguration>,
    /// Closes the owning modal
    close_modal: Callback<()>,
    /// Replaces the default `✕` button
    close_component: Option<ViewFn>,
    /// Extra inline CSS for the backdrop
    #[prop(optional, into)]
    backdrop_style: MaybeProp<String>,
    /// Extra inline CSS for the default close button
    #[prop(optional, into)]
    close_button_style: MaybeProp<String>,
    /// Resolved dialog body
    children: Children,
) -> impl IntoView {
    let handle_backdrop_click = move |_| {
        close_modal.run(());
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        close_modal.run(());
    };

    let close_affordance = match close_component {
        Some(close_component) => close_component.run(),
        None => {
            let style = Signal::derive(move || {
                with_extra(config.with(|c| c.close_icon_style()), close_button_style.get())
            });
            view! { <CloseButton style=style /> }.into_any()
        }
    };

    let backdrop = move || with_extra(config.with(|c| c.backdrop_style()), backdrop_style.get());

    view! {
        <dialog
            open=true
            class=move || config.with(|c| c.backdrop_class())
            style=backdrop
            on:click=handle_backdrop_click
        >
            <div class="container" on:click=stop_propagation>
                <div
                    class="closeHandler"
                    style=move || config.with(|c| c.close_component_position.style())
                    on:click=handle_close
                >
                    {close_affordance}
                </div>
                {children()}
            </div>
        </dialog>
    }
}

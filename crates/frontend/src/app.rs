use crate::shared::modal::{use_modal, Modal, ModalChildProps, TriggerModal};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use modal_contracts::{CloseComponentPosition, ModalConfiguration};
use wasm_bindgen_futures::spawn_local;

/// Presentation of the form modal; same keys as the JS props
const FORM_MODAL_CONFIG: &str = r##"{
    "modalId": "form-modal",
    "positionX": "right",
    "positionY": "center",
    "backgroundColor": "#181818",
    "closeIconColor": "#fff"
}"##;

fn form_modal_config() -> ModalConfiguration {
    ModalConfiguration::from_json(FORM_MODAL_CONFIG).unwrap_or_else(|err| {
        log::error!("demo: {err:#}, falling back to defaults");
        ModalConfiguration::default()
    })
}

/// Fake submit: waits a moment, then closes the modal that rendered the form.
fn handle_submit(close_modal: Callback<()>) {
    spawn_local(async move {
        TimeoutFuture::new(300).await;
        log::info!("Form submitted!");
        if close_modal.try_run(()).is_none() {
            log::debug!("demo: form modal was unmounted before submit finished");
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    let config = form_modal_config();
    let (details_open, details) = use_modal(false);

    view! {
        <div class="demo">
            <TriggerModal
                trigger=|| view! { <button>"Open Modal with Form"</button> }
                modal_id=config.modal_id
                position_x=config.position_x
                position_y=config.position_y
                background_color=config.background_color
                close_icon_color=config.close_icon_color
                on_close=Callback::new(|_| log::debug!("demo: form modal closed"))
                render=move |props: ModalChildProps| {
                    view! {
                        <div class="content">
                            <h1>"Form"</h1>
                            <button on:click=move |_| handle_submit(props.close_modal)>"Submit"</button>
                        </div>
                    }
                }
            />

            <TriggerModal
                trigger=|| view! { <button>"Open Modal"</button> }
                close_component=ViewFn::from(|| view! { <button>"Close"</button> })
                close_component_position=CloseComponentPosition::new("12px", "12px")
            >
                <div class="content">"Hello World"</div>
            </TriggerModal>

            <button on:click=move |_| details.open()>"Open controlled modal"</button>
            <Modal open=details_open on_close=Callback::new(move |_| details.close())>
                <div class="content">
                    <p>"This modal's state lives in the page."</p>
                    <button on:click=move |_| details.toggle()>"Done"</button>
                </div>
            </Modal>
        </div>
    }
}

use super::content::{modal_content, ModalChildProps, ModalContent, RenderModalContent};
use super::controller::ModalController;
use crate::shared::dom::WebDocument;
use crate::shared::modal_frame::ModalFrame;
use leptos::portal::Portal;
use leptos::prelude::*;
use modal_contracts::{CloseComponentPosition, ModalConfiguration};
use std::rc::Rc;
use web_sys::Element;

type StoredController = StoredValue<ModalController<WebDocument>, LocalStorage>;

/// Self-contained modal: renders `trigger`, opens on its click and owns the
/// open/closed state.
///
/// Panics with the `ConfigurationError` message when the configuration is
/// invalid, both on mount and on later prop changes.
///
/// ```ignore
/// view! {
///     <TriggerModal
///         trigger=|| view! { <button>"Open Modal"</button> }
///         position_x="right"
///         render=move |props: ModalChildProps| view! {
///             <button on:click=move |_| props.close_modal.run(())>"Submit"</button>
///         }
///     />
/// }
/// ```
#[component]
pub fn TriggerModal(
    /// Element whose click opens the dialog
    #[prop(into)]
    trigger: ViewFn,
    /// Static dialog body
    #[prop(optional)]
    children: Option<ChildrenFn>,
    /// Render-prop dialog body; receives `close_modal`. Takes precedence over `children`.
    #[prop(optional, into)]
    render: Option<RenderModalContent>,
    /// Id of the mount point element (default `modal`)
    #[prop(optional, into)]
    modal_id: MaybeProp<String>,
    /// Backdrop color, any CSS color (default `rgba(0, 0, 0, 0.42)`)
    #[prop(optional, into)]
    background_color: MaybeProp<String>,
    /// `left`, `center` or `right`
    #[prop(optional, into)]
    position_x: MaybeProp<String>,
    /// `top`, `center` or `bottom`
    #[prop(optional, into)]
    position_y: MaybeProp<String>,
    /// Replaces the default close button
    #[prop(optional)]
    close_component: Option<ViewFn>,
    #[prop(optional, into)]
    close_component_position: MaybeProp<CloseComponentPosition>,
    /// Color of the default close button (default `#1F1F1F`)
    #[prop(optional, into)]
    close_icon_color: MaybeProp<String>,
    /// Called on every close
    #[prop(optional)]
    on_close: Option<Callback<()>>,
) -> impl IntoView {
    let config = Memo::new(move |_| {
        let mut config = ModalConfiguration::default();
        if let Some(modal_id) = modal_id.get() {
            config.modal_id = modal_id;
        }
        if let Some(color) = background_color.get() {
            config.background_color = color;
        }
        if let Some(x) = position_x.get() {
            config.position_x = x;
        }
        if let Some(y) = position_y.get() {
            config.position_y = y;
        }
        if let Some(color) = close_icon_color.get() {
            config.close_icon_color = color;
        }
        if let Some(position) = close_component_position.get() {
            config.close_component_position = position;
        }
        config
    });

    let controller = ModalController::new(WebDocument::new(document()), config.get_untracked())
        .unwrap_or_else(|err| panic!("{err}"));

    // mount target reported by the controller; `None` while closed
    let mount = RwSignal::new_local(None::<Element>);
    controller.set_on_change(move |target| {
        mount.try_set(target);
    });
    if let Some(on_close) = on_close {
        controller.set_on_close(Some(Rc::new(move || on_close.run(()))));
    }

    let controller = StoredValue::new_local(controller);

    Effect::new(move |_| {
        let next = config.get();
        if let Some(Err(err)) = controller.try_with_value(|c| c.on_config_change(next)) {
            panic!("{err}");
        }
    });

    on_cleanup(move || {
        controller.try_with_value(ModalController::on_unmount);
    });

    let content = StoredValue::new(modal_content(children, render));
    let close_component = StoredValue::new(close_component);

    view! {
        <div
            class="modal-trigger"
            on:click=move |_| {
                controller.try_with_value(ModalController::open);
            }
        >
            {trigger.run()}
        </div>
        {move || {
            mount
                .get()
                .map(|mount| {
                    view! {
                        <Portal mount=mount>
                            <ProjectedDialog
                                controller=controller
                                config=config
                                content=content
                                close_component=close_component
                            />
                        </Portal>
                    }
                })
        }}
    }
}

/// Dialog body and chrome, resolved through the controller so every close
/// path goes through its close handle.
#[component]
fn ProjectedDialog(
    controller: StoredController,
    config: Memo<ModalConfiguration>,
    content: StoredValue<ModalContent>,
    close_component: StoredValue<Option<ViewFn>>,
) -> impl IntoView {
    let projected = controller
        .try_with_value(|c| {
            let props = ModalChildProps::from(c.close_handle());
            content.with_value(|content| c.project(content)).map(|body| (props, body))
        })
        .flatten();

    projected.map(|(props, body)| {
        view! {
            <ModalFrame
                config=config
                close_modal=props.close_modal
                close_component=close_component.get_value()
            >
                {body}
            </ModalFrame>
        }
    })
}

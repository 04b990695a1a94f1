use super::content::{modal_content, ModalChildProps, RenderModalContent};
use super::controller::validate_for;
use crate::shared::dom::{KeydownGuard, WebDocument};
use crate::shared::modal_frame::ModalFrame;
use crate::shared::portal::ModalPortal;
use leptos::prelude::*;
use modal_contracts::ModalConfiguration;

/// Open/close actions returned by [`use_modal`].
#[derive(Clone, Copy)]
pub struct ModalActions {
    state: RwSignal<bool>,
}

impl ModalActions {
    pub fn open(&self) {
        self.state.set(true);
    }

    pub fn close(&self) {
        self.state.set(false);
    }

    pub fn toggle(&self) {
        self.state.update(|open| *open = !*open);
    }
}

/// State holder for the controlled [`Modal`].
///
/// ```ignore
/// let (open, actions) = use_modal(false);
/// view! { <Modal open=open on_close=Callback::new(move |_| actions.close())>"Hi"</Modal> }
/// ```
pub fn use_modal(initial: bool) -> (Signal<bool>, ModalActions) {
    let state = RwSignal::new(initial);
    (state.into(), ModalActions { state })
}

/// Modal whose open state is owned by the caller.
///
/// Every dismissal (backdrop, close button, Escape, `close_modal`) only calls
/// `on_close`; the caller decides whether `open` becomes false. The Escape
/// listener exists only while `open` is true.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    /// Defaults to [`ModalConfiguration::controlled`] (mount point `new-modal`)
    #[prop(optional, into)]
    config: MaybeProp<ModalConfiguration>,
    #[prop(optional)] children: Option<ChildrenFn>,
    #[prop(optional, into)] render: Option<RenderModalContent>,
    #[prop(optional)] close_component: Option<ViewFn>,
    /// Inline CSS appended to the backdrop style
    #[prop(optional, into)]
    backdrop_style: MaybeProp<String>,
    /// Inline CSS appended to the default close button style
    #[prop(optional, into)]
    close_button_style: MaybeProp<String>,
) -> impl IntoView {
    let config = Memo::new(move |_| config.get().unwrap_or_else(ModalConfiguration::controlled));
    let check = move |config: &ModalConfiguration| {
        if let Err(err) = validate_for(&WebDocument::new(document()), config) {
            panic!("{err}");
        }
    };
    check(&config.get_untracked());
    Effect::new(move |_| config.with(check));

    let escape = StoredValue::new_local(None::<KeydownGuard<WebDocument>>);
    Effect::new(move |_| {
        let guard = open.get().then(|| {
            KeydownGuard::on_escape(WebDocument::new(document()), move || on_close.run(()))
        });
        escape.update_value(|slot| *slot = guard);
    });
    on_cleanup(move || {
        escape.try_update_value(|slot| *slot = None);
    });

    let content = StoredValue::new(modal_content(children, render));
    let close_component = StoredValue::new(close_component);

    view! {
        <Show when=move || open.get()>
            <ModalPortal mount_id=config.with(|c| c.modal_id.clone())>
                <ModalFrame
                    config=config
                    close_modal=on_close
                    close_component=close_component.get_value()
                    backdrop_style=backdrop_style
                    close_button_style=close_button_style
                >
                    {content
                        .with_value(|content| content.render(ModalChildProps { close_modal: on_close }))}
                </ModalFrame>
            </ModalPortal>
        </Show>
    }
}

use super::controller::CloseHandle;
use leptos::prelude::*;
use std::sync::Arc;

/// Dialog body: either fixed, or built from the close capability `H`.
pub enum Content<H, V> {
    Static(Arc<dyn Fn() -> V + Send + Sync>),
    /// Render-prop form; lets the body close the dialog itself (e.g. after a submit)
    Dynamic(Arc<dyn Fn(H) -> V + Send + Sync>),
}

impl<H, V> Content<H, V> {
    pub fn render(&self, capability: H) -> V {
        match self {
            Content::Static(render) => render(),
            Content::Dynamic(render) => render(capability),
        }
    }
}

impl<H, V> Clone for Content<H, V> {
    fn clone(&self) -> Self {
        match self {
            Content::Static(render) => Content::Static(Arc::clone(render)),
            Content::Dynamic(render) => Content::Dynamic(Arc::clone(render)),
        }
    }
}

/// What a render-prop body receives
#[derive(Clone, Copy)]
pub struct ModalChildProps {
    pub close_modal: Callback<()>,
}

impl From<CloseHandle> for ModalChildProps {
    /// Owned by the current reactive owner: once the projected view is
    /// disposed, `close_modal` no longer reaches the controller.
    fn from(handle: CloseHandle) -> Self {
        let handle = StoredValue::new_local(handle);
        Self {
            close_modal: Callback::new(move |_| {
                handle.try_with_value(CloseHandle::close);
            }),
        }
    }
}

pub type ModalContent = Content<ModalChildProps, AnyView>;

/// Render-prop accepted by the modal components:
/// `render=move |props: ModalChildProps| view! { ... }`
#[derive(Clone)]
pub struct RenderModalContent(Arc<dyn Fn(ModalChildProps) -> AnyView + Send + Sync>);

impl<F, V> From<F> for RenderModalContent
where
    F: Fn(ModalChildProps) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    fn from(render: F) -> Self {
        Self(Arc::new(move |props| render(props).into_any()))
    }
}

/// Pick the body of a modal: the render-prop wins over static children.
pub fn modal_content(
    children: Option<ChildrenFn>,
    render: Option<RenderModalContent>,
) -> ModalContent {
    match (render, children) {
        (Some(RenderModalContent(render)), _) => Content::Dynamic(render),
        (None, Some(children)) => Content::Static(children),
        (None, None) => Content::Static(Arc::new(|| ().into_any())),
    }
}

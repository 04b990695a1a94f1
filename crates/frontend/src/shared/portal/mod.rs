use crate::shared::dom::{DomHost, WebDocument};
use crate::shared::mount_point::{self, MountPoint};
use leptos::portal::Portal;
use leptos::prelude::*;

/// Holds a resolved mount point while content is projected into it.
///
/// The mount point is released on [`deactivate`](Self::deactivate) or drop,
/// whichever comes first.
pub struct PortalProjector<D: DomHost> {
    doc: D,
    mount: Option<MountPoint<D::Node>>,
}

impl<D: DomHost> PortalProjector<D> {
    pub fn activate(doc: D, mount_id: &str) -> Self {
        let mount = mount_point::resolve(&doc, mount_id);
        Self { doc, mount }
    }

    pub fn is_active(&self) -> bool {
        self.mount.is_some()
    }

    pub fn mount_id(&self) -> Option<&str> {
        self.mount.as_ref().map(MountPoint::id)
    }

    pub fn target(&self) -> Option<&D::Node> {
        self.mount.as_ref().map(MountPoint::node)
    }

    /// Render into the mount point; nothing while unresolved.
    pub fn project<V>(&self, render: impl FnOnce(&D::Node) -> V) -> Option<V> {
        self.target().map(render)
    }

    pub fn deactivate(&mut self) {
        if let Some(mount) = self.mount.take() {
            mount_point::release(&self.doc, mount);
        }
    }
}

impl<D: DomHost> Drop for PortalProjector<D> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

/// Renders `children` into the element with `mount_id`, creating it if needed.
///
/// The element is removed again on cleanup if this component created it.
#[component]
pub fn ModalPortal(
    /// Id of the mount point element
    #[prop(into)]
    mount_id: String,
    children: ChildrenFn,
) -> impl IntoView {
    let projector = PortalProjector::activate(WebDocument::new(document()), &mount_id);
    let projected = projector.project(|mount| {
        let mount = mount.clone();
        view! { <Portal mount=mount>{children()}</Portal> }
    });

    let projector = StoredValue::new_local(projector);
    on_cleanup(move || {
        projector.try_update_value(PortalProjector::deactivate);
    });

    projected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dom::fake::FakeDocument;

    #[test]
    fn test_projects_into_resolved_node() {
        let doc = FakeDocument::default();
        let projector = PortalProjector::activate(doc.clone(), "x");

        assert!(projector.is_active());
        assert_eq!(projector.mount_id(), Some("x"));
        let target = projector.project(|node| *node).unwrap();
        assert_eq!(Some(target), doc.element_by_id("x"));
    }

    #[test]
    fn test_drop_releases_created_node() {
        let doc = FakeDocument::default();
        let projector = PortalProjector::activate(doc.clone(), "x");
        assert_eq!(doc.count_with_id("x"), 1);

        drop(projector);
        assert_eq!(doc.count_with_id("x"), 0);
    }

    #[test]
    fn test_deactivate_is_idempotent() {
        let doc = FakeDocument::default();
        let mut projector = PortalProjector::activate(doc.clone(), "x");

        projector.deactivate();
        assert!(!projector.is_active());
        assert_eq!(projector.project(|_| ()), None);

        // a second projector recreates the node; the first must not touch it
        let second = PortalProjector::activate(doc.clone(), "x");
        projector.deactivate();
        drop(projector);
        assert_eq!(doc.count_with_id("x"), 1);
        drop(second);
        assert_eq!(doc.count_with_id("x"), 0);
    }

    #[test]
    fn test_shared_id_keeps_node_until_creator_leaves() {
        let doc = FakeDocument::default();
        let creator = PortalProjector::activate(doc.clone(), "shared");
        let other = PortalProjector::activate(doc.clone(), "shared");
        assert_eq!(creator.target(), other.target());

        drop(other);
        assert_eq!(doc.count_with_id("shared"), 1);
        drop(creator);
        assert_eq!(doc.count_with_id("shared"), 0);
    }
}

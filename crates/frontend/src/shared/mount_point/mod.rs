//! Named mount points for portal content.
//!
//! A mount point is looked up by id and created lazily. Only the resolver that
//! created the node removes it again; a node that already existed (page
//! markup, another modal sharing the id) is left in place.

use crate::shared::dom::DomHost;

/// Marks wrappers created by this crate
pub const WRAPPER_CLASS: &str = "modal-wrapper";
/// Present from creation until the first frame, so entry animations can key off its removal
pub const ANIMATING_CLASS: &str = "animation";
pub const VISIBLE_CLASS: &str = "visible";

#[derive(Debug, Clone, PartialEq)]
pub struct MountPoint<N> {
    id: String,
    node: N,
    system_created: bool,
}

impl<N> MountPoint<N> {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    /// True when this resolution created the node and therefore owns its teardown
    pub fn is_system_created(&self) -> bool {
        self.system_created
    }
}

/// Find the node with `id`, or create it under `<body>`.
///
/// A created node gets [`WRAPPER_CLASS`] and [`ANIMATING_CLASS`]; on the next
/// frame the animating marker is swapped for [`VISIBLE_CLASS`].
pub fn resolve<D: DomHost>(doc: &D, id: &str) -> Option<MountPoint<D::Node>> {
    if let Some(node) = doc.element_by_id(id) {
        return Some(MountPoint {
            id: id.to_string(),
            node,
            system_created: false,
        });
    }

    let node = doc.append_to_body(id, &[WRAPPER_CLASS, ANIMATING_CLASS])?;
    log::debug!("modal: created mount point #{id}");

    let frame_doc = doc.clone();
    let frame_node = node.clone();
    doc.next_frame(Box::new(move || {
        frame_doc.remove_class(&frame_node, ANIMATING_CLASS);
        frame_doc.add_class(&frame_node, VISIBLE_CLASS);
    }));

    Some(MountPoint {
        id: id.to_string(),
        node,
        system_created: true,
    })
}

/// Give up a mount point; removes the node only if `resolve` created it.
pub fn release<D: DomHost>(doc: &D, mount: MountPoint<D::Node>) {
    if mount.system_created {
        log::debug!("modal: removing mount point #{}", mount.id);
        doc.detach(&mount.node);
    }
}

pub mod dom;
pub mod modal;
pub mod modal_frame;
pub mod mount_point;
pub mod portal;

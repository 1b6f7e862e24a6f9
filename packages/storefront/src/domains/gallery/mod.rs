pub mod machine;

pub use machine::{GalleryEffect, GalleryEvent, GalleryMachine, THUMB_PAGE};

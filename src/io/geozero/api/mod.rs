mod wkb;

pub use wkb::{read_wkb, write_wkb};

mod home;

pub use home::{render_home, render_not_found};

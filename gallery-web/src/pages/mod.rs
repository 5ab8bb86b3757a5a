mod gallery;
mod layout;

pub use gallery::Gallery;
pub use layout::AppLayout;

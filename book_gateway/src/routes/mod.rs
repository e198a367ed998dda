pub mod books;
pub mod health_check;
pub mod pages;

pub use books::*;
pub use health_check::*;
pub use pages::*;

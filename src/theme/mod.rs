//! Theme for the essentials page.

mod styles;

pub use styles::GLOBAL_STYLES;

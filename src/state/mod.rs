//! Framework-free view state shared by the page sections.
//!
//! Components hold these inside signals; keeping the transitions here lets
//! them be exercised without a browser.

pub mod filter;
pub mod nav;
pub mod overlay;
pub mod parallax;
pub mod reveal;
pub mod submission;
pub mod toast;

pub use filter::{filter_by_label, Categorized, Category, CategoryFilter};
pub use nav::{is_scrolled, MobileMenu};
pub use overlay::{DetailOverlay, DismissReason};
pub use parallax::{pointer_offset, Shape};
pub use reveal::RevealLatch;
pub use submission::{ContactField, ContactForm, SUBMIT_DELAY};
pub use toast::{ToastId, ToastQueue, TOAST_DURATION};

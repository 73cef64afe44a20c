//! Activity sign-up board: renders the activity list fetched from the
//! server and drives sign-up and participant removal against it.

pub mod controller;
pub mod dom;
pub mod page;
pub mod render;
pub mod settings;
pub mod status;

pub use controller::{ActivityBoard, MutationOutcome, RefreshOutcome};
pub use page::{Page, RemovalTarget, SignupForm};
pub use settings::BoardSettings;

pub mod donor_form;
pub use donor_form::{DonorForm, DonorFormMode};

pub mod donor_table;
pub use donor_table::DonorTable;

pub mod navbar;
pub use navbar::Navbar;

pub mod toast;
pub use toast::ToastHost;

pub mod tooltip;
pub use tooltip::Tooltip;

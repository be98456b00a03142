pub mod add_donor;
pub use add_donor::AddDonor;

pub mod dashboard;
pub use dashboard::Dashboard;

pub mod donors;
pub use donors::Donors;

pub mod edit_donor;
pub use edit_donor::EditDonor;

pub mod home;
pub use home::Home;

mod view;
mod view_model;

pub use view::AdminDashboard;
pub use view_model::AdminDashboardViewModel;

pub mod admin_dashboard;
pub mod booking_form;
pub mod client_dashboard;
pub mod task_list;

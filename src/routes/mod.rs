pub mod dashboard;

pub mod homeworks;

pub mod submissions;

pub mod system;

pub mod frontend;

pub use dashboard::configure_dashboard_routes;
pub use frontend::configure_frontend_routes;
pub use homeworks::configure_homeworks_routes;
pub use submissions::configure_submissions_routes;
pub use system::configure_dev_routes;

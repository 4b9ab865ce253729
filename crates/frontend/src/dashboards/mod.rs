pub mod d400_overview;
pub mod d401_sales_report;

pub use d400_overview::ui::OverviewDashboard;
pub use d401_sales_report::ui::SalesReportDashboard;

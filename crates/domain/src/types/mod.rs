//! Common data types used throughout the application

pub mod equipment;
pub mod erp;
pub mod maintenance;
pub mod staff;
pub mod sync;
pub mod work_order;

pub use equipment::*;
pub use erp::*;
pub use maintenance::*;
pub use staff::*;
pub use sync::*;
pub use work_order::*;

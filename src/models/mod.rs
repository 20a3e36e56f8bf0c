pub mod equipment;
pub mod status;
pub mod task;
pub mod work_type;

pub use equipment::Equipment;
pub use status::Status;
pub use task::Task;
pub use work_type::WorkType;

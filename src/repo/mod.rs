pub mod equipment;
pub mod task;

pub mod human;
pub mod robot;

pub use human::Human;
pub use robot::Robot;

pub mod account;
pub mod class;
pub mod dashboard;
pub mod group;
pub mod login;
pub mod roster;

pub use account::{Account, AccountRequest};
pub use class::{ClassInfo, ClassRequest};
pub use dashboard::DashboardSummary;
pub use group::{Function, Group, GroupFunction, GroupRequest, GroupTotal};
pub use login::{LoginRequest, LoginResponse};
pub use roster::{ClassTotal, StudentClass, StudentClassRequest, TeacherClass, TeacherClassRequest};

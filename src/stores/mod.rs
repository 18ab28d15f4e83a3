pub mod account;
pub mod class;
pub mod dashboard;
pub mod group;
pub mod student_class;
pub mod teacher_class;

pub use account::AccountStore;
pub use class::ClassStore;
pub use dashboard::DashboardStore;
pub use group::GroupStore;
pub use student_class::StudentClassStore;
pub use teacher_class::TeacherClassStore;

/// Paging used when an operation re-fetches the list after a mutation.
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Server message when present, otherwise the operation's own fallback.
pub(crate) fn message_or(message: &str, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message.to_string()
    }
}

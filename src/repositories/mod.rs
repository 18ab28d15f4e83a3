pub mod account;
pub mod class;
pub mod dashboard;
pub mod group;
pub mod login;
pub mod student_class;
pub mod teacher_class;

pub use account::{AccountRepository, HttpAccountRepository};
pub use class::{ClassRepository, HttpClassRepository};
pub use dashboard::{DashboardRepository, HttpDashboardRepository};
pub use group::{GroupRepository, HttpGroupRepository};
pub use login::{HttpLoginRepository, LoginRepository};
pub use student_class::{HttpStudentClassRepository, StudentClassRepository};
pub use teacher_class::{HttpTeacherClassRepository, TeacherClassRepository};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::envelope::Envelope;
use crate::error::ClientError;

/// Converts a raw call result into a typed envelope.
///
/// Transport and payload-decode faults are folded into failed envelopes so
/// every store sees one uniform success/failure shape; only the fatal
/// missing-response fault propagates as an error.
pub(crate) fn unwrap_envelope<T: DeserializeOwned>(
    body: Result<Value, ClientError>,
) -> Result<Envelope<T>, ClientError> {
    match body {
        Ok(value) => match Envelope::from_value(value) {
            Ok(envelope) => Ok(envelope),
            Err(ClientError::Decode(message)) => {
                tracing::error!("response decode failed: {}", message);
                Ok(Envelope::failure(message))
            }
            Err(fatal) => Err(fatal),
        },
        Err(ClientError::Transport(message)) => {
            tracing::error!("transport fault: {}", message);
            Ok(Envelope::failure(message))
        }
        Err(fatal) => Err(fatal),
    }
}

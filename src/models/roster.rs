use serde::{Deserialize, Serialize};

/// A student's membership in a class. Identity is the composite
/// `class_id` + `student_id` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentClass {
    #[serde(rename = "ClassId", alias = "classId", default)]
    pub class_id: String,
    #[serde(rename = "StudentId", alias = "studentId", default)]
    pub student_id: String,
    #[serde(rename = "StudentName", alias = "studentName", default)]
    pub student_name: String,
    #[serde(rename = "StudyStatus", alias = "studyStatus", default)]
    pub study_status: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentClassRequest {
    #[serde(rename = "ClassId")]
    pub class_id: String,
    #[serde(rename = "StudentId")]
    pub student_id: String,
    #[serde(rename = "StudyStatus")]
    pub study_status: i32,
}

/// A teacher's assignment to a class. Identity is the composite
/// `class_id` + `teacher_id` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherClass {
    #[serde(rename = "ClassId", alias = "classId", default)]
    pub class_id: String,
    #[serde(rename = "TeacherId", alias = "teacherId", default)]
    pub teacher_id: String,
    #[serde(rename = "TeacherName", alias = "teacherName", default)]
    pub teacher_name: String,
    #[serde(rename = "Subject", alias = "subject", default)]
    pub subject: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherClassRequest {
    #[serde(rename = "ClassId")]
    pub class_id: String,
    #[serde(rename = "TeacherId")]
    pub teacher_id: String,
    #[serde(rename = "Subject")]
    pub subject: String,
}

/// A class together with its enrolled-student count, as used on the
/// dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassTotal {
    #[serde(rename = "ClassId", alias = "classId", default)]
    pub class_id: String,
    #[serde(rename = "ClassName", alias = "className", default)]
    pub class_name: String,
    #[serde(rename = "TotalStudent", alias = "totalStudent", default)]
    pub total_student: u64,
}

use std::sync::Arc;

use anyhow::anyhow;
use clap::Subcommand;

use crate::cli::{utils, OutputFormat};
use crate::config;
use crate::models::{StudentClassRequest, TeacherClassRequest};
use crate::repositories::{HttpStudentClassRepository, HttpTeacherClassRepository};
use crate::stores::{StudentClassStore, TeacherClassStore};

#[derive(Subcommand)]
pub enum RosterCommands {
    #[command(about = "Student enrollments for a class")]
    Student {
        #[command(subcommand)]
        cmd: StudentCommands,
    },

    #[command(about = "Teacher assignments for a class")]
    Teacher {
        #[command(subcommand)]
        cmd: TeacherCommands,
    },
}

#[derive(Subcommand)]
pub enum StudentCommands {
    #[command(about = "List the students enrolled in a class (paged)")]
    List {
        #[arg(help = "Class id")]
        class_id: String,
        #[arg(long, help = "Page number")]
        page: Option<u32>,
        #[arg(long, help = "Page size")]
        page_size: Option<u32>,
    },

    #[command(about = "Search a class's students by text")]
    Search {
        #[arg(help = "Class id")]
        class_id: String,
        #[arg(help = "Text to search for")]
        text: String,
        #[arg(long, help = "Page number")]
        page: Option<u32>,
        #[arg(long, help = "Page size")]
        page_size: Option<u32>,
    },

    #[command(about = "Show one enrollment")]
    Get {
        #[arg(help = "Class id")]
        class_id: String,
        #[arg(help = "Student id")]
        student_id: String,
    },

    #[command(about = "Enroll a student in a class")]
    Add {
        #[arg(help = "Class id")]
        class_id: String,
        #[arg(help = "Student id")]
        student_id: String,
        #[arg(long, default_value_t = 0, help = "Study status code")]
        status: i32,
    },

    #[command(about = "Update an enrollment's study status")]
    Update {
        #[arg(help = "Class id")]
        class_id: String,
        #[arg(help = "Student id")]
        student_id: String,
        #[arg(long, help = "Study status code")]
        status: i32,
    },

    #[command(about = "Remove a student from a class")]
    Delete {
        #[arg(help = "Class id")]
        class_id: String,
        #[arg(help = "Student id")]
        student_id: String,
    },
}

#[derive(Subcommand)]
pub enum TeacherCommands {
    #[command(about = "List the teachers assigned to a class (paged)")]
    List {
        #[arg(help = "Class id")]
        class_id: String,
        #[arg(long, help = "Page number")]
        page: Option<u32>,
        #[arg(long, help = "Page size")]
        page_size: Option<u32>,
    },

    #[command(about = "Search a class's teachers by text")]
    Search {
        #[arg(help = "Class id")]
        class_id: String,
        #[arg(help = "Text to search for")]
        text: String,
        #[arg(long, help = "Page number")]
        page: Option<u32>,
        #[arg(long, help = "Page size")]
        page_size: Option<u32>,
    },

    #[command(about = "Show one assignment")]
    Get {
        #[arg(help = "Class id")]
        class_id: String,
        #[arg(help = "Teacher id")]
        teacher_id: String,
    },

    #[command(about = "Assign a teacher to a class")]
    Add {
        #[arg(help = "Class id")]
        class_id: String,
        #[arg(help = "Teacher id")]
        teacher_id: String,
        #[arg(long, default_value = "", help = "Subject taught")]
        subject: String,
    },

    #[command(about = "Update an assignment's subject")]
    Update {
        #[arg(help = "Class id")]
        class_id: String,
        #[arg(help = "Teacher id")]
        teacher_id: String,
        #[arg(long, help = "Subject taught")]
        subject: String,
    },

    #[command(about = "Remove a teacher from a class")]
    Delete {
        #[arg(help = "Class id")]
        class_id: String,
        #[arg(help = "Teacher id")]
        teacher_id: String,
    },
}

fn paging(page: Option<u32>, page_size: Option<u32>) -> (u32, u32) {
    let cfg = &config::config().paging;
    (
        page.unwrap_or(cfg.default_page),
        page_size.unwrap_or(cfg.default_page_size),
    )
}

pub async fn handle(cmd: RosterCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        RosterCommands::Student { cmd } => handle_student(cmd, output_format).await,
        RosterCommands::Teacher { cmd } => handle_teacher(cmd, output_format).await,
    }
}

fn student_store() -> anyhow::Result<StudentClassStore> {
    let api = crate::cli::api_client()?;
    Ok(StudentClassStore::new(Arc::new(
        HttpStudentClassRepository::new(api),
    )))
}

fn check_student(store: &StudentClassStore) -> anyhow::Result<()> {
    match &store.error_message {
        Some(message) => Err(anyhow!(message.clone())),
        None => Ok(()),
    }
}

async fn handle_student(cmd: StudentCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let mut store = student_store()?;

    match cmd {
        StudentCommands::List { class_id, page, page_size } => {
            let (page, page_size) = paging(page, page_size);
            store.fetch_entries(&class_id, page, page_size).await;
            check_student(&store)?;
            utils::output_list(
                &output_format,
                "students",
                &store.entries,
                store.total_entries,
                |s| format!("{}  {}  status={}", s.student_id, s.student_name, s.study_status),
            )
        }
        StudentCommands::Search { class_id, text, page, page_size } => {
            let (page, page_size) = paging(page, page_size);
            store.search_entries(&class_id, &text, page, page_size).await;
            check_student(&store)?;
            utils::output_list(
                &output_format,
                "students",
                &store.entries,
                store.total_entries,
                |s| format!("{}  {}  status={}", s.student_id, s.student_name, s.study_status),
            )
        }
        StudentCommands::Get { class_id, student_id } => {
            store.fetch_entry(&class_id, &student_id).await;
            check_student(&store)?;
            match &store.selected_entry {
                Some(entry) => utils::output_record(&output_format, entry),
                None => Err(anyhow!("enrollment not found")),
            }
        }
        StudentCommands::Add { class_id, student_id, status } => {
            let request = StudentClassRequest {
                class_id: class_id.clone(),
                student_id: student_id.clone(),
                study_status: status,
            };
            store.add_entry(&request).await;
            check_student(&store)?;
            utils::output_success(
                &output_format,
                &format!("student {} enrolled in class {}", student_id, class_id),
                None,
            )
        }
        StudentCommands::Update { class_id, student_id, status } => {
            let request = StudentClassRequest {
                class_id: class_id.clone(),
                student_id: student_id.clone(),
                study_status: status,
            };
            store.update_entry(&request).await;
            check_student(&store)?;
            utils::output_success(
                &output_format,
                &format!("enrollment of {} in class {} updated", student_id, class_id),
                None,
            )
        }
        StudentCommands::Delete { class_id, student_id } => {
            store.delete_entry(&class_id, &student_id).await;
            check_student(&store)?;
            utils::output_success(
                &output_format,
                &format!("student {} removed from class {}", student_id, class_id),
                None,
            )
        }
    }
}

fn teacher_store() -> anyhow::Result<TeacherClassStore> {
    let api = crate::cli::api_client()?;
    Ok(TeacherClassStore::new(Arc::new(
        HttpTeacherClassRepository::new(api),
    )))
}

fn check_teacher(store: &TeacherClassStore) -> anyhow::Result<()> {
    match &store.error_message {
        Some(message) => Err(anyhow!(message.clone())),
        None => Ok(()),
    }
}

async fn handle_teacher(cmd: TeacherCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let mut store = teacher_store()?;

    match cmd {
        TeacherCommands::List { class_id, page, page_size } => {
            let (page, page_size) = paging(page, page_size);
            store.fetch_entries(&class_id, page, page_size).await;
            check_teacher(&store)?;
            utils::output_list(
                &output_format,
                "teachers",
                &store.entries,
                store.total_entries,
                |t| format!("{}  {}  {}", t.teacher_id, t.teacher_name, t.subject),
            )
        }
        TeacherCommands::Search { class_id, text, page, page_size } => {
            let (page, page_size) = paging(page, page_size);
            store.search_entries(&class_id, &text, page, page_size).await;
            check_teacher(&store)?;
            utils::output_list(
                &output_format,
                "teachers",
                &store.entries,
                store.total_entries,
                |t| format!("{}  {}  {}", t.teacher_id, t.teacher_name, t.subject),
            )
        }
        TeacherCommands::Get { class_id, teacher_id } => {
            store.fetch_entry(&class_id, &teacher_id).await;
            check_teacher(&store)?;
            match &store.selected_entry {
                Some(entry) => utils::output_record(&output_format, entry),
                None => Err(anyhow!("assignment not found")),
            }
        }
        TeacherCommands::Add { class_id, teacher_id, subject } => {
            let request = TeacherClassRequest {
                class_id: class_id.clone(),
                teacher_id: teacher_id.clone(),
                subject,
            };
            store.add_entry(&request).await;
            check_teacher(&store)?;
            utils::output_success(
                &output_format,
                &format!("teacher {} assigned to class {}", teacher_id, class_id),
                None,
            )
        }
        TeacherCommands::Update { class_id, teacher_id, subject } => {
            let request = TeacherClassRequest {
                class_id: class_id.clone(),
                teacher_id: teacher_id.clone(),
                subject,
            };
            store.update_entry(&request).await;
            check_teacher(&store)?;
            utils::output_success(
                &output_format,
                &format!("assignment of {} to class {} updated", teacher_id, class_id),
                None,
            )
        }
        TeacherCommands::Delete { class_id, teacher_id } => {
            store.delete_entry(&class_id, &teacher_id).await;
            check_teacher(&store)?;
            utils::output_success(
                &output_format,
                &format!("teacher {} removed from class {}", teacher_id, class_id),
                None,
            )
        }
    }
}

use std::path::PathBuf;

use safeschool::api::{StudentApiDoc, TeacherApiDoc};
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
    let dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| ".".to_string()));
    std::fs::create_dir_all(&dir)?;
    std::fs::write(
        dir.join("student_openapi.json"),
        StudentApiDoc::openapi().to_pretty_json()?,
    )?;
    std::fs::write(
        dir.join("teacher_openapi.json"),
        TeacherApiDoc::openapi().to_pretty_json()?,
    )?;
    Ok(())
}

//! Input loading — the job description and numbered CV files on disk.
//!
//! Expected layout: `<dir>/jd.txt` plus any number of `<dir>/cv<N>.txt`.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::errors::AppError;
use crate::evaluation::evaluator::CandidateCv;

pub const JOB_DESCRIPTION_FILE: &str = "jd.txt";

const SAMPLE_JOB_DESCRIPTION: &str = "\
We are looking for an experienced Python developer with at least 3 years of web development experience.

Requirements:
- Python programming experience
- Knowledge of Django or Flask
- Database experience (SQL, PostgreSQL)
- API development experience
- Git version control
- English language skills

Nice to have:
- React or Vue.js
- Docker experience
- AWS or other cloud platform experience
- Test automation

Responsibilities:
- Developing and maintaining web applications
- API development
- Database design and optimization
- Working with the team";

const SAMPLE_CV_STRONG: &str = "\
Janis Berzins
Python Developer

Experience:
Senior Python Developer, Tech Company (2020-present)
- Built web applications with Django and Flask
- Developed REST APIs
- Worked with PostgreSQL and MongoDB
- Used Git for version control
- Automated testing with pytest

Skills:
- Python, Django, Flask
- SQL, PostgreSQL, MongoDB
- REST API, GraphQL
- Git, Docker, AWS
- React (basic)
- English (fluent)

Education:
BSc in Computer Science, University of Latvia";

const SAMPLE_CV_JUNIOR: &str = "\
Anna Liepina
Junior Python Developer

Experience:
Python Developer, Startup Company (2022-present)
- Built web applications with Flask
- Developed simple APIs
- Worked with SQLite databases
- Basic Git usage

Skills:
- Python, Flask
- SQLite
- REST API basics
- Git basics
- English (intermediate)

Education:
BSc in Computer Science, Riga Technical University";

const SAMPLE_CV_FRONTEND: &str = "\
Peteris Ozolins
Front-end Developer

Experience:
Web Developer, Digital Agency (2021-present)
- Built application front-ends with React
- UI/UX design
- Worked with JavaScript, HTML, CSS

Skills:
- JavaScript, React, HTML, CSS
- UI/UX design
- Git
- English (fluent)

Education:
Design and Arts, Art Academy";

/// Writes the sample job description and three sample CVs into `dir`,
/// skipping any file that already exists. Returns the files it created.
pub async fn seed_sample_inputs(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    tokio::fs::create_dir_all(dir).await?;

    let samples = [
        (JOB_DESCRIPTION_FILE, SAMPLE_JOB_DESCRIPTION),
        ("cv1.txt", SAMPLE_CV_STRONG),
        ("cv2.txt", SAMPLE_CV_JUNIOR),
        ("cv3.txt", SAMPLE_CV_FRONTEND),
    ];

    let mut created = Vec::new();
    for (name, contents) in samples {
        let path = dir.join(name);
        if tokio::fs::try_exists(&path).await? {
            continue;
        }
        tokio::fs::write(&path, contents).await?;
        info!("Created sample input {}", path.display());
        created.push(path);
    }
    Ok(created)
}

/// Reads `<dir>/jd.txt`. Nothing can be evaluated without it, so a missing
/// or blank file is an error.
pub async fn load_job_description(dir: &Path) -> Result<String, AppError> {
    let path = dir.join(JOB_DESCRIPTION_FILE);
    let text = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| AppError::InputUnavailable(format!("{}: {e}", path.display())))?;
    if text.trim().is_empty() {
        return Err(AppError::InputUnavailable(format!(
            "{} is empty",
            path.display()
        )));
    }
    Ok(text)
}

/// Loads every `cv<N>.txt` in `dir`, ordered by `N`. Unreadable or blank
/// files are logged and skipped.
pub async fn load_candidates(dir: &Path) -> Result<Vec<CandidateCv>, AppError> {
    let mut numbered = Vec::new();
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| AppError::InputUnavailable(format!("{}: {e}", dir.display())))?;
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        if let Some(number) = name.to_str().and_then(cv_number) {
            numbered.push((number, entry.path()));
        }
    }
    numbered.sort_by_key(|(number, _)| *number);

    let mut candidates = Vec::with_capacity(numbered.len());
    for (number, path) in numbered {
        match tokio::fs::read_to_string(&path).await {
            Ok(text) if text.trim().is_empty() => {
                warn!("Skipping CV {number}: {} is empty", path.display());
            }
            Ok(text) => candidates.push(CandidateCv { number, text }),
            Err(e) => warn!("Skipping CV {number}: cannot read {}: {e}", path.display()),
        }
    }
    Ok(candidates)
}

/// `cv12.txt` → 12. Anything else → None.
fn cv_number(file_name: &str) -> Option<usize> {
    let digits = file_name.strip_prefix("cv")?.strip_suffix(".txt")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

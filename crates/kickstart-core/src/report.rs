//! Next-step instructions printed after generation
//!
//! Pure formatting over the resolved configuration and the bootstrap
//! outcome; no state and no failure modes beyond printing.

use crate::bootstrap::activate_hint;
use crate::config::{ProjectConfig, ProjectType};

/// Commands the user should run next, in order
pub fn next_steps(config: &ProjectConfig, bootstrap_ok: bool) -> Vec<String> {
    let mut steps = vec![format!("cd {}", config.name)];
    steps.push("cp .env.example .env".to_string());

    if config.docker {
        steps.push("docker compose up --build".to_string());
        if config.database == crate::config::Database::Sqlite {
            // the postgres entrypoint migrates on startup; sqlite has no entrypoint
            steps.push("docker compose exec web python manage.py migrate".to_string());
        }
        steps.push("docker compose exec web python manage.py createsuperuser".to_string());
    } else {
        if config.venv && bootstrap_ok {
            steps.push(activate_hint().to_string());
        } else {
            steps.push(format!(
                "{} -m venv venv && {} && pip install -r requirements.txt",
                python_name(),
                activate_hint(),
            ));
        }
        steps.push("python manage.py migrate".to_string());
        steps.push("python manage.py createsuperuser".to_string());
        steps.push("python manage.py runserver".to_string());
    }

    steps
}

/// URLs worth visiting once the dev server is up
pub fn endpoints(config: &ProjectConfig) -> Vec<&'static str> {
    match config.project_type {
        ProjectType::Api => vec![
            "http://127.0.0.1:8000/api/",
            "http://127.0.0.1:8000/admin/",
        ],
        ProjectType::Mvp => vec![
            "http://127.0.0.1:8000/",
            "http://127.0.0.1:8000/admin/",
        ],
    }
}

fn python_name() -> &'static str {
    if cfg!(windows) {
        "python"
    } else {
        "python3"
    }
}

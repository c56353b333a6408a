//! End-to-end generation scenarios against a scratch directory

use kickstart_core::{
    context, plan, validate, write_project, Database, ProjectConfig, ProjectType, ViewStyle,
};
use std::path::Path;
use walkdir::WalkDir;

fn config(
    name: &str,
    project_type: ProjectType,
    views: ViewStyle,
    database: Database,
    docker: bool,
) -> ProjectConfig {
    ProjectConfig {
        name: name.to_string(),
        project_type,
        views,
        database,
        docker,
        venv: false,
    }
}

async fn generate(root: &Path, config: &ProjectConfig) -> Vec<std::path::PathBuf> {
    let plan = plan(config);
    let secret = kickstart_core::secret::generate_secret_key();
    let ctx = context(config, &secret);
    write_project(root, &plan, &ctx).await.unwrap()
}

#[tokio::test]
async fn test_mvp_fbv_sqlite_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("demo");
    let cfg = config("demo", ProjectType::Mvp, ViewStyle::Fbv, Database::Sqlite, false);

    generate(&root, &cfg).await;

    for expected in [
        "manage.py",
        "demo/settings.py",
        "demo/urls.py",
        "core/models.py",
        "core/forms.py",
        "core/templates/core/home.html",
        "static/css/style.css",
        ".env.example",
    ] {
        assert!(root.join(expected).exists(), "missing {expected}");
    }
    assert!(!root.join("Dockerfile").exists());
    assert!(!root.join("core/serializers.py").exists());

    let settings = std::fs::read_to_string(root.join("demo/settings.py")).unwrap();
    assert!(settings.contains("django.db.backends.sqlite3"));
    assert!(!settings.contains("rest_framework"));
    assert!(settings.contains("ROOT_URLCONF = \"demo.urls\""));
    assert!(!settings.contains("{{"));

    let views = std::fs::read_to_string(root.join("core/views.py")).unwrap();
    assert!(views.contains("def home(request):"));
    assert!(views.contains("\"core/home.html\""));
}

#[tokio::test]
async fn test_api_cbv_postgres_docker_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("demo");
    let cfg = config(
        "demo",
        ProjectType::Api,
        ViewStyle::Cbv,
        Database::Postgresql,
        true,
    );

    generate(&root, &cfg).await;

    for expected in [
        "core/serializers.py",
        "Dockerfile",
        "docker-compose.yml",
        "entrypoint.sh",
        ".dockerignore",
    ] {
        assert!(root.join(expected).exists(), "missing {expected}");
    }

    // MVP-only files must not leak into API projects
    assert!(!root.join("core/forms.py").exists());
    assert!(!root.join("core/templates").exists());

    let compose = std::fs::read_to_string(root.join("docker-compose.yml")).unwrap();
    assert!(compose.contains("web:"));
    assert!(compose.contains("db:"));
    assert!(compose.contains("condition: service_healthy"));

    let settings = std::fs::read_to_string(root.join("demo/settings.py")).unwrap();
    assert!(settings.contains("rest_framework"));
    assert!(settings.contains("corsheaders.middleware.CorsMiddleware"));
    assert!(settings.contains("django.db.backends.postgresql"));

    let requirements = std::fs::read_to_string(root.join("requirements.txt")).unwrap();
    assert!(requirements.contains("djangorestframework"));
    assert!(requirements.contains("psycopg2-binary"));
    assert!(requirements.contains("gunicorn"));

    let urls = std::fs::read_to_string(root.join("core/urls.py")).unwrap();
    assert!(urls.contains("DefaultRouter"));
}

#[tokio::test]
async fn test_docker_sqlite_has_no_entrypoint() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("demo");
    let cfg = config("demo", ProjectType::Mvp, ViewStyle::Fbv, Database::Sqlite, true);

    generate(&root, &cfg).await;

    assert!(root.join("Dockerfile").exists());
    assert!(!root.join("entrypoint.sh").exists());

    let dockerfile = std::fs::read_to_string(root.join("Dockerfile")).unwrap();
    assert!(!dockerfile.contains("ENTRYPOINT"));
    assert!(!dockerfile.contains("libpq"));
}

#[tokio::test]
async fn test_every_written_path_stays_under_root() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("demo");
    let cfg = config(
        "demo",
        ProjectType::Api,
        ViewStyle::Fbv,
        Database::Postgresql,
        true,
    );

    let written = generate(&root, &cfg).await;
    for path in &written {
        assert!(path.starts_with(&root), "{} escaped the root", path.display());
    }

    // nothing on disk outside the project root either
    for entry in WalkDir::new(dir.path()) {
        let entry = entry.unwrap();
        assert!(entry.path().starts_with(dir.path()));
        if entry.path() != dir.path() {
            assert!(entry.path().starts_with(&root));
        }
    }
}

#[tokio::test]
async fn test_secret_keys_differ_between_generations() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_a = config("one", ProjectType::Mvp, ViewStyle::Fbv, Database::Sqlite, false);
    let cfg_b = config("two", ProjectType::Mvp, ViewStyle::Fbv, Database::Sqlite, false);

    generate(&dir.path().join("one"), &cfg_a).await;
    generate(&dir.path().join("two"), &cfg_b).await;

    let env_a = std::fs::read_to_string(dir.path().join("one/.env.example")).unwrap();
    let env_b = std::fs::read_to_string(dir.path().join("two/.env.example")).unwrap();

    let key = |env: &str| -> String {
        env.lines()
            .find_map(|l| l.strip_prefix("SECRET_KEY="))
            .unwrap()
            .to_string()
    };
    let (key_a, key_b) = (key(&env_a), key(&env_b));
    assert_eq!(key_a.len(), 50);
    assert_eq!(key_b.len(), 50);
    assert_ne!(key_a, key_b);
}

#[tokio::test]
async fn test_existing_directory_rejected_without_touching_it() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("demo");
    let cfg = config("demo", ProjectType::Mvp, ViewStyle::Fbv, Database::Sqlite, false);

    generate(&root, &cfg).await;
    let before: Vec<_> = WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .map(|e| e.unwrap().path().to_path_buf())
        .collect();

    // second run must fail validation before anything is written
    assert!(validate::validate_target(&root).is_err());

    let after: Vec<_> = WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .map(|e| e.unwrap().path().to_path_buf())
        .collect();
    assert_eq!(before, after);
}
